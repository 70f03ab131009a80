//! Grid pagination
//!
//! Product rows fill the cells of a page in row-major order; when a page is
//! full the next row starts a new page at cell 0.

use crate::options::{GridSpec, PageSize};
use crate::types::ProductRow;

use super::{CellBox, CellPlacement, GridPosition};

// =============================================================================
// Pagination
// =============================================================================

/// Place every row into a page and cell, in input order.
pub fn paginate(rows: &[ProductRow], page: PageSize, grid: GridSpec) -> Vec<CellPlacement> {
    place_cells(rows.len(), page, grid)
}

/// Placements for `count` consecutive entries.
///
/// Returns an empty list for a grid without cells.
pub fn place_cells(count: usize, page: PageSize, grid: GridSpec) -> Vec<CellPlacement> {
    let cells_per_page = grid.cells_per_page();
    if cells_per_page == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|i| {
            let cell_index = i % cells_per_page;
            let position = grid_position(cell_index, grid);
            CellPlacement {
                page_index: i / cells_per_page,
                cell_index,
                position,
                cell_box: cell_box(page, grid, position),
            }
        })
        .collect()
}

/// Number of product pages needed for `count` entries
pub fn page_count(count: usize, grid: GridSpec) -> usize {
    let cells_per_page = grid.cells_per_page();
    if cells_per_page == 0 {
        return 0;
    }
    count.div_ceil(cells_per_page)
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Row-major grid position of a cell index
pub fn grid_position(cell_index: usize, grid: GridSpec) -> GridPosition {
    GridPosition::new(cell_index / grid.cols, cell_index % grid.cols)
}

/// Width and height of every cell
pub fn cell_size(page: PageSize, grid: GridSpec) -> (f32, f32) {
    let usable_width = page.width - 2.0 * grid.margin;
    let usable_height = page.height - 2.0 * grid.margin;
    (
        usable_width / grid.cols as f32,
        usable_height / grid.rows as f32,
    )
}

/// Bounding box of the cell at `pos`
pub fn cell_box(page: PageSize, grid: GridSpec, pos: GridPosition) -> CellBox {
    let (cell_width, cell_height) = cell_size(page, grid);
    CellBox::new(
        grid.margin + pos.col as f32 * cell_width,
        grid.margin + pos.row as f32 * cell_height,
        cell_width,
        cell_height,
    )
}

// =============================================================================
// Tests
// =============================================================================
