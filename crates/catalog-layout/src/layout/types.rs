//! Layout data types
//!
//! These types sit between pagination and page composition. All positions
//! use a top-left origin with y growing downward, in points.

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The drawing rectangle of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellBox {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CellBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Where one product row is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Product page index (0 = first page after the cover)
    pub page_index: usize,
    /// Row-major index of the cell within its page
    pub cell_index: usize,
    pub position: GridPosition,
    pub cell_box: CellBox,
}

impl CellPlacement {
    /// True for the first cell of a page, where a fresh page begins
    pub fn starts_page(&self) -> bool {
        self.cell_index == 0
    }
}
