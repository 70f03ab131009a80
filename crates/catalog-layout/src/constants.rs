//! Shared constants for catalog layout
//!
//! This module centralizes the magic numbers of the cover and product page
//! layouts. All lengths are in points.

// =============================================================================
// Color Sampling
// =============================================================================

/// Side of the square the logo is downsampled to before averaging
pub const SAMPLE_SIZE: u32 = 40;

/// Logos brighter than this get the dark background
pub const BRIGHTNESS_THRESHOLD: f32 = 180.0;

// =============================================================================
// Product Grid
// =============================================================================

pub const DEFAULT_ROWS: usize = 2;
pub const DEFAULT_COLS: usize = 2;
pub const DEFAULT_MARGIN_PT: f32 = 40.0;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Smallest cell edge a grid may divide the page into
pub const MIN_CELL_SIZE_PT: f32 = 36.0;

/// Stroke width for grid divider lines
pub const DIVIDER_LINE_WIDTH: f32 = 1.0;

// =============================================================================
// Cover Page
// =============================================================================

/// Logo box side as a fraction of the page width
pub const COVER_LOGO_WIDTH_RATIO: f32 = 0.5;

/// The logo is raised this far above the vertical center, and the title sits
/// this far below the logo
pub const COVER_TITLE_GAP: f32 = 60.0;

pub const COVER_TITLE_FONT_SIZE: f32 = 36.0;

// =============================================================================
// Product Cell
// =============================================================================

pub const NAME_FONT_SIZE: f32 = 14.0;

/// Baseline offset of the product name from the cell top
pub const NAME_BASELINE_OFFSET: f32 = 14.0;

/// Product image side as a fraction of the cell width
pub const IMAGE_WIDTH_RATIO: f32 = 0.55;

/// Offset of the product image's top edge from the cell top
pub const IMAGE_TOP_OFFSET: f32 = 24.0;

pub const PRICE_FONT_SIZE: f32 = 12.0;

/// Price baseline offset below the image's nominal bottom
pub const PRICE_BASELINE_OFFSET: f32 = 50.0;

pub const PRICE_LABEL: &str = "Price: ";

pub const DESCRIPTION_FONT_SIZE: f32 = 10.0;

/// First description baseline offset below the image's nominal bottom
pub const DESCRIPTION_BASELINE_OFFSET: f32 = 70.0;

/// Total horizontal inset of wrapped description text within a cell
pub const DESCRIPTION_INSET: f32 = 20.0;

/// Baseline-to-baseline distance as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;
