//! Page layout calculation
//!
//! This module handles all the geometric calculations for catalog pages:
//! - Grid pagination (which page and cell each product row lands in)
//! - Cell geometry (cell bounding boxes within the page margins)
//! - Page composition (draw instructions for cells, dividers and the cover)

mod compose;
mod grid;
mod types;

pub use compose::*;
pub use grid::*;
pub use types::*;
