//! Layout engine for product catalogs
//!
//! Derives a page background from the company logo and lays products out on
//! a cover page plus a grid of product pages, producing renderer-agnostic
//! draw instructions.

mod builder;
pub mod color;
pub mod constants;
mod flatten;
pub mod layout;
pub mod metrics;
mod options;
mod stats;
mod types;

pub use builder::build_catalog;
pub use flatten::flatten;
pub use layout::{CellBox, CellPlacement, GridPosition, paginate};
pub use options::*;
pub use stats::{calculate_statistics, calculate_statistics_for_counts};
pub use types::*;
