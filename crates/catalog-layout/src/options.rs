use crate::constants::{
    DEFAULT_COLS, DEFAULT_CURRENCY_SYMBOL, DEFAULT_MARGIN_PT, DEFAULT_ROWS, MIN_CELL_SIZE_PT,
};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard paper sizes, in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
    Custom {
        width_pt: f32,
        height_pt: f32,
    },
}

impl PaperSize {
    pub fn page_size(self) -> PageSize {
        match self {
            PaperSize::A4 => PageSize::new(595.0, 842.0),
            PaperSize::A5 => PageSize::new(420.0, 595.0),
            PaperSize::Letter => PageSize::new(612.0, 792.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => PageSize::new(width_pt, height_pt),
        }
    }
}

/// Page dimensions in points, fixed for a whole document
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PaperSize::A4.page_size()
    }
}

/// Grid of product cells on a page, inset by `margin` on every edge
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    /// Margin in points, applied to all four page edges
    pub margin: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            margin: DEFAULT_MARGIN_PT,
        }
    }
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize, margin: f32) -> Self {
        Self { rows, cols, margin }
    }

    /// Cells on one page; saturates for grids `validate` rejects
    pub fn cells_per_page(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check the grid can be laid out on `page`
    pub fn validate(&self, page: PageSize) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CatalogError::Config(format!(
                "Grid must have at least one row and one column (got {}x{})",
                self.rows, self.cols
            )));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(CatalogError::Config(format!(
                "Grid of {}x{} cells is too large",
                self.rows, self.cols
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(CatalogError::Config(format!(
                "Margin must be a non-negative number of points (got {})",
                self.margin
            )));
        }
        if !(page.width.is_finite() && page.height.is_finite())
            || page.width <= 0.0
            || page.height <= 0.0
        {
            return Err(CatalogError::Config(format!(
                "Page size must be positive (got {}x{})",
                page.width, page.height
            )));
        }
        if page.width <= 2.0 * self.margin || page.height <= 2.0 * self.margin {
            return Err(CatalogError::Config(format!(
                "Margin of {}pt leaves no room on a {}x{}pt page",
                self.margin, page.width, page.height
            )));
        }

        let cell_width = (page.width - 2.0 * self.margin) / self.cols as f32;
        let cell_height = (page.height - 2.0 * self.margin) / self.rows as f32;
        if cell_width < MIN_CELL_SIZE_PT || cell_height < MIN_CELL_SIZE_PT {
            return Err(CatalogError::Config(format!(
                "Grid of {}x{} leaves {:.1}x{:.1}pt cells, below the {}pt minimum",
                self.rows, self.cols, cell_width, cell_height, MIN_CELL_SIZE_PT
            )));
        }
        Ok(())
    }
}

/// How transparent logo pixels are treated when sampling brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlphaPolicy {
    /// Blend every pixel over white before averaging
    #[default]
    CompositeOverWhite,
    /// Use the raw RGB channels as if the logo were opaque
    Ignore,
}

/// Styling rules for a catalog build
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogOptions {
    pub paper_size: PaperSize,
    pub grid: GridSpec,
    /// Glyph printed in front of every price
    pub currency_symbol: String,
    pub alpha_policy: AlphaPolicy,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            grid: GridSpec::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            alpha_policy: AlphaPolicy::default(),
        }
    }
}

impl CatalogOptions {
    pub fn page_size(&self) -> PageSize {
        self.paper_size.page_size()
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.grid.validate(self.page_size())
    }
}
