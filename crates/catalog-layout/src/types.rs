use image::RgbaImage;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("A company logo is required")]
    MissingLogo,
    #[error("Company name must not be blank")]
    BlankCompanyName,
    #[error("No products to lay out")]
    NoProducts,
    #[error("Product #{index}: {reason}")]
    InvalidProduct { index: usize, reason: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A decoded RGBA raster, shared between the input records and the
/// draw instructions that reference it.
pub type Raster = Arc<RgbaImage>;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Background used behind bright logos
    pub const DARK_TEAL: Color = Color::new(0, 77, 64);
    /// Background used behind dark logos
    pub const LIGHT_GREY: Color = Color::new(242, 242, 242);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceptual brightness (ITU-R BT.601 weights), 0.0..=255.0
    pub fn brightness(self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Channels scaled to 0.0..=1.0, the form PDF color operators take
    pub fn to_unit_rgb(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// One product as supplied by the caller, possibly with several images
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub images: Vec<Raster>,
    pub price: String,
    pub description: String,
}

impl ProductInput {
    /// Check the fields the layout depends on.
    ///
    /// Returns a human readable reason on failure; callers attach the
    /// position of the product themselves.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be blank".to_string());
        }
        if self.price.trim().is_empty() {
            return Err(format!("price for \"{}\" must not be blank", self.name));
        }
        if self.images.is_empty() {
            return Err(format!("\"{}\" has no images", self.name));
        }
        Ok(())
    }
}

/// A single-image product entry, the unit placed into one grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: Raster,
}

/// Horizontal anchoring of a text run relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A renderer-agnostic drawing command.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// page and y growing downward. Text `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    FillBackground(Color),
    DrawLine {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    DrawText {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        bold: bool,
        align: TextAlign,
    },
    DrawImage {
        image: Raster,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Ordered draw instructions for one physical page
pub type Page = Vec<DrawInstruction>;

/// Everything the engine needs for one build
#[derive(Debug, Clone, Default)]
pub struct CatalogInput {
    pub company_name: String,
    pub logo: Option<Raster>,
    pub products: Vec<ProductInput>,
}

/// A fully laid out catalog: the cover followed by the product pages
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub page_size: crate::PageSize,
    pub background: Color,
    pub pages: Vec<Page>,
}

impl Catalog {
    pub fn cover(&self) -> Option<&Page> {
        self.pages.first()
    }

    pub fn product_pages(&self) -> &[Page] {
        self.pages.get(1..).unwrap_or(&[])
    }
}

/// Page and cell counts for a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStatistics {
    pub products: usize,
    pub rows: usize,
    pub cells_per_page: usize,
    pub product_pages: usize,
    /// Product pages plus the cover
    pub total_pages: usize,
    /// Unoccupied cells on the last product page
    pub empty_cells: usize,
}
