//! CSV product manifests
//!
//! A manifest has a header row naming the columns `name`, `price`,
//! `description` and `images`, in any order. `images` lists one or more
//! image paths separated by `;`; relative paths are resolved against the
//! manifest's directory. The `description` column may be omitted.

use crate::io::load_image;
use crate::types::*;
use catalog_layout::ProductInput;
use std::path::{Path, PathBuf};

/// Separator between image paths in the `images` column
pub const IMAGE_SEPARATOR: char = ';';

/// One manifest row before its images are decoded
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    /// 1-based position among the data records
    pub record: usize,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_paths: Vec<PathBuf>,
}

/// Read and parse a manifest without touching the images it lists.
pub async fn read_manifest(path: impl AsRef<Path>) -> Result<Vec<ManifestEntry>> {
    let path = path.as_ref();
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let contents = tokio::fs::read_to_string(path).await?;
    tokio::task::spawn_blocking(move || parse_manifest(&contents, &base_dir)).await?
}

/// Load a manifest and decode every image it references.
pub async fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<ProductInput>> {
    let path = path.as_ref();
    let entries = read_manifest(path).await?;

    let mut products = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut images = Vec::with_capacity(entry.image_paths.len());
        for image_path in &entry.image_paths {
            images.push(load_image(image_path).await?);
        }

        let product = ProductInput {
            name: entry.name,
            images,
            price: entry.price,
            description: entry.description,
        };
        product.validate().map_err(|reason| RenderError::Manifest {
            record: entry.record,
            reason,
        })?;
        products.push(product);
    }

    log::info!(
        "Loaded {} products from {}",
        products.len(),
        path.display()
    );
    Ok(products)
}

/// Parse manifest text, resolving image paths against `base_dir`.
///
/// Fields are trimmed. Rows are checked for the fields the catalog needs
/// before any image is read.
pub fn parse_manifest(contents: &str, base_dir: &Path) -> Result<Vec<ManifestEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    };

    let name_col = column("name").ok_or_else(|| missing_column("name"))?;
    let price_col = column("price").ok_or_else(|| missing_column("price"))?;
    let images_col = column("images").ok_or_else(|| missing_column("images"))?;
    let description_col = column("description");

    let mut entries = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let field = |col: usize| record.get(col).unwrap_or("").to_string();

        let entry = ManifestEntry {
            record: i + 1,
            name: field(name_col),
            price: field(price_col),
            description: description_col.map(field).unwrap_or_default(),
            image_paths: split_image_paths(&field(images_col), base_dir),
        };
        check_entry(&entry)?;
        entries.push(entry);
    }

    Ok(entries)
}

fn split_image_paths(field: &str, base_dir: &Path) -> Vec<PathBuf> {
    field
        .split(IMAGE_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| base_dir.join(part))
        .collect()
}

fn check_entry(entry: &ManifestEntry) -> Result<()> {
    let reason = if entry.name.is_empty() {
        "name must not be blank".to_string()
    } else if entry.price.is_empty() {
        format!("price for \"{}\" must not be blank", entry.name)
    } else if entry.image_paths.is_empty() {
        format!("\"{}\" has no images", entry.name)
    } else {
        return Ok(());
    };

    Err(RenderError::Manifest {
        record: entry.record,
        reason,
    })
}

fn missing_column(name: &str) -> RenderError {
    RenderError::Manifest {
        record: 0,
        reason: format!("missing \"{}\" column in header", name),
    }
}
