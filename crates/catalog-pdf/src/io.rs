//! Image and document file I/O

use crate::types::*;
use catalog_layout::Raster;
use std::path::Path;
use std::sync::Arc;

/// Read and decode an image file into an RGBA raster
pub async fn load_image(path: impl AsRef<Path>) -> Result<Raster> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;

    let decoded = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes).map(|image| image.into_rgba8())
    })
    .await?;

    let image = decoded.map_err(|source| RenderError::Decode {
        path: path.clone(),
        source,
    })?;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Arc::new(image))
}

/// Write rendered document bytes
pub async fn save_pdf(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, &bytes).await?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
