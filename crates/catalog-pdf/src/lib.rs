//! Collaborators around the catalog layout engine: image decoding, CSV
//! manifests, and PDF output.

mod io;
mod manifest;
mod pdf;
mod types;

pub use io::{load_image, save_pdf};
pub use manifest::{IMAGE_SEPARATOR, ManifestEntry, load_manifest, parse_manifest, read_manifest};
pub use pdf::{DEFAULT_OUTPUT_NAME, DEFAULT_TITLE, generate_pdf, render_pdf_bytes};
pub use types::*;
