//! PDF output
//!
//! Each catalog page becomes one PDF page. Draw instructions use a top-left
//! origin; PDF user space starts at the bottom-left, so every y coordinate
//! is flipped against the page height.

use crate::io::save_pdf;
use crate::types::{RenderError, Result};
use catalog_layout::constants::DIVIDER_LINE_WIDTH;
use catalog_layout::metrics::Font;
use catalog_layout::{Catalog, DrawInstruction, PageSize, Raster, TextAlign};
use printpdf::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// File name offered for the finished catalog
pub const DEFAULT_OUTPUT_NAME: &str = "product-catalog.pdf";

/// Document title embedded in the PDF metadata
pub const DEFAULT_TITLE: &str = "Product Catalog";

/// Render `catalog` and write it to `output_path`.
pub async fn generate_pdf(catalog: &Catalog, output_path: impl AsRef<Path>) -> Result<()> {
    let catalog = catalog.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes =
        tokio::task::spawn_blocking(move || render_pdf_bytes(&catalog, DEFAULT_TITLE)).await??;

    save_pdf(bytes, &output_path).await
}

/// Render `catalog` into PDF bytes, one page per catalog page.
pub fn render_pdf_bytes(catalog: &Catalog, title: &str) -> Result<Vec<u8>> {
    if catalog.pages.is_empty() {
        return Err(RenderError::Pdf("Catalog has no pages".to_string()));
    }

    let mut doc = PdfDocument::new(title);
    let mut images = ImageCache::default();
    let page_size = catalog.page_size;
    let text_color = contrasting_text_color(catalog.background);

    for instructions in &catalog.pages {
        let mut ops = Vec::new();
        for instruction in instructions {
            append_ops(
                &mut ops,
                &mut doc,
                &mut images,
                instruction,
                page_size,
                &text_color,
            );
        }

        doc.pages.push(PdfPage::new(
            Mm::from(Pt(page_size.width)),
            Mm::from(Pt(page_size.height)),
            ops,
        ));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF writer reported {} warnings", warnings.len());
    }

    log::info!(
        "Rendered {} pages ({} distinct images)",
        catalog.pages.len(),
        images.len()
    );
    Ok(bytes)
}

/// Text and lines are drawn white on dark backgrounds and near-black on
/// light ones.
fn contrasting_text_color(background: catalog_layout::Color) -> Color {
    if background.brightness() < 128.0 {
        Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
    } else {
        Color::Rgb(Rgb::new(0.1, 0.1, 0.1, None))
    }
}

fn to_pdf_color(color: catalog_layout::Color) -> Color {
    let (r, g, b) = color.to_unit_rgb();
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn point(x: f32, y: f32, page: PageSize) -> Point {
    Point {
        x: Pt(x),
        y: Pt(page.height - y),
    }
}

fn line_point(x: f32, y: f32, page: PageSize) -> LinePoint {
    LinePoint {
        p: point(x, y, page),
        bezier: false,
    }
}

fn append_ops(
    ops: &mut Vec<Op>,
    doc: &mut PdfDocument,
    images: &mut ImageCache,
    instruction: &DrawInstruction,
    page: PageSize,
    text_color: &Color,
) {
    match instruction {
        DrawInstruction::FillBackground(color) => {
            ops.push(Op::SetFillColor {
                col: to_pdf_color(*color),
            });
            ops.push(Op::DrawPolygon {
                polygon: Polygon {
                    rings: vec![PolygonRing {
                        points: vec![
                            line_point(0.0, 0.0, page),
                            line_point(page.width, 0.0, page),
                            line_point(page.width, page.height, page),
                            line_point(0.0, page.height, page),
                        ],
                    }],
                    mode: PaintMode::Fill,
                    winding_order: WindingOrder::NonZero,
                },
            });
        }

        DrawInstruction::DrawLine { x1, y1, x2, y2 } => {
            ops.push(Op::SetOutlineColor {
                col: text_color.clone(),
            });
            ops.push(Op::SetOutlineThickness {
                pt: Pt(DIVIDER_LINE_WIDTH),
            });
            ops.push(Op::DrawLine {
                line: Line {
                    points: vec![line_point(*x1, *y1, page), line_point(*x2, *y2, page)],
                    is_closed: false,
                },
            });
        }

        DrawInstruction::DrawText {
            text,
            x,
            y,
            font_size,
            bold,
            align,
        } => {
            let metrics = Font::for_weight(*bold);
            let font = if *bold {
                BuiltinFont::HelveticaBold
            } else {
                BuiltinFont::Helvetica
            };
            let width = metrics.text_width(text, *font_size);
            let left = match align {
                TextAlign::Left => *x,
                TextAlign::Center => *x - width / 2.0,
                TextAlign::Right => *x - width,
            };

            ops.push(Op::StartTextSection);
            ops.push(Op::SetFillColor {
                col: text_color.clone(),
            });
            ops.push(Op::SetTextCursor {
                pos: point(left, *y, page),
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                font,
                size: Pt(*font_size),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.clone())],
                font,
            });
            ops.push(Op::EndTextSection);
        }

        DrawInstruction::DrawImage {
            image,
            x,
            y,
            width,
            height,
        } => {
            if image.width() == 0 || image.height() == 0 {
                log::warn!("Skipping empty image at ({}, {})", x, y);
                return;
            }

            let id = images.get_or_insert(doc, image);
            // At 72 dpi one pixel is one point, so the scale is the box size
            // over the pixel size
            ops.push(Op::UseXobject {
                id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(*x)),
                    translate_y: Some(Pt(page.height - *y - *height)),
                    scale_x: Some(*width / image.width() as f32),
                    scale_y: Some(*height / image.height() as f32),
                    dpi: Some(72.0),
                    ..Default::default()
                },
            });
        }
    }
}

/// Embeds each distinct raster once per document
#[derive(Default)]
struct ImageCache {
    /// Keyed by raster address; clones of one `Arc` share an entry
    ids: HashMap<usize, XObjectId>,
}

impl ImageCache {
    fn get_or_insert(&mut self, doc: &mut PdfDocument, raster: &Raster) -> XObjectId {
        self.ids
            .entry(Arc::as_ptr(raster) as usize)
            .or_insert_with(|| {
                doc.add_image(&RawImage {
                    pixels: RawImageData::U8(raster.as_raw().clone()),
                    width: raster.width() as usize,
                    height: raster.height() as usize,
                    data_format: RawImageFormat::RGBA8,
                    tag: Vec::new(),
                })
            })
            .clone()
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}
