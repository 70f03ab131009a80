//! Page composition
//!
//! Turns cell boxes and product rows into draw instructions. Every page
//! starts with its background fill; product pages then get their divider
//! lines, and cell content is appended last so it paints over both.

use crate::constants::*;
use crate::metrics::{Font, line_height, wrap_text};
use crate::options::{GridSpec, PageSize};
use crate::types::{Color, DrawInstruction, Page, ProductRow, Raster, TextAlign};
use std::sync::Arc;

use super::{CellBox, cell_size};

// =============================================================================
// Cover Page
// =============================================================================

/// Square box the logo is stretched into on the cover
pub fn cover_logo_box(page: PageSize) -> CellBox {
    let size = page.width * COVER_LOGO_WIDTH_RATIO;
    CellBox::new(
        (page.width - size) / 2.0,
        (page.height - size) / 2.0 - COVER_TITLE_GAP,
        size,
        size,
    )
}

/// Compose the cover: background, logo, then the company name below it.
///
/// The logo is scaled into a square regardless of its aspect ratio.
pub fn compose_cover(
    page: PageSize,
    background: Color,
    logo: &Raster,
    company_name: &str,
) -> Page {
    let logo_box = cover_logo_box(page);

    vec![
        DrawInstruction::FillBackground(background),
        DrawInstruction::DrawImage {
            image: Arc::clone(logo),
            x: logo_box.x,
            y: logo_box.y,
            width: logo_box.width,
            height: logo_box.height,
        },
        DrawInstruction::DrawText {
            text: company_name.to_string(),
            x: page.width / 2.0,
            y: logo_box.bottom() + COVER_TITLE_GAP,
            font_size: COVER_TITLE_FONT_SIZE,
            bold: true,
            align: TextAlign::Center,
        },
    ]
}

// =============================================================================
// Product Pages
// =============================================================================

/// Start a product page: background fill followed by the divider lines.
pub fn compose_page_chrome(page: PageSize, grid: GridSpec, background: Color) -> Page {
    let mut ops = vec![DrawInstruction::FillBackground(background)];
    ops.extend(divider_lines(page, grid));
    ops
}

/// Lines along every inner cell boundary, spanning the margin box.
///
/// With a 2x2 grid these are the page's vertical and horizontal center lines.
pub fn divider_lines(page: PageSize, grid: GridSpec) -> Vec<DrawInstruction> {
    let (cell_width, cell_height) = cell_size(page, grid);
    let margin = grid.margin;

    let vertical = (1..grid.cols).map(|col| {
        let x = margin + col as f32 * cell_width;
        DrawInstruction::DrawLine {
            x1: x,
            y1: margin,
            x2: x,
            y2: page.height - margin,
        }
    });

    let horizontal = (1..grid.rows).map(|row| {
        let y = margin + row as f32 * cell_height;
        DrawInstruction::DrawLine {
            x1: margin,
            y1: y,
            x2: page.width - margin,
            y2: y,
        }
    });

    vertical.chain(horizontal).collect()
}

/// Side of the square product image for a cell
pub fn product_image_size(cell: &CellBox) -> f32 {
    cell.width * IMAGE_WIDTH_RATIO
}

/// Maximum width of a wrapped description line in a cell
pub fn description_width(cell: &CellBox) -> f32 {
    cell.width - DESCRIPTION_INSET
}

/// The price line exactly as printed
pub fn price_label(price: &str, currency_symbol: &str) -> String {
    format!("{}{}{}", PRICE_LABEL, currency_symbol, price)
}

/// Compose one product cell: name, image, price, and wrapped description.
pub fn compose_cell(
    cell: &CellBox,
    row: &ProductRow,
    currency_symbol: &str,
) -> Vec<DrawInstruction> {
    let center_x = cell.center_x();
    let image_size = product_image_size(cell);

    let mut ops = vec![
        DrawInstruction::DrawText {
            text: row.name.clone(),
            x: center_x,
            y: cell.y + NAME_BASELINE_OFFSET,
            font_size: NAME_FONT_SIZE,
            bold: true,
            align: TextAlign::Center,
        },
        DrawInstruction::DrawImage {
            image: Arc::clone(&row.image),
            x: center_x - image_size / 2.0,
            y: cell.y + IMAGE_TOP_OFFSET,
            width: image_size,
            height: image_size,
        },
        DrawInstruction::DrawText {
            text: price_label(&row.price, currency_symbol),
            x: center_x,
            y: cell.y + image_size + PRICE_BASELINE_OFFSET,
            font_size: PRICE_FONT_SIZE,
            bold: false,
            align: TextAlign::Center,
        },
    ];

    let description = row.description.trim();
    if !description.is_empty() {
        let first_baseline = cell.y + image_size + DESCRIPTION_BASELINE_OFFSET;
        let step = line_height(DESCRIPTION_FONT_SIZE);
        let lines = wrap_text(
            description,
            Font::Helvetica,
            DESCRIPTION_FONT_SIZE,
            description_width(cell),
        );

        // Blank lines keep their slot as paragraph spacing but draw nothing
        ops.extend(
            lines
                .into_iter()
                .enumerate()
                .filter(|(_, line)| !line.is_empty())
                .map(|(i, line)| DrawInstruction::DrawText {
                    text: line,
                    x: center_x,
                    y: first_baseline + i as f32 * step,
                    font_size: DESCRIPTION_FONT_SIZE,
                    bold: false,
                    align: TextAlign::Center,
                }),
        );
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn a4() -> PageSize {
        PageSize::new(595.0, 842.0)
    }

    fn raster() -> Raster {
        Arc::new(RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255])))
    }

    fn row(description: &str) -> ProductRow {
        ProductRow {
            name: "Teapot".to_string(),
            price: "1,299.00".to_string(),
            description: description.to_string(),
            image: raster(),
        }
    }

    fn texts(ops: &[DrawInstruction]) -> Vec<&str> {
        ops.iter()
            .filter_map(|op| match op {
                DrawInstruction::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_cover_logo_box() {
        let logo_box = cover_logo_box(a4());
        assert_eq!(logo_box.width, 297.5);
        assert_eq!(logo_box.height, 297.5);
        assert_eq!(logo_box.x, 148.75);
        assert_eq!(logo_box.y, (842.0 - 297.5) / 2.0 - 60.0);
    }

    #[test]
    fn test_cover_instructions() {
        let logo = raster();
        let ops = compose_cover(a4(), Color::DARK_TEAL, &logo, "Acme");
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0], DrawInstruction::FillBackground(Color::DARK_TEAL));

        match &ops[1] {
            DrawInstruction::DrawImage { width, height, .. } => {
                // Non-square logo still fills a square box
                assert_eq!(*width, 297.5);
                assert_eq!(*height, 297.5);
            }
            other => panic!("expected logo image, got {:?}", other),
        }

        match &ops[2] {
            DrawInstruction::DrawText {
                text,
                x,
                y,
                font_size,
                bold,
                align,
            } => {
                let logo_box = cover_logo_box(a4());
                assert_eq!(text, "Acme");
                assert_eq!(*x, 297.5);
                assert_eq!(*y, logo_box.y + 297.5 + 60.0);
                assert_eq!(*font_size, 36.0);
                assert!(*bold);
                assert_eq!(*align, TextAlign::Center);
            }
            other => panic!("expected title, got {:?}", other),
        }
    }

    #[test]
    fn test_divider_lines_2x2() {
        let lines = divider_lines(a4(), GridSpec::default());
        assert_eq!(
            lines,
            vec![
                DrawInstruction::DrawLine {
                    x1: 297.5,
                    y1: 40.0,
                    x2: 297.5,
                    y2: 802.0
                },
                DrawInstruction::DrawLine {
                    x1: 40.0,
                    y1: 421.0,
                    x2: 555.0,
                    y2: 421.0
                },
            ]
        );
    }

    #[test]
    fn test_divider_lines_single_cell() {
        assert!(divider_lines(a4(), GridSpec::new(1, 1, 40.0)).is_empty());
        assert_eq!(divider_lines(a4(), GridSpec::new(3, 2, 40.0)).len(), 3);
    }

    #[test]
    fn test_page_chrome_starts_with_background() {
        let ops = compose_page_chrome(a4(), GridSpec::default(), Color::LIGHT_GREY);
        assert_eq!(ops[0], DrawInstruction::FillBackground(Color::LIGHT_GREY));
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn test_cell_layout() {
        let cell = CellBox::new(297.5, 40.0, 257.5, 381.0);
        let ops = compose_cell(&cell, &row(""), "$");
        assert_eq!(ops.len(), 3);

        let image_size = 257.5 * 0.55;
        match &ops[0] {
            DrawInstruction::DrawText {
                x,
                y,
                font_size,
                bold,
                ..
            } => {
                assert_eq!(*x, cell.center_x());
                assert_eq!(*y, 54.0);
                assert_eq!(*font_size, 14.0);
                assert!(*bold);
            }
            other => panic!("expected name, got {:?}", other),
        }
        match &ops[1] {
            DrawInstruction::DrawImage {
                x,
                y,
                width,
                height,
                ..
            } => {
                assert_eq!(*width, image_size);
                assert_eq!(*height, image_size);
                assert_eq!(*y, 64.0);
                assert!((*x + image_size / 2.0 - cell.center_x()).abs() < 1e-3);
            }
            other => panic!("expected image, got {:?}", other),
        }
        match &ops[2] {
            DrawInstruction::DrawText {
                text,
                y,
                font_size,
                bold,
                ..
            } => {
                assert_eq!(text, "Price: $1,299.00");
                assert_eq!(*y, 40.0 + image_size + 50.0);
                assert_eq!(*font_size, 12.0);
                assert!(!*bold);
            }
            other => panic!("expected price, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_description_is_skipped() {
        let cell = CellBox::new(40.0, 40.0, 257.5, 381.0);
        assert_eq!(compose_cell(&cell, &row("   \n\t "), "$").len(), 3);
    }

    #[test]
    fn test_description_wraps_within_cell() {
        let cell = CellBox::new(40.0, 40.0, 257.5, 381.0);
        let description = "A generously sized teapot in matte glaze. Brews six cups, \
                           keeps tea warm for an hour, and pours without a drip.";
        let ops = compose_cell(&cell, &row(description), "€");
        let lines = &texts(&ops)[2..];
        assert!(lines.len() >= 2);
        assert_eq!(lines.join(" "), description);

        let image_size = product_image_size(&cell);
        let baselines: Vec<f32> = ops[3..]
            .iter()
            .map(|op| match op {
                DrawInstruction::DrawText { y, font_size, .. } => {
                    assert_eq!(*font_size, 10.0);
                    *y
                }
                other => panic!("expected description line, got {:?}", other),
            })
            .collect();
        assert_eq!(baselines[0], 40.0 + image_size + 70.0);
        assert!((baselines[1] - baselines[0] - 11.5).abs() < 1e-3);

        for line in lines {
            assert!(Font::Helvetica.text_width(line, 10.0) <= description_width(&cell));
        }
    }

    #[test]
    fn test_blank_description_lines_only_space_paragraphs() {
        let cell = CellBox::new(40.0, 40.0, 257.5, 381.0);
        let ops = compose_cell(&cell, &row("first\n\n   \nsecond"), "$");
        assert_eq!(texts(&ops)[2..], ["first", "second"]);

        let first_baseline = 40.0 + product_image_size(&cell) + 70.0;
        let baselines: Vec<f32> = ops[3..]
            .iter()
            .filter_map(|op| match op {
                DrawInstruction::DrawText { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(baselines[0], first_baseline);
        assert!((baselines[1] - first_baseline - 3.0 * 11.5).abs() < 1e-3);
    }

    #[test]
    fn test_price_label_is_verbatim() {
        assert_eq!(price_label("12", "$"), "Price: $12");
        assert_eq!(price_label("  about 3 ", "£"), "Price: £  about 3 ");
    }
}
