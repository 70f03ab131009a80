use catalog_layout::metrics::Font;
use catalog_layout::*;
use image::{Rgba, RgbaImage};
use std::sync::Arc;

fn solid(width: u32, height: u32, shade: u8) -> Raster {
    Arc::new(RgbaImage::from_pixel(
        width,
        height,
        Rgba([shade, shade, shade, 255]),
    ))
}

fn product(name: &str, image_count: usize) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        images: (0..image_count).map(|i| solid(8, 6, i as u8 * 10)).collect(),
        price: "19.99".to_string(),
        description: format!(
            "{} is crafted from reclaimed oak and finished by hand with natural oils \
             so every piece carries its own grain and character.",
            name
        ),
    }
}

fn create_test_input(products: Vec<ProductInput>) -> CatalogInput {
    CatalogInput {
        company_name: "Northwind Goods".to_string(),
        logo: Some(solid(120, 80, 255)),
        products,
    }
}

fn count_backgrounds(page: &Page) -> usize {
    page.iter()
        .filter(|op| matches!(op, DrawInstruction::FillBackground(_)))
        .count()
}

fn count_images(page: &Page) -> usize {
    page.iter()
        .filter(|op| matches!(op, DrawInstruction::DrawImage { .. }))
        .count()
}

#[test]
fn test_cover_page_contents() {
    let input = create_test_input(vec![product("Stool", 1)]);
    let catalog = build_catalog(&input, &CatalogOptions::default()).unwrap();

    let cover = catalog.cover().unwrap();
    assert_eq!(cover.len(), 3);
    assert!(matches!(cover[0], DrawInstruction::FillBackground(_)));
    assert_eq!(count_images(cover), 1);
    let titles: Vec<_> = cover
        .iter()
        .filter_map(|op| match op {
            DrawInstruction::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["Northwind Goods"]);
}

#[test]
fn test_bright_logo_dark_background() {
    let input = create_test_input(vec![product("Stool", 1)]);
    let catalog = build_catalog(&input, &CatalogOptions::default()).unwrap();
    assert_eq!(catalog.background, Color::DARK_TEAL);
    for page in &catalog.pages {
        assert_eq!(page[0], DrawInstruction::FillBackground(Color::DARK_TEAL));
    }
}

#[test]
fn test_dark_logo_light_background() {
    let mut input = create_test_input(vec![product("Stool", 1)]);
    input.logo = Some(solid(50, 50, 0));
    let catalog = build_catalog(&input, &CatalogOptions::default()).unwrap();
    assert_eq!(catalog.background, Color::LIGHT_GREY);
}

#[test]
fn test_five_rows_make_two_product_pages() {
    // 2 + 3 images flatten to 5 rows
    let input = create_test_input(vec![product("Chair", 2), product("Table", 3)]);
    let catalog = build_catalog(&input, &CatalogOptions::default()).unwrap();

    assert_eq!(catalog.pages.len(), 3);
    let product_pages = catalog.product_pages();
    assert_eq!(count_images(&product_pages[0]), 4);
    assert_eq!(count_images(&product_pages[1]), 1);
}

#[test]
fn test_every_page_has_one_background() {
    let input = create_test_input(vec![product("Lamp", 7), product("Rug", 2)]);
    let catalog = build_catalog(&input, &CatalogOptions::default()).unwrap();
    for page in &catalog.pages {
        assert!(matches!(page[0], DrawInstruction::FillBackground(_)));
        assert_eq!(count_backgrounds(page), 1);
    }
}

#[test]
fn test_product_page_order() {
    let input = create_test_input(vec![product("Lamp", 1)]);
    let catalog = build_catalog(&input, &CatalogOptions::default()).unwrap();
    let page = &catalog.product_pages()[0];

    assert!(matches!(page[0], DrawInstruction::FillBackground(_)));
    assert!(matches!(page[1], DrawInstruction::DrawLine { .. }));
    assert!(matches!(page[2], DrawInstruction::DrawLine { .. }));
    // Content after the structure
    assert!(page[3..]
        .iter()
        .all(|op| !matches!(op, DrawInstruction::DrawLine { .. } | DrawInstruction::FillBackground(_))));
}

#[test]
fn test_cells_in_row_major_order() {
    let input = create_test_input(vec![product("Vase", 4)]);
    let catalog = build_catalog(&input, &CatalogOptions::default()).unwrap();
    let origins: Vec<(f32, f32)> = catalog.product_pages()[0]
        .iter()
        .filter_map(|op| match op {
            DrawInstruction::DrawImage { x, y, width, .. } => Some((x + width / 2.0, *y)),
            _ => None,
        })
        .collect();

    // Image centers sit in the middle of their cells
    let centers = [168.75, 426.25];
    assert_eq!(origins.len(), 4);
    assert!((origins[0].0 - centers[0]).abs() < 1e-3);
    assert!((origins[1].0 - centers[1]).abs() < 1e-3);
    assert!((origins[2].0 - centers[0]).abs() < 1e-3);
    assert!((origins[3].0 - centers[1]).abs() < 1e-3);
    assert_eq!(origins[0].1, 64.0);
    assert_eq!(origins[1].1, 64.0);
    assert_eq!(origins[2].1, 40.0 + 381.0 + 24.0);
}

#[test]
fn test_build_is_deterministic() {
    let input = create_test_input(vec![product("Chair", 3), product("Desk", 2)]);
    let options = CatalogOptions::default();
    let first = build_catalog(&input, &options).unwrap();
    let second = build_catalog(&input, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_descriptions_fit_cells() {
    let input = create_test_input(vec![product("Bookshelf", 3)]);
    let options = CatalogOptions::default();
    let catalog = build_catalog(&input, &options).unwrap();
    let limit = 257.5 - 20.0;

    for page in catalog.product_pages() {
        for op in page {
            if let DrawInstruction::DrawText {
                text,
                font_size,
                bold,
                ..
            } = op
            {
                if *font_size == 10.0 {
                    assert!(Font::for_weight(*bold).text_width(text, *font_size) <= limit);
                }
            }
        }
    }
}

#[test]
fn test_currency_symbol_option() {
    let input = create_test_input(vec![product("Mug", 1)]);
    let options = CatalogOptions {
        currency_symbol: "€".to_string(),
        ..Default::default()
    };
    let catalog = build_catalog(&input, &options).unwrap();
    let has_price = catalog.product_pages()[0].iter().any(|op| {
        matches!(op, DrawInstruction::DrawText { text, .. } if text == "Price: €19.99")
    });
    assert!(has_price);
}

#[test]
fn test_custom_grid() {
    let input = create_test_input(vec![product("Cup", 7)]);
    let options = CatalogOptions {
        grid: GridSpec::new(3, 2, 30.0),
        paper_size: PaperSize::Letter,
        ..Default::default()
    };
    let catalog = build_catalog(&input, &options).unwrap();
    assert_eq!(catalog.page_size, PageSize::new(612.0, 792.0));
    assert_eq!(catalog.product_pages().len(), 2);
    assert_eq!(count_images(&catalog.product_pages()[0]), 6);
    assert_eq!(count_images(&catalog.product_pages()[1]), 1);
}

#[test]
fn test_missing_logo() {
    let mut input = create_test_input(vec![product("Mug", 1)]);
    input.logo = None;
    let result = build_catalog(&input, &CatalogOptions::default());
    assert!(matches!(result, Err(CatalogError::MissingLogo)));
}

#[test]
fn test_blank_company_name() {
    let mut input = create_test_input(vec![product("Mug", 1)]);
    input.company_name = "   ".to_string();
    let result = build_catalog(&input, &CatalogOptions::default());
    assert!(matches!(result, Err(CatalogError::BlankCompanyName)));
}

#[test]
fn test_no_products() {
    let input = create_test_input(Vec::new());
    let result = build_catalog(&input, &CatalogOptions::default());
    assert!(matches!(result, Err(CatalogError::NoProducts)));
}

#[test]
fn test_invalid_product_reports_position() {
    let mut broken = product("Kettle", 1);
    broken.price = " ".to_string();
    let input = create_test_input(vec![product("Mug", 1), broken]);

    match build_catalog(&input, &CatalogOptions::default()) {
        Err(CatalogError::InvalidProduct { index, reason }) => {
            assert_eq!(index, 2);
            assert!(reason.contains("price"));
        }
        other => panic!("Expected InvalidProduct error, got {:?}", other),
    }
}

#[test]
fn test_product_without_images_rejected() {
    let input = create_test_input(vec![product("Ghost", 0)]);
    let result = build_catalog(&input, &CatalogOptions::default());
    assert!(matches!(
        result,
        Err(CatalogError::InvalidProduct { index: 1, .. })
    ));
}

#[test]
fn test_oversized_grid_rejected() {
    let input = create_test_input(vec![product("Mug", 1)]);
    for grid in [
        GridSpec::new(usize::MAX / 2, 4, 40.0),
        GridSpec::new(100_000_000, 2, 40.0),
    ] {
        let options = CatalogOptions {
            grid,
            ..Default::default()
        };
        let result = build_catalog(&input, &options);
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }
}
