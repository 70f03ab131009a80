use crate::builder::check_products;
use crate::layout::page_count;
use crate::options::CatalogOptions;
use crate::types::*;

/// Calculate page and cell counts for a set of products
pub fn calculate_statistics(
    products: &[ProductInput],
    options: &CatalogOptions,
) -> Result<CatalogStatistics> {
    options.validate()?;
    check_products(products)?;

    let image_counts: Vec<usize> = products.iter().map(|p| p.images.len()).collect();
    Ok(count_pages(&image_counts, options))
}

/// Calculate page and cell counts from the number of images per product.
///
/// Lets callers size a catalog without decoding any image.
pub fn calculate_statistics_for_counts(
    image_counts: &[usize],
    options: &CatalogOptions,
) -> Result<CatalogStatistics> {
    options.validate()?;

    if image_counts.is_empty() {
        return Err(CatalogError::NoProducts);
    }
    if let Some(i) = image_counts.iter().position(|&count| count == 0) {
        return Err(CatalogError::InvalidProduct {
            index: i + 1,
            reason: "product has no images".to_string(),
        });
    }

    Ok(count_pages(image_counts, options))
}

fn count_pages(image_counts: &[usize], options: &CatalogOptions) -> CatalogStatistics {
    // Flattening yields one row per image
    let rows: usize = image_counts.iter().sum();

    let cells_per_page = options.grid.cells_per_page();
    let product_pages = page_count(rows, options.grid);
    let empty_cells = product_pages * cells_per_page - rows;

    CatalogStatistics {
        products: image_counts.len(),
        rows,
        cells_per_page,
        product_pages,
        total_pages: product_pages + 1,
        empty_cells,
    }
}
