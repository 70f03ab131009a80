use crate::color::sample_with;
use crate::flatten::flatten;
use crate::layout::{compose_cell, compose_cover, compose_page_chrome, paginate};
use crate::options::CatalogOptions;
use crate::types::*;

/// Lay out a complete catalog: the cover page followed by product pages.
///
/// All preconditions are checked before any layout work; on failure nothing
/// is produced. Identical inputs always give identical pages.
pub fn build_catalog(input: &CatalogInput, options: &CatalogOptions) -> Result<Catalog> {
    let logo = validate_input(input, options)?;

    let page_size = options.page_size();
    let grid = options.grid;

    let background = sample_with(logo, options.alpha_policy);

    let mut pages = vec![compose_cover(
        page_size,
        background,
        logo,
        input.company_name.trim(),
    )];

    let rows = flatten(&input.products);
    let placements = paginate(&rows, page_size, grid);

    for (row, placement) in rows.iter().zip(&placements) {
        if placement.starts_page() {
            log::debug!(
                "Starting product page {} with \"{}\"",
                placement.page_index + 1,
                row.name
            );
            pages.push(compose_page_chrome(page_size, grid, background));
        }
        if let Some(page) = pages.last_mut() {
            page.extend(compose_cell(
                &placement.cell_box,
                row,
                &options.currency_symbol,
            ));
        }
    }

    log::info!(
        "Laid out {} products ({} entries) on {} pages",
        input.products.len(),
        rows.len(),
        pages.len()
    );

    Ok(Catalog {
        page_size,
        background,
        pages,
    })
}

/// Check everything the layout relies on, returning the logo on success
fn validate_input<'a>(input: &'a CatalogInput, options: &CatalogOptions) -> Result<&'a Raster> {
    options.validate()?;

    let logo = input.logo.as_ref().ok_or(CatalogError::MissingLogo)?;
    if input.company_name.trim().is_empty() {
        return Err(CatalogError::BlankCompanyName);
    }
    check_products(&input.products)?;

    Ok(logo)
}

/// Validate the product list on its own
pub(crate) fn check_products(products: &[ProductInput]) -> Result<()> {
    if products.is_empty() {
        return Err(CatalogError::NoProducts);
    }
    for (i, product) in products.iter().enumerate() {
        product
            .validate()
            .map_err(|reason| CatalogError::InvalidProduct {
                index: i + 1,
                reason,
            })?;
    }
    Ok(())
}
