use crate::types::{ProductInput, ProductRow};
use std::sync::Arc;

/// Expand each product into one row per image.
///
/// Rows keep the order of `inputs`, and rows from one product keep the order
/// of its images. Name, price and description are shared unchanged.
pub fn flatten(inputs: &[ProductInput]) -> Vec<ProductRow> {
    inputs
        .iter()
        .flat_map(|input| {
            input.images.iter().map(move |image| ProductRow {
                name: input.name.clone(),
                price: input.price.clone(),
                description: input.description.clone(),
                image: Arc::clone(image),
            })
        })
        .collect()
}
