//! Filter stage: case-insensitive title substring match.

use crate::model::Product;

/// Products whose title contains `query`, ignoring case, in cache order.
///
/// An empty query matches everything.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    filter_indices(products, query)
        .into_iter()
        .map(|i| &products[i])
        .collect()
}

/// Same as [`filter_products`], returning positions in `products`.
pub fn filter_indices(products: &[Product], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..products.len()).collect();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| p.title.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
