//! Sort stage.
//!
//! Strings compare lowercased, numbers by value. A product without a category
//! sorts before every product with one. The sort is stable, so equal keys keep
//! their filtered (cache) order in both directions.

use super::types::{SortKey, SortSpec};
use crate::model::Product;
use std::cmp::Ordering;

/// Order `items` by `sort`, or return them unchanged when no sort is set.
pub fn sort_products<'a>(mut items: Vec<&'a Product>, sort: Option<SortSpec>) -> Vec<&'a Product> {
    if let Some(spec) = sort {
        items.sort_by(|a, b| directed(compare_by(a, b, spec.key), spec.ascending));
    }
    items
}

/// Same as [`sort_products`], over positions in `products`.
pub fn sort_indices(
    products: &[Product],
    mut indices: Vec<usize>,
    sort: Option<SortSpec>,
) -> Vec<usize> {
    if let Some(spec) = sort {
        indices.sort_by(|&a, &b| {
            directed(compare_by(&products[a], &products[b], spec.key), spec.ascending)
        });
    }
    indices
}

/// Ascending comparison of a single column.
pub fn compare_by(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Title => compare_text(&a.title, &b.title),
        SortKey::Description => compare_text(&a.description, &b.description),
        SortKey::Category => match (a.category_name(), b.category_name()) {
            (Some(x), Some(y)) => compare_text(x, y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
