//! View-state engine: owned cache plus the filter → sort → paginate pipeline.
//!
//! The engine is the single writer of the cache and the view state. Every
//! mutation re-derives the filtered and sorted order and re-clamps the current
//! page, so readers always see a consistent view.

use super::cache::ProductCache;
use super::filter::filter_indices;
use super::pagination::{self, PageItem, PageSummary};
use super::sort::sort_indices;
use super::types::{PageSize, SortKey, SortSpec, ViewState};
use crate::model::{
    Product, ProductEdit, ProductId, ProductPatch, ProductPayload, FALLBACK_CATEGORY_ID,
    FALLBACK_IMAGE_URL,
};
use tracing::{debug, warn};

/// Owns the product cache and derives the displayable page from it.
#[derive(Debug, Clone, Default)]
pub struct ViewStateEngine {
    cache: ProductCache,
    view: ViewState,
    /// Cache indices of the filtered and sorted view.
    derived: Vec<usize>,
}

impl ViewStateEngine {
    /// Empty engine with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty engine with `page_size` rows per page.
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            view: ViewState {
                page_size,
                ..ViewState::default()
            },
            ..Self::default()
        }
    }

    // ===== Cache mutation =====

    /// Replace the cache with a full fetch.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.cache.replace_all(products);
        self.derive();
    }

    /// Insert a newly created product at the head of the cache.
    ///
    /// The current page is kept (then clamped), not reset.
    pub fn apply_create(&mut self, product: Product) {
        debug!(id = %product.id, "Applying created product");
        self.cache.prepend(product);
        self.derive();
    }

    /// Build the PUT body for an edit.
    ///
    /// Carries the cached record's images and category id, which the remote
    /// requires on every write. A record missing from the cache (or lacking a
    /// category) falls back to a placeholder image and the default category.
    pub fn update_payload(&self, edit: &ProductEdit) -> ProductPayload {
        let existing = self.cache.get(edit.id);
        if existing.is_none() {
            warn!(id = %edit.id, "Editing product not present in cache, using fallbacks");
        }
        let images = existing
            .map(|p| p.images.clone())
            .unwrap_or_else(|| vec![FALLBACK_IMAGE_URL.to_string()]);
        let category_id = existing
            .and_then(|p| p.category.as_ref())
            .map(|c| c.id)
            .unwrap_or(FALLBACK_CATEGORY_ID);

        ProductPayload {
            title: edit.title.clone(),
            price: edit.price,
            description: edit.description.clone(),
            category_id,
            images,
        }
    }

    /// Merge an update response over the cached record.
    ///
    /// Returns `false`, leaving everything untouched, when `id` is not cached.
    pub fn apply_update(&mut self, id: ProductId, patch: ProductPatch) -> bool {
        if !self.cache.merge(id, patch) {
            warn!(%id, "Update response for product not in cache ignored");
            return false;
        }
        debug!(%id, "Applied product update");
        self.derive();
        true
    }

    // ===== View-state axes =====

    /// Set the search query and go back to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
        self.view.current_page = 1;
        self.derive();
    }

    /// Set or clear the sort. The current page is kept, then clamped.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.view.sort = sort;
        self.derive();
    }

    /// Header-click sort: same key flips direction, new key sorts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
        self.derive();
    }

    /// Set rows per page and go back to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.page_size = page_size;
        self.view.current_page = 1;
        self.clamp_page();
    }

    /// Jump to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.view.current_page = page;
        self.clamp_page();
    }

    /// Advance one page. Returns `false` (no-op) on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.view.current_page += 1;
        true
    }

    /// Go back one page. Returns `false` (no-op) on page 1.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev_page() {
            return false;
        }
        self.view.current_page -= 1;
        true
    }

    /// Whether a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.view.current_page < self.total_pages()
    }

    /// Whether an earlier page exists.
    pub fn has_prev_page(&self) -> bool {
        self.view.current_page > 1
    }

    // ===== Derived output =====

    /// Filtered and sorted products (all pages).
    pub fn derived(&self) -> impl ExactSizeIterator<Item = &Product> + '_ {
        let products = self.cache.as_slice();
        self.derived.iter().map(move |&i| &products[i])
    }

    /// Number of products in the derived view.
    pub fn derived_len(&self) -> usize {
        self.derived.len()
    }

    /// Products on the current page.
    pub fn visible_slice(&self) -> Vec<&Product> {
        let products = self.cache.as_slice();
        pagination::paginate(&self.derived, self.view.current_page, self.view.page_size)
            .iter()
            .map(|&i| &products[i])
            .collect()
    }

    /// Summary line for the current page.
    pub fn summary(&self) -> PageSummary {
        PageSummary::new(
            self.derived.len(),
            self.view.current_page,
            self.view.page_size,
        )
    }

    /// Pages in the derived view.
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.derived.len(), self.view.page_size)
    }

    /// Page buttons around the current page.
    pub fn page_window(&self) -> Vec<PageItem> {
        pagination::page_window(self.view.current_page, self.total_pages())
    }

    /// Current view inputs.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Underlying product cache.
    pub fn cache(&self) -> &ProductCache {
        &self.cache
    }

    /// Cached product with `id`.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.cache.get(id)
    }

    // ===== Pipeline =====

    fn derive(&mut self) {
        let products = self.cache.as_slice();
        let filtered = filter_indices(products, &self.view.search_query);
        self.derived = sort_indices(products, filtered, self.view.sort);
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        let clamped = pagination::clamp_page(
            self.view.current_page,
            self.derived.len(),
            self.view.page_size,
        );
        if clamped != self.view.current_page {
            debug!(
                from = self.view.current_page,
                to = clamped,
                "Clamped current page"
            );
        }
        self.view.current_page = clamped;
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
