//! View-state layer - the product cache and its derived, paginated view
//!
//! Pure core: nothing here performs I/O. The rendering layer reads the engine,
//! the event loop mutates it.
//!
//! # Module Structure
//!
//! - `types`: ViewState, SortKey/SortSpec, PageSize
//! - `cache`: ProductCache - id-unique ordered product store
//! - `filter`: title substring filter stage
//! - `sort`: column sort stage
//! - `pagination`: page slicing, summary line, page-button window
//! - `engine`: ViewStateEngine - owns cache + view state, runs the pipeline

pub mod cache;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod types;

pub use cache::ProductCache;
pub use engine::ViewStateEngine;
pub use pagination::{PageItem, PageSummary};
pub use types::{InvalidPageSize, PageSize, SortKey, SortSpec, ViewState};
