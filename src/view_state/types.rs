//! Core view-state newtypes

use std::fmt;

/// Rows shown per page. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(usize);

/// Error returned when attempting to create a PageSize of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page size must be >= 1 (got {0})")]
pub struct InvalidPageSize(pub usize);

impl PageSize {
    /// Sizes offered by the rows-per-page selector.
    pub const CHOICES: [PageSize; 3] = [PageSize(5), PageSize(10), PageSize(20)];

    /// Smart constructor that validates size is >= 1.
    pub fn new(size: usize) -> Result<Self, InvalidPageSize> {
        if size == 0 {
            Err(InvalidPageSize(size))
        } else {
            Ok(Self(size))
        }
    }

    /// Rows per page.
    pub fn get(self) -> usize {
        self.0
    }

    /// Next selector choice, wrapping around.
    ///
    /// Sizes outside [`PageSize::CHOICES`] move to the first choice larger
    /// than themselves, or wrap to the smallest.
    pub fn next_choice(self) -> Self {
        Self::CHOICES
            .iter()
            .copied()
            .find(|c| c.0 > self.0)
            .unwrap_or(Self::CHOICES[0])
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Column a derived view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Numeric id.
    Id,
    /// Title, case-insensitive.
    Title,
    /// Price.
    Price,
    /// Category name; products without one sort first.
    Category,
    /// Description, case-insensitive.
    Description,
}

impl SortKey {
    /// Every key in column order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Title,
        SortKey::Price,
        SortKey::Category,
        SortKey::Description,
    ];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Title => "Title",
            SortKey::Price => "Price",
            SortKey::Category => "Category",
            SortKey::Description => "Description",
        }
    }

    /// Parse a field name as accepted by `--sort` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "id" => Some(SortKey::Id),
            "title" => Some(SortKey::Title),
            "price" => Some(SortKey::Price),
            "category" => Some(SortKey::Category),
            "description" => Some(SortKey::Description),
            _ => None,
        }
    }
}

/// Active ordering of the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Column to sort by.
    pub key: SortKey,
    /// Direction; `true` is ascending.
    pub ascending: bool,
}

impl SortSpec {
    /// Ascending on `key`.
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            ascending: true,
        }
    }

    /// Descending on `key`.
    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            ascending: false,
        }
    }
}

/// The tuple driving derivation.
///
/// `current_page` is 1-based and is clamped by the engine after every derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Applied title search.
    pub search_query: String,
    /// Active sort, `None` for cache order.
    pub sort: Option<SortSpec>,
    /// 1-based current page.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort: None,
            current_page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ViewState {
    /// Header click semantics: same key flips direction, a new key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some(spec) if spec.key == key => Some(SortSpec {
                key,
                ascending: !spec.ascending,
            }),
            _ => Some(SortSpec::ascending(key)),
        };
    }
}
