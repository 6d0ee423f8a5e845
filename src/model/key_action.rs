//! Domain-level keyboard actions independent of key bindings.

use crate::view_state::SortKey;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row selection
    /// Move the row cursor up within the current page. Default: k/↑
    SelectUp,
    /// Move the row cursor down within the current page. Default: j/↓
    SelectDown,

    // Pagination
    /// Go to the next page. Default: n/→
    NextPage,
    /// Go to the previous page. Default: p/←
    PrevPage,
    /// Jump to page 1. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Cycle rows per page 5 → 10 → 20. Default: z
    CyclePageSize,

    // Sorting
    /// Sort by a column; repeating flips direction. Default: 1-5
    SortBy(SortKey),

    // Search
    /// Activate search input. Default: /
    StartSearch,
    /// Clear the search query. Default: Esc
    ClearSearch,

    // Records
    /// Open the edit form for the selected row. Default: Enter
    EditSelected,
    /// Open the create form. Default: c
    CreateProduct,
    /// Export the filtered set to CSV. Default: e
    Export,
    /// Re-fetch all products. Default: r
    Reload,

    // Application
    /// Toggle help overlay. Default: ?
    ToggleHelp,
    /// Quit. Default: q
    Quit,
}
