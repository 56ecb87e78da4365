//! Domain-level keyboard actions independent of key bindings.

use super::Page;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Page navigation
    /// Jump straight to a page. Default: 1-4
    GoToPage(Page),
    /// Switch to the next page. Default: Tab/]
    NextPage,
    /// Switch to the previous page. Default: [/Shift+Tab
    PrevPage,

    // List navigation
    /// Move selection down one row (profile: next section). Default: j/↓
    SelectNext,
    /// Move selection up one row (profile: previous section). Default: k/↑
    SelectPrev,

    // Search
    /// Focus the search bar of the current list page. Default: /
    StartSearch,

    // Filter and sort
    /// Select the next registered filter. Default: f
    NextFilter,
    /// Select the previous registered filter. Default: F
    PrevFilter,
    /// Select the next registered sort. Default: o
    NextSort,
    /// Select the previous registered sort. Default: O
    PrevSort,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
