//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.

use crate::state::SearchState;

/// Byte offset of the `cursor`-th character of `query`.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(offset, _)| offset)
}

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        // No-op for other states
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        // cursor == 0 or not typing
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Activate search input mode.
///
/// Inactive starts an empty query; Active resumes editing its query with the
/// cursor at the end. No-op if already typing.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Active { query } => {
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        typing @ SearchState::Typing { .. } => typing,
    }
}

/// Cancel search input.
/// Transitions from Typing or Active to Inactive, clearing the query.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Commit the query being typed.
///
/// An empty query goes back to Inactive. Any other query, including one made
/// only of whitespace, is kept verbatim.
///
/// No-op if not in Typing state.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } if query.is_empty() => SearchState::Inactive,
        SearchState::Typing { query, .. } => SearchState::Active { query },
        other => other,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
