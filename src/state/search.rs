//! Search bar state machine.
//!
//! SearchState is a sum type representing the three possible search bar states:
//! - Inactive: No query
//! - Typing: User is editing the query; the list re-filters on every keystroke
//! - Active: Query committed, keyboard back on the list

// ===== SearchState =====

/// Search bar state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No query.
    #[default]
    Inactive,
    /// User is typing. `cursor` counts characters, not bytes.
    Typing {
        /// Query text so far.
        query: String,
        /// Cursor position in characters.
        cursor: usize,
    },
    /// Query committed.
    Active {
        /// Committed query text, kept verbatim.
        query: String,
    },
}

impl SearchState {
    /// Text the list query engine should match against.
    ///
    /// Returned verbatim: whitespace is significant.
    pub fn query_text(&self) -> &str {
        match self {
            SearchState::Inactive => "",
            SearchState::Typing { query, .. } | SearchState::Active { query } => query,
        }
    }

    /// Whether keystrokes should go to the search bar.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_has_empty_query() {
        assert_eq!(SearchState::Inactive.query_text(), "");
        assert!(!SearchState::Inactive.is_typing());
    }

    #[test]
    fn typing_exposes_query_verbatim() {
        let state = SearchState::Typing {
            query: "  smith ".to_string(),
            cursor: 3,
        };
        assert_eq!(state.query_text(), "  smith ");
        assert!(state.is_typing());
    }

    #[test]
    fn active_exposes_query_and_is_not_typing() {
        let state = SearchState::Active {
            query: "patent".to_string(),
        };
        assert_eq!(state.query_text(), "patent");
        assert!(!state.is_typing());
    }
}
