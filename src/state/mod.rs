//! UI state machine.
//!
//! State transitions are plain methods and pure functions testable without
//! a terminal. The only clock is the caption board's timer queue, which the
//! host advances explicitly.

pub mod app_state;
pub mod captions;
pub mod list_page;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppOptions, AppState};
pub use captions::CaptionBoard;
pub use list_page::ListPage;
pub use search::SearchState;
