//! Legal research dashboard (lexdash)
//!
//! Terminal dashboard over a static set of legal cases and precedents.
//!
//! The pure core is the list query engine ([`query`]) and the caption
//! typing animator ([`reveal`]). The impure shell is the ratatui TUI in
//! [`view`], driven by the pure UI state in [`state`].

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod reveal;
pub mod source;
pub mod state;
pub mod view;
