//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod legal_case;
pub mod page;
pub mod precedent;

// Re-export for convenience
pub use error::{AppError, DataError, QueryError, RegistryError, RevealError};
pub use identifiers::{FilterId, InvalidRecordId, InvalidSelectorId, RecordId, SortId};
pub use key_action::KeyAction;
pub use legal_case::{CaseStatus, LegalCase, Priority, StrengthBand};
pub use page::{Page, ProfileSection, UnknownPage, PROFILE_SECTIONS};
pub use precedent::{Outcome, Precedent, RelevanceBand};
