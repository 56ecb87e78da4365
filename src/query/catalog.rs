//! Filters and sorts offered by the case and precedent pages.

use super::{FilterRegistry, QueryEngine, Record, SortRegistry};
use crate::model::{CaseStatus, LegalCase, Outcome, Precedent, RecordId, RegistryError, StrengthBand};
use std::cmp::Ordering;

// ===== Ids =====

/// Case filter: status is active.
pub const CASE_FILTER_ACTIVE: &str = "active";
/// Case filter: status is pending.
pub const CASE_FILTER_PENDING: &str = "pending";
/// Case filter: priority is high.
pub const CASE_FILTER_HIGH_PRIORITY: &str = "high-priority";
/// Case filter: strength below the moderate band.
pub const CASE_FILTER_WEAK: &str = "weak-cases";

/// Case sort: nearest deadline first.
pub const CASE_SORT_DEADLINE: &str = "deadline";
/// Case sort: strongest first.
pub const CASE_SORT_STRENGTH: &str = "strength";
/// Case sort: high priority first.
pub const CASE_SORT_PRIORITY: &str = "priority";
/// Case sort: most recently filed first.
pub const CASE_SORT_FILING_DATE: &str = "filing-date";
/// Case sort: alphabetical by case name.
pub const CASE_SORT_NAME: &str = "case-name";

/// Precedent filter: favorable outcome.
pub const PRECEDENT_FILTER_FAVORABLE: &str = "favorable";
/// Precedent filter: decided 2022 or later.
pub const PRECEDENT_FILTER_RECENT: &str = "recent";
/// Precedent filter: relevance 8.0 or more.
pub const PRECEDENT_FILTER_HIGH_RELEVANCE: &str = "high-relevance";
/// Precedent filter: federal jurisdiction.
pub const PRECEDENT_FILTER_FEDERAL: &str = "federal";

/// Precedent sort: most relevant first.
pub const PRECEDENT_SORT_RELEVANCE: &str = "relevance";
/// Precedent sort: newest first.
pub const PRECEDENT_SORT_YEAR: &str = "year";
/// Precedent sort: alphabetical by court.
pub const PRECEDENT_SORT_COURT: &str = "court";
/// Precedent sort: alphabetical by outcome label.
pub const PRECEDENT_SORT_OUTCOME: &str = "outcome";
/// Precedent sort: alphabetical by case name.
pub const PRECEDENT_SORT_NAME: &str = "case-name";

const RECENT_YEAR: i32 = 2022;
const HIGH_RELEVANCE: f64 = 8.0;

// ===== Record impls =====

impl Record for LegalCase {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.case_name.as_str(),
            self.case_type.as_str(),
            self.client.as_str(),
        ]
        .into_iter()
    }
}

impl Record for Precedent {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.case_name.as_str(),
            self.case_type.as_str(),
            self.court.as_str(),
        ]
        .into_iter()
    }
}

/// Alphabetical, ignoring case, with the raw strings as a tiebreak so the
/// order stays total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ===== Engines =====

/// Query engine for the case management page.
pub fn case_engine() -> Result<QueryEngine<LegalCase>, RegistryError> {
    let filters = FilterRegistry::new("All Cases")
        .with(CASE_FILTER_ACTIVE, "Active", |c: &LegalCase| {
            c.status == CaseStatus::Active
        })?
        .with(CASE_FILTER_PENDING, "Pending", |c: &LegalCase| {
            c.status == CaseStatus::Pending
        })?
        .with(CASE_FILTER_HIGH_PRIORITY, "High Priority", |c: &LegalCase| {
            c.priority == crate::model::Priority::High
        })?
        .with(CASE_FILTER_WEAK, "Needs Attention", |c: &LegalCase| {
            c.strength_score < StrengthBand::MODERATE_THRESHOLD
        })?;

    let sorts = SortRegistry::new()
        .with(CASE_SORT_DEADLINE, "Next Deadline", |a: &LegalCase, b: &LegalCase| {
            a.next_deadline.cmp(&b.next_deadline)
        })?
        .with(CASE_SORT_STRENGTH, "Strength Score", |a: &LegalCase, b: &LegalCase| {
            b.strength_score.total_cmp(&a.strength_score)
        })?
        .with(CASE_SORT_PRIORITY, "Priority", |a: &LegalCase, b: &LegalCase| {
            b.priority.rank().cmp(&a.priority.rank())
        })?
        .with(CASE_SORT_FILING_DATE, "Filing Date", |a: &LegalCase, b: &LegalCase| {
            b.filing_date.cmp(&a.filing_date)
        })?
        .with(CASE_SORT_NAME, "Case Name", |a: &LegalCase, b: &LegalCase| {
            compare_text(&a.case_name, &b.case_name)
        })?;

    Ok(QueryEngine::new(filters, sorts))
}

/// Query engine for the precedent research page.
pub fn precedent_engine() -> Result<QueryEngine<Precedent>, RegistryError> {
    let filters = FilterRegistry::new("All Precedents")
        .with(PRECEDENT_FILTER_FAVORABLE, "Favorable Outcomes", |p: &Precedent| {
            p.outcome == Outcome::Favorable
        })?
        .with(PRECEDENT_FILTER_RECENT, "Recent (2022+)", |p: &Precedent| {
            p.year >= RECENT_YEAR
        })?
        .with(PRECEDENT_FILTER_HIGH_RELEVANCE, "High Relevance (8+)", |p: &Precedent| {
            p.relevance_score >= HIGH_RELEVANCE
        })?
        .with(PRECEDENT_FILTER_FEDERAL, "Federal Courts", |p: &Precedent| {
            p.is_federal()
        })?;

    let sorts = SortRegistry::new()
        .with(PRECEDENT_SORT_RELEVANCE, "Relevance Score", |a: &Precedent, b: &Precedent| {
            b.relevance_score.total_cmp(&a.relevance_score)
        })?
        .with(PRECEDENT_SORT_YEAR, "Year", |a: &Precedent, b: &Precedent| b.year.cmp(&a.year))?
        .with(PRECEDENT_SORT_COURT, "Court", |a: &Precedent, b: &Precedent| {
            compare_text(&a.court, &b.court)
        })?
        .with(PRECEDENT_SORT_OUTCOME, "Outcome", |a: &Precedent, b: &Precedent| {
            a.outcome.label().cmp(b.outcome.label())
        })?
        .with(PRECEDENT_SORT_NAME, "Case Name", |a: &Precedent, b: &Precedent| {
            compare_text(&a.case_name, &b.case_name)
        })?;

    Ok(QueryEngine::new(filters, sorts))
}
