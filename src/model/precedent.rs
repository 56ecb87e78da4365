//! Precedent records shown on the precedent research page.

use super::RecordId;
use serde::Deserialize;
use std::fmt;

/// How a precedent's ruling bears on the case it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Supports our position.
    Favorable,
    /// Cuts against our position.
    Unfavorable,
    /// Neither.
    Neutral,
}

impl Outcome {
    /// Display label, also the key the outcome sort orders by.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Favorable => "favorable",
            Outcome::Unfavorable => "unfavorable",
            Outcome::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse classification of a relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceBand {
    /// 8.5 or more.
    High,
    /// 7.0 up to 8.5.
    Medium,
    /// Below 7.0.
    Low,
}

impl RelevanceBand {
    /// Classify a 0-10 relevance score.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            RelevanceBand::High
        } else if score >= 7.0 {
            RelevanceBand::Medium
        } else {
            RelevanceBand::Low
        }
    }
}

/// A prior decision surfaced by research.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Precedent {
    /// Unique id within the precedent list.
    pub id: RecordId,
    /// Case caption.
    pub case_name: String,
    /// Deciding court.
    pub court: String,
    /// Year of decision.
    pub year: i32,
    /// Relevance to the applicable case on a 0-10 scale.
    pub relevance_score: f64,
    /// Kind of dispute.
    pub case_type: String,
    /// Outcome relative to our position.
    pub outcome: Outcome,
    /// Reporter citation.
    pub citation: String,
    /// One-paragraph holding summary.
    pub summary: String,
    /// Key points of the holding.
    pub key_points: Vec<String>,
    /// Name of the managed case this precedent was found for.
    pub applicable_to_case: String,
    /// When research surfaced it, free text ("2 hours ago").
    pub date_found: String,
    /// Jurisdiction label, e.g. "Federal Circuit".
    pub jurisdiction: String,
}

impl Precedent {
    /// Relevance band of this precedent.
    pub fn relevance_band(&self) -> RelevanceBand {
        RelevanceBand::from_score(self.relevance_score)
    }

    /// Whether the precedent comes from a federal forum.
    pub fn is_federal(&self) -> bool {
        self.jurisdiction.contains("Federal")
    }
}
