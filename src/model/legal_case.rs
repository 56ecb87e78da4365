//! Legal case records shown on the case management page.

use super::RecordId;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Lifecycle status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    /// Being actively litigated.
    Active,
    /// Waiting on a filing or ruling.
    Pending,
    /// Resolved.
    Closed,
    /// Paused by the client or the court.
    OnHold,
}

impl CaseStatus {
    /// Wire/display label, e.g. `on-hold`.
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Pending => "pending",
            CaseStatus::Closed => "closed",
            CaseStatus::OnHold => "on-hold",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Normal.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Numeric rank, higher is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse classification of a case strength score, used for colour cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    /// Score of 7.5 or more.
    Strong,
    /// Score of 5.0 up to 7.5.
    Moderate,
    /// Score below 5.0.
    Weak,
}

impl StrengthBand {
    /// Lower bound of the strong band.
    pub const STRONG_THRESHOLD: f64 = 7.5;
    /// Lower bound of the moderate band. Cases below it "need attention".
    pub const MODERATE_THRESHOLD: f64 = 5.0;

    /// Classify a 0-10 strength score.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::STRONG_THRESHOLD {
            StrengthBand::Strong
        } else if score >= Self::MODERATE_THRESHOLD {
            StrengthBand::Moderate
        } else {
            StrengthBand::Weak
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthBand::Strong => "Strong",
            StrengthBand::Moderate => "Moderate",
            StrengthBand::Weak => "Weak",
        }
    }
}

/// A case under management.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCase {
    /// Unique id within the case list.
    pub id: RecordId,
    /// Case caption, e.g. "Smith v. TechCorp Patent Dispute".
    pub case_name: String,
    /// Area of law.
    pub case_type: String,
    /// Client name.
    pub client: String,
    /// Court hearing the case.
    pub court: String,
    /// Date the case was filed.
    pub filing_date: NaiveDate,
    /// Lifecycle status.
    pub status: CaseStatus,
    /// Priority.
    pub priority: Priority,
    /// Assessed strength on a 0-10 scale.
    pub strength_score: f64,
    /// Number of supporting precedents found so far.
    pub precedents_found: u32,
    /// Number of identified weaknesses.
    pub vulnerabilities: u32,
    /// Next filing or hearing deadline.
    pub next_deadline: NaiveDate,
    /// Short description.
    pub description: String,
    /// Practice area tags.
    pub legal_areas: Vec<String>,
}

impl LegalCase {
    /// Strength band of this case.
    pub fn strength_band(&self) -> StrengthBand {
        StrengthBand::from_score(self.strength_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_band_thresholds_are_inclusive() {
        assert_eq!(StrengthBand::from_score(7.5), StrengthBand::Strong);
        assert_eq!(StrengthBand::from_score(7.49), StrengthBand::Moderate);
        assert_eq!(StrengthBand::from_score(5.0), StrengthBand::Moderate);
        assert_eq!(StrengthBand::from_score(4.99), StrengthBand::Weak);
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn status_deserializes_kebab_case() {
        let status: CaseStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, CaseStatus::OnHold);
        assert_eq!(status.to_string(), "on-hold");
    }

    #[test]
    fn case_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": "9",
            "caseName": "Doe v. Roe",
            "caseType": "Tort",
            "client": "Jane Doe",
            "court": "Superior Court",
            "filingDate": "2024-01-15",
            "status": "active",
            "priority": "low",
            "strengthScore": 6.0,
            "precedentsFound": 2,
            "vulnerabilities": 1,
            "nextDeadline": "2024-03-01",
            "description": "A test case.",
            "legalAreas": ["Torts"]
        }"#;
        let case: LegalCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.id.as_str(), "9");
        assert_eq!(case.filing_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(case.strength_band(), StrengthBand::Moderate);
    }
}
