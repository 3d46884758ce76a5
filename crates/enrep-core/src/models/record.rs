//! Encounter record data models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Block-scoping status marker printed once per report section.
///
/// A marker row governs every detail row beneath it until the next marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Encounter not yet submitted (Draft).
    Draft,
    /// Encounter approved for billing (Approved).
    Approved,
    /// Encounter held for review (Review).
    Review,
    /// Encounter still being documented (WorkInProgress).
    WorkInProgress,
}

impl ReportStatus {
    /// Parse a marker token, case-insensitively.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Some(ReportStatus::Draft),
            "approved" => Some(ReportStatus::Approved),
            "review" => Some(ReportStatus::Review),
            "workinprogress" => Some(ReportStatus::WorkInProgress),
            _ => None,
        }
    }

    /// Canonical spelling as printed in source reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Approved => "Approved",
            ReportStatus::Review => "Review",
            ReportStatus::WorkInProgress => "WorkInProgress",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cleaned encounter claim.
///
/// Only rows with a parseable service date survive cleaning, so the date is
/// not optional here. Identity fields may still be empty when nothing earlier
/// in the report could fill them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterRecord {
    /// Governing status carried from the nearest preceding marker row.
    pub status: ReportStatus,

    /// Numeric encounter identifier, forward-filled across rows.
    pub encounter_id: String,

    /// Rendering provider ("Name, CREDENTIAL"), forward-filled across rows.
    pub rendering_provider: String,

    /// Date of service.
    pub service_date: NaiveDate,

    /// First diagnosis code on the row, empty if absent.
    pub diagnosis1: String,

    /// Second diagnosis code on the row, empty if absent.
    pub diagnosis2: String,

    /// Charge amount, zero when the row carried none.
    pub charge: Decimal,
}

impl EncounterRecord {
    /// The `YYYY-MM` month key this record aggregates under.
    pub fn month(&self) -> String {
        self.service_date.format("%Y-%m").to_string()
    }
}

/// Per-month claim counts derived from cleaned records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Month key in `YYYY-MM` form.
    pub month: String,

    /// Distinct encounter ids with a retained record in this month.
    pub total_claims: usize,

    /// Encounters whose summed monthly charges exceed the threshold.
    pub claims_above_threshold: usize,

    /// Encounters whose summed monthly charges are at or below the threshold.
    pub claims_at_or_below_threshold: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_token() {
        assert_eq!(ReportStatus::from_token("Draft"), Some(ReportStatus::Draft));
        assert_eq!(ReportStatus::from_token("APPROVED"), Some(ReportStatus::Approved));
        assert_eq!(ReportStatus::from_token("review"), Some(ReportStatus::Review));
        assert_eq!(
            ReportStatus::from_token("workinprogress"),
            Some(ReportStatus::WorkInProgress)
        );
        assert_eq!(ReportStatus::from_token("Rejected"), None);
        assert_eq!(ReportStatus::from_token(""), None);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ReportStatus::Draft,
            ReportStatus::Approved,
            ReportStatus::Review,
            ReportStatus::WorkInProgress,
        ] {
            assert_eq!(ReportStatus::from_token(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_record_month_key() {
        let record = EncounterRecord {
            status: ReportStatus::Approved,
            encounter_id: "123456".to_string(),
            rendering_provider: "Jane Doe, MD".to_string(),
            service_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            diagnosis1: "A10.1".to_string(),
            diagnosis2: String::new(),
            charge: Decimal::new(15000, 2),
        };
        assert_eq!(record.month(), "2024-01");
    }
}
