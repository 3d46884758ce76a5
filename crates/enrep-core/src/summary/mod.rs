//! Monthly claims aggregation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::record::{EncounterRecord, MonthlySummary};

/// Group cleaned records into one summary row per month.
///
/// Charges for one encounter may span several report rows, so charges are
/// summed per `(month, encounter id)` first; each encounter then counts as a
/// single claim when its monthly total is compared against `threshold`
/// (strictly greater than vs at-or-below). Months come back in chronological
/// order.
pub fn summarize(records: &[EncounterRecord], threshold: Decimal) -> Vec<MonthlySummary> {
    // BTreeMaps keep both levels sorted; YYYY-MM keys order chronologically.
    let mut totals: BTreeMap<String, BTreeMap<String, Decimal>> = BTreeMap::new();

    for record in records {
        *totals
            .entry(record.month())
            .or_default()
            .entry(record.encounter_id.clone())
            .or_insert(Decimal::ZERO) += record.charge;
    }

    debug!("Summarizing {} records across {} months", records.len(), totals.len());

    totals
        .into_iter()
        .map(|(month, encounters)| {
            let total_claims = encounters.len();
            let claims_above_threshold = encounters
                .values()
                .filter(|total| **total > threshold)
                .count();
            MonthlySummary {
                month,
                total_claims,
                claims_above_threshold,
                claims_at_or_below_threshold: total_claims - claims_above_threshold,
            }
        })
        .collect()
}
