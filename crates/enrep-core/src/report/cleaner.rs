//! Row classification and record assembly.

use std::time::Instant;

use tracing::{debug, info};

use crate::grid::RawGrid;
use crate::models::config::{ExtractionConfig, FillScope, IdSource};
use crate::models::record::{EncounterRecord, ReportStatus};

use super::rules::{
    charges::{coerce_charge, ChargeRule},
    dates::{parse_service_date, ServiceDateRule},
    diagnosis::DiagnosisRule,
    identifier::IdentifierRule,
    provider::ProviderRule,
    status::detect_status,
    FieldRule,
};

/// A tentative record scanned from one detail row, before forward-fill and
/// the final date filter. Every field is raw cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub status: ReportStatus,
    pub encounter_id: String,
    pub rendering_provider: String,
    pub service_date: String,
    pub diagnosis1: String,
    pub diagnosis2: String,
    pub charge: String,
}

/// Result of cleaning one report grid.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Cleaned encounter records, in report order.
    pub records: Vec<EncounterRecord>,

    /// Physical rows scanned, markers and blanks included.
    pub rows_scanned: usize,

    /// Drafts discarded by the service-date filter.
    pub rows_dropped: usize,

    /// Extraction warnings.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for report cleaning implementations.
pub trait ReportClassifier {
    /// Classify grid rows into cleaned encounter records.
    fn classify(&self, grid: &RawGrid) -> Vec<EncounterRecord>;
}

/// Report cleaner walking a raw grid with a carried status.
///
/// The governing status prints once per section in source reports, so it is
/// threaded through the scan as fold state rather than read per row.
pub struct ReportCleaner {
    identifier: IdentifierRule,
    fill_scope: FillScope,
}

impl ReportCleaner {
    /// Create a cleaner with default settings.
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create a cleaner from an extraction config.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            identifier: IdentifierRule::new().with_source(config.id_source),
            fill_scope: config.fill_scope,
        }
    }

    /// Set the identifier extraction strategy.
    pub fn with_id_source(mut self, source: IdSource) -> Self {
        self.identifier = IdentifierRule::new().with_source(source);
        self
    }

    /// Set the forward-fill scope.
    pub fn with_fill_scope(mut self, scope: FillScope) -> Self {
        self.fill_scope = scope;
        self
    }

    /// Clean a report grid into encounter records.
    pub fn clean(&self, grid: &RawGrid) -> CleanResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Cleaning report grid with {} rows", grid.len());

        let mut drafts = self.scan(grid);
        let emitted = drafts.len();

        forward_fill(&mut drafts, self.fill_scope);

        let records = finalize(drafts);
        let rows_dropped = emitted - records.len();

        if rows_dropped > 0 {
            debug!("Dropped {} rows without a parseable service date", rows_dropped);
        }
        if records.is_empty() {
            warnings.push("No encounter records with a valid service date".to_string());
        }

        debug!(
            "Cleaned {} records from {} detail rows",
            records.len(),
            emitted
        );

        CleanResult {
            records,
            rows_scanned: grid.len(),
            rows_dropped,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Single pass over the grid: track the governing status, emit one draft
    /// per detail row.
    fn scan(&self, grid: &RawGrid) -> Vec<RecordDraft> {
        let provider = ProviderRule::new();
        let date = ServiceDateRule::new();
        let charge = ChargeRule::new();
        let diagnosis = DiagnosisRule::new();

        let mut current_status: Option<ReportStatus> = None;
        let mut drafts = Vec::new();

        for row in grid.rows() {
            let first = row.first().map(String::as_str).unwrap_or("");
            if let Some(status) = detect_status(first) {
                current_status = Some(status);
                continue;
            }

            // Detail rows before the first marker and blank separator rows
            // contribute nothing, and do not change state.
            let Some(status) = current_status else {
                continue;
            };
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }

            // A row matching no pattern still becomes a draft: it can pick up
            // id and provider from forward-fill before the date filter runs.
            let (diagnosis1, diagnosis2) = diagnosis.first_two(row);
            drafts.push(RecordDraft {
                status,
                encounter_id: self.identifier.extract(row).unwrap_or_default(),
                rendering_provider: provider.extract(row).unwrap_or_default(),
                service_date: date.extract(row).unwrap_or_default(),
                diagnosis1,
                diagnosis2,
                charge: charge.extract(row).unwrap_or_default(),
            });
        }

        drafts
    }
}

impl Default for ReportCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportClassifier for ReportCleaner {
    fn classify(&self, grid: &RawGrid) -> Vec<EncounterRecord> {
        self.clean(grid).records
    }
}

/// Replace each empty encounter id and rendering provider with the nearest
/// preceding non-empty value. A leading empty value stays empty.
///
/// With [`FillScope::PerBlock`] the fill memory resets whenever the status
/// changes between consecutive drafts. Filling is idempotent: a second pass
/// over already-filled drafts changes nothing.
pub fn forward_fill(drafts: &mut [RecordDraft], scope: FillScope) {
    let mut last_id = String::new();
    let mut last_provider = String::new();
    let mut last_status: Option<ReportStatus> = None;

    for draft in drafts.iter_mut() {
        if scope == FillScope::PerBlock && last_status != Some(draft.status) {
            last_id.clear();
            last_provider.clear();
        }
        last_status = Some(draft.status);

        if draft.encounter_id.is_empty() {
            draft.encounter_id = last_id.clone();
        } else {
            last_id = draft.encounter_id.clone();
        }

        if draft.rendering_provider.is_empty() {
            draft.rendering_provider = last_provider.clone();
        } else {
            last_provider = draft.rendering_provider.clone();
        }
    }
}

/// Coerce charges, parse dates, and keep only drafts naming a real date.
fn finalize(drafts: Vec<RecordDraft>) -> Vec<EncounterRecord> {
    drafts
        .into_iter()
        .filter_map(|draft| {
            let service_date = parse_service_date(&draft.service_date)?;
            Some(EncounterRecord {
                status: draft.status,
                encounter_id: draft.encounter_id,
                rendering_provider: draft.rendering_provider,
                service_date,
                diagnosis1: draft.diagnosis1,
                diagnosis2: draft.diagnosis2,
                charge: coerce_charge(&draft.charge),
            })
        })
        .collect()
}
