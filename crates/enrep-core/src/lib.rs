//! Core library for encounter report cleaning.
//!
//! This crate provides:
//! - Grid ingestion (CSV containers, plus a collaborator boundary for
//!   spreadsheet parsers)
//! - Row classification with a carried block status
//! - Content-pattern field extraction (encounter id, rendering provider,
//!   service date, diagnosis codes, charge)
//! - Monthly claims aggregation

pub mod error;
pub mod grid;
pub mod models;
pub mod report;
pub mod summary;

pub use error::{EnrepError, GridError, Result};
pub use grid::{read_grid, RawGrid};
pub use models::config::{EnrepConfig, ExtractionConfig, FillScope, IdSource, SummaryConfig};
pub use models::record::{EncounterRecord, MonthlySummary, ReportStatus};
pub use report::{CleanResult, ReportClassifier, ReportCleaner};
pub use summary::summarize;
