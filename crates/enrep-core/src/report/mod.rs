//! Encounter record extraction module.

mod cleaner;
pub mod rules;

pub use cleaner::{forward_fill, CleanResult, RecordDraft, ReportClassifier, ReportCleaner};
