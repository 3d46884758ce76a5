//! Configuration structures for the cleaning pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main configuration for the enrep pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrepConfig {
    /// Record extraction configuration.
    pub extraction: ExtractionConfig,

    /// Monthly summary configuration.
    pub summary: SummaryConfig,
}

/// Record extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Where the encounter identifier is taken from.
    pub id_source: IdSource,

    /// Whether forward-fill memory survives a status change.
    pub fill_scope: FillScope,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            id_source: IdSource::PatternScanned,
            fill_scope: FillScope::AcrossBlocks,
        }
    }
}

/// Identifier extraction strategy.
///
/// Two export generations exist: one pins the identifier to the second
/// column, the other shifts columns freely so the identifier must be found
/// by content shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSource {
    /// Second cell of the row, all digits, more than two of them.
    PositionPinned,
    /// First cell anywhere in the row matching the numeric-token pattern.
    PatternScanned,
}

/// Forward-fill scope for encounter id and rendering provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillScope {
    /// Fill carries across status-marker boundaries.
    AcrossBlocks,
    /// Fill memory resets at each status change.
    PerBlock,
}

/// Monthly summary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Per-encounter monthly charge total above which a claim counts as high.
    pub charge_threshold: Decimal,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            charge_threshold: Decimal::new(800, 0),
        }
    }
}

impl EnrepConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
