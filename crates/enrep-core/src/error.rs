//! Error types for the enrep-core library.

use thiserror::Error;

/// Main error type for the enrep library.
#[derive(Error, Debug)]
pub enum EnrepError {
    /// Grid ingestion error.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading a report container into a grid.
///
/// A failed container read is the only condition that aborts the pipeline;
/// every later anomaly degrades into a default value or a dropped record.
#[derive(Error, Debug)]
pub enum GridError {
    /// The container format is not recognized.
    #[error("unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// The container could not be parsed into rows.
    #[error("failed to parse report: {0}")]
    Parse(#[from] csv::Error),

    /// The container parsed but produced no rows.
    #[error("report has no rows")]
    Empty,

    /// I/O error while reading the container.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the enrep library.
pub type Result<T> = std::result::Result<T, EnrepError>;
