//! Error types for the shot-event library.

use thiserror::Error;

use crate::shot::Foot;

/// Errors raised while loading the shot-event table.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Source file missing or unreadable
    #[error("failed to read shot table: {0}")]
    Io(#[from] std::io::Error),

    /// CSV schema mismatch or unparseable field
    #[error("failed to parse shot table: {0}")]
    Csv(#[from] csv::Error),

    /// A row is missing its season label
    #[error("row {row}: empty season label")]
    EmptySeason { row: usize },

    /// A row carries a negative expected-goals value
    #[error("row {row}: negative xG value {value}")]
    NegativeXg { row: usize, value: f64 },
}

/// Errors raised by an analysis pipeline over otherwise valid data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    /// A category required for fixed-order display is absent
    #[error("no {}-footed shots in the filtered data", .0.label().to_lowercase())]
    MissingFootCategory(Foot),
}
