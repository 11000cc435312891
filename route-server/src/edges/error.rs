//! Edge list loading errors.

use crate::domain::DomainError;

/// Errors that can occur while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum EdgeListError {
    /// Could not open or read the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (e.g. bad quoting or invalid UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row has fewer than four fields
    #[error("line {line}: expected 4 fields (station, station, distance, time), got {found}")]
    MissingField { line: u64, found: usize },

    /// Distance or time is not a number
    #[error("line {line}: {field} is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// Row parsed but describes an unusable edge
    #[error("line {line}: {source}")]
    InvalidEdge {
        line: u64,
        #[source]
        source: DomainError,
    },
}

impl EdgeListError {
    /// Line number the error refers to, if any.
    pub fn line(&self) -> Option<u64> {
        match self {
            EdgeListError::MissingField { line, .. }
            | EdgeListError::InvalidNumber { line, .. }
            | EdgeListError::InvalidEdge { line, .. } => Some(*line),
            EdgeListError::Csv(e) => e.position().map(|p| p.line()),
            EdgeListError::Io(_) => None,
        }
    }
}
