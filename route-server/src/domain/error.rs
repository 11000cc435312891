//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from search failures and I/O errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Cost mode name not recognised
    #[error("unknown route mode: {0} (expected distance, time, balanced or fewest-stops)")]
    UnknownCostMode(String),

    /// Edge has an empty station name
    #[error("edge has an empty station name")]
    EmptyStationName,

    /// Edge weight is negative, NaN or infinite
    #[error("invalid {field} for {a} - {b}: {value}")]
    InvalidWeight {
        a: String,
        b: String,
        field: &'static str,
        value: f64,
    },

    /// Balanced-mode blend weight outside [0, 1]
    #[error("blend weight must be between 0 and 1, got {0}")]
    InvalidBlend(f64),
}
