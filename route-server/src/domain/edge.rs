//! Raw network edges.

use serde::{Deserialize, Serialize};

use super::{DomainError, Station};

/// An undirected connection between two stations.
///
/// An edge between `a` and `b` can be travelled in either direction with
/// the same distance and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint
    pub a: Station,
    /// The other endpoint
    pub b: Station,
    /// Track distance in kilometres
    pub distance_km: f64,
    /// Travel time in minutes
    pub time_min: f64,
}

impl Edge {
    /// Creates a new edge. No validation is performed.
    pub fn new(
        a: impl Into<Station>,
        b: impl Into<Station>,
        distance_km: f64,
        time_min: f64,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            distance_km,
            time_min,
        }
    }

    /// Check the edge is usable by the weighted search.
    ///
    /// Both station names must be non-empty and both weights finite and
    /// non-negative. Zero weights are allowed.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.a.as_str().is_empty() || self.b.as_str().is_empty() {
            return Err(DomainError::EmptyStationName);
        }
        self.check_weight("distance", self.distance_km)?;
        self.check_weight("time", self.time_min)
    }

    fn check_weight(&self, field: &'static str, value: f64) -> Result<(), DomainError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(DomainError::InvalidWeight {
                a: self.a.to_string(),
                b: self.b.to_string(),
                field,
                value,
            })
        }
    }
}
