//! Route cost modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// What a route search minimises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostMode {
    /// Total track distance
    #[default]
    Distance,
    /// Total travel time
    Time,
    /// Blend of distance and time in raw units
    Balanced,
    /// Number of hops, ignoring weights
    FewestStops,
}

impl CostMode {
    /// Every mode, in the order offered to users.
    pub const ALL: [CostMode; 4] = [
        CostMode::Distance,
        CostMode::Time,
        CostMode::Balanced,
        CostMode::FewestStops,
    ];

    /// Returns the canonical name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostMode::Distance => "distance",
            CostMode::Time => "time",
            CostMode::Balanced => "balanced",
            CostMode::FewestStops => "fewest-stops",
        }
    }

    /// Returns true if this mode runs the weighted search.
    pub fn is_weighted(&self) -> bool {
        !matches!(self, CostMode::FewestStops)
    }
}

impl FromStr for CostMode {
    type Err = DomainError;

    /// Parse a mode name, ignoring case and surrounding whitespace.
    ///
    /// `bfs`, `fewest_stops` and `stops` are accepted as aliases for
    /// [`CostMode::FewestStops`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(CostMode::Distance),
            "time" => Ok(CostMode::Time),
            "balanced" => Ok(CostMode::Balanced),
            "fewest-stops" | "fewest_stops" | "stops" | "bfs" => Ok(CostMode::FewestStops),
            _ => Err(DomainError::UnknownCostMode(s.to_string())),
        }
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
