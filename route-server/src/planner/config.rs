//! Planner configuration.

use crate::domain::DomainError;

/// Default share of distance in the balanced cost.
pub const DEFAULT_BALANCED_BLEND: f64 = 0.5;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Weight of distance in the balanced cost, in `[0, 1]`.
    ///
    /// Balanced edge cost is `blend * distance_km + (1 - blend) * time_min`.
    /// Units are blended raw: kilometres and minutes are added as-is.
    pub balanced_blend: f64,
}

impl PlannerConfig {
    /// Create a configuration with the given balanced blend.
    pub fn new(balanced_blend: f64) -> Result<Self, DomainError> {
        Self::default().with_blend(balanced_blend)
    }

    /// Set the balanced blend, rejecting values outside `[0, 1]`.
    pub fn with_blend(mut self, balanced_blend: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&balanced_blend) {
            return Err(DomainError::InvalidBlend(balanced_blend));
        }
        self.balanced_blend = balanced_blend;
        Ok(self)
    }

    /// Share of time in the balanced cost.
    pub fn time_share(&self) -> f64 {
        1.0 - self.balanced_blend
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            balanced_blend: DEFAULT_BALANCED_BLEND,
        }
    }
}
