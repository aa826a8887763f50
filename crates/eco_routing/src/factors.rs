use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FACTOR;

/// A multiplicative factor reported for a whole route, with optional
/// per-segment overrides keyed by the segment's position in the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorSummary {
    factor: f64,

    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    overrides: FxHashMap<usize, f64>,
}

/// Congestion multiplier reported by a traffic provider.
pub type TrafficSummary = FactorSummary;

/// Environmental impact multiplier reported by an environment provider.
pub type EnvironmentSummary = FactorSummary;

impl FactorSummary {
    pub fn uniform(factor: f64) -> FactorSummary {
        FactorSummary {
            factor,
            overrides: FxHashMap::default(),
        }
    }

    /// Uses `fallback` when the provider did not report a factor.
    pub fn from_reported(reported: Option<f64>, fallback: f64) -> FactorSummary {
        FactorSummary::uniform(reported.unwrap_or(fallback))
    }

    pub fn with_override(mut self, segment_index: usize, factor: f64) -> FactorSummary {
        self.overrides.insert(segment_index, factor);
        self
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[inline(always)]
    pub fn factor_for(&self, segment_index: usize) -> f64 {
        self.overrides
            .get(&segment_index)
            .copied()
            .unwrap_or(self.factor)
    }

    pub fn is_uniform(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl Default for FactorSummary {
    fn default() -> Self {
        FactorSummary::uniform(DEFAULT_FACTOR)
    }
}
