use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_FACTOR,
    error::{EcoRouteError, FactorKind, Result},
    weighting::DistancePolicy,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub distance_policy: DistancePolicy,

    /// Used when the traffic provider reported nothing for a route
    pub default_traffic_factor: f64,

    /// Used when the environment provider reported nothing for a route
    pub default_environment_factor: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            distance_policy: DistancePolicy::default(),
            default_traffic_factor: DEFAULT_FACTOR,
            default_environment_factor: DEFAULT_FACTOR,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        for (kind, value) in [
            (FactorKind::Traffic, self.default_traffic_factor),
            (FactorKind::Environment, self.default_environment_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EcoRouteError::InvalidFactor { kind, value });
            }
        }

        Ok(())
    }
}
