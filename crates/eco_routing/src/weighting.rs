use serde::{Deserialize, Serialize};

use crate::{
    error::{EcoRouteError, FactorKind, Result},
    geopoint::distance,
    segment::RouteSegment,
};

pub type Weight = f64;
pub type Kilometers = f64;

/// Where a segment's base distance comes from. A weighting is built with one
/// policy and applies it to every segment it sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistancePolicy {
    /// Great-circle distance between the segment's endpoints
    #[default]
    Haversine,
    /// Provider-declared distance, great-circle distance when none is declared
    Declared,
}

fn check_factor(kind: FactorKind, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(EcoRouteError::InvalidFactor { kind, value });
    }

    Ok(value)
}

pub trait Weighting {
    fn calc_segment_distance(&self, segment: &RouteSegment) -> Result<Kilometers>;

    /// `distance * traffic * environment`. A zero factor yields a valid zero-cost edge.
    fn calc_weight(
        &self,
        distance: Kilometers,
        traffic_factor: f64,
        environment_factor: f64,
    ) -> Result<Weight> {
        let traffic_factor = check_factor(FactorKind::Traffic, traffic_factor)?;
        let environment_factor = check_factor(FactorKind::Environment, environment_factor)?;

        if distance == 0.0 || traffic_factor == 0.0 || environment_factor == 0.0 {
            return Ok(0.0);
        }

        let weight = distance * traffic_factor * environment_factor;
        if !weight.is_finite() {
            return Err(EcoRouteError::WeightOverflow {
                distance,
                traffic_factor,
                environment_factor,
            });
        }

        Ok(weight)
    }

    fn calc_segment_weight(
        &self,
        segment: &RouteSegment,
        traffic_factor: f64,
        environment_factor: f64,
    ) -> Result<Weight> {
        let distance = self.calc_segment_distance(segment)?;
        self.calc_weight(distance, traffic_factor, environment_factor)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EcoWeighting {
    policy: DistancePolicy,
}

impl EcoWeighting {
    pub fn new(policy: DistancePolicy) -> Self {
        EcoWeighting { policy }
    }

    pub fn policy(&self) -> DistancePolicy {
        self.policy
    }
}

impl Weighting for EcoWeighting {
    fn calc_segment_distance(&self, segment: &RouteSegment) -> Result<Kilometers> {
        match (self.policy, segment.declared_distance()) {
            (DistancePolicy::Declared, Some(declared)) => {
                if !declared.is_finite() || declared < 0.0 {
                    return Err(EcoRouteError::InvalidDistance { value: declared });
                }
                Ok(declared)
            }
            _ => Ok(distance(segment.start(), segment.end())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{chicago, los_angeles, new_york};

    #[test]
    fn weight_is_distance_times_factors() {
        let weighting = EcoWeighting::default();
        let segment = RouteSegment::new(new_york(), chicago());

        let base = distance(&new_york(), &chicago());
        let weight = weighting.calc_segment_weight(&segment, 1.2, 1.5).unwrap();

        assert_eq!(weight, base * 1.2 * 1.5);
    }

    #[test]
    fn zero_factor_gives_zero_weight() {
        let weighting = EcoWeighting::default();
        let segment = RouteSegment::new(new_york(), chicago());

        assert_eq!(weighting.calc_segment_weight(&segment, 0.0, 1.5), Ok(0.0));
        assert_eq!(weighting.calc_segment_weight(&segment, 1.2, 0.0), Ok(0.0));
    }

    #[test]
    fn degenerate_segment_gives_zero_weight() {
        let weighting = EcoWeighting::default();
        let segment = RouteSegment::new(chicago(), chicago());

        assert_eq!(weighting.calc_segment_weight(&segment, 3.0, 2.0), Ok(0.0));
    }

    #[test]
    fn rejects_negative_and_non_finite_factors() {
        let weighting = EcoWeighting::default();
        let segment = RouteSegment::new(new_york(), chicago());

        assert_eq!(
            weighting.calc_segment_weight(&segment, -0.1, 1.0),
            Err(EcoRouteError::InvalidFactor {
                kind: FactorKind::Traffic,
                value: -0.1
            })
        );
        assert_eq!(
            weighting.calc_segment_weight(&segment, 1.0, -2.0),
            Err(EcoRouteError::InvalidFactor {
                kind: FactorKind::Environment,
                value: -2.0
            })
        );
        assert!(weighting.calc_segment_weight(&segment, f64::NAN, 1.0).is_err());
        assert!(
            weighting
                .calc_segment_weight(&segment, 1.0, f64::INFINITY)
                .is_err()
        );
    }

    #[test]
    fn rejects_weights_that_overflow() {
        let weighting = EcoWeighting::default();
        let segment = RouteSegment::new(new_york(), chicago());
        let base = distance(&new_york(), &chicago());

        assert_eq!(
            weighting.calc_segment_weight(&segment, 1e200, 1e200),
            Err(EcoRouteError::WeightOverflow {
                distance: base,
                traffic_factor: 1e200,
                environment_factor: 1e200
            })
        );
        assert!(weighting.calc_weight(base, 1e150, 1e150).is_ok_and(f64::is_finite));
    }

    #[test]
    fn weight_is_monotonic_in_factors() {
        let weighting = EcoWeighting::default();
        let segment = RouteSegment::new(chicago(), los_angeles());
        let factors = [0.0, 0.25, 0.5, 1.0, 1.2, 2.0, 10.0];

        for &fixed in &factors {
            let mut previous_traffic = 0.0;
            let mut previous_environment = 0.0;
            for &growing in &factors {
                let by_traffic = weighting.calc_segment_weight(&segment, growing, fixed).unwrap();
                let by_environment = weighting.calc_segment_weight(&segment, fixed, growing).unwrap();

                assert!(by_traffic >= previous_traffic);
                assert!(by_environment >= previous_environment);

                previous_traffic = by_traffic;
                previous_environment = by_environment;
            }
        }
    }

    #[test]
    fn declared_policy_trusts_provider_distance() {
        let segment = RouteSegment::new(new_york(), chicago()).with_declared_distance(1_270.0);

        let declared = EcoWeighting::new(DistancePolicy::Declared);
        assert_eq!(declared.calc_segment_distance(&segment), Ok(1_270.0));

        let haversine = EcoWeighting::new(DistancePolicy::Haversine);
        assert_eq!(
            haversine.calc_segment_distance(&segment),
            Ok(distance(&new_york(), &chicago()))
        );
    }

    #[test]
    fn declared_policy_falls_back_to_haversine() {
        let segment = RouteSegment::new(new_york(), chicago());
        let declared = EcoWeighting::new(DistancePolicy::Declared);

        assert_eq!(
            declared.calc_segment_distance(&segment),
            Ok(distance(&new_york(), &chicago()))
        );
    }

    #[test]
    fn declared_policy_rejects_negative_distance() {
        let segment = RouteSegment::new(new_york(), chicago()).with_declared_distance(-5.0);
        let declared = EcoWeighting::new(DistancePolicy::Declared);

        assert_eq!(
            declared.calc_segment_weight(&segment, 1.0, 1.0),
            Err(EcoRouteError::InvalidDistance { value: -5.0 })
        );
    }
}
