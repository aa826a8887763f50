use serde::Serialize;

use crate::{
    geopoint::GeoPoint,
    weighting::{Kilometers, Weight},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteLeg {
    start: GeoPoint,
    end: GeoPoint,
    distance: Kilometers,
    weight: Weight,
}

impl RouteLeg {
    pub fn new(start: GeoPoint, end: GeoPoint, distance: Kilometers, weight: Weight) -> RouteLeg {
        RouteLeg {
            start,
            end,
            distance,
            weight,
        }
    }

    pub fn start(&self) -> &GeoPoint {
        &self.start
    }

    pub fn end(&self) -> &GeoPoint {
        &self.end
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// The cheapest path found for one origin/destination query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcoRoute {
    waypoints: Vec<GeoPoint>,
    legs: Vec<RouteLeg>,
    weight: Weight,
    distance: Kilometers,
}

impl EcoRoute {
    /// `legs` must be contiguous, starting at `origin`.
    pub fn new(origin: GeoPoint, legs: Vec<RouteLeg>) -> EcoRoute {
        let mut waypoints = Vec::with_capacity(legs.len() + 1);
        waypoints.push(origin);
        waypoints.extend(legs.iter().map(|leg| leg.end));

        // Summed in path order, like the search accumulates it
        let weight = legs.iter().fold(0.0, |total, leg| total + leg.weight);
        let distance = legs.iter().fold(0.0, |total, leg| total + leg.distance);

        EcoRoute {
            waypoints,
            legs,
            weight,
            distance,
        }
    }

    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn origin(&self) -> &GeoPoint {
        &self.waypoints[0]
    }

    pub fn destination(&self) -> &GeoPoint {
        &self.waypoints[self.waypoints.len() - 1]
    }
}

impl From<&EcoRoute> for geo_types::LineString<f64> {
    fn from(route: &EcoRoute) -> Self {
        route
            .waypoints
            .iter()
            .map(geo_types::Coord::from)
            .collect::<Vec<_>>()
            .into()
    }
}
