use std::fmt;

use thiserror::Error;

use crate::geopoint::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorKind {
    Traffic,
    Environment,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FactorKind::Traffic => "traffic",
                FactorKind::Environment => "environment",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Origin,
    Destination,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NodeRole::Origin => "origin",
                NodeRole::Destination => "destination",
            }
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EcoRouteError {
    #[error("Invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Invalid {kind} factor {value}: factors must be finite and non-negative")]
    InvalidFactor { kind: FactorKind, value: f64 },

    #[error(
        "Segment weight overflows: {distance} km x traffic {traffic_factor} x environment {environment_factor}"
    )]
    WeightOverflow {
        distance: f64,
        traffic_factor: f64,
        environment_factor: f64,
    },

    #[error("Invalid declared segment distance {value} km")]
    InvalidDistance { value: f64 },

    #[error("Cannot build a route graph from an empty segment list")]
    EmptyRoute,

    #[error("The {role} {coordinate} is not part of the route graph")]
    NodeNotFound {
        role: NodeRole,
        coordinate: GeoPoint,
    },

    #[error("No path from {origin} to {destination}")]
    NoPath {
        origin: GeoPoint,
        destination: GeoPoint,
    },
}

pub type Result<T, E = EcoRouteError> = std::result::Result<T, E>;
