use serde::{Deserialize, Serialize};

use crate::{geopoint::GeoPoint, weighting::Kilometers};

/// One leg of a provider route, from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    start: GeoPoint,
    end: GeoPoint,

    /// Provider identifier of the step, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    /// Distance reported by the provider, in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    declared_distance: Option<Kilometers>,
}

impl RouteSegment {
    pub fn new(start: GeoPoint, end: GeoPoint) -> RouteSegment {
        RouteSegment {
            start,
            end,
            id: None,
            declared_distance: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> RouteSegment {
        self.id = Some(id.into());
        self
    }

    pub fn with_declared_distance(mut self, distance: Kilometers) -> RouteSegment {
        self.declared_distance = Some(distance);
        self
    }

    pub fn start(&self) -> &GeoPoint {
        &self.start
    }

    pub fn end(&self) -> &GeoPoint {
        &self.end
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn declared_distance(&self) -> Option<Kilometers> {
        self.declared_distance
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
