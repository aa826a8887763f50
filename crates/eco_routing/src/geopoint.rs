use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{
    constants::EARTH_RADIUS_KM,
    error::{EcoRouteError, Result},
    weighting::Kilometers,
};

/// A validated WGS84 coordinate in degrees.
///
/// Coordinates compare and hash by value, which is what the route graph uses
/// to deduplicate nodes. `-0.0` is normalized to `0.0` on construction so both
/// spellings of the same point end up on the same node.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint", into = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = EcoRouteError;

    fn try_from(raw: RawGeoPoint) -> Result<Self> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

impl From<GeoPoint> for RawGeoPoint {
    fn from(point: GeoPoint) -> Self {
        RawGeoPoint {
            lat: point.lat,
            lng: point.lng,
        }
    }
}

#[inline(always)]
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

fn is_valid(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<GeoPoint> {
        // Range checks are false for NaN as well
        if !is_valid(lat, lng) {
            return Err(EcoRouteError::InvalidCoordinate { lat, lng });
        }

        Ok(GeoPoint {
            lat: normalize_zero(lat),
            lng: normalize_zero(lng),
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> Kilometers {
        haversine(self.lat, self.lng, other.lat, other.lng)
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lng.to_bits() == other.lng.to_bits()
    }
}

// NaN is rejected by the constructor, so bitwise equality is an equivalence
impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lng.to_bits().hash(state);
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<&GeoPoint> for geo_types::Coord<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

/// Great-circle distance between two coordinates, in kilometers.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> Kilometers {
    a.haversine_distance(b)
}

/// Great-circle distance between two raw coordinates given in degrees.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<Kilometers> {
    if !is_valid(lat1, lng1) {
        return Err(EcoRouteError::InvalidCoordinate {
            lat: lat1,
            lng: lng1,
        });
    }

    if !is_valid(lat2, lng2) {
        return Err(EcoRouteError::InvalidCoordinate {
            lat: lat2,
            lng: lng2,
        });
    }

    Ok(haversine(lat1, lng1, lat2, lng2))
}

fn haversine(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Kilometers {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    // Absolute deltas keep the result bit-for-bit symmetric in its arguments
    let delta_lat = (lat2 - lat1).abs().to_radians();
    let delta_lng = (lng2 - lng1).abs().to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
