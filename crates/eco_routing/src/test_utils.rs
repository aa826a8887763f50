use crate::{geopoint::GeoPoint, segment::RouteSegment};

pub(crate) fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).unwrap()
}

pub(crate) fn new_york() -> GeoPoint {
    point(40.712776, -74.005974)
}

pub(crate) fn chicago() -> GeoPoint {
    point(41.878113, -87.629799)
}

pub(crate) fn denver() -> GeoPoint {
    point(39.739236, -104.990251)
}

pub(crate) fn los_angeles() -> GeoPoint {
    point(34.052235, -118.243683)
}

pub(crate) fn segment(start: GeoPoint, end: GeoPoint) -> RouteSegment {
    RouteSegment::new(start, end)
}
