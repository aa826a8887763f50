/// Mean Earth radius (IUGG), in kilometers.
pub(crate) const EARTH_RADIUS_KM: f64 = 6_371.008_8;

pub(crate) const INVALID_NODE: usize = usize::MAX;
pub(crate) const INVALID_EDGE: usize = usize::MAX;

/// Factor applied when a provider does not report one.
pub(crate) const DEFAULT_FACTOR: f64 = 1.0;
