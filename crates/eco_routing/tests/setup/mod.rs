#![allow(dead_code)]

use eco_routing::{GeoPoint, RouteSegment};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).unwrap()
}

pub fn new_york() -> GeoPoint {
    point(40.712776, -74.005974)
}

pub fn chicago() -> GeoPoint {
    point(41.878113, -87.629799)
}

pub fn los_angeles() -> GeoPoint {
    point(34.052235, -118.243683)
}

pub fn create_segments(legs: &[(GeoPoint, GeoPoint)]) -> Vec<RouteSegment> {
    legs.iter()
        .map(|&(start, end)| RouteSegment::new(start, end))
        .collect()
}

/// Coordinates on a `rows` x `cols` grid, 0.1 degree apart.
pub fn create_point_grid(rows: usize, cols: usize) -> Vec<Vec<GeoPoint>> {
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| point(row as f64 * 0.1, col as f64 * 0.1))
                .collect()
        })
        .collect()
}

/// Segments linking every grid point to its right and lower neighbour.
pub fn create_grid_segments(grid: &[Vec<GeoPoint>]) -> Vec<RouteSegment> {
    let mut segments = Vec::new();
    for (row, points) in grid.iter().enumerate() {
        for (col, &start) in points.iter().enumerate() {
            if col + 1 < points.len() {
                segments.push(RouteSegment::new(start, points[col + 1]));
            }
            if row + 1 < grid.len() {
                segments.push(RouteSegment::new(start, grid[row + 1][col]));
            }
        }
    }
    segments
}
