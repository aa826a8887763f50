//! Eco-friendly route planning.
//!
//! Route segments from a routing provider are weighted by their great-circle
//! length times a traffic factor and an environmental factor, assembled into a
//! directed [`RouteGraph`], and searched with Dijkstra for the cheapest path.

mod constants;
pub mod config;
pub mod error;
pub mod factors;
pub mod geopoint;
pub mod graph;
pub mod graph_builder;
pub mod planner;
pub mod routing;
pub mod segment;
mod stopwatch;
#[cfg(test)]
mod test_utils;
pub mod weighting;

pub use config::PlannerConfig;
pub use error::{EcoRouteError, FactorKind, NodeRole, Result};
pub use factors::{EnvironmentSummary, FactorSummary, TrafficSummary};
pub use geopoint::{GeoPoint, distance, haversine_distance};
pub use graph::{EdgeId, Graph, GraphEdge, NodeId, RouteGraph};
pub use graph_builder::{RouteGraphBuilder, build_route_graph};
pub use planner::{EcoRoutePlanner, PlanningRequest};
pub use routing::dijkstra::{Dijkstra, solve};
pub use routing::eco_route::{EcoRoute, RouteLeg};
pub use routing::shortest_path_algorithm::ShortestPathAlgorithm;
pub use segment::RouteSegment;
pub use weighting::{DistancePolicy, EcoWeighting, Kilometers, Weight, Weighting};
