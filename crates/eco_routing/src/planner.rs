use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    config::PlannerConfig,
    error::Result,
    factors::{EnvironmentSummary, FactorSummary, TrafficSummary},
    geopoint::GeoPoint,
    graph::RouteGraph,
    graph_builder::RouteGraphBuilder,
    routing::{dijkstra::solve, eco_route::EcoRoute},
    segment::RouteSegment,
    weighting::EcoWeighting,
};

/// Everything a single planning query needs, as handed over by the data providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningRequest {
    pub segments: Vec<RouteSegment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic: Option<TrafficSummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentSummary>,

    pub origin: GeoPoint,
    pub destination: GeoPoint,
}

/// Builds route graphs and solves queries over them. Holds configuration only,
/// every call works on its own graph.
#[derive(Debug, Clone)]
pub struct EcoRoutePlanner {
    config: PlannerConfig,
    builder: RouteGraphBuilder<EcoWeighting>,
}

impl Default for EcoRoutePlanner {
    fn default() -> Self {
        let config = PlannerConfig::default();
        let builder = RouteGraphBuilder::new(EcoWeighting::new(config.distance_policy));
        EcoRoutePlanner { config, builder }
    }
}

impl EcoRoutePlanner {
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;

        let builder = RouteGraphBuilder::new(EcoWeighting::new(config.distance_policy));
        Ok(EcoRoutePlanner { config, builder })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Missing summaries fall back to the configured default factors.
    pub fn build_graph(
        &self,
        segments: &[RouteSegment],
        traffic: Option<&TrafficSummary>,
        environment: Option<&EnvironmentSummary>,
    ) -> Result<RouteGraph> {
        let default_traffic;
        let traffic = match traffic {
            Some(traffic) => traffic,
            None => {
                default_traffic = FactorSummary::uniform(self.config.default_traffic_factor);
                &default_traffic
            }
        };

        let default_environment;
        let environment = match environment {
            Some(environment) => environment,
            None => {
                default_environment =
                    FactorSummary::uniform(self.config.default_environment_factor);
                &default_environment
            }
        };

        self.builder.build(segments, traffic, environment)
    }

    pub fn solve(
        &self,
        graph: &RouteGraph,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<EcoRoute> {
        solve(graph, origin, destination)
    }

    #[instrument(level = "debug", skip_all, fields(segments = request.segments.len()))]
    pub fn plan(&self, request: &PlanningRequest) -> Result<EcoRoute> {
        let graph = self.build_graph(
            &request.segments,
            request.traffic.as_ref(),
            request.environment.as_ref(),
        )?;

        let route = self.solve(&graph, &request.origin, &request.destination)?;
        debug!(
            waypoints = route.waypoints().len(),
            weight = route.weight(),
            "planned eco route"
        );

        Ok(route)
    }

    /// Solves every `(origin, destination)` query against the same graph in parallel.
    /// Results are returned in query order.
    pub fn solve_many(
        &self,
        graph: &RouteGraph,
        queries: &[(GeoPoint, GeoPoint)],
    ) -> Vec<Result<EcoRoute>> {
        debug!(queries = queries.len(), "solving batch");

        queries
            .par_iter()
            .map(|(origin, destination)| solve(graph, origin, destination))
            .collect()
    }
}
