use tracing::debug;

use crate::{
    error::{EcoRouteError, Result},
    factors::{EnvironmentSummary, TrafficSummary},
    graph::{EdgeInsert, Graph, RouteGraph},
    segment::RouteSegment,
    stopwatch::Stopwatch,
    weighting::{EcoWeighting, Weighting},
};

/// Turns an ordered list of provider segments into a [`RouteGraph`].
#[derive(Debug, Clone, Default)]
pub struct RouteGraphBuilder<W = EcoWeighting> {
    weighting: W,
}

impl<W: Weighting> RouteGraphBuilder<W> {
    pub fn new(weighting: W) -> Self {
        RouteGraphBuilder { weighting }
    }

    pub fn weighting(&self) -> &W {
        &self.weighting
    }

    /// Adds one directed edge per segment, in input order. Segments linking the same
    /// pair of coordinates collapse into a single edge carrying the cheapest weight.
    /// The first segment that cannot be weighted aborts the build.
    pub fn build(
        &self,
        segments: &[RouteSegment],
        traffic: &TrafficSummary,
        environment: &EnvironmentSummary,
    ) -> Result<RouteGraph> {
        if segments.is_empty() {
            return Err(EcoRouteError::EmptyRoute);
        }

        let stopwatch = Stopwatch::new("route_graph_builder/build");
        let mut graph = RouteGraph::with_capacity(segments.len());
        let mut merged = 0;
        let mut degenerate = 0;

        for (index, segment) in segments.iter().enumerate() {
            let distance = self.weighting.calc_segment_distance(segment)?;
            let weight = self.weighting.calc_weight(
                distance,
                traffic.factor_for(index),
                environment.factor_for(index),
            )?;

            if segment.is_degenerate() {
                degenerate += 1;
            }

            if let EdgeInsert::Merged { .. } =
                graph.add_edge(*segment.start(), *segment.end(), distance, weight)
            {
                merged += 1;
            }
        }

        debug!(
            segments = segments.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            merged,
            degenerate,
            per_segment_factors = !traffic.is_uniform() || !environment.is_uniform(),
            "built route graph"
        );
        stopwatch.report();

        Ok(graph)
    }
}

/// Builds a graph with great-circle segment distances.
pub fn build_route_graph(
    segments: &[RouteSegment],
    traffic: &TrafficSummary,
    environment: &EnvironmentSummary,
) -> Result<RouteGraph> {
    RouteGraphBuilder::<EcoWeighting>::default().build(segments, traffic, environment)
}
