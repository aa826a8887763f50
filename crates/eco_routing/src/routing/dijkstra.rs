use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::constants::{INVALID_EDGE, INVALID_NODE};
use crate::error::{EcoRouteError, NodeRole, Result};
use crate::geopoint::GeoPoint;
use crate::graph::{EdgeId, Graph, NodeId};
use crate::routing::eco_route::{EcoRoute, RouteLeg};
use crate::routing::shortest_path_algorithm::ShortestPathAlgorithm;
use crate::stopwatch::Stopwatch;
use crate::weighting::Weight;

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: Weight,

    /// Push order, so that equal weights pop first-discovered first
    sequence: usize,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight and sequence to make this a min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct NodeData {
    settled: bool,
    weight: Weight,
    parent: NodeId,
    edge_id: EdgeId, // Edge ID from parent to current node
}

/// Dijkstra search over non-negative weights.
///
/// A label is only replaced by a strictly cheaper one, so among paths of equal
/// weight the one discovered first wins. Because edges are scanned in insertion
/// order, the result is reproducible for a given graph.
#[derive(Default)]
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<NodeId, NodeData>,
    sequence: usize,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    fn init(&mut self, start: NodeId) {
        self.heap.clear();
        self.data.clear();
        self.sequence = 0;

        self.update_node_data(start, 0.0, INVALID_NODE, INVALID_EDGE);
        self.push(start, 0.0);
    }

    fn push(&mut self, node_id: NodeId, weight: Weight) {
        self.heap.push(HeapItem {
            node_id,
            weight,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    fn update_node_data(&mut self, node: NodeId, weight: Weight, parent: NodeId, edge_id: EdgeId) {
        self.data.insert(
            node,
            NodeData {
                settled: false,
                weight,
                parent,
                edge_id,
            },
        );
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> Option<Weight> {
        self.data.get(&node).map(|data| data.weight)
    }

    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
    }

    fn build_path(&self, graph: &impl Graph, start: NodeId, end: NodeId) -> EcoRoute {
        let mut legs: Vec<RouteLeg> = Vec::with_capacity(32);

        let mut node = end;
        while let Some(node_data) = self.data.get(&node) {
            if node_data.parent == INVALID_NODE {
                break;
            }

            let edge = graph.edge(node_data.edge_id);
            legs.push(RouteLeg::new(
                *graph.node_geometry(node_data.parent),
                *graph.node_geometry(node),
                edge.distance(),
                edge.weight(),
            ));
            node = node_data.parent;
        }

        legs.reverse();

        EcoRoute::new(*graph.node_geometry(start), legs)
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<EcoRoute> {
        let start = graph
            .node_id(origin)
            .ok_or(EcoRouteError::NodeNotFound {
                role: NodeRole::Origin,
                coordinate: *origin,
            })?;
        let end = graph
            .node_id(destination)
            .ok_or(EcoRouteError::NodeNotFound {
                role: NodeRole::Destination,
                coordinate: *destination,
            })?;

        let stopwatch = Stopwatch::new("dijkstra/calc_path");

        self.init(start);

        let mut iterations = 0;
        let mut nodes_visited = 0;
        let mut found = false;

        while let Some(HeapItem {
            node_id, weight, ..
        }) = self.heap.pop()
        {
            // Node is already settled, skip
            if self.is_settled(node_id) {
                continue;
            }

            // Stale entry, a cheaper label was pushed later
            if self
                .current_shortest_weight(node_id)
                .is_some_and(|current| weight > current)
            {
                continue;
            }

            self.set_settled(node_id);
            iterations += 1;

            if node_id == end {
                found = true;
                break;
            }

            for edge_id in graph.node_edges_iter(node_id) {
                let edge = graph.edge(edge_id);
                let adj_node = edge.end_node();

                if self.is_settled(adj_node) {
                    continue;
                }

                nodes_visited += 1;

                let next_weight = weight + edge.weight();

                let improves = self
                    .current_shortest_weight(adj_node)
                    .is_none_or(|current| next_weight < current);

                if improves {
                    self.update_node_data(adj_node, next_weight, node_id, edge_id);
                    self.push(adj_node, next_weight);
                }
            }
        }

        debug!(iterations, nodes_visited, found, "dijkstra finished");
        stopwatch.report();

        if !found {
            return Err(EcoRouteError::NoPath {
                origin: *origin,
                destination: *destination,
            });
        }

        Ok(self.build_path(graph, start, end))
    }
}

/// Cheapest route from `origin` to `destination` over `graph`.
pub fn solve(graph: &impl Graph, origin: &GeoPoint, destination: &GeoPoint) -> Result<EcoRoute> {
    Dijkstra::new().calc_path(graph, origin, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        factors::FactorSummary,
        graph::RouteGraph,
        graph_builder::build_route_graph,
        test_utils::{chicago, denver, los_angeles, new_york, point, segment},
    };

    fn graph_from(edges: &[(GeoPoint, GeoPoint)]) -> RouteGraph {
        let segments: Vec<_> = edges.iter().map(|&(a, b)| segment(a, b)).collect();
        build_route_graph(&segments, &FactorSummary::default(), &FactorSummary::default()).unwrap()
    }

    #[test]
    fn test_calc_path() {
        let graph = graph_from(&[
            (new_york(), chicago()),
            (chicago(), denver()),
            (denver(), los_angeles()),
            (chicago(), los_angeles()),
        ]);

        let route = solve(&graph, &new_york(), &los_angeles()).unwrap();

        // Chicago -> LA directly is shorter than the detour through Denver
        assert_eq!(route.waypoints(), &[new_york(), chicago(), los_angeles()]);
        assert_eq!(route.legs().len(), 2);
    }

    #[test]
    fn picks_cheaper_detour() {
        let a = point(0.0, 0.0);
        let b = point(0.0, 1.0);
        let c = point(0.0, 2.0);
        let d = point(1.0, 1.0);

        let segments = vec![segment(a, c), segment(a, b), segment(b, c), segment(a, d)];
        // Direct a -> c is heavily congested
        let traffic = FactorSummary::uniform(1.0).with_override(0, 5.0);
        let graph = build_route_graph(&segments, &traffic, &FactorSummary::default()).unwrap();

        let route = solve(&graph, &a, &c).unwrap();

        assert_eq!(route.waypoints(), &[a, b, c]);
    }

    #[test]
    fn origin_equals_destination() {
        let graph = graph_from(&[(new_york(), chicago())]);

        let route = solve(&graph, &chicago(), &chicago()).unwrap();

        assert_eq!(route.waypoints(), &[chicago()]);
        assert_eq!(route.weight(), 0.0);
    }

    #[test]
    fn unknown_origin_and_destination() {
        let graph = graph_from(&[(new_york(), chicago())]);

        assert_eq!(
            solve(&graph, &denver(), &chicago()).unwrap_err(),
            EcoRouteError::NodeNotFound {
                role: NodeRole::Origin,
                coordinate: denver()
            }
        );
        assert_eq!(
            solve(&graph, &new_york(), &denver()).unwrap_err(),
            EcoRouteError::NodeNotFound {
                role: NodeRole::Destination,
                coordinate: denver()
            }
        );
    }

    #[test]
    fn edges_are_not_traversed_backwards() {
        let graph = graph_from(&[(new_york(), chicago())]);

        assert_eq!(
            solve(&graph, &chicago(), &new_york()).unwrap_err(),
            EcoRouteError::NoPath {
                origin: chicago(),
                destination: new_york()
            }
        );
    }

    #[test]
    fn equal_weights_prefer_first_discovered_path() {
        // Two mirrored detours of identical length around the equator
        let a = point(0.0, 0.0);
        let north = point(1.0, 1.0);
        let south = point(-1.0, 1.0);
        let b = point(0.0, 2.0);

        let first = graph_from(&[(a, north), (a, south), (north, b), (south, b)]);
        let route = solve(&first, &a, &b).unwrap();
        assert_eq!(route.waypoints(), &[a, north, b]);

        let second = graph_from(&[(a, south), (a, north), (south, b), (north, b)]);
        let route = solve(&second, &a, &b).unwrap();
        assert_eq!(route.waypoints(), &[a, south, b]);
    }

    #[test]
    fn solver_is_reusable() {
        let graph = graph_from(&[
            (new_york(), chicago()),
            (chicago(), los_angeles()),
            (los_angeles(), denver()),
        ]);
        let mut dijkstra = Dijkstra::new();

        let first = dijkstra.calc_path(&graph, &new_york(), &denver()).unwrap();
        let unreachable = dijkstra.calc_path(&graph, &denver(), &new_york());
        let second = dijkstra.calc_path(&graph, &new_york(), &denver()).unwrap();

        assert!(unreachable.is_err());
        assert_eq!(first, second);
    }
}
