use fxhash::FxHashMap;
use serde::Serialize;
use tracing::trace;

use crate::{
    geopoint::GeoPoint,
    weighting::{Kilometers, Weight},
};

pub type NodeId = usize;
pub type EdgeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphEdge {
    id: EdgeId,
    start_node: NodeId,
    end_node: NodeId,
    distance: Kilometers,
    weight: Weight,
}

impl GraphEdge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Read access used by the shortest path algorithms.
pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn node_id(&self, point: &GeoPoint) -> Option<NodeId>;

    fn node_geometry(&self, node: NodeId) -> &GeoPoint;

    /// Outgoing edges of `node`, in insertion order.
    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_>;

    fn edge(&self, edge: EdgeId) -> &GraphEdge;
}

/// Outcome of inserting an edge into the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum EdgeInsert {
    Added(EdgeId),
    /// An edge already linked the same nodes; `weight` is the surviving (minimum) weight
    Merged { edge_id: EdgeId, weight: Weight },
}

/// Directed graph of a single route. Nodes are coordinates, deduplicated by value,
/// and there is at most one edge per ordered pair of nodes.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    nodes: Vec<GeoPoint>,
    node_index: FxHashMap<GeoPoint, NodeId>,
    edges: Vec<GraphEdge>,
    edge_index: FxHashMap<(NodeId, NodeId), EdgeId>,
    adjacency_list: Vec<Vec<EdgeId>>,
}

impl RouteGraph {
    pub(crate) fn with_capacity(edges: usize) -> RouteGraph {
        RouteGraph {
            nodes: Vec::with_capacity(edges + 1),
            node_index: FxHashMap::default(),
            edges: Vec::with_capacity(edges),
            edge_index: FxHashMap::default(),
            adjacency_list: Vec::with_capacity(edges + 1),
        }
    }

    fn add_node(&mut self, point: GeoPoint) -> NodeId {
        if let Some(&node_id) = self.node_index.get(&point) {
            return node_id;
        }

        let node_id = self.nodes.len();
        self.nodes.push(point);
        self.adjacency_list.push(vec![]);
        self.node_index.insert(point, node_id);
        node_id
    }

    pub(crate) fn add_edge(
        &mut self,
        from: GeoPoint,
        to: GeoPoint,
        distance: Kilometers,
        weight: Weight,
    ) -> EdgeInsert {
        let start_node = self.add_node(from);
        let end_node = self.add_node(to);

        if let Some(&edge_id) = self.edge_index.get(&(start_node, end_node)) {
            let edge = &mut self.edges[edge_id];
            // Strictly cheaper only, so the first of two equal edges is kept
            if weight < edge.weight {
                trace!(edge_id, old = edge.weight, new = weight, "cheaper duplicate edge");
                edge.weight = weight;
                edge.distance = distance;
            }
            return EdgeInsert::Merged {
                edge_id,
                weight: edge.weight,
            };
        }

        let edge_id = self.edges.len();
        self.edges.push(GraphEdge {
            id: edge_id,
            start_node,
            end_node,
            distance,
            weight,
        });
        self.edge_index.insert((start_node, end_node), edge_id);
        self.adjacency_list[start_node].push(edge_id);

        EdgeInsert::Added(edge_id)
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.node_index.contains_key(point)
    }

    pub fn node(&self, node: NodeId) -> Option<&GeoPoint> {
        self.nodes.get(node)
    }

    pub fn nodes(&self) -> &[GeoPoint] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency_list[node]
    }

    pub fn edge_between(&self, from: &GeoPoint, to: &GeoPoint) -> Option<&GraphEdge> {
        let start_node = self.node_index.get(from)?;
        let end_node = self.node_index.get(to)?;

        self.edge_index
            .get(&(*start_node, *end_node))
            .map(|&edge_id| &self.edges[edge_id])
    }
}

impl Graph for RouteGraph {
    type EdgeIterator<'a> = std::iter::Copied<std::slice::Iter<'a, EdgeId>>;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_id(&self, point: &GeoPoint) -> Option<NodeId> {
        self.node_index.get(point).copied()
    }

    fn node_geometry(&self, node: NodeId) -> &GeoPoint {
        &self.nodes[node]
    }

    fn node_edges_iter(&self, node: NodeId) -> Self::EdgeIterator<'_> {
        self.adjacency_list[node].iter().copied()
    }

    fn edge(&self, edge: EdgeId) -> &GraphEdge {
        &self.edges[edge]
    }
}
