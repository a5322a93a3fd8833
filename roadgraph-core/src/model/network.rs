//! Loaded road network - all containers produced by the loaders

use std::fmt;

use geo::{BoundingRect, MultiPoint, Rect};
use hashbrown::HashMap;
use serde::Serialize;

use super::{NodeBasedEdge, NodeId, QueryNode, TravelMode, TurnRestriction};
use crate::loading::LoadedGraph;

/// Node array with derived classifications, edges and turn restrictions.
///
/// This is what the graph construction, contraction and turn penalty stages
/// consume. The position of a node in `nodes` is its [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub nodes: Vec<QueryNode>,
    /// Strictly increasing
    pub barrier_nodes: Vec<NodeId>,
    /// Strictly increasing
    pub traffic_lights: Vec<NodeId>,
    pub edges: Vec<NodeBasedEdge>,
    pub restrictions: Vec<TurnRestriction>,
}

impl RoadNetwork {
    pub fn from_parts(graph: LoadedGraph, restrictions: Vec<TurnRestriction>) -> Self {
        let LoadedGraph { nodes, edges } = graph;
        Self {
            nodes: nodes.nodes,
            barrier_nodes: nodes.barrier_nodes,
            traffic_lights: nodes.traffic_lights,
            edges,
            restrictions,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn restriction_count(&self) -> usize {
        self.restrictions.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&QueryNode> {
        self.nodes.get(id.index())
    }

    pub fn is_barrier(&self, id: NodeId) -> bool {
        self.barrier_nodes.binary_search(&id).is_ok()
    }

    pub fn has_traffic_light(&self, id: NodeId) -> bool {
        self.traffic_lights.binary_search(&id).is_ok()
    }

    /// Bounding box of all nodes in degrees, `None` for an empty network
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self.nodes.iter().map(QueryNode::to_point).collect();
        points.bounding_rect()
    }

    /// Number of edges per travel mode
    pub fn travel_mode_counts(&self) -> HashMap<TravelMode, usize> {
        let mut counts = HashMap::new();
        for edge in &self.edges {
            *counts.entry(edge.travel_mode).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> NetworkSummary {
        let mut travel_modes: Vec<(TravelMode, usize)> =
            self.travel_mode_counts().into_iter().collect();
        travel_modes.sort_unstable();

        NetworkSummary {
            node_count: self.node_count(),
            barrier_count: self.barrier_nodes.len(),
            traffic_light_count: self.traffic_lights.len(),
            edge_count: self.edge_count(),
            restriction_count: self.restriction_count(),
            mandatory_restriction_count: self.restrictions.iter().filter(|r| r.is_only).count(),
            bounds: self.bounding_rect().map(|rect| {
                let (min, max) = (rect.min(), rect.max());
                [min.x, min.y, max.x, max.y]
            }),
            travel_modes,
        }
    }
}

/// Counts and extent of a loaded network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub node_count: usize,
    pub barrier_count: usize,
    pub traffic_light_count: usize,
    pub edge_count: usize,
    pub restriction_count: usize,
    pub mandatory_restriction_count: usize,
    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub bounds: Option<[f64; 4]>,
    pub travel_modes: Vec<(TravelMode, usize)>,
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "nodes: {} ({} barriers, {} traffic lights)",
            self.node_count, self.barrier_count, self.traffic_light_count
        )?;
        writeln!(f, "edges: {}", self.edge_count)?;
        for (mode, count) in &self.travel_modes {
            writeln!(f, "  {mode}: {count}")?;
        }
        writeln!(
            f,
            "turn restrictions: {} ({} mandatory)",
            self.restriction_count, self.mandatory_restriction_count
        )?;
        match self.bounds {
            Some([min_lon, min_lat, max_lon, max_lat]) => write!(
                f,
                "bounds: {min_lon:.6},{min_lat:.6} .. {max_lon:.6},{max_lat:.6}"
            ),
            None => write!(f, "bounds: empty"),
        }
    }
}
