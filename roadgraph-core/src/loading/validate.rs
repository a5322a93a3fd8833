//! Well-formedness check of a loaded edge list

use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::EdgeWeight;
use crate::model::{NodeBasedEdge, NodeId};

/// Whether [`super::load_edges`] checks the loaded edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeValidation {
    /// Check in builds with debug assertions, skip in optimized builds
    #[default]
    BuildDefault,
    Always,
    Never,
}

impl EdgeValidation {
    pub fn is_enabled(self) -> bool {
        match self {
            EdgeValidation::BuildDefault => cfg!(debug_assertions),
            EdgeValidation::Always => true,
            EdgeValidation::Never => false,
        }
    }
}

/// Invariant broken by an edge
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    #[error("non-positive weight {0}")]
    NonPositiveWeight(EdgeWeight),
    #[error("not oriented in forward direction")]
    NotForward,
    #[error("travel mode is inaccessible")]
    Inaccessible,
    #[error("self-loop")]
    SelfLoop,
    #[error("duplicate of edge #{0}")]
    Duplicate(usize),
}

/// First malformed edge found, identified by its position in load order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("edge #{index} ({from} -> {to}): {kind}")]
pub struct EdgeViolation {
    pub index: usize,
    pub from: NodeId,
    pub to: NodeId,
    pub kind: ViolationKind,
}

/// Checks that every edge has a positive weight, forward orientation and an
/// accessible travel mode, and that there are no self-loops or multi-edges.
///
/// Edges are visited in (source, target) order through a sorted permutation;
/// the slice itself is left untouched. Among duplicates the one loaded later
/// is reported.
///
/// # Errors
///
/// Returns the first violation in (source, target) order.
pub fn validate_edges(edges: &[NodeBasedEdge]) -> Result<(), EdgeViolation> {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.par_sort_by_key(|&i| (edges[i].source, edges[i].target));

    if let Some(&first) = order.first() {
        check_edge(edges, first)?;
    }
    for (previous, current) in order.iter().copied().tuple_windows() {
        check_edge(edges, current)?;

        let (prev_edge, edge) = (&edges[previous], &edges[current]);
        if prev_edge.source == edge.source && prev_edge.target == edge.target {
            return Err(violation(edges, current, ViolationKind::Duplicate(previous)));
        }
    }
    Ok(())
}

fn check_edge(edges: &[NodeBasedEdge], index: usize) -> Result<(), EdgeViolation> {
    let edge = &edges[index];
    let kind = if edge.weight <= 0 {
        ViolationKind::NonPositiveWeight(edge.weight)
    } else if !edge.forward {
        ViolationKind::NotForward
    } else if !edge.travel_mode.is_accessible() {
        ViolationKind::Inaccessible
    } else if edge.is_self_loop() {
        ViolationKind::SelfLoop
    } else {
        return Ok(());
    };
    Err(violation(edges, index, kind))
}

fn violation(edges: &[NodeBasedEdge], index: usize, kind: ViolationKind) -> EdgeViolation {
    EdgeViolation {
        index,
        from: edges[index].source,
        to: edges[index].target,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TravelMode;

    fn edge(source: u32, target: u32, weight: EdgeWeight) -> NodeBasedEdge {
        NodeBasedEdge::new(NodeId::new(source), NodeId::new(target), weight)
    }

    #[test]
    fn accepts_well_formed_edges() {
        let edges = [edge(2, 0, 5), edge(0, 1, 3), edge(1, 0, 3), edge(0, 2, 1)];
        assert_eq!(validate_edges(&edges), Ok(()));
        assert_eq!(validate_edges(&[]), Ok(()));
    }

    #[test]
    fn reports_self_loop() {
        let edges = [edge(0, 1, 3), edge(4, 4, 2)];
        let err = validate_edges(&edges).unwrap_err();
        assert_eq!(err.kind, ViolationKind::SelfLoop);
        assert_eq!(err.index, 1);
        assert_eq!(err.to_string(), "edge #1 (4 -> 4): self-loop");
    }

    #[test]
    fn reports_later_duplicate() {
        let edges = [edge(3, 1, 3), edge(0, 1, 3), edge(3, 1, 9)];
        let err = validate_edges(&edges).unwrap_err();
        assert_eq!(
            err,
            EdgeViolation {
                index: 2,
                from: NodeId::new(3),
                to: NodeId::new(1),
                kind: ViolationKind::Duplicate(0),
            }
        );
    }

    #[test]
    fn checks_the_first_edge_in_sorted_order() {
        let edges = [edge(5, 6, 1), edge(0, 1, 0)];
        let err = validate_edges(&edges).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.kind, ViolationKind::NonPositiveWeight(0));
    }

    #[test]
    fn reports_orientation_and_access() {
        let mut backward = edge(0, 1, 2);
        backward.forward = false;
        backward.backward = true;
        assert_eq!(
            validate_edges(&[backward]).unwrap_err().kind,
            ViolationKind::NotForward
        );

        let mut closed = edge(0, 1, 2);
        closed.travel_mode = TravelMode::INACCESSIBLE;
        assert_eq!(
            validate_edges(&[closed]).unwrap_err().kind,
            ViolationKind::Inaccessible
        );
    }

    #[test]
    fn leaves_input_order_untouched() {
        let edges = vec![edge(9, 1, 1), edge(0, 5, 1), edge(4, 2, 1)];
        let before = edges.clone();
        validate_edges(&edges).unwrap();
        assert_eq!(edges, before);
    }

    #[test]
    fn build_default_follows_debug_assertions() {
        assert_eq!(
            EdgeValidation::BuildDefault.is_enabled(),
            cfg!(debug_assertions)
        );
        assert!(EdgeValidation::Always.is_enabled());
        assert!(!EdgeValidation::Never.is_enabled());
    }
}
