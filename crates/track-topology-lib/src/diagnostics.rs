//! Anomalies collected while building and classifying a graph
//!
//! None of these abort a build. Bad ways are skipped and odd nodes get
//! best-effort handles, and the caller decides how to surface them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-fatal problem found in the input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Anomaly {
    #[error("Way {way_id} links {len} point(s), at least 2 are required")]
    ShortWay { way_id: i64, len: usize },

    #[error("Way {way_id} references unknown point {point_id}")]
    UnknownPoint { way_id: i64, point_id: i64 },

    #[error("Node {node_id} is empty")]
    EmptyNode { node_id: i64 },

    #[error("Node {node_id} is a cross, crossing geometry is not resolved")]
    CrossNode { node_id: i64 },

    #[error("Node {node_id} has {degree} connections, more than 4")]
    OverDegreeNode { node_id: i64, degree: usize },
}

impl Anomaly {
    /// Whether the anomaly caused a way to be skipped
    #[inline]
    pub fn is_rejected_way(&self) -> bool {
        matches!(self, Anomaly::ShortWay { .. } | Anomaly::UnknownPoint { .. })
    }
}

/// Anomalies of one build
///
/// Way rejections are kept across reclassification, node warnings are
/// replaced every time the graph is classified.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    rejected_ways: Vec<Anomaly>,
    node_warnings: Vec<Anomaly>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reject_way(&mut self, anomaly: Anomaly) {
        debug_assert!(anomaly.is_rejected_way());
        self.rejected_ways.push(anomaly);
    }

    pub(crate) fn warn_node(&mut self, anomaly: Anomaly) {
        debug_assert!(!anomaly.is_rejected_way());
        self.node_warnings.push(anomaly);
    }

    pub(crate) fn clear_node_warnings(&mut self) {
        self.node_warnings.clear();
    }

    /// Number of ways skipped before graph construction, for any reason
    #[inline]
    pub fn skipped_ways(&self) -> usize {
        self.rejected_ways.len()
    }

    /// Number of ways skipped for linking fewer than two points
    pub fn short_ways(&self) -> usize {
        self.rejected_ways
            .iter()
            .filter(|a| matches!(a, Anomaly::ShortWay { .. }))
            .count()
    }

    #[inline]
    pub fn rejected_ways(&self) -> &[Anomaly] {
        &self.rejected_ways
    }

    /// Nodes without any connection
    pub fn empty_nodes(&self) -> Vec<i64> {
        self.node_warnings
            .iter()
            .filter_map(|a| match a {
                Anomaly::EmptyNode { node_id } => Some(*node_id),
                _ => None,
            })
            .collect()
    }

    /// Nodes with exactly four connections
    pub fn cross_nodes(&self) -> Vec<i64> {
        self.node_warnings
            .iter()
            .filter_map(|a| match a {
                Anomaly::CrossNode { node_id } => Some(*node_id),
                _ => None,
            })
            .collect()
    }

    /// Nodes with five or more connections
    pub fn over_degree_nodes(&self) -> Vec<i64> {
        self.node_warnings
            .iter()
            .filter_map(|a| match a {
                Anomaly::OverDegreeNode { node_id, .. } => Some(*node_id),
                _ => None,
            })
            .collect()
    }

    /// All anomalies, way rejections first
    pub fn anomalies(&self) -> impl Iterator<Item = &Anomaly> {
        self.rejected_ways.iter().chain(self.node_warnings.iter())
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.rejected_ways.is_empty() && self.node_warnings.is_empty()
    }
}
