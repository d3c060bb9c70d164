//! TrackGraph - Arena of track nodes built from ways
//!
//! This module provides the high-level API for turning points and ways into a
//! deduplicated undirected graph, classifying every node and computing its
//! handles.

use crate::handles::{Neighbor, resolve};
use crate::{
    Anomaly, Diagnostics, GeoPoint, NodeType, Result, SwitchOrientation, TopologyError, TrackNode,
    Way,
};
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Configuration for projection and handle generation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Latitude of the projection origin in degrees
    pub origin_lat: f64,
    /// Longitude of the projection origin in degrees
    pub origin_lon: f64,
    /// Offset added to every projected position
    pub origin_offset: Vec3,
    /// How far along a neighbor's handle a track end aims (default 1.5)
    pub end_target_scale: f32,
    /// Handle length as a fraction of the adjacent segment length (default 1/3)
    pub handle_length_ratio: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin_lat: 51.115833,
            origin_lon: 6.218056,
            origin_offset: Vec3::ZERO,
            end_target_scale: 1.5,
            handle_length_ratio: 1.0 / 3.0,
        }
    }
}

/// Summary of the graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphInfo {
    /// Ways that contributed to the graph
    pub way_count: usize,
    /// Ways rejected before construction, for any reason
    pub skipped_ways: usize,
    /// Rejected ways that linked fewer than two points
    pub short_ways: usize,
    pub node_count: usize,
    /// Undirected edges
    pub edge_count: usize,
    pub empty_count: usize,
    pub end_count: usize,
    pub connected_count: usize,
    pub switch_count: usize,
    pub cross_count: usize,
    pub over4_count: usize,
    pub left_switches: usize,
    pub right_switches: usize,
}

/// Owner of every [`TrackNode`], indexed by id
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackGraph {
    nodes: HashMap<i64, TrackNode>,
    config: Config,
    diagnostics: Diagnostics,
    /// Ways added successfully
    way_count: usize,
    /// Set when the adjacency changed after the last classification
    needs_classification: bool,
}

impl TrackGraph {
    /// Create an empty graph with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            nodes: HashMap::new(),
            config,
            diagnostics: Diagnostics::new(),
            way_count: 0,
            needs_classification: false,
        }
    }

    /// Build and classify a graph in one pass over `ways`
    ///
    /// Ways shorter than two points or referencing ids missing from `points`
    /// are skipped and reported in [`TrackGraph::diagnostics`]. The resulting
    /// adjacency does not depend on the order of `ways`.
    pub fn build<'a, I>(points: &HashMap<i64, GeoPoint>, ways: I, config: Config) -> Self
    where
        I: IntoIterator<Item = &'a Way>,
    {
        // Profile graph construction (adjacency + classification)
        #[cfg(feature = "profiling")]
        profiling::scope!("graph::build");

        let mut graph = Self::with_config(config);
        for way in ways {
            graph.add_way(way, points);
        }
        graph.classify();

        tracing::debug!(
            "Ways: {} | Skipped ways: {} | Nodes: {} | Edges: {}",
            graph.way_count,
            graph.diagnostics.skipped_ways(),
            graph.nodes.len(),
            graph.edge_count()
        );

        graph
    }

    /// Add the nodes and connections of a single way
    ///
    /// # Returns
    /// `false` if the way was rejected
    pub fn add_way(&mut self, way: &Way, points: &HashMap<i64, GeoPoint>) -> bool {
        if !way.is_valid() {
            self.diagnostics.reject_way(Anomaly::ShortWay {
                way_id: way.id(),
                len: way.nodes().len(),
            });
            return false;
        }

        // Validate everything before touching the graph so a bad way leaves no trace
        let mut way_points = Vec::with_capacity(way.nodes().len());
        for id in way.nodes() {
            match points.get(id) {
                Some(point) => way_points.push(point),
                None => {
                    self.diagnostics.reject_way(Anomaly::UnknownPoint {
                        way_id: way.id(),
                        point_id: *id,
                    });
                    return false;
                }
            }
        }

        for point in way_points {
            self.admit(point);
        }
        for (a, b) in way.segments() {
            self.link(a, b);
        }

        self.way_count += 1;
        true
    }

    /// Create the node for `point` if it does not exist yet
    pub fn admit(&mut self, point: &GeoPoint) -> &TrackNode {
        let needs_classification = &mut self.needs_classification;
        self.nodes.entry(point.id()).or_insert_with(|| {
            *needs_classification = true;
            TrackNode::from_point(point)
        })
    }

    /// Connect two existing nodes both ways
    ///
    /// Connecting an already connected pair, or a node to itself, changes nothing.
    /// A new connection invalidates the handles of both nodes until the next
    /// [`TrackGraph::classify`].
    ///
    /// # Returns
    /// Whether a new connection was made
    pub fn connect(&mut self, a: i64, b: i64) -> Result<bool> {
        for id in [a, b] {
            if !self.nodes.contains_key(&id) {
                return Err(TopologyError::UnknownNode { id });
            }
        }
        Ok(self.link(a, b))
    }

    fn link(&mut self, a: i64, b: i64) -> bool {
        if a == b {
            return false;
        }

        let added = match self.nodes.get_mut(&a) {
            Some(node) => node.add_connection(b),
            None => return false,
        };
        if !added {
            return false;
        }

        if let Some(node) = self.nodes.get_mut(&b) {
            node.add_connection(a);
            node.clear_handles();
        }
        if let Some(node) = self.nodes.get_mut(&a) {
            node.clear_handles();
        }
        self.needs_classification = true;
        true
    }

    /// Classify every node and recompute all handles from scratch
    ///
    /// Nodes are processed in [`TrackGraph::ordered_nodes`] order so track ends
    /// are resolved after the nodes they attach to. Node warnings in the
    /// diagnostics are replaced.
    pub fn classify(&mut self) {
        #[cfg(feature = "profiling")]
        profiling::scope!("graph::classify");

        for node in self.nodes.values_mut() {
            node.clear_handles();
        }
        self.diagnostics.clear_node_warnings();

        for id in self.ordered_ids() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };

            let neighbors: SmallVec<[Neighbor; 4]> = node
                .connected()
                .iter()
                .filter_map(|other| self.nodes.get(other))
                .map(|other| Neighbor {
                    id: other.id(),
                    position: other.position(),
                    handle_towards: other.handle_towards(id),
                })
                .collect();
            let resolution = resolve(node.position(), &neighbors, &self.config);

            match resolution.kind {
                NodeType::Empty => self.diagnostics.warn_node(Anomaly::EmptyNode { node_id: id }),
                NodeType::Cross => self.diagnostics.warn_node(Anomaly::CrossNode { node_id: id }),
                NodeType::Over4 => self.diagnostics.warn_node(Anomaly::OverDegreeNode {
                    node_id: id,
                    degree: resolution.connected.len(),
                }),
                _ => {}
            }

            if let Some(node) = self.nodes.get_mut(&id) {
                node.apply(resolution);
            }
        }

        self.needs_classification = false;
    }

    /// Node ids by descending degree, ties by ascending id
    fn ordered_ids(&self) -> Vec<i64> {
        let mut ids: Vec<(usize, i64)> = self
            .nodes
            .values()
            .map(|node| (node.degree(), node.id()))
            .collect();
        ids.sort_unstable_by_key(|&(degree, id)| (Reverse(degree), id));
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Nodes by descending degree, ties by ascending id
    pub fn ordered_nodes(&self) -> Vec<&TrackNode> {
        self.ordered_ids()
            .into_iter()
            .filter_map(|id| self.nodes.get(&id))
            .collect()
    }

    #[inline]
    pub fn get(&self, id: i64) -> Option<&TrackNode> {
        self.nodes.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: i64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate over all nodes in arbitrary order
    pub fn nodes(&self) -> impl Iterator<Item = &TrackNode> {
        self.nodes.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected connections
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(TrackNode::degree).sum::<usize>() / 2
    }

    /// Number of ways that contributed to the graph
    #[inline]
    pub fn way_count(&self) -> usize {
        self.way_count
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Whether connections changed since the last classification
    #[inline]
    pub fn needs_classification(&self) -> bool {
        self.needs_classification
    }

    /// Get graph information
    pub fn info(&self) -> GraphInfo {
        let mut info = GraphInfo {
            way_count: self.way_count,
            skipped_ways: self.diagnostics.skipped_ways(),
            short_ways: self.diagnostics.short_ways(),
            node_count: self.nodes.len(),
            edge_count: self.edge_count(),
            ..Default::default()
        };

        for node in self.nodes.values() {
            match node.kind() {
                NodeType::Empty => info.empty_count += 1,
                NodeType::End => info.end_count += 1,
                NodeType::Connected => info.connected_count += 1,
                NodeType::Switch => info.switch_count += 1,
                NodeType::Cross => info.cross_count += 1,
                NodeType::Over4 => info.over4_count += 1,
            }
            match node.orientation() {
                SwitchOrientation::Left => info.left_switches += 1,
                SwitchOrientation::Right => info.right_switches += 1,
                SwitchOrientation::Undefined => {}
            }
        }

        info
    }

    /// Remove all nodes and diagnostics, keeping the configuration
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.diagnostics = Diagnostics::new();
        self.way_count = 0;
        self.needs_classification = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tags;

    const EPSILON: f32 = 1e-5;

    fn create_test_points(coords: &[(i64, f32, f32)]) -> HashMap<i64, GeoPoint> {
        coords
            .iter()
            .map(|&(id, x, z)| (id, GeoPoint::new(id, Vec3::new(x, 0.0, z), Tags::default())))
            .collect()
    }

    fn way(id: i64, nodes: &[i64]) -> Way {
        Way::new(id, nodes.to_vec(), Tags::default())
    }

    /// A through line 1-2-3 with a branch from 2 to 4, north of the line
    fn create_test_switch() -> (HashMap<i64, GeoPoint>, Vec<Way>) {
        let points = create_test_points(&[
            (1, -10.0, 0.0),
            (2, 0.0, 0.0),
            (3, 10.0, 0.0),
            (4, 10.0, 3.0),
        ]);
        let ways = vec![way(100, &[1, 2, 3]), way(101, &[2, 4])];
        (points, ways)
    }

    fn sorted(ids: &[i64]) -> Vec<i64> {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids
    }

    fn assert_symmetric(graph: &TrackGraph) {
        for node in graph.nodes() {
            for &other in node.connected() {
                let other = graph.get(other).unwrap();
                assert!(other.is_connected_to(node.id()));
            }
        }
    }

    fn assert_handle_counts(graph: &TrackGraph) {
        for node in graph.nodes() {
            assert_eq!(node.handles().len(), node.degree());
        }
    }

    #[test]
    fn test_graph_creation() {
        let graph = TrackGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.info(), GraphInfo::default());
        assert!(graph.diagnostics().is_clean());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.end_target_scale, 1.5);
        assert!((config.handle_length_ratio - 1.0 / 3.0).abs() < EPSILON);
        assert_eq!(config.origin_offset, Vec3::ZERO);
    }

    #[test]
    fn test_shared_point_becomes_switch() {
        let (points, ways) = create_test_switch();
        let graph = TrackGraph::build(&points, &ways, Config::default());

        let node = graph.get(2).unwrap();
        assert_eq!(node.kind(), NodeType::Switch);
        assert_eq!(node.connected(), &[1, 3, 4]);
        assert_eq!(node.orientation(), SwitchOrientation::Left);
        assert_eq!(node.handles().len(), 3);
        assert!((node.handles()[0].direction - Vec3::X).length() < EPSILON);

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_symmetric(&graph);
        assert_handle_counts(&graph);
    }

    #[test]
    fn test_way_joined_at_its_end_is_plain_track() {
        // Joining [1, 2, 3] and [3, 4] at 3 only continues the line
        let points = create_test_points(&[
            (1, 0.0, 0.0),
            (2, 5.0, 0.0),
            (3, 10.0, 0.0),
            (4, 15.0, 1.0),
        ]);
        let ways = vec![way(1, &[1, 2, 3]), way(2, &[3, 4])];
        let graph = TrackGraph::build(&points, &ways, Config::default());

        let node = graph.get(3).unwrap();
        assert_eq!(node.kind(), NodeType::Connected);
        assert_eq!(sorted(node.connected()), vec![2, 4]);
        assert_eq!(node.orientation(), SwitchOrientation::Undefined);
    }

    #[test]
    fn test_single_segment_ends_face_each_other() {
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 9.0, 0.0)]);
        let graph = TrackGraph::build(&points, &[way(1, &[1, 2])], Config::default());

        let first = graph.get(1).unwrap();
        let second = graph.get(2).unwrap();
        assert_eq!(first.kind(), NodeType::End);
        assert_eq!(second.kind(), NodeType::End);
        assert_eq!(first.handles().len(), 1);
        assert_eq!(second.handles().len(), 1);
        assert!((first.handles()[0].direction - Vec3::X).length() < EPSILON);
        assert!((second.handles()[0].direction + Vec3::X).length() < EPSILON);
        assert!((first.handles()[0].size - 3.0).abs() < EPSILON);
        assert!((first.global_handle(0) - Vec3::new(3.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_short_way_is_skipped() {
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 1.0, 0.0), (5, 3.0, 3.0)]);
        let ways = vec![way(7, &[5]), way(8, &[1, 2])];
        let graph = TrackGraph::build(&points, &ways, Config::default());

        assert_eq!(graph.diagnostics().skipped_ways(), 1);
        assert_eq!(
            graph.diagnostics().rejected_ways(),
            &[Anomaly::ShortWay { way_id: 7, len: 1 }]
        );
        assert!(!graph.contains(5));
        assert_eq!(graph.way_count(), 1);
        assert_eq!(graph.info().skipped_ways, 1);
    }

    #[test]
    fn test_short_way_point_used_elsewhere_exists() {
        let points = create_test_points(&[(5, 0.0, 0.0), (6, 1.0, 0.0)]);
        let ways = vec![way(7, &[5]), way(8, &[5, 6])];
        let graph = TrackGraph::build(&points, &ways, Config::default());

        assert_eq!(graph.diagnostics().skipped_ways(), 1);
        assert!(graph.contains(5));
        assert_eq!(graph.get(5).unwrap().kind(), NodeType::End);
    }

    #[test]
    fn test_unknown_point_rejects_whole_way() {
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 1.0, 0.0)]);
        let ways = vec![way(3, &[1, 2, 99])];
        let graph = TrackGraph::build(&points, &ways, Config::default());

        assert!(graph.is_empty());
        assert_eq!(
            graph.diagnostics().rejected_ways(),
            &[Anomaly::UnknownPoint { way_id: 3, point_id: 99 }]
        );
    }

    #[test]
    fn test_short_ways_are_counted_apart() {
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 1.0, 0.0)]);
        let ways = vec![way(3, &[1, 2, 99]), way(4, &[1]), way(5, &[]), way(6, &[1, 2])];
        let graph = TrackGraph::build(&points, &ways, Config::default());

        assert_eq!(graph.diagnostics().skipped_ways(), 3);
        assert_eq!(graph.diagnostics().short_ways(), 2);
        assert_eq!(graph.info().skipped_ways, 3);
        assert_eq!(graph.info().short_ways, 2);
    }

    #[test]
    fn test_five_neighbors_is_over4() {
        let mut coords = vec![(0, 0.0, 0.0)];
        coords.extend([
            (1, 4.0, 0.0),
            (2, 0.0, 4.0),
            (3, -4.0, 0.0),
            (4, 0.0, -4.0),
            (5, 3.0, 4.0),
        ]);
        let points = create_test_points(&coords);
        let ways: Vec<Way> = (1..=5).map(|i| way(i, &[0, i])).collect();
        let graph = TrackGraph::build(&points, &ways, Config::default());

        let hub = graph.get(0).unwrap();
        assert_eq!(hub.kind(), NodeType::Over4);
        assert_eq!(hub.handles().len(), 5);
        for (handle, &neighbor) in hub.handles().iter().zip(hub.connected()) {
            let expected = (graph.get(neighbor).unwrap().position() - hub.position()).normalize();
            assert!((handle.direction - expected).length() < EPSILON);
            assert_eq!(handle.size, 1.0);
        }
        assert_eq!(graph.diagnostics().over_degree_nodes(), vec![0]);
        assert_eq!(graph.info().over4_count, 1);
        assert_eq!(graph.info().end_count, 5);
    }

    #[test]
    fn test_four_neighbors_is_cross() {
        let points = create_test_points(&[
            (0, 0.0, 0.0),
            (1, 4.0, 0.0),
            (2, -4.0, 0.0),
            (3, 0.0, 4.0),
            (4, 0.0, -4.0),
        ]);
        let ways = vec![way(1, &[1, 0, 2]), way(2, &[3, 0, 4])];
        let graph = TrackGraph::build(&points, &ways, Config::default());

        assert_eq!(graph.get(0).unwrap().kind(), NodeType::Cross);
        assert_eq!(graph.diagnostics().cross_nodes(), vec![0]);
        assert_handle_counts(&graph);
    }

    #[test]
    fn test_repeated_point_is_not_self_connected() {
        let points = create_test_points(&[(5, 0.0, 0.0)]);
        let graph = TrackGraph::build(&points, &[way(1, &[5, 5])], Config::default());

        let node = graph.get(5).unwrap();
        assert_eq!(node.kind(), NodeType::Empty);
        assert!(node.handles().is_empty());
        assert_eq!(graph.diagnostics().empty_nodes(), vec![5]);
    }

    #[test]
    fn test_duplicate_connections_are_ignored() {
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 1.0, 0.0)]);
        let ways = vec![way(1, &[1, 2]), way(2, &[2, 1]), way(3, &[1, 2, 1])];
        let graph = TrackGraph::build(&points, &ways, Config::default());

        assert_eq!(graph.get(1).unwrap().connected(), &[2]);
        assert_eq!(graph.get(2).unwrap().connected(), &[1]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.way_count(), 3);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let points = create_test_points(&[
            (1, -10.0, 0.0),
            (2, 0.0, 0.0),
            (3, 10.0, 1.0),
            (4, 9.0, 5.0),
            (5, 20.0, 3.0),
            (6, 16.0, 12.0),
        ]);
        let ways = vec![way(1, &[1, 2, 3, 5]), way(2, &[2, 4, 6])];
        let mut graph = TrackGraph::build(&points, &ways, Config::default());
        let before: Vec<TrackNode> = graph.ordered_nodes().into_iter().cloned().collect();

        graph.classify();
        let after: Vec<TrackNode> = graph.ordered_nodes().into_iter().cloned().collect();
        assert_eq!(before, after);
        assert!(!graph.needs_classification());
    }

    #[test]
    fn test_build_is_order_independent() {
        let (points, ways) = create_test_switch();
        let forward = TrackGraph::build(&points, &ways, Config::default());
        let reversed = TrackGraph::build(&points, ways.iter().rev(), Config::default());

        for node in forward.nodes() {
            let other = reversed.get(node.id()).unwrap();
            assert_eq!(sorted(node.connected()), sorted(other.connected()));
            assert_eq!(node.kind(), other.kind());
        }

        // Switch order is canonical regardless of insertion order
        assert_eq!(forward.get(2).unwrap(), reversed.get(2).unwrap());
    }

    #[test]
    fn test_end_aims_along_switch_handle() {
        let (points, ways) = create_test_switch();
        let graph = TrackGraph::build(&points, &ways, Config::default());

        // The diverging end follows the switch's diverging handle
        let switch = graph.get(2).unwrap();
        let end = graph.get(4).unwrap();
        let target = switch.position() + switch.handle_towards(4) * 1.5;
        let expected = (target - end.position()).normalize();
        assert!((end.handles()[0].direction - expected).length() < EPSILON);
    }

    #[test]
    fn test_connect_invalidates_until_classified() {
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 5.0, 0.0), (3, 10.0, 0.0)]);
        let mut graph = TrackGraph::build(&points, &[way(1, &[1, 2])], Config::default());
        assert!(!graph.needs_classification());

        graph.admit(&points[&3]);
        assert!(graph.needs_classification());
        assert!(graph.connect(2, 3).unwrap());
        assert!(!graph.connect(3, 2).unwrap());
        assert!(!graph.connect(3, 3).unwrap());

        // Stale handles are dropped, the kind already follows the new degree
        let node = graph.get(2).unwrap();
        assert!(node.handles().is_empty());
        assert_eq!(node.kind(), NodeType::Connected);

        graph.classify();
        assert_eq!(graph.get(2).unwrap().handles().len(), 2);
        assert_symmetric(&graph);
        assert_handle_counts(&graph);
    }

    #[test]
    fn test_connect_unknown_node() {
        let mut graph = TrackGraph::new();
        let result = graph.connect(1, 2);
        assert!(matches!(result, Err(TopologyError::UnknownNode { id: 1 })));
    }

    #[test]
    fn test_admitted_point_without_way_is_empty() {
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 1.0, 0.0), (9, 5.0, 5.0)]);
        let mut graph = TrackGraph::build(&points, &[way(1, &[1, 2])], Config::default());
        graph.admit(&points[&9]);
        graph.classify();

        assert_eq!(graph.get(9).unwrap().kind(), NodeType::Empty);
        assert_eq!(graph.diagnostics().empty_nodes(), vec![9]);
        assert_eq!(graph.info().empty_count, 1);
    }

    #[test]
    fn test_loop_is_handled() {
        // Triangle: every node is plain track
        let points = create_test_points(&[(1, 0.0, 0.0), (2, 10.0, 0.0), (3, 5.0, 8.0)]);
        let graph = TrackGraph::build(&points, &[way(1, &[1, 2, 3, 1])], Config::default());

        assert_eq!(graph.edge_count(), 3);
        for node in graph.nodes() {
            assert_eq!(node.kind(), NodeType::Connected);
            for handle in node.handles() {
                assert!(handle.direction.is_finite());
                assert!(handle.size > 0.0);
            }
        }
        assert_symmetric(&graph);
    }

    #[test]
    fn test_ordered_nodes() {
        let (points, ways) = create_test_switch();
        let graph = TrackGraph::build(&points, &ways, Config::default());
        let ids: Vec<i64> = graph.ordered_nodes().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_info() {
        let (points, ways) = create_test_switch();
        let graph = TrackGraph::build(&points, &ways, Config::default());

        let info = graph.info();
        assert_eq!(info.way_count, 2);
        assert_eq!(info.node_count, 4);
        assert_eq!(info.edge_count, 3);
        assert_eq!(info.switch_count, 1);
        assert_eq!(info.end_count, 3);
        assert_eq!(info.left_switches, 1);
        assert_eq!(info.right_switches, 0);
    }

    #[test]
    fn test_clear() {
        let (points, ways) = create_test_switch();
        let mut graph = TrackGraph::build(&points, &ways, Config::default());
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.way_count(), 0);
        assert!(graph.diagnostics().is_clean());
    }

    #[test]
    fn test_symmetry_on_yard() {
        // Ladder of parallel tracks joined by crossovers
        let mut coords = Vec::new();
        for row in 0..3 {
            for col in 0..6 {
                coords.push((row * 10 + col, col as f32 * 10.0, row as f32 * 5.0));
            }
        }
        let points = create_test_points(&coords);
        let mut ways: Vec<Way> = (0..3)
            .map(|row| way(row, &(0..6).map(|col| row * 10 + col).collect::<Vec<_>>()))
            .collect();
        ways.push(way(10, &[1, 12]));
        ways.push(way(11, &[13, 24]));

        let graph = TrackGraph::build(&points, &ways, Config::default());
        assert_symmetric(&graph);
        assert_handle_counts(&graph);
        assert_eq!(graph.info().switch_count, 4);
    }
}
