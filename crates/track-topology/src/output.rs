//! JSON report of a classified graph

use glam::Vec3;
use serde::Serialize;
use track_topology_lib::{
    Diagnostics, GraphInfo, Handle, NodeType, SwitchOrientation, Tags, TrackGraph, TrackNode,
};

/// One node as written to the report
#[derive(Debug, Serialize)]
pub struct NodeReport<'a> {
    pub id: i64,
    pub name: &'a str,
    pub kind: NodeType,
    pub position: Vec3,
    /// For switches: into, through, diverging
    pub connected: &'a [i64],
    pub handles: &'a [Handle],
    pub orientation: SwitchOrientation,
    pub tags: &'a Tags,
}

impl<'a> From<&'a TrackNode> for NodeReport<'a> {
    fn from(node: &'a TrackNode) -> Self {
        Self {
            id: node.id(),
            name: node.name(),
            kind: node.kind(),
            position: node.position(),
            connected: node.connected(),
            handles: node.handles(),
            orientation: node.orientation(),
            tags: node.tags(),
        }
    }
}

/// Everything the tool outputs for one build
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub info: GraphInfo,
    /// Ordered by descending degree, then id
    pub nodes: Vec<NodeReport<'a>>,
    pub diagnostics: &'a Diagnostics,
}

impl<'a> Report<'a> {
    pub fn new(graph: &'a TrackGraph) -> Self {
        Self {
            info: graph.info(),
            nodes: graph.ordered_nodes().into_iter().map(NodeReport::from).collect(),
            diagnostics: graph.diagnostics(),
        }
    }

    /// Serialize to a writer, optionally pretty-printed
    pub fn write(&self, writer: impl std::io::Write, pretty: bool) -> serde_json::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }
    }
}
