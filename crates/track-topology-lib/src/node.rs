//! Track nodes, their topology kind and their tangent handles

use crate::{GeoPoint, Resolution, Tags};
use glam::Vec3;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type of node, based on the number of connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeType {
    /// No connections
    Empty,
    /// One connection, track ends here
    End,
    /// Two connections, plain track
    Connected,
    /// Three connections
    Switch,
    /// Four connections
    Cross,
    /// Five or more connections
    Over4,
}

impl NodeType {
    /// Classify a node purely by its degree
    #[inline]
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 => NodeType::Empty,
            1 => NodeType::End,
            2 => NodeType::Connected,
            3 => NodeType::Switch,
            4 => NodeType::Cross,
            _ => NodeType::Over4,
        }
    }
}

/// For switch nodes, which side the diverging branch leaves towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwitchOrientation {
    #[default]
    Undefined,
    Left,
    Right,
}

/// A tangent handle: unit direction and length
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Handle {
    pub direction: Vec3,
    pub size: f32,
}

impl Handle {
    #[inline]
    pub fn new(direction: Vec3, size: f32) -> Self {
        Self { direction, size }
    }

    /// A handle of length one
    #[inline]
    pub fn unit(direction: Vec3) -> Self {
        Self::new(direction, 1.0)
    }

    /// Direction scaled by size
    #[inline]
    pub fn full(&self) -> Vec3 {
        self.direction * self.size
    }
}

/// A graph vertex
///
/// Neighbors are stored as ids into the owning [`TrackGraph`](crate::TrackGraph),
/// never as references, so cycles in the track layout are harmless.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackNode {
    id: i64,
    name: String,
    position: Vec3,
    tags: Tags,
    /// Neighbor ids, no duplicates and never this node's own id
    connected: SmallVec<[i64; 4]>,
    orientation: SwitchOrientation,
    /// One handle per connection once classified, same order as `connected`
    handles: SmallVec<[Handle; 4]>,
}

impl TrackNode {
    pub fn new(id: i64, name: impl Into<String>, position: Vec3, tags: Tags) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            tags,
            connected: SmallVec::new(),
            orientation: SwitchOrientation::Undefined,
            handles: SmallVec::new(),
        }
    }

    pub fn from_point(point: &GeoPoint) -> Self {
        Self::new(
            point.id(),
            point.name(),
            point.position(),
            point.tags().clone(),
        )
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Neighbor ids; for switches indices 0 and 1 are the through pair and 2 diverges
    #[inline]
    pub fn connected(&self) -> &[i64] {
        &self.connected
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.connected.len()
    }

    /// Kind derived from the current degree, never cached
    #[inline]
    pub fn kind(&self) -> NodeType {
        NodeType::from_degree(self.connected.len())
    }

    #[inline]
    pub fn orientation(&self) -> SwitchOrientation {
        self.orientation
    }

    #[inline]
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Whether `other` is a neighbor of this node
    #[inline]
    pub fn is_connected_to(&self, other: i64) -> bool {
        self.connected.contains(&other)
    }

    /// Index of the handle pointing towards `neighbor`
    ///
    /// Only indices that already have a handle are returned.
    pub fn index_of(&self, neighbor: i64) -> Option<usize> {
        self.connected
            .iter()
            .take(self.handles.len())
            .position(|&id| id == neighbor)
    }

    /// Full handle vector at `index`, zero if there is none
    #[inline]
    pub fn handle(&self, index: usize) -> Vec3 {
        self.handles
            .get(index)
            .map(Handle::full)
            .unwrap_or(Vec3::ZERO)
    }

    /// Full handle vector towards `neighbor`, zero if it is not connected or unresolved
    pub fn handle_towards(&self, neighbor: i64) -> Vec3 {
        self.index_of(neighbor)
            .map(|index| self.handle(index))
            .unwrap_or(Vec3::ZERO)
    }

    /// Handle at `index` in scene space
    #[inline]
    pub fn global_handle(&self, index: usize) -> Vec3 {
        self.position + self.handle(index)
    }

    /// Handle towards `neighbor` in scene space
    #[inline]
    pub fn global_handle_towards(&self, neighbor: i64) -> Vec3 {
        self.position + self.handle_towards(neighbor)
    }

    /// Add a neighbor, returns false for duplicates and self-connections
    pub(crate) fn add_connection(&mut self, other: i64) -> bool {
        if other == self.id || self.connected.contains(&other) {
            return false;
        }
        self.connected.push(other);
        true
    }

    /// Forget computed geometry after the adjacency changed
    pub(crate) fn clear_handles(&mut self) {
        self.handles.clear();
        self.orientation = SwitchOrientation::Undefined;
    }

    /// Store a classification result computed for the current adjacency
    pub(crate) fn apply(&mut self, resolution: Resolution) {
        debug_assert_eq!(resolution.connected.len(), self.connected.len());
        self.connected = resolution.connected;
        self.handles = resolution.handles;
        self.orientation = resolution.orientation;
    }
}
