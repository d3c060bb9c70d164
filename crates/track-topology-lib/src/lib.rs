//! Track Topology Library - Rail graph construction and handle inference
//!
//! This library turns a snapshot of tagged geographic points and ways into a
//! connected track graph. Every node is classified by how many neighbors it has
//! and receives a set of tangent handles that a spline builder can use to lay
//! smooth track between nodes. Three-way nodes are resolved into switches with a
//! through pair, a diverging branch and a left/right orientation.
//!
//! # Architecture
//!
//! - **[`Projector`]**: Mercator-style projection of WGS84 points around an origin
//! - **[`Tags`]**: Ordered key/value tag list with lookup by key
//! - **[`GeoPoint`] / [`Way`]**: Immutable input records
//! - **[`TrackGraph`]**: Arena of [`TrackNode`]s keyed by id, built from ways
//! - **[`Diagnostics`]**: Anomalies collected during a build instead of aborting it
//!
//! # Performance Characteristics
//!
//! - **Build Time**: O(E) adjacency construction over all way segments
//! - **Classification**: O(1) per node, O(N log N) for the processing order
//! - **Memory**: O(N + E), adjacency of degree ≤ 4 is stored inline

mod diagnostics;
mod graph;
mod handles;
mod node;
mod point;
mod tags;
pub mod utils;

// Public API exports
pub use diagnostics::{Anomaly, Diagnostics};
pub use graph::{Config, GraphInfo, TrackGraph};
pub use handles::{Neighbor, Resolution, resolve, smooth_handles};
pub use node::{Handle, NodeType, SwitchOrientation, TrackNode};
pub use point::{GeoPoint, Way};
pub use tags::{Tag, Tags};
pub use utils::Projector;

/// Version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for the topology library
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("Invalid latitude {lat}: must be finite and strictly within (-90, 90) of the origin")]
    InvalidLatitude { lat: f64 },

    #[error("Invalid longitude {lon}: must be finite")]
    InvalidLongitude { lon: f64 },

    #[error("Unknown node {id}")]
    UnknownNode { id: i64 },
}

pub type Result<T> = std::result::Result<T, TopologyError>;
