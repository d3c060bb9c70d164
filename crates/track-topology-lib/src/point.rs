//! Input records: projected points and the ways that reference them
//!
//! Both records are immutable once constructed. A way never owns its points,
//! it only lists their ids in traversal order.

use crate::{Projector, Result, Tags};
use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single point with a projected position
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Source-assigned id, unique within a dataset
    id: i64,
    /// Position in the local plane, height zero unless offset
    position: Vec3,
    tags: Tags,
    /// Value of the `name` tag, or the id
    name: String,
}

impl GeoPoint {
    /// Create a point from an already projected position
    pub fn new(id: i64, position: Vec3, tags: Tags) -> Self {
        let name = tags.name_or_id(id);
        Self {
            id,
            position,
            tags,
            name,
        }
    }

    /// Create a point by projecting WGS84 coordinates
    ///
    /// # Returns
    /// The point, or an error if the latitude cannot be projected
    pub fn from_wgs84(
        id: i64,
        lat: f64,
        lon: f64,
        tags: Tags,
        projector: &Projector,
    ) -> Result<Self> {
        let position = projector.project_point(lat, lon)?;
        Ok(Self::new(id, position, tags))
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered sequence of point ids
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Way {
    id: i64,
    nodes: Vec<i64>,
    tags: Tags,
    name: String,
}

impl Way {
    pub fn new(id: i64, nodes: Vec<i64>, tags: Tags) -> Self {
        let name = tags.name_or_id(id);
        Self {
            id,
            nodes,
            tags,
            name,
        }
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Point ids in traversal order
    #[inline]
    pub fn nodes(&self) -> &[i64] {
        &self.nodes
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A way needs at least two points to link anything
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.nodes.len() >= 2
    }

    /// Consecutive point id pairs along the way
    pub fn segments(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
