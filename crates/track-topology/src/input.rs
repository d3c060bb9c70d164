//! Map snapshot loading and filtering
//!
//! A snapshot is an Overpass-style JSON document:
//!
//! ```json
//! {"elements": [
//!   {"type": "node", "id": 1, "lat": 51.1, "lon": 6.2, "tags": {"railway": "switch"}},
//!   {"type": "way", "id": 10, "nodes": [1, 2], "tags": {"railway": "rail"}}
//! ]}
//! ```
//!
//! Other element types are ignored. Tag order is kept as written.

use crate::InputError;
use clap::ValueEnum;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::Read;
use std::path::Path;
use track_topology_lib::{GeoPoint, Projector, Tag, Tags, Way};

/// Which ways are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    /// Every way
    #[default]
    All,
    /// Ways tagged `railway`
    Railway,
    /// Ways tagged `building`
    Building,
    /// Ways tagged `highway`
    Highway,
}

impl Filter {
    /// Tag key a way must carry, `None` keeps everything
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Filter::All => None,
            Filter::Railway => Some("railway"),
            Filter::Building => Some("building"),
            Filter::Highway => Some("highway"),
        }
    }

    #[inline]
    pub fn accepts_way(&self, tags: &Tags) -> bool {
        self.key().is_none_or(|key| tags.contains_key(key))
    }
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: i64,
    lat: f64,
    lon: f64,
    #[serde(default, deserialize_with = "deserialize_tags")]
    tags: Tags,
}

#[derive(Debug, Deserialize)]
struct RawWay {
    id: i64,
    #[serde(default)]
    nodes: Vec<i64>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    tags: Tags,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Element {
    Node(RawNode),
    Way(RawWay),
    #[serde(other)]
    Other,
}

/// Parsed but unfiltered map snapshot
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    elements: Vec<Element>,
}

/// Points and ways ready for graph construction
#[derive(Debug, Default)]
pub struct MapData {
    pub points: HashMap<i64, GeoPoint>,
    pub ways: Vec<Way>,
    /// Ways dropped by the filter
    pub filtered_ways: usize,
    /// Points dropped because no kept way uses them
    pub unreferenced_points: usize,
    /// Points whose coordinates could not be projected
    pub invalid_points: usize,
}

impl Snapshot {
    /// Read a snapshot from a file
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let file = std::fs::File::open(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, InputError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Apply `filter` to ways, drop unused points and project the rest
    ///
    /// Points that cannot be projected are skipped with a warning, ways using
    /// them are later rejected by the graph.
    pub fn into_map(self, filter: Filter, projector: &Projector, keep_isolated: bool) -> MapData {
        profiling::scope!("input::into_map");

        let mut map = MapData::default();
        let mut nodes = Vec::new();

        for element in self.elements {
            match element {
                Element::Node(node) => nodes.push(node),
                Element::Way(way) if filter.accepts_way(&way.tags) => {
                    map.ways.push(Way::new(way.id, way.nodes, way.tags));
                }
                Element::Way(_) => map.filtered_ways += 1,
                Element::Other => {}
            }
        }

        let referenced: HashSet<i64> = map
            .ways
            .iter()
            .flat_map(|way| way.nodes().iter().copied())
            .collect();

        map.points.reserve(nodes.len());
        for node in nodes {
            if !keep_isolated && !referenced.contains(&node.id) {
                map.unreferenced_points += 1;
                continue;
            }
            match GeoPoint::from_wgs84(node.id, node.lat, node.lon, node.tags, projector) {
                Ok(point) => {
                    map.points.insert(node.id, point);
                }
                Err(err) => {
                    tracing::warn!("Skipping point {}: {err}", node.id);
                    map.invalid_points += 1;
                }
            }
        }

        tracing::debug!(
            "Points: {} | Ways: {} | Filtered: {} | Unreferenced: {} | Invalid: {}",
            map.points.len(),
            map.ways.len(),
            map.filtered_ways,
            map.unreferenced_points,
            map.invalid_points
        );

        map
    }
}

/// Read a JSON object of string tags, keeping the written order
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Tags, D::Error>
where
    D: Deserializer<'de>,
{
    struct TagsVisitor;

    impl<'de> Visitor<'de> for TagsVisitor {
        type Value = Tags;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an object of string tags")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Tags, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut tags = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                tags.push(Tag::new(key, value));
            }
            Ok(Tags::new(tags))
        }
    }

    deserializer.deserialize_map(TagsVisitor)
}
