//! Ordered key/value tags attached to points and ways

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single key/value tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the tag carries a non-empty value
    #[inline]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Ordered tag list
///
/// Lookups scan linearly, tag lists are small. When a key appears more than
/// once the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    /// Check if any tag has the given key
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Index of the first tag with the given key
    #[inline]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|tag| tag.key == key)
    }

    /// Value of the first tag with the given key, `None` if the key is absent
    #[inline]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.position(key).map(|index| self.0[index].value.as_str())
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `name` tag if present, otherwise the id as a string
    pub fn name_or_id(&self, id: i64) -> String {
        self.value("name")
            .map(str::to_owned)
            .unwrap_or_else(|| id.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| Tag::new(k, v)).collect())
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
