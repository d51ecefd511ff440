use std::fmt;

use dotwright_core::{attribute_set::EdgeAttributeSet, identifier::Id};

use super::sanitize_label;

/// Handle of an edge, unique within the body that owns it.
///
/// Edges have no document identifier, and several edges may join the same
/// pair of endpoints, so they are addressed by key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u64);

impl EdgeKey {
    pub(super) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An edge between two identified entities.
///
/// The edge does not own its endpoints; it only records their identifiers.
/// Removing an endpoint leaves the edge in place, still naming the removed
/// identifier.
#[derive(Debug, Clone)]
pub struct Edge {
    key: EdgeKey,
    source: Id,
    target: Id,
    label: Option<String>,
    attributes: EdgeAttributeSet,
}

impl Edge {
    pub(super) fn new(key: EdgeKey, source: Id, target: Id, label: Option<&str>) -> Self {
        Self {
            key,
            source,
            target,
            label: label.and_then(sanitize_label),
            attributes: EdgeAttributeSet::new(),
        }
    }

    pub fn key(&self) -> EdgeKey {
        self.key
    }

    /// Returns the identifier of the tail endpoint.
    pub fn source(&self) -> &Id {
        &self.source
    }

    /// Returns the identifier of the head endpoint.
    pub fn target(&self) -> &Id {
        &self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets the label. An empty label removes it.
    pub fn set_label(&mut self, label: &str) -> &mut Self {
        self.label = sanitize_label(label);
        self
    }

    pub fn attributes(&self) -> &EdgeAttributeSet {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut EdgeAttributeSet {
        &mut self.attributes
    }

    /// Returns `true` if the edge joins `source` to `target`, in either
    /// direction when `directed` is `false`.
    pub(super) fn joins(&self, source: &Id, target: &Id, directed: bool) -> bool {
        let forward = self.source == *source && self.target == *target;
        let backward = self.source == *target && self.target == *source;
        forward || (!directed && backward)
    }
}
