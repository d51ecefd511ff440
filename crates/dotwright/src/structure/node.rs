use dotwright_core::{
    attribute_set::NodeAttributeSet,
    identifier::{Id, Identified},
};

use super::sanitize_label;

/// A node of a DOT document.
///
/// Nodes are created through [`GraphBody::add_node`] and friends, which
/// allocate their identifier.
///
/// [`GraphBody::add_node`]: super::GraphBody::add_node
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: Option<String>,
    attributes: NodeAttributeSet,
}

impl Node {
    pub(super) fn new(id: Id, label: Option<&str>) -> Self {
        Self {
            id,
            label: label.and_then(sanitize_label),
            attributes: NodeAttributeSet::new(),
        }
    }

    /// Returns the sanitized label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets the label. An empty label removes it.
    pub fn set_label(&mut self, label: &str) -> &mut Self {
        self.label = sanitize_label(label);
        self
    }

    pub fn attributes(&self) -> &NodeAttributeSet {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut NodeAttributeSet {
        &mut self.attributes
    }
}

impl Identified for Node {
    fn id(&self) -> &Id {
        &self.id
    }
}
