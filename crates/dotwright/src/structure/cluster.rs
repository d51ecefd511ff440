use std::ops::{Deref, DerefMut};

use dotwright_core::{
    attribute_set::ClusterAttributeSet,
    identifier::{Id, Identified},
};

use super::GraphBody;

/// A subgraph drawn as a boxed group.
///
/// Its identifier always starts with `cluster`, which is how renderers tell it
/// apart from a plain subgraph.
///
/// Dereferences to [`GraphBody`] for children and defaults.
#[derive(Debug)]
pub struct Cluster {
    body: GraphBody,
    attributes: ClusterAttributeSet,
}

impl Cluster {
    pub(super) fn new(body: GraphBody) -> Self {
        Self {
            body,
            attributes: ClusterAttributeSet::new(),
        }
    }

    pub fn attributes(&self) -> &ClusterAttributeSet {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut ClusterAttributeSet {
        &mut self.attributes
    }
}

impl Deref for Cluster {
    type Target = GraphBody;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

impl DerefMut for Cluster {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.body
    }
}

impl Identified for Cluster {
    fn id(&self) -> &Id {
        self.body.id()
    }
}
