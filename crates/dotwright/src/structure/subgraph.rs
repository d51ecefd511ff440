use std::ops::{Deref, DerefMut};

use dotwright_core::{
    attribute_set::SubgraphAttributeSet,
    identifier::{Id, Identified},
};

use super::GraphBody;

/// A nested group of nodes that shares the document's identifier space.
///
/// Dereferences to [`GraphBody`] for children and defaults.
#[derive(Debug)]
pub struct Subgraph {
    body: GraphBody,
    attributes: SubgraphAttributeSet,
}

impl Subgraph {
    pub(super) fn new(body: GraphBody) -> Self {
        Self {
            body,
            attributes: SubgraphAttributeSet::new(),
        }
    }

    pub fn attributes(&self) -> &SubgraphAttributeSet {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut SubgraphAttributeSet {
        &mut self.attributes
    }
}

impl Deref for Subgraph {
    type Target = GraphBody;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

impl DerefMut for Subgraph {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.body
    }
}

impl Identified for Subgraph {
    fn id(&self) -> &Id {
        self.body.id()
    }
}
