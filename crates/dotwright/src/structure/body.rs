//! The part shared by every graph kind.
//!
//! [`GraphBody`] holds children, default attribute blocks and the document
//! registry handle. [`RootGraph`], [`Subgraph`] and [`Cluster`] wrap a body
//! and dereference to it, so the factories, lookups and removals below are
//! available on all three.
//!
//! [`RootGraph`]: super::RootGraph

use std::{cell::RefCell, rc::Rc};

use indexmap::IndexMap;
use log::{debug, warn};

use dotwright_core::{
    attribute_set::{EdgeAttributeSet, NodeAttributeSet},
    identifier::{Id, IdRegistry, Identified},
};

use super::{Cluster, Edge, EdgeKey, Node, Subgraph, sanitize_label};

/// Children and defaults of a graph, subgraph or cluster.
///
/// Collections keep insertion order, which is the order in which entities are
/// rendered. Identifiers come from the registry shared by the whole document.
#[derive(Debug)]
pub struct GraphBody {
    id: Id,
    label: Option<String>,
    directed: bool,
    registry: Rc<RefCell<IdRegistry>>,
    node_defaults: NodeAttributeSet,
    edge_defaults: EdgeAttributeSet,
    nodes: IndexMap<Id, Node>,
    edges: IndexMap<EdgeKey, Edge>,
    subgraphs: IndexMap<Id, Subgraph>,
    clusters: IndexMap<Id, Cluster>,
    next_edge: u64,
}

impl GraphBody {
    pub(super) fn new(
        id: Id,
        label: Option<&str>,
        directed: bool,
        registry: Rc<RefCell<IdRegistry>>,
    ) -> Self {
        Self {
            id,
            label: label.and_then(sanitize_label),
            directed,
            registry,
            node_defaults: NodeAttributeSet::new(),
            edge_defaults: EdgeAttributeSet::new(),
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            subgraphs: IndexMap::new(),
            clusters: IndexMap::new(),
            next_edge: 0,
        }
    }

    fn child_body(&self, id: Id, label: Option<&str>) -> Self {
        Self::new(id, label, self.directed, Rc::clone(&self.registry))
    }

    /// Returns `true` if edges of this document are directed.
    pub fn is_directed(&self) -> bool {
        self.directed
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

    /// Attributes applied to every node declared in this body.
    pub fn node_defaults(&self) -> &NodeAttributeSet {
        &self.node_defaults
    }

    pub fn node_defaults_mut(&mut self) -> &mut NodeAttributeSet {
        &mut self.node_defaults
    }

    /// Attributes applied to every edge declared in this body.
    pub fn edge_defaults(&self) -> &EdgeAttributeSet {
        &self.edge_defaults
    }

    pub fn edge_defaults_mut(&mut self) -> &mut EdgeAttributeSet {
        &mut self.edge_defaults
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Adds a node with a generated identifier and no label.
    pub fn add_node(&mut self) -> &mut Node {
        let id = self.registry.borrow_mut().allocate_node_id();
        self.insert_node(id, None)
    }

    /// Adds a labeled node with a generated identifier.
    pub fn add_node_with_label(&mut self, label: &str) -> &mut Node {
        let id = self.registry.borrow_mut().allocate_node_id();
        self.insert_node(id, Some(label))
    }

    /// Adds a labeled node with a caller chosen identifier.
    ///
    /// # Arguments
    ///
    /// * `label` - The node label; empty for none.
    /// * `id` - The requested identifier. If it is already taken anywhere in
    ///   the document, a disambiguated one is used instead; read it back
    ///   from the returned node.
    pub fn add_node_with_id(&mut self, label: &str, id: &str) -> &mut Node {
        let id = self.registry.borrow_mut().validate_custom_id(id);
        self.insert_node(id, Some(label))
    }

    fn insert_node(&mut self, id: Id, label: Option<&str>) -> &mut Node {
        debug!(graph = self.id.as_str(), node = id.as_str(); "Adding node");
        self.nodes
            .entry(id.clone())
            .or_insert_with(|| Node::new(id, label))
    }

    /// Adds an edge from `source` to `target`.
    ///
    /// Endpoints are anything carrying an identifier: nodes, subgraphs,
    /// clusters or a bare [`Id`]. They are not checked to belong to this
    /// document.
    pub fn add_edge(&mut self, source: &impl Identified, target: &impl Identified) -> &mut Edge {
        self.insert_edge(source.id().clone(), target.id().clone(), None)
    }

    /// Adds a labeled edge from `source` to `target`.
    pub fn add_edge_with_label(
        &mut self,
        source: &impl Identified,
        target: &impl Identified,
        label: &str,
    ) -> &mut Edge {
        self.insert_edge(source.id().clone(), target.id().clone(), Some(label))
    }

    fn insert_edge(&mut self, source: Id, target: Id, label: Option<&str>) -> &mut Edge {
        let key = EdgeKey::new(self.next_edge);
        self.next_edge += 1;
        debug!(
            graph = self.id.as_str(),
            source = source.as_str(),
            target = target.as_str();
            "Adding edge"
        );
        self.edges
            .entry(key)
            .or_insert_with(|| Edge::new(key, source, target, label))
    }

    /// Adds a subgraph with a generated identifier.
    pub fn add_subgraph(&mut self) -> &mut Subgraph {
        let id = self.registry.borrow_mut().allocate_subgraph_id();
        self.insert_subgraph(id, None)
    }

    pub fn add_subgraph_with_label(&mut self, label: &str) -> &mut Subgraph {
        let id = self.registry.borrow_mut().allocate_subgraph_id();
        self.insert_subgraph(id, Some(label))
    }

    /// Adds a subgraph with a caller chosen identifier, disambiguated if
    /// needed.
    pub fn add_subgraph_with_id(&mut self, label: &str, id: &str) -> &mut Subgraph {
        let id = self.registry.borrow_mut().validate_custom_id(id);
        self.insert_subgraph(id, Some(label))
    }

    fn insert_subgraph(&mut self, id: Id, label: Option<&str>) -> &mut Subgraph {
        debug!(graph = self.id.as_str(), subgraph = id.as_str(); "Adding subgraph");
        let body = self.child_body(id.clone(), label);
        self.subgraphs
            .entry(id)
            .or_insert_with(|| Subgraph::new(body))
    }

    /// Adds a cluster with a generated `cluster_<N>` identifier.
    pub fn add_cluster(&mut self) -> &mut Cluster {
        let id = self.registry.borrow_mut().allocate_cluster_id();
        self.insert_cluster(id, None)
    }

    pub fn add_cluster_with_label(&mut self, label: &str) -> &mut Cluster {
        let id = self.registry.borrow_mut().allocate_cluster_id();
        self.insert_cluster(id, Some(label))
    }

    /// Adds a cluster with a caller chosen identifier.
    ///
    /// Identifiers that do not start with `cluster` get a `cluster_` prefix so
    /// renderers recognize the subgraph as a cluster; `"backend"` becomes
    /// `"cluster_backend"`.
    pub fn add_cluster_with_id(&mut self, label: &str, id: &str) -> &mut Cluster {
        let id = self.registry.borrow_mut().validate_custom_cluster_id(id);
        self.insert_cluster(id, Some(label))
    }

    fn insert_cluster(&mut self, id: Id, label: Option<&str>) -> &mut Cluster {
        debug!(graph = self.id.as_str(), cluster = id.as_str(); "Adding cluster");
        let body = self.child_body(id.clone(), label);
        self.clusters
            .entry(id)
            .or_insert_with(|| Cluster::new(body))
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edges.get(&key)
    }

    pub fn edge_mut(&mut self, key: EdgeKey) -> Option<&mut Edge> {
        self.edges.get_mut(&key)
    }

    pub fn subgraph(&self, id: &str) -> Option<&Subgraph> {
        self.subgraphs.get(id)
    }

    pub fn subgraph_mut(&mut self, id: &str) -> Option<&mut Subgraph> {
        self.subgraphs.get_mut(id)
    }

    pub fn cluster(&self, id: &str) -> Option<&Cluster> {
        self.clusters.get(id)
    }

    pub fn cluster_mut(&mut self, id: &str) -> Option<&mut Cluster> {
        self.clusters.get_mut(id)
    }

    /// Returns the nodes of this body in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn subgraphs(&self) -> impl Iterator<Item = &Subgraph> {
        self.subgraphs.values()
    }

    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.values()
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes a node owned by this body.
    ///
    /// Edges that reference the node are kept and keep naming it. The
    /// identifier stays reserved in the registry.
    ///
    /// Returns `false` if this body has no such node.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let removed = self.nodes.shift_remove(id).is_some();
        self.log_removal("node", id, removed);
        removed
    }

    /// Removes an edge owned by this body.
    pub fn remove_edge(&mut self, key: EdgeKey) -> bool {
        let removed = self.edges.shift_remove(&key).is_some();
        self.log_removal("edge", &key.to_string(), removed);
        removed
    }

    /// Removes a subgraph, and with it its whole subtree.
    pub fn remove_subgraph(&mut self, id: &str) -> bool {
        let removed = self.subgraphs.shift_remove(id).is_some();
        self.log_removal("subgraph", id, removed);
        removed
    }

    /// Removes a cluster, and with it its whole subtree.
    pub fn remove_cluster(&mut self, id: &str) -> bool {
        let removed = self.clusters.shift_remove(id).is_some();
        self.log_removal("cluster", id, removed);
        removed
    }

    /// Removes every edge of this body from `source` to `target`.
    ///
    /// In an undirected document edges from `target` to `source` are removed
    /// too. Returns the number of removed edges.
    pub fn remove_edges_between(
        &mut self,
        source: &impl Identified,
        target: &impl Identified,
    ) -> usize {
        let directed = self.directed;
        let before = self.edges.len();
        self.edges
            .retain(|_, edge| !edge.joins(source.id(), target.id(), directed));

        let removed = before - self.edges.len();
        debug!(
            graph = self.id.as_str(),
            source = source.id().as_str(),
            target = target.id().as_str(),
            removed;
            "Removed edges between endpoints"
        );
        removed
    }

    fn log_removal(&self, kind: &str, id: &str, removed: bool) {
        if removed {
            debug!(graph = self.id.as_str(), kind, id; "Removed entity");
        } else {
            warn!(graph = self.id.as_str(), kind, id; "Entity to remove not found");
        }
    }
}

impl Identified for GraphBody {
    fn id(&self) -> &Id {
        &self.id
    }
}
