//! Document-scoped identifiers.
//!
//! Every entity of a DOT document (nodes, subgraphs, clusters and the root
//! graph itself) is named by an [`Id`]. Uniqueness is guaranteed by a single
//! [`IdRegistry`] per document: the registry hands out generated names for
//! anonymous entities and disambiguates user supplied names that collide.
//!
//! Identifiers are never released. Removing an entity from a document keeps its
//! name reserved, so a stale [`Id`] held elsewhere can never alias a newer
//! entity.

use std::{borrow::Borrow, fmt, ops::Deref, rc::Rc};

use log::debug;
use string_interner::DefaultStringInterner;

/// Prefix of generated node identifiers (`Node0`, `Node1`, ...).
pub const NODE_PREFIX: &str = "Node";

/// Prefix of generated subgraph identifiers (`Graph0`, `Graph1`, ...).
pub const SUBGRAPH_PREFIX: &str = "Graph";

/// Prefix that downstream renderers use to recognize cluster subgraphs.
pub const CLUSTER_PREFIX: &str = "cluster";

/// Prefix of generated cluster identifiers and of corrected custom ones.
const CLUSTER_ID_PREFIX: &str = "cluster_";

/// An identifier of a document entity.
///
/// Identifiers are produced by an [`IdRegistry`] and are cheap to clone. They
/// dereference to `str`, so they can be passed wherever a name is looked up.
///
/// # Examples
///
/// ```
/// use dotwright_core::identifier::IdRegistry;
///
/// let mut registry = IdRegistry::new();
/// let id = registry.allocate_node_id();
/// assert_eq!(id, "Node0");
/// assert_eq!(id.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Rc<str>);

impl Id {
    fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Id {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Capability of anything that carries a document identifier.
///
/// Edges connect two `Identified` values. Nodes, subgraphs and clusters all
/// qualify, as does a bare [`Id`].
pub trait Identified {
    /// Returns the identifier of this entity.
    fn id(&self) -> &Id;
}

impl Identified for Id {
    fn id(&self) -> &Id {
        self
    }
}

/// The per-document authority for identifier uniqueness.
///
/// Known identifiers are interned; a candidate is accepted only if it has never
/// been registered before. Three counters drive generated names:
///
/// - node names use their own counter,
/// - subgraph and cluster names share one counter,
/// - custom-name disambiguation uses a single counter for the whole document,
///   so no disambiguated suffix is ever attempted twice.
///
/// # Examples
///
/// ```
/// use dotwright_core::identifier::IdRegistry;
///
/// let mut registry = IdRegistry::new();
/// assert_eq!(registry.validate_custom_id("foo"), "foo");
/// assert_eq!(registry.validate_custom_id("foo"), "foo0");
/// assert_eq!(registry.validate_custom_cluster_id("group"), "cluster_group");
/// ```
pub struct IdRegistry {
    known: DefaultStringInterner,
    next_node: u64,
    next_subgraph: u64,
    next_custom: u64,
}

impl IdRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            known: DefaultStringInterner::new(),
            next_node: 0,
            next_subgraph: 0,
            next_custom: 0,
        }
    }

    /// Allocates a fresh `Node<N>` identifier.
    ///
    /// Candidates that were already claimed by a custom identifier are skipped.
    pub fn allocate_node_id(&mut self) -> Id {
        loop {
            let candidate = format!("{NODE_PREFIX}{}", self.next_node);
            self.next_node += 1;
            if let Some(id) = self.register(&candidate) {
                return id;
            }
            debug!(candidate; "Generated node identifier already taken");
        }
    }

    /// Allocates a fresh `Graph<N>` identifier.
    pub fn allocate_subgraph_id(&mut self) -> Id {
        loop {
            let candidate = format!("{SUBGRAPH_PREFIX}{}", self.next_subgraph);
            self.next_subgraph += 1;
            if let Some(id) = self.register(&candidate) {
                return id;
            }
            debug!(candidate; "Generated subgraph identifier already taken");
        }
    }

    /// Allocates a fresh `cluster_<N>` identifier.
    ///
    /// Shares its counter with [`IdRegistry::allocate_subgraph_id`].
    pub fn allocate_cluster_id(&mut self) -> Id {
        loop {
            let candidate = format!("{CLUSTER_ID_PREFIX}{}", self.next_subgraph);
            self.next_subgraph += 1;
            if let Some(id) = self.register(&candidate) {
                return id;
            }
            debug!(candidate; "Generated cluster identifier already taken");
        }
    }

    /// Registers a user supplied identifier.
    ///
    /// The candidate is returned verbatim if it is unused. Otherwise the shared
    /// disambiguation counter is appended (`foo` becomes `foo0`, `foo1`, ...)
    /// until an unused name is found.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The identifier requested by the caller.
    pub fn validate_custom_id(&mut self, candidate: &str) -> Id {
        if let Some(id) = self.register(candidate) {
            return id;
        }

        loop {
            let renamed = format!("{candidate}{}", self.next_custom);
            self.next_custom += 1;
            if let Some(id) = self.register(&renamed) {
                debug!(candidate, renamed; "Disambiguated colliding identifier");
                return id;
            }
        }
    }

    /// Registers a user supplied cluster identifier.
    ///
    /// Renderers only treat subgraphs whose name starts with `cluster` as
    /// clusters, so a candidate without that prefix is rewritten to
    /// `cluster_<candidate>` before being validated like any custom identifier.
    pub fn validate_custom_cluster_id(&mut self, candidate: &str) -> Id {
        if candidate.starts_with(CLUSTER_PREFIX) {
            self.validate_custom_id(candidate)
        } else {
            self.validate_custom_id(&format!("{CLUSTER_ID_PREFIX}{candidate}"))
        }
    }

    /// Returns `true` if the identifier has been handed out by this registry.
    pub fn contains(&self, name: &str) -> bool {
        self.known.get(name).is_some()
    }

    /// Returns the number of registered identifiers.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Returns `true` if no identifier has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    fn register(&mut self, candidate: &str) -> Option<Id> {
        if self.contains(candidate) {
            return None;
        }
        self.known.get_or_intern(candidate);
        Some(Id::new(candidate))
    }
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdRegistry")
            .field("registered", &self.known.len())
            .field("next_node", &self.next_node)
            .field("next_subgraph", &self.next_subgraph)
            .field("next_custom", &self.next_custom)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_node_ids_are_sequential() {
        let mut registry = IdRegistry::new();

        assert_eq!(registry.allocate_node_id(), "Node0");
        assert_eq!(registry.allocate_node_id(), "Node1");
        assert_eq!(registry.allocate_node_id(), "Node2");
    }

    #[test]
    fn test_allocate_node_id_skips_custom_collision() {
        let mut registry = IdRegistry::new();
        registry.validate_custom_id("Node0");

        assert_eq!(registry.allocate_node_id(), "Node1");
    }

    #[test]
    fn test_subgraph_and_cluster_share_counter() {
        let mut registry = IdRegistry::new();

        assert_eq!(registry.allocate_subgraph_id(), "Graph0");
        assert_eq!(registry.allocate_cluster_id(), "cluster_1");
        assert_eq!(registry.allocate_subgraph_id(), "Graph2");
    }

    #[test]
    fn test_custom_id_is_kept_when_unused() {
        let mut registry = IdRegistry::new();

        assert_eq!(registry.validate_custom_id("foo"), "foo");
        assert!(registry.contains("foo"));
    }

    #[test]
    fn test_custom_id_collision_gets_suffix() {
        let mut registry = IdRegistry::new();

        assert_eq!(registry.validate_custom_id("foo"), "foo");
        assert_eq!(registry.validate_custom_id("foo"), "foo0");
        assert_eq!(registry.validate_custom_id("foo"), "foo1");
    }

    #[test]
    fn test_disambiguation_counter_is_shared() {
        let mut registry = IdRegistry::new();

        registry.validate_custom_id("foo");
        assert_eq!(registry.validate_custom_id("foo"), "foo0");

        registry.validate_custom_id("bar");
        assert_eq!(registry.validate_custom_id("bar"), "bar1");
    }

    #[test]
    fn test_disambiguation_skips_taken_suffix() {
        let mut registry = IdRegistry::new();

        registry.validate_custom_id("foo");
        registry.validate_custom_id("foo0");

        assert_eq!(registry.validate_custom_id("foo"), "foo1");
    }

    #[test]
    fn test_cluster_id_gets_prefix() {
        let mut registry = IdRegistry::new();

        assert_eq!(
            registry.validate_custom_cluster_id("mygroup"),
            "cluster_mygroup"
        );
        assert_eq!(registry.validate_custom_cluster_id("cluster_a"), "cluster_a");
        assert_eq!(registry.validate_custom_cluster_id("clusterB"), "clusterB");
    }

    #[test]
    fn test_removed_names_are_never_reused() {
        let mut registry = IdRegistry::new();
        let first = registry.allocate_node_id();
        drop(first);

        assert_eq!(registry.allocate_node_id(), "Node1");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_id_comparisons() {
        let mut registry = IdRegistry::new();
        let id = registry.validate_custom_id("alpha");

        assert!(id == "alpha");
        assert_eq!(id.as_str(), "alpha");
        assert_eq!(format!("{id}"), "alpha");
        assert_eq!(id.id(), &id);
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = IdRegistry::default();

        assert!(registry.is_empty());
        assert!(!registry.contains("Node0"));
    }
}
