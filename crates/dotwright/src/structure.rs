//! The document tree.
//!
//! A document is a [`RootGraph`] that owns a [`GraphBody`]. Every body owns
//! its nodes, edges, subgraphs and clusters, keyed by identifier and kept in
//! insertion order, which is also render order. Subgraphs and clusters carry
//! their own body, so nesting is plain ownership; dropping a graph drops its
//! whole subtree.
//!
//! All bodies of one document share a single [`IdRegistry`], so identifiers
//! stay unique across every nesting level.
//!
//! [`IdRegistry`]: dotwright_core::identifier::IdRegistry

mod body;
mod cluster;
mod edge;
mod node;
mod root;
mod subgraph;

pub use body::GraphBody;
pub use cluster::Cluster;
pub use edge::{Edge, EdgeKey};
pub use node::Node;
pub use root::{DEFAULT_ROOT_ID, RootGraph};
pub use subgraph::Subgraph;

use dotwright_core::sanitize::sanitize;

/// Sanitizes a label, treating an empty label as no label at all.
fn sanitize_label(label: &str) -> Option<String> {
    (!label.is_empty()).then(|| sanitize(label))
}
