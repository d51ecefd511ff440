//! Dotwright - A builder for Graphviz DOT documents.
//!
//! Documents are built in memory as a tree of graphs, subgraphs, clusters,
//! nodes and edges, each carrying a typed attribute set, and then rendered as
//! DOT text. Identifiers are unique across the whole document, invalid
//! attribute values are clamped at the setter, and attributes left at their
//! default are never written.
//!
//! # Examples
//!
//! ```
//! use dotwright::{RootGraph, color::Color, identifier::Identified, kinds::NodeShape};
//!
//! let mut graph = RootGraph::with_label(true, "Pipeline");
//! graph.node_defaults_mut().set_shape(NodeShape::Box);
//!
//! let parse = graph.add_node_with_id("Parse", "parse").id().clone();
//! let render = graph.add_node_with_id("Render", "render").id().clone();
//! graph
//!     .add_edge(&parse, &render)
//!     .attributes_mut()
//!     .set_color(Color::Red);
//!
//! let dot = graph.render();
//! assert!(dot.contains("\tparse->render [color=\"red\"];\n"));
//! ```

pub mod config;

mod error;
mod export;
mod structure;

pub use dotwright_core::{
    attribute, attribute_set, color, geometry, identifier, kinds, sanitize,
};

pub use error::DotError;
pub use structure::{
    Cluster, DEFAULT_ROOT_ID, Edge, EdgeKey, GraphBody, Node, RootGraph, Subgraph,
};
