//! The DOT writer.
//!
//! Statements are written depth first in a fixed order per body: the
//! `node [...]` and `edge [...]` default blocks, then nodes, edges, subgraphs
//! and clusters. Defaults only apply to entities declared after them, so the
//! blocks come first.
//!
//! Every graph kind has its own header and attribute syntax:
//!
//! ```text
//! digraph somegraph {
//!     graph [label="Root", rankdir="LR"];
//!     subgraph Graph0 {
//!         rank="same";
//!     }
//!     subgraph cluster_1 {
//!         graph [label="Group"];
//!     }
//! }
//! ```

use std::fmt::{self, Display, Write};

use dotwright_core::{attribute_set::AttributeSet, identifier::Identified, sanitize::quote_id};

use crate::{
    config::RenderConfig,
    structure::{Cluster, Edge, GraphBody, Node, RootGraph, Subgraph},
};

/// A root graph paired with the layout to render it with.
pub(crate) struct DotDocument<'a> {
    root: &'a RootGraph,
    config: &'a RenderConfig,
}

impl<'a> DotDocument<'a> {
    pub(crate) fn new(root: &'a RootGraph, config: &'a RenderConfig) -> Self {
        Self { root, config }
    }
}

impl Display for DotDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DotWriter::new(f, self.config).write_root(self.root)
    }
}

/// Writes a document tree to any [`fmt::Write`] sink.
struct DotWriter<'a, W: Write> {
    out: &'a mut W,
    indent_unit: String,
    trailing_newline: bool,
    connector: &'static str,
}

impl<'a, W: Write> DotWriter<'a, W> {
    fn new(out: &'a mut W, config: &RenderConfig) -> Self {
        Self {
            out,
            indent_unit: config.indent_unit(),
            trailing_newline: config.trailing_newline(),
            connector: "->",
        }
    }

    fn write_root(&mut self, root: &RootGraph) -> fmt::Result {
        let keyword = if root.is_directed() {
            self.connector = "->";
            "digraph"
        } else {
            self.connector = "--";
            "graph"
        };

        writeln!(self.out, "{keyword} {} {{", quote_id(root.id()))?;
        if let Some(list) = attribute_list(root.label(), root.attributes()) {
            self.indent(1)?;
            writeln!(self.out, "graph [{list}];")?;
        }
        self.write_body(root, 1)?;

        self.out.write_char('}')?;
        if self.trailing_newline {
            self.out.write_char('\n')?;
        }
        Ok(())
    }

    /// Writes a plain subgraph whose statements sit at `depth`.
    ///
    /// Subgraph attributes are written as bare statements, one per line.
    fn write_subgraph(&mut self, subgraph: &Subgraph, depth: usize) -> fmt::Result {
        self.indent(depth - 1)?;
        writeln!(self.out, "subgraph {} {{", quote_id(subgraph.id()))?;

        if let Some(label) = subgraph.label() {
            self.indent(depth)?;
            writeln!(self.out, "label=\"{label}\";")?;
        }
        for attribute in subgraph.attributes().iter() {
            if attribute.is_renderable() {
                self.indent(depth)?;
                writeln!(self.out, "{attribute};")?;
            }
        }
        self.write_body(subgraph, depth)?;

        self.indent(depth - 1)?;
        writeln!(self.out, "}}")
    }

    /// Writes a cluster whose statements sit at `depth`.
    fn write_cluster(&mut self, cluster: &Cluster, depth: usize) -> fmt::Result {
        self.indent(depth - 1)?;
        writeln!(self.out, "subgraph {} {{", quote_id(cluster.id()))?;

        if let Some(list) = attribute_list(cluster.label(), cluster.attributes()) {
            self.indent(depth)?;
            writeln!(self.out, "graph [{list}];")?;
        }
        self.write_body(cluster, depth)?;

        self.indent(depth - 1)?;
        writeln!(self.out, "}}")
    }

    fn write_body(&mut self, body: &GraphBody, depth: usize) -> fmt::Result {
        if !body.node_defaults().is_empty() {
            self.indent(depth)?;
            writeln!(self.out, "node [{}];", body.node_defaults())?;
        }
        if !body.edge_defaults().is_empty() {
            self.indent(depth)?;
            writeln!(self.out, "edge [{}];", body.edge_defaults())?;
        }

        for node in body.nodes() {
            self.write_node(node, depth)?;
        }
        for edge in body.edges() {
            self.write_edge(edge, depth)?;
        }
        for subgraph in body.subgraphs() {
            self.write_subgraph(subgraph, depth + 1)?;
        }
        for cluster in body.clusters() {
            self.write_cluster(cluster, depth + 1)?;
        }
        Ok(())
    }

    fn write_node(&mut self, node: &Node, depth: usize) -> fmt::Result {
        self.indent(depth)?;
        write!(self.out, "{}", quote_id(node.id()))?;
        self.write_statement_end(attribute_list(node.label(), node.attributes()))
    }

    fn write_edge(&mut self, edge: &Edge, depth: usize) -> fmt::Result {
        self.indent(depth)?;
        write!(
            self.out,
            "{}{}{}",
            quote_id(edge.source()),
            self.connector,
            quote_id(edge.target())
        )?;
        self.write_statement_end(attribute_list(edge.label(), edge.attributes()))
    }

    fn write_statement_end(&mut self, list: Option<String>) -> fmt::Result {
        match list {
            Some(list) => writeln!(self.out, " [{list}];"),
            None => writeln!(self.out, ";"),
        }
    }

    fn indent(&mut self, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            self.out.write_str(&self.indent_unit)?;
        }
        Ok(())
    }
}

/// Joins a label and an attribute set into the contents of a `[...]` block.
///
/// Returns `None` when there is nothing to write, so no empty brackets are
/// ever emitted.
fn attribute_list(label: Option<&str>, attributes: &AttributeSet) -> Option<String> {
    match (label, attributes.is_empty()) {
        (None, true) => None,
        (None, false) => Some(attributes.to_string()),
        (Some(label), true) => Some(format!("label=\"{label}\"")),
        (Some(label), false) => Some(format!("label=\"{label}\", {attributes}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotwright_core::{
        color::Color,
        kinds::{NodeShape, RankDir, RankType},
    };

    use crate::config::IndentStyle;

    #[test]
    fn test_empty_directed_document() {
        let graph = RootGraph::new(true);
        assert_eq!(graph.render(), "digraph somegraph {\n}\n");
    }

    #[test]
    fn test_empty_undirected_document() {
        let graph = RootGraph::new(false);
        assert_eq!(graph.render(), "graph somegraph {\n}\n");
    }

    #[test]
    fn test_root_label_and_attributes() {
        let mut graph = RootGraph::with_label(true, "Title");
        graph.attributes_mut().set_rank_dir(RankDir::LeftToRight);

        assert_eq!(
            graph.render(),
            "digraph somegraph {\n\tgraph [label=\"Title\", rankdir=\"LR\"];\n}\n"
        );
    }

    #[test]
    fn test_undirected_edge_connector() {
        let mut graph = RootGraph::new(false);
        let a = graph.add_node().id().clone();
        let b = graph.add_node().id().clone();
        graph.add_edge(&a, &b);

        assert!(graph.render().contains("\tNode0--Node1;\n"));
    }

    #[test]
    fn test_defaults_precede_entities() {
        let mut graph = RootGraph::new(true);
        graph.add_node();
        graph.node_defaults_mut().set_shape(NodeShape::Box);
        graph.edge_defaults_mut().set_color(Color::Red);

        assert_eq!(
            graph.render(),
            "digraph somegraph {\n\
             \tnode [shape=\"box\"];\n\
             \tedge [color=\"red\"];\n\
             \tNode0;\n\
             }\n"
        );
    }

    #[test]
    fn test_node_and_edge_attribute_blocks() {
        let mut graph = RootGraph::new(true);
        let a = graph.add_node_with_label("A").id().clone();
        let b = graph.add_node().id().clone();
        graph
            .add_edge_with_label(&a, &b, "goes to")
            .attributes_mut()
            .set_weight(2.0);

        assert_eq!(
            graph.render(),
            "digraph somegraph {\n\
             \tNode0 [label=\"A\"];\n\
             \tNode1;\n\
             \tNode0->Node1 [label=\"goes to\", weight=\"2\"];\n\
             }\n"
        );
    }

    #[test]
    fn test_subgraph_attributes_are_bare_statements() {
        let mut graph = RootGraph::new(true);
        let subgraph = graph.add_subgraph_with_label("row");
        subgraph.attributes_mut().set_rank(RankType::Same);
        subgraph.add_node();

        assert_eq!(
            graph.render(),
            "digraph somegraph {\n\
             \tsubgraph Graph0 {\n\
             \t\tlabel=\"row\";\n\
             \t\trank=\"same\";\n\
             \t\tNode0;\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_cluster_attributes_use_graph_block() {
        let mut graph = RootGraph::new(true);
        let cluster = graph.add_cluster_with_label("Group");
        cluster.attributes_mut().set_color(Color::Blue);

        assert_eq!(
            graph.render(),
            "digraph somegraph {\n\
             \tsubgraph cluster_0 {\n\
             \t\tgraph [label=\"Group\", color=\"blue\"];\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_subgraphs_render_before_clusters() {
        let mut graph = RootGraph::new(true);
        graph.add_cluster();
        graph.add_subgraph();

        let output = graph.render();
        let subgraph = output.find("subgraph Graph1").unwrap();
        let cluster = output.find("subgraph cluster_0").unwrap();
        assert!(subgraph < cluster);
    }

    #[test]
    fn test_nested_indentation() {
        let mut graph = RootGraph::new(true);
        graph
            .add_cluster_with_id("", "outer")
            .add_subgraph_with_id("", "inner")
            .add_node_with_id("", "leaf");

        assert_eq!(
            graph.render(),
            "digraph somegraph {\n\
             \tsubgraph cluster_outer {\n\
             \t\tsubgraph inner {\n\
             \t\t\tleaf;\n\
             \t\t}\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_space_indentation_and_no_trailing_newline() {
        let mut graph = RootGraph::new(true);
        graph.add_node();
        let config = RenderConfig::new(IndentStyle::Space, 2, false);

        assert_eq!(graph.render_with(&config), "digraph somegraph {\n  Node0;\n}");
    }

    #[test]
    fn test_identifiers_are_quoted_when_needed() {
        let mut graph = RootGraph::with_id(true, "my graph");
        let a = graph.add_node_with_id("", "first node").id().clone();
        let b = graph.add_node_with_id("", "node").id().clone();
        graph.add_edge(&a, &b);

        assert_eq!(
            graph.render(),
            "digraph \"my graph\" {\n\
             \t\"first node\";\n\
             \t\"node\";\n\
             \t\"first node\"->\"node\";\n\
             }\n"
        );
    }

    #[test]
    fn test_display_matches_render() {
        let mut graph = RootGraph::new(false);
        graph.add_node_with_label("x");

        assert_eq!(graph.to_string(), graph.render());
    }
}
