use std::{
    cell::RefCell,
    fmt::{self, Display},
    io::Write,
    ops::{Deref, DerefMut},
    path::Path,
    rc::Rc,
};

use log::{debug, info, trace};
use tempfile::NamedTempFile;

use dotwright_core::{attribute_set::GraphAttributeSet, identifier::IdRegistry};

use super::GraphBody;
use crate::{DotError, config::RenderConfig, export::dot::DotDocument};

/// Identifier given to a root graph created without one.
pub const DEFAULT_ROOT_ID: &str = "somegraph";

/// The top of a DOT document.
///
/// The root graph owns the identifier registry of the document and is the
/// entry point for rendering. It dereferences to [`GraphBody`], so children
/// are added directly on it.
///
/// # Examples
///
/// ```
/// use dotwright::{RootGraph, identifier::Identified};
///
/// let mut graph = RootGraph::new(true);
/// let a = graph.add_node_with_label("A").id().clone();
/// let b = graph.add_node_with_label("B").id().clone();
/// graph.add_edge(&a, &b);
///
/// let dot = graph.render();
/// assert!(dot.starts_with("digraph somegraph {\n"));
/// assert!(dot.contains("\tNode0->Node1;\n"));
/// ```
#[derive(Debug)]
pub struct RootGraph {
    body: GraphBody,
    attributes: GraphAttributeSet,
}

impl RootGraph {
    /// Creates an empty document.
    ///
    /// # Arguments
    ///
    /// * `directed` - Whether the document is a `digraph` or a `graph`.
    pub fn new(directed: bool) -> Self {
        Self::build(directed, DEFAULT_ROOT_ID, None)
    }

    /// Creates an empty document with a graph label.
    pub fn with_label(directed: bool, label: &str) -> Self {
        Self::build(directed, DEFAULT_ROOT_ID, Some(label))
    }

    /// Creates an empty document with a caller chosen identifier.
    pub fn with_id(directed: bool, id: &str) -> Self {
        Self::build(directed, id, None)
    }

    fn build(directed: bool, id: &str, label: Option<&str>) -> Self {
        let registry = Rc::new(RefCell::new(IdRegistry::new()));
        let id = registry.borrow_mut().validate_custom_id(id);
        debug!(id = id.as_str(), directed; "Creating root graph");

        Self {
            body: GraphBody::new(id, label, directed, registry),
            attributes: GraphAttributeSet::new(),
        }
    }

    pub fn attributes(&self) -> &GraphAttributeSet {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut GraphAttributeSet {
        &mut self.attributes
    }

    /// Renders the document with the default layout.
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Renders the document with the given layout.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let output = DotDocument::new(self, config).to_string();
        trace!(output = output.as_str(); "Rendered document");
        output
    }

    /// Writes the rendered document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::Io`] if the writer fails.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<(), DotError> {
        self.write_to_with(writer, &RenderConfig::default())
    }

    /// Writes the document rendered with `config` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::Io`] if the writer fails.
    pub fn write_to_with(
        &self,
        writer: &mut impl Write,
        config: &RenderConfig,
    ) -> Result<(), DotError> {
        writer.write_all(self.render_with(config).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the document to a file, replacing it if it exists.
    ///
    /// # Errors
    ///
    /// See [`RootGraph::write_to_file_with`].
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), DotError> {
        self.write_to_file_with(path, &RenderConfig::default())
    }

    /// Writes the document rendered with `config` to a file.
    ///
    /// The document is first written to a temporary file next to `path` and
    /// then moved into place, so `path` either holds the complete document or
    /// is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::Io`] if the temporary file cannot be created or
    /// written, and [`DotError::Persist`] if it cannot be moved to `path`.
    pub fn write_to_file_with(
        &self,
        path: impl AsRef<Path>,
        config: &RenderConfig,
    ) -> Result<(), DotError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Writing DOT document");

        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = NamedTempFile::new_in(directory)?;
        self.write_to_with(&mut file, config)?;
        file.persist(path).map_err(|err| DotError::Persist {
            path: path.to_path_buf(),
            source: err.error,
        })?;

        debug!(path = path.display().to_string(); "DOT document written");
        Ok(())
    }
}

impl Deref for RootGraph {
    type Target = GraphBody;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

impl DerefMut for RootGraph {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.body
    }
}

impl Display for RootGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&DotDocument::new(self, &RenderConfig::default()), f)
    }
}
