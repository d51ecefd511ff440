//! Configuration of the DOT text layout.
//!
//! [`RenderConfig`] controls whitespace only; it never changes what a document
//! means. It implements [`serde::Deserialize`] so it can be loaded from any
//! configuration format.
//!
//! # Example
//!
//! ```
//! # use dotwright::config::{IndentStyle, RenderConfig};
//! let config = RenderConfig::default();
//! assert_eq!(config.indent_style(), IndentStyle::Tab);
//! assert_eq!(config.indent_unit(), "\t");
//! ```

use serde::Deserialize;

/// Character used to indent nested statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Tab,
    Space,
}

impl IndentStyle {
    fn as_char(self) -> char {
        match self {
            Self::Tab => '\t',
            Self::Space => ' ',
        }
    }
}

/// Whitespace settings used when rendering a document.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Indentation character.
    #[serde(default)]
    indent_style: IndentStyle,

    /// Indentation characters per nesting level.
    #[serde(default = "RenderConfig::default_indent_width")]
    indent_width: usize,

    /// Whether the closing brace of the document is followed by a newline.
    #[serde(default = "RenderConfig::default_trailing_newline")]
    trailing_newline: bool,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent_style` - Character used for indentation.
    /// * `indent_width` - Number of indentation characters per nesting level.
    /// * `trailing_newline` - Whether the document ends with a newline.
    pub fn new(indent_style: IndentStyle, indent_width: usize, trailing_newline: bool) -> Self {
        Self {
            indent_style,
            indent_width,
            trailing_newline,
        }
    }

    pub fn indent_style(&self) -> IndentStyle {
        self.indent_style
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Returns the whitespace written once per nesting level.
    pub fn indent_unit(&self) -> String {
        std::iter::repeat_n(self.indent_style.as_char(), self.indent_width).collect()
    }

    fn default_indent_width() -> usize {
        1
    }

    fn default_trailing_newline() -> bool {
        true
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(
            IndentStyle::default(),
            Self::default_indent_width(),
            Self::default_trailing_newline(),
        )
    }
}
