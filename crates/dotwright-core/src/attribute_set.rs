//! Ordered attribute collections and their entity-scoped setter catalogs.
//!
//! [`AttributeSet`] is the untyped base: attributes in insertion order, no
//! de-duplication. The scoped sets ([`GraphAttributeSet`],
//! [`ClusterAttributeSet`], [`SubgraphAttributeSet`], [`NodeAttributeSet`],
//! [`EdgeAttributeSet`]) dereference to it and add the setters Graphviz accepts
//! for their entity kind. Setters normalize their input (clamping bounded
//! numbers, sanitizing free text) and then append one attribute. Setting the
//! same attribute twice appends twice; downstream renderers apply the last one.

use std::fmt::{self, Display};

use log::trace;

use crate::{
    attribute::{Attribute, AttributeType, AttributeValue, EnumValue, Scalar},
    geometry::Point,
    sanitize::sanitize,
};

macro_rules! scoped_attribute_set {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name(crate::attribute_set::AttributeSet);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl std::ops::Deref for $name {
            type Target = crate::attribute_set::AttributeSet;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

mod cluster;
mod edge;
mod graph;
mod node;
mod subgraph;

pub use cluster::ClusterAttributeSet;
pub use edge::EdgeAttributeSet;
pub use graph::GraphAttributeSet;
pub use node::NodeAttributeSet;
pub use subgraph::SubgraphAttributeSet;

/// Maximum number of layout or rendering dimensions.
pub const MAX_DIMENSIONS: u32 = 10;

/// Highest `label_scheme` level.
pub const MAX_LABEL_SCHEME: u32 = 3;

/// Highest `showboxes` debug level.
pub const MAX_SHOW_BOXES: u32 = 2;

/// Smallest font size, in points.
pub const MIN_FONT_SIZE: f64 = 1.0;

/// Smallest number of polygon sides.
pub const MIN_SIDES: u32 = 3;

/// Lower bound of `skew` and `distortion`.
pub const MIN_DISTORTION: f64 = -100.0;

/// Smallest node width, in inches.
pub const MIN_WIDTH: f64 = 0.01;

/// Smallest node height, in inches.
pub const MIN_HEIGHT: f64 = 0.02;

/// An ordered list of attributes.
///
/// Rendering writes every renderable attribute in insertion order, separated
/// by `", "`, and nothing else. Wrapping the result in `[...]` is up to the
/// caller, who should skip it when [`AttributeSet::is_empty`] holds.
///
/// # Examples
///
/// ```
/// use dotwright_core::attribute_set::AttributeSet;
///
/// let mut set = AttributeSet::new();
/// assert!(set.is_empty());
///
/// set.add_custom_attribute("class", "hot").add_custom_attribute("data", "1");
/// assert_eq!(set.to_string(), r#"class="hot", data="1""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a custom attribute.
    ///
    /// Both strings are written verbatim. Free text must be passed through
    /// [`sanitize`] by the caller first.
    pub fn add_custom_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push(Attribute::custom(name, value));
        self
    }

    /// Returns the number of stored attributes, including ones that render
    /// as nothing.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` when rendering the set produces no output.
    pub fn is_empty(&self) -> bool {
        !self.attributes.iter().any(Attribute::is_renderable)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
        self.attributes.iter_mut()
    }

    /// Returns the most recently added attribute of the given type.
    pub fn find(&self, kind: AttributeType) -> Option<&Attribute> {
        self.attributes
            .iter()
            .rev()
            .find(|attribute| attribute.kind() == Some(kind))
    }

    /// Mutable counterpart of [`AttributeSet::find`], for editing list values
    /// in place.
    pub fn find_mut(&mut self, kind: AttributeType) -> Option<&mut Attribute> {
        self.attributes
            .iter_mut()
            .rev()
            .find(|attribute| attribute.kind() == Some(kind))
    }

    /// Removes every attribute.
    pub fn clear(&mut self) {
        self.attributes.clear();
    }

    fn push(&mut self, attribute: Attribute) {
        trace!(attribute = attribute.name(); "Adding attribute");
        self.attributes.push(attribute);
    }

    // =========================================================================
    // Construction helpers used by the scoped setters
    // =========================================================================

    pub(crate) fn add_bool(&mut self, kind: AttributeType, value: bool) {
        self.push(Attribute::new(kind, value));
    }

    pub(crate) fn add_simple(&mut self, kind: AttributeType, value: impl Into<Scalar>) {
        self.push(Attribute::new(kind, AttributeValue::Scalar(value.into())));
    }

    /// Sanitizes `value` and appends it as a text scalar.
    pub(crate) fn add_text(&mut self, kind: AttributeType, value: &str) {
        self.push(Attribute::new(kind, Scalar::Text(sanitize(value))));
    }

    pub(crate) fn add_simple_list<T: Into<Scalar>>(
        &mut self,
        kind: AttributeType,
        values: impl IntoIterator<Item = T>,
    ) {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        self.push(Attribute::new(kind, AttributeValue::ScalarList(values)));
    }

    pub(crate) fn add_enum(&mut self, kind: AttributeType, value: impl Into<EnumValue>) {
        self.push(Attribute::new(kind, AttributeValue::Enum(value.into())));
    }

    pub(crate) fn add_enum_list<T: Into<EnumValue>>(
        &mut self,
        kind: AttributeType,
        values: impl IntoIterator<Item = T>,
    ) {
        let values: Vec<EnumValue> = values.into_iter().map(Into::into).collect();
        self.push(Attribute::new(kind, AttributeValue::EnumList(values)));
    }

    pub(crate) fn add_style_list<T: Into<EnumValue>>(
        &mut self,
        kind: AttributeType,
        values: impl IntoIterator<Item = T>,
    ) {
        let values: Vec<EnumValue> = values.into_iter().map(Into::into).collect();
        self.push(Attribute::new(kind, AttributeValue::StyleList(values)));
    }

    pub(crate) fn add_point(&mut self, kind: AttributeType, point: Point) {
        self.push(Attribute::new(kind, point));
    }

    pub(crate) fn add_add_double(&mut self, kind: AttributeType, value: f64) {
        self.push(Attribute::new(kind, AttributeValue::AddScalar(value)));
    }

    pub(crate) fn add_add_point(&mut self, kind: AttributeType, point: Point) {
        self.push(Attribute::new(kind, AttributeValue::AddPoint(point)));
    }

    pub(crate) fn add_point_list(
        &mut self,
        kind: AttributeType,
        points: impl IntoIterator<Item = Point>,
    ) {
        let points: Vec<Point> = points.into_iter().collect();
        self.push(Attribute::new(kind, AttributeValue::PointList(points)));
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderable = self.attributes.iter().filter(|a| a.is_renderable());
        if let Some(first) = renderable.next() {
            write!(f, "{first}")?;
        }
        for attribute in renderable {
            write!(f, ", {attribute}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, kinds::NodeShape};

    #[test]
    fn test_empty_set_renders_nothing() {
        let set = AttributeSet::new();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn test_insertion_order_and_separator() {
        let mut set = AttributeSet::new();
        set.add_bool(AttributeType::Center, true);
        set.add_simple(AttributeType::FontSize, 12.0);
        set.add_enum(AttributeType::Shape, NodeShape::Box);

        assert_eq!(
            set.to_string(),
            r#"center=true, fontsize="12", shape="box""#
        );
    }

    #[test]
    fn test_default_enums_are_skipped_without_dangling_separator() {
        let mut set = AttributeSet::new();
        set.add_enum(AttributeType::FillColor, Color::Default);
        set.add_bool(AttributeType::Center, true);
        set.add_enum(AttributeType::Color, Color::Default);

        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.to_string(), "center=true");
    }

    #[test]
    fn test_only_defaults_is_empty() {
        let mut set = AttributeSet::new();
        set.add_enum(AttributeType::FillColor, Color::Default);

        assert_eq!(set.len(), 1);
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn test_no_deduplication() {
        let mut set = AttributeSet::new();
        set.add_simple(AttributeType::FontSize, 10.0);
        set.add_simple(AttributeType::FontSize, 14.0);

        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), r#"fontsize="10", fontsize="14""#);
        assert_eq!(
            set.find(AttributeType::FontSize).map(Attribute::to_string),
            Some(r#"fontsize="14""#.to_string())
        );
    }

    #[test]
    fn test_add_text_sanitizes() {
        let mut set = AttributeSet::new();
        set.add_text(AttributeType::Comment, "say \"hi\"\nbye");

        assert_eq!(set.to_string(), r#"comment="say \"hi\"\nbye""#);
    }

    #[test]
    fn test_find_mut_edits_list_in_place() {
        let mut set = AttributeSet::new();
        set.add_simple_list(AttributeType::RankSep, [1.0, 2.0]);

        let ranksep = set.find_mut(AttributeType::RankSep).unwrap();
        assert!(ranksep.add_value(3.0));

        assert_eq!(set.to_string(), r#"ranksep="1:2:3""#);
    }

    #[test]
    fn test_point_helpers() {
        let mut set = AttributeSet::new();
        set.add_point(AttributeType::Lp, Point::new(1.0, 2.0));
        set.add_add_double(AttributeType::Sep, 3.0);
        set.add_add_point(AttributeType::Esep, Point::new(4.0, 5.0));
        set.add_point_list(AttributeType::Vertices, [Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);

        assert_eq!(
            set.to_string(),
            r#"lp="1,2", sep="+3", esep="+4,5", vertices="0,0 1,1""#
        );
    }

    #[test]
    fn test_clear() {
        let mut set = AttributeSet::new();
        set.add_custom_attribute("a", "b");
        set.clear();

        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }
}
