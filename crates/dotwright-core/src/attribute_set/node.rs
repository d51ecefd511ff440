//! Attributes of nodes, used both per node and for a graph's `node [...]`
//! defaults block.

use crate::{
    attribute::AttributeType,
    color::Color,
    geometry::Point,
    kinds::{ImageScaleType, LabelLoc, NodeShape, NodeStyle, Ordering},
};

use super::{MAX_SHOW_BOXES, MIN_DISTORTION, MIN_FONT_SIZE, MIN_HEIGHT, MIN_SIDES, MIN_WIDTH};

scoped_attribute_set! {
    /// Attributes of a node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotwright_core::attribute_set::NodeAttributeSet;
    /// use dotwright_core::color::Color;
    /// use dotwright_core::kinds::{NodeShape, NodeStyle};
    ///
    /// let mut attributes = NodeAttributeSet::new();
    /// attributes
    ///     .set_shape(NodeShape::Box)
    ///     .set_style([NodeStyle::Filled])
    ///     .set_fill_color(Color::Default);
    ///
    /// assert_eq!(attributes.to_string(), r#"shape="box", style="filled""#);
    /// ```
    NodeAttributeSet
}

impl NodeAttributeSet {
    pub fn set_url(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Url, value);
        self
    }

    pub fn set_href(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Href, value);
        self
    }

    pub fn set_target(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Target, value);
        self
    }

    pub fn set_tooltip(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Tooltip, value);
        self
    }

    pub fn set_area(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Area, value);
        self
    }

    pub fn set_class(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Class, value);
        self
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::Color, color);
        self
    }

    pub fn set_color_list(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        self.add_enum_list(AttributeType::Color, colors);
        self
    }

    pub fn set_color_scheme(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::ColorScheme, value);
        self
    }

    pub fn set_comment(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Comment, value);
        self
    }

    /// Sets the distortion factor of `polygon` shapes, never below
    /// [`MIN_DISTORTION`].
    pub fn set_distortion(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Distortion, value.max(MIN_DISTORTION));
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::FillColor, color);
        self
    }

    /// Fills the node with a gradient through the given colors.
    pub fn set_fill_color_list(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        self.add_enum_list(AttributeType::FillColor, colors);
        self
    }

    /// Keeps the node at its `width` and `height` regardless of its label.
    pub fn set_fixed_size(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::FixedSize, value);
        self
    }

    pub fn set_font_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::FontColor, color);
        self
    }

    pub fn set_font_name(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::FontName, value);
        self
    }

    pub fn set_font_size(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::FontSize, value.max(MIN_FONT_SIZE));
        self
    }

    pub fn set_gradient_angle(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::GradientAngle, value);
        self
    }

    /// Puts the node in a group; edges within a group are kept straight.
    pub fn set_group(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Group, value);
        self
    }

    /// Sets the node height in inches, never below [`MIN_HEIGHT`].
    pub fn set_height(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Height, value.max(MIN_HEIGHT));
        self
    }

    pub fn set_id(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Id, value);
        self
    }

    /// Displays the given image file inside the node.
    pub fn set_image(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Image, value);
        self
    }

    pub fn set_image_pos(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::ImagePos, value);
        self
    }

    pub fn set_image_scale(&mut self, value: ImageScaleType) -> &mut Self {
        self.add_enum(AttributeType::ImageScale, value);
        self
    }

    pub fn set_label_loc(&mut self, value: LabelLoc) -> &mut Self {
        self.add_enum(AttributeType::LabelLoc, value);
        self
    }

    pub fn set_layer(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Layer, value);
        self
    }

    /// Sets the space around the label on both axes, in inches.
    pub fn set_margin(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Margin, value);
        self
    }

    pub fn set_margin_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Margin, value);
        self
    }

    pub fn set_no_justify(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::NoJustify, value);
        self
    }

    pub fn set_ordering(&mut self, value: Ordering) -> &mut Self {
        self.add_enum(AttributeType::Ordering, value);
        self
    }

    /// Rotates polygon shapes by the given angle, in degrees.
    pub fn set_orientation(&mut self, degrees: f64) -> &mut Self {
        self.add_simple(AttributeType::Orientation, degrees);
        self
    }

    pub fn set_pen_width(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::PenWidth, value.max(0.0));
        self
    }

    pub fn set_peripheries(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::Peripheries, value);
        self
    }

    /// Keeps the node at its input position.
    pub fn set_pin(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Pin, value);
        self
    }

    /// Sets the position of the node, in points.
    pub fn set_pos(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Pos, value);
        self
    }

    pub fn set_rects(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Rects, value);
        self
    }

    /// Forces the polygon to be regular.
    pub fn set_regular(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Regular, value);
        self
    }

    /// Marks the node as the center of a `twopi` or `circo` layout.
    pub fn set_root(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Root, value);
        self
    }

    pub fn set_sample_points(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::SamplePoints, value);
        self
    }

    pub fn set_shape(&mut self, value: NodeShape) -> &mut Self {
        self.add_enum(AttributeType::Shape, value);
        self
    }

    pub fn set_shape_file(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::ShapeFile, value);
        self
    }

    pub fn set_show_boxes(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::ShowBoxes, value.min(MAX_SHOW_BOXES));
        self
    }

    /// Sets the number of sides of a `polygon` shape, never below
    /// [`MIN_SIDES`].
    pub fn set_sides(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::Sides, value.max(MIN_SIDES));
        self
    }

    /// Sets the skew factor of `polygon` shapes, never below
    /// [`MIN_DISTORTION`].
    pub fn set_skew(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Skew, value.max(MIN_DISTORTION));
        self
    }

    pub fn set_sort_v(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::SortV, value);
        self
    }

    pub fn set_style(&mut self, styles: impl IntoIterator<Item = NodeStyle>) -> &mut Self {
        self.add_style_list(AttributeType::Style, styles);
        self
    }

    /// Sets the polygon vertices of the node, in points.
    pub fn set_vertices(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        self.add_point_list(AttributeType::Vertices, points);
        self
    }

    /// Sets the node width in inches, never below [`MIN_WIDTH`].
    pub fn set_width(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Width, value.max(MIN_WIDTH));
        self
    }

    /// Sets an external label placed near the node.
    pub fn set_x_label(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::XLabel, value);
        self
    }

    pub fn set_xlp(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::XLp, value);
        self
    }

    /// Sets the z coordinate for 3D output.
    pub fn set_z(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Z, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fill_color_is_omitted() {
        let mut attributes = NodeAttributeSet::new();
        attributes.set_fill_color(Color::Default);

        assert!(attributes.is_empty());
        assert_eq!(attributes.to_string(), "");
    }

    #[test]
    fn test_polygon_clamps() {
        let mut attributes = NodeAttributeSet::new();
        attributes
            .set_sides(1)
            .set_skew(-250.0)
            .set_distortion(0.5)
            .set_width(0.0)
            .set_height(-1.0);

        assert_eq!(
            attributes.to_string(),
            r#"sides="3", skew="-100", distortion="0.5", width="0.01", height="0.02""#
        );
    }

    #[test]
    fn test_vertices_and_position() {
        let mut attributes = NodeAttributeSet::new();
        attributes
            .set_pos(Point::new(10.0, 20.0))
            .set_vertices([Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 1.5)]);

        assert_eq!(
            attributes.to_string(),
            r#"pos="10,20", vertices="0,0 2,0 1,1.5""#
        );
    }

    #[test]
    fn test_style_list_can_be_edited() {
        let mut attributes = NodeAttributeSet::new();
        attributes.set_style([NodeStyle::Filled, NodeStyle::Dashed]);

        let style = attributes.find_mut(AttributeType::Style).unwrap();
        assert!(style.remove_value(NodeStyle::Dashed));
        assert!(style.add_value(NodeStyle::Bold));

        assert_eq!(attributes.to_string(), r#"style="filled,bold""#);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    use crate::attribute::{AttributeValue, Scalar};

    // =========================================================================
    // Helpers
    // =========================================================================

    fn stored_float(attributes: &NodeAttributeSet, kind: AttributeType) -> f64 {
        match attributes.find(kind).map(|attribute| attribute.value()) {
            Some(AttributeValue::Scalar(Scalar::Float(value))) => *value,
            other => panic!("expected a float for {kind}, got {other:?}"),
        }
    }

    fn stored_int(attributes: &NodeAttributeSet, kind: AttributeType) -> i64 {
        match attributes.find(kind).map(|attribute| attribute.value()) {
            Some(AttributeValue::Scalar(Scalar::Int(value))) => *value,
            other => panic!("expected an integer for {kind}, got {other:?}"),
        }
    }

    // =========================================================================
    // Property Test Functions
    // =========================================================================

    fn check_sides_lower_bound(sides: u32) -> Result<(), TestCaseError> {
        let mut attributes = NodeAttributeSet::new();
        attributes.set_sides(sides);

        let stored = stored_int(&attributes, AttributeType::Sides);
        prop_assert!(stored >= i64::from(MIN_SIDES));
        if sides >= MIN_SIDES {
            prop_assert_eq!(stored, i64::from(sides));
        }
        Ok(())
    }

    fn check_size_lower_bounds(width: f64, height: f64) -> Result<(), TestCaseError> {
        let mut attributes = NodeAttributeSet::new();
        attributes.set_width(width).set_height(height);

        prop_assert!(stored_float(&attributes, AttributeType::Width) >= MIN_WIDTH);
        prop_assert!(stored_float(&attributes, AttributeType::Height) >= MIN_HEIGHT);
        Ok(())
    }

    fn check_show_boxes_upper_bound(level: u32) -> Result<(), TestCaseError> {
        let mut attributes = NodeAttributeSet::new();
        attributes.set_show_boxes(level);

        prop_assert!(stored_int(&attributes, AttributeType::ShowBoxes) <= i64::from(MAX_SHOW_BOXES));
        Ok(())
    }

    // =========================================================================
    // Proptest Wrappers
    // =========================================================================

    proptest! {
        #[test]
        fn sides_lower_bound(sides in any::<u32>()) {
            check_sides_lower_bound(sides)?;
        }

        #[test]
        fn size_lower_bounds(width in -10.0..10.0f64, height in -10.0..10.0f64) {
            check_size_lower_bounds(width, height)?;
        }

        #[test]
        fn show_boxes_upper_bound(level in any::<u32>()) {
            check_show_boxes_upper_bound(level)?;
        }
    }
}
