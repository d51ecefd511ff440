use crate::{
    attribute::AttributeType,
    color::Color,
    geometry::Point,
    kinds::{Justification, LabelLoc, NodeStyle},
};

use super::MIN_FONT_SIZE;

scoped_attribute_set! {
    /// Attributes of a cluster, written in its `graph [...]` block.
    ClusterAttributeSet
}

impl ClusterAttributeSet {
    /// Sets the preferred area of the cluster (`patchwork` only).
    pub fn set_area(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Area, value);
        self
    }

    pub fn set_k(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::K, value);
        self
    }

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

    pub fn set_bg_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::BgColor, color);
        self
    }

    pub fn set_bg_color_list(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        self.add_enum_list(AttributeType::BgColor, colors);
        self
    }

    pub fn set_class(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Class, value);
        self
    }

    /// Sets the color of the cluster outline.
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

    /// Sets the fill color used with the `filled` style.
    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::FillColor, color);
        self
    }

    pub fn set_fill_color_list(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        self.add_enum_list(AttributeType::FillColor, colors);
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

    pub fn set_id(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Id, value);
        self
    }

    pub fn set_label_just(&mut self, value: Justification) -> &mut Self {
        self.add_enum(AttributeType::LabelJust, value);
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

    pub fn set_l_height(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::LHeight, value);
        self
    }

    pub fn set_lp(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Lp, value);
        self
    }

    pub fn set_l_width(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::LWidth, value);
        self
    }

    /// Sets the space between the cluster border and its nodes, in points.
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

    /// Sets the outline color, overriding `color`.
    pub fn set_pen_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::PenColor, color);
        self
    }

    pub fn set_pen_width(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::PenWidth, value.max(0.0));
        self
    }

    /// Sets the number of outlines drawn around the cluster.
    pub fn set_peripheries(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::Peripheries, value);
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_and_colors() {
        let mut attributes = ClusterAttributeSet::new();
        attributes
            .set_style([NodeStyle::Filled, NodeStyle::Rounded])
            .set_fill_color(Color::LightGrey)
            .set_pen_width(-2.0);

        assert_eq!(
            attributes.to_string(),
            r#"style="filled,rounded", fillcolor="lightgrey", penwidth="0""#
        );
    }

    #[test]
    fn test_custom_attribute_through_deref() {
        let mut attributes = ClusterAttributeSet::new();
        attributes.set_peripheries(2);
        attributes.add_custom_attribute("class", "group");

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.to_string(), r#"peripheries="2", class="group""#);
    }
}
