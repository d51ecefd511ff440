//! Attributes of edges, used both per edge and for a graph's `edge [...]`
//! defaults block.

use crate::{
    attribute::AttributeType,
    color::Color,
    geometry::Point,
    identifier::Identified,
    kinds::{ArrowType, CompassPoint, DirType, EdgeStyle},
};

use super::{MAX_SHOW_BOXES, MIN_FONT_SIZE};

scoped_attribute_set! {
    /// Attributes of an edge.
    ///
    /// The `lhead`, `ltail`, `samehead` and `sametail` setters take anything
    /// [`Identified`], so they are set from the cluster or node itself rather
    /// than from a hand-typed name.
    EdgeAttributeSet
}

impl EdgeAttributeSet {
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

    /// Sets the style of the arrowhead at the head node.
    pub fn set_arrow_head(&mut self, value: ArrowType) -> &mut Self {
        self.add_enum(AttributeType::ArrowHead, value);
        self
    }

    /// Scales the arrowheads; negative factors become zero.
    pub fn set_arrow_size(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::ArrowSize, value.max(0.0));
        self
    }

    /// Sets the style of the arrowhead at the tail node.
    pub fn set_arrow_tail(&mut self, value: ArrowType) -> &mut Self {
        self.add_enum(AttributeType::ArrowTail, value);
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

    /// Draws parallel edges, one per color.
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

    /// Includes or excludes the edge from node ranking.
    pub fn set_constraint(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Constraint, value);
        self
    }

    /// Connects the label to the edge with a line.
    pub fn set_decorate(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Decorate, value);
        self
    }

    pub fn set_dir(&mut self, value: DirType) -> &mut Self {
        self.add_enum(AttributeType::Dir, value);
        self
    }

    pub fn set_edge_url(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::EdgeUrl, value);
        self
    }

    pub fn set_edge_href(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::EdgeHref, value);
        self
    }

    pub fn set_edge_target(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::EdgeTarget, value);
        self
    }

    pub fn set_edge_tooltip(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::EdgeTooltip, value);
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::FillColor, color);
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

    pub fn set_head_lp(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::HeadLp, value);
        self
    }

    /// Clips the head of the edge to the boundary of the head node.
    pub fn set_head_clip(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::HeadClip, value);
        self
    }

    pub fn set_head_href(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::HeadHref, value);
        self
    }

    /// Places a label near the head of the edge.
    pub fn set_head_label(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::HeadLabel, value);
        self
    }

    /// Attaches the head of the edge to a compass point of the head node.
    pub fn set_head_port(&mut self, value: CompassPoint) -> &mut Self {
        self.add_enum(AttributeType::HeadPort, value);
        self
    }

    pub fn set_head_target(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::HeadTarget, value);
        self
    }

    pub fn set_head_tooltip(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::HeadTooltip, value);
        self
    }

    pub fn set_head_url(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::HeadUrl, value);
        self
    }

    pub fn set_id(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Id, value);
        self
    }

    pub fn set_label_angle(&mut self, degrees: f64) -> &mut Self {
        self.add_simple(AttributeType::LabelAngle, degrees);
        self
    }

    pub fn set_label_distance(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::LabelDistance, value);
        self
    }

    /// Allows the edge label to float away from the edge.
    pub fn set_label_float(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::LabelFloat, value);
        self
    }

    pub fn set_label_font_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::LabelFontColor, color);
        self
    }

    pub fn set_label_font_name(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LabelFontName, value);
        self
    }

    pub fn set_label_font_size(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::LabelFontSize, value.max(MIN_FONT_SIZE));
        self
    }

    pub fn set_label_href(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LabelHref, value);
        self
    }

    pub fn set_label_target(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LabelTarget, value);
        self
    }

    pub fn set_label_tooltip(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LabelTooltip, value);
        self
    }

    pub fn set_label_url(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LabelUrl, value);
        self
    }

    pub fn set_layer(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Layer, value);
        self
    }

    /// Sets the preferred edge length, in inches.
    pub fn set_len(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Len, value);
        self
    }

    /// Clips the edge at the boundary of the given cluster.
    ///
    /// Takes effect only when the graph has `compound` set.
    pub fn set_l_head(&mut self, cluster: &impl Identified) -> &mut Self {
        self.add_text(AttributeType::LHead, cluster.id());
        self
    }

    /// Starts the edge at the boundary of the given cluster.
    pub fn set_l_tail(&mut self, cluster: &impl Identified) -> &mut Self {
        self.add_text(AttributeType::LTail, cluster.id());
        self
    }

    pub fn set_lp(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Lp, value);
        self
    }

    /// Sets the minimum rank difference between head and tail.
    pub fn set_min_len(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::MinLen, value);
        self
    }

    pub fn set_no_justify(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::NoJustify, value);
        self
    }

    pub fn set_pen_width(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::PenWidth, value.max(0.0));
        self
    }

    /// Sets the control points of the edge spline, in points.
    pub fn set_pos(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        self.add_point_list(AttributeType::Pos, points);
        self
    }

    /// Merges the heads of all edges that share this group.
    pub fn set_same_head(&mut self, group: &impl Identified) -> &mut Self {
        self.add_text(AttributeType::SameHead, group.id());
        self
    }

    /// Merges the tails of all edges that share this group.
    pub fn set_same_tail(&mut self, group: &impl Identified) -> &mut Self {
        self.add_text(AttributeType::SameTail, group.id());
        self
    }

    pub fn set_show_boxes(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::ShowBoxes, value.min(MAX_SHOW_BOXES));
        self
    }

    pub fn set_style(&mut self, styles: impl IntoIterator<Item = EdgeStyle>) -> &mut Self {
        self.add_style_list(AttributeType::Style, styles);
        self
    }

    pub fn set_tail_lp(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::TailLp, value);
        self
    }

    pub fn set_tail_clip(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::TailClip, value);
        self
    }

    pub fn set_tail_href(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::TailHref, value);
        self
    }

    pub fn set_tail_label(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::TailLabel, value);
        self
    }

    pub fn set_tail_port(&mut self, value: CompassPoint) -> &mut Self {
        self.add_enum(AttributeType::TailPort, value);
        self
    }

    pub fn set_tail_target(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::TailTarget, value);
        self
    }

    pub fn set_tail_tooltip(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::TailTooltip, value);
        self
    }

    pub fn set_tail_url(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::TailUrl, value);
        self
    }

    /// Sets the weight of the edge; heavier edges are kept shorter and
    /// straighter.
    pub fn set_weight(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Weight, value);
        self
    }

    pub fn set_x_label(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::XLabel, value);
        self
    }

    pub fn set_xlp(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::XLp, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::IdRegistry;

    #[test]
    fn test_arrows_and_direction() {
        let mut attributes = EdgeAttributeSet::new();
        attributes
            .set_arrow_head(ArrowType::Vee)
            .set_arrow_tail(ArrowType::Default)
            .set_dir(DirType::Both)
            .set_arrow_size(-1.0);

        assert_eq!(
            attributes.to_string(),
            r#"arrowhead="vee", dir="both", arrowsize="0""#
        );
    }

    #[test]
    fn test_cluster_clipping_uses_identifiers() {
        let mut registry = IdRegistry::new();
        let head = registry.allocate_cluster_id();
        let tail = registry.validate_custom_cluster_id("backend");

        let mut attributes = EdgeAttributeSet::new();
        attributes.set_l_head(&head).set_l_tail(&tail);

        assert_eq!(
            attributes.to_string(),
            r#"lhead="cluster_0", ltail="cluster_backend""#
        );
    }

    #[test]
    fn test_ports_and_styles() {
        let mut attributes = EdgeAttributeSet::new();
        attributes
            .set_head_port(CompassPoint::North)
            .set_tail_port(CompassPoint::South)
            .set_style([EdgeStyle::Dashed, EdgeStyle::Bold]);

        assert_eq!(
            attributes.to_string(),
            r#"headport="n", tailport="s", style="dashed,bold""#
        );
    }

    #[test]
    fn test_spline_control_points() {
        let mut attributes = EdgeAttributeSet::new();
        attributes.set_pos([Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);

        assert_eq!(attributes.to_string(), r#"pos="0,0 5,5""#);
    }
}
