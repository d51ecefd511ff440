//! Attributes of the root graph.

use crate::{
    attribute::AttributeType,
    color::Color,
    geometry::Point,
    identifier::Identified,
    kinds::{
        Charset, ClusterMode, DirEdgeConstraints, Justification, LabelLoc, Mode, Model, NodeStyle,
        Ordering, OutputMode, PackMode, PageDir, QuadType, RankDir, Ratio, SmoothType, SplineType,
        StartType,
    },
};

use super::{MAX_DIMENSIONS, MAX_LABEL_SCHEME, MAX_SHOW_BOXES, MIN_FONT_SIZE};

scoped_attribute_set! {
    /// Attributes attached to the root graph, written in its `graph [...]`
    /// block.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotwright_core::attribute_set::GraphAttributeSet;
    /// use dotwright_core::kinds::RankDir;
    ///
    /// let mut attributes = GraphAttributeSet::new();
    /// attributes.set_rank_dir(RankDir::LeftToRight).set_dim(15);
    /// assert_eq!(attributes.to_string(), r#"rankdir="LR", dim="10""#);
    /// ```
    GraphAttributeSet
}

impl GraphAttributeSet {
    /// Sets the factor damping force motions (neato only).
    pub fn set_damping(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Damping, value);
        self
    }

    /// Sets the spring constant used in virtual physical models.
    pub fn set_k(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::K, value);
        self
    }

    /// Sets the hyperlink attached to the whole drawing.
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

    /// Sets the canvas background color.
    pub fn set_bg_color(&mut self, color: Color) -> &mut Self {
        self.add_enum(AttributeType::BgColor, color);
        self
    }

    /// Sets a background gradient through the given colors.
    pub fn set_bg_color_list(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        self.add_enum_list(AttributeType::BgColor, colors);
        self
    }

    /// Centers the drawing on the page.
    pub fn set_center(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Center, value);
        self
    }

    pub fn set_charset(&mut self, value: Charset) -> &mut Self {
        self.add_enum(AttributeType::Charset, value);
        self
    }

    pub fn set_class(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Class, value);
        self
    }

    /// Sets how clusters are treated by `dot`.
    pub fn set_cluster_rank(&mut self, value: ClusterMode) -> &mut Self {
        self.add_enum(AttributeType::ClusterRank, value);
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

    /// Allows edges between clusters (see the edge `lhead`/`ltail` setters).
    pub fn set_compound(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Compound, value);
        self
    }

    /// Merges multiedges into a single edge.
    pub fn set_concentrate(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Concentrate, value);
        self
    }

    pub fn set_default_dist(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::DefaultDist, value);
        self
    }

    /// Sets the number of dimensions used for the layout.
    ///
    /// Values above [`MAX_DIMENSIONS`] are clamped.
    pub fn set_dim(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::Dim, value.min(MAX_DIMENSIONS));
        self
    }

    /// Sets the number of dimensions used for rendering.
    ///
    /// Values above [`MAX_DIMENSIONS`] are clamped.
    pub fn set_dimen(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::Dimen, value.min(MAX_DIMENSIONS));
        self
    }

    pub fn set_dir_edge_constraints(&mut self, value: DirEdgeConstraints) -> &mut Self {
        self.add_enum(AttributeType::DirEdgeConstraints, value);
        self
    }

    /// Sets the expected number of pixels per inch on a display device.
    pub fn set_dpi(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Dpi, value);
        self
    }

    /// Sets the terminating condition of the neato solver.
    pub fn set_epsilon(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Epsilon, value);
        self
    }

    /// Sets the margin used around polygons for spline edge routing.
    pub fn set_esep(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Esep, value);
        self
    }

    pub fn set_esep_additive(&mut self, value: f64) -> &mut Self {
        self.add_add_double(AttributeType::Esep, value);
        self
    }

    pub fn set_esep_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Esep, value);
        self
    }

    pub fn set_esep_additive_point(&mut self, value: Point) -> &mut Self {
        self.add_add_point(AttributeType::Esep, value);
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

    /// Controls how font names are represented in SVG output.
    pub fn set_font_names(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::FontNames, value);
        self
    }

    pub fn set_font_path(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::FontPath, value);
        self
    }

    /// Sets the font size in points, never below [`MIN_FONT_SIZE`].
    pub fn set_font_size(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::FontSize, value.max(MIN_FONT_SIZE));
        self
    }

    pub fn set_force_labels(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::ForceLabels, value);
        self
    }

    /// Sets the angle of a gradient fill, in degrees.
    pub fn set_gradient_angle(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::GradientAngle, value);
        self
    }

    pub fn set_id(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Id, value);
        self
    }

    /// Sets the directories searched for image files.
    pub fn set_image_path(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::ImagePath, value);
        self
    }

    pub fn set_input_scale(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::InputScale, value);
        self
    }

    /// Selects how `sfdp` treats node labels (0 to [`MAX_LABEL_SCHEME`]).
    pub fn set_label_scheme(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::LabelScheme, value.min(MAX_LABEL_SCHEME));
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

    /// Renders the drawing in landscape mode.
    pub fn set_landscape(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Landscape, value);
        self
    }

    pub fn set_layers(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Layers, value);
        self
    }

    pub fn set_layer_list_sep(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LayerListSep, value);
        self
    }

    pub fn set_layer_select(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LayerSelect, value);
        self
    }

    pub fn set_layer_sep(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::LayerSep, value);
        self
    }

    /// Names the layout engine to use, e.g. `"neato"`.
    pub fn set_layout(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Layout, value);
        self
    }

    pub fn set_levels(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::Levels, value);
        self
    }

    pub fn set_levels_gap(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::LevelsGap, value);
        self
    }

    pub fn set_l_height(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::LHeight, value);
        self
    }

    /// Sets the position of the graph label.
    pub fn set_lp(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Lp, value);
        self
    }

    pub fn set_l_width(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::LWidth, value);
        self
    }

    /// Sets the canvas margin on both axes, in inches.
    pub fn set_margin(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Margin, value);
        self
    }

    /// Sets the horizontal and vertical canvas margins, in inches.
    pub fn set_margin_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Margin, value);
        self
    }

    pub fn set_max_iter(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::MaxIter, value);
        self
    }

    /// Scales the number of crossing minimization iterations.
    pub fn set_mc_limit(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::McLimit, value);
        self
    }

    pub fn set_min_dist(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::MinDist, value);
        self
    }

    pub fn set_mode(&mut self, value: Mode) -> &mut Self {
        self.add_enum(AttributeType::Mode, value);
        self
    }

    pub fn set_model(&mut self, value: Model) -> &mut Self {
        self.add_enum(AttributeType::Model, value);
        self
    }

    pub fn set_mosek(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Mosek, value);
        self
    }

    /// Uses the single global ranking that ignores clusters.
    pub fn set_new_rank(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::NewRank, value);
        self
    }

    /// Sets the minimum space between adjacent nodes in the same rank, in
    /// inches.
    pub fn set_node_sep(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::NodeSep, value);
        self
    }

    pub fn set_no_justify(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::NoJustify, value);
        self
    }

    pub fn set_normalize(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Normalize, value);
        self
    }

    /// Normalizes coordinates and rotates the first edge to the given angle.
    pub fn set_normalize_angle(&mut self, degrees: f64) -> &mut Self {
        self.add_simple(AttributeType::Normalize, degrees);
        self
    }

    pub fn set_no_translate(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::NoTranslate, value);
        self
    }

    pub fn set_ns_limit(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::NsLimit, value);
        self
    }

    pub fn set_ns_limit1(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::NsLimit1, value);
        self
    }

    pub fn set_ordering(&mut self, value: Ordering) -> &mut Self {
        self.add_enum(AttributeType::Ordering, value);
        self
    }

    /// Sets the page orientation, e.g. `"landscape"`.
    pub fn set_orientation(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Orientation, value);
        self
    }

    pub fn set_output_order(&mut self, value: OutputMode) -> &mut Self {
        self.add_enum(AttributeType::OutputOrder, value);
        self
    }

    /// Enables or disables node overlap removal.
    pub fn set_overlap(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Overlap, value);
        self
    }

    /// Selects a named overlap removal technique, e.g. `"prism"` or `"scale"`.
    pub fn set_overlap_mode(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Overlap, value);
        self
    }

    pub fn set_overlap_scaling(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::OverlapScaling, value);
        self
    }

    pub fn set_overlap_shrink(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::OverlapShrink, value);
        self
    }

    /// Lays out disconnected components separately and packs them.
    pub fn set_pack(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Pack, value);
        self
    }

    /// Packs disconnected components with the given margin, in points.
    pub fn set_pack_margin(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::Pack, value);
        self
    }

    pub fn set_pack_mode(&mut self, value: PackMode) -> &mut Self {
        self.add_enum(AttributeType::PackMode, value);
        self
    }

    /// Sets the padding around the drawing on both axes, in inches.
    pub fn set_pad(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Pad, value);
        self
    }

    pub fn set_pad_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Pad, value);
        self
    }

    /// Sets a square page size for paginated output, in inches.
    pub fn set_page(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Page, value);
        self
    }

    pub fn set_page_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Page, value);
        self
    }

    pub fn set_page_dir(&mut self, value: PageDir) -> &mut Self {
        self.add_enum(AttributeType::PageDir, value);
        self
    }

    pub fn set_quad_tree(&mut self, value: QuadType) -> &mut Self {
        self.add_enum(AttributeType::QuadTree, value);
        self
    }

    pub fn set_quantum(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Quantum, value);
        self
    }

    /// Sets the direction in which ranks are laid out.
    pub fn set_rank_dir(&mut self, value: RankDir) -> &mut Self {
        self.add_enum(AttributeType::RankDir, value);
        self
    }

    /// Sets the separation between ranks, in inches.
    pub fn set_rank_sep(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::RankSep, value);
        self
    }

    /// Sets per-rank separations, written colon-joined.
    pub fn set_rank_sep_list(&mut self, values: impl IntoIterator<Item = f64>) -> &mut Self {
        self.add_simple_list(AttributeType::RankSep, values);
        self
    }

    pub fn set_ratio(&mut self, value: Ratio) -> &mut Self {
        self.add_enum(AttributeType::Ratio, value);
        self
    }

    /// Sets the desired aspect ratio of the drawing.
    pub fn set_ratio_value(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Ratio, value);
        self
    }

    pub fn set_remin_cross(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::ReminCross, value);
        self
    }

    pub fn set_repulsive_force(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::RepulsiveForce, value);
        self
    }

    pub fn set_resolution(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Resolution, value);
        self
    }

    /// Uses the given node as the center of a `twopi` or `circo` layout.
    pub fn set_root(&mut self, node: &impl Identified) -> &mut Self {
        self.add_text(AttributeType::Root, node.id());
        self
    }

    pub fn set_rotate(&mut self, degrees: i32) -> &mut Self {
        self.add_simple(AttributeType::Rotate, degrees);
        self
    }

    pub fn set_rotation(&mut self, degrees: f64) -> &mut Self {
        self.add_simple(AttributeType::Rotation, degrees);
        self
    }

    pub fn set_scale(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Scale, value);
        self
    }

    pub fn set_scale_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Scale, value);
        self
    }

    pub fn set_search_size(&mut self, value: i32) -> &mut Self {
        self.add_simple(AttributeType::SearchSize, value);
        self
    }

    /// Sets the margin left around nodes when removing overlap.
    pub fn set_sep(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Sep, value);
        self
    }

    /// Like [`GraphAttributeSet::set_sep`], but adds to the node size
    /// instead of scaling it.
    pub fn set_sep_additive(&mut self, value: f64) -> &mut Self {
        self.add_add_double(AttributeType::Sep, value);
        self
    }

    pub fn set_sep_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Sep, value);
        self
    }

    pub fn set_sep_additive_point(&mut self, value: Point) -> &mut Self {
        self.add_add_point(AttributeType::Sep, value);
        self
    }

    /// Sets the PostScript debug level, clamped to [`MAX_SHOW_BOXES`].
    pub fn set_show_boxes(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::ShowBoxes, value.min(MAX_SHOW_BOXES));
        self
    }

    /// Sets the maximum width and height of the drawing, in inches.
    pub fn set_size(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::Size, value);
        self
    }

    pub fn set_size_point(&mut self, value: Point) -> &mut Self {
        self.add_point(AttributeType::Size, value);
        self
    }

    pub fn set_smoothing(&mut self, value: SmoothType) -> &mut Self {
        self.add_enum(AttributeType::Smoothing, value);
        self
    }

    pub fn set_sort_v(&mut self, value: u32) -> &mut Self {
        self.add_simple(AttributeType::SortV, value);
        self
    }

    /// Sets how edges are drawn.
    pub fn set_splines(&mut self, value: SplineType) -> &mut Self {
        self.add_enum(AttributeType::Splines, value);
        self
    }

    /// Turns spline edges on or off.
    pub fn set_splines_enabled(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::Splines, value);
        self
    }

    pub fn set_start(&mut self, value: StartType) -> &mut Self {
        self.add_enum(AttributeType::Start, value);
        self
    }

    /// Seeds the random initial placement.
    pub fn set_start_seed(&mut self, seed: i64) -> &mut Self {
        self.add_simple(AttributeType::Start, seed);
        self
    }

    pub fn set_style(&mut self, styles: impl IntoIterator<Item = NodeStyle>) -> &mut Self {
        self.add_style_list(AttributeType::Style, styles);
        self
    }

    pub fn set_style_sheet(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::StyleSheet, value);
        self
    }

    pub fn set_true_color(&mut self, value: bool) -> &mut Self {
        self.add_bool(AttributeType::TrueColor, value);
        self
    }

    /// Sets the clipping window, as `"W,H,Z,x,y"` or `"W,H,Z,node"`.
    pub fn set_viewport(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Viewport, value);
        self
    }

    pub fn set_voro_margin(&mut self, value: f64) -> &mut Self {
        self.add_simple(AttributeType::VoroMargin, value);
        self
    }

    pub fn set_xdot_version(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::XdotVersion, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_clamps() {
        let mut attributes = GraphAttributeSet::new();
        attributes.set_dim(15).set_dimen(3);

        assert_eq!(attributes.to_string(), r#"dim="10", dimen="3""#);
    }

    #[test]
    fn test_bounded_levels_clamp() {
        let mut attributes = GraphAttributeSet::new();
        attributes
            .set_label_scheme(7)
            .set_show_boxes(9)
            .set_font_size(0.0);

        assert_eq!(
            attributes.to_string(),
            r#"label_scheme="3", showboxes="2", fontsize="1""#
        );
    }

    #[test]
    fn test_overloaded_setters() {
        let mut attributes = GraphAttributeSet::new();
        attributes
            .set_margin(0.5)
            .set_margin_point(Point::new(1.0, 2.0))
            .set_rank_sep_list([1.0, 2.0, 3.0])
            .set_sep_additive_point(Point::new(4.0, 4.0));

        assert_eq!(
            attributes.to_string(),
            r#"margin="0.5", margin="1,2", ranksep="1:2:3", sep="+4,4""#
        );
    }

    #[test]
    fn test_bg_color_list() {
        let mut attributes = GraphAttributeSet::new();
        attributes.set_bg_color_list([Color::Red, Color::Default, Color::Rgb(0, 0, 255)]);

        assert_eq!(attributes.to_string(), r##"bgcolor="red:#0000ff""##);
    }

    #[test]
    fn test_default_enum_setter_renders_nothing() {
        let mut attributes = GraphAttributeSet::new();
        attributes.set_rank_dir(RankDir::Default);

        assert!(attributes.is_empty());
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn test_text_setters_sanitize() {
        let mut attributes = GraphAttributeSet::new();
        attributes.set_comment("line one\nline \"two\"");

        assert_eq!(
            attributes.to_string(),
            r#"comment="line one\nline \"two\"""#
        );
    }
}
