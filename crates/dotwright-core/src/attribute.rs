//! Typed attribute values and their DOT rendering.
//!
//! An [`Attribute`] pairs a name with an [`AttributeValue`]. Names come from
//! the closed [`AttributeType`] catalog or are free-form custom names. Values
//! are a sum type over every value kind DOT distinguishes, and each kind knows
//! how to render itself:
//!
//! | Kind                        | Rendering             | Omitted when      |
//! |-----------------------------|-----------------------|-------------------|
//! | [`AttributeValue::Bool`]    | `name=true`           | never             |
//! | [`AttributeValue::Enum`]    | `name="value"`        | value is default  |
//! | [`AttributeValue::EnumList`]| `name="a:b"`          | nothing to write  |
//! | [`AttributeValue::StyleList`]  | `name="a,b"`       | nothing to write  |
//! | [`AttributeValue::Scalar`]  | `name="value"`        | never             |
//! | [`AttributeValue::ScalarList`] | `name="1:2:3"`     | list is empty     |
//! | [`AttributeValue::AddScalar`]  | `name="+v"`        | never             |
//! | [`AttributeValue::Point`]   | `name="x,y"`          | never             |
//! | [`AttributeValue::AddPoint`]| `name="+x,y"`         | never             |
//! | [`AttributeValue::PointList`]  | `name="x,y x,y"`   | list is empty     |
//!
//! Attributes only format; they never validate. Clamping of out-of-range input
//! happens in the setters of [`crate::attribute_set`].

use std::fmt::{self, Display, Write};

use crate::{
    color::Color,
    geometry::Point,
    kinds::{
        ArrowType, Charset, ClusterMode, CompassPoint, DirEdgeConstraints, DirType, EdgeStyle,
        ImageScaleType, Justification, LabelLoc, Mode, Model, NodeShape, NodeStyle, Ordering,
        OutputMode, PackMode, PageDir, QuadType, RankDir, RankType, Ratio, SmoothType,
        SplineType, StartType,
    },
};

// =============================================================================
// Attribute names
// =============================================================================

macro_rules! attribute_types {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// The closed catalog of attribute names understood by Graphviz.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AttributeType {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl AttributeType {
            /// Returns the attribute name as written in DOT.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

attribute_types! {
    Damping => "Damping",
    K => "K",
    Url => "URL",
    Area => "area",
    ArrowHead => "arrowhead",
    ArrowSize => "arrowsize",
    ArrowTail => "arrowtail",
    Aspect => "aspect",
    Bb => "bb",
    BgColor => "bgcolor",
    Center => "center",
    Charset => "charset",
    Class => "class",
    ClusterRank => "clusterrank",
    Color => "color",
    ColorScheme => "colorscheme",
    Comment => "comment",
    Compound => "compound",
    Concentrate => "concentrate",
    Constraint => "constraint",
    Decorate => "decorate",
    DefaultDist => "defaultdist",
    Dim => "dim",
    Dimen => "dimen",
    Dir => "dir",
    DirEdgeConstraints => "diredgeconstraints",
    Distortion => "distortion",
    Dpi => "dpi",
    EdgeUrl => "edgeURL",
    EdgeHref => "edgehref",
    EdgeTarget => "edgetarget",
    EdgeTooltip => "edgetooltip",
    Epsilon => "epsilon",
    Esep => "esep",
    FillColor => "fillcolor",
    FixedSize => "fixedsize",
    FontColor => "fontcolor",
    FontName => "fontname",
    FontNames => "fontnames",
    FontPath => "fontpath",
    FontSize => "fontsize",
    ForceLabels => "forcelabels",
    GradientAngle => "gradientangle",
    Group => "group",
    HeadUrl => "headURL",
    HeadLp => "head_lp",
    HeadClip => "headclip",
    HeadHref => "headhref",
    HeadLabel => "headlabel",
    HeadPort => "headport",
    HeadTarget => "headtarget",
    HeadTooltip => "headtooltip",
    Height => "height",
    Href => "href",
    Id => "id",
    Image => "image",
    ImagePath => "imagepath",
    ImagePos => "imagepos",
    ImageScale => "imagescale",
    InputScale => "inputscale",
    Label => "label",
    LabelUrl => "labelURL",
    LabelScheme => "label_scheme",
    LabelAngle => "labelangle",
    LabelDistance => "labeldistance",
    LabelFloat => "labelfloat",
    LabelFontColor => "labelfontcolor",
    LabelFontName => "labelfontname",
    LabelFontSize => "labelfontsize",
    LabelHref => "labelhref",
    LabelJust => "labeljust",
    LabelLoc => "labelloc",
    LabelTarget => "labeltarget",
    LabelTooltip => "labeltooltip",
    Landscape => "landscape",
    Layer => "layer",
    LayerListSep => "layerlistsep",
    Layers => "layers",
    LayerSelect => "layerselect",
    LayerSep => "layersep",
    Layout => "layout",
    Len => "len",
    Levels => "levels",
    LevelsGap => "levelsgap",
    LHead => "lhead",
    LHeight => "lheight",
    Lp => "lp",
    LTail => "ltail",
    LWidth => "lwidth",
    Margin => "margin",
    MaxIter => "maxiter",
    McLimit => "mclimit",
    MinDist => "mindist",
    MinLen => "minlen",
    Mode => "mode",
    Model => "model",
    Mosek => "mosek",
    NewRank => "newrank",
    NodeSep => "nodesep",
    NoJustify => "nojustify",
    Normalize => "normalize",
    NoTranslate => "notranslate",
    NsLimit => "nslimit",
    NsLimit1 => "nslimit1",
    Ordering => "ordering",
    Orientation => "orientation",
    OutputOrder => "outputorder",
    Overlap => "overlap",
    OverlapScaling => "overlap_scaling",
    OverlapShrink => "overlap_shrink",
    Pack => "pack",
    PackMode => "packmode",
    Pad => "pad",
    Page => "page",
    PageDir => "pagedir",
    PenColor => "pencolor",
    PenWidth => "penwidth",
    Peripheries => "peripheries",
    Pin => "pin",
    Pos => "pos",
    QuadTree => "quadtree",
    Quantum => "quantum",
    Rank => "rank",
    RankDir => "rankdir",
    RankSep => "ranksep",
    Ratio => "ratio",
    Rects => "rects",
    Regular => "regular",
    ReminCross => "remincross",
    RepulsiveForce => "repulsiveforce",
    Resolution => "resolution",
    Root => "root",
    Rotate => "rotate",
    Rotation => "rotation",
    SameHead => "samehead",
    SameTail => "sametail",
    SamplePoints => "samplepoints",
    Scale => "scale",
    SearchSize => "searchsize",
    Sep => "sep",
    Shape => "shape",
    ShapeFile => "shapefile",
    ShowBoxes => "showboxes",
    Sides => "sides",
    Size => "size",
    Skew => "skew",
    Smoothing => "smoothing",
    SortV => "sortv",
    Splines => "splines",
    Start => "start",
    Style => "style",
    StyleSheet => "stylesheet",
    TailUrl => "tailURL",
    TailLp => "tail_lp",
    TailClip => "tailclip",
    TailHref => "tailhref",
    TailLabel => "taillabel",
    TailPort => "tailport",
    TailTarget => "tailtarget",
    TailTooltip => "tailtooltip",
    Target => "target",
    Tooltip => "tooltip",
    TrueColor => "truecolor",
    Vertices => "vertices",
    Viewport => "viewport",
    VoroMargin => "voro_margin",
    Weight => "weight",
    Width => "width",
    XdotVersion => "xdotversion",
    XLabel => "xlabel",
    XLp => "xlp",
    Z => "z",
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name of an attribute: a catalog entry or a custom name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Known(AttributeType),
    Custom(String),
}

impl AttributeName {
    /// Returns the name as written in DOT.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::Custom(name) => name,
        }
    }
}

impl From<AttributeType> for AttributeName {
    fn from(kind: AttributeType) -> Self {
        Self::Known(kind)
    }
}

impl Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Values
// =============================================================================

/// A number or a piece of text.
///
/// Text is written verbatim between quotes; setters sanitize it before it gets
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

macro_rules! enum_values {
    ($($kind:ident),+ $(,)?) => {
        /// A value of any closed enumeration, including [`Color`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EnumValue {
            $($kind($kind),)+
        }

        impl EnumValue {
            /// Returns `true` if the wrapped value is its enumeration's default.
            pub fn is_default(&self) -> bool {
                match self {
                    $(Self::$kind(value) => value.is_default(),)+
                }
            }
        }

        impl Display for EnumValue {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$kind(value) => Display::fmt(value, f),)+
                }
            }
        }

        $(
            impl From<$kind> for EnumValue {
                fn from(value: $kind) -> Self {
                    Self::$kind(value)
                }
            }

            impl From<$kind> for ListItem {
                fn from(value: $kind) -> Self {
                    Self::Enum(EnumValue::$kind(value))
                }
            }
        )+
    };
}

enum_values! {
    ArrowType,
    Charset,
    ClusterMode,
    Color,
    CompassPoint,
    DirEdgeConstraints,
    DirType,
    EdgeStyle,
    ImageScaleType,
    Justification,
    LabelLoc,
    Mode,
    Model,
    NodeShape,
    NodeStyle,
    Ordering,
    OutputMode,
    PackMode,
    PageDir,
    QuadType,
    RankDir,
    RankType,
    Ratio,
    SmoothType,
    SplineType,
    StartType,
}

/// One entry of a list-valued attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Enum(EnumValue),
    Scalar(Scalar),
    Point(Point),
}

impl From<EnumValue> for ListItem {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<Scalar> for ListItem {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<f64> for ListItem {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<Point> for ListItem {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

/// The value held by an [`Attribute`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Enum(EnumValue),
    EnumList(Vec<EnumValue>),
    /// Style keywords, written comma separated as Graphviz expects.
    StyleList(Vec<EnumValue>),
    Scalar(Scalar),
    ScalarList(Vec<Scalar>),
    /// A number relative to the renderer's default, written as `+v`.
    AddScalar(f64),
    Point(Point),
    /// A point relative to the renderer's default, written as `+x,y`.
    AddPoint(Point),
    PointList(Vec<Point>),
}

impl AttributeValue {
    /// Returns `true` if rendering this value produces any output.
    pub fn is_renderable(&self) -> bool {
        match self {
            Self::Enum(value) => !value.is_default(),
            Self::EnumList(values) | Self::StyleList(values) => {
                values.iter().any(|value| !value.is_default())
            }
            Self::ScalarList(values) => !values.is_empty(),
            Self::PointList(values) => !values.is_empty(),
            Self::Bool(_)
            | Self::Scalar(_)
            | Self::AddScalar(_)
            | Self::Point(_)
            | Self::AddPoint(_) => true,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<EnumValue> for AttributeValue {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<Scalar> for AttributeValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Point> for AttributeValue {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

// =============================================================================
// Attribute
// =============================================================================

/// A typed name/value pair attached to a document entity.
///
/// # Examples
///
/// ```
/// use dotwright_core::attribute::{Attribute, AttributeType, AttributeValue, EnumValue};
/// use dotwright_core::kinds::NodeShape;
///
/// let shape = Attribute::new(AttributeType::Shape, EnumValue::from(NodeShape::Box));
/// assert_eq!(shape.to_string(), r#"shape="box""#);
///
/// let hidden = Attribute::new(AttributeType::Shape, EnumValue::from(NodeShape::Default));
/// assert_eq!(hidden.to_string(), "");
///
/// let ranks = Attribute::new(
///     AttributeType::RankSep,
///     AttributeValue::ScalarList(vec![1.0.into(), 2.0.into(), 3.0.into()]),
/// );
/// assert_eq!(ranks.to_string(), r#"ranksep="1:2:3""#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: AttributeName,
    value: AttributeValue,
}

impl Attribute {
    /// Creates an attribute from the catalog.
    pub fn new(kind: AttributeType, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: AttributeName::Known(kind),
            value: value.into(),
        }
    }

    /// Creates a custom attribute. Name and value are written verbatim, so the
    /// caller is responsible for sanitizing them.
    pub fn custom(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: AttributeName::Custom(name.into()),
            value: AttributeValue::Scalar(Scalar::Text(value.into())),
        }
    }

    /// Returns the attribute name as written in DOT.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the catalog entry of this attribute, or `None` for custom ones.
    pub fn kind(&self) -> Option<AttributeType> {
        match self.name {
            AttributeName::Known(kind) => Some(kind),
            AttributeName::Custom(_) => None,
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// Replaces the value.
    pub fn set_value(&mut self, value: impl Into<AttributeValue>) {
        self.value = value.into();
    }

    /// Appends an entry to a list-valued attribute.
    ///
    /// Returns `false` and leaves the value untouched if the attribute is not a
    /// list or the entry kind does not match the list kind.
    pub fn add_value(&mut self, item: impl Into<ListItem>) -> bool {
        match (&mut self.value, item.into()) {
            (
                AttributeValue::EnumList(values) | AttributeValue::StyleList(values),
                ListItem::Enum(value),
            ) => values.push(value),
            (AttributeValue::ScalarList(values), ListItem::Scalar(value)) => values.push(value),
            (AttributeValue::PointList(values), ListItem::Point(value)) => values.push(value),
            _ => return false,
        }
        true
    }

    /// Removes the first matching entry from a list-valued attribute.
    ///
    /// Returns `false` if nothing was removed; an absent entry is not an error.
    pub fn remove_value(&mut self, item: impl Into<ListItem>) -> bool {
        fn remove_first<T: PartialEq>(values: &mut Vec<T>, value: &T) -> bool {
            match values.iter().position(|candidate| candidate == value) {
                Some(index) => {
                    values.remove(index);
                    true
                }
                None => false,
            }
        }

        match (&mut self.value, item.into()) {
            (
                AttributeValue::EnumList(values) | AttributeValue::StyleList(values),
                ListItem::Enum(value),
            ) => remove_first(values, &value),
            (AttributeValue::ScalarList(values), ListItem::Scalar(value)) => {
                remove_first(values, &value)
            }
            (AttributeValue::PointList(values), ListItem::Point(value)) => {
                remove_first(values, &value)
            }
            _ => false,
        }
    }

    /// Returns `true` if rendering this attribute produces any output.
    pub fn is_renderable(&self) -> bool {
        self.value.is_renderable()
    }
}

/// Writes `items` separated by `separator`.
fn write_joined<T: Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
    separator: char,
) -> fmt::Result {
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_char(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_renderable() {
            return Ok(());
        }

        let name = &self.name;
        match &self.value {
            AttributeValue::Bool(value) => write!(f, "{name}={value}"),
            AttributeValue::Enum(value) => write!(f, "{name}=\"{value}\""),
            AttributeValue::EnumList(values) => {
                write!(f, "{name}=\"")?;
                write_joined(f, values.iter().filter(|value| !value.is_default()), ':')?;
                f.write_char('"')
            }
            AttributeValue::StyleList(values) => {
                write!(f, "{name}=\"")?;
                write_joined(f, values.iter().filter(|value| !value.is_default()), ',')?;
                f.write_char('"')
            }
            AttributeValue::Scalar(value) => write!(f, "{name}=\"{value}\""),
            AttributeValue::ScalarList(values) => {
                write!(f, "{name}=\"")?;
                write_joined(f, values, ':')?;
                f.write_char('"')
            }
            AttributeValue::AddScalar(value) => write!(f, "{name}=\"+{value}\""),
            AttributeValue::Point(point) => write!(f, "{name}=\"{point}\""),
            AttributeValue::AddPoint(point) => write!(f, "{name}=\"+{point}\""),
            AttributeValue::PointList(points) => {
                write!(f, "{name}=\"")?;
                write_joined(f, points, ' ')?;
                f.write_char('"')
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_list(values: &[Color]) -> AttributeValue {
        AttributeValue::EnumList(values.iter().copied().map(EnumValue::from).collect())
    }

    #[test]
    fn test_attribute_type_names() {
        assert_eq!(AttributeType::Url.as_str(), "URL");
        assert_eq!(AttributeType::Damping.as_str(), "Damping");
        assert_eq!(AttributeType::LabelScheme.as_str(), "label_scheme");
        assert_eq!(AttributeType::HeadUrl.as_str(), "headURL");
        assert_eq!(AttributeType::NsLimit1.as_str(), "nslimit1");
        assert_eq!(AttributeType::BgColor.to_string(), "bgcolor");
    }

    #[test]
    fn test_bool_renders_unquoted() {
        assert_eq!(Attribute::new(AttributeType::Center, true).to_string(), "center=true");
        assert_eq!(
            Attribute::new(AttributeType::Compound, false).to_string(),
            "compound=false"
        );
    }

    #[test]
    fn test_enum_renders_quoted() {
        let attribute = Attribute::new(AttributeType::FillColor, EnumValue::from(Color::Red));
        assert_eq!(attribute.to_string(), r#"fillcolor="red""#);
    }

    #[test]
    fn test_enum_default_is_omitted() {
        let attribute = Attribute::new(AttributeType::FillColor, EnumValue::from(Color::Default));

        assert!(!attribute.is_renderable());
        assert_eq!(attribute.to_string(), "");
    }

    #[test]
    fn test_enum_list_is_colon_joined() {
        let attribute = Attribute::new(AttributeType::Color, enum_list(&[Color::Red, Color::Blue]));
        assert_eq!(attribute.to_string(), r#"color="red:blue""#);
    }

    #[test]
    fn test_enum_list_skips_defaults() {
        let attribute = Attribute::new(
            AttributeType::Color,
            enum_list(&[Color::Default, Color::Red, Color::Default]),
        );
        assert_eq!(attribute.to_string(), r#"color="red""#);

        let only_defaults = Attribute::new(AttributeType::Color, enum_list(&[Color::Default]));
        assert_eq!(only_defaults.to_string(), "");
    }

    #[test]
    fn test_style_list_is_comma_joined() {
        let attribute = Attribute::new(
            AttributeType::Style,
            AttributeValue::StyleList(vec![
                EnumValue::from(NodeStyle::Filled),
                EnumValue::from(NodeStyle::Default),
                EnumValue::from(NodeStyle::Dashed),
            ]),
        );
        assert_eq!(attribute.to_string(), r#"style="filled,dashed""#);
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let empty_enums = Attribute::new(AttributeType::Color, AttributeValue::EnumList(vec![]));
        let empty_styles = Attribute::new(AttributeType::Style, AttributeValue::StyleList(vec![]));
        let empty_scalars = Attribute::new(AttributeType::RankSep, AttributeValue::ScalarList(vec![]));
        let empty_points = Attribute::new(AttributeType::Vertices, AttributeValue::PointList(vec![]));

        assert_eq!(empty_enums.to_string(), "");
        assert_eq!(empty_styles.to_string(), "");
        assert_eq!(empty_scalars.to_string(), "");
        assert_eq!(empty_points.to_string(), "");
    }

    #[test]
    fn test_scalar_list_is_colon_joined() {
        let attribute = Attribute::new(
            AttributeType::RankSep,
            AttributeValue::ScalarList(vec![1.0.into(), 2.0.into(), 3.0.into()]),
        );
        assert_eq!(attribute.to_string(), r#"ranksep="1:2:3""#);
    }

    #[test]
    fn test_scalars_render_quoted() {
        assert_eq!(
            Attribute::new(AttributeType::FontSize, Scalar::from(10.5)).to_string(),
            r#"fontsize="10.5""#
        );
        assert_eq!(
            Attribute::new(AttributeType::Dim, Scalar::from(3)).to_string(),
            r#"dim="3""#
        );
        assert_eq!(
            Attribute::new(AttributeType::FontName, Scalar::from("Courier")).to_string(),
            r#"fontname="Courier""#
        );
    }

    #[test]
    fn test_additive_values() {
        assert_eq!(
            Attribute::new(AttributeType::Sep, AttributeValue::AddScalar(4.0)).to_string(),
            r#"sep="+4""#
        );
        assert_eq!(
            Attribute::new(AttributeType::Sep, AttributeValue::AddPoint(Point::new(1.0, 2.5)))
                .to_string(),
            r#"sep="+1,2.5""#
        );
    }

    #[test]
    fn test_point_values() {
        assert_eq!(
            Attribute::new(AttributeType::Lp, Point::new(3.0, 4.0)).to_string(),
            r#"lp="3,4""#
        );

        let vertices = Attribute::new(
            AttributeType::Vertices,
            AttributeValue::PointList(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.5)]),
        );
        assert_eq!(vertices.to_string(), r#"vertices="0,0 1,1.5""#);
    }

    #[test]
    fn test_custom_attribute() {
        let attribute = Attribute::custom("class", "important");

        assert_eq!(attribute.name(), "class");
        assert_eq!(attribute.kind(), None);
        assert_eq!(attribute.to_string(), r#"class="important""#);
    }

    #[test]
    fn test_set_value() {
        let mut attribute = Attribute::new(AttributeType::Shape, EnumValue::from(NodeShape::Default));
        attribute.set_value(EnumValue::from(NodeShape::Circle));

        assert_eq!(attribute.kind(), Some(AttributeType::Shape));
        assert_eq!(attribute.to_string(), r#"shape="circle""#);
    }

    #[test]
    fn test_add_and_remove_values() {
        let mut attribute = Attribute::new(AttributeType::Style, AttributeValue::StyleList(vec![]));

        assert!(attribute.add_value(NodeStyle::Filled));
        assert!(attribute.add_value(NodeStyle::Rounded));
        assert_eq!(attribute.to_string(), r#"style="filled,rounded""#);

        assert!(attribute.remove_value(NodeStyle::Filled));
        assert!(!attribute.remove_value(NodeStyle::Dashed));
        assert_eq!(attribute.to_string(), r#"style="rounded""#);
    }

    #[test]
    fn test_add_value_rejects_mismatched_kind() {
        let mut scalars = Attribute::new(AttributeType::RankSep, AttributeValue::ScalarList(vec![]));
        let mut boolean = Attribute::new(AttributeType::Center, true);

        assert!(!scalars.add_value(Point::new(1.0, 1.0)));
        assert!(!boolean.add_value(1.0));
        assert!(scalars.add_value(1.0));
        assert_eq!(scalars.to_string(), r#"ranksep="1""#);
    }
}
