//! Closed enumerations accepted by DOT attributes.
//!
//! Every enumeration carries a `Default` variant. It is never written to the
//! output: an attribute set to `Default` is omitted entirely, so the renderer's
//! own default applies. The string tables are `match` expressions local to
//! each type.

use std::fmt;

macro_rules! dot_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            /// Not emitted; the renderer's own default applies.
            #[default]
            Default,
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            /// Returns the DOT spelling of this value; empty for `Default`.
            pub fn as_str(self) -> &'static str {
                match self {
                    Self::Default => "",
                    $(Self::$variant => $text,)+
                }
            }

            /// Returns `true` for the omit sentinel.
            pub fn is_default(self) -> bool {
                matches!(self, Self::Default)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

dot_enum! {
    /// Shape of an arrowhead or arrowtail.
    ArrowType {
        Normal => "normal",
        Inv => "inv",
        Dot => "dot",
        InvDot => "invdot",
        ODot => "odot",
        InvODot => "invodot",
        None => "none",
        Tee => "tee",
        Empty => "empty",
        InvEmpty => "invempty",
        Diamond => "diamond",
        ODiamond => "odiamond",
        EDiamond => "ediamond",
        Crow => "crow",
        Box => "box",
        OBox => "obox",
        Open => "open",
        HalfOpen => "halfopen",
        Vee => "vee",
    }
}

dot_enum! {
    /// Drawing style of an edge.
    EdgeStyle {
        Dashed => "dashed",
        Dotted => "dotted",
        Solid => "solid",
        Invis => "invis",
        Bold => "bold",
        Tapered => "tapered",
    }
}

dot_enum! {
    /// Which ends of an edge carry arrows.
    DirType {
        Forward => "forward",
        Back => "back",
        Both => "both",
        None => "none",
    }
}

dot_enum! {
    /// Drawing style of a node or cluster.
    NodeStyle {
        Dashed => "dashed",
        Dotted => "dotted",
        Solid => "solid",
        Invis => "invis",
        Bold => "bold",
        Filled => "filled",
        Striped => "striped",
        Wedged => "wedged",
        Diagonals => "diagonals",
        Rounded => "rounded",
        Radial => "radial",
    }
}

dot_enum! {
    /// Polygon-based node shapes.
    NodeShape {
        Box => "box",
        Polygon => "polygon",
        Ellipse => "ellipse",
        Oval => "oval",
        Circle => "circle",
        Point => "point",
        Egg => "egg",
        Triangle => "triangle",
        PlainText => "plaintext",
        Plain => "plain",
        Diamond => "diamond",
        Trapezium => "trapezium",
        Parallelogram => "parallelogram",
        House => "house",
        Pentagon => "pentagon",
        Hexagon => "hexagon",
        Septagon => "septagon",
        Octagon => "octagon",
        DoubleCircle => "doublecircle",
        DoubleOctagon => "doubleoctagon",
        TripleOctagon => "tripleoctagon",
        InvTriangle => "invtriangle",
        InvTrapezium => "invtrapezium",
        InvHouse => "invhouse",
        MDiamond => "Mdiamond",
        MSquare => "Msquare",
        MCircle => "Mcircle",
        Rect => "rect",
        Rectangle => "rectangle",
        Square => "square",
        Star => "star",
        None => "none",
        Underline => "underline",
        Cylinder => "cylinder",
        Note => "note",
        Tab => "tab",
        Folder => "folder",
        Box3d => "box3d",
        Component => "component",
        Record => "record",
        MRecord => "Mrecord",
    }
}

dot_enum! {
    /// Character encoding of text labels.
    Charset {
        Utf8 => "UTF-8",
        Latin1 => "latin1",
    }
}

dot_enum! {
    /// Order in which nodes and edges are emitted by the renderer.
    OutputMode {
        BreadthFirst => "breadthfirst",
        NodesFirst => "nodesfirst",
        EdgesFirst => "edgesfirst",
    }
}

dot_enum! {
    /// How clusters are handled during layout.
    ClusterMode {
        Local => "local",
        Global => "global",
        None => "none",
    }
}

dot_enum! {
    /// Vertical placement of labels.
    LabelLoc {
        Top => "t",
        Bottom => "b",
        Center => "c",
    }
}

dot_enum! {
    /// Order in which pages are emitted for paginated output.
    PageDir {
        BottomLeft => "BL",
        BottomRight => "BR",
        TopLeft => "TL",
        TopRight => "TR",
        RightBottom => "RB",
        RightTop => "RT",
        LeftBottom => "LB",
        LeftTop => "LT",
    }
}

dot_enum! {
    /// Quadtree scheme used by force-directed layouts.
    QuadType {
        Normal => "normal",
        Fast => "fast",
        None => "none",
    }
}

dot_enum! {
    /// Rank constraint applied to the nodes of a subgraph.
    RankType {
        Same => "same",
        Min => "min",
        Source => "source",
        Max => "max",
        Sink => "sink",
    }
}

dot_enum! {
    /// Direction in which ranks are laid out.
    RankDir {
        TopToBottom => "TB",
        LeftToRight => "LR",
        BottomToTop => "BT",
        RightToLeft => "RL",
    }
}

dot_enum! {
    DirEdgeConstraints {
        True => "true",
        Hier => "hier",
    }
}

dot_enum! {
    /// Port position on a node boundary.
    CompassPoint {
        North => "n",
        NorthEast => "ne",
        East => "e",
        SouthEast => "se",
        South => "s",
        SouthWest => "sw",
        West => "w",
        NorthWest => "nw",
        Center => "c",
        Any => "_",
    }
}

dot_enum! {
    /// Distance matrix model used by neato.
    Model {
        ShortPath => "shortpath",
        Circuit => "circuit",
        Subset => "subset",
        Mds => "mds",
    }
}

dot_enum! {
    /// Constrains the left-to-right order of edges.
    Ordering {
        Out => "out",
        In => "in",
    }
}

dot_enum! {
    /// Optimization technique used by neato.
    Mode {
        Major => "major",
        Kk => "KK",
        Sgd => "sgd",
        Hier => "hier",
        Ipsep => "ipsep",
    }
}

dot_enum! {
    /// Horizontal justification of cluster labels.
    Justification {
        Left => "l",
        Right => "r",
    }
}

dot_enum! {
    /// How the drawing is scaled to honour `size`.
    Ratio {
        Fill => "fill",
        Compress => "compress",
        Expand => "expand",
        Auto => "auto",
    }
}

dot_enum! {
    /// Post-processing used to smooth node density.
    SmoothType {
        None => "none",
        AvgDist => "avg_dist",
        GraphDist => "graph_dist",
        PowerDist => "power_dist",
        Rng => "rng",
        Spring => "spring",
        Triangle => "triangle",
    }
}

dot_enum! {
    /// How edges are drawn.
    SplineType {
        None => "none",
        Line => "line",
        Spline => "spline",
        Polyline => "polyline",
        Ortho => "ortho",
        Curved => "curved",
        Compound => "compound",
    }
}

dot_enum! {
    /// How an image fills its node.
    ImageScaleType {
        Scale => "true",
        Width => "width",
        Height => "height",
        Both => "both",
    }
}

dot_enum! {
    /// Granularity used when packing disconnected components.
    PackMode {
        Node => "node",
        Cluster => "clust",
        Graph => "graph",
        Array => "array",
    }
}

dot_enum! {
    /// Initial node placement for force-directed layouts.
    StartType {
        Regular => "regular",
        SelfPlaced => "self",
        Random => "random",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renders_empty() {
        assert_eq!(ArrowType::Default.as_str(), "");
        assert_eq!(NodeShape::default().to_string(), "");
        assert!(RankDir::default().is_default());
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(ArrowType::HalfOpen.as_str(), "halfopen");
        assert_eq!(NodeShape::MDiamond.to_string(), "Mdiamond");
        assert_eq!(Charset::Utf8.as_str(), "UTF-8");
        assert_eq!(RankDir::LeftToRight.as_str(), "LR");
        assert_eq!(CompassPoint::Any.as_str(), "_");
        assert_eq!(PackMode::Cluster.as_str(), "clust");
        assert_eq!(SmoothType::AvgDist.as_str(), "avg_dist");
        assert_eq!(Mode::Kk.as_str(), "KK");
    }

    #[test]
    fn test_non_default_values() {
        assert!(!EdgeStyle::Dashed.is_default());
        assert!(!DirType::None.is_default());
        assert!(!LabelLoc::Top.is_default());
    }
}
