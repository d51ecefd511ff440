//! Color values accepted by DOT color attributes.
//!
//! This module provides the [`Color`] type: the X11 color names understood by
//! every Graphviz renderer, plus explicit RGB and RGBA values. Arbitrary CSS
//! color strings can be converted with [`Color::parse`], which uses the
//! `DynamicColor` parser from the color crate for anything that is not a known
//! name.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use thiserror::Error;

/// Error returned when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorError {
    input: String,
    reason: String,
}

macro_rules! named_colors {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A DOT color.
        ///
        /// [`Color::Default`] is the omit sentinel: an attribute holding it is
        /// not written, leaving the renderer's own default in place.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum Color {
            /// Not emitted; the renderer's own default applies.
            #[default]
            Default,
            $(
                #[doc = concat!("The X11 color `", $name, "`.")]
                $variant,
            )+
            /// An opaque color given by its red, green and blue channels.
            Rgb(u8, u8, u8),
            /// A color with an alpha channel.
            Rgba(u8, u8, u8, u8),
        }

        impl Color {
            /// Looks up an X11 color by name, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<Self> {
                let lower = name.to_ascii_lowercase();
                match lower.as_str() {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the X11 name of a named color.
            ///
            /// Returns `None` for [`Color::Default`] and explicit channel values.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($name),)+
                    Self::Default | Self::Rgb(..) | Self::Rgba(..) => None,
                }
            }
        }
    };
}

named_colors! {
    AliceBlue => "aliceblue",
    AntiqueWhite => "antiquewhite",
    Aquamarine => "aquamarine",
    Azure => "azure",
    Beige => "beige",
    Bisque => "bisque",
    Black => "black",
    BlanchedAlmond => "blanchedalmond",
    Blue => "blue",
    BlueViolet => "blueviolet",
    Brown => "brown",
    BurlyWood => "burlywood",
    CadetBlue => "cadetblue",
    Chartreuse => "chartreuse",
    Chocolate => "chocolate",
    Coral => "coral",
    CornflowerBlue => "cornflowerblue",
    Cornsilk => "cornsilk",
    Crimson => "crimson",
    Cyan => "cyan",
    DarkBlue => "darkblue",
    DarkCyan => "darkcyan",
    DarkGoldenrod => "darkgoldenrod",
    DarkGray => "darkgray",
    DarkGreen => "darkgreen",
    DarkGrey => "darkgrey",
    DarkKhaki => "darkkhaki",
    DarkMagenta => "darkmagenta",
    DarkOliveGreen => "darkolivegreen",
    DarkOrange => "darkorange",
    DarkOrchid => "darkorchid",
    DarkRed => "darkred",
    DarkSalmon => "darksalmon",
    DarkSeaGreen => "darkseagreen",
    DarkSlateBlue => "darkslateblue",
    DarkSlateGray => "darkslategray",
    DarkSlateGrey => "darkslategrey",
    DarkTurquoise => "darkturquoise",
    DarkViolet => "darkviolet",
    DeepPink => "deeppink",
    DeepSkyBlue => "deepskyblue",
    DimGray => "dimgray",
    DimGrey => "dimgrey",
    DodgerBlue => "dodgerblue",
    Firebrick => "firebrick",
    FloralWhite => "floralwhite",
    ForestGreen => "forestgreen",
    Gainsboro => "gainsboro",
    GhostWhite => "ghostwhite",
    Gold => "gold",
    Goldenrod => "goldenrod",
    Gray => "gray",
    Green => "green",
    GreenYellow => "greenyellow",
    Grey => "grey",
    Honeydew => "honeydew",
    HotPink => "hotpink",
    IndianRed => "indianred",
    Indigo => "indigo",
    Invis => "invis",
    Ivory => "ivory",
    Khaki => "khaki",
    Lavender => "lavender",
    LavenderBlush => "lavenderblush",
    LawnGreen => "lawngreen",
    LemonChiffon => "lemonchiffon",
    LightBlue => "lightblue",
    LightCoral => "lightcoral",
    LightCyan => "lightcyan",
    LightGoldenrod => "lightgoldenrod",
    LightGoldenrodYellow => "lightgoldenrodyellow",
    LightGray => "lightgray",
    LightGreen => "lightgreen",
    LightGrey => "lightgrey",
    LightPink => "lightpink",
    LightSalmon => "lightsalmon",
    LightSeaGreen => "lightseagreen",
    LightSkyBlue => "lightskyblue",
    LightSlateBlue => "lightslateblue",
    LightSlateGray => "lightslategray",
    LightSlateGrey => "lightslategrey",
    LightSteelBlue => "lightsteelblue",
    LightYellow => "lightyellow",
    LimeGreen => "limegreen",
    Linen => "linen",
    Magenta => "magenta",
    Maroon => "maroon",
    MediumAquamarine => "mediumaquamarine",
    MediumBlue => "mediumblue",
    MediumOrchid => "mediumorchid",
    MediumPurple => "mediumpurple",
    MediumSeaGreen => "mediumseagreen",
    MediumSlateBlue => "mediumslateblue",
    MediumSpringGreen => "mediumspringgreen",
    MediumTurquoise => "mediumturquoise",
    MediumVioletRed => "mediumvioletred",
    MidnightBlue => "midnightblue",
    MintCream => "mintcream",
    MistyRose => "mistyrose",
    Moccasin => "moccasin",
    NavajoWhite => "navajowhite",
    Navy => "navy",
    NavyBlue => "navyblue",
    None => "none",
    OldLace => "oldlace",
    OliveDrab => "olivedrab",
    Orange => "orange",
    OrangeRed => "orangered",
    Orchid => "orchid",
    PaleGoldenrod => "palegoldenrod",
    PaleGreen => "palegreen",
    PaleTurquoise => "paleturquoise",
    PaleVioletRed => "palevioletred",
    PapayaWhip => "papayawhip",
    PeachPuff => "peachpuff",
    Peru => "peru",
    Pink => "pink",
    Plum => "plum",
    PowderBlue => "powderblue",
    Purple => "purple",
    Red => "red",
    RosyBrown => "rosybrown",
    RoyalBlue => "royalblue",
    SaddleBrown => "saddlebrown",
    Salmon => "salmon",
    SandyBrown => "sandybrown",
    SeaGreen => "seagreen",
    Seashell => "seashell",
    Sienna => "sienna",
    SkyBlue => "skyblue",
    SlateBlue => "slateblue",
    SlateGray => "slategray",
    SlateGrey => "slategrey",
    Snow => "snow",
    SpringGreen => "springgreen",
    SteelBlue => "steelblue",
    Tan => "tan",
    Thistle => "thistle",
    Tomato => "tomato",
    Transparent => "transparent",
    Turquoise => "turquoise",
    Violet => "violet",
    VioletRed => "violetred",
    Wheat => "wheat",
    White => "white",
    WhiteSmoke => "whitesmoke",
    Yellow => "yellow",
    YellowGreen => "yellowgreen",
}

impl Color {
    /// Parses a color from a string.
    ///
    /// X11 names are tried first; anything else is handed to the CSS color
    /// parser and converted to explicit sRGB channels.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the string is neither a known name nor a valid
    /// CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotwright_core::color::Color;
    ///
    /// assert_eq!(Color::parse("Red").unwrap(), Color::Red);
    /// assert_eq!(Color::parse("#ff8000").unwrap(), Color::Rgb(255, 128, 0));
    /// assert!(Color::parse("not-a-color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if let Some(color) = Self::from_name(trimmed) {
            return Ok(color);
        }

        let dynamic = DynamicColor::from_str(trimmed).map_err(|err| ColorError {
            input: input.to_string(),
            reason: err.to_string(),
        })?;
        let rgba = dynamic.to_alpha_color::<Srgb>().to_rgba8();

        if rgba.a == u8::MAX {
            Ok(Self::Rgb(rgba.r, rgba.g, rgba.b))
        } else {
            Ok(Self::Rgba(rgba.r, rgba.g, rgba.b, rgba.a))
        }
    }

    /// Returns `true` for the omit sentinel.
    pub fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => Ok(()),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Rgba(r, g, b, a) => write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default_is_sentinel() {
        assert_eq!(Color::default(), Color::Default);
        assert!(Color::Default.is_default());
        assert!(!Color::Black.is_default());
        assert_eq!(Color::Default.to_string(), "");
    }

    #[test]
    fn test_color_names_round_trip() {
        assert_eq!(Color::from_name("aliceblue"), Some(Color::AliceBlue));
        assert_eq!(Color::from_name("LightGoldenrodYellow"), Some(Color::LightGoldenrodYellow));
        assert_eq!(Color::Transparent.name(), Some("transparent"));
        assert_eq!(Color::from_name("chartreuse7"), None);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Red.to_string(), "red");
        assert_eq!(Color::Rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Color::Rgba(0, 0, 0, 128).to_string(), "#00000080");
    }

    #[test]
    fn test_color_parse_css() {
        assert_eq!(Color::parse("#00ff00").unwrap(), Color::Rgb(0, 255, 0));
        assert_eq!(Color::parse("rgb(0, 0, 255)").unwrap(), Color::Rgb(0, 0, 255));
        assert_eq!(Color::parse(" navy ").unwrap(), Color::Navy);
    }

    #[test]
    fn test_color_parse_alpha() {
        let color = Color::parse("#ff000080").unwrap();
        assert!(matches!(color, Color::Rgba(255, 0, 0, _)));
    }

    #[test]
    fn test_color_parse_invalid() {
        let err = Color::parse("not-a-color").unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_color_from_str() {
        let color: Color = "white".parse().unwrap();
        assert_eq!(color, Color::White);
    }
}
