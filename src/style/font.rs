use crate::color::{Color, HighlightColor};
use crate::mapping::{self, Accessor, Declaration, Encoding, PropValue, PropertyBag};

use super::{SHADING_DECLS, Shading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertAlign {
    Baseline,
    Superscript,
    Subscript,
}

impl VertAlign {
    pub fn token(self) -> &'static str {
        match self {
            VertAlign::Baseline => "baseline",
            VertAlign::Superscript => "superscript",
            VertAlign::Subscript => "subscript",
        }
    }
}

/// Run (character) formatting. `name` refers to a character style and, when set,
/// is the only thing written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontStyle {
    pub name: Option<String>,
    pub font_name: Option<String>,
    pub font_east_asia: Option<String>,
    pub font_complex: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub all_caps: Option<bool>,
    pub small_caps: Option<bool>,
    pub strikethrough: Option<bool>,
    pub double_strikethrough: Option<bool>,
    pub hidden: Option<bool>,
    pub color: Color,
    /// Twips of extra character spacing.
    pub spacing: Option<i64>,
    /// Minimum size for kerning, in half-points.
    pub kerning: Option<i64>,
    /// Points.
    pub size: Option<f64>,
    pub highlight: Color,
    /// `ST_Underline` token (`single`, `double`, `none`, ...).
    pub underline: Option<String>,
    pub vert_align: Option<VertAlign>,
    pub rtl: Option<bool>,
    pub lang: Option<String>,
    pub shading: Option<Shading>,
}

pub const FONT_DECLS: &[Declaration] = &[
    Declaration::new("styleName", &["rStyle"], Encoding::Literal),
    Declaration::new("fontName", &["rFonts"], Encoding::Literal).attrs(&["ascii", "hAnsi"]),
    Declaration::new("fontEastAsia", &["rFonts"], Encoding::Literal).attrs(&["eastAsia"]),
    Declaration::new("fontComplex", &["rFonts"], Encoding::Literal).attrs(&["cs"]),
    Declaration::new("bold", &["b"], Encoding::Toggle),
    Declaration::new("italic", &["i"], Encoding::Toggle),
    Declaration::new("allCaps", &["caps"], Encoding::Toggle),
    Declaration::new("smallCaps", &["smallCaps"], Encoding::Toggle),
    Declaration::new("strikethrough", &["strike"], Encoding::Toggle),
    Declaration::new("doubleStrikethrough", &["dstrike"], Encoding::Toggle),
    Declaration::new("hidden", &["vanish"], Encoding::Toggle),
    Declaration::new("color", &["color"], Encoding::Literal),
    Declaration::new("themeColor", &["color"], Encoding::Literal).attrs(&["themeColor"]),
    Declaration::new("spacing", &["spacing"], Encoding::Integer),
    Declaration::new("kerning", &["kern"], Encoding::Integer),
    Declaration::new("size", &["sz"], Encoding::ScaledHalf),
    Declaration::new("highlight", &["highlight"], Encoding::Literal),
    Declaration::new("underline", &["u"], Encoding::Literal),
    Declaration::new("superscript", &["vertAlign"], Encoding::EqualsExpected("superscript")),
    Declaration::new("subscript", &["vertAlign"], Encoding::EqualsExpected("subscript")),
    Declaration::new("shading", &["shd"], Encoding::Nested(SHADING_DECLS)),
    Declaration::new("rtl", &["rtl"], Encoding::Toggle),
    Declaration::new("lang", &["lang"], Encoding::Literal),
];

fn color_token(color: &Color) -> Option<PropValue> {
    color.to_hex_or_name().map(PropValue::Str)
}

pub(crate) const FONT_ACCESSORS: &[Accessor<FontStyle>] = &[
    text!("styleName", name),
    text!("fontName", font_name),
    text!("fontEastAsia", font_east_asia),
    text!("fontComplex", font_complex),
    flag!("bold", bold),
    flag!("italic", italic),
    flag!("allCaps", all_caps),
    flag!("smallCaps", small_caps),
    flag!("strikethrough", strikethrough),
    flag!("doubleStrikethrough", double_strikethrough),
    flag!("hidden", hidden),
    Accessor {
        name: "color",
        get: |s| color_token(&s.color),
        set: |s, v| s.color = v.as_str().map(Color::parse).unwrap_or_default(),
    },
    Accessor {
        name: "themeColor",
        get: |_| None,
        set: |s, v| {
            if let Some(theme) = v.as_str().and_then(crate::color::ThemeColor::from_name) {
                s.color = Color::Theme(theme);
            }
        },
    },
    Accessor {
        name: "spacing",
        get: |s| s.spacing.map(PropValue::Int),
        set: |s, v| s.spacing = v.as_int(),
    },
    Accessor {
        name: "kerning",
        get: |s| s.kerning.map(PropValue::Int),
        set: |s, v| s.kerning = v.as_int(),
    },
    Accessor {
        name: "size",
        get: |s| s.size.map(|pt| PropValue::Float((pt * 2.0).round() / 2.0)),
        set: |s, v| s.size = v.as_float(),
    },
    Accessor {
        name: "highlight",
        get: |s| match s.highlight {
            Color::Highlight(h) => Some(PropValue::Str(h.name().to_string())),
            _ => None,
        },
        set: |s, v| {
            s.highlight = v
                .as_str()
                .and_then(HighlightColor::from_name)
                .map_or(Color::Unspecified, Color::Highlight)
        },
    },
    text!("underline", underline),
    Accessor {
        name: "superscript",
        get: |s| s.vert_align.map(|va| PropValue::Bool(va == VertAlign::Superscript)),
        set: |s, v| {
            if v.as_bool() == Some(true) {
                s.vert_align = Some(VertAlign::Superscript);
            } else if s.vert_align.is_none() {
                s.vert_align = Some(VertAlign::Baseline);
            }
        },
    },
    Accessor {
        name: "subscript",
        get: |s| s.vert_align.map(|va| PropValue::Bool(va == VertAlign::Subscript)),
        set: |s, v| {
            if v.as_bool() == Some(true) {
                s.vert_align = Some(VertAlign::Subscript);
            }
        },
    },
    Accessor {
        name: "shading",
        get: |s| s.shading.as_ref().map(|sh| PropValue::Bag(sh.to_bag())),
        set: |s, v| s.shading = v.as_bag().map(Shading::from_bag),
    },
    flag!("rtl", rtl),
    text!("lang", lang),
];

impl FontStyle {
    pub fn named(name: &str) -> Self {
        FontStyle {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut style = FontStyle::default();
        mapping::apply_bag(&mut style, bag, FONT_ACCESSORS);
        style
    }

    /// Read a `w:rPr` element.
    pub fn from_node(rpr: roxmltree::Node) -> Self {
        FontStyle::from_bag(&mapping::extract(rpr, FONT_DECLS))
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, FONT_ACCESSORS)
    }

    pub fn is_empty(&self) -> bool {
        self.to_bag().is_empty()
    }
}
