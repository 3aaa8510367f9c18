//! Typed style value objects.
//!
//! Every style has a declaration table (how each property is found in markup) and
//! an accessor table (how each property maps onto a typed field). Both are keyed by
//! the same property names, so a bag extracted from markup can be applied to a
//! style and a style can be flattened back into the bag its markup would yield.

macro_rules! flag {
    ($name:literal, $field:ident) => {
        crate::mapping::Accessor {
            name: $name,
            get: |s| s.$field.map(crate::mapping::PropValue::Bool),
            set: |s, v| s.$field = v.as_bool(),
        }
    };
}

macro_rules! text {
    ($name:literal, $field:ident) => {
        crate::mapping::Accessor {
            name: $name,
            get: |s| s.$field.clone().map(crate::mapping::PropValue::Str),
            set: |s, v| s.$field = v.as_str().map(str::to_string),
        }
    };
}

macro_rules! twips {
    ($name:literal, $field:ident) => {
        crate::mapping::Accessor {
            name: $name,
            get: |s| {
                s.$field
                    .and_then(|l| l.to_twips())
                    .map(crate::mapping::PropValue::Int)
            },
            set: |s, v| s.$field = v.as_int().map(crate::units::Length::from_twips),
        }
    };
}

macro_rules! width {
    ($name:literal, $field:ident) => {
        crate::mapping::Accessor {
            name: $name,
            get: |s| {
                s.$field
                    .as_ref()
                    .map(|w| crate::mapping::PropValue::Bag(crate::style::width_to_bag(w)))
            },
            set: |s, v| s.$field = v.as_bag().and_then(crate::style::width_from_bag),
        }
    };
}

mod font;
mod frame;
mod paragraph;
mod section;
mod table;

pub use font::{FONT_DECLS, FontStyle, VertAlign};
pub use frame::{FRAME_DECLS, FrameStyle};
pub use paragraph::{
    Alignment, LineRule, LineSpacing, NumberingRef, PARAGRAPH_DECLS, ParagraphStyle, TabStop,
};
pub use section::{HeaderFooterRef, HeaderFooterType, Orientation, SECTION_DECLS, SectionStyle};
pub use table::{
    CELL_DECLS, CellMargins, CellStyle, HeightRule, ROW_DECLS, RowStyle, TABLE_DECLS, TableLayout,
    TablePosition, TableStyle, VMerge,
};

use crate::color::Color;
use crate::mapping::{Declaration, Encoding, PropValue, PropertyBag};
use crate::units::Length;

/// Eighths of a point, the unit of `w:sz` on borders.
pub const BORDER_SIZE_MIN: u32 = 2;
pub const BORDER_SIZE_MAX: u32 = 96;

#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// `ST_Border` token: `single`, `double`, `dashed`, ...
    pub style: String,
    /// Eighths of a point.
    pub size: u32,
    pub color: Color,
    /// Points.
    pub space: u32,
}

impl Default for Border {
    fn default() -> Self {
        Border {
            style: "single".to_string(),
            size: 4,
            color: Color::Unspecified,
            space: 0,
        }
    }
}

impl Border {
    pub fn new(style: &str, size: u32, color: Color) -> Self {
        Border {
            style: style.to_string(),
            size,
            color,
            space: 0,
        }
    }

    /// Size as written: clamped into the range the format accepts.
    pub fn clamped_size(&self) -> u32 {
        self.size.clamp(BORDER_SIZE_MIN, BORDER_SIZE_MAX)
    }

    /// Zero-width and `none`/`nil` borders produce no markup.
    pub fn is_visible(&self) -> bool {
        self.size > 0 && self.style != "none" && self.style != "nil"
    }

    fn from_bag(bag: &PropertyBag) -> Self {
        let defaults = Border::default();
        Border {
            style: bag.str("style").map_or(defaults.style, str::to_string),
            size: bag
                .int("size")
                .map_or(defaults.size, |s| s.clamp(0, i64::from(u32::MAX)) as u32),
            color: bag.str("color").map(Color::parse).unwrap_or_default(),
            space: bag.int("space").map_or(0, |s| s.clamp(0, i64::from(u32::MAX)) as u32),
        }
    }

    fn to_bag(&self) -> PropertyBag {
        let mut bag = PropertyBag::new();
        bag.insert("style", PropValue::Str(self.style.clone()));
        bag.insert("size", PropValue::Int(self.clamped_size() as i64));
        bag.insert(
            "color",
            PropValue::Str(self.color.to_hex_or_name().unwrap_or_else(|| "auto".into())),
        );
        bag.insert("space", PropValue::Int(self.space as i64));
        bag
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderSet {
    pub top: Option<Border>,
    pub left: Option<Border>,
    pub bottom: Option<Border>,
    pub right: Option<Border>,
    pub inside_h: Option<Border>,
    pub inside_v: Option<Border>,
}

impl BorderSet {
    pub fn all(border: Border) -> Self {
        BorderSet {
            top: Some(border.clone()),
            left: Some(border.clone()),
            bottom: Some(border.clone()),
            right: Some(border.clone()),
            inside_h: Some(border.clone()),
            inside_v: Some(border),
        }
    }

    pub fn outer(border: Border) -> Self {
        BorderSet {
            top: Some(border.clone()),
            left: Some(border.clone()),
            bottom: Some(border.clone()),
            right: Some(border),
            inside_h: None,
            inside_v: None,
        }
    }

    /// Sides in schema order with their element names.
    pub fn sides(&self) -> [(&'static str, Option<&Border>); 6] {
        [
            ("top", self.top.as_ref()),
            ("left", self.left.as_ref()),
            ("bottom", self.bottom.as_ref()),
            ("right", self.right.as_ref()),
            ("insideH", self.inside_h.as_ref()),
            ("insideV", self.inside_v.as_ref()),
        ]
    }

    pub(crate) fn from_bag(bag: &PropertyBag) -> Self {
        let side = |name: &str| bag.bag(name).map(Border::from_bag);
        BorderSet {
            top: side("top"),
            left: side("left"),
            bottom: side("bottom"),
            right: side("right"),
            inside_h: side("insideH"),
            inside_v: side("insideV"),
        }
    }

    /// Only the borders that would be written.
    pub(crate) fn to_bag(&self) -> PropertyBag {
        let mut bag = PropertyBag::new();
        for (name, border) in self.sides() {
            if let Some(b) = border.filter(|b| b.is_visible()) {
                bag.insert(name, PropValue::Bag(b.to_bag()));
            }
        }
        bag
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shading {
    /// `ST_Shd` pattern token, usually `clear`.
    pub pattern: String,
    pub color: Color,
    pub fill: Color,
}

impl Shading {
    pub fn fill(fill: Color) -> Self {
        Shading {
            pattern: "clear".to_string(),
            color: Color::Unspecified,
            fill,
        }
    }

    pub(crate) fn from_bag(bag: &PropertyBag) -> Self {
        Shading {
            pattern: bag.str("pattern").unwrap_or("clear").to_string(),
            color: bag.str("color").map(Color::parse).unwrap_or_default(),
            fill: bag.str("fill").map(Color::parse).unwrap_or_default(),
        }
    }

    pub(crate) fn to_bag(&self) -> PropertyBag {
        let token = |c: &Color| c.to_hex_or_name().unwrap_or_else(|| "auto".into());
        let mut bag = PropertyBag::new();
        bag.insert("pattern", PropValue::Str(self.pattern.clone()));
        bag.insert("color", PropValue::Str(token(&self.color)));
        bag.insert("fill", PropValue::Str(token(&self.fill)));
        bag
    }
}

pub(crate) const BORDER_DECLS: &[Declaration] = &[
    Declaration::new("style", &["."], Encoding::Literal),
    Declaration::new("size", &["."], Encoding::Integer).attrs(&["sz"]),
    Declaration::new("color", &["."], Encoding::Literal).attrs(&["color"]),
    Declaration::new("space", &["."], Encoding::Integer).attrs(&["space"]),
];

pub(crate) const BORDER_SIDE_DECLS: &[Declaration] = &[
    Declaration::new("top", &["top"], Encoding::Nested(BORDER_DECLS)),
    Declaration::new("left", &["left", "start"], Encoding::Nested(BORDER_DECLS)),
    Declaration::new("bottom", &["bottom"], Encoding::Nested(BORDER_DECLS)),
    Declaration::new("right", &["right", "end"], Encoding::Nested(BORDER_DECLS)),
    Declaration::new("insideH", &["insideH"], Encoding::Nested(BORDER_DECLS)),
    Declaration::new("insideV", &["insideV"], Encoding::Nested(BORDER_DECLS)),
];

pub(crate) const SHADING_DECLS: &[Declaration] = &[
    Declaration::new("pattern", &["."], Encoding::Literal),
    Declaration::new("color", &["."], Encoding::Literal).attrs(&["color"]),
    Declaration::new("fill", &["."], Encoding::Literal).attrs(&["fill"]),
];

/// `w:w` + `w:type` pairs (`tblW`, `tcW`, `tblInd`, cell margins).
pub(crate) const WIDTH_DECLS: &[Declaration] = &[
    Declaration::new("value", &["."], Encoding::Literal).attrs(&["w"]),
    Declaration::new("unit", &["."], Encoding::Literal).attrs(&["type"]),
];

/// `ST_TblWidth` pct values are fiftieths of a percent unless written with `%`.
pub(crate) const PCT_SCALE: f64 = 50.0;

/// Markup form of a width: the `(w:w, w:type)` pair the writer emits.
pub(crate) fn width_parts(width: &Length) -> (Option<String>, &'static str) {
    if width.is_auto() {
        return (None, "auto");
    }
    if width.is_zero() {
        return (None, "nil");
    }
    match *width {
        Length::Percent(p) => (Some(((p * PCT_SCALE).round() as i64).to_string()), "pct"),
        _ => (Some(width.to_twips().unwrap_or(0).to_string()), "dxa"),
    }
}

pub(crate) fn width_to_bag(width: &Length) -> PropertyBag {
    let (value, unit) = width_parts(width);
    let mut bag = PropertyBag::new();
    if let Some(v) = value {
        bag.insert("value", PropValue::Str(v));
    }
    bag.insert("unit", PropValue::Str(unit.to_string()));
    bag
}

pub(crate) fn width_from_bag(bag: &PropertyBag) -> Option<Length> {
    let value = bag.str("value");
    match bag.str("unit").unwrap_or("dxa") {
        "auto" => Some(Length::Auto),
        "nil" => Some(Length::from_twips(0)),
        "pct" => {
            let raw = value?;
            match raw.strip_suffix('%') {
                Some(p) => p.parse::<f64>().ok().map(Length::Percent),
                None => raw.parse::<f64>().ok().map(|v| Length::Percent(v / PCT_SCALE)),
            }
        }
        _ => value
            .and_then(|v| v.parse::<f64>().ok())
            .map(|v| Length::from_twips(v.round() as i64)),
    }
}
