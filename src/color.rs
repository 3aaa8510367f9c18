use std::fmt;

use crate::error::Error;

/// Fixed highlight palette accepted by `w:highlight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    Yellow,
    White,
    DarkBlue,
    DarkCyan,
    DarkGreen,
    DarkMagenta,
    DarkRed,
    DarkYellow,
    DarkGray,
    LightGray,
}

const HIGHLIGHTS: [(HighlightColor, &str, [u8; 3]); 16] = [
    (HighlightColor::Black, "black", [0, 0, 0]),
    (HighlightColor::Blue, "blue", [0, 0, 255]),
    (HighlightColor::Cyan, "cyan", [0, 255, 255]),
    (HighlightColor::Green, "green", [0, 255, 0]),
    (HighlightColor::Magenta, "magenta", [255, 0, 255]),
    (HighlightColor::Red, "red", [255, 0, 0]),
    (HighlightColor::Yellow, "yellow", [255, 255, 0]),
    (HighlightColor::White, "white", [255, 255, 255]),
    (HighlightColor::DarkBlue, "darkBlue", [0, 0, 128]),
    (HighlightColor::DarkCyan, "darkCyan", [0, 128, 128]),
    (HighlightColor::DarkGreen, "darkGreen", [0, 128, 0]),
    (HighlightColor::DarkMagenta, "darkMagenta", [128, 0, 128]),
    (HighlightColor::DarkRed, "darkRed", [128, 0, 0]),
    (HighlightColor::DarkYellow, "darkYellow", [128, 128, 0]),
    (HighlightColor::DarkGray, "darkGray", [128, 128, 128]),
    (HighlightColor::LightGray, "lightGray", [192, 192, 192]),
];

impl HighlightColor {
    pub fn from_name(name: &str) -> Option<Self> {
        HIGHLIGHTS.iter().find(|(_, n, _)| *n == name).map(|(c, _, _)| *c)
    }

    pub fn name(self) -> &'static str {
        HIGHLIGHTS.iter().find(|(c, _, _)| *c == self).map_or("none", |(_, n, _)| n)
    }

    pub fn rgb(self) -> [u8; 3] {
        HIGHLIGHTS.iter().find(|(c, _, _)| *c == self).map_or([0, 0, 0], |(_, _, rgb)| *rgb)
    }
}

/// Scheme slot of the document theme. The concrete value lives in `theme1.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

const THEME_SLOTS: [(ThemeColor, &str); 12] = [
    (ThemeColor::Dark1, "dark1"),
    (ThemeColor::Light1, "light1"),
    (ThemeColor::Dark2, "dark2"),
    (ThemeColor::Light2, "light2"),
    (ThemeColor::Accent1, "accent1"),
    (ThemeColor::Accent2, "accent2"),
    (ThemeColor::Accent3, "accent3"),
    (ThemeColor::Accent4, "accent4"),
    (ThemeColor::Accent5, "accent5"),
    (ThemeColor::Accent6, "accent6"),
    (ThemeColor::Hyperlink, "hyperlink"),
    (ThemeColor::FollowedHyperlink, "followedHyperlink"),
];

impl ThemeColor {
    /// Accepts the slot names plus the `text1`/`background1` style aliases Word
    /// writes for the first two pairs.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = match name {
            "text1" => "dark1",
            "background1" => "light1",
            "text2" => "dark2",
            "background2" => "light2",
            other => other,
        };
        THEME_SLOTS.iter().find(|(_, n)| *n == name).map(|(c, _)| *c)
    }

    pub fn name(self) -> &'static str {
        THEME_SLOTS.iter().find(|(c, _)| *c == self).map_or("dark1", |(_, n)| n)
    }
}

/// A literal RGB color. Only built through [`Color::hex`], [`Color::rgb`] and
/// [`Color::parse`], so it always prints as six uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub fn rgb(self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{r:02X}{g:02X}{b:02X}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Unspecified,
    Hex(HexColor),
    Highlight(HighlightColor),
    Theme(ThemeColor),
    /// Platform UI role carrying the literal color to use when the role cannot
    /// be resolved. The fallback is never `Theme`, `System` or `Unspecified`.
    System { name: String, fallback: Box<Color> },
}

fn normalize_hex(raw: &str) -> Option<HexColor> {
    let digits = raw.strip_prefix('#').unwrap_or(raw);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(HexColor([channel(0)?, channel(2)?, channel(4)?]))
}

impl Color {
    /// Strict hex constructor for values that must be statically valid.
    pub fn hex(literal: &str) -> Result<Self, Error> {
        normalize_hex(literal)
            .map(Color::Hex)
            .ok_or_else(|| Error::InvalidColor(literal.to_string()))
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Hex(HexColor([r, g, b]))
    }

    /// Builds a system color. The fallback must already be a literal color.
    pub fn system(name: &str, fallback: Color) -> Result<Self, Error> {
        match fallback {
            Color::Hex(_) | Color::Highlight(_) => Ok(Color::System {
                name: name.to_string(),
                fallback: Box::new(fallback),
            }),
            _ => Err(Error::InvalidColor(format!(
                "system color {name} needs a literal fallback"
            ))),
        }
    }

    /// Lenient constructor for attribute values read from documents: hex, highlight
    /// names and theme slot names are recognized, `auto`/empty is unspecified, and
    /// anything else degrades to unspecified with a warning.
    pub fn parse(literal: &str) -> Self {
        let literal = literal.trim();
        if literal.is_empty() || literal == "auto" || literal == "none" {
            return Color::Unspecified;
        }
        if let Some(hex) = normalize_hex(literal) {
            return Color::Hex(hex);
        }
        if let Some(h) = HighlightColor::from_name(literal) {
            return Color::Highlight(h);
        }
        if let Some(t) = ThemeColor::from_name(literal) {
            return Color::Theme(t);
        }
        log::warn!("unrecognized color literal {literal:?}, treating as unspecified");
        Color::Unspecified
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, Color::Unspecified)
    }

    /// The token written into markup: hex digits for literal colors, the symbolic
    /// name for highlight, theme and system colors, nothing when unspecified.
    pub fn to_hex_or_name(&self) -> Option<String> {
        match self {
            Color::Unspecified => None,
            Color::Hex(hex) => Some(hex.to_string()),
            Color::Highlight(h) => Some(h.name().to_string()),
            Color::Theme(t) => Some(t.name().to_string()),
            Color::System { name, .. } => Some(name.clone()),
        }
    }

    /// The last concrete color in the chain: a system color's fallback, otherwise
    /// the color itself.
    pub fn last_color(&self) -> &Color {
        match self {
            Color::System { fallback, .. } => fallback.last_color(),
            other => other,
        }
    }

    /// RGB triple of a literal or highlight color.
    ///
    /// # Panics
    /// On `Theme` and `System` colors, which must be resolved by the caller first.
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        match self {
            Color::Unspecified => None,
            Color::Hex(hex) => Some(hex.rgb()),
            Color::Highlight(h) => Some(h.rgb()),
            Color::Theme(_) | Color::System { .. } => {
                panic!("to_rgb called on unresolved symbolic color {self}")
            }
        }
    }

    /// # Panics
    /// Same preconditions as [`Color::to_rgb`].
    pub fn to_hex(&self) -> Option<String> {
        self.to_rgb()
            .map(|[r, g, b]| format!("{r:02X}{g:02X}{b:02X}"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_hex_or_name() {
            Some(token) => f.write_str(&token),
            None => f.write_str("auto"),
        }
    }
}
