use crate::mapping::{self, Accessor, Declaration, Encoding, PropValue, PropertyBag};
use crate::units::{LINE_BASELINE_TWIPS, Length};

use super::{BORDER_SIDE_DECLS, BorderSet, FrameStyle, SHADING_DECLS, Shading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Both,
    Distribute,
}

impl Alignment {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "left" | "start" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" | "end" => Some(Alignment::Right),
            "both" | "justify" => Some(Alignment::Both),
            "distribute" => Some(Alignment::Distribute),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Both => "both",
            Alignment::Distribute => "distribute",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Auto,
    Exact,
    AtLeast,
}

impl LineRule {
    pub fn from_token(token: &str) -> Self {
        match token {
            "exact" => LineRule::Exact,
            "atLeast" => LineRule::AtLeast,
            _ => LineRule::Auto,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            LineRule::Auto => "auto",
            LineRule::Exact => "exact",
            LineRule::AtLeast => "atLeast",
        }
    }
}

/// Space between lines in twips. Under `Auto` the stored value excludes the
/// 240-twip single-line baseline that `w:line` includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpacing {
    pub spacing: i64,
    pub rule: LineRule,
}

impl LineSpacing {
    /// `None` when `line` is too far out of range to carry the baseline.
    pub fn from_markup(line: i64, rule: LineRule) -> Option<Self> {
        let spacing = match rule {
            LineRule::Auto => line.checked_sub(LINE_BASELINE_TWIPS)?,
            _ => line,
        };
        Some(LineSpacing { spacing, rule })
    }

    /// Value of `w:line`.
    pub fn line_value(&self) -> i64 {
        match self.rule {
            LineRule::Auto => self.spacing.saturating_add(LINE_BASELINE_TWIPS),
            _ => self.spacing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    pub num_id: u32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabStop {
    /// `left`, `center`, `right`, `decimal`, `bar`, `clear`.
    pub alignment: String,
    pub position: Length,
    pub leader: Option<String>,
}

/// Paragraph formatting. `None` everywhere means "inherit"; `name` refers to a
/// paragraph style and, when set, replaces all direct properties on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphStyle {
    pub name: Option<String>,
    pub alignment: Option<Alignment>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    pub line_spacing: Option<LineSpacing>,
    pub indent_left: Option<Length>,
    pub indent_right: Option<Length>,
    pub indent_first_line: Option<Length>,
    pub indent_hanging: Option<Length>,
    pub keep_next: Option<bool>,
    pub keep_lines: Option<bool>,
    pub page_break_before: Option<bool>,
    pub widow_control: Option<bool>,
    pub contextual_spacing: Option<bool>,
    pub bidi: Option<bool>,
    pub auto_hyphenation: Option<bool>,
    pub outline_level: Option<u8>,
    pub numbering: Option<NumberingRef>,
    pub borders: Option<BorderSet>,
    pub shading: Option<Shading>,
    pub frame: Option<FrameStyle>,
    pub tabs: Vec<TabStop>,
}

pub const PARAGRAPH_DECLS: &[Declaration] = &[
    Declaration::new("styleName", &["pStyle"], Encoding::Literal),
    Declaration::new("keepNext", &["keepNext"], Encoding::Toggle),
    Declaration::new("keepLines", &["keepLines"], Encoding::Toggle),
    Declaration::new("pageBreakBefore", &["pageBreakBefore"], Encoding::Toggle),
    Declaration::new("frame", &["framePr"], Encoding::Nested(super::frame::FRAME_DECLS)),
    Declaration::new("widowControl", &["widowControl"], Encoding::Toggle),
    Declaration::new("numId", &["numPr/numId"], Encoding::Integer),
    Declaration::new("numLevel", &["numPr/ilvl"], Encoding::Integer),
    Declaration::new("borders", &["pBdr"], Encoding::Nested(BORDER_SIDE_DECLS)),
    Declaration::new("shading", &["shd"], Encoding::Nested(SHADING_DECLS)),
    Declaration::new("autoHyphenation", &["suppressAutoHyphens"], Encoding::ExistsFalseInverted),
    Declaration::new("bidi", &["bidi"], Encoding::Toggle),
    Declaration::new("spaceBefore", &["spacing"], Encoding::Integer).attrs(&["before"]),
    Declaration::new("spaceAfter", &["spacing"], Encoding::Integer).attrs(&["after"]),
    Declaration::new("lineSpacing", &["spacing"], Encoding::Integer).attrs(&["line"]),
    Declaration::new("lineRule", &["spacing"], Encoding::Literal).attrs(&["lineRule"]),
    Declaration::new("indentLeft", &["ind"], Encoding::Integer).attrs(&["left", "start"]),
    Declaration::new("indentRight", &["ind"], Encoding::Integer).attrs(&["right", "end"]),
    Declaration::new("indentFirstLine", &["ind"], Encoding::Integer).attrs(&["firstLine"]),
    Declaration::new("indentHanging", &["ind"], Encoding::Integer).attrs(&["hanging"]),
    Declaration::new("contextualSpacing", &["contextualSpacing"], Encoding::Toggle),
    Declaration::new("alignment", &["jc"], Encoding::Literal),
    Declaration::new("outlineLevel", &["outlineLvl"], Encoding::Integer),
];

pub(crate) const PARAGRAPH_ACCESSORS: &[Accessor<ParagraphStyle>] = &[
    text!("styleName", name),
    flag!("keepNext", keep_next),
    flag!("keepLines", keep_lines),
    flag!("pageBreakBefore", page_break_before),
    Accessor {
        name: "frame",
        get: |s| {
            let bag = s.frame.as_ref()?.to_bag();
            (!bag.is_empty()).then_some(PropValue::Bag(bag))
        },
        set: |s, v| s.frame = v.as_bag().map(FrameStyle::from_bag),
    },
    flag!("widowControl", widow_control),
    Accessor {
        name: "numId",
        get: |s| s.numbering.map(|n| PropValue::Int(n.num_id as i64)),
        set: |s, v| {
            if let Some(num_id) = v.as_u32() {
                let level = s.numbering.map_or(0, |n| n.level);
                s.numbering = Some(NumberingRef { num_id, level });
            }
        },
    },
    Accessor {
        name: "numLevel",
        get: |s| s.numbering.map(|n| PropValue::Int(n.level as i64)),
        set: |s, v| {
            if let (Some(n), Some(level)) = (s.numbering.as_mut(), v.as_int()) {
                n.level = level.clamp(0, 8) as u8;
            }
        },
    },
    Accessor {
        name: "borders",
        get: |s| {
            let bag = s.borders.as_ref()?.to_bag();
            (!bag.is_empty()).then_some(PropValue::Bag(bag))
        },
        set: |s, v| s.borders = v.as_bag().map(BorderSet::from_bag),
    },
    Accessor {
        name: "shading",
        get: |s| s.shading.as_ref().map(|sh| PropValue::Bag(sh.to_bag())),
        set: |s, v| s.shading = v.as_bag().map(Shading::from_bag),
    },
    flag!("autoHyphenation", auto_hyphenation),
    flag!("bidi", bidi),
    twips!("spaceBefore", space_before),
    twips!("spaceAfter", space_after),
    Accessor {
        name: "lineSpacing",
        get: |s| s.line_spacing.map(|l| PropValue::Int(l.line_value())),
        set: |s, v| {
            let rule = s.line_spacing.map_or(LineRule::Auto, |l| l.rule);
            s.line_spacing = v.as_int().and_then(|line| {
                let spacing = LineSpacing::from_markup(line, rule);
                if spacing.is_none() {
                    log::warn!("line spacing {line} out of range, ignored");
                }
                spacing
            });
        },
    },
    Accessor {
        name: "lineRule",
        get: |s| s.line_spacing.map(|l| PropValue::Str(l.rule.token().to_string())),
        set: |s, v| {
            if let (Some(l), Some(token)) = (s.line_spacing, v.as_str()) {
                s.line_spacing =
                    LineSpacing::from_markup(l.line_value(), LineRule::from_token(token));
            }
        },
    },
    twips!("indentLeft", indent_left),
    twips!("indentRight", indent_right),
    twips!("indentFirstLine", indent_first_line),
    twips!("indentHanging", indent_hanging),
    flag!("contextualSpacing", contextual_spacing),
    Accessor {
        name: "alignment",
        get: |s| s.alignment.map(|a| PropValue::Str(a.token().to_string())),
        set: |s, v| s.alignment = v.as_str().and_then(Alignment::from_token),
    },
    Accessor {
        name: "outlineLevel",
        get: |s| s.outline_level.map(|l| PropValue::Int(l as i64)),
        set: |s, v| s.outline_level = v.as_int().map(|l| l.clamp(0, 9) as u8),
    },
];

impl ParagraphStyle {
    pub fn named(name: &str) -> Self {
        ParagraphStyle {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut style = ParagraphStyle::default();
        mapping::apply_bag(&mut style, bag, PARAGRAPH_ACCESSORS);
        style
    }

    /// Read a `w:pPr` element. Tab stops are read alongside the mapped properties.
    pub fn from_node(ppr: roxmltree::Node) -> Self {
        let mut style = ParagraphStyle::from_bag(&mapping::extract(ppr, PARAGRAPH_DECLS));
        style.tabs = read_tabs(ppr);
        style
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, PARAGRAPH_ACCESSORS)
    }

    /// True when the style carries nothing that would be written.
    pub fn is_empty(&self) -> bool {
        self.to_bag().is_empty() && self.tabs.is_empty()
    }
}

fn read_tabs(ppr: roxmltree::Node) -> Vec<TabStop> {
    let Some(tabs) = mapping::resolve_path(ppr, "tabs") else {
        return Vec::new();
    };
    tabs.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "tab")
        .filter_map(|n| {
            let pos = n.attribute((crate::docx::WML_NS, "pos"))?.parse::<i64>().ok()?;
            Some(TabStop {
                alignment: n
                    .attribute((crate::docx::WML_NS, "val"))
                    .unwrap_or("left")
                    .to_string(),
                position: Length::from_twips(pos),
                leader: n
                    .attribute((crate::docx::WML_NS, "leader"))
                    .map(str::to_string),
            })
        })
        .collect()
}
