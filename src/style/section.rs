use crate::mapping::{self, Accessor, Declaration, Encoding, PropValue, PropertyBag};
use crate::units::Length;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFooterType {
    Default,
    First,
    Even,
}

impl HeaderFooterType {
    pub fn from_token(token: &str) -> Self {
        match token {
            "first" => HeaderFooterType::First,
            "even" => HeaderFooterType::Even,
            _ => HeaderFooterType::Default,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            HeaderFooterType::Default => "default",
            HeaderFooterType::First => "first",
            HeaderFooterType::Even => "even",
        }
    }
}

/// A `w:headerReference`/`w:footerReference` of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFooterRef {
    pub is_footer: bool,
    pub ref_type: HeaderFooterType,
    pub rel_id: String,
}

/// Page setup of one section. Lengths are twips in markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionStyle {
    pub page_width: Option<Length>,
    pub page_height: Option<Length>,
    pub orientation: Option<Orientation>,
    pub margin_top: Option<Length>,
    pub margin_right: Option<Length>,
    pub margin_bottom: Option<Length>,
    pub margin_left: Option<Length>,
    pub margin_header: Option<Length>,
    pub margin_footer: Option<Length>,
    pub gutter: Option<Length>,
    pub column_count: Option<u32>,
    pub column_space: Option<Length>,
    /// `nextPage`, `continuous`, `evenPage`, `oddPage`, `nextColumn`.
    pub break_type: Option<String>,
    pub title_page: Option<bool>,
    pub page_number_start: Option<u32>,
    pub references: Vec<HeaderFooterRef>,
}

pub const SECTION_DECLS: &[Declaration] = &[
    Declaration::new("breakType", &["type"], Encoding::Literal),
    Declaration::new("pageWidth", &["pgSz"], Encoding::Integer).attrs(&["w"]),
    Declaration::new("pageHeight", &["pgSz"], Encoding::Integer).attrs(&["h"]),
    Declaration::new("landscape", &["pgSz"], Encoding::EqualsExpected("landscape"))
        .attrs(&["orient"]),
    Declaration::new("marginTop", &["pgMar"], Encoding::Integer).attrs(&["top"]),
    Declaration::new("marginRight", &["pgMar"], Encoding::Integer).attrs(&["right"]),
    Declaration::new("marginBottom", &["pgMar"], Encoding::Integer).attrs(&["bottom"]),
    Declaration::new("marginLeft", &["pgMar"], Encoding::Integer).attrs(&["left"]),
    Declaration::new("marginHeader", &["pgMar"], Encoding::Integer).attrs(&["header"]),
    Declaration::new("marginFooter", &["pgMar"], Encoding::Integer).attrs(&["footer"]),
    Declaration::new("gutter", &["pgMar"], Encoding::Integer).attrs(&["gutter"]),
    Declaration::new("pageNumberStart", &["pgNumType"], Encoding::Integer).attrs(&["start"]),
    Declaration::new("columnCount", &["cols"], Encoding::Integer).attrs(&["num"]),
    Declaration::new("columnSpace", &["cols"], Encoding::Integer).attrs(&["space"]),
    Declaration::new("titlePage", &["titlePg"], Encoding::Toggle),
];

pub(crate) const SECTION_ACCESSORS: &[Accessor<SectionStyle>] = &[
    text!("breakType", break_type),
    twips!("pageWidth", page_width),
    twips!("pageHeight", page_height),
    Accessor {
        name: "landscape",
        // `w:pgSz` without `w:orient` reads back as portrait.
        get: |s| match s.orientation {
            Some(o) => Some(PropValue::Bool(o == Orientation::Landscape)),
            None if s.page_width.is_some() || s.page_height.is_some() => {
                Some(PropValue::Bool(false))
            }
            None => None,
        },
        set: |s, v| {
            s.orientation = v.as_bool().map(|landscape| {
                if landscape {
                    Orientation::Landscape
                } else {
                    Orientation::Portrait
                }
            })
        },
    },
    twips!("marginTop", margin_top),
    twips!("marginRight", margin_right),
    twips!("marginBottom", margin_bottom),
    twips!("marginLeft", margin_left),
    twips!("marginHeader", margin_header),
    twips!("marginFooter", margin_footer),
    twips!("gutter", gutter),
    Accessor {
        name: "pageNumberStart",
        get: |s| s.page_number_start.map(|n| PropValue::Int(n as i64)),
        set: |s, v| s.page_number_start = v.as_u32(),
    },
    Accessor {
        name: "columnCount",
        get: |s| s.column_count.map(|n| PropValue::Int(n as i64)),
        set: |s, v| s.column_count = v.as_u32().map(|n| n.max(1)),
    },
    twips!("columnSpace", column_space),
    flag!("titlePage", title_page),
];

impl SectionStyle {
    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut style = SectionStyle::default();
        mapping::apply_bag(&mut style, bag, SECTION_ACCESSORS);
        style
    }

    /// Read a `w:sectPr` element, including its header/footer references.
    pub fn from_node(sect_pr: roxmltree::Node) -> Self {
        let mut style = SectionStyle::from_bag(&mapping::extract(sect_pr, SECTION_DECLS));
        for child in sect_pr.children().filter(|n| n.is_element()) {
            let is_footer = match child.tag_name().name() {
                "headerReference" => false,
                "footerReference" => true,
                _ => continue,
            };
            let Some(rel_id) = child.attribute((crate::docx::REL_NS, "id")) else {
                continue;
            };
            style.references.push(HeaderFooterRef {
                is_footer,
                ref_type: HeaderFooterType::from_token(
                    child.attribute((crate::docx::WML_NS, "type")).unwrap_or("default"),
                ),
                rel_id: rel_id.to_string(),
            });
        }
        style
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, SECTION_ACCESSORS)
    }
}
