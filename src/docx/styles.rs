use indexmap::IndexMap;

use crate::error::Error;
use crate::mapping::{self, Declaration, Encoding};
use crate::style::{FontStyle, ParagraphStyle, TableStyle};

use super::{WML_NS, is_wml, wml};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKind {
    Paragraph,
    Character,
    Table,
    Numbering,
}

impl StyleKind {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "paragraph" => Some(StyleKind::Paragraph),
            "character" => Some(StyleKind::Character),
            "table" => Some(StyleKind::Table),
            "numbering" => Some(StyleKind::Numbering),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleDefinition {
    pub id: String,
    pub kind: StyleKind,
    /// Display name (`w:name`), e.g. `heading 1` for id `Heading1`.
    pub name: Option<String>,
    pub based_on: Option<String>,
    pub next: Option<String>,
    pub is_default: bool,
    pub quick_format: bool,
    pub semi_hidden: bool,
    pub ui_priority: Option<i64>,
    pub paragraph: Option<ParagraphStyle>,
    pub font: Option<FontStyle>,
    pub table: Option<TableStyle>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocDefaults {
    pub paragraph: ParagraphStyle,
    pub font: FontStyle,
}

const STYLE_DECLS: &[Declaration] = &[
    Declaration::new("name", &["name"], Encoding::Literal),
    Declaration::new("basedOn", &["basedOn"], Encoding::Literal),
    Declaration::new("next", &["next"], Encoding::Literal),
    Declaration::new("quickFormat", &["qFormat"], Encoding::Exists),
    Declaration::new("semiHidden", &["semiHidden"], Encoding::Exists),
    Declaration::new("uiPriority", &["uiPriority"], Encoding::Integer),
];

/// Styles of `styles.xml`, keyed by style id in document order.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    pub defaults: DocDefaults,
    styles: IndexMap<String, StyleDefinition>,
}

impl StyleRegistry {
    pub fn parse(part: &str, xml_content: &str) -> Result<Self, Error> {
        let xml = roxmltree::Document::parse(xml_content).map_err(|e| Error::xml(part, e))?;
        let root = xml.root_element();

        let mut defaults = DocDefaults::default();
        if let Some(doc_defaults) = wml(root, "docDefaults") {
            if let Some(rpr) = wml(doc_defaults, "rPrDefault").and_then(|n| wml(n, "rPr")) {
                defaults.font = FontStyle::from_node(rpr);
            }
            if let Some(ppr) = wml(doc_defaults, "pPrDefault").and_then(|n| wml(n, "pPr")) {
                defaults.paragraph = ParagraphStyle::from_node(ppr);
            }
        }

        let mut styles = IndexMap::new();
        for style_node in root.children().filter(|n| is_wml(*n, "style")) {
            let Some(id) = style_node.attribute((WML_NS, "styleId")) else {
                continue;
            };
            let Some(kind) = style_node
                .attribute((WML_NS, "type"))
                .and_then(StyleKind::from_token)
            else {
                log::debug!("{part}: style {id} has no usable type, skipped");
                continue;
            };
            let meta = mapping::extract(style_node, STYLE_DECLS);
            let definition = StyleDefinition {
                id: id.to_string(),
                kind,
                name: meta.str("name").map(str::to_string),
                based_on: meta.str("basedOn").map(str::to_string),
                next: meta.str("next").map(str::to_string),
                is_default: matches!(
                    style_node.attribute((WML_NS, "default")),
                    Some("1" | "true" | "on")
                ),
                quick_format: meta.bool("quickFormat").unwrap_or(false),
                semi_hidden: meta.bool("semiHidden").unwrap_or(false),
                ui_priority: meta.int("uiPriority"),
                paragraph: wml(style_node, "pPr").map(ParagraphStyle::from_node),
                font: wml(style_node, "rPr").map(FontStyle::from_node),
                table: wml(style_node, "tblPr").map(TableStyle::from_node),
            };
            styles.insert(id.to_string(), definition);
        }
        log::debug!("{part}: {} styles", styles.len());
        Ok(StyleRegistry { defaults, styles })
    }

    pub fn get(&self, id: &str) -> Option<&StyleDefinition> {
        self.styles.get(id)
    }

    /// Look up by display name, case-insensitively (`heading 1`).
    pub fn by_name(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.values().find(|s| {
            s.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }

    pub fn default_for(&self, kind: StyleKind) -> Option<&StyleDefinition> {
        self.styles.values().find(|s| s.kind == kind && s.is_default)
    }

    /// The style followed by its `basedOn` ancestors, nearest first. Stops at a
    /// missing parent or a cycle.
    pub fn based_on_chain(&self, id: &str) -> Vec<&StyleDefinition> {
        let mut chain: Vec<&StyleDefinition> = Vec::new();
        let mut current = self.get(id);
        while let Some(style) = current {
            if chain.iter().any(|s| s.id == style.id) {
                log::warn!("style inheritance cycle through {}", style.id);
                break;
            }
            chain.push(style);
            current = style.based_on.as_deref().and_then(|p| self.get(p));
        }
        chain
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.values()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
