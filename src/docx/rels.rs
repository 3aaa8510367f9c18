use std::collections::HashMap;

use crate::error::Error;
use crate::package::{Package, rels_path_for, resolve_target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelKind {
    OfficeDocument,
    Styles,
    Numbering,
    Header,
    Footer,
    Footnotes,
    Endnotes,
    CoreProperties,
    ExtendedProperties,
    CustomProperties,
    Hyperlink,
    Image,
    OleObject,
    Theme,
    Settings,
    FontTable,
    Other(String),
}

const KIND_SUFFIXES: &[(&str, RelKind)] = &[
    ("/officeDocument", RelKind::OfficeDocument),
    ("/styles", RelKind::Styles),
    ("/numbering", RelKind::Numbering),
    ("/header", RelKind::Header),
    ("/footer", RelKind::Footer),
    ("/footnotes", RelKind::Footnotes),
    ("/endnotes", RelKind::Endnotes),
    ("/core-properties", RelKind::CoreProperties),
    ("/extended-properties", RelKind::ExtendedProperties),
    ("/custom-properties", RelKind::CustomProperties),
    ("/hyperlink", RelKind::Hyperlink),
    ("/image", RelKind::Image),
    ("/oleObject", RelKind::OleObject),
    ("/theme", RelKind::Theme),
    ("/settings", RelKind::Settings),
    ("/fontTable", RelKind::FontTable),
];

impl RelKind {
    /// Classify a relationship type URI by its final path segment.
    pub fn from_type_uri(uri: &str) -> Self {
        KIND_SUFFIXES
            .iter()
            .find(|(suffix, _)| uri.ends_with(suffix))
            .map(|(_, kind)| kind.clone())
            .unwrap_or_else(|| RelKind::Other(uri.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetMode {
    #[default]
    Internal,
    External,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub kind: RelKind,
    pub target: String,
    pub mode: TargetMode,
}

/// Relationships of one part, keyed by id. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    source: String,
    by_id: HashMap<String, Relationship>,
}

impl Relationships {
    pub fn parse(source_part: &str, xml_content: &str) -> Result<Self, Error> {
        let rels_part = rels_path_for(source_part);
        let xml = roxmltree::Document::parse(xml_content).map_err(|e| Error::xml(&rels_part, e))?;
        let mut by_id = HashMap::new();
        for node in xml.root_element().children() {
            if node.tag_name().name() != "Relationship" {
                continue;
            }
            let (Some(id), Some(target)) = (node.attribute("Id"), node.attribute("Target")) else {
                log::debug!("{rels_part}: relationship without Id or Target skipped");
                continue;
            };
            let mode = match node.attribute("TargetMode") {
                Some("External") => TargetMode::External,
                _ => TargetMode::Internal,
            };
            let kind = RelKind::from_type_uri(node.attribute("Type").unwrap_or(""));
            by_id.insert(
                id.to_string(),
                Relationship {
                    id: id.to_string(),
                    kind,
                    target: target.to_string(),
                    mode,
                },
            );
        }
        Ok(Relationships {
            source: source_part.to_string(),
            by_id,
        })
    }

    /// Load the companion `.rels` of `source_part`. A part without one has an
    /// empty table.
    pub fn for_part(package: &Package, source_part: &str) -> Result<Self, Error> {
        match package.part(&rels_path_for(source_part)) {
            Some(content) => Relationships::parse(source_part, content),
            None => Ok(Relationships {
                source: source_part.to_string(),
                by_id: HashMap::new(),
            }),
        }
    }

    pub fn source_part(&self) -> &str {
        &self.source
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    pub fn target(&self, id: &str) -> Option<&str> {
        self.get(id).map(|r| r.target.as_str())
    }

    /// Target as a package part name, or the raw URI for external targets.
    pub fn resolved_target(&self, id: &str) -> Option<String> {
        let rel = self.get(id)?;
        Some(match rel.mode {
            TargetMode::External => rel.target.clone(),
            TargetMode::Internal => resolve_target(&self.source, &rel.target),
        })
    }

    /// First relationship of the given kind, for parts referenced once per source
    /// (styles, numbering, notes).
    pub fn first_of_kind(&self, kind: &RelKind) -> Option<&Relationship> {
        let mut matches: Vec<&Relationship> =
            self.by_id.values().filter(|r| &r.kind == kind).collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches.into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
