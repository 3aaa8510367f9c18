use std::collections::HashMap;

use crate::error::Error;
use crate::mapping::{self, Declaration, Encoding, PropertyBag};
use crate::units::Length;

use super::{WML_NS, is_wml, wml, wml_attr};

#[derive(Clone, Debug, PartialEq)]
pub struct NumberingLevel {
    pub level: u8,
    pub start: u32,
    /// `decimal`, `bullet`, `lowerRoman`, ...
    pub format: String,
    /// Label template such as `%1.%2.`
    pub text: String,
    /// `tab`, `space` or `nothing`.
    pub suffix: String,
    pub justification: Option<String>,
    pub indent_left: Option<Length>,
    pub indent_hanging: Option<Length>,
    pub paragraph_style: Option<String>,
}

const LEVEL_DECLS: &[Declaration] = &[
    Declaration::new("start", &["start"], Encoding::Integer),
    Declaration::new("format", &["numFmt"], Encoding::Literal),
    Declaration::new("text", &["lvlText"], Encoding::Literal),
    Declaration::new("suffix", &["suff"], Encoding::Literal),
    Declaration::new("justification", &["lvlJc"], Encoding::Literal),
    Declaration::new("paragraphStyle", &["pStyle"], Encoding::Literal),
    Declaration::new("indentLeft", &["pPr/ind"], Encoding::Integer).attrs(&["left", "start"]),
    Declaration::new("indentHanging", &["pPr/ind"], Encoding::Integer).attrs(&["hanging"]),
];

impl NumberingLevel {
    fn from_bag(level: u8, bag: &PropertyBag) -> Self {
        NumberingLevel {
            level,
            start: bag.u32("start").unwrap_or(1),
            format: bag.str("format").unwrap_or("decimal").to_string(),
            text: bag.str("text").unwrap_or("").to_string(),
            suffix: bag.str("suffix").unwrap_or("tab").to_string(),
            justification: bag.str("justification").map(str::to_string),
            indent_left: bag.int("indentLeft").map(Length::from_twips),
            indent_hanging: bag.int("indentHanging").map(Length::from_twips),
            paragraph_style: bag.str("paragraphStyle").map(str::to_string),
        }
    }

    fn parse(lvl: roxmltree::Node) -> Option<Self> {
        let ilvl = lvl
            .attribute((WML_NS, "ilvl"))
            .and_then(|v| v.parse::<u8>().ok())
            .filter(|l| *l <= 8)?;
        Some(NumberingLevel::from_bag(ilvl, &mapping::extract(lvl, LEVEL_DECLS)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AbstractNumbering {
    pub id: String,
    pub levels: Vec<NumberingLevel>,
}

impl AbstractNumbering {
    pub fn level(&self, ilvl: u8) -> Option<&NumberingLevel> {
        self.levels.iter().find(|l| l.level == ilvl)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelOverride {
    pub start: Option<u32>,
    pub level: Option<NumberingLevel>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberingInstance {
    pub num_id: u32,
    pub abstract_id: String,
    pub overrides: HashMap<u8, LevelOverride>,
}

/// Definitions of `numbering.xml`.
#[derive(Clone, Debug, Default)]
pub struct Numbering {
    abstracts: HashMap<String, AbstractNumbering>,
    instances: HashMap<u32, NumberingInstance>,
}

impl Numbering {
    pub fn parse(part: &str, xml_content: &str) -> Result<Self, Error> {
        let xml = roxmltree::Document::parse(xml_content).map_err(|e| Error::xml(part, e))?;
        let mut abstracts = HashMap::new();
        let mut instances = HashMap::new();

        for node in xml.root_element().children().filter(|n| n.is_element()) {
            if is_wml(node, "abstractNum") {
                let Some(id) = node.attribute((WML_NS, "abstractNumId")) else {
                    continue;
                };
                let levels = node
                    .children()
                    .filter(|n| is_wml(*n, "lvl"))
                    .filter_map(NumberingLevel::parse)
                    .collect();
                abstracts.insert(
                    id.to_string(),
                    AbstractNumbering {
                        id: id.to_string(),
                        levels,
                    },
                );
            } else if is_wml(node, "num") {
                let Some(num_id) = node
                    .attribute((WML_NS, "numId"))
                    .and_then(|v| v.parse::<u32>().ok())
                else {
                    continue;
                };
                let Some(abstract_id) = wml_attr(node, "abstractNumId") else {
                    continue;
                };
                let mut overrides = HashMap::new();
                for ov in node.children().filter(|n| is_wml(*n, "lvlOverride")) {
                    let Some(ilvl) = ov
                        .attribute((WML_NS, "ilvl"))
                        .and_then(|v| v.parse::<u8>().ok())
                    else {
                        continue;
                    };
                    overrides.insert(
                        ilvl,
                        LevelOverride {
                            start: wml_attr(ov, "startOverride")
                                .and_then(|v| v.parse::<u32>().ok()),
                            level: wml(ov, "lvl").and_then(NumberingLevel::parse),
                        },
                    );
                }
                instances.insert(
                    num_id,
                    NumberingInstance {
                        num_id,
                        abstract_id: abstract_id.to_string(),
                        overrides,
                    },
                );
            }
        }

        log::debug!(
            "{part}: {} abstract definitions, {} instances",
            abstracts.len(),
            instances.len()
        );
        Ok(Numbering {
            abstracts,
            instances,
        })
    }

    pub fn instance(&self, num_id: u32) -> Option<&NumberingInstance> {
        self.instances.get(&num_id)
    }

    pub fn abstract_definition(&self, id: &str) -> Option<&AbstractNumbering> {
        self.abstracts.get(id)
    }

    /// Effective level `ilvl` of instance `num_id`, with overrides applied.
    pub fn level(&self, num_id: u32, ilvl: u8) -> Option<NumberingLevel> {
        let instance = self.instance(num_id)?;
        let ov = instance.overrides.get(&ilvl);
        let mut level = match ov.and_then(|o| o.level.clone()) {
            Some(replacement) => replacement,
            None => self
                .abstract_definition(&instance.abstract_id)?
                .level(ilvl)?
                .clone(),
        };
        if let Some(start) = ov.and_then(|o| o.start) {
            level.start = start;
        }
        Some(level)
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
