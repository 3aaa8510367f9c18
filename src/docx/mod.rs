//! Read direction: WordprocessingML parts into the document tree.

mod notes;
mod numbering;
mod paragraph;
mod properties;
mod rels;
mod section;
mod styles;
pub mod symbols;
mod table;

use std::sync::Arc;
use std::time::Instant;

use crate::context::DocumentContext;
use crate::error::Error;
use crate::model::{Document, Node, NoteKind};
use crate::package::Package;

pub use numbering::{AbstractNumbering, LevelOverride, Numbering, NumberingInstance, NumberingLevel};
pub use rels::{RelKind, Relationship, Relationships, TargetMode};
pub use styles::{DocDefaults, StyleDefinition, StyleKind, StyleRegistry};

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const WPD_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
pub const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const VML_NS: &str = "urn:schemas-microsoft-com:vml";
pub const OFFICE_NS: &str = "urn:schemas-microsoft-com:office:office";

const FALLBACK_MAIN_PART: &str = "word/document.xml";

/// What to load besides the main body.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Keep `w:del` runs, tagged as deletions.
    pub include_deleted_text: bool,
    pub load_headers_footers: bool,
    pub load_notes: bool,
    pub load_properties: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            include_deleted_text: true,
            load_headers_footers: true,
            load_notes: true,
            load_properties: true,
        }
    }
}

impl ReadOptions {
    pub fn with_deleted_text(mut self, include: bool) -> Self {
        self.include_deleted_text = include;
        self
    }

    pub fn with_headers_footers(mut self, load: bool) -> Self {
        self.load_headers_footers = load;
        self
    }

    pub fn with_notes(mut self, load: bool) -> Self {
        self.load_notes = load;
        self
    }

    pub fn with_properties(mut self, load: bool) -> Self {
        self.load_properties = load;
        self
    }
}

pub(crate) fn is_wml(node: roxmltree::Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

pub(crate) fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children().find(|n| is_wml(*n, name))
}

pub(crate) fn wml_attr<'a>(node: roxmltree::Node<'a, 'a>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

/// Flatten SDT and custom XML wrappers: descend into their content and collect
/// the effective block children.
fn collect_block_nodes<'a>(parent: roxmltree::Node<'a, 'a>) -> Vec<roxmltree::Node<'a, 'a>> {
    let mut nodes = Vec::new();
    for child in parent.children().filter(|n| n.is_element()) {
        if is_wml(child, "sdt") {
            if let Some(content) = wml(child, "sdtContent") {
                nodes.extend(collect_block_nodes(content));
            }
        } else if is_wml(child, "customXml") {
            nodes.extend(collect_block_nodes(child));
        } else {
            nodes.push(child);
        }
    }
    nodes
}

fn parse_part<'a>(part: &str, content: &'a str) -> Result<roxmltree::Document<'a>, Error> {
    roxmltree::Document::parse(content).map_err(|e| Error::xml(part, e))
}

/// Walker state for one part. Relationship ids are scoped to the part, so the
/// body, each header/footer and each notes part get their own reader.
struct PartReader<'a> {
    package: &'a Package,
    ctx: &'a DocumentContext,
    options: &'a ReadOptions,
    part: String,
    rels: Relationships,
}

impl<'a> PartReader<'a> {
    fn new(
        package: &'a Package,
        ctx: &'a DocumentContext,
        options: &'a ReadOptions,
        part: &str,
    ) -> Result<Self, Error> {
        Ok(PartReader {
            package,
            ctx,
            options,
            part: part.to_string(),
            rels: Relationships::for_part(package, part)?,
        })
    }

    /// Paragraphs and tables below `parent`, in document order.
    fn read_blocks(&self, parent: roxmltree::Node) -> Vec<Node> {
        let mut elements = Vec::new();
        for node in collect_block_nodes(parent) {
            if is_wml(node, "p") {
                elements.push(self.read_paragraph(node));
            } else if is_wml(node, "tbl") {
                elements.push(Node::Table(self.read_table(node)));
            }
        }
        elements
    }
}

fn main_part_name(package: &Package) -> Result<String, Error> {
    let package_rels = Relationships::for_part(package, "")?;
    let main = package_rels
        .first_of_kind(&RelKind::OfficeDocument)
        .and_then(|r| package_rels.resolved_target(&r.id))
        .filter(|name| package.contains(name));
    match main {
        Some(name) => Ok(name),
        None if package.contains(FALLBACK_MAIN_PART) => Ok(FALLBACK_MAIN_PART.to_string()),
        None => Err(Error::MissingPart(FALLBACK_MAIN_PART.to_string())),
    }
}

fn load_context(package: &Package, main_rels: &Relationships) -> Result<DocumentContext, Error> {
    let part_of = |kind: RelKind| {
        main_rels
            .first_of_kind(&kind)
            .and_then(|r| main_rels.resolved_target(&r.id))
    };

    let styles = match part_of(RelKind::Styles) {
        Some(name) => match package.part(&name) {
            Some(content) => StyleRegistry::parse(&name, content)?,
            None => {
                log::warn!("styles part {name} is referenced but missing");
                StyleRegistry::default()
            }
        },
        None => StyleRegistry::default(),
    };
    let numbering = match part_of(RelKind::Numbering) {
        Some(name) => match package.part(&name) {
            Some(content) => Numbering::parse(&name, content)?,
            None => {
                log::warn!("numbering part {name} is referenced but missing");
                Numbering::default()
            }
        },
        None => Numbering::default(),
    };
    Ok(DocumentContext::new(styles, numbering))
}

pub fn read_document(package: &Package) -> Result<Document, Error> {
    read_document_with(package, &ReadOptions::default())
}

pub fn read_document_with(package: &Package, options: &ReadOptions) -> Result<Document, Error> {
    let t0 = Instant::now();
    let main_part = main_part_name(package)?;
    let content = package
        .part(&main_part)
        .ok_or_else(|| Error::MissingPart(main_part.clone()))?;
    let xml = parse_part(&main_part, content)?;

    let main_rels = Relationships::for_part(package, &main_part)?;
    let ctx = Arc::new(load_context(package, &main_rels)?);
    let t_context = t0.elapsed();

    let body = wml(xml.root_element(), "body")
        .ok_or_else(|| Error::InvalidDocx(format!("{main_part} has no w:body")))?;
    let reader = PartReader {
        package,
        ctx: &ctx,
        options,
        part: main_part.clone(),
        rels: main_rels,
    };
    let sections = reader.read_body(body)?;
    let t_body = t0.elapsed();

    let (footnotes, endnotes) = if options.load_notes {
        (
            reader.read_notes(NoteKind::Footnote)?,
            reader.read_notes(NoteKind::Endnote)?,
        )
    } else {
        (Vec::new(), Vec::new())
    };
    let properties = if options.load_properties {
        properties::read_properties(package)?
    } else {
        Default::default()
    };

    log::debug!(
        "{main_part}: {} sections, {} footnotes, {} endnotes",
        sections.len(),
        footnotes.len(),
        endnotes.len()
    );
    log::debug!(
        "read_document: context={:.1}ms body={:.1}ms total={:.1}ms",
        t_context.as_secs_f64() * 1000.0,
        (t_body - t_context).as_secs_f64() * 1000.0,
        t0.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(Document {
        sections,
        footnotes,
        endnotes,
        properties,
        context: ctx,
    })
}
