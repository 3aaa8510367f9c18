use crate::error::Error;
use crate::model::{HeaderFooter, Node, Section};
use crate::style::{HeaderFooterRef, SectionStyle};

use super::{PartReader, RelKind, collect_block_nodes, is_wml, parse_part, wml};

impl PartReader<'_> {
    /// Walk `w:body`. A `w:sectPr` inside a paragraph's properties closes the
    /// section that paragraph ends; the body-level `w:sectPr` describes the last.
    pub(super) fn read_body(&self, body: roxmltree::Node) -> Result<Vec<Section>, Error> {
        let mut sections = Vec::new();
        let mut elements: Vec<Node> = Vec::new();
        let mut final_style = None;

        for node in collect_block_nodes(body) {
            if is_wml(node, "p") {
                elements.push(self.read_paragraph(node));
                if let Some(sect_pr) = wml(node, "pPr").and_then(|ppr| wml(ppr, "sectPr")) {
                    let style = SectionStyle::from_node(sect_pr);
                    sections.push(self.close_section(style, std::mem::take(&mut elements))?);
                }
            } else if is_wml(node, "tbl") {
                elements.push(Node::Table(self.read_table(node)));
            } else if is_wml(node, "sectPr") {
                final_style = Some(SectionStyle::from_node(node));
            }
        }

        if final_style.is_some() || !elements.is_empty() || sections.is_empty() {
            sections.push(self.close_section(final_style.unwrap_or_default(), elements)?);
        }
        Ok(sections)
    }

    fn close_section(&self, style: SectionStyle, elements: Vec<Node>) -> Result<Section, Error> {
        let mut headers = Vec::new();
        let mut footers = Vec::new();
        if self.options.load_headers_footers {
            for reference in &style.references {
                let Some(part) = self.read_header_footer(reference)? else {
                    continue;
                };
                if reference.is_footer {
                    footers.push(part);
                } else {
                    headers.push(part);
                }
            }
        }
        Ok(Section {
            style,
            elements,
            headers,
            footers,
        })
    }

    /// Resolve one header/footer reference and read the part it points to. An id
    /// that resolves to nothing, or to a part of the wrong kind, is skipped.
    fn read_header_footer(&self, reference: &HeaderFooterRef) -> Result<Option<HeaderFooter>, Error> {
        let expected = if reference.is_footer {
            RelKind::Footer
        } else {
            RelKind::Header
        };
        let rel_id = reference.rel_id.as_str();
        let Some(rel) = self.rels.get(rel_id) else {
            log::warn!("{}: section references missing relationship {rel_id}", self.part);
            return Ok(None);
        };
        if rel.kind != expected {
            log::warn!(
                "{}: relationship {rel_id} is {:?}, expected {expected:?}",
                self.part,
                rel.kind
            );
            return Ok(None);
        }
        let Some(part) = self.rels.resolved_target(rel_id) else {
            return Ok(None);
        };
        let Some(content) = self.package.part(&part) else {
            log::warn!("{}: {part} is referenced but missing", self.part);
            return Ok(None);
        };

        let xml = parse_part(&part, content)?;
        let reader = PartReader::new(self.package, self.ctx, self.options, &part)?;
        let elements = reader.read_blocks(xml.root_element());
        Ok(Some(HeaderFooter {
            ref_type: reference.ref_type,
            part,
            elements,
        }))
    }
}
