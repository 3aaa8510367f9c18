use crate::error::Error;
use crate::model::{Note, NoteKind};

use super::{PartReader, RelKind, WML_NS, is_wml, parse_part};

impl PartReader<'_> {
    /// Footnotes or endnotes of the document, in part order. Separator notes are
    /// layout artifacts and are skipped.
    pub(super) fn read_notes(&self, kind: NoteKind) -> Result<Vec<Note>, Error> {
        let (rel_kind, element) = match kind {
            NoteKind::Footnote => (RelKind::Footnotes, "footnote"),
            NoteKind::Endnote => (RelKind::Endnotes, "endnote"),
        };
        let Some(part) = self
            .rels
            .first_of_kind(&rel_kind)
            .and_then(|r| self.rels.resolved_target(&r.id))
        else {
            return Ok(Vec::new());
        };
        let Some(content) = self.package.part(&part) else {
            log::warn!("{}: {part} is referenced but missing", self.part);
            return Ok(Vec::new());
        };

        let xml = parse_part(&part, content)?;
        let reader = PartReader::new(self.package, self.ctx, self.options, &part)?;
        let mut notes = Vec::new();
        for node in xml.root_element().children().filter(|n| is_wml(*n, element)) {
            if matches!(
                node.attribute((WML_NS, "type")),
                Some("separator" | "continuationSeparator" | "continuationNotice")
            ) {
                continue;
            }
            let Some(id) = node
                .attribute((WML_NS, "id"))
                .and_then(|v| v.parse::<i64>().ok())
            else {
                log::debug!("{part}: {element} without a numeric id skipped");
                continue;
            };
            notes.push(Note {
                id,
                kind,
                elements: reader.read_blocks(node),
            });
        }
        Ok(notes)
    }
}
