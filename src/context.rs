use crate::docx::{Numbering, StyleRegistry};

/// Per-document lookup tables consulted while walking a document: the style
/// registry and the numbering definitions. Built once per load, then shared
/// read-only (usually behind an `Arc`) with every part reader.
#[derive(Clone, Debug, Default)]
pub struct DocumentContext {
    pub styles: StyleRegistry,
    pub numbering: Numbering,
}

impl DocumentContext {
    pub fn new(styles: StyleRegistry, numbering: Numbering) -> Self {
        DocumentContext { styles, numbering }
    }
}
