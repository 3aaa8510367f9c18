use std::sync::Arc;

use indexmap::IndexMap;

use crate::context::DocumentContext;
use crate::style::{
    CellStyle, FontStyle, HeaderFooterType, ParagraphStyle, RowStyle, SectionStyle, TableStyle,
};
use crate::units::Length;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Delete,
}

/// Tracked-change metadata from a `w:ins`/`w:del` wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedChange {
    pub kind: ChangeKind,
    pub author: Option<String>,
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: Option<FontStyle>,
    pub change: Option<TrackedChange>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    Url(String),
    Anchor(String),
}

/// A run that sat inside a `w:hyperlink`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hyperlink {
    pub target: LinkTarget,
    pub run: TextRun,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListItemRun {
    pub num_id: u32,
    pub level: u8,
    /// `w:numFmt` of the level, when the numbering definition is known.
    pub format: Option<String>,
    pub style: Option<ParagraphStyle>,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TitleContent {
    Text(String),
    Runs(Vec<Node>),
}

/// `Title` (depth 0) or `Heading<N>` (depth N) paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    pub depth: u8,
    pub style: Option<ParagraphStyle>,
    pub content: TitleContent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteKind {
    Footnote,
    Endnote,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteReference {
    pub kind: NoteKind,
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRef {
    pub rel_id: String,
    /// Package part name of the image.
    pub target: String,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub description: Option<String>,
}

/// An embedded OLE object (`w:object`).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRef {
    pub rel_id: String,
    pub target: String,
    pub prog_id: Option<String>,
    /// Part name of the preview image, when one is linked.
    pub preview: Option<String>,
}

/// Paragraph kept as literal text because it holds field instructions. Each field
/// appears as `{INSTRUCTION}` in place of its displayed result.
#[derive(Clone, Debug, PartialEq)]
pub struct PreservedText {
    pub text: String,
    pub font: Option<FontStyle>,
    pub paragraph: Option<ParagraphStyle>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub style: Option<CellStyle>,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub style: Option<RowStyle>,
    pub cells: Vec<Cell>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub style: Option<TableStyle>,
    pub grid: Vec<Length>,
    pub rows: Vec<Row>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Paragraph(Paragraph),
    Text(TextRun),
    Hyperlink(Hyperlink),
    ListItem(ListItemRun),
    Table(Table),
    Title(Title),
    NoteReference(NoteReference),
    Image(ImageRef),
    Object(ObjectRef),
    Field(PreservedText),
    TextBreak(Option<ParagraphStyle>),
    PageBreak,
}

impl Node {
    /// Concatenated text of this node and its descendants. Breaks contribute
    /// newlines; tables contribute one line per paragraph.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Paragraph(p) => p.children.iter().for_each(|c| c.collect_text(out)),
            Node::ListItem(li) => li.children.iter().for_each(|c| c.collect_text(out)),
            Node::Text(run) => out.push_str(&run.text),
            Node::Hyperlink(link) => out.push_str(&link.run.text),
            Node::Title(t) => match &t.content {
                TitleContent::Text(s) => out.push_str(s),
                TitleContent::Runs(runs) => runs.iter().for_each(|c| c.collect_text(out)),
            },
            Node::Field(f) => out.push_str(&f.text),
            Node::Table(table) => {
                for cell in table.rows.iter().flat_map(|r| &r.cells) {
                    for child in &cell.children {
                        child.collect_text(out);
                        out.push('\n');
                    }
                }
            }
            Node::TextBreak(_) | Node::PageBreak => out.push('\n'),
            Node::NoteReference(_) | Node::Image(_) | Node::Object(_) => {}
        }
    }
}

pub struct HeaderFooter {
    pub ref_type: HeaderFooterType,
    pub part: String,
    pub elements: Vec<Node>,
}

pub struct Section {
    pub style: SectionStyle,
    pub elements: Vec<Node>,
    pub headers: Vec<HeaderFooter>,
    pub footers: Vec<HeaderFooter>,
}

pub struct Note {
    pub id: i64,
    pub kind: NoteKind,
    pub elements: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub last_modified_by: Option<String>,
    pub revision: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub application: Option<String>,
    pub company: Option<String>,
    pub manager: Option<String>,
    pub custom: IndexMap<String, String>,
}

pub struct Document {
    pub sections: Vec<Section>,
    pub footnotes: Vec<Note>,
    pub endnotes: Vec<Note>,
    pub properties: DocumentProperties,
    pub context: Arc<DocumentContext>,
}

impl Document {
    /// Body elements of every section in order.
    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.sections.iter().flat_map(|s| s.elements.iter())
    }

    pub fn footnote(&self, id: i64) -> Option<&Note> {
        self.footnotes.iter().find(|n| n.id == id)
    }

    pub fn endnote(&self, id: i64) -> Option<&Note> {
        self.endnotes.iter().find(|n| n.id == id)
    }
}
