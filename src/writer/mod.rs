//! Write direction: style value objects to WordprocessingML fragments.
//!
//! Each writer emits exactly the markup the matching declaration table reads
//! back, so `write` followed by extraction reproduces the style's property bag.
//! Fragments use the `w:` prefix and carry no namespace declarations.

mod border;
mod font;
mod frame;
mod paragraph;
mod section;
mod table;

use std::fmt::Display;

use crate::color::Color;
use crate::style::{
    BorderSet, CellStyle, FontStyle, FrameStyle, ParagraphStyle, RowStyle, SectionStyle, Shading,
    TableStyle, width_parts,
};
use crate::units::Length;

pub use border::{write_borders, write_shading};
pub use font::write_font_style;
pub use frame::{vml_style, write_frame, write_vml_wrap};
pub use paragraph::write_paragraph_style;
pub use section::write_section_style;
pub use table::{write_cell_style, write_row_style, write_table_style};

/// Every style writer, dispatched by kind.
#[derive(Debug, Clone, Copy)]
pub enum StyleWriterKind<'a> {
    Paragraph(&'a ParagraphStyle),
    Font(&'a FontStyle),
    Table(&'a TableStyle),
    Row(&'a RowStyle),
    Cell(&'a CellStyle),
    Section(&'a SectionStyle),
    Frame(&'a FrameStyle),
    /// A border block under the given container element (`pBdr`, `tcBorders`, ...).
    Borders(&'static str, &'a BorderSet),
    Shading(&'a Shading),
}

impl StyleWriterKind<'_> {
    pub fn write(&self, out: &mut String) {
        match *self {
            StyleWriterKind::Paragraph(style) => write_paragraph_style(out, style),
            StyleWriterKind::Font(style) => write_font_style(out, style),
            StyleWriterKind::Table(style) => write_table_style(out, style),
            StyleWriterKind::Row(style) => write_row_style(out, style),
            StyleWriterKind::Cell(style) => write_cell_style(out, style),
            StyleWriterKind::Section(style) => write_section_style(out, style),
            StyleWriterKind::Frame(style) => write_frame(out, style),
            StyleWriterKind::Borders(tag, borders) => write_borders(out, tag, borders),
            StyleWriterKind::Shading(shading) => write_shading(out, shading),
        }
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// `w:color`/`w:fill` token: hex or symbolic name, `auto` when unset.
pub(crate) fn color_value(color: &Color) -> String {
    color.to_hex_or_name().unwrap_or_else(|| "auto".to_string())
}

/// Empty `w:` element assembled attribute by attribute.
pub(crate) struct Element {
    tag: &'static str,
    attrs: String,
}

impl Element {
    pub(crate) fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: String::new(),
        }
    }

    pub(crate) fn attr(mut self, name: &str, value: impl Display) -> Self {
        let value = escape_xml(&value.to_string());
        self.attrs.push_str(&format!(r#" w:{name}="{value}""#));
        self
    }

    pub(crate) fn opt(self, name: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    pub(crate) fn has_attrs(&self) -> bool {
        !self.attrs.is_empty()
    }

    pub(crate) fn write(self, out: &mut String) {
        out.push_str(&format!("<w:{}{}/>", self.tag, self.attrs));
    }
}

/// `<w:tag w:val="..."/>`
pub(crate) fn write_val(out: &mut String, tag: &'static str, value: impl Display) {
    Element::new(tag).attr("val", value).write(out);
}

pub(crate) fn write_opt_val(out: &mut String, tag: &'static str, value: Option<impl Display>) {
    if let Some(v) = value {
        write_val(out, tag, v);
    }
}

/// On/off element: nothing for `None`, bare element for `true`, `w:val="0"` for
/// `false`.
pub(crate) fn write_toggle(out: &mut String, tag: &'static str, value: Option<bool>) {
    match value {
        Some(true) => Element::new(tag).write(out),
        Some(false) => write_val(out, tag, "0"),
        None => {}
    }
}

/// Toggle whose element switches the property off (`suppressAutoHyphens`,
/// `noWrap`).
pub(crate) fn write_inverted_toggle(out: &mut String, tag: &'static str, value: Option<bool>) {
    write_toggle(out, tag, value.map(|v| !v));
}

/// Shared `w:w`/`w:type` routine for table, cell and margin widths.
pub fn write_width(out: &mut String, tag: &'static str, width: &Length) {
    let (value, unit) = width_parts(width);
    Element::new(tag).opt("w", value).attr("type", unit).write(out);
}
