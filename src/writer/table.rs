use crate::style::{CellMargins, CellStyle, RowStyle, TablePosition, TableStyle, VMerge};

use super::{
    Element, write_borders, write_inverted_toggle, write_opt_val, write_shading, write_toggle,
    write_val, write_width,
};

fn write_position(out: &mut String, position: &TablePosition) {
    let element = Element::new("tblpPr")
        .opt("leftFromText", position.left_from_text)
        .opt("rightFromText", position.right_from_text)
        .opt("topFromText", position.top_from_text)
        .opt("bottomFromText", position.bottom_from_text)
        .opt("vertAnchor", position.vert_anchor.as_ref())
        .opt("horzAnchor", position.horz_anchor.as_ref())
        .opt("tblpXSpec", position.x_align.as_ref())
        .opt("tblpX", position.x)
        .opt("tblpYSpec", position.y_align.as_ref())
        .opt("tblpY", position.y);
    if element.has_attrs() {
        element.write(out);
    }
}

fn write_cell_margins(out: &mut String, margins: &CellMargins) {
    if margins.sides().iter().all(|(_, margin)| margin.is_none()) {
        return;
    }
    out.push_str("<w:tblCellMar>");
    for (side, margin) in margins.sides() {
        if let Some(margin) = margin {
            write_width(out, side, margin);
        }
    }
    out.push_str("</w:tblCellMar>");
}

/// `w:tblPr`. A named table style writes only its `w:tblStyle`.
pub fn write_table_style(out: &mut String, style: &TableStyle) {
    out.push_str("<w:tblPr>");
    if let Some(name) = &style.name {
        write_val(out, "tblStyle", name);
        out.push_str("</w:tblPr>");
        return;
    }

    if let Some(width) = &style.width {
        write_width(out, "tblW", width);
    }
    write_opt_val(out, "jc", style.alignment.map(|a| a.token()));
    if let Some(indent) = &style.indent {
        write_width(out, "tblInd", indent);
    }
    if let Some(layout) = style.layout {
        Element::new("tblLayout").attr("type", layout.token()).write(out);
    }
    if let Some(position) = &style.position {
        write_position(out, position);
    }
    write_toggle(out, "bidiVisual", style.bidi_visual);
    if let Some(margins) = &style.cell_margins {
        write_cell_margins(out, margins);
    }
    if let Some(borders) = &style.borders {
        write_borders(out, "tblBorders", borders);
    }
    if let Some(shading) = &style.shading {
        write_shading(out, shading);
    }
    out.push_str("</w:tblPr>");
}

/// `w:trPr`: cantSplit, trHeight, tblHeader.
pub fn write_row_style(out: &mut String, style: &RowStyle) {
    out.push_str("<w:trPr>");
    write_toggle(out, "cantSplit", style.cant_split);
    let height = Element::new("trHeight")
        .opt("val", style.height.and_then(|h| h.to_twips()))
        .opt("hRule", style.height_rule.map(|r| r.token()));
    if height.has_attrs() {
        height.write(out);
    }
    write_toggle(out, "tblHeader", style.header);
    out.push_str("</w:trPr>");
}

/// `w:tcPr`: tcW, gridSpan, vMerge, tcBorders, shd, noWrap, textDirection, vAlign.
pub fn write_cell_style(out: &mut String, style: &CellStyle) {
    out.push_str("<w:tcPr>");
    if let Some(width) = &style.width {
        write_width(out, "tcW", width);
    }
    write_opt_val(out, "gridSpan", style.grid_span);
    match style.v_merge {
        Some(VMerge::Restart) => write_val(out, "vMerge", "restart"),
        Some(VMerge::Continue) => Element::new("vMerge").write(out),
        None => {}
    }
    if let Some(borders) = &style.borders {
        write_borders(out, "tcBorders", borders);
    }
    if let Some(shading) = &style.shading {
        write_shading(out, shading);
    }
    write_inverted_toggle(out, "noWrap", style.wrap);
    write_opt_val(out, "textDirection", style.text_direction.as_ref());
    write_opt_val(out, "vAlign", style.v_align.as_ref());
    out.push_str("</w:tcPr>");
}
