use crate::style::{NumberingRef, ParagraphStyle, TabStop};

use super::{
    Element, write_borders, write_frame, write_inverted_toggle, write_opt_val,
    write_shading, write_toggle, write_val,
};

fn write_numbering(out: &mut String, numbering: &NumberingRef) {
    out.push_str("<w:numPr>");
    write_val(out, "ilvl", numbering.level);
    write_val(out, "numId", numbering.num_id);
    out.push_str("</w:numPr>");
}

fn write_tabs(out: &mut String, tabs: &[TabStop]) {
    if tabs.is_empty() {
        return;
    }
    out.push_str("<w:tabs>");
    for tab in tabs {
        Element::new("tab")
            .attr("val", &tab.alignment)
            .opt("leader", tab.leader.as_ref())
            .attr("pos", tab.position.to_twips().unwrap_or(0))
            .write(out);
    }
    out.push_str("</w:tabs>");
}

/// `w:pPr` for a paragraph style. A named style writes only its `w:pStyle`.
pub fn write_paragraph_style(out: &mut String, style: &ParagraphStyle) {
    out.push_str("<w:pPr>");
    if let Some(name) = &style.name {
        write_val(out, "pStyle", name);
        out.push_str("</w:pPr>");
        return;
    }

    write_toggle(out, "keepNext", style.keep_next);
    write_toggle(out, "keepLines", style.keep_lines);
    write_toggle(out, "pageBreakBefore", style.page_break_before);
    if let Some(frame) = &style.frame {
        write_frame(out, frame);
    }
    write_toggle(out, "widowControl", style.widow_control);
    if let Some(numbering) = &style.numbering {
        write_numbering(out, numbering);
    }
    if let Some(borders) = &style.borders {
        write_borders(out, "pBdr", borders);
    }
    if let Some(shading) = &style.shading {
        write_shading(out, shading);
    }
    write_tabs(out, &style.tabs);
    write_inverted_toggle(out, "suppressAutoHyphens", style.auto_hyphenation);
    write_toggle(out, "bidi", style.bidi);

    let spacing = Element::new("spacing")
        .opt("before", style.space_before.and_then(|l| l.to_twips()))
        .opt("after", style.space_after.and_then(|l| l.to_twips()))
        .opt("line", style.line_spacing.map(|l| l.line_value()))
        .opt("lineRule", style.line_spacing.map(|l| l.rule.token()));
    if spacing.has_attrs() {
        spacing.write(out);
    }

    let indent = Element::new("ind")
        .opt("left", style.indent_left.and_then(|l| l.to_twips()))
        .opt("right", style.indent_right.and_then(|l| l.to_twips()))
        .opt("firstLine", style.indent_first_line.and_then(|l| l.to_twips()))
        .opt("hanging", style.indent_hanging.and_then(|l| l.to_twips()));
    if indent.has_attrs() {
        indent.write(out);
    }

    write_toggle(out, "contextualSpacing", style.contextual_spacing);
    write_opt_val(out, "jc", style.alignment.map(|a| a.token()));
    write_opt_val(out, "outlineLvl", style.outline_level);
    out.push_str("</w:pPr>");
}
