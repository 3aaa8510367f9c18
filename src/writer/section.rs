use crate::style::{Orientation, SectionStyle};
use crate::units::Length;

use super::{Element, write_opt_val, write_toggle};

fn twips(length: Option<Length>) -> Option<i64> {
    length.and_then(|l| l.to_twips())
}

/// `w:sectPr`: header/footer references, type, pgSz, pgMar, pgNumType, cols,
/// titlePg.
pub fn write_section_style(out: &mut String, style: &SectionStyle) {
    out.push_str("<w:sectPr>");
    for reference in &style.references {
        let tag = if reference.is_footer {
            "footerReference"
        } else {
            "headerReference"
        };
        out.push_str(&format!(
            r#"<w:{tag} w:type="{}" r:id="{}"/>"#,
            reference.ref_type.token(),
            super::escape_xml(&reference.rel_id)
        ));
    }

    write_opt_val(out, "type", style.break_type.as_ref());

    let orient = style.orientation.map(|o| match o {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    });
    let page_size = Element::new("pgSz")
        .opt("w", twips(style.page_width))
        .opt("h", twips(style.page_height))
        .opt("orient", orient);
    if page_size.has_attrs() {
        page_size.write(out);
    }

    let margins = Element::new("pgMar")
        .opt("top", twips(style.margin_top))
        .opt("right", twips(style.margin_right))
        .opt("bottom", twips(style.margin_bottom))
        .opt("left", twips(style.margin_left))
        .opt("header", twips(style.margin_header))
        .opt("footer", twips(style.margin_footer))
        .opt("gutter", twips(style.gutter));
    if margins.has_attrs() {
        margins.write(out);
    }

    if let Some(start) = style.page_number_start {
        Element::new("pgNumType").attr("start", start).write(out);
    }

    let columns = Element::new("cols")
        .opt("num", style.column_count)
        .opt("space", twips(style.column_space));
    if columns.has_attrs() {
        columns.write(out);
    }

    write_toggle(out, "titlePg", style.title_page);
    out.push_str("</w:sectPr>");
}
