use crate::color::Color;
use crate::style::FontStyle;

use super::{Element, write_opt_val, write_shading, write_toggle, write_val};

/// `w:rPr` for a run style. A named character style writes only its `w:rStyle`.
pub fn write_font_style(out: &mut String, style: &FontStyle) {
    out.push_str("<w:rPr>");
    if let Some(name) = &style.name {
        write_val(out, "rStyle", name);
        out.push_str("</w:rPr>");
        return;
    }

    let fonts = Element::new("rFonts")
        .opt("ascii", style.font_name.as_ref())
        .opt("hAnsi", style.font_name.as_ref())
        .opt("eastAsia", style.font_east_asia.as_ref())
        .opt("cs", style.font_complex.as_ref());
    if fonts.has_attrs() {
        fonts.write(out);
    }

    write_toggle(out, "b", style.bold);
    write_toggle(out, "i", style.italic);
    write_toggle(out, "caps", style.all_caps);
    write_toggle(out, "smallCaps", style.small_caps);
    write_toggle(out, "strike", style.strikethrough);
    write_toggle(out, "dstrike", style.double_strikethrough);
    write_toggle(out, "vanish", style.hidden);
    write_opt_val(out, "color", style.color.to_hex_or_name());
    write_opt_val(out, "spacing", style.spacing);
    write_opt_val(out, "kern", style.kerning);
    write_opt_val(out, "sz", style.size.map(|pt| (pt * 2.0).round() as i64));
    match &style.highlight {
        Color::Unspecified => {}
        Color::Highlight(h) => write_val(out, "highlight", h.name()),
        other => log::warn!("highlight {other} is not a highlight palette color, skipped"),
    }
    write_opt_val(out, "u", style.underline.as_ref());
    if let Some(shading) = &style.shading {
        write_shading(out, shading);
    }
    write_opt_val(out, "vertAlign", style.vert_align.map(|v| v.token()));
    write_toggle(out, "rtl", style.rtl);
    write_opt_val(out, "lang", style.lang.as_ref());
    out.push_str("</w:rPr>");
}
