use crate::style::FrameStyle;
use crate::units::Length;

use super::{Element, escape_xml};

/// `w:framePr` of a framed paragraph.
pub fn write_frame(out: &mut String, frame: &FrameStyle) {
    let twips = |l: Option<Length>| l.and_then(|l| l.to_twips());
    Element::new("framePr")
        .opt("w", twips(frame.width))
        .opt("h", twips(frame.height))
        .opt("x", twips(frame.left))
        .opt("y", twips(frame.top))
        .opt("hAnchor", frame.h_anchor.as_ref())
        .opt("vAnchor", frame.v_anchor.as_ref())
        .opt("xAlign", frame.h_align.as_ref())
        .opt("yAlign", frame.v_align.as_ref())
        .opt("wrap", frame.wrap.as_ref())
        .write(out);
}

fn points(length: Length) -> Option<String> {
    length.to_points().map(|pt| format!("{}pt", (pt * 100.0).round() / 100.0))
}

/// VML `style` attribute for a shape or image carrying this frame geometry,
/// e.g. `position:absolute;margin-left:36pt;width:100pt;height:50pt`.
pub fn vml_style(frame: &FrameStyle) -> String {
    let mut decls: Vec<String> = Vec::new();
    let positioned = frame.left.is_some() || frame.top.is_some() || frame.h_align.is_some();
    if positioned {
        decls.push("position:absolute".to_string());
    }
    for (key, length) in [
        ("margin-left", frame.left),
        ("margin-top", frame.top),
        ("width", frame.width),
        ("height", frame.height),
    ] {
        if let Some(value) = length.and_then(points) {
            decls.push(format!("{key}:{value}"));
        }
    }
    if let Some(align) = &frame.h_align {
        decls.push(format!("mso-position-horizontal:{align}"));
    }
    if let Some(anchor) = &frame.h_anchor {
        decls.push(format!("mso-position-horizontal-relative:{anchor}"));
    }
    if let Some(align) = &frame.v_align {
        decls.push(format!("mso-position-vertical:{align}"));
    }
    if let Some(anchor) = &frame.v_anchor {
        decls.push(format!("mso-position-vertical-relative:{anchor}"));
    }
    decls.join(";")
}

/// `w10:wrap` for a VML shape; frames without a wrap mode write nothing.
pub fn write_vml_wrap(out: &mut String, frame: &FrameStyle) {
    let Some(wrap) = frame.wrap.as_deref() else {
        return;
    };
    let kind = match wrap {
        "tight" => "tight",
        "through" => "through",
        "notBeside" => "topAndBottom",
        "none" => "none",
        _ => "square",
    };
    out.push_str(&format!(r#"<w10:wrap type="{}"/>"#, escape_xml(kind)));
}
