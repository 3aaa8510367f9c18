use crate::style::{Border, BorderSet, Shading};

use super::{Element, color_value};

fn write_border(out: &mut String, side: &'static str, border: &Border) {
    Element::new(side)
        .attr("val", &border.style)
        .attr("sz", border.clamped_size())
        .attr("space", border.space)
        .attr("color", color_value(&border.color))
        .write(out);
}

/// `<w:{container}>` with one child per visible side. The container is written
/// even when every side is suppressed.
pub fn write_borders(out: &mut String, container: &str, borders: &BorderSet) {
    out.push_str(&format!("<w:{container}>"));
    for (side, border) in borders.sides() {
        if let Some(border) = border.filter(|b| b.is_visible()) {
            write_border(out, side, border);
        }
    }
    out.push_str(&format!("</w:{container}>"));
}

pub fn write_shading(out: &mut String, shading: &Shading) {
    Element::new("shd")
        .attr("val", &shading.pattern)
        .attr("color", color_value(&shading.color))
        .attr("fill", color_value(&shading.fill))
        .write(out);
}
