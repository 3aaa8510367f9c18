use crate::mapping::{self, Accessor, Declaration, Encoding, PropertyBag};
use crate::units::Length;

/// Position and size of a text frame, floating shape or image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStyle {
    pub width: Option<Length>,
    pub height: Option<Length>,
    /// Horizontal offset from `h_anchor`.
    pub left: Option<Length>,
    /// Vertical offset from `v_anchor`.
    pub top: Option<Length>,
    /// `text`, `margin` or `page`.
    pub h_anchor: Option<String>,
    pub v_anchor: Option<String>,
    /// `ST_XAlign`: `left`, `center`, `right`, `inside`, `outside`.
    pub h_align: Option<String>,
    pub v_align: Option<String>,
    /// `ST_Wrap`: `around`, `notBeside`, `none`, `tight`, `through`, `auto`.
    pub wrap: Option<String>,
}

pub const FRAME_DECLS: &[Declaration] = &[
    Declaration::new("width", &["."], Encoding::Integer).attrs(&["w"]),
    Declaration::new("height", &["."], Encoding::Integer).attrs(&["h"]),
    Declaration::new("left", &["."], Encoding::Integer).attrs(&["x"]),
    Declaration::new("top", &["."], Encoding::Integer).attrs(&["y"]),
    Declaration::new("hAnchor", &["."], Encoding::Literal).attrs(&["hAnchor"]),
    Declaration::new("vAnchor", &["."], Encoding::Literal).attrs(&["vAnchor"]),
    Declaration::new("hAlign", &["."], Encoding::Literal).attrs(&["xAlign"]),
    Declaration::new("vAlign", &["."], Encoding::Literal).attrs(&["yAlign"]),
    Declaration::new("wrap", &["."], Encoding::Literal).attrs(&["wrap"]),
];

pub(crate) const FRAME_ACCESSORS: &[Accessor<FrameStyle>] = &[
    twips!("width", width),
    twips!("height", height),
    twips!("left", left),
    twips!("top", top),
    text!("hAnchor", h_anchor),
    text!("vAnchor", v_anchor),
    text!("hAlign", h_align),
    text!("vAlign", v_align),
    text!("wrap", wrap),
];

impl FrameStyle {
    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut style = FrameStyle::default();
        mapping::apply_bag(&mut style, bag, FRAME_ACCESSORS);
        style
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, FRAME_ACCESSORS)
    }
}
