use crate::mapping::{self, Accessor, Declaration, Encoding, PropValue, PropertyBag};
use crate::units::Length;

use super::{Alignment, BORDER_SIDE_DECLS, BorderSet, SHADING_DECLS, Shading, WIDTH_DECLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    Fixed,
    Autofit,
}

impl TableLayout {
    pub fn token(self) -> &'static str {
        match self {
            TableLayout::Fixed => "fixed",
            TableLayout::Autofit => "autofit",
        }
    }
}

/// Floating table placement (`w:tblpPr`). Distances are twips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePosition {
    pub left_from_text: Option<i64>,
    pub right_from_text: Option<i64>,
    pub top_from_text: Option<i64>,
    pub bottom_from_text: Option<i64>,
    pub vert_anchor: Option<String>,
    pub horz_anchor: Option<String>,
    pub x_align: Option<String>,
    pub x: Option<i64>,
    pub y_align: Option<String>,
    pub y: Option<i64>,
}

macro_rules! int {
    ($name:literal, $field:ident) => {
        Accessor {
            name: $name,
            get: |s| s.$field.map(PropValue::Int),
            set: |s, v| s.$field = v.as_int(),
        }
    };
}

const POSITION_DECLS: &[Declaration] = &[
    Declaration::new("leftFromText", &["."], Encoding::Integer).attrs(&["leftFromText"]),
    Declaration::new("rightFromText", &["."], Encoding::Integer).attrs(&["rightFromText"]),
    Declaration::new("topFromText", &["."], Encoding::Integer).attrs(&["topFromText"]),
    Declaration::new("bottomFromText", &["."], Encoding::Integer).attrs(&["bottomFromText"]),
    Declaration::new("vertAnchor", &["."], Encoding::Literal).attrs(&["vertAnchor"]),
    Declaration::new("horzAnchor", &["."], Encoding::Literal).attrs(&["horzAnchor"]),
    Declaration::new("xAlign", &["."], Encoding::Literal).attrs(&["tblpXSpec"]),
    Declaration::new("x", &["."], Encoding::Integer).attrs(&["tblpX"]),
    Declaration::new("yAlign", &["."], Encoding::Literal).attrs(&["tblpYSpec"]),
    Declaration::new("y", &["."], Encoding::Integer).attrs(&["tblpY"]),
];

const POSITION_ACCESSORS: &[Accessor<TablePosition>] = &[
    int!("leftFromText", left_from_text),
    int!("rightFromText", right_from_text),
    int!("topFromText", top_from_text),
    int!("bottomFromText", bottom_from_text),
    text!("vertAnchor", vert_anchor),
    text!("horzAnchor", horz_anchor),
    text!("xAlign", x_align),
    int!("x", x),
    text!("yAlign", y_align),
    int!("y", y),
];

impl TablePosition {
    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut pos = TablePosition::default();
        mapping::apply_bag(&mut pos, bag, POSITION_ACCESSORS);
        pos
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, POSITION_ACCESSORS)
    }
}

/// Default cell margins of a table (`w:tblCellMar`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellMargins {
    pub top: Option<Length>,
    pub left: Option<Length>,
    pub bottom: Option<Length>,
    pub right: Option<Length>,
}

const MARGIN_DECLS: &[Declaration] = &[
    Declaration::new("top", &["top"], Encoding::Nested(WIDTH_DECLS)),
    Declaration::new("left", &["left", "start"], Encoding::Nested(WIDTH_DECLS)),
    Declaration::new("bottom", &["bottom"], Encoding::Nested(WIDTH_DECLS)),
    Declaration::new("right", &["right", "end"], Encoding::Nested(WIDTH_DECLS)),
];

const MARGIN_ACCESSORS: &[Accessor<CellMargins>] = &[
    width!("top", top),
    width!("left", left),
    width!("bottom", bottom),
    width!("right", right),
];

impl CellMargins {
    pub fn uniform(margin: Length) -> Self {
        CellMargins {
            top: Some(margin),
            left: Some(margin),
            bottom: Some(margin),
            right: Some(margin),
        }
    }

    pub fn sides(&self) -> [(&'static str, Option<&Length>); 4] {
        [
            ("top", self.top.as_ref()),
            ("left", self.left.as_ref()),
            ("bottom", self.bottom.as_ref()),
            ("right", self.right.as_ref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStyle {
    pub name: Option<String>,
    pub width: Option<Length>,
    pub alignment: Option<Alignment>,
    pub indent: Option<Length>,
    pub layout: Option<TableLayout>,
    pub position: Option<TablePosition>,
    pub bidi_visual: Option<bool>,
    pub cell_margins: Option<CellMargins>,
    pub borders: Option<BorderSet>,
    pub shading: Option<Shading>,
}

pub const TABLE_DECLS: &[Declaration] = &[
    Declaration::new("styleName", &["tblStyle"], Encoding::Literal),
    Declaration::new("width", &["tblW"], Encoding::Nested(WIDTH_DECLS)),
    Declaration::new("alignment", &["jc"], Encoding::Literal),
    Declaration::new("indent", &["tblInd"], Encoding::Nested(WIDTH_DECLS)),
    Declaration::new("layout", &["tblLayout"], Encoding::Literal).attrs(&["type"]),
    Declaration::new("position", &["tblpPr"], Encoding::Nested(POSITION_DECLS)),
    Declaration::new("bidiVisual", &["bidiVisual"], Encoding::Toggle),
    Declaration::new("cellMargins", &["tblCellMar"], Encoding::Nested(MARGIN_DECLS)),
    Declaration::new("borders", &["tblBorders"], Encoding::Nested(BORDER_SIDE_DECLS)),
    Declaration::new("shading", &["shd"], Encoding::Nested(SHADING_DECLS)),
];

pub(crate) const TABLE_ACCESSORS: &[Accessor<TableStyle>] = &[
    text!("styleName", name),
    width!("width", width),
    Accessor {
        name: "alignment",
        get: |s| s.alignment.map(|a| PropValue::Str(a.token().to_string())),
        set: |s, v| s.alignment = v.as_str().and_then(Alignment::from_token),
    },
    width!("indent", indent),
    Accessor {
        name: "layout",
        get: |s| s.layout.map(|l| PropValue::Str(l.token().to_string())),
        set: |s, v| {
            s.layout = v.as_str().map(|t| match t {
                "fixed" => TableLayout::Fixed,
                _ => TableLayout::Autofit,
            })
        },
    },
    Accessor {
        name: "position",
        get: |s| {
            let bag = s.position.as_ref()?.to_bag();
            (!bag.is_empty()).then_some(PropValue::Bag(bag))
        },
        set: |s, v| s.position = v.as_bag().map(TablePosition::from_bag),
    },
    flag!("bidiVisual", bidi_visual),
    Accessor {
        name: "cellMargins",
        get: |s| {
            let bag = mapping::bag_from(s.cell_margins.as_ref()?, MARGIN_ACCESSORS);
            (!bag.is_empty()).then_some(PropValue::Bag(bag))
        },
        set: |s, v| {
            s.cell_margins = v.as_bag().map(|bag| {
                let mut margins = CellMargins::default();
                mapping::apply_bag(&mut margins, bag, MARGIN_ACCESSORS);
                margins
            })
        },
    },
    Accessor {
        name: "borders",
        get: |s| {
            let bag = s.borders.as_ref()?.to_bag();
            (!bag.is_empty()).then_some(PropValue::Bag(bag))
        },
        set: |s, v| s.borders = v.as_bag().map(BorderSet::from_bag),
    },
    Accessor {
        name: "shading",
        get: |s| s.shading.as_ref().map(|sh| PropValue::Bag(sh.to_bag())),
        set: |s, v| s.shading = v.as_bag().map(Shading::from_bag),
    },
];

impl TableStyle {
    pub fn named(name: &str) -> Self {
        TableStyle {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut style = TableStyle::default();
        mapping::apply_bag(&mut style, bag, TABLE_ACCESSORS);
        style
    }

    /// Read a `w:tblPr` element.
    pub fn from_node(tbl_pr: roxmltree::Node) -> Self {
        TableStyle::from_bag(&mapping::extract(tbl_pr, TABLE_DECLS))
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, TABLE_ACCESSORS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightRule {
    Auto,
    AtLeast,
    Exact,
}

impl HeightRule {
    pub fn from_token(token: &str) -> Self {
        match token {
            "exact" => HeightRule::Exact,
            "auto" => HeightRule::Auto,
            _ => HeightRule::AtLeast,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            HeightRule::Auto => "auto",
            HeightRule::AtLeast => "atLeast",
            HeightRule::Exact => "exact",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStyle {
    pub cant_split: Option<bool>,
    pub height: Option<Length>,
    pub height_rule: Option<HeightRule>,
    /// Repeat as header row on every page.
    pub header: Option<bool>,
}

pub const ROW_DECLS: &[Declaration] = &[
    Declaration::new("cantSplit", &["cantSplit"], Encoding::Toggle),
    Declaration::new("height", &["trHeight"], Encoding::Integer),
    Declaration::new("heightRule", &["trHeight"], Encoding::Literal).attrs(&["hRule"]),
    Declaration::new("tblHeader", &["tblHeader"], Encoding::Toggle),
];

pub(crate) const ROW_ACCESSORS: &[Accessor<RowStyle>] = &[
    flag!("cantSplit", cant_split),
    twips!("height", height),
    Accessor {
        name: "heightRule",
        get: |s| s.height_rule.map(|r| PropValue::Str(r.token().to_string())),
        set: |s, v| s.height_rule = v.as_str().map(HeightRule::from_token),
    },
    flag!("tblHeader", header),
];

impl RowStyle {
    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut style = RowStyle::default();
        mapping::apply_bag(&mut style, bag, ROW_ACCESSORS);
        style
    }

    /// Read a `w:trPr` element.
    pub fn from_node(tr_pr: roxmltree::Node) -> Self {
        RowStyle::from_bag(&mapping::extract(tr_pr, ROW_DECLS))
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, ROW_ACCESSORS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMerge {
    Restart,
    Continue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub width: Option<Length>,
    pub grid_span: Option<u32>,
    pub v_merge: Option<VMerge>,
    pub borders: Option<BorderSet>,
    pub shading: Option<Shading>,
    /// `false` when the cell carries `w:noWrap`.
    pub wrap: Option<bool>,
    /// `ST_TextDirection` token (`lrTb`, `tbRl`, `btLr`, ...).
    pub text_direction: Option<String>,
    /// `top`, `center`, `bottom`.
    pub v_align: Option<String>,
}

pub const CELL_DECLS: &[Declaration] = &[
    Declaration::new("width", &["tcW"], Encoding::Nested(WIDTH_DECLS)),
    Declaration::new("gridSpan", &["gridSpan"], Encoding::Integer),
    Declaration::new("vMerge", &["vMerge"], Encoding::Exists),
    Declaration::new("vMergeType", &["vMerge"], Encoding::Literal),
    Declaration::new("borders", &["tcBorders"], Encoding::Nested(BORDER_SIDE_DECLS)),
    Declaration::new("shading", &["shd"], Encoding::Nested(SHADING_DECLS)),
    Declaration::new("wrap", &["noWrap"], Encoding::ExistsFalseInverted),
    Declaration::new("textDirection", &["textDirection"], Encoding::Literal),
    Declaration::new("vAlign", &["vAlign"], Encoding::Literal),
];

pub(crate) const CELL_ACCESSORS: &[Accessor<CellStyle>] = &[
    width!("width", width),
    Accessor {
        name: "gridSpan",
        get: |s| s.grid_span.map(|g| PropValue::Int(g as i64)),
        set: |s, v| s.grid_span = v.as_u32().map(|g| g.max(1)),
    },
    Accessor {
        name: "vMerge",
        get: |s| s.v_merge.map(|_| PropValue::Bool(true)),
        set: |s, v| {
            if v.as_bool() == Some(true) && s.v_merge.is_none() {
                s.v_merge = Some(VMerge::Continue);
            }
        },
    },
    Accessor {
        name: "vMergeType",
        get: |s| match s.v_merge {
            Some(VMerge::Restart) => Some(PropValue::Str("restart".to_string())),
            _ => None,
        },
        set: |s, v| {
            s.v_merge = Some(match v.as_str() {
                Some("restart") => VMerge::Restart,
                _ => VMerge::Continue,
            })
        },
    },
    Accessor {
        name: "borders",
        get: |s| {
            let bag = s.borders.as_ref()?.to_bag();
            (!bag.is_empty()).then_some(PropValue::Bag(bag))
        },
        set: |s, v| s.borders = v.as_bag().map(BorderSet::from_bag),
    },
    Accessor {
        name: "shading",
        get: |s| s.shading.as_ref().map(|sh| PropValue::Bag(sh.to_bag())),
        set: |s, v| s.shading = v.as_bag().map(Shading::from_bag),
    },
    flag!("wrap", wrap),
    text!("textDirection", text_direction),
    text!("vAlign", v_align),
];

impl CellStyle {
    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut style = CellStyle::default();
        mapping::apply_bag(&mut style, bag, CELL_ACCESSORS);
        style
    }

    /// Read a `w:tcPr` element.
    pub fn from_node(tc_pr: roxmltree::Node) -> Self {
        CellStyle::from_bag(&mapping::extract(tc_pr, CELL_DECLS))
    }

    pub fn to_bag(&self) -> PropertyBag {
        mapping::bag_from(self, CELL_ACCESSORS)
    }
}
