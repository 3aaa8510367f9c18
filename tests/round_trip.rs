mod common;

use docxide_wml::mapping::{self, Declaration};
use docxide_wml::style::{
    Alignment, Border, BorderSet, CELL_DECLS, CellMargins, CellStyle, FONT_DECLS, FRAME_DECLS,
    FontStyle, FrameStyle, HeaderFooterRef, HeaderFooterType, HeightRule, LineRule, LineSpacing,
    NumberingRef, Orientation, PARAGRAPH_DECLS, ParagraphStyle, ROW_DECLS, RowStyle,
    SECTION_DECLS, SectionStyle, Shading, TABLE_DECLS, TabStop, TableLayout, TablePosition,
    TableStyle, VMerge, VertAlign,
};
use docxide_wml::{Color, HighlightColor, Length, PropertyBag, StyleWriterKind, ThemeColor};

/// Parse a written fragment and hand its single top-level element to `f`.
fn with_written<T>(writer: StyleWriterKind, f: impl FnOnce(roxmltree::Node) -> T) -> T {
    let xml = common::wrap_fragment(&writer.to_xml());
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let element = doc.root_element().first_element_child().unwrap();
    f(element)
}

fn reread(writer: StyleWriterKind, decls: &[Declaration]) -> PropertyBag {
    with_written(writer, |node| mapping::extract(node, decls))
}

fn twips(t: i64) -> Option<Length> {
    Some(Length::from_twips(t))
}

fn paragraph_style() -> ParagraphStyle {
    ParagraphStyle {
        alignment: Some(Alignment::Right),
        space_before: twips(120),
        space_after: twips(0),
        line_spacing: Some(LineSpacing {
            spacing: 120,
            rule: LineRule::Auto,
        }),
        indent_left: twips(720),
        indent_first_line: twips(360),
        keep_lines: Some(true),
        page_break_before: Some(false),
        widow_control: Some(true),
        contextual_spacing: Some(true),
        bidi: Some(false),
        auto_hyphenation: Some(false),
        outline_level: Some(2),
        numbering: Some(NumberingRef { num_id: 5, level: 1 }),
        borders: Some(BorderSet {
            bottom: Some(Border::new("single", 6, Color::hex("4F81BD").unwrap())),
            ..Default::default()
        }),
        shading: Some(Shading::fill(Color::hex("F2F2F2").unwrap())),
        frame: Some(FrameStyle {
            width: twips(2880),
            top: twips(100),
            v_anchor: Some("text".to_string()),
            wrap: Some("around".to_string()),
            ..Default::default()
        }),
        tabs: vec![TabStop {
            alignment: "right".to_string(),
            position: Length::from_twips(9360),
            leader: Some("dot".to_string()),
        }],
        ..Default::default()
    }
}

#[test]
fn paragraph_round_trip() {
    let style = paragraph_style();
    let writer = StyleWriterKind::Paragraph(&style);
    assert_eq!(reread(writer, PARAGRAPH_DECLS), style.to_bag());
    assert_eq!(with_written(writer, ParagraphStyle::from_node), style);
}

#[test]
fn exact_line_spacing_round_trip() {
    let style = ParagraphStyle {
        line_spacing: Some(LineSpacing {
            spacing: 280,
            rule: LineRule::AtLeast,
        }),
        ..Default::default()
    };
    let read = with_written(StyleWriterKind::Paragraph(&style), ParagraphStyle::from_node);
    assert_eq!(read.line_spacing, style.line_spacing);
}

#[test]
fn clamped_borders_read_back_clamped() {
    let style = ParagraphStyle {
        borders: Some(BorderSet {
            top: Some(Border::new("single", 1, Color::Unspecified)),
            left: Some(Border::new("none", 8, Color::Unspecified)),
            right: Some(Border::new("thick", 500, Color::Highlight(HighlightColor::Red))),
            ..Default::default()
        }),
        ..Default::default()
    };
    let bag = reread(StyleWriterKind::Paragraph(&style), PARAGRAPH_DECLS);
    assert_eq!(bag, style.to_bag());
    let borders = bag.bag("borders").unwrap();
    assert_eq!(borders.bag("top").unwrap().int("size"), Some(2));
    assert_eq!(borders.bag("right").unwrap().int("size"), Some(96));
    assert!(!borders.contains("left"));
}

#[test]
fn named_paragraph_round_trip() {
    let style = ParagraphStyle::named("Heading1");
    let bag = reread(StyleWriterKind::Paragraph(&style), PARAGRAPH_DECLS);
    assert_eq!(bag.len(), 1);
    assert_eq!(bag.str("styleName"), Some("Heading1"));
}

#[test]
fn font_round_trip() {
    let style = FontStyle {
        font_name: Some("Cambria".to_string()),
        font_east_asia: Some("MS Mincho".to_string()),
        bold: Some(false),
        italic: Some(true),
        small_caps: Some(true),
        double_strikethrough: Some(false),
        hidden: Some(false),
        color: Color::Theme(ThemeColor::Accent2),
        spacing: Some(-10),
        kerning: Some(28),
        size: Some(13.5),
        highlight: Color::Highlight(HighlightColor::Cyan),
        underline: Some("double".to_string()),
        vert_align: Some(VertAlign::Subscript),
        rtl: Some(false),
        lang: Some("en-GB".to_string()),
        shading: Some(Shading {
            pattern: "solid".to_string(),
            color: Color::hex("000000").unwrap(),
            fill: Color::Unspecified,
        }),
        ..Default::default()
    };
    let writer = StyleWriterKind::Font(&style);
    assert_eq!(reread(writer, FONT_DECLS), style.to_bag());
    assert_eq!(with_written(writer, FontStyle::from_node), style);
}

#[test]
fn baseline_font_round_trip() {
    let style = FontStyle {
        vert_align: Some(VertAlign::Baseline),
        color: Color::hex("1F497D").unwrap(),
        ..Default::default()
    };
    let writer = StyleWriterKind::Font(&style);
    assert_eq!(reread(writer, FONT_DECLS), style.to_bag());
    assert_eq!(with_written(writer, FontStyle::from_node), style);
}

#[test]
fn table_round_trip() {
    let style = TableStyle {
        width: Some(Length::percent(80.0)),
        alignment: Some(Alignment::Center),
        indent: twips(0),
        layout: Some(TableLayout::Autofit),
        position: Some(TablePosition {
            left_from_text: Some(180),
            vert_anchor: Some("page".to_string()),
            x_align: Some("center".to_string()),
            y: Some(1440),
            ..Default::default()
        }),
        bidi_visual: Some(false),
        cell_margins: Some(CellMargins::uniform(Length::from_twips(108))),
        borders: Some(BorderSet {
            inside_h: Some(Border::new("dashed", 4, Color::hex("808080").unwrap())),
            inside_v: Some(Border::new("nil", 4, Color::Unspecified)),
            ..BorderSet::outer(Border::default())
        }),
        shading: Some(Shading::fill(Color::Theme(ThemeColor::Light1))),
        ..Default::default()
    };
    let bag = reread(StyleWriterKind::Table(&style), TABLE_DECLS);
    assert_eq!(bag, style.to_bag());
    assert_eq!(bag.bag("width").unwrap().str("value"), Some("4000"));
    assert_eq!(bag.bag("indent").unwrap().str("unit"), Some("nil"));
}

#[test]
fn empty_table_borders_round_trip() {
    let style = TableStyle {
        borders: Some(BorderSet::default()),
        ..Default::default()
    };
    let bag = reread(StyleWriterKind::Table(&style), TABLE_DECLS);
    assert!(bag.is_empty());
    assert_eq!(bag, style.to_bag());
}

#[test]
fn row_round_trip() {
    let style = RowStyle {
        cant_split: Some(false),
        height: twips(567),
        height_rule: Some(HeightRule::Exact),
        header: Some(true),
    };
    let writer = StyleWriterKind::Row(&style);
    assert_eq!(reread(writer, ROW_DECLS), style.to_bag());
    assert_eq!(with_written(writer, RowStyle::from_node), style);
}

#[test]
fn cell_round_trip() {
    let style = CellStyle {
        width: Some(Length::percent(25.0)),
        grid_span: Some(3),
        v_merge: Some(VMerge::Restart),
        borders: Some(BorderSet {
            left: Some(Border::new("single", 12, Color::hex("FF0000").unwrap())),
            ..Default::default()
        }),
        shading: Some(Shading::fill(Color::hex("FFFF00").unwrap())),
        wrap: Some(true),
        text_direction: Some("btLr".to_string()),
        v_align: Some("bottom".to_string()),
    };
    let writer = StyleWriterKind::Cell(&style);
    assert_eq!(reread(writer, CELL_DECLS), style.to_bag());
    assert_eq!(with_written(writer, CellStyle::from_node), style);

    let continued = CellStyle {
        v_merge: Some(VMerge::Continue),
        ..Default::default()
    };
    let writer = StyleWriterKind::Cell(&continued);
    assert_eq!(reread(writer, CELL_DECLS), continued.to_bag());
    assert_eq!(with_written(writer, CellStyle::from_node), continued);
}

#[test]
fn section_round_trip() {
    let style = SectionStyle {
        page_width: twips(15840),
        page_height: twips(12240),
        orientation: Some(Orientation::Landscape),
        margin_top: twips(1440),
        margin_right: twips(1080),
        margin_bottom: twips(1440),
        margin_left: twips(1080),
        margin_header: twips(708),
        margin_footer: twips(708),
        gutter: twips(0),
        column_count: Some(2),
        column_space: twips(425),
        break_type: Some("oddPage".to_string()),
        title_page: Some(true),
        page_number_start: Some(1),
        references: vec![
            HeaderFooterRef {
                is_footer: false,
                ref_type: HeaderFooterType::First,
                rel_id: "rId8".to_string(),
            },
            HeaderFooterRef {
                is_footer: true,
                ref_type: HeaderFooterType::Default,
                rel_id: "rId9".to_string(),
            },
        ],
    };
    let writer = StyleWriterKind::Section(&style);
    assert_eq!(reread(writer, SECTION_DECLS), style.to_bag());
    assert_eq!(with_written(writer, SectionStyle::from_node), style);
}

#[test]
fn portrait_is_implied_by_page_size() {
    let style = SectionStyle {
        page_width: twips(12240),
        page_height: twips(15840),
        ..Default::default()
    };
    let bag = reread(StyleWriterKind::Section(&style), SECTION_DECLS);
    assert_eq!(bag, style.to_bag());
    assert_eq!(bag.bool("landscape"), Some(false));
}

#[test]
fn frame_round_trip() {
    let frame = FrameStyle {
        width: twips(3000),
        height: twips(1500),
        left: twips(200),
        top: twips(400),
        h_anchor: Some("margin".to_string()),
        v_anchor: Some("page".to_string()),
        h_align: Some("right".to_string()),
        v_align: Some("top".to_string()),
        wrap: Some("tight".to_string()),
    };
    let bag = reread(StyleWriterKind::Frame(&frame), FRAME_DECLS);
    assert_eq!(bag, frame.to_bag());
    assert_eq!(FrameStyle::from_bag(&bag), frame);
}
