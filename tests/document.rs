mod common;

use common::{PackageBuilder, para, wml_part};
use docxide_wml::model::{NoteKind, Table};
use docxide_wml::style::{HeaderFooterType, Orientation, VMerge};
use docxide_wml::{
    Error, Length, Node, Package, ReadOptions, read_document, read_document_with, read_docx_bytes,
};

fn first_table(nodes: &[Node]) -> &Table {
    nodes
        .iter()
        .find_map(|n| match n {
            Node::Table(t) => Some(t),
            _ => None,
        })
        .expect("table")
}

const TABLE_BODY: &str = concat!(
    "<w:tbl>",
    r#"<w:tblPr><w:tblW w:w="5000" w:type="pct"/><w:jc w:val="center"/></w:tblPr>"#,
    r#"<w:tblGrid><w:gridCol w:w="2000"/><w:gridCol w:w="3000"/></w:tblGrid>"#,
    r#"<w:tr><w:trPr><w:tblHeader/></w:trPr>"#,
    r#"<w:tc><w:tcPr><w:tcW w:w="2000" w:type="dxa"/><w:vMerge w:val="restart"/></w:tcPr><w:p><w:r><w:t>A1</w:t></w:r></w:p></w:tc>"#,
    r#"<w:tc><w:tcPr><w:noWrap/></w:tcPr><w:p><w:r><w:t>B1</w:t></w:r></w:p>"#,
    r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p/></w:tc>"#,
    "</w:tr>",
    r#"<w:tr><w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc><w:tc><w:p><w:r><w:t>B2</w:t></w:r></w:p></w:tc></w:tr>"#,
    "</w:tbl>",
);

#[test]
fn tables_with_nested_content() {
    common::init_logger();
    let doc = read_document(&PackageBuilder::new(TABLE_BODY).build()).unwrap();
    let elements: Vec<Node> = doc.elements().cloned().collect();
    let table = first_table(&elements);

    let style = table.style.as_ref().unwrap();
    assert_eq!(style.width, Some(Length::percent(100.0)));
    assert_eq!(style.alignment.map(|a| a.token()), Some("center"));
    assert_eq!(table.grid, vec![Length::from_twips(2000), Length::from_twips(3000)]);

    assert_eq!(table.rows.len(), 2);
    let header = &table.rows[0];
    assert_eq!(header.style.as_ref().unwrap().header, Some(true));
    assert_eq!(header.cells.len(), 2);

    let a1 = &header.cells[0];
    let a1_style = a1.style.as_ref().unwrap();
    assert_eq!(a1_style.width, Some(Length::from_twips(2000)));
    assert_eq!(a1_style.v_merge, Some(VMerge::Restart));
    assert_eq!(a1.children[0].text(), "A1");

    let b1 = &header.cells[1];
    assert_eq!(b1.style.as_ref().unwrap().wrap, Some(false));
    assert_eq!(b1.children.len(), 3);
    let inner = first_table(&b1.children);
    assert_eq!(inner.rows[0].cells[0].children[0].text(), "inner");

    let continued = &table.rows[1].cells[0];
    assert_eq!(continued.style.as_ref().unwrap().v_merge, Some(VMerge::Continue));
    assert_eq!(table.rows[1].style, None);
}

fn sectioned_package() -> PackageBuilder {
    let body = [
        para("First"),
        concat!(
            r#"<w:p><w:pPr><w:sectPr>"#,
            r#"<w:headerReference w:type="default" r:id="rId3"/>"#,
            r#"<w:pgSz w:w="16838" w:h="11906" w:orient="landscape"/>"#,
            r#"</w:sectPr></w:pPr><w:r><w:t>End of one</w:t></w:r></w:p>"#
        )
        .to_string(),
        para("Second"),
        concat!(
            r#"<w:sectPr><w:footerReference w:type="first" r:id="rId4"/>"#,
            r#"<w:headerReference w:type="even" r:id="rId4"/>"#,
            r#"<w:pgSz w:w="11906" w:h="16838"/>"#,
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1800" w:header="720" w:footer="720" w:gutter="0"/>"#,
            r#"<w:cols w:space="720"/><w:titlePg/></w:sectPr>"#
        )
        .to_string(),
    ]
    .concat();
    PackageBuilder::new(&body)
        .rel("rId3", "header", "header1.xml")
        .rel("rId4", "footer", "footer1.xml")
        .part("word/header1.xml", &wml_part("hdr", &para("Running head")))
        .part("word/footer1.xml", &wml_part("ftr", &para("Page foot")))
}

#[test]
fn sections_split_on_paragraph_properties() {
    common::init_logger();
    let doc = read_document(&sectioned_package().build()).unwrap();
    assert_eq!(doc.sections.len(), 2);

    let one = &doc.sections[0];
    assert_eq!(one.elements.len(), 2);
    assert_eq!(one.style.orientation, Some(Orientation::Landscape));
    assert_eq!(one.style.page_width, Some(Length::from_twips(16838)));
    assert_eq!(one.headers.len(), 1);
    assert_eq!(one.headers[0].part, "word/header1.xml");
    assert_eq!(one.headers[0].ref_type, HeaderFooterType::Default);
    assert_eq!(one.headers[0].elements[0].text(), "Running head");
    assert!(one.footers.is_empty());

    let two = &doc.sections[1];
    assert_eq!(two.elements.len(), 1);
    assert_eq!(two.style.orientation, Some(Orientation::Portrait));
    assert_eq!(two.style.margin_left, Some(Length::from_twips(1800)));
    assert_eq!(two.style.column_space, Some(Length::from_twips(720)));
    assert_eq!(two.style.title_page, Some(true));
    assert_eq!(two.footers.len(), 1);
    assert_eq!(two.footers[0].ref_type, HeaderFooterType::First);
    assert_eq!(two.footers[0].elements[0].text(), "Page foot");
    // A header reference pointing at a footer part is ignored.
    assert!(two.headers.is_empty());
}

#[test]
fn headers_can_be_skipped() {
    let options = ReadOptions::default().with_headers_footers(false);
    let doc = read_document_with(&sectioned_package().build(), &options).unwrap();
    assert!(doc.sections.iter().all(|s| s.headers.is_empty() && s.footers.is_empty()));
    assert_eq!(doc.sections[0].style.references.len(), 1);
}

const FOOTNOTES: &str = concat!(
    r#"<w:footnote w:type="separator" w:id="-1"><w:p><w:r><w:separator/></w:r></w:p></w:footnote>"#,
    r#"<w:footnote w:type="continuationSeparator" w:id="0"><w:p><w:r><w:continuationSeparator/></w:r></w:p></w:footnote>"#,
    r#"<w:footnote w:id="1"><w:p><w:r><w:t>Source: survey.</w:t></w:r></w:p></w:footnote>"#,
);

#[test]
fn notes_skip_separators() {
    common::init_logger();
    let body = r#"<w:p><w:r><w:t>Claim</w:t></w:r><w:r><w:footnoteReference w:id="1"/></w:r></w:p>"#;
    let package = PackageBuilder::new(body)
        .rel("rId7", "footnotes", "footnotes.xml")
        .rel("rId8", "endnotes", "endnotes.xml")
        .part("word/footnotes.xml", &wml_part("footnotes", FOOTNOTES))
        .part(
            "word/endnotes.xml",
            &wml_part("endnotes", r#"<w:endnote w:id="1"><w:p><w:r><w:t>Later.</w:t></w:r></w:p></w:endnote>"#),
        )
        .build();

    let doc = read_document(&package).unwrap();
    assert_eq!(doc.footnotes.len(), 1);
    let note = doc.footnote(1).unwrap();
    assert_eq!(note.kind, NoteKind::Footnote);
    assert_eq!(note.elements[0].text(), "Source: survey.");
    assert!(doc.footnote(0).is_none());
    assert_eq!(doc.endnote(1).unwrap().elements[0].text(), "Later.");

    let skipped = read_document_with(&package, &ReadOptions::default().with_notes(false)).unwrap();
    assert!(skipped.footnotes.is_empty());
    assert!(skipped.endnotes.is_empty());
}

const CORE: &str = concat!(
    r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
    r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/">"#,
    r#"<dc:title>Quarterly Report</dc:title><dc:creator>Kim</dc:creator>"#,
    r#"<cp:lastModifiedBy>Lee</cp:lastModifiedBy><cp:revision>4</cp:revision>"#,
    r#"<dcterms:created>2024-01-02T03:04:05Z</dcterms:created></cp:coreProperties>"#
);

const APP: &str = concat!(
    r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
    r#"<Application>Microsoft Office Word</Application><Company>Acme</Company></Properties>"#
);

const CUSTOM: &str = concat!(
    r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/custom-properties" "#,
    r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    r#"<property fmtid="{D5CDD505-2E9C-101B-9397-08002B2CF9AE}" pid="2" name="Project"><vt:lpwstr>Apollo</vt:lpwstr></property>"#,
    r#"<property fmtid="{D5CDD505-2E9C-101B-9397-08002B2CF9AE}" pid="3" name="Version"><vt:i4>3</vt:i4></property>"#,
    r#"</Properties>"#
);

#[test]
fn document_properties() {
    let package = PackageBuilder::new(&para("x"))
        .package_rel(
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        )
        .package_rel("rId3", "extended-properties", "docProps/app.xml")
        .package_rel("rId4", "custom-properties", "docProps/custom.xml")
        .part("docProps/core.xml", CORE)
        .part("docProps/app.xml", APP)
        .part("docProps/custom.xml", CUSTOM)
        .build();

    let props = read_document(&package).unwrap().properties;
    assert_eq!(props.title.as_deref(), Some("Quarterly Report"));
    assert_eq!(props.creator.as_deref(), Some("Kim"));
    assert_eq!(props.last_modified_by.as_deref(), Some("Lee"));
    assert_eq!(props.revision.as_deref(), Some("4"));
    assert_eq!(props.created.as_deref(), Some("2024-01-02T03:04:05Z"));
    assert_eq!(props.subject, None);
    assert_eq!(props.application.as_deref(), Some("Microsoft Office Word"));
    assert_eq!(props.company.as_deref(), Some("Acme"));
    assert_eq!(props.custom.get("Project").map(String::as_str), Some("Apollo"));
    assert_eq!(props.custom.get("Version").map(String::as_str), Some("3"));

    let skipped =
        read_document_with(&package, &ReadOptions::default().with_properties(false)).unwrap();
    assert_eq!(skipped.properties.title, None);
}

const STYLES: &str = concat!(
    r#"<w:docDefaults><w:rPrDefault><w:rPr><w:sz w:val="22"/></w:rPr></w:rPrDefault></w:docDefaults>"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:next w:val="Normal"/><w:uiPriority w:val="9"/><w:pPr><w:keepNext/><w:outlineLvl w:val="0"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:sz w:val="32"/></w:rPr></w:style>"#,
    r#"<w:style w:type="character" w:styleId="Strong"><w:name w:val="Strong"/><w:rPr><w:b/></w:rPr></w:style>"#,
);

const NUMBERING: &str = concat!(
    r#"<w:abstractNum w:abstractNumId="0">"#,
    r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/>"#,
    r#"<w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>"#,
    r#"<w:lvl w:ilvl="1"><w:numFmt w:val="bullet"/><w:lvlText w:val="o"/></w:lvl>"#,
    r#"</w:abstractNum>"#,
    r#"<w:num w:numId="7"><w:abstractNumId w:val="0"/>"#,
    r#"<w:lvlOverride w:ilvl="0"><w:startOverride w:val="3"/></w:lvlOverride></w:num>"#,
);

#[test]
fn styles_and_numbering_context() {
    common::init_logger();
    let body = r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="1"/><w:numId w:val="7"/></w:numPr></w:pPr><w:r><w:t>Bullet</w:t></w:r></w:p>"#;
    let package = PackageBuilder::new(body)
        .rel("rId1", "styles", "styles.xml")
        .rel("rId2", "numbering", "numbering.xml")
        .part("word/styles.xml", &wml_part("styles", STYLES))
        .part("word/numbering.xml", &wml_part("numbering", NUMBERING))
        .build();
    let doc = read_document(&package).unwrap();

    let Some(Node::ListItem(item)) = doc.elements().next() else {
        panic!("expected list item");
    };
    assert_eq!(item.format.as_deref(), Some("bullet"));

    let styles = &doc.context.styles;
    assert_eq!(styles.len(), 3);
    assert_eq!(styles.defaults.font.size, Some(11.0));
    let heading = styles.by_name("Heading 1").unwrap();
    assert_eq!(heading.id, "Heading1");
    assert_eq!(heading.ui_priority, Some(9));
    assert_eq!(heading.next.as_deref(), Some("Normal"));
    assert_eq!(heading.paragraph.as_ref().unwrap().keep_next, Some(true));
    assert_eq!(heading.font.as_ref().unwrap().size, Some(16.0));
    let chain: Vec<&str> = styles
        .based_on_chain("Heading1")
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(chain, ["Heading1", "Normal"]);
    let normal = styles
        .default_for(docxide_wml::docx::StyleKind::Paragraph)
        .unwrap();
    assert_eq!(normal.id, "Normal");
    assert!(normal.quick_format);

    let numbering = &doc.context.numbering;
    let level0 = numbering.level(7, 0).unwrap();
    assert_eq!(level0.start, 3);
    assert_eq!(level0.format, "decimal");
    assert_eq!(level0.text, "%1.");
    assert_eq!(level0.indent_left, Some(Length::from_twips(720)));
    assert_eq!(level0.indent_hanging, Some(Length::from_twips(360)));
    assert_eq!(numbering.level(7, 1).unwrap().start, 1);
    assert!(numbering.level(8, 0).is_none());
}

#[test]
fn malformed_xml_is_an_error() {
    common::init_logger();
    let package = PackageBuilder::new("<w:p><w:r><w:t>open").build();
    let err = read_document(&package).err().unwrap();
    assert!(matches!(&err, Error::Xml { part, .. } if part == "word/document.xml"));

    let package = PackageBuilder::new(&para("ok"))
        .rel("rId1", "styles", "styles.xml")
        .part("word/styles.xml", "<w:styles")
        .build();
    assert!(matches!(read_document(&package), Err(Error::Xml { .. })));
}

#[test]
fn missing_main_part() {
    let empty = Package::from_parts(Vec::<(String, String)>::new());
    assert!(matches!(read_document(&empty), Err(Error::MissingPart(_))));

    let no_rels = Package::from_parts([("word/document.xml", common::document(&para("Found")))]);
    let doc = read_document(&no_rels).unwrap();
    assert_eq!(doc.elements().next().unwrap().text(), "Found");
}

#[test]
fn main_part_without_body() {
    let package = Package::from_parts([(
        "word/document.xml",
        format!(r#"<w:document xmlns:w="{}"/>"#, common::W_NS),
    )]);
    assert!(matches!(read_document(&package), Err(Error::InvalidDocx(_))));
}

#[test]
fn reads_zipped_docx() {
    common::init_logger();
    let bytes = sectioned_package().to_docx_bytes();
    let doc = read_docx_bytes(&bytes).unwrap();
    assert_eq!(doc.sections.len(), 2);
    let text: Vec<String> = doc.elements().map(|n| n.text()).collect();
    assert_eq!(text, ["First", "End of one", "Second"]);
    assert_eq!(doc.sections[0].headers[0].elements[0].text(), "Running head");

    assert!(matches!(read_docx_bytes(b"not a zip"), Err(Error::Zip(_))));
}
