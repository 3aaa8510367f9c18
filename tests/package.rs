mod common;

use common::rels_xml;
use docxide_wml::docx::{RelKind, Relationships, TargetMode};
use docxide_wml::package::{rels_path_for, resolve_target};
use docxide_wml::{Error, Package};

#[test]
fn rels_paths() {
    assert_eq!(rels_path_for("word/document.xml"), "word/_rels/document.xml.rels");
    assert_eq!(rels_path_for("word/header1.xml"), "word/_rels/header1.xml.rels");
    assert_eq!(rels_path_for(""), "_rels/.rels");
}

#[test]
fn targets_resolve_against_source_directory() {
    assert_eq!(resolve_target("word/document.xml", "styles.xml"), "word/styles.xml");
    assert_eq!(
        resolve_target("word/document.xml", "media/image1.png"),
        "word/media/image1.png"
    );
    assert_eq!(
        resolve_target("word/document.xml", "../customXml/item1.xml"),
        "customXml/item1.xml"
    );
    assert_eq!(
        resolve_target("word/document.xml", "/word/media/x.png"),
        "word/media/x.png"
    );
    assert_eq!(resolve_target("", "word/document.xml"), "word/document.xml");
    assert_eq!(resolve_target("word/document.xml", "./theme/theme1.xml"), "word/theme/theme1.xml");
}

fn document_rels() -> Relationships {
    let xml = rels_xml(&[
        ("rId1", "styles", "styles.xml", false),
        ("rId2", "hyperlink", "https://example.com/a?b=1&amp;c=2", true),
        ("rId3", "image", "media/image1.png", false),
        ("rId4", "header", "header2.xml", false),
        ("rId5", "header", "header1.xml", false),
        ("rId6", "http://example.com/custom/thing", "thing.bin", false),
    ]);
    Relationships::parse("word/document.xml", &xml).unwrap()
}

#[test]
fn relationship_lookup() {
    let rels = document_rels();
    assert_eq!(rels.len(), 6);
    assert_eq!(rels.source_part(), "word/document.xml");

    let styles = rels.get("rId1").unwrap();
    assert_eq!(styles.kind, RelKind::Styles);
    assert_eq!(styles.mode, TargetMode::Internal);
    assert_eq!(rels.target("rId1"), Some("styles.xml"));
    assert_eq!(rels.resolved_target("rId1").as_deref(), Some("word/styles.xml"));

    let link = rels.get("rId2").unwrap();
    assert_eq!(link.kind, RelKind::Hyperlink);
    assert_eq!(link.mode, TargetMode::External);
    assert_eq!(
        rels.resolved_target("rId2").as_deref(),
        Some("https://example.com/a?b=1&c=2")
    );

    assert_eq!(rels.get("rId3").unwrap().kind, RelKind::Image);
    assert_eq!(
        rels.get("rId6").unwrap().kind,
        RelKind::Other("http://example.com/custom/thing".to_string())
    );
    assert!(rels.get("rId42").is_none());
    assert_eq!(rels.resolved_target("rId42"), None);
}

#[test]
fn first_of_kind_is_stable() {
    let rels = document_rels();
    assert_eq!(rels.first_of_kind(&RelKind::Header).unwrap().id, "rId4");
    assert!(rels.first_of_kind(&RelKind::Numbering).is_none());
}

#[test]
fn kinds_from_type_uris() {
    let base = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    assert_eq!(
        RelKind::from_type_uri(&format!("{base}/officeDocument")),
        RelKind::OfficeDocument
    );
    assert_eq!(RelKind::from_type_uri(&format!("{base}/footer")), RelKind::Footer);
    assert_eq!(RelKind::from_type_uri(&format!("{base}/endnotes")), RelKind::Endnotes);
    assert_eq!(RelKind::from_type_uri(&format!("{base}/oleObject")), RelKind::OleObject);
    assert_eq!(
        RelKind::from_type_uri(
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
        ),
        RelKind::CoreProperties
    );
}

#[test]
fn part_without_rels_has_empty_table() {
    let package = Package::from_parts([("word/header1.xml", "<w:hdr/>")]);
    let rels = Relationships::for_part(&package, "word/header1.xml").unwrap();
    assert!(rels.is_empty());
}

#[test]
fn malformed_rels_are_an_error() {
    common::init_logger();
    let err = Relationships::parse("word/document.xml", "<Relationships><Relationship").unwrap_err();
    assert!(matches!(err, Error::Xml { ref part, .. } if part == "word/_rels/document.xml.rels"));
}

#[test]
fn package_part_lookup() {
    let package = Package::from_parts([
        ("word/document.xml", "<doc/>"),
        ("[Content_Types].xml", "<Types/>"),
    ]);
    assert_eq!(package.part("word/document.xml"), Some("<doc/>"));
    assert_eq!(package.part("/word/document.xml"), Some("<doc/>"));
    assert!(package.contains("[Content_Types].xml"));
    assert!(!package.contains("word/styles.xml"));
    let mut names: Vec<&str> = package.part_names().collect();
    names.sort();
    assert_eq!(names, ["[Content_Types].xml", "word/document.xml"]);
}

#[test]
fn zip_loads_only_xml_parts() {
    let bytes = common::PackageBuilder::new(&common::para("x"))
        .part("word/media/image1.png", "not really a png")
        .to_docx_bytes();
    let package = Package::from_zip(std::io::Cursor::new(bytes)).unwrap();
    assert!(package.contains("word/document.xml"));
    assert!(package.contains("_rels/.rels"));
    assert!(!package.contains("word/media/image1.png"));
}
