#![allow(dead_code)]

use std::io::{Cursor, Write};

use docxide_wml::Package;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const REL_TYPE_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn namespaces() -> String {
    format!(
        concat!(
            r#"xmlns:w="{}" xmlns:r="{}" "#,
            r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
            r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:v="urn:schemas-microsoft-com:vml" "#,
            r#"xmlns:o="urn:schemas-microsoft-com:office:office" "#,
            r#"xmlns:w10="urn:schemas-microsoft-com:office:word""#
        ),
        W_NS, R_NS
    )
}

/// `word/document.xml` with the given body content.
pub fn document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {}><w:body>{body}</w:body></w:document>"#,
        namespaces()
    )
}

/// A part whose root element is `w:{root}` (`hdr`, `ftr`, `footnotes`, ...).
pub fn wml_part(root: &str, content: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:{root} {}>{content}</w:{root}>"#,
        namespaces()
    )
}

/// Writer output wrapped in a root that declares the prefixes it uses.
pub fn wrap_fragment(fragment: &str) -> String {
    format!(r#"<root {}>{fragment}</root>"#, namespaces())
}

/// `(id, type suffix, target, external)` entries as a `.rels` part.
pub fn rels_xml(entries: &[(&str, &str, &str, bool)]) -> String {
    let mut xml = format!(r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{PKG_RELS_NS}">"#);
    for (id, kind, target, external) in entries {
        let kind = if kind.starts_with("http") {
            kind.to_string()
        } else {
            format!("{REL_TYPE_BASE}/{kind}")
        };
        let mode = if *external {
            r#" TargetMode="External""#
        } else {
            ""
        };
        xml.push_str(&format!(
            r#"<Relationship Id="{id}" Type="{kind}" Target="{target}"{mode}/>"#
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// Assembles a minimal package around a document body.
pub struct PackageBuilder {
    parts: Vec<(String, String)>,
    package_rels: Vec<(String, String, String)>,
    document_rels: Vec<(String, String, String, bool)>,
}

impl PackageBuilder {
    pub fn new(body: &str) -> Self {
        PackageBuilder {
            parts: vec![("word/document.xml".to_string(), document(body))],
            package_rels: vec![(
                "rId1".to_string(),
                "officeDocument".to_string(),
                "word/document.xml".to_string(),
            )],
            document_rels: Vec::new(),
        }
    }

    pub fn part(mut self, name: &str, content: &str) -> Self {
        self.parts.push((name.to_string(), content.to_string()));
        self
    }

    /// Relationship from `word/document.xml`.
    pub fn rel(mut self, id: &str, kind: &str, target: &str) -> Self {
        self.document_rels
            .push((id.to_string(), kind.to_string(), target.to_string(), false));
        self
    }

    pub fn external_rel(mut self, id: &str, kind: &str, target: &str) -> Self {
        self.document_rels
            .push((id.to_string(), kind.to_string(), target.to_string(), true));
        self
    }

    /// Relationship from the package root (`_rels/.rels`).
    pub fn package_rel(mut self, id: &str, kind: &str, target: &str) -> Self {
        self.package_rels
            .push((id.to_string(), kind.to_string(), target.to_string()));
        self
    }

    fn all_parts(&self) -> Vec<(String, String)> {
        let package_rels: Vec<(&str, &str, &str, bool)> = self
            .package_rels
            .iter()
            .map(|(id, kind, target)| (id.as_str(), kind.as_str(), target.as_str(), false))
            .collect();
        let document_rels: Vec<(&str, &str, &str, bool)> = self
            .document_rels
            .iter()
            .map(|(id, kind, target, ext)| (id.as_str(), kind.as_str(), target.as_str(), *ext))
            .collect();

        let mut parts = self.parts.clone();
        parts.push(("_rels/.rels".to_string(), rels_xml(&package_rels)));
        if !document_rels.is_empty() {
            parts.push((
                "word/_rels/document.xml.rels".to_string(),
                rels_xml(&document_rels),
            ));
        }
        parts
    }

    pub fn build(&self) -> Package {
        Package::from_parts(self.all_parts())
    }

    /// The same parts as a zipped `.docx`.
    pub fn to_docx_bytes(&self) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in self.all_parts() {
            zip.start_file(name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}

/// A paragraph holding one plain run.
pub fn para(text: &str) -> String {
    format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
}

/// A paragraph with the given paragraph style id and one run.
pub fn styled_para(style: &str, text: &str) -> String {
    format!(r#"<w:p><w:pPr><w:pStyle w:val="{style}"/></w:pPr><w:r><w:t>{text}</w:t></w:r></w:p>"#)
}
