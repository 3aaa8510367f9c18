use std::collections::HashMap;
use std::io::{Read, Seek};

use crate::error::Error;

/// The XML parts of an OOXML package, keyed by part name (`word/document.xml`).
///
/// Binary parts (images, embedded fonts) are not loaded; the reader only needs
/// their relationship targets.
#[derive(Debug, Default, Clone)]
pub struct Package {
    parts: HashMap<String, String>,
}

fn is_xml_part(name: &str) -> bool {
    name.ends_with(".xml") || name.ends_with(".rels")
}

impl Package {
    pub fn from_zip<R: Read + Seek>(reader: R) -> Result<Self, Error> {
        let mut zip = zip::ZipArchive::new(reader)?;
        let mut parts = HashMap::new();
        for i in 0..zip.len() {
            let mut entry = zip.by_index(i)?;
            if entry.is_dir() || !is_xml_part(entry.name()) {
                continue;
            }
            let name = entry.name().trim_start_matches('/').to_string();
            let mut content = String::new();
            entry
                .read_to_string(&mut content)
                .map_err(|_| Error::InvalidDocx(format!("{name} is not valid UTF-8")))?;
            parts.insert(name, content);
        }
        log::debug!("loaded {} XML parts", parts.len());
        Ok(Package { parts })
    }

    pub fn from_parts<I, N, C>(parts: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Package {
            parts: parts
                .into_iter()
                .map(|(n, c)| (n.into(), c.into()))
                .collect(),
        }
    }

    pub fn part(&self, name: &str) -> Option<&str> {
        self.parts
            .get(name.trim_start_matches('/'))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.part(name).is_some()
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }
}

/// `word/header1.xml` → `word/_rels/header1.xml.rels`
pub fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
        None => format!("_rels/{part}.rels"),
    }
}

/// Resolve a relationship target against the directory of the part that owns
/// the relationship. Absolute targets (`/word/media/x.png`) are taken from the
/// package root.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = match source_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };
    for seg in target.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
