use crate::error::Error;
use crate::model::DocumentProperties;
use crate::package::Package;

use super::{RelKind, Relationships, parse_part};

/// Text of the first child element with the given local name. Core properties
/// mix the `dc`, `dcterms` and `cp` namespaces, so only the local name is checked.
fn child_text(parent: roxmltree::Node, name: &str) -> Option<String> {
    parent
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn read_core(props: &mut DocumentProperties, root: roxmltree::Node) {
    props.title = child_text(root, "title");
    props.subject = child_text(root, "subject");
    props.creator = child_text(root, "creator");
    props.keywords = child_text(root, "keywords");
    props.description = child_text(root, "description");
    props.category = child_text(root, "category");
    props.last_modified_by = child_text(root, "lastModifiedBy");
    props.revision = child_text(root, "revision");
    props.created = child_text(root, "created");
    props.modified = child_text(root, "modified");
}

fn read_extended(props: &mut DocumentProperties, root: roxmltree::Node) {
    props.application = child_text(root, "Application");
    props.company = child_text(root, "Company");
    props.manager = child_text(root, "Manager");
}

fn read_custom(props: &mut DocumentProperties, root: roxmltree::Node) {
    for property in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "property")
    {
        let Some(name) = property.attribute("name") else {
            continue;
        };
        // Single typed value child: vt:lpwstr, vt:i4, vt:bool, vt:filetime, ...
        let value = property
            .children()
            .find(|n| n.is_element())
            .and_then(|v| v.text())
            .unwrap_or("");
        props.custom.insert(name.to_string(), value.to_string());
    }
}

/// Core, extended and custom properties, located through the package
/// relationships. Missing parts leave their fields empty.
pub(super) fn read_properties(package: &Package) -> Result<DocumentProperties, Error> {
    let rels = Relationships::for_part(package, "")?;
    let mut props = DocumentProperties::default();

    let readers: [(RelKind, fn(&mut DocumentProperties, roxmltree::Node)); 3] = [
        (RelKind::CoreProperties, read_core),
        (RelKind::ExtendedProperties, read_extended),
        (RelKind::CustomProperties, read_custom),
    ];
    for (kind, read) in readers {
        let Some(part) = rels
            .first_of_kind(&kind)
            .and_then(|r| rels.resolved_target(&r.id))
        else {
            continue;
        };
        let Some(content) = package.part(&part) else {
            log::debug!("{part} is referenced but missing");
            continue;
        };
        let xml = parse_part(&part, content)?;
        read(&mut props, xml.root_element());
    }
    Ok(props)
}
