//! Declarative property extraction from WordprocessingML subtrees.
//!
//! A [`Declaration`] names a property, the element paths that may carry it, the
//! attributes to try on the element found, and how to decode the raw string.
//! [`extract`] turns a subtree into a [`PropertyBag`]; properties whose element is
//! missing are left out of the bag rather than defaulted.

use indexmap::IndexMap;

use crate::docx::WML_NS;

#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Bag(PropertyBag),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            PropValue::Int(i) => Some(i),
            PropValue::Float(f) => Some(f.round() as i64),
            _ => None,
        }
    }

    /// Integer value that fits a `u32`. Out-of-range values are dropped.
    pub fn as_u32(&self) -> Option<u32> {
        let i = self.as_int()?;
        let value = u32::try_from(i).ok();
        if value.is_none() {
            log::warn!("integer {i} out of range, ignored");
        }
        value
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            PropValue::Float(f) => Some(f),
            PropValue::Int(i) => Some(i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            PropValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bag(&self) -> Option<&PropertyBag> {
        match self {
            PropValue::Bag(b) => Some(b),
            _ => None,
        }
    }
}

/// Property name to value, in declaration order. A missing key means
/// "inherit/unspecified" and is distinct from a key holding `false` or `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag(IndexMap<String, PropValue>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: PropValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(PropValue::as_int)
    }

    pub fn u32(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(PropValue::as_u32)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropValue::as_float)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(PropValue::as_bool)
    }

    pub fn bag(&self, name: &str) -> Option<&PropertyBag> {
        self.get(name).and_then(PropValue::as_bag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoding {
    /// Raw attribute string.
    Literal,
    /// Attribute parsed as an integer.
    Integer,
    /// On/off toggle: a missing attribute or `1`/`true`/`on` is true.
    Toggle,
    /// True whenever the element is present, whatever its attributes say.
    Exists,
    /// Negated toggle, for properties that are on unless the element turns them off.
    ExistsFalseInverted,
    /// True iff the attribute equals the given token.
    EqualsExpected(&'static str),
    /// Numeric attribute divided by two (half-point font sizes).
    ScaledHalf,
    /// The resolved element is itself a bag of sub-properties.
    Nested(&'static [Declaration]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declaration {
    pub name: &'static str,
    /// Candidate element paths below the current node, `/`-separated; the first
    /// one that resolves wins. `.` is the current node.
    pub paths: &'static [&'static str],
    /// Candidate attributes on the resolved element; empty means `w:val`.
    pub attrs: &'static [&'static str],
    pub encoding: Encoding,
}

impl Declaration {
    pub const fn new(name: &'static str, paths: &'static [&'static str], encoding: Encoding) -> Self {
        Declaration {
            name,
            paths,
            attrs: &[],
            encoding,
        }
    }

    pub const fn attrs(self, attrs: &'static [&'static str]) -> Self {
        Declaration { attrs, ..self }
    }
}

/// Getter/setter pair binding a property name to a typed style field.
pub struct Accessor<S> {
    pub name: &'static str,
    pub get: fn(&S) -> Option<PropValue>,
    pub set: fn(&mut S, &PropValue),
}

/// Collect every property a style object carries, in table order.
pub fn bag_from<S>(style: &S, accessors: &[Accessor<S>]) -> PropertyBag {
    let mut bag = PropertyBag::new();
    for accessor in accessors {
        if let Some(value) = (accessor.get)(style) {
            bag.insert(accessor.name, value);
        }
    }
    bag
}

/// Set every field whose property is present in the bag; absent ones stay `None`.
pub fn apply_bag<S>(style: &mut S, bag: &PropertyBag, accessors: &[Accessor<S>]) {
    for accessor in accessors {
        if let Some(value) = bag.get(accessor.name) {
            (accessor.set)(style, value);
        }
    }
}

/// `null`, `1`, `true` and `on` are true; everything else is false.
pub fn decode_toggle(raw: Option<&str>) -> bool {
    matches!(raw, None | Some("1") | Some("true") | Some("on"))
}

pub fn resolve_path<'a>(
    node: roxmltree::Node<'a, 'a>,
    path: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    let mut current = node;
    for step in path.split('/') {
        if step.is_empty() || step == "." {
            continue;
        }
        current = current.children().find(|n| {
            n.is_element()
                && n.tag_name().name() == step
                && n.tag_name().namespace() == Some(WML_NS)
        })?;
    }
    Some(current)
}

fn attr_value<'a>(node: roxmltree::Node<'a, 'a>, attrs: &[&str]) -> Option<&'a str> {
    let lookup = |name: &str| {
        node.attribute((WML_NS, name))
            .or_else(|| node.attribute(name))
    };
    if attrs.is_empty() {
        return lookup("val");
    }
    attrs.iter().find_map(|a| lookup(a))
}

pub fn read_property(node: roxmltree::Node, decl: &Declaration) -> Option<PropValue> {
    let element = decl
        .paths
        .iter()
        .find_map(|path| resolve_path(node, path))?;
    let raw = attr_value(element, decl.attrs);
    match decl.encoding {
        Encoding::Literal => raw.map(|s| PropValue::Str(s.to_string())),
        Encoding::Integer => {
            let raw = raw?;
            let parsed = raw
                .parse::<i64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().map(|f| f.round() as i64));
            if parsed.is_none() {
                log::debug!("{}: non-numeric value {raw:?} ignored", decl.name);
            }
            parsed.map(PropValue::Int)
        }
        Encoding::Toggle => Some(PropValue::Bool(decode_toggle(raw))),
        Encoding::Exists => Some(PropValue::Bool(true)),
        Encoding::ExistsFalseInverted => Some(PropValue::Bool(!decode_toggle(raw))),
        Encoding::EqualsExpected(expected) => Some(PropValue::Bool(raw == Some(expected))),
        Encoding::ScaledHalf => {
            let raw = raw?;
            match raw.parse::<f64>() {
                Ok(v) => Some(PropValue::Float(v / 2.0)),
                Err(_) => {
                    log::debug!("{}: non-numeric size {raw:?} ignored", decl.name);
                    None
                }
            }
        }
        Encoding::Nested(children) => {
            let bag = extract(element, children);
            (!bag.is_empty()).then_some(PropValue::Bag(bag))
        }
    }
}

pub fn extract(node: roxmltree::Node, decls: &[Declaration]) -> PropertyBag {
    let mut bag = PropertyBag::new();
    for decl in decls {
        if let Some(value) = read_property(node, decl) {
            bag.insert(decl.name, value);
        }
    }
    bag
}
