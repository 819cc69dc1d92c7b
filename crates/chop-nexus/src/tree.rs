//! In-memory NeXus tree read from its JSON rendition.
//!
//! Groups are JSON objects. A field is either a bare number/array/string or an
//! object holding a `"value"` key. Attributes of either live under `"@attrs"`.

use std::collections::BTreeMap;
use std::path::Path;

use chop_core::{ChopError, Result};
use serde_json::Value;

const ATTRS_KEY: &str = "@attrs";
const VALUE_KEY: &str = "value";

/// The attribute naming a group's NeXus base class.
pub const NX_CLASS: &str = "NX_class";

#[derive(Debug, Clone, PartialEq)]
pub enum NexusNode {
    Group(NexusGroup),
    Field(NexusField),
}

impl NexusNode {
    pub fn name(&self) -> &str {
        match self {
            NexusNode::Group(g) => &g.name,
            NexusNode::Field(f) => &f.name,
        }
    }

    fn from_json(name: &str, value: &Value) -> Self {
        match value {
            Value::Object(map) if !map.contains_key(VALUE_KEY) => {
                let children = map
                    .iter()
                    .filter(|(key, _)| key.as_str() != ATTRS_KEY)
                    .map(|(key, child)| NexusNode::from_json(key, child))
                    .collect();
                NexusNode::Group(NexusGroup {
                    name: name.to_string(),
                    attrs: read_attrs(map.get(ATTRS_KEY)),
                    children,
                })
            }
            Value::Object(map) => NexusNode::Field(NexusField {
                name: name.to_string(),
                value: map.get(VALUE_KEY).cloned().unwrap_or(Value::Null),
                attrs: read_attrs(map.get(ATTRS_KEY)),
            }),
            other => NexusNode::Field(NexusField {
                name: name.to_string(),
                value: other.clone(),
                attrs: BTreeMap::new(),
            }),
        }
    }
}

fn read_attrs(value: Option<&Value>) -> BTreeMap<String, Value> {
    match value {
        Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        _ => BTreeMap::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NexusGroup {
    pub name: String,
    pub attrs: BTreeMap<String, Value>,
    pub children: Vec<NexusNode>,
}

impl NexusGroup {
    /// The group's `NX_class` attribute, if it has one.
    pub fn nx_class(&self) -> Option<&str> {
        self.attrs.get(NX_CLASS).and_then(Value::as_str)
    }

    pub fn group(&self, name: &str) -> Option<&NexusGroup> {
        self.children.iter().find_map(|child| match child {
            NexusNode::Group(g) if g.name == name => Some(g),
            _ => None,
        })
    }

    pub fn field(&self, name: &str) -> Option<&NexusField> {
        self.children.iter().find_map(|child| match child {
            NexusNode::Field(f) if f.name == name => Some(f),
            _ => None,
        })
    }

    /// Like [`field`](Self::field) but missing fields are a read error.
    pub fn require_field(&self, name: &str) -> Result<&NexusField> {
        self.field(name).ok_or_else(|| {
            ChopError::DataRead(format!("group '{}' has no field '{}'", self.name, name))
        })
    }

    /// Follow a `/`-separated path of group names.
    pub fn group_at(&self, path: &str) -> Option<&NexusGroup> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |group, segment| group.group(segment))
    }

    pub fn groups(&self) -> impl Iterator<Item = &NexusGroup> {
        self.children.iter().filter_map(|child| match child {
            NexusNode::Group(g) => Some(g),
            NexusNode::Field(_) => None,
        })
    }

    /// Every group below this one (depth-first, excluding self) with the given class.
    pub fn find_by_class(&self, nx_class: &str) -> Vec<&NexusGroup> {
        let mut result = Vec::new();
        for child in self.groups() {
            if child.nx_class() == Some(nx_class) {
                result.push(child);
            }
            result.extend(child.find_by_class(nx_class));
        }
        result
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NexusField {
    pub name: String,
    pub value: Value,
    pub attrs: BTreeMap<String, Value>,
}

impl NexusField {
    /// Read a scalar. A one-element array counts as a scalar.
    pub fn scalar_f64(&self) -> Result<f64> {
        match &self.value {
            Value::Array(items) if items.len() == 1 => number(&self.name, &items[0]),
            other => number(&self.name, other),
        }
    }

    /// Read a 1D numeric array. A scalar reads as a one-element array.
    pub fn array_f64(&self) -> Result<Vec<f64>> {
        match &self.value {
            Value::Array(items) => items.iter().map(|v| number(&self.name, v)).collect(),
            other => Ok(vec![number(&self.name, other)?]),
        }
    }

    /// Raw bytes of a string attribute.
    pub fn attr_bytes(&self, key: &str) -> Option<&[u8]> {
        self.attrs.get(key).and_then(Value::as_str).map(str::as_bytes)
    }
}

fn number(field: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        ChopError::DataRead(format!("field '{}' holds {} where a number was expected", field, value))
    })
}

/// A whole NeXus file: an unnamed root group.
#[derive(Debug, Clone, PartialEq)]
pub struct NexusFile {
    pub root: NexusGroup,
}

impl NexusFile {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ChopError::Parse(e.to_string()))?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        match NexusNode::from_json("", value) {
            NexusNode::Group(root) => Ok(Self { root }),
            NexusNode::Field(_) => Err(ChopError::Parse(
                "top level of a NeXus document must be a group object".into(),
            )),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let file = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), groups = file.root.children.len(), "loaded NeXus tree");
        Ok(file)
    }
}
