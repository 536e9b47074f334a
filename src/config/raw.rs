//! Order-preserving raw shapes of a question document
//!
//! The document is first read into a generic [`RawNode`] tree. Mappings are
//! kept as vectors so that duplicate keys and declaration order survive, and
//! no field shape is enforced at this stage: a well-formed document always
//! deserializes. Entries are then converted one by one, so shape errors can be
//! reported against the question key. Both YAML and JSON go through the same
//! visitors.

use crate::config::types::describe;
use crate::error::SchemaViolation;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};
use std::fmt;

/// Top-level mapping of question keys to entries, in document order.
#[derive(Debug, Default)]
pub(crate) struct RawDocument(pub Vec<(String, RawNode)>);

/// Any value of a YAML or JSON document.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawNode {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<RawNode>),
    Map(Vec<(RawNode, RawNode)>),
}

/// One top-level entry: a full question mapping or a `key: value` shorthand.
#[derive(Debug)]
pub(crate) enum RawEntry {
    Question(RawQuestion),
    Shorthand(serde_json::Value),
}

#[derive(Debug, Default)]
pub(crate) struct RawQuestion {
    pub help: Option<String>,
    pub r#type: Option<String>,
    pub default: Option<serde_json::Value>,
    pub choices: Option<RawChoices>,
    pub secret: bool,
}

/// Choices as written in the document.
#[derive(Debug)]
pub(crate) enum RawChoices {
    /// A list of plain values or `[label, value]` pairs
    List(Vec<serde_json::Value>),
    /// A label to value mapping
    Labeled(Vec<(String, serde_json::Value)>),
}

impl RawNode {
    /// Mapping keys as text. YAML allows non-string keys such as `16.0: ...`.
    fn into_key(self) -> Result<String, RawNode> {
        match self {
            RawNode::String(s) => Ok(s),
            RawNode::Number(n) => Ok(n.to_string()),
            RawNode::Bool(b) => Ok(b.to_string()),
            other => Err(other),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            RawNode::Null => serde_json::Value::Null,
            RawNode::Bool(b) => serde_json::Value::Bool(*b),
            RawNode::Number(n) => serde_json::Value::Number(n.clone()),
            RawNode::String(s) => serde_json::Value::String(s.clone()),
            RawNode::List(items) => items.iter().map(RawNode::to_json).collect(),
            RawNode::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| {
                        let key = match k {
                            RawNode::String(s) => s.clone(),
                            other => other.to_json().to_string(),
                        };
                        (key, v.to_json())
                    })
                    .collect(),
            ),
        }
    }

    fn describe(&self) -> String {
        describe(&self.to_json())
    }
}

impl TryFrom<RawNode> for RawEntry {
    type Error = SchemaViolation;

    fn try_from(node: RawNode) -> Result<Self, Self::Error> {
        match node {
            RawNode::Map(fields) => RawQuestion::from_fields(fields).map(RawEntry::Question),
            other => Ok(RawEntry::Shorthand(other.to_json())),
        }
    }
}

impl RawQuestion {
    /// Reads the known fields of a question mapping; unknown fields are ignored.
    fn from_fields(fields: Vec<(RawNode, RawNode)>) -> Result<Self, SchemaViolation> {
        let mut question = RawQuestion::default();
        let mut seen: Vec<String> = Vec::with_capacity(fields.len());

        for (name, value) in fields {
            let name = name
                .into_key()
                .map_err(|key| invalid_field("field name", "a string", &key))?;
            if seen.contains(&name) {
                return Err(SchemaViolation::DuplicateField(name));
            }

            match name.as_str() {
                "help" => question.help = optional_string(&name, value)?,
                "type" => question.r#type = optional_string(&name, value)?,
                "default" => {
                    question.default = match value {
                        RawNode::Null => None,
                        other => Some(other.to_json()),
                    }
                }
                "choices" => question.choices = RawChoices::from_node(&name, value)?,
                "secret" => {
                    question.secret = match value {
                        RawNode::Null => false,
                        RawNode::Bool(b) => b,
                        other => return Err(invalid_field(&name, "a boolean", &other)),
                    }
                }
                _ => log::trace!("Ignoring unknown question field '{name}'"),
            }
            seen.push(name);
        }

        Ok(question)
    }
}

impl RawChoices {
    fn from_node(field: &str, node: RawNode) -> Result<Option<Self>, SchemaViolation> {
        match node {
            RawNode::Null => Ok(None),
            RawNode::List(items) => {
                Ok(Some(RawChoices::List(items.iter().map(RawNode::to_json).collect())))
            }
            RawNode::Map(entries) => {
                let mut labeled = Vec::with_capacity(entries.len());
                for (label, value) in entries {
                    let label = label
                        .into_key()
                        .map_err(|label| invalid_field(field, "labels that are scalars", &label))?;
                    labeled.push((label, value.to_json()));
                }
                Ok(Some(RawChoices::Labeled(labeled)))
            }
            other => Err(invalid_field(field, "a list or a mapping", &other)),
        }
    }
}

fn optional_string(field: &str, node: RawNode) -> Result<Option<String>, SchemaViolation> {
    match node {
        RawNode::Null => Ok(None),
        RawNode::String(s) => Ok(Some(s)),
        other => Err(invalid_field(field, "a string", &other)),
    }
}

fn invalid_field(field: &str, expected: &str, found: &RawNode) -> SchemaViolation {
    SchemaViolation::InvalidField {
        field: field.to_string(),
        expected: expected.to_string(),
        found: found.describe(),
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = RawDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of question keys to question definitions")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawDocument::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, node)) = map.next_entry::<String, RawNode>()? {
                    entries.push((key, node));
                }
                Ok(RawDocument(entries))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

impl<'de> Deserialize<'de> for RawNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = RawNode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("any YAML or JSON value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<RawNode, RawNode>()? {
                    entries.push(entry);
                }
                Ok(RawNode::Map(entries))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element::<RawNode>()? {
                    items.push(item);
                }
                Ok(RawNode::List(items))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawNode::String(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(RawNode::String(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(RawNode::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(RawNode::Number(v.into()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(RawNode::Number(v.into()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                serde_json::Number::from_f64(v)
                    .map(RawNode::Number)
                    .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawNode::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                self.visit_unit()
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
                RawNode::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}
