//! Enumerated answer domains

use crate::config::raw::RawChoices;
use crate::config::types::{describe, Value, ValueType};
use crate::error::SchemaViolation;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// A permissible answer with the label shown for it
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub value: Value,
}

/// Ordered set of permissible answers for one question.
///
/// Never empty, labels are unique and every value belongs to the question's
/// declared domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSet {
    choices: Vec<Choice>,
    labeled: bool,
}

impl ChoiceSet {
    pub(crate) fn resolve(
        raw: RawChoices,
        value_type: ValueType,
    ) -> Result<Self, SchemaViolation> {
        let (entries, labeled): (Vec<(Option<String>, serde_json::Value)>, bool) = match raw {
            RawChoices::Labeled(entries) => {
                let entries = entries.into_iter().map(|(label, v)| (Some(label), v)).collect();
                (entries, true)
            }
            RawChoices::List(items) => {
                let mut labeled = false;
                let entries = items
                    .into_iter()
                    .map(|item| match split_pair(item) {
                        Ok((label, value)) => {
                            labeled = true;
                            (Some(label), value)
                        }
                        Err(item) => (None, item),
                    })
                    .collect();
                (entries, labeled)
            }
        };

        if entries.is_empty() {
            return Err(SchemaViolation::EmptyChoices);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut choices = Vec::with_capacity(entries.len());
        for (label, raw_value) in entries {
            let value = value_type.coerce(&raw_value).ok_or_else(|| {
                SchemaViolation::ChoiceTypeMismatch {
                    label: label.clone().unwrap_or_else(|| raw_value.to_string()),
                    expected: value_type.to_string(),
                    found: describe(&raw_value),
                }
            })?;
            let label = label.unwrap_or_else(|| value.to_string());
            if !seen.insert(label.clone()) {
                return Err(SchemaViolation::DuplicateChoiceLabel(label));
            }
            choices.push(Choice { label, value });
        }

        Ok(Self { choices, labeled })
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.position(value).is_some()
    }

    /// Index of the first choice holding `value`.
    pub fn position(&self, value: &Value) -> Option<usize> {
        self.choices.iter().position(|choice| &choice.value == value)
    }

    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.choices.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.choices.iter().map(|choice| choice.label.clone()).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.choices.iter().map(|choice| &choice.value)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Whether the document gave labels explicitly.
    pub fn is_labeled(&self) -> bool {
        self.labeled
    }
}

impl<'a> IntoIterator for &'a ChoiceSet {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ChoiceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.labeled {
            let mut map = serializer.serialize_map(Some(self.choices.len()))?;
            for choice in &self.choices {
                map.serialize_entry(&choice.label, &choice.value)?;
            }
            map.end()
        } else {
            let mut seq = serializer.serialize_seq(Some(self.choices.len()))?;
            for choice in &self.choices {
                seq.serialize_element(&choice.value)?;
            }
            seq.end()
        }
    }
}

/// Splits a `[label, value]` pair, handing anything else back untouched.
fn split_pair(item: serde_json::Value) -> Result<(String, serde_json::Value), serde_json::Value> {
    let pair = match &item {
        serde_json::Value::Array(pair) => match pair.as_slice() {
            [serde_json::Value::String(label), value] => Some((label.clone(), value.clone())),
            _ => None,
        },
        _ => None,
    };
    pair.ok_or(item)
}
