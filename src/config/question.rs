//! Question definition and answer validation

use crate::config::choice::ChoiceSet;
use crate::config::raw::{RawEntry, RawQuestion};
use crate::config::types::{describe, Value, ValueType};
use crate::constants::{validation, SECRET_MASK};
use crate::error::{Error, Result, SchemaViolation};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Default of a question
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// A value from the question's domain, suggested to the user
    Literal(Value),
    /// Opaque pre-hashed value of a secret question, never redisplayed
    Placeholder(String),
}

/// A single validated question, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDefinition {
    key: String,
    value_type: ValueType,
    default: Option<DefaultValue>,
    choices: Option<ChoiceSet>,
    secret: bool,
    help: String,
}

impl QuestionDefinition {
    pub(crate) fn from_entry(key: String, entry: RawEntry) -> Result<Self> {
        match entry {
            RawEntry::Question(raw) => Self::from_raw(key, raw),
            RawEntry::Shorthand(value) => {
                let value_type = ValueType::infer(&value).ok_or_else(|| {
                    Error::schema(&key, SchemaViolation::UnsupportedShorthand(describe(&value)))
                })?;
                let raw = RawQuestion {
                    r#type: Some(value_type.token().to_string()),
                    default: (!value.is_null()).then_some(value),
                    ..RawQuestion::default()
                };
                Self::from_raw(key, raw)
            }
        }
    }

    fn from_raw(key: String, raw: RawQuestion) -> Result<Self> {
        let value_type = match raw.r#type.as_deref() {
            Some(token) => token.parse::<ValueType>().map_err(|v| Error::schema(&key, v))?,
            None => ValueType::default(),
        };

        let choices = raw
            .choices
            .map(|choices| ChoiceSet::resolve(choices, value_type))
            .transpose()
            .map_err(|v| Error::schema(&key, v))?;

        let default = match raw.default {
            None => None,
            Some(value) if raw.secret => Some(DefaultValue::Placeholder(
                placeholder(value).map_err(|v| Error::schema(&key, v))?,
            )),
            Some(value) => Some(DefaultValue::Literal(
                literal_default(value, value_type, choices.as_ref())
                    .map_err(|v| Error::schema(&key, v))?,
            )),
        };

        Ok(Self {
            key,
            value_type,
            default,
            choices,
            secret: raw.secret,
            help: raw.help.unwrap_or_default(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// The default as a value the user may be offered; `None` for secrets.
    pub fn suggested_default(&self) -> Option<&Value> {
        match &self.default {
            Some(DefaultValue::Literal(value)) => Some(value),
            _ => None,
        }
    }

    pub fn choices(&self) -> Option<&ChoiceSet> {
        self.choices.as_ref()
    }

    pub fn is_secret(&self) -> bool {
        self.secret
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Text shown when asking: the help text, or the key when there is none.
    pub fn prompt_text(&self) -> &str {
        match self.help.trim() {
            "" => self.key.as_str(),
            help => help,
        }
    }

    /// Default as it may be shown to a user.
    pub fn display_default(&self) -> Option<String> {
        match &self.default {
            Some(DefaultValue::Literal(value)) => Some(value.to_string()),
            Some(DefaultValue::Placeholder(_)) => Some(SECRET_MASK.to_string()),
            None => None,
        }
    }

    /// Validates a raw answer against the declared domain and choice set.
    ///
    /// Strings are parsed for `float` and `bool` questions so that answers
    /// typed on a terminal or passed as text are accepted.
    pub fn validate_answer(&self, raw: &serde_json::Value) -> Result<Value> {
        let value = match raw {
            serde_json::Value::String(text) => self.value_type.parse_input(text),
            other => self.value_type.coerce(other),
        }
        .ok_or_else(|| {
            Error::ValidationError(format!(
                "answer for '{}' must be {}, got {}",
                self.key,
                self.value_type,
                self.redact(|| describe(raw))
            ))
        })?;
        self.check_choice(value)
    }

    /// Restricts an already typed value to the choice set, if any.
    pub fn check_choice(&self, value: Value) -> Result<Value> {
        match &self.choices {
            Some(choices) if !choices.contains(&value) => Err(Error::ValidationError(format!(
                "'{}' {} for '{}'",
                self.redact(|| value.to_string()),
                validation::NOT_A_CHOICE,
                self.key
            ))),
            _ => Ok(value),
        }
    }

    /// Answers to secret questions never appear in messages.
    fn redact(&self, shown: impl FnOnce() -> String) -> String {
        if self.secret {
            SECRET_MASK.to_string()
        } else {
            shown()
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DefaultValue::Literal(value) => value.serialize(serializer),
            DefaultValue::Placeholder(hash) => serializer.serialize_str(hash),
        }
    }
}

/// Serializes the question body; the key is written by the enclosing set.
impl Serialize for QuestionDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.value_type.token())?;
        if !self.help.is_empty() {
            map.serialize_entry("help", &self.help)?;
        }
        if let Some(default) = &self.default {
            map.serialize_entry("default", default)?;
        }
        if let Some(choices) = &self.choices {
            map.serialize_entry("choices", choices)?;
        }
        if self.secret {
            map.serialize_entry("secret", &true)?;
        }
        map.end()
    }
}

fn literal_default(
    raw: serde_json::Value,
    value_type: ValueType,
    choices: Option<&ChoiceSet>,
) -> std::result::Result<Value, SchemaViolation> {
    let value = value_type.coerce(&raw).ok_or_else(|| SchemaViolation::DefaultTypeMismatch {
        expected: value_type.to_string(),
        found: describe(&raw),
    })?;
    match choices {
        Some(choices) if !choices.contains(&value) => {
            Err(SchemaViolation::DefaultNotInChoices(value.to_string()))
        }
        _ => Ok(value),
    }
}

/// Secret defaults are kept as opaque text, whatever scalar they were written as.
fn placeholder(raw: serde_json::Value) -> std::result::Result<String, SchemaViolation> {
    match raw {
        serde_json::Value::String(hash) => Ok(hash),
        serde_json::Value::Number(_) | serde_json::Value::Bool(_) => Ok(raw.to_string()),
        other => Err(SchemaViolation::DefaultTypeMismatch {
            expected: "an opaque string".to_string(),
            found: describe(&other),
        }),
    }
}
