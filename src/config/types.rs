//! Value domains and typed values for questions

use crate::error::SchemaViolation;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Value domain declared by a question's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    /// Free text, `str` in question files
    #[default]
    String,
    /// Floating point number, `float`
    Float,
    /// Yes/no answer, `bool`
    Boolean,
}

/// A value that belongs to one of the [`ValueType`] domains
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Boolean(bool),
}

impl ValueType {
    /// Canonical token written back when serializing a question.
    pub fn token(&self) -> &'static str {
        match self {
            ValueType::String => "str",
            ValueType::Float => "float",
            ValueType::Boolean => "bool",
        }
    }

    /// Checks a raw document value against this domain.
    ///
    /// Integers are accepted for `float`; no other conversion takes place.
    pub fn coerce(&self, raw: &serde_json::Value) -> Option<Value> {
        match (self, raw) {
            (ValueType::String, serde_json::Value::String(s)) => {
                Some(Value::String(s.clone()))
            }
            (ValueType::Float, serde_json::Value::Number(n)) => n.as_f64().map(Value::Float),
            (ValueType::Boolean, serde_json::Value::Bool(b)) => Some(Value::Boolean(*b)),
            _ => None,
        }
    }

    /// Parses text typed by a user or passed as a string answer.
    pub fn parse_input(&self, input: &str) -> Option<Value> {
        match self {
            ValueType::String => Some(Value::String(input.to_string())),
            ValueType::Float => input
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::Float),
            ValueType::Boolean => match input.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "on" => Some(Value::Boolean(true)),
                "false" | "no" | "n" | "off" => Some(Value::Boolean(false)),
                _ => None,
            },
        }
    }

    /// Domain of a shorthand `key: value` entry, inferred from the value.
    pub fn infer(raw: &serde_json::Value) -> Option<ValueType> {
        match raw {
            serde_json::Value::Null | serde_json::Value::String(_) => Some(ValueType::String),
            serde_json::Value::Number(_) => Some(ValueType::Float),
            serde_json::Value::Bool(_) => Some(ValueType::Boolean),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl FromStr for ValueType {
    type Err = SchemaViolation;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "str" | "string" => Ok(ValueType::String),
            "float" => Ok(ValueType::Float),
            "bool" | "boolean" => Ok(ValueType::Boolean),
            other => Err(SchemaViolation::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Float(_) => ValueType::Float,
            Value::Boolean(_) => ValueType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            // Debug keeps the fractional part, so 18.0 is not shown as 18
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Short description of a raw value's kind, used in error messages.
pub(crate) fn describe(raw: &serde_json::Value) -> String {
    let kind = match raw {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a mapping",
    };
    match raw {
        serde_json::Value::Array(_) | serde_json::Value::Object(_) | serde_json::Value::Null => {
            kind.to_string()
        }
        _ => format!("{kind} ({raw})"),
    }
}
