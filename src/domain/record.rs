//! Typed configuration record produced by a successful fetch.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::domain::AppError;

/// Declared type of a remote variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    String,
    Int,
    Float,
    Bool,
    Code,
    Html,
}

impl VariableType {
    /// Every accepted type, in the order the service documents them.
    pub const ALL: [VariableType; 6] = [
        VariableType::String,
        VariableType::Int,
        VariableType::Float,
        VariableType::Bool,
        VariableType::Code,
        VariableType::Html,
    ];

    /// Wire representation of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Int => "int",
            VariableType::Float => "float",
            VariableType::Bool => "bool",
            VariableType::Code => "code",
            VariableType::Html => "html",
        }
    }
}

impl FromStr for VariableType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variable_type| variable_type.as_str() == s)
            .ok_or_else(|| AppError::invalid_argument(format!("Unknown variable type '{}'", s)))
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar value carried by a variable.
///
/// The variant is not cross-checked against the declared [`VariableType`]: a `type` of
/// `int` may arrive with a string value and is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl VariableValue {
    /// Convert a decoded JSON scalar. Returns `None` for null, arrays and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(VariableValue::String(s.clone())),
            Value::Bool(b) => Some(VariableValue::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(VariableValue::Int(i)),
                None => n.as_f64().map(VariableValue::Float),
            },
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            VariableValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            VariableValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floating-point view; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            VariableValue::Float(f) => Some(*f),
            VariableValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VariableValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            VariableValue::String(_) => "string",
            VariableValue::Int(_) => "int",
            VariableValue::Float(_) => "float",
            VariableValue::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::String(s) => f.write_str(s),
            VariableValue::Int(i) => write!(f, "{}", i),
            VariableValue::Float(v) => write!(f, "{:?}", v),
            VariableValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::String(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::String(value)
    }
}

impl From<i64> for VariableValue {
    fn from(value: i64) -> Self {
        VariableValue::Int(value)
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        VariableValue::Float(value)
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        VariableValue::Bool(value)
    }
}

/// Immutable, already-validated configuration variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationRecord {
    slug: String,
    variable_type: VariableType,
    value: VariableValue,
    created_at: DateTime<FixedOffset>,
    updated_at: DateTime<FixedOffset>,
}

impl ConfigurationRecord {
    pub fn new(
        slug: impl Into<String>,
        variable_type: VariableType,
        value: VariableValue,
        created_at: DateTime<FixedOffset>,
        updated_at: DateTime<FixedOffset>,
    ) -> Self {
        Self { slug: slug.into(), variable_type, value, created_at, updated_at }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn variable_type(&self) -> VariableType {
        self.variable_type
    }

    pub fn value(&self) -> &VariableValue {
        &self.value
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<FixedOffset> {
        self.updated_at
    }
}
