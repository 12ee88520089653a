use crate::errors::CodecError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

/// The attribute context shared by every message in a batch.
///
/// Two attribute sets are the same context when they hold the same keys mapped to equal
/// values, regardless of insertion order.
pub type MessageAttributes = BTreeMap<String, AttributeValue>;

/// Collects `(name, value)` pairs into a [MessageAttributes] map.
///
/// ```
/// use courier_std::types::{attributes, AttributeValue};
///
/// let attrs = attributes([("price", 100)]);
/// assert_eq!(attrs["price"], AttributeValue::Integer(100));
/// ```
pub fn attributes<I, K, V>(pairs: I) -> MessageAttributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<AttributeValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// A raw, typed attribute value as supplied by the caller.
///
/// Numbers compare by value, so `Integer(100)` equals `Float(100.0)`.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    String(String),
    StringArray(Vec<String>),
    Boolean(bool),
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                *a as f64 == *b
            }
            (Self::String(a), Self::String(b)) => a == b,
            (Self::StringArray(a), Self::StringArray(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringArray(value)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(value: Vec<&str>) -> Self {
        Self::StringArray(value.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttributeValue {
    fn from(value: [&str; N]) -> Self {
        Self::StringArray(value.into_iter().map(str::to_owned).collect())
    }
}

/// The data type tag the remote service expects alongside every attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Number,
    String,
    #[serde(rename = "String.Array")]
    StringArray,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Number => "Number",
            DataType::String => "String",
            DataType::StringArray => "String.Array",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Number" => Ok(DataType::Number),
            "String" => Ok(DataType::String),
            "String.Array" => Ok(DataType::StringArray),
            other => Err(CodecError::UnknownDataType(other.to_owned())),
        }
    }
}

/// An attribute value in its wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageAttribute {
    pub data_type: DataType,
    pub string_value: String,
}

impl MessageAttribute {
    pub fn new(data_type: DataType, string_value: impl Into<String>) -> Self {
        Self {
            data_type,
            string_value: string_value.into(),
        }
    }
}
