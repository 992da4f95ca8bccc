//! Attribute Value Object
//!
//! Attributes are an open key → value bag attached to a file pattern.
//! Values are a tagged variant so that the wire layer can encode them
//! without runtime type inspection.

use std::collections::BTreeMap;
use std::fmt;

/// A single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<AttributeValue>),
    Map(BTreeMap<String, AttributeValue>),
}

impl AttributeValue {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    fn check_encodable(&self, path: &str) -> Result<(), EncodingIssue> {
        match self {
            Self::Number(n) if !n.is_finite() => Err(EncodingIssue {
                key: path.to_string(),
                reason: format!("number {} is not finite", n),
            }),
            Self::List(items) => items
                .iter()
                .enumerate()
                .try_for_each(|(i, item)| item.check_encodable(&format!("{}[{}]", path, i))),
            Self::Map(entries) => entries.iter().try_for_each(|(key, value)| {
                if key.is_empty() {
                    return Err(EncodingIssue {
                        key: path.to_string(),
                        reason: "nested map has an empty key".to_string(),
                    });
                }
                value.check_encodable(&format!("{}.{}", path, key))
            }),
            _ => Ok(()),
        }
    }

    /// JSON form of the value
    ///
    /// Integral numbers become JSON integers; non-finite numbers become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) if is_integral(*n) => serde_json::Value::from(*n as i64),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15
}

/// Scalars print bare; lists and maps print as JSON.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) if is_integral(*n) => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
            Self::List(_) | Self::Map(_) => write!(f, "{}", self.to_json()),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(items: Vec<AttributeValue>) -> Self {
        Self::List(items)
    }
}

/// Why an attribute value cannot be put on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingIssue {
    /// Key path of the offending value (`size.ratio`, `tags[2]`)
    pub key: String,
    pub reason: String,
}

/// Ordered attribute map
///
/// Keys iterate in sorted order so notices and wire output are stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    /// Check that every value has a structured-value representation
    ///
    /// Non-finite numbers and empty keys are rejected.
    pub fn check_encodable(&self) -> Result<(), EncodingIssue> {
        self.0.iter().try_for_each(|(key, value)| {
            if key.is_empty() {
                return Err(EncodingIssue {
                    key: String::new(),
                    reason: "attribute key is empty".to_string(),
                });
            }
            value.check_encodable(key)
        })
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttributeValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
