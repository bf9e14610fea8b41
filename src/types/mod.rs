//! Core value types for the certificate knowledge table
//!
//! The knowledge file is schemaless: a field may be a plain string, a list of
//! strings, or a nested mapping (fees broken down by sub-type, eligibility per
//! license class, and so on), and the same field name may take different shapes
//! on different records. `FieldValue` makes that variance explicit so handlers
//! pattern-match instead of probing types ad hoc.

use indexmap::IndexMap;
use serde_json::Value;

/// One field of a certificate record.
///
/// Built by conversion from raw JSON rather than serde's untagged dispatch so
/// that scalar non-strings (numbers, booleans) degrade to display text instead
/// of failing the whole load.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A single display string
    Text(String),
    /// An ordered list of display strings (documents, steps)
    List(Vec<String>),
    /// A nested mapping in authored order (fee tables, type catalogs)
    Map(IndexMap<String, FieldValue>),
}

impl FieldValue {
    /// The value as a plain string, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value as a list of strings, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// The value as a nested mapping, if it is one.
    pub fn as_map(&self) -> Option<&IndexMap<String, FieldValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Text(String::new()),
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Number(n) => Self::Text(n.to_string()),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(items) => Self::List(items.iter().map(scalar_text).collect()),
            Value::Object(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Flatten a list element to display text. Authored lists hold strings; any
/// other shape is rendered as compact JSON rather than dropped.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Structured fact bundle about one certificate type.
///
/// Records are read-only once loaded; handlers that augment a field before
/// rendering (the passport tatkal fee) clone it first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CertificateRecord {
    fields: IndexMap<String, FieldValue>,
}

impl CertificateRecord {
    /// Build a record from a JSON object. Non-object values yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            fields: map
                .iter()
                .map(|(k, v)| (k.clone(), FieldValue::from(v)))
                .collect(),
        })
    }

    /// Look up a single field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Probe a prioritized list of alternative field names, returning the
    /// first one present. The knowledge file is inconsistent about naming
    /// (`cost` vs `fee_structure` vs `fees`); every handler goes through
    /// this one helper instead of re-implementing the probe.
    pub fn first_of(&self, names: &[&str]) -> Option<&FieldValue> {
        names.iter().find_map(|name| self.fields.get(*name))
    }

    /// Whether the record carries a field under the given name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate fields in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Number of fields on the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
