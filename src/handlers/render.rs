//! Shared display-text assembly for the fact handlers
//!
//! Every handler builds a `Vec<String>` of lines and joins with `\n`: a title
//! line naming the certificate, a blank separator, then one line per leaf
//! fact. Lists render one bullet per item, nested maps render an indented
//! sub-bullet block, and keyed fee/duration tables render each key
//! title-cased.

use crate::types::{CertificateRecord, FieldValue};
use indexmap::IndexMap;

/// Bullet marker for top-level facts.
pub const BULLET: &str = "• ";
/// Bullet marker for nested sub-facts.
pub const SUB_BULLET: &str = "  • ";

/// How map keys are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// `two_wheeler` → `Two Wheeler`
    Title,
    /// `apl` → `APL` (ration-card acronyms)
    Upper,
}

/// Title-case an identifier or field key for display: underscores become
/// spaces and each word is capitalized (`driving_license` → `Driving License`).
pub fn title_case(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name for a record: the authored `name` field when textual,
/// otherwise the title-cased identifier.
pub fn record_title(record: &CertificateRecord, identifier: &str) -> String {
    record
        .field("name")
        .and_then(FieldValue::as_text)
        .map_or_else(|| title_case(identifier), ToString::to_string)
}

/// Render a key/value map as bulleted lines, one leaf fact per line.
/// Nested maps become a header line plus an indented sub-bullet block.
pub fn push_map_lines(
    lines: &mut Vec<String>,
    map: &IndexMap<String, FieldValue>,
    key_style: KeyStyle,
) {
    for (key, value) in map {
        let shown = match key_style {
            KeyStyle::Title => title_case(key),
            KeyStyle::Upper => key.to_uppercase(),
        };
        match value {
            FieldValue::Text(text) => lines.push(format!("{BULLET}{shown}: {text}")),
            FieldValue::List(items) => {
                lines.push(format!("{shown}:"));
                for item in items {
                    lines.push(format!("{SUB_BULLET}{item}"));
                }
            }
            FieldValue::Map(nested) => {
                lines.push(format!("{shown}:"));
                for (sub_key, sub_value) in nested {
                    lines.push(format!(
                        "{SUB_BULLET}{}: {}",
                        title_case(sub_key),
                        leaf_text(sub_value)
                    ));
                }
            }
        }
    }
}

/// Render any field value as lines: scalars verbatim, lists as bullets,
/// maps via `push_map_lines` with title-cased keys.
pub fn push_value_lines(lines: &mut Vec<String>, value: &FieldValue) {
    match value {
        FieldValue::Text(text) => lines.push(text.clone()),
        FieldValue::List(items) => {
            for item in items {
                lines.push(format!("{BULLET}{item}"));
            }
        }
        FieldValue::Map(map) => push_map_lines(lines, map, KeyStyle::Title),
    }
}

/// Render an ordered step list as numbered lines (`1. …`, `2. …`).
pub fn push_numbered_steps(lines: &mut Vec<String>, steps: &[String]) {
    for (i, step) in steps.iter().enumerate() {
        lines.push(format!("{}. {step}", i + 1));
    }
}

/// Flatten a value to a single display string for contexts that need one
/// line (nested sub-bullet values, appended scalar facts).
pub fn leaf_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::List(items) => items.join(", "),
        FieldValue::Map(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", title_case(k), leaf_text(v)))
            .collect::<Vec<_>>()
            .join("; "),
    }
}
