//! Fee/cost handler

use super::render::{push_map_lines, record_title, KeyStyle, BULLET};
use super::is_passport;
use crate::knowledge::KnowledgeStore;
use crate::types::FieldValue;
use indexmap::IndexMap;

/// Fee field spellings in priority order.
const FEE_FIELDS: &[&str] = &["cost", "fee_structure", "fees"];

/// Render the fee table for a certificate.
///
/// For passports the tatkal processing fee lives under
/// `tatkal_passport_procedure`, not in the fee table; it is merged in as an
/// extra `tatkal` entry. The merge works on a clone — the record in the
/// shared store is never touched.
pub fn cost_info(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate would you like fee information?".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have fee details for {cert}.");
    };

    let mut fee_map: IndexMap<String, FieldValue> = IndexMap::new();
    let mut scalar_fee: Option<String> = None;
    match record.first_of(FEE_FIELDS) {
        Some(FieldValue::Map(map)) => fee_map = map.clone(),
        Some(FieldValue::Text(text)) => scalar_fee = Some(text.clone()),
        Some(FieldValue::List(items)) => {
            // A bare fee list has no sub-type keys; show it as one line.
            scalar_fee = Some(items.join(", "));
        }
        None => {}
    }

    if is_passport(cert) {
        let tatkal_fee = record
            .field("tatkal_passport_procedure")
            .and_then(FieldValue::as_map)
            .and_then(|tatkal| tatkal.get("processing_fee"))
            .and_then(FieldValue::as_text);
        if let Some(fee) = tatkal_fee {
            fee_map.insert("tatkal".to_string(), FieldValue::Text(fee.to_string()));
        }
    }

    if fee_map.is_empty() && scalar_fee.is_none() {
        return format!("Fee information not available for {cert}.");
    }

    let mut lines = vec![format!("Fees for {}", record_title(record, cert)), String::new()];
    if let Some(fee) = scalar_fee {
        lines.push(format!("{BULLET}Standard Fee: {fee}"));
    }
    push_map_lines(&mut lines, &fee_map, KeyStyle::Title);
    lines.join("\n")
}
