//! Fixed-lookup catalog handlers
//!
//! These four handlers answer questions that always target one specific
//! record (passport, driving license, ration card) regardless of the tracked
//! certificate slot, so they take no identifier argument.

use super::render::{leaf_text, push_map_lines, KeyStyle, BULLET};
use super::PASSPORT_KEYS;
use crate::knowledge::KnowledgeStore;
use crate::types::{CertificateRecord, FieldValue};

fn lookup_any<'a>(store: &'a KnowledgeStore, keys: &[&str]) -> Option<&'a CertificateRecord> {
    keys.iter().find_map(|key| store.lookup(key))
}

/// The expedited (tatkal) passport track: eligibility, extra documents,
/// fee, and turnaround.
pub fn passport_tatkal_info(store: &KnowledgeStore) -> String {
    let tatkal = lookup_any(store, PASSPORT_KEYS)
        .and_then(|record| record.field("tatkal_passport_procedure"))
        .and_then(FieldValue::as_map);
    let Some(tatkal) = tatkal else {
        return "Sorry, I don't have Tatkal passport information available.".to_string();
    };

    let eligibility = tatkal
        .get("eligibility")
        .map_or_else(|| "Not specified".to_string(), leaf_text);
    let fee = tatkal
        .get("processing_fee")
        .map_or_else(|| "Not specified".to_string(), leaf_text);
    let time = tatkal
        .get("processing_time")
        .map_or_else(|| "Not specified".to_string(), leaf_text);

    let mut lines = vec![
        "Tatkal Passport Procedure".to_string(),
        String::new(),
        format!("Eligibility: {eligibility}"),
        String::new(),
        "Additional Documents Needed:".to_string(),
    ];
    if let Some(docs) = tatkal
        .get("additional_documents_needed")
        .and_then(FieldValue::as_list)
    {
        for doc in docs {
            lines.push(format!("{BULLET}{doc}"));
        }
    }
    lines.push(String::new());
    lines.push(format!("Processing Fee: {fee}"));
    lines.push(format!("Processing Time: {time}"));
    lines.join("\n")
}

/// Catalog of driving-license types.
pub fn license_types(store: &KnowledgeStore) -> String {
    let types = lookup_any(store, &["driving license", "driving_license"])
        .and_then(|record| record.field("types_of_license"))
        .and_then(FieldValue::as_map);
    let Some(types) = types else {
        return "Sorry, I don't have driving license type information available.".to_string();
    };

    let mut lines = vec!["Types of Driving Licenses".to_string(), String::new()];
    push_map_lines(&mut lines, types, KeyStyle::Title);
    lines.join("\n")
}

/// Catalog of passport types.
pub fn passport_types(store: &KnowledgeStore) -> String {
    let types = lookup_any(store, PASSPORT_KEYS)
        .and_then(|record| record.field("types_of_passport"))
        .and_then(FieldValue::as_map);
    let Some(types) = types else {
        return "Sorry, I don't have passport type information available.".to_string();
    };

    let mut lines = vec!["Types of Passports".to_string(), String::new()];
    push_map_lines(&mut lines, types, KeyStyle::Title);
    lines.join("\n")
}

/// Catalog of ration-card types. Keys are scheme acronyms (APL, BPL, AAY)
/// and render upper-cased.
pub fn ration_card_types(store: &KnowledgeStore) -> String {
    let types = lookup_any(store, &["ration card", "ration_card"])
        .and_then(|record| record.field("types_of_ration_cards"))
        .and_then(FieldValue::as_map);
    let Some(types) = types else {
        return "Sorry, ration card type information isn't available.".to_string();
    };

    let mut lines = vec![
        "Types of Ration Cards".to_string(),
        String::new(),
        "The Public Distribution System issues these card types:".to_string(),
        String::new(),
    ];
    push_map_lines(&mut lines, types, KeyStyle::Upper);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> KnowledgeStore {
        KnowledgeStore::from_json_str(
            r#"{
                "passport": {
                    "types_of_passport": {
                        "ordinary": "For regular citizens",
                        "official": "For government business"
                    },
                    "tatkal_passport_procedure": {
                        "eligibility": "All applicants except adverse police reports",
                        "additional_documents_needed": ["Standard affidavit", "Verification certificate"],
                        "processing_fee": "2000",
                        "processing_time": "1-3 days"
                    }
                },
                "driving_license": {
                    "types_of_license": {
                        "learner_license": "Provisional license for practice",
                        "permanent_license": "Full driving license"
                    }
                },
                "ration_card": {
                    "types_of_ration_cards": {
                        "apl": "Above Poverty Line households",
                        "bpl": "Below Poverty Line households",
                        "aay": "Antyodaya Anna Yojana, the poorest households"
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn tatkal_info_renders_all_four_facts() {
        let text = passport_tatkal_info(&store());
        assert!(text.starts_with("Tatkal Passport Procedure\n"));
        assert!(text.contains("Eligibility: All applicants except adverse police reports"));
        assert!(text.contains("• Standard affidavit"));
        assert!(text.contains("Processing Fee: 2000"));
        assert!(text.contains("Processing Time: 1-3 days"));
    }

    #[test]
    fn license_types_render_title_cased() {
        let text = license_types(&store());
        assert!(text.contains("• Learner License: Provisional license for practice"));
        assert!(text.contains("• Permanent License: Full driving license"));
    }

    #[test]
    fn ration_card_types_render_upper_cased() {
        let text = ration_card_types(&store());
        assert!(text.contains("• APL: Above Poverty Line households"));
        assert!(text.contains("• BPL: Below Poverty Line households"));
        assert!(text.contains("• AAY: Antyodaya Anna Yojana, the poorest households"));
    }

    #[test]
    fn passport_types_render() {
        let text = passport_types(&store());
        assert!(text.contains("• Ordinary: For regular citizens"));
        assert!(text.contains("• Official: For government business"));
    }

    #[test]
    fn empty_store_yields_fixed_messages() {
        let empty = KnowledgeStore::empty();
        assert_eq!(
            passport_tatkal_info(&empty),
            "Sorry, I don't have Tatkal passport information available."
        );
        assert_eq!(
            license_types(&empty),
            "Sorry, I don't have driving license type information available."
        );
        assert_eq!(
            passport_types(&empty),
            "Sorry, I don't have passport type information available."
        );
        assert_eq!(
            ration_card_types(&empty),
            "Sorry, ration card type information isn't available."
        );
    }
}
