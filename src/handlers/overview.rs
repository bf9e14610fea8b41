//! Overview, issuing-authority, and validity handlers

use super::render::{push_value_lines, record_title, title_case, BULLET};
use super::is_passport;
use crate::knowledge::KnowledgeStore;
use crate::types::FieldValue;

/// General certificate overview: definition (or purpose), issuing authority,
/// and for passports the available passport types.
pub fn certificate_info(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "Please specify which certificate you need information about.".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have information about {cert} certificates.");
    };

    let description = record
        .first_of(&["definition", "purpose"])
        .and_then(FieldValue::as_text)
        .unwrap_or("No description available");
    let issuing = record
        .field("issuing_authority")
        .and_then(FieldValue::as_text)
        .unwrap_or("Not specified");

    let mut lines = vec![
        record_title(record, cert),
        String::new(),
        "Description:".to_string(),
        description.to_string(),
        String::new(),
        "Issuing Authority:".to_string(),
        issuing.to_string(),
    ];

    // Passports get their type catalog appended to the overview.
    if is_passport(cert) {
        if let Some(types) = record.field("types_of_passport").and_then(FieldValue::as_map) {
            lines.push(String::new());
            lines.push("Types Available:".to_string());
            for (p_type, p_desc) in types {
                lines.push(format!(
                    "{BULLET}{}: {}",
                    title_case(p_type),
                    super::render::leaf_text(p_desc)
                ));
            }
        }
    }

    lines.join("\n")
}

/// Which office issues the certificate. Probes the three field spellings the
/// knowledge file uses.
pub fn issuing_authority(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "Please specify which certificate's issuing authority you need.".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have issuing authority information for {cert}.");
    };

    let Some(authority) = record.first_of(&["issuing_authority", "issued_by", "issuing_office"])
    else {
        return format!("Issuing authority information not available for {cert}.");
    };

    let mut lines = vec![
        format!("Issuing Authority for {}", record_title(record, cert)),
        String::new(),
    ];
    push_value_lines(&mut lines, authority);
    lines.join("\n")
}

/// How long the certificate stays valid. Falls back to a generic sentence
/// when the record carries neither `validity` nor `expiry`.
pub fn validity_info(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate would you like validity information?".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have validity information for {cert}.");
    };

    let mut lines = vec![
        format!("Validity Information for {}", record_title(record, cert)),
        String::new(),
    ];
    match record.first_of(&["validity", "expiry"]) {
        Some(value) => push_value_lines(&mut lines, value),
        None => lines.push("Typically valid until cancelled or updated".to_string()),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> KnowledgeStore {
        KnowledgeStore::from_json_str(
            r#"{
                "passport": {
                    "name": "Passport",
                    "definition": "An official travel document issued to citizens.",
                    "issuing_authority": "Ministry of External Affairs",
                    "types_of_passport": {
                        "ordinary": "For regular citizens",
                        "diplomatic": "For diplomats"
                    },
                    "validity": "10 years"
                },
                "voter_id": {
                    "purpose": "Proof of registration on the electoral roll.",
                    "issued_by": "Election Commission of India"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn overview_prompts_without_certificate() {
        assert_eq!(
            certificate_info(&store(), None),
            "Please specify which certificate you need information about."
        );
    }

    #[test]
    fn overview_names_unknown_certificate() {
        let text = certificate_info(&store(), Some("degree"));
        assert_eq!(text, "Sorry, I don't have information about degree certificates.");
    }

    #[test]
    fn passport_overview_lists_types() {
        let text = certificate_info(&store(), Some("passport"));
        assert!(text.starts_with("Passport\n"));
        assert!(text.contains("An official travel document"));
        assert!(text.contains("Ministry of External Affairs"));
        assert!(text.contains("• Ordinary: For regular citizens"));
        assert!(text.contains("• Diplomatic: For diplomats"));
    }

    #[test]
    fn purpose_substitutes_for_definition() {
        let text = certificate_info(&store(), Some("voter_id"));
        assert!(text.contains("Proof of registration"));
        assert!(text.contains("Not specified"));
    }

    #[test]
    fn issuing_authority_probes_issued_by() {
        let text = issuing_authority(&store(), Some("voter id"));
        assert!(text.contains("Election Commission of India"));
    }

    #[test]
    fn validity_falls_back_to_generic_sentence() {
        let text = validity_info(&store(), Some("voter_id"));
        assert!(text.contains("Typically valid until cancelled or updated"));
    }

    #[test]
    fn validity_renders_authored_value() {
        let text = validity_info(&store(), Some("passport"));
        assert!(text.contains("10 years"));
    }
}
