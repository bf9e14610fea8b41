//! Eligibility handler
//!
//! Driving licenses get a special two-part rendering (learner's license age
//! table plus other requirements, then permanent-license requirements); every
//! other certificate renders its eligibility map generically.

use super::render::{leaf_text, push_map_lines, record_title, KeyStyle, BULLET};
use super::is_driving_license;
use crate::knowledge::KnowledgeStore;
use crate::types::FieldValue;
use indexmap::IndexMap;

/// Who qualifies for the certificate.
pub fn check_eligibility(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate would you like to check eligibility?".to_string();
    };
    // An unknown certificate and a record without eligibility data read the
    // same to the user, so both branches share one message.
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have eligibility criteria for {cert}.");
    };
    let Some(eligibility) = record.field("eligibility") else {
        return format!("Sorry, I don't have eligibility criteria for {cert}.");
    };

    let mut lines = vec![
        format!("Eligibility for {}", record_title(record, cert)),
        String::new(),
    ];

    if is_driving_license(cert) {
        if let Some(map) = eligibility.as_map() {
            push_license_eligibility(&mut lines, map);
        } else {
            lines.push(leaf_text(eligibility));
        }
    } else {
        match eligibility {
            FieldValue::Map(map) => push_map_lines(&mut lines, map, KeyStyle::Title),
            other => lines.push(leaf_text(other)),
        }
    }

    lines.join("\n")
}

fn push_license_eligibility(lines: &mut Vec<String>, map: &IndexMap<String, FieldValue>) {
    lines.push("Learner's License:".to_string());
    let learner = map.get("learner_license").and_then(FieldValue::as_map);
    if let Some(learner) = learner {
        if let Some(ages) = learner.get("age_requirement").and_then(FieldValue::as_map) {
            for (vehicle, requirement) in ages {
                lines.push(format!(
                    "{BULLET}{}: {}",
                    super::render::title_case(vehicle),
                    leaf_text(requirement)
                ));
            }
        }
        if let Some(other) = learner.get("other_requirements") {
            lines.push(String::new());
            lines.push("Other Requirements:".to_string());
            lines.push(leaf_text(other));
        }
    }

    lines.push(String::new());
    lines.push("Permanent License:".to_string());
    let permanent = map
        .get("permanent_license")
        .and_then(FieldValue::as_map)
        .and_then(|p| p.get("requirements"));
    if let Some(requirements) = permanent {
        lines.push(leaf_text(requirements));
    }
}
