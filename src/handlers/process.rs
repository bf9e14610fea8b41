//! Application-process, online-application, processing-time, and
//! duplicate/lost handlers

use super::render::{
    leaf_text, push_map_lines, push_numbered_steps, record_title, KeyStyle, BULLET,
};
use super::is_passport;
use crate::knowledge::KnowledgeStore;
use crate::types::{CertificateRecord, FieldValue};
use indexmap::IndexMap;

/// Fixed instruction list appended to every online-application answer.
const ONLINE_STEPS: [&str; 6] = [
    "1. Visit the portal",
    "2. Create an account",
    "3. Fill the application form",
    "4. Upload required documents",
    "5. Pay the fees",
    "6. Track your application",
];

/// Step-by-step application process, with processing time and where-to-apply
/// appended when the record carries them.
///
/// `application_process` is authored either as a bare step list or as a
/// sub-record with `steps`/`processing_time`/`where_to_apply`; driving
/// licenses keep their steps under `learner_license` instead.
pub fn application_process(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate would you like the application process?".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have application process details for {cert}.");
    };

    // A bare list is treated as {steps: list} with no extra fields.
    let (steps, details): (&[String], Option<&IndexMap<String, FieldValue>>) =
        match record.first_of(&["application_process", "learner_license"]) {
            Some(FieldValue::List(items)) => (items.as_slice(), None),
            Some(FieldValue::Map(map)) => match map.get("steps").and_then(FieldValue::as_list) {
                Some(items) => (items, Some(map)),
                None => (&[], Some(map)),
            },
            _ => (&[], None),
        };

    if steps.is_empty() {
        return format!("Sorry, application process not available for {cert}.");
    }

    let mut lines = vec![
        format!("Application Process for {}", record_title(record, cert)),
        String::new(),
        "Steps:".to_string(),
    ];
    push_numbered_steps(&mut lines, steps);

    if let Some(details) = details {
        if let Some(time) = details.get("processing_time") {
            lines.push(String::new());
            lines.push("Processing Time:".to_string());
            match time {
                FieldValue::Map(map) => push_map_lines(&mut lines, map, KeyStyle::Title),
                other => lines.push(leaf_text(other)),
            }
        }
        if let Some(place) = details.get("where_to_apply") {
            lines.push(String::new());
            lines.push("Where to Apply:".to_string());
            lines.push(leaf_text(place));
        }
    }

    lines.join("\n")
}

/// Where (and how) to apply online. The portal URL is probed from three
/// places: a dedicated `online_portal` field, a URL-looking
/// `application_process.where_to_apply`, or `online_services.apply_online`.
pub fn online_application(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate would you like online application information?".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have online application details for {cert}.");
    };

    let portal = record
        .field("online_portal")
        .and_then(FieldValue::as_text)
        .or_else(|| {
            record
                .field("application_process")
                .and_then(FieldValue::as_map)
                .and_then(|process| process.get("where_to_apply"))
                .and_then(FieldValue::as_text)
                .filter(|place| place.contains("http"))
        })
        .or_else(|| {
            record
                .field("online_services")
                .and_then(FieldValue::as_map)
                .and_then(|services| services.get("apply_online"))
                .and_then(FieldValue::as_text)
        });

    let Some(portal) = portal else {
        return format!("Sorry, online application is not available for {cert}.");
    };

    let mut lines = vec![
        format!("Online Application for {}", record_title(record, cert)),
        String::new(),
        format!("Portal: {portal}"),
        String::new(),
        "Application Steps:".to_string(),
    ];
    lines.extend(ONLINE_STEPS.iter().map(ToString::to_string));
    lines.join("\n")
}

/// Expected processing time, with duplicate-card and correction times
/// appended when the record tracks them separately.
pub fn processing_time(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate would you like processing time information?".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have processing time details for {cert}.");
    };

    let mut lines = vec![
        format!("Processing Time for {}", record_title(record, cert)),
        String::new(),
    ];

    if let Some(info) = record.field("processing_time") {
        push_time_lines(&mut lines, info);
    } else if let Some(info) = record
        .field("application_process")
        .and_then(FieldValue::as_map)
        .and_then(|process| process.get("processing_time"))
    {
        push_time_lines(&mut lines, info);
    } else if let Some(tatkal_time) = passport_tatkal_time(record, cert) {
        // Passport-only: synthesize a normal/tatkal table from the tatkal
        // procedure sub-record.
        lines.push(format!("{BULLET}Normal: Not specified"));
        lines.push(format!("{BULLET}Tatkal: {tatkal_time}"));
    } else {
        return format!("Processing time information not available for {cert}.");
    }

    for (field, label) in [
        ("duplicate_card", "Duplicate Processing"),
        ("correction_or_update", "Correction Processing"),
    ] {
        let extra = record
            .field(field)
            .and_then(FieldValue::as_map)
            .and_then(|sub| sub.get("processing_time"));
        if let Some(extra) = extra {
            lines.push(String::new());
            lines.push(format!("{BULLET}{label}: {}", leaf_text(extra)));
        }
    }

    lines.join("\n")
}

fn push_time_lines(lines: &mut Vec<String>, info: &FieldValue) {
    match info {
        FieldValue::Map(map) => push_map_lines(lines, map, KeyStyle::Title),
        FieldValue::List(items) => {
            for item in items {
                lines.push(format!("{BULLET}{item}"));
            }
        }
        FieldValue::Text(text) => lines.push(format!("{BULLET}Standard Processing: {text}")),
    }
}

fn passport_tatkal_time(record: &CertificateRecord, cert: &str) -> Option<String> {
    if !is_passport(cert) {
        return None;
    }
    let time = record
        .field("tatkal_passport_procedure")
        .and_then(FieldValue::as_map)?
        .get("processing_time")
        .and_then(FieldValue::as_text)
        .unwrap_or("1-3 days");
    Some(time.to_string())
}

/// How to get a duplicate for a lost or damaged certificate.
pub fn duplicate_info(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate do you need duplicate information?".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have duplicate certificate details for {cert}.");
    };

    let Some(dup) = record
        .first_of(&["duplicate_certificate", "lost_or_damaged_passport"])
        .and_then(FieldValue::as_map)
    else {
        return format!("Duplicate process not available for {cert}.");
    };

    let mut lines = vec![
        format!("Process for Duplicate {}", record_title(record, cert)),
        String::new(),
    ];

    if let Some(steps) = dup.get("how_to_get").and_then(FieldValue::as_list) {
        lines.push("Steps to Obtain Duplicate:".to_string());
        push_numbered_steps(&mut lines, steps);
    } else if let Some(steps) = dup.get("how_to_replace").and_then(FieldValue::as_list) {
        lines.push("Replacement Process:".to_string());
        push_numbered_steps(&mut lines, steps);
    }

    if let Some(time) = dup.get("processing_time") {
        lines.push(String::new());
        lines.push(format!("Processing Time: {}", leaf_text(time)));
    }
    if let Some(cost) = dup.get("cost") {
        lines.push(String::new());
        lines.push(format!("Cost: ₹{}", leaf_text(cost)));
    }

    lines.join("\n")
}
