//! Required-documents handler

use super::render::{record_title, BULLET};
use crate::knowledge::KnowledgeStore;
use crate::types::FieldValue;

/// List the documents needed for an application, one bullet per document.
pub fn documents_list(store: &KnowledgeStore, certificate: Option<&str>) -> String {
    let Some(cert) = certificate else {
        return "For which certificate would you like the required documents?".to_string();
    };
    let Some(record) = store.lookup(cert) else {
        return format!("Sorry, I don't have document requirements for {cert}.");
    };

    let docs = record
        .field("documents_needed")
        .and_then(FieldValue::as_list)
        .unwrap_or(&[]);
    if docs.is_empty() {
        return format!("Sorry, document requirements not available for {cert}.");
    }

    let mut lines = vec![
        format!("Documents Required for {}", record_title(record, cert)),
        String::new(),
    ];
    for doc in docs {
        lines.push(format!("{BULLET}{doc}"));
    }
    lines.join("\n")
}
