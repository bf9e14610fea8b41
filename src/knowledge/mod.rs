//! Certificate knowledge store
//!
//! Loads the static JSON knowledge file once at startup and serves read-only
//! lookups for the rest of the process lifetime. Authored keys are
//! conventionally underscore-separated (`driving_license`); every key is also
//! registered under its space variant so callers need not know which separator
//! the record was authored with.
//!
//! A missing or malformed file degrades to an empty store (every lookup then
//! misses, and handlers answer with their fixed "no information" messages).
//! There is no partial-load recovery: the file is read once and a host restart
//! is the recovery path.

use crate::types::CertificateRecord;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Knowledge file load failures.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("knowledge file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("knowledge file root must be a JSON object keyed by certificate identifier")]
    NotAnObject,
}

/// Immutable mapping from normalized certificate identifier to record.
///
/// Built once, never mutated afterwards — safe to share by reference across
/// request handlers without locking.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    records: IndexMap<String, CertificateRecord>,
}

impl KnowledgeStore {
    /// An empty store. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the knowledge file, degrading to an empty store on failure.
    ///
    /// This is the startup entry point: load errors are logged, not
    /// propagated, so the assistant keeps answering (with "no information"
    /// messages) instead of crashing the host runtime.
    pub fn load(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(store) => {
                info!(
                    path = %path.display(),
                    certificates = store.identifiers().count(),
                    "knowledge store loaded"
                );
                store
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load knowledge file — continuing with an empty store"
                );
                Self::empty()
            }
        }
    }

    /// Load the knowledge file, surfacing errors to the caller.
    pub fn from_path(path: &Path) -> Result<Self, KnowledgeError> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Build a store from raw JSON text. Used by `from_path` and by tests
    /// injecting fixtures without touching the filesystem.
    pub fn from_json_str(raw: &str) -> Result<Self, KnowledgeError> {
        let root: Value = serde_json::from_str(raw)?;
        let object = root.as_object().ok_or(KnowledgeError::NotAnObject)?;

        let mut records = IndexMap::new();
        for (key, value) in object {
            let Some(record) = CertificateRecord::from_value(value) else {
                warn!(key, "skipping non-object knowledge entry");
                continue;
            };
            let lowered = key.to_lowercase();
            let spaced = lowered.replace('_', " ");
            // Register both separator variants of every authored key.
            records.insert(lowered, record.clone());
            records.insert(spaced, record);
        }

        Ok(Self { records })
    }

    /// Resolve a certificate identifier to its record.
    ///
    /// Tries the lower-cased identifier as-is, then with spaces replaced by
    /// underscores. `None` is a normal, user-facing branch — callers render
    /// a fixed "no information" message, they do not treat it as an error.
    pub fn lookup(&self, identifier: &str) -> Option<&CertificateRecord> {
        let lowered = identifier.to_lowercase();
        self.records
            .get(&lowered)
            .or_else(|| self.records.get(&lowered.replace(' ', "_")))
    }

    /// Authored identifiers in load order, without the duplicated space
    /// variants.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.keys().filter_map(|key| {
            if key.contains(' ') && self.records.contains_key(&key.replace(' ', "_")) {
                None
            } else {
                Some(key.as_str())
            }
        })
    }

    /// Whether the store holds no records (load failed or file was empty).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
