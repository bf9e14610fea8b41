//! Runtime configuration
//!
//! Operator-tunable values loaded from a TOML file. Everything has a
//! built-in default, so a missing or partial file is fine.
//!
//! ## Loading Order
//!
//! 1. `CERTASSIST_CONFIG` environment variable (path to TOML file)
//! 2. `certassist.toml` in the current working directory
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default knowledge file location, relative to the working directory.
pub const DEFAULT_KNOWLEDGE_PATH: &str = "data/certificate_data.json";

/// Root runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Knowledge file settings
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Utterance-normalization tuning
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

/// Where the knowledge file lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    pub path: PathBuf,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_KNOWLEDGE_PATH),
        }
    }
}

/// Normalizer cutoffs and concept-table extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Fuzzy cutoff for synonym-to-concept folding (0–1)
    pub fuzzy_cutoff: f64,
    /// Cutoff for the spelling pass (0–1)
    pub spelling_cutoff: f64,
    /// Concepts appended to the built-in table
    #[serde(default)]
    pub extra_concepts: Vec<ConceptEntry>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: crate::normalize::FUZZY_CUTOFF,
            spelling_cutoff: crate::normalize::SPELLING_CUTOFF,
            extra_concepts: Vec::new(),
        }
    }
}

/// One configured concept cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptEntry {
    pub concept: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl RuntimeConfig {
    /// Load configuration following the documented search order. Parse
    /// failures are logged and fall through to the defaults — a bad config
    /// file should not take the assistant down.
    pub fn load() -> Self {
        let path = std::env::var("CERTASSIST_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("certassist.toml"));
        if !path.exists() {
            info!("no config file found — using built-in defaults");
            return Self::default();
        }
        Self::load_path(&path)
    }

    /// Load a specific config file, defaulting on failure.
    pub fn load_path(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                info!(path = %path.display(), "runtime config loaded");
                config
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load config — using built-in defaults"
                );
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Build the concept table: built-ins first, then configured extras, so
    /// built-in resolution order is stable regardless of configuration.
    pub fn concept_table(&self) -> crate::normalize::ConceptTable {
        let mut table = crate::normalize::ConceptTable::builtin();
        for entry in &self.normalizer.extra_concepts {
            let synonyms: Vec<&str> = entry.synonyms.iter().map(String::as_str).collect();
            table.add(&entry.concept, &synonyms);
        }
        table
    }

    /// Build the configured normalizer.
    pub fn normalizer(&self) -> crate::normalize::Normalizer {
        crate::normalize::Normalizer::with_cutoffs(
            self.concept_table(),
            self.normalizer.fuzzy_cutoff,
            self.normalizer.spelling_cutoff,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RuntimeConfig::default();
        assert_eq!(
            config.knowledge.path,
            PathBuf::from(DEFAULT_KNOWLEDGE_PATH)
        );
        assert!((config.normalizer.fuzzy_cutoff - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: RuntimeConfig =
            toml::from_str("[knowledge]\npath = \"/srv/certs.json\"\n").unwrap();
        assert_eq!(config.knowledge.path, PathBuf::from("/srv/certs.json"));
        assert!((config.normalizer.fuzzy_cutoff - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn extra_concepts_extend_the_builtin_table() {
        let config: RuntimeConfig = toml::from_str(
            r#"
            [[normalizer.extra_concepts]]
            concept = "renewal"
            synonyms = ["extend", "revalidate"]
            "#,
        )
        .unwrap();
        let table = config.concept_table();
        assert_eq!(table.resolve("revalidate", 0.75), Some("renewal"));
        assert_eq!(table.resolve("fee", 0.75), Some("cost"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = RuntimeConfig::load_path(Path::new("/nonexistent/certassist.toml"));
        assert_eq!(
            config.knowledge.path,
            PathBuf::from(DEFAULT_KNOWLEDGE_PATH)
        );
    }
}
