//! Concept synonym table
//!
//! A fixed mapping from canonical concept keyword to its registered
//! synonyms. The upstream intent classifier is trained on the canonical
//! keywords, so user phrasings are folded onto them before classification.
//! Iteration order is insertion order and fixed at build time; resolution
//! takes the first concept that matches, which keeps the fold deterministic.

use super::similarity::ratio;
use indexmap::IndexMap;

/// Ordered concept → synonyms table.
#[derive(Debug, Clone)]
pub struct ConceptTable {
    concepts: IndexMap<String, Vec<String>>,
}

impl ConceptTable {
    /// The built-in concept clusters.
    pub fn builtin() -> Self {
        let mut table = Self {
            concepts: IndexMap::new(),
        };
        table.add("cost", &["fee", "price", "charge", "amount", "payment"]);
        table.add("documents", &["papers", "proof", "ids", "requirements", "files"]);
        table.add("where", &["location", "apply", "submit", "place"]);
        table.add("authority", &["who issues", "issuer", "department", "office"]);
        table.add("lost", &["misplaced", "gone", "duplicate", "lost it"]);
        table
    }

    /// An empty table (used by tests and by configs that replace the
    /// built-ins entirely).
    pub fn empty() -> Self {
        Self {
            concepts: IndexMap::new(),
        }
    }

    /// Register a concept with its synonyms, appending to an existing entry
    /// if the concept is already present. Everything is stored lower-cased.
    pub fn add(&mut self, concept: &str, synonyms: &[&str]) {
        let entry = self
            .concepts
            .entry(concept.to_lowercase())
            .or_default();
        for synonym in synonyms {
            let lowered = synonym.to_lowercase();
            if !entry.contains(&lowered) {
                entry.push(lowered);
            }
        }
    }

    /// Map a token onto a canonical concept, or `None` to keep it.
    ///
    /// For each concept in table order: an exact case-insensitive match on
    /// the concept name or any synonym wins immediately; otherwise the best
    /// fuzzy ratio against that concept's synonyms wins when it clears
    /// `cutoff`. The first satisfying concept is taken.
    pub fn resolve(&self, token: &str, cutoff: f64) -> Option<&str> {
        let lowered = token.to_lowercase();
        for (concept, synonyms) in &self.concepts {
            if lowered == *concept || synonyms.contains(&lowered) {
                return Some(concept);
            }
            let best = synonyms
                .iter()
                .map(|synonym| ratio(&lowered, synonym))
                .fold(0.0_f64, f64::max);
            if best >= cutoff {
                return Some(concept);
            }
        }
        None
    }

    /// Iterate concepts and their synonyms in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.concepts
            .iter()
            .map(|(concept, synonyms)| (concept.as_str(), synonyms.as_slice()))
    }

    /// Number of registered concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether no concepts are registered.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl Default for ConceptTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUTOFF: f64 = 0.75;

    #[test]
    fn exact_synonym_match_resolves() {
        let table = ConceptTable::builtin();
        assert_eq!(table.resolve("fee", CUTOFF), Some("cost"));
        assert_eq!(table.resolve("Papers", CUTOFF), Some("documents"));
        assert_eq!(table.resolve("misplaced", CUTOFF), Some("lost"));
    }

    #[test]
    fn concept_name_resolves_to_itself() {
        let table = ConceptTable::builtin();
        assert_eq!(table.resolve("cost", CUTOFF), Some("cost"));
        assert_eq!(table.resolve("authority", CUTOFF), Some("authority"));
    }

    #[test]
    fn fuzzy_match_clears_the_cutoff() {
        let table = ConceptTable::builtin();
        assert_eq!(table.resolve("charges", CUTOFF), Some("cost"));
        assert_eq!(table.resolve("locaton", CUTOFF), Some("where"));
    }

    #[test]
    fn unmatched_tokens_resolve_to_none() {
        let table = ConceptTable::builtin();
        assert_eq!(table.resolve("passport", CUTOFF), None);
        assert_eq!(table.resolve("the", CUTOFF), None);
    }

    #[test]
    fn first_concept_wins_on_ties() {
        let mut table = ConceptTable::empty();
        table.add("first", &["shared"]);
        table.add("second", &["shared"]);
        assert_eq!(table.resolve("shared", CUTOFF), Some("first"));
    }

    #[test]
    fn add_appends_to_existing_concepts() {
        let mut table = ConceptTable::builtin();
        table.add("cost", &["stamp duty"]);
        assert_eq!(table.len(), 5);
        assert_eq!(table.resolve("stamp duty", CUTOFF), Some("cost"));
    }
}
