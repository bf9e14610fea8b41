//! Utterance normalization
//!
//! Rewrites raw user text before the upstream intent classifier sees it:
//! a best-effort spelling pass over word tokens, then synonym-to-concept
//! folding against the [`ConceptTable`]. The output is classifier-facing,
//! not user-facing — tokens are re-joined with single spaces regardless of
//! the original spacing, so the transform is lossy by design.

mod concepts;
mod similarity;

pub use concepts::ConceptTable;
pub use similarity::ratio;

use indexmap::IndexSet;
use regex::Regex;
use tracing::debug;

/// Fuzzy cutoff for synonym-to-concept folding (0–1 scale).
pub const FUZZY_CUTOFF: f64 = 0.75;
/// Cutoff for the spelling pass. Stricter than concept folding: replacing a
/// word the user actually meant is worse than leaving a typo alone.
pub const SPELLING_CUTOFF: f64 = 0.8;

/// Domain words the spelling pass recognizes beyond the concept table:
/// certificate vocabulary plus the function words of a typical question, so
/// ordinary phrasing passes through unchanged.
const DOMAIN_LEXICON: &[&str] = &[
    "certificate", "certificates", "passport", "passports", "license", "driving",
    "ration", "card", "cards", "pan", "voter", "aadhaar", "birth", "income",
    "caste", "application", "apply", "applying", "process", "procedure",
    "documents", "document", "eligibility", "eligible", "validity", "valid",
    "duplicate", "renewal", "renew", "tatkal", "online", "portal", "authority",
    "office", "processing", "time", "status", "required", "information", "info",
    "need", "needed", "get", "getting", "make", "want", "know", "tell", "long",
    "much", "many", "how", "what", "whats", "when", "where", "which", "who",
    "why", "can", "could", "should", "will", "does", "do", "did", "is", "are",
    "was", "the", "a", "an", "i", "my", "me", "you", "your", "it", "this",
    "that", "for", "of", "to", "in", "on", "at", "and", "or", "with", "about",
    "please", "help",
];

/// Spelling correction plus synonym-to-concept folding.
///
/// Construction is cheap and the normalizer is immutable afterwards; one
/// instance can serve every request.
#[derive(Debug)]
pub struct Normalizer {
    concepts: ConceptTable,
    vocabulary: IndexSet<String>,
    fuzzy_cutoff: f64,
    spelling_cutoff: f64,
    token_pattern: Regex,
}

impl Normalizer {
    /// Build a normalizer over the given concept table with default cutoffs.
    pub fn new(concepts: ConceptTable) -> Self {
        Self::with_cutoffs(concepts, FUZZY_CUTOFF, SPELLING_CUTOFF)
    }

    /// Build a normalizer with explicit cutoffs (both on a 0–1 scale).
    pub fn with_cutoffs(concepts: ConceptTable, fuzzy_cutoff: f64, spelling_cutoff: f64) -> Self {
        let mut vocabulary: IndexSet<String> =
            DOMAIN_LEXICON.iter().map(|word| (*word).to_string()).collect();
        for (concept, synonyms) in concepts.iter() {
            vocabulary.insert(concept.to_string());
            for synonym in synonyms {
                // Multi-word synonyms contribute their individual words.
                for word in synonym.split_whitespace() {
                    vocabulary.insert(word.to_string());
                }
            }
        }
        Self {
            concepts,
            vocabulary,
            fuzzy_cutoff,
            spelling_cutoff,
            token_pattern: Regex::new(r"\w+|\S").unwrap(),
        }
    }

    /// Normalize one raw utterance.
    ///
    /// Tokens are word runs and individual punctuation symbols in original
    /// order; each word token is spell-checked against the vocabulary and
    /// then folded onto a concept when one matches. Unmatched tokens pass
    /// through unchanged, so already-normalized text is a fixed point.
    pub fn normalize(&self, raw: &str) -> String {
        let tokens: Vec<String> = self
            .token_pattern
            .find_iter(raw)
            .map(|m| {
                let token = m.as_str();
                if !is_word(token) {
                    return token.to_string();
                }
                let corrected = self.correct_spelling(token);
                match self.concepts.resolve(&corrected, self.fuzzy_cutoff) {
                    Some(concept) => concept.to_string(),
                    None => corrected,
                }
            })
            .collect();
        let normalized = tokens.join(" ");
        if normalized != raw {
            debug!(raw, normalized, "utterance normalized");
        }
        normalized
    }

    /// Best-effort spelling correction for one word token.
    ///
    /// In-vocabulary words (and anything too short or numeric to judge) are
    /// returned unchanged; otherwise the closest vocabulary word wins if it
    /// clears the spelling cutoff. Leaving a token alone is always an
    /// acceptable outcome — this is a heuristic pass, not a guarantee.
    fn correct_spelling(&self, token: &str) -> String {
        let lowered = token.to_lowercase();
        if lowered.len() < 3
            || lowered.chars().all(|c| c.is_ascii_digit())
            || self.vocabulary.contains(&lowered)
        {
            return token.to_string();
        }
        let mut best: Option<(&str, f64)> = None;
        for word in &self.vocabulary {
            let score = similarity::ratio(&lowered, word);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((word, score));
            }
        }
        match best {
            Some((word, score)) if score >= self.spelling_cutoff => word.to_string(),
            _ => token.to_string(),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(ConceptTable::builtin())
    }
}

/// Word tokens start with an alphanumeric character or underscore;
/// everything else the scanner emits is a single punctuation symbol.
fn is_word(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_fold_onto_concepts() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize("whats the fee for this"),
            "whats the cost for this"
        );
    }

    #[test]
    fn punctuation_becomes_separate_tokens() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize("what papers do i need?"),
            "what documents do i need ?"
        );
    }

    #[test]
    fn misspellings_are_corrected_then_folded() {
        let normalizer = Normalizer::default();
        // "pirce" → "price" (spelling) → "cost" (concept)
        assert_eq!(normalizer.normalize("pirce of pasport"), "cost of passport");
    }

    #[test]
    fn unmatched_tokens_pass_through() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("xyzzy 42"), "xyzzy 42");
    }

    #[test]
    fn normalization_is_idempotent() {
        let normalizer = Normalizer::default();
        let once = normalizer.normalize("whear do i submit my papers?");
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn spacing_is_canonicalized() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize("fee   for\tpassport"),
            "cost for passport"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(""), "");
    }
}
