//! Normalizer integration tests
//!
//! End-to-end checks of the utterance pipeline: spelling pass, concept
//! folding, tokenization, and the configured-table path.

use certassist::{ConceptTable, Normalizer, RuntimeConfig};

#[test]
fn fee_folds_to_cost_and_the_rest_passes_through() {
    let normalizer = Normalizer::default();
    assert_eq!(
        normalizer.normalize("whats the fee for this"),
        "whats the cost for this"
    );
}

#[test]
fn multiple_synonyms_fold_in_one_pass() {
    let normalizer = Normalizer::default();
    let out = normalizer.normalize("what papers do i submit and what is the charge");
    assert!(out.contains("documents"), "{out}");
    assert!(out.contains("where"), "papers→documents, submit→where: {out}");
    assert!(out.contains("cost"), "{out}");
}

#[test]
fn spelling_errors_are_corrected_before_folding() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("pirce of pasport"), "cost of passport");
}

#[test]
fn normalization_is_idempotent_on_its_own_output() {
    let normalizer = Normalizer::default();
    for raw in [
        "whats the fee for this",
        "whear do i submit my papers?",
        "how long does a pasport take",
        "cost documents where authority lost",
    ] {
        let once = normalizer.normalize(raw);
        assert_eq!(normalizer.normalize(&once), once, "not a fixed point: {raw}");
    }
}

#[test]
fn punctuation_is_preserved_as_tokens() {
    let normalizer = Normalizer::default();
    assert_eq!(
        normalizer.normalize("fee, price: charge!"),
        "cost , cost : cost !"
    );
}

#[test]
fn configured_extra_concepts_participate() {
    let config: RuntimeConfig = toml::from_str(
        r#"
        [[normalizer.extra_concepts]]
        concept = "renewal"
        synonyms = ["revalidate", "extend"]
        "#,
    )
    .unwrap();
    let normalizer = config.normalizer();
    assert_eq!(
        normalizer.normalize("how do i revalidate my license"),
        "how do i renewal my license"
    );
    // Built-ins still take precedence in table order
    assert_eq!(normalizer.normalize("fee"), "cost");
}

#[test]
fn concept_iteration_order_is_fixed() {
    let mut table = ConceptTable::empty();
    table.add("alpha", &["shared"]);
    table.add("beta", &["shared"]);
    let normalizer = Normalizer::new(table);
    assert_eq!(normalizer.normalize("shared"), "alpha");
}
