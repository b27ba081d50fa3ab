//! Property-based tests for the etchant matcher.
//!
//! # Invariants tested
//!
//! - **Exclusion:** incompatible candidates never appear.
//! - **Positivity:** every returned score is above zero.
//! - **Determinism:** identical inputs yield identical output.
//! - **Truncation:** at most ten results, in descending score order.
//! - **Deduplication:** tips and warnings hold no repeats.
//! - **Sequencing scope:** only failure analysis numbers the top three.


use etchant_core::{
    ApplicationContext, EtchantMatch, MaterialProfile, RESULT_LIMIT, SEQUENCE_LENGTH,
};
use etchant_matcher::{match_etchants, progressive_plan};
use proptest::prelude::*;

use proptest_support::{
    assert_distinct, catalog_strategy, context_strategy, material_strategy, purpose_strategy,
    scores,
};

fn is_sequenced(matches: &[EtchantMatch<'_>]) -> bool {
    matches
        .iter()
        .any(|entry| entry.recommended_sequence.is_some())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a candidate listing the material's category as incompatible
    /// is never returned, whatever else it would score.
    #[test]
    fn incompatible_candidates_are_excluded(
        material in material_strategy(),
        catalog in catalog_strategy(12),
        purpose in purpose_strategy(),
        context in context_strategy(),
    ) {
        let category = MaterialProfile::derive(&material).category;
        let matches = match_etchants(Some(&material), &catalog, purpose, context);
        for entry in &matches {
            prop_assert!(!entry.etchant.is_incompatible_with(category.as_str()));
        }
    }

    /// Property: only positive scores are returned.
    #[test]
    fn returned_scores_are_positive(
        material in material_strategy(),
        catalog in catalog_strategy(12),
        purpose in purpose_strategy(),
        context in context_strategy(),
    ) {
        let matches = match_etchants(Some(&material), &catalog, purpose, context);
        prop_assert!(matches.iter().all(|entry| entry.score > 0));
        prop_assert!(matches.iter().all(|entry| entry.percentage <= 100));
    }

    /// Property: matching is a pure function of its inputs.
    #[test]
    fn matching_is_deterministic(
        material in material_strategy(),
        catalog in catalog_strategy(12),
        purpose in purpose_strategy(),
        context in context_strategy(),
    ) {
        let first = match_etchants(Some(&material), &catalog, purpose, context);
        let second = match_etchants(Some(&material), &catalog, purpose, context);
        prop_assert_eq!(&first, &second);
        let first_json = serde_json::to_string(&first)?;
        let second_json = serde_json::to_string(&second)?;
        prop_assert_eq!(first_json, second_json);
    }

    /// Property: results are truncated and sorted by descending score.
    #[test]
    fn results_are_bounded_and_descending(
        material in material_strategy(),
        catalog in catalog_strategy(24),
        purpose in purpose_strategy(),
        context in context_strategy(),
    ) {
        let matches = match_etchants(Some(&material), &catalog, purpose, context);
        prop_assert!(matches.len() <= RESULT_LIMIT);
        let ranked = scores(&matches);
        prop_assert!(ranked.windows(2).all(|pair| matches!(pair, [a, b] if a >= b)));
    }

    /// Property: tips and warnings are free of duplicates.
    #[test]
    fn tips_and_warnings_are_distinct(
        material in material_strategy(),
        catalog in catalog_strategy(12),
        purpose in purpose_strategy(),
        context in context_strategy(),
    ) {
        for entry in match_etchants(Some(&material), &catalog, purpose, context) {
            assert_distinct(&entry.expert_tips, "tip");
            assert_distinct(&entry.warnings, "warning");
        }
    }

    /// Property: sequence numbers appear only for failure analysis with more
    /// than one result, and only on the leading entries.
    #[test]
    fn sequencing_is_scoped(
        material in material_strategy(),
        catalog in catalog_strategy(12),
        purpose in purpose_strategy(),
        context in context_strategy(),
    ) {
        let matches = match_etchants(Some(&material), &catalog, purpose, context);
        let sequencing = context == Some(ApplicationContext::FailureAnalysis) && matches.len() > 1;
        if !sequencing {
            prop_assert!(!is_sequenced(&matches));
        }
        for (index, entry) in matches.iter().enumerate() {
            let expected = if sequencing && index < SEQUENCE_LENGTH {
                u8::try_from(index + 1).ok()
            } else {
                None
            };
            prop_assert_eq!(entry.recommended_sequence, expected);
        }
        let plan = progressive_plan(&matches);
        prop_assert_eq!(plan.len(), if sequencing { matches.len().min(SEQUENCE_LENGTH) } else { 0 });
    }
}
