//! Property-Based Tests for sentence scoring and duration normalization
//!
//! Tests the following invariants:
//! - Bounds: every score lies in [0, 10] with at most one decimal
//! - Purity: identical inputs give identical results
//! - Target monotonicity: adding the target word never lowers the score
//! - Corrected sentence shape: capitalised start, terminal punctuation
//! - Minutes learned stay within [0, 600]

use proptest::prelude::*;

use worddee_algo::{normalize, normalize_duration, score_sentence, MAX_MINUTES_LEARNED};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{1,9}".prop_filter("target must not appear", |w| w != "fox")
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 1..14)
}

fn arb_free_text() -> impl Strategy<Value = String> {
    "[ -~\\t\\n]{0,120}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn score_is_bounded_with_one_decimal(sentence in arb_free_text(), target in "[a-zA-Z]{1,8}") {
        let result = score_sentence(&normalize(&sentence), &target);
        prop_assert!((0.0..=10.0).contains(&result.score));
        let tenths = result.score * 10.0;
        prop_assert!((tenths - tenths.round()).abs() < 1e-9);
    }

    #[test]
    fn scoring_is_pure(sentence in arb_free_text(), target in "[a-z]{1,8}") {
        let normalized = normalize(&sentence);
        prop_assert_eq!(score_sentence(&normalized, &target), score_sentence(&normalized, &target));
    }

    #[test]
    fn target_presence_raises_score(words in arb_words(), terminated in any::<bool>()) {
        let suffix = if terminated { "." } else { "" };

        let without = format!("{}{}", words.join(" "), suffix);

        let mut with_words = words.clone();
        with_words.insert(1.min(with_words.len()), "fox".to_string());
        let with = format!("{}{}", with_words.join(" "), suffix);

        let score_without = score_sentence(&normalize(&without), "fox").score;
        let score_with = score_sentence(&normalize(&with), "fox").score;
        prop_assert!(score_with > score_without, "{with:?} vs {without:?}");
    }

    #[test]
    fn corrected_sentence_is_capitalised_and_terminated(
        first in "[a-zA-Z]",
        rest in "[a-zA-Z ,.!?']{0,60}",
    ) {
        let normalized = normalize(&format!("{first}{rest}"));
        let corrected = score_sentence(&normalized, "word").corrected_sentence;
        prop_assert!(corrected.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
        prop_assert!(corrected.ends_with(['.', '!', '?']));
    }

    #[test]
    fn minutes_learned_stay_bounded(
        seconds in proptest::option::of(any::<i64>()),
        minutes in proptest::option::of(any::<i64>()),
    ) {
        let duration = normalize_duration(seconds, minutes);
        prop_assert!((0..=MAX_MINUTES_LEARNED).contains(&duration.minutes_learned));
        prop_assert!(duration.duration_seconds >= 0);
    }
}
