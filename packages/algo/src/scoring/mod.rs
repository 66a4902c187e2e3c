//! Sentence Scoring
//!
//! Deterministic, rule-based grading of a learner's example sentence. The
//! score is the clamped sum of the contributions of [`rules::RULES`]; the
//! feedback is the ordered list of suggestions from rules that failed.
//!
//! Weights and thresholds are part of the stored history's meaning: attempts
//! are never re-scored, so changing a constant changes how new scores compare
//! to old ones.

pub mod rules;

use crate::text::{has_terminal_punctuation, starts_with_uppercase, NormalizedText};
use crate::types::{RuleOutcome, SentenceScore, AFFIRMATIVE_FEEDBACK, MAX_SCORE, MIN_SCORE};

pub use rules::{Rule, ScoringContext, RULES};

/// Score a normalized sentence against the target word.
///
/// Callers reject empty sentences before scoring; an empty input still
/// produces a bounded score.
pub fn score_sentence(normalized: &NormalizedText, target: &str) -> SentenceScore {
    let ctx = ScoringContext {
        text: &normalized.text,
        tokens: &normalized.tokens,
        target,
    };

    let (total, suggestions) = RULES.iter().map(|rule| (rule.evaluate)(&ctx)).fold(
        (0.0_f64, Vec::new()),
        |(total, mut suggestions), RuleOutcome { contribution, feedback }| {
            suggestions.extend(feedback);
            (total + contribution, suggestions)
        },
    );

    let feedback = if suggestions.is_empty() {
        AFFIRMATIVE_FEEDBACK.to_string()
    } else {
        suggestions.join(" ")
    };

    SentenceScore {
        score: finalize_score(total),
        feedback,
        corrected_sentence: correct_sentence(&normalized.text),
    }
}

/// Clamp into `[0, 10]` and keep one decimal.
pub fn finalize_score(raw: f64) -> f64 {
    let clamped = raw.clamp(MIN_SCORE, MAX_SCORE);
    (clamped * 10.0).round() / 10.0
}

/// Capitalise the first character and make sure the sentence is terminated.
/// No grammar is touched.
pub fn correct_sentence(text: &str) -> String {
    let mut corrected = String::with_capacity(text.len() + 1);

    let mut chars = text.chars();
    match chars.next() {
        Some(first) if !starts_with_uppercase(text) => {
            corrected.extend(first.to_uppercase());
            corrected.push_str(chars.as_str());
        }
        Some(_) => corrected.push_str(text),
        None => return corrected,
    }

    if !has_terminal_punctuation(&corrected) {
        corrected.push('.');
    }

    corrected
}
