//! Scoring Rules
//!
//! Each rule looks at the sentence independently and returns a signed
//! contribution plus an optional suggestion. The order of [`RULES`] is the
//! order suggestions appear in the feedback.

use crate::text::{contains_whole_word, has_terminal_punctuation, has_vowel, starts_with_uppercase};
use crate::types::{
    RuleOutcome, CAPITALIZATION_POINTS, LANGUAGE_SHAPE_PENALTY, LANGUAGE_SHAPE_POINTS,
    LENGTH_TIER_POINTS, LONG_SENTENCE_TOKENS, MAX_VOWEL_TOKENS, MIN_VOWEL_TOKENS,
    SHORT_SENTENCE_TOKENS, TARGET_MISSING_POINTS, TARGET_PRESENT_POINTS,
    TERMINAL_PUNCTUATION_POINTS,
};

/// What a rule gets to look at
#[derive(Clone, Copy, Debug)]
pub struct ScoringContext<'a> {
    pub text: &'a str,
    pub tokens: &'a [String],
    pub target: &'a str,
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub evaluate: fn(&ScoringContext<'_>) -> RuleOutcome,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "target_word",
        evaluate: target_word,
    },
    Rule {
        name: "length",
        evaluate: length,
    },
    Rule {
        name: "capitalization",
        evaluate: capitalization,
    },
    Rule {
        name: "terminal_punctuation",
        evaluate: terminal_punctuation,
    },
    Rule {
        name: "language_shape",
        evaluate: language_shape,
    },
];

pub fn target_word(ctx: &ScoringContext<'_>) -> RuleOutcome {
    if contains_whole_word(ctx.text, ctx.target) {
        RuleOutcome::pass(TARGET_PRESENT_POINTS)
    } else {
        RuleOutcome::fail(
            TARGET_MISSING_POINTS,
            format!("Use the word \"{}\" in your sentence.", ctx.target.trim()),
        )
    }
}

pub fn length(ctx: &ScoringContext<'_>) -> RuleOutcome {
    let count = ctx.tokens.len();
    if count < SHORT_SENTENCE_TOKENS {
        return RuleOutcome::fail(
            0.0,
            format!("Try adding more detail (at least {SHORT_SENTENCE_TOKENS} words)."),
        );
    }

    let tiers = if count >= LONG_SENTENCE_TOKENS { 2.0 } else { 1.0 };
    RuleOutcome::pass(tiers * LENGTH_TIER_POINTS)
}

/// Bonus only; a lowercase start is fixed in the corrected sentence instead.
pub fn capitalization(ctx: &ScoringContext<'_>) -> RuleOutcome {
    if starts_with_uppercase(ctx.text) {
        RuleOutcome::pass(CAPITALIZATION_POINTS)
    } else {
        RuleOutcome::pass(0.0)
    }
}

pub fn terminal_punctuation(ctx: &ScoringContext<'_>) -> RuleOutcome {
    if has_terminal_punctuation(ctx.text) {
        RuleOutcome::pass(TERMINAL_PUNCTUATION_POINTS)
    } else {
        RuleOutcome::fail(0.0, "End the sentence with punctuation (., !, or ?).")
    }
}

/// Guards against keyboard mashing: enough tokens must carry a vowel.
pub fn language_shape(ctx: &ScoringContext<'_>) -> RuleOutcome {
    let vowel_tokens = ctx.tokens.iter().filter(|t| has_vowel(t)).count();
    if vowel_tokens >= required_vowel_tokens(ctx.tokens.len()) {
        RuleOutcome::pass(LANGUAGE_SHAPE_POINTS)
    } else {
        RuleOutcome::fail(
            LANGUAGE_SHAPE_PENALTY,
            "Use clear, meaningful English words (avoid random letters).",
        )
    }
}

pub fn required_vowel_tokens(token_count: usize) -> usize {
    token_count.clamp(MIN_VOWEL_TOKENS, MAX_VOWEL_TOKENS)
}
