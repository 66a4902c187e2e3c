//! Common Types and Constants
//!
//! Shared data structures used across the scoring and aggregation modules.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

// ==================== Scoring Constants ====================

/// Upper bound of a sentence score
pub const MAX_SCORE: f64 = 10.0;

/// Lower bound of a sentence score
pub const MIN_SCORE: f64 = 0.0;

/// Awarded when the target word appears as a whole word
pub const TARGET_PRESENT_POINTS: f64 = 4.0;

/// Awarded when the target word is missing (kept above zero on purpose)
pub const TARGET_MISSING_POINTS: f64 = 0.5;

/// Token count for the first length bonus
pub const SHORT_SENTENCE_TOKENS: usize = 6;

/// Token count for the second length bonus
pub const LONG_SENTENCE_TOKENS: usize = 10;

/// Points per length tier reached
pub const LENGTH_TIER_POINTS: f64 = 2.0;

pub const CAPITALIZATION_POINTS: f64 = 0.5;

pub const TERMINAL_PUNCTUATION_POINTS: f64 = 0.5;

pub const LANGUAGE_SHAPE_POINTS: f64 = 1.0;

pub const LANGUAGE_SHAPE_PENALTY: f64 = -2.0;

/// Vowel-bearing tokens required is `clamp(token_count, MIN, MAX)`
pub const MIN_VOWEL_TOKENS: usize = 2;
pub const MAX_VOWEL_TOKENS: usize = 4;

pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

pub const AFFIRMATIVE_FEEDBACK: &str = "Nice! Your sentence looks good.";

// ==================== Duration Constants ====================

/// A single session is capped at ten hours
pub const MAX_MINUTES_LEARNED: i64 = 600;

pub const SECONDS_PER_MINUTE: i64 = 60;

// ==================== Scoring Types ====================

/// Result of scoring one sentence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// Score in `[0.0, 10.0]`, one decimal place
    pub score: f64,
    /// Actionable suggestions, or an affirmative message
    pub feedback: String,
    /// Cosmetic rendering: capitalised and terminated
    pub corrected_sentence: String,
}

/// Contribution of a single scoring rule
#[derive(Clone, Debug, PartialEq)]
pub struct RuleOutcome {
    pub contribution: f64,
    pub feedback: Option<String>,
}

impl RuleOutcome {
    pub fn pass(contribution: f64) -> Self {
        Self {
            contribution,
            feedback: None,
        }
    }

    pub fn fail(contribution: f64, feedback: impl Into<String>) -> Self {
        Self {
            contribution,
            feedback: Some(feedback.into()),
        }
    }
}

// ==================== Duration Types ====================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDuration {
    pub minutes_learned: i64,
    pub duration_seconds: i64,
}

// ==================== Timestamp Types ====================

/// Where an authoritative practice timestamp came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    /// Client ISO string carrying its own offset
    ClientOffset,
    /// Client ISO string without offset, read as canonical-zone wall time
    ClientLocal,
    /// Server clock
    Server,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedTimestamp {
    pub at: DateTime<FixedOffset>,
    pub source: TimestampSource,
}

impl ResolvedTimestamp {
    /// Calendar date in the canonical zone
    pub fn practice_date(&self) -> NaiveDate {
        self.at.date_naive()
    }
}

// ==================== Streak Types ====================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub day_streak: i64,
    pub last_active_date: Option<NaiveDate>,
}
