use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use worddee_algo::{
    normalize, normalize_duration, resolve_practiced_at, score_sentence, TimestampSource,
};

use crate::db::operations::{self, HistoryItem, NewAttempt, Word};
use crate::db::DatabaseProxy;
use crate::services::PracticeError;

pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
pub const MAX_HISTORY_LIMIT: i64 = 200;

#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
    pub word_id: i64,
    pub sentence: String,
    pub duration_seconds: Option<i64>,
    pub minutes_learned: Option<i64>,
    pub client_time_iso: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    pub score: f64,
    /// Difficulty level of the practised word
    pub level: String,
    pub suggestion: String,
    pub corrected_sentence: String,
    pub minutes_learned: i64,
    pub duration_seconds: i64,
}

/// Scores a submission against `word` and shapes the attempt to append.
pub fn build_attempt(
    word: &Word,
    input: &SubmissionInput,
    zone: FixedOffset,
    now: DateTime<Utc>,
) -> Result<(NewAttempt, SubmissionResult), PracticeError> {
    let user_sentence = input.sentence.trim();
    let normalized = normalize(user_sentence);
    if normalized.is_empty() {
        return Err(PracticeError::InvalidInput("Sentence is required".to_string()));
    }

    let resolved = resolve_practiced_at(input.client_time_iso.as_deref(), zone, now);
    if input.client_time_iso.is_some() && resolved.source == TimestampSource::Server {
        tracing::debug!(
            client_time = ?input.client_time_iso,
            "unreadable client time, using server clock"
        );
    }

    let duration = normalize_duration(input.duration_seconds, input.minutes_learned);
    let scored = score_sentence(&normalized, &word.word);

    let attempt = NewAttempt {
        word_id: word.id,
        user_sentence: user_sentence.to_string(),
        score: scored.score,
        feedback: scored.feedback.clone(),
        corrected_sentence: scored.corrected_sentence.clone(),
        minutes_learned: duration.minutes_learned,
        duration_seconds: duration.duration_seconds,
        practiced_at: resolved.at,
    };

    let result = SubmissionResult {
        score: scored.score,
        level: word.difficulty_level.clone(),
        suggestion: scored.feedback,
        corrected_sentence: scored.corrected_sentence,
        minutes_learned: duration.minutes_learned,
        duration_seconds: duration.duration_seconds,
    };

    Ok((attempt, result))
}

pub async fn score_submission(
    proxy: &DatabaseProxy,
    zone: FixedOffset,
    input: SubmissionInput,
    now: DateTime<Utc>,
) -> Result<SubmissionResult, PracticeError> {
    let word = operations::fetch_word_by_id(proxy, input.word_id)
        .await?
        .ok_or_else(|| PracticeError::NotFound("Word not found".to_string()))?;

    let (attempt, result) = build_attempt(&word, &input, zone, now)?;
    let stored = operations::append_attempt(proxy, &attempt).await?;

    tracing::info!(
        attempt_id = stored.id,
        word_id = stored.word_id,
        score = stored.score,
        practiced_at = %stored.practiced_at,
        "practice attempt recorded"
    );

    Ok(result)
}

/// Missing limits take the default; the rest are clamped to `[1, 200]`.
pub fn clamp_history_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

pub async fn list_history(
    proxy: &DatabaseProxy,
    limit: Option<i64>,
) -> Result<Vec<HistoryItem>, PracticeError> {
    let items = operations::fetch_recent_attempts(proxy, clamp_history_limit(limit)).await?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fox() -> Word {
        Word {
            id: 7,
            word: "fox".to_string(),
            definition: "A small wild canine".to_string(),
            difficulty_level: "Beginner".to_string(),
        }
    }

    fn bangkok() -> FixedOffset {
        worddee_algo::default_zone()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 20, 30, 0).unwrap()
    }

    #[test]
    fn test_clamp_history_limit() {
        assert_eq!(clamp_history_limit(None), 50);
        assert_eq!(clamp_history_limit(Some(0)), 1);
        assert_eq!(clamp_history_limit(Some(-3)), 1);
        assert_eq!(clamp_history_limit(Some(10)), 10);
        assert_eq!(clamp_history_limit(Some(5000)), 200);
    }

    #[test]
    fn test_build_attempt_scores_and_shapes() {
        let input = SubmissionInput {
            word_id: 7,
            sentence: "  the quick brown fox jumps  ".to_string(),
            duration_seconds: Some(61),
            ..Default::default()
        };

        let (attempt, result) = build_attempt(&fox(), &input, bangkok(), now()).unwrap();

        assert_eq!(result.score, 5.0);
        assert_eq!(result.level, "Beginner");
        assert_eq!(
            result.suggestion,
            "Try adding more detail (at least 6 words). End the sentence with punctuation (., !, or ?)."
        );
        assert_eq!(result.corrected_sentence, "The quick brown fox jumps.");
        assert_eq!(result.minutes_learned, 2);
        assert_eq!(result.duration_seconds, 61);

        assert_eq!(attempt.user_sentence, "the quick brown fox jumps");
        assert_eq!(attempt.feedback, result.suggestion);
        assert_eq!(attempt.word_id, 7);
    }

    #[test]
    fn test_build_attempt_uses_server_clock_in_zone() {
        let input = SubmissionInput {
            word_id: 7,
            sentence: "A fox ran.".to_string(),
            ..Default::default()
        };
        let (attempt, _) = build_attempt(&fox(), &input, bangkok(), now()).unwrap();
        assert_eq!(attempt.practiced_at.to_rfc3339(), "2024-03-11T03:30:00+07:00");
    }

    #[test]
    fn test_build_attempt_honours_client_offset() {
        let input = SubmissionInput {
            word_id: 7,
            sentence: "A fox ran.".to_string(),
            client_time_iso: Some("2024-03-10T23:30:00Z".to_string()),
            ..Default::default()
        };
        let (attempt, _) = build_attempt(&fox(), &input, bangkok(), now()).unwrap();
        assert_eq!(attempt.practiced_at.to_rfc3339(), "2024-03-11T06:30:00+07:00");
    }

    #[test]
    fn test_build_attempt_ignores_garbage_client_time() {
        let input = SubmissionInput {
            word_id: 7,
            sentence: "A fox ran.".to_string(),
            client_time_iso: Some("yesterday-ish".to_string()),
            ..Default::default()
        };
        let (attempt, _) = build_attempt(&fox(), &input, bangkok(), now()).unwrap();
        assert_eq!(attempt.practiced_at, now().with_timezone(&bangkok()));
    }

    #[test]
    fn test_build_attempt_rejects_blank_sentence() {
        let input = SubmissionInput {
            word_id: 7,
            sentence: " \t\n ".to_string(),
            ..Default::default()
        };
        let err = build_attempt(&fox(), &input, bangkok(), now()).unwrap_err();
        assert!(matches!(err, PracticeError::InvalidInput(_)));
    }
}
