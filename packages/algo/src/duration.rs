//! Duration Normalization
//!
//! Turns the client's raw timer reading into the whole-minute "minutes
//! learned" figure stored with every attempt.

use crate::types::{StudyDuration, MAX_MINUTES_LEARNED, SECONDS_PER_MINUTE};

/// Elapsed seconds take precedence over a pre-computed minute count.
///
/// Any positive number of seconds counts as at least one minute; longer
/// sessions round up. The result is capped at [`MAX_MINUTES_LEARNED`].
pub fn normalize_duration(seconds: Option<i64>, minutes: Option<i64>) -> StudyDuration {
    let duration_seconds = seconds.map(|s| s.max(0)).unwrap_or(0);

    let minutes_learned = match (seconds, minutes) {
        (Some(_), _) => seconds_to_minutes(duration_seconds),
        (None, Some(minutes)) => minutes,
        (None, None) => 0,
    };

    StudyDuration {
        minutes_learned: minutes_learned.clamp(0, MAX_MINUTES_LEARNED),
        duration_seconds,
    }
}

fn seconds_to_minutes(seconds: i64) -> i64 {
    match seconds {
        s if s <= 0 => 0,
        s if s <= SECONDS_PER_MINUTE => 1,
        s => s / SECONDS_PER_MINUTE + i64::from(s % SECONDS_PER_MINUTE != 0),
    }
}
