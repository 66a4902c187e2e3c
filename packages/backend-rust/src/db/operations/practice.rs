use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DatabaseProxy;

/// A fully-formed attempt, ready to append
#[derive(Debug, Clone)]
pub struct NewAttempt {
    pub word_id: i64,
    pub user_sentence: String,
    pub score: f64,
    pub feedback: String,
    pub corrected_sentence: String,
    pub minutes_learned: i64,
    pub duration_seconds: i64,
    pub practiced_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredAttempt {
    pub id: i64,
    pub word_id: i64,
    pub user_sentence: String,
    pub score: f64,
    pub feedback: String,
    pub corrected_sentence: String,
    pub minutes_learned: i64,
    pub duration_seconds: i64,
    pub practiced_at: String,
}

/// One history row joined with its word's text
#[derive(Debug, Clone, Serialize)]
pub struct HistoryItem {
    pub id: i64,
    pub word: String,
    pub word_id: i64,
    pub user_sentence: String,
    pub score: f64,
    pub feedback: String,
    pub corrected_sentence: String,
    pub minutes_learned: i64,
    pub duration_seconds: i64,
    pub practiced_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AttemptAggregates {
    pub count: i64,
    pub avg_score: f64,
    pub distinct_word_count: i64,
    pub total_minutes: i64,
}

/// Stored practice timestamps keep their canonical offset, e.g.
/// `2024-05-01T21:04:00+07:00`.
pub fn format_practiced_at(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub async fn append_attempt(
    proxy: &DatabaseProxy,
    attempt: &NewAttempt,
) -> Result<StoredAttempt, sqlx::Error> {
    let practiced_at = format_practiced_at(&attempt.practiced_at);

    let result = sqlx::query(
        r#"
        INSERT INTO "practice_history"
          ("wordId","userSentence","score","feedback","correctedSentence","minutesLearned","durationSeconds","practicedAt")
        VALUES (?,?,?,?,?,?,?,?)
        "#,
    )
    .bind(attempt.word_id)
    .bind(&attempt.user_sentence)
    .bind(attempt.score)
    .bind(&attempt.feedback)
    .bind(&attempt.corrected_sentence)
    .bind(attempt.minutes_learned)
    .bind(attempt.duration_seconds)
    .bind(&practiced_at)
    .execute(proxy.pool())
    .await?;

    Ok(StoredAttempt {
        id: result.last_insert_rowid(),
        word_id: attempt.word_id,
        user_sentence: attempt.user_sentence.clone(),
        score: attempt.score,
        feedback: attempt.feedback.clone(),
        corrected_sentence: attempt.corrected_sentence.clone(),
        minutes_learned: attempt.minutes_learned,
        duration_seconds: attempt.duration_seconds,
        practiced_at,
    })
}

/// Newest first. `limit` is taken as given; callers clamp it.
pub async fn fetch_recent_attempts(
    proxy: &DatabaseProxy,
    limit: i64,
) -> Result<Vec<HistoryItem>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p."id", p."wordId", p."userSentence", p."score", p."feedback",
               p."correctedSentence", p."minutesLearned", p."durationSeconds", p."practicedAt",
               w."word"
        FROM "practice_history" p
        JOIN "words" w ON w."id" = p."wordId"
        ORDER BY p."practicedAt" DESC, p."id" DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(proxy.pool())
    .await?;

    Ok(rows.iter().map(map_history_item).collect())
}

/// Distinct calendar dates with at least one attempt, as seen from `zone`.
///
/// Rows are re-read in `zone` rather than trusting the offset they were
/// stored with, so a changed practice zone applies to old attempts too.
pub async fn fetch_distinct_practice_dates(
    proxy: &DatabaseProxy,
    zone: FixedOffset,
) -> Result<BTreeSet<NaiveDate>, sqlx::Error> {
    let stamps: Vec<Option<String>> =
        sqlx::query_scalar(r#"SELECT DISTINCT "practicedAt" FROM "practice_history""#)
            .fetch_all(proxy.pool())
            .await?;

    Ok(stamps
        .into_iter()
        .flatten()
        .filter_map(|raw| practice_date_in_zone(&raw, zone))
        .collect())
}

pub fn practice_date_in_zone(raw: &str, zone: FixedOffset) -> Option<NaiveDate> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => Some(at.with_timezone(&zone).date_naive()),
        Err(err) => {
            tracing::warn!(error = %err, practiced_at = %raw, "skipping unreadable practice timestamp");
            None
        }
    }
}

pub async fn fetch_attempt_aggregates(
    proxy: &DatabaseProxy,
) -> Result<AttemptAggregates, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) AS "count",
               AVG("score") AS "avgScore",
               COUNT(DISTINCT "wordId") AS "distinctWords",
               COALESCE(SUM("minutesLearned"), 0) AS "totalMinutes"
        FROM "practice_history"
        "#,
    )
    .fetch_one(proxy.pool())
    .await?;

    Ok(AttemptAggregates {
        count: row.try_get("count").unwrap_or(0),
        avg_score: row
            .try_get::<Option<f64>, _>("avgScore")
            .ok()
            .flatten()
            .unwrap_or(0.0),
        distinct_word_count: row.try_get("distinctWords").unwrap_or(0),
        total_minutes: row.try_get("totalMinutes").unwrap_or(0),
    })
}

/// Attempt counts keyed by the practised word's difficulty level.
pub async fn fetch_level_distribution(
    proxy: &DatabaseProxy,
) -> Result<BTreeMap<String, i64>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT w."difficultyLevel" AS "level", COUNT(*) AS "count"
        FROM "practice_history" p
        JOIN "words" w ON w."id" = p."wordId"
        GROUP BY w."difficultyLevel"
        "#,
    )
    .fetch_all(proxy.pool())
    .await?;

    Ok(rows
        .iter()
        .map(|row| {
            (
                row.try_get::<String, _>("level").unwrap_or_default(),
                row.try_get::<i64, _>("count").unwrap_or(0),
            )
        })
        .collect())
}

fn map_history_item(row: &SqliteRow) -> HistoryItem {
    HistoryItem {
        id: row.try_get("id").unwrap_or_default(),
        word: row.try_get("word").unwrap_or_default(),
        word_id: row.try_get("wordId").unwrap_or_default(),
        user_sentence: row.try_get("userSentence").unwrap_or_default(),
        score: row.try_get("score").unwrap_or(0.0),
        feedback: row.try_get("feedback").unwrap_or_default(),
        corrected_sentence: row.try_get("correctedSentence").unwrap_or_default(),
        minutes_learned: row.try_get("minutesLearned").unwrap_or(0),
        duration_seconds: row.try_get("durationSeconds").unwrap_or(0),
        practiced_at: row.try_get("practicedAt").ok(),
    }
}
