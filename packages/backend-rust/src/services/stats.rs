use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

use worddee_algo::{compute_streak, resolve_today};

use crate::db::operations::{self, AttemptAggregates};
use crate::db::DatabaseProxy;
use crate::services::PracticeError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeSummary {
    pub total_attempts: i64,
    pub average_score: f64,
    pub total_words_practiced: i64,
    pub total_minutes_learned: i64,
    pub day_streak: i64,
    /// `YYYY-MM-DD` in the practice zone
    pub last_active_date: Option<String>,
    pub level_distribution: BTreeMap<String, i64>,
}

pub fn build_summary(
    aggregates: AttemptAggregates,
    dates: &BTreeSet<NaiveDate>,
    level_distribution: BTreeMap<String, i64>,
    today: NaiveDate,
) -> PracticeSummary {
    let streak = compute_streak(dates, today);

    PracticeSummary {
        total_attempts: aggregates.count,
        average_score: if aggregates.count > 0 {
            aggregates.avg_score
        } else {
            0.0
        },
        total_words_practiced: aggregates.distinct_word_count,
        total_minutes_learned: aggregates.total_minutes,
        day_streak: streak.day_streak,
        last_active_date: streak
            .last_active_date
            .map(|date| date.format("%Y-%m-%d").to_string()),
        level_distribution,
    }
}

pub async fn get_summary(
    proxy: &DatabaseProxy,
    zone: FixedOffset,
    client_date: Option<&str>,
    now: DateTime<Utc>,
) -> Result<PracticeSummary, PracticeError> {
    let today = resolve_today(client_date, zone, now);

    let aggregates = operations::fetch_attempt_aggregates(proxy).await?;
    let dates = operations::fetch_distinct_practice_dates(proxy, zone).await?;
    let levels = operations::fetch_level_distribution(proxy).await?;

    Ok(build_summary(aggregates, &dates, levels, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_summary() {
        let summary = build_summary(
            AttemptAggregates::default(),
            &BTreeSet::new(),
            BTreeMap::new(),
            d(2024, 5, 10),
        );
        assert_eq!(summary.total_attempts, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.day_streak, 0);
        assert_eq!(summary.last_active_date, None);
        assert!(summary.level_distribution.is_empty());
    }

    #[test]
    fn test_summary_carries_streak_and_aggregates() {
        let aggregates = AttemptAggregates {
            count: 4,
            avg_score: 6.25,
            distinct_word_count: 3,
            total_minutes: 9,
        };
        let dates: BTreeSet<_> = [d(2024, 5, 8), d(2024, 5, 9)].into_iter().collect();
        let levels: BTreeMap<_, _> = [("Beginner".to_string(), 3), ("Advanced".to_string(), 1)]
            .into_iter()
            .collect();

        let summary = build_summary(aggregates, &dates, levels, d(2024, 5, 10));

        assert_eq!(summary.total_attempts, 4);
        assert_eq!(summary.average_score, 6.25);
        assert_eq!(summary.total_words_practiced, 3);
        assert_eq!(summary.total_minutes_learned, 9);
        assert_eq!(summary.day_streak, 2);
        assert_eq!(summary.last_active_date.as_deref(), Some("2024-05-09"));
        assert_eq!(summary.level_distribution.get("Beginner"), Some(&3));
    }

    #[test]
    fn test_summary_serializes_snake_case() {
        let summary = build_summary(
            AttemptAggregates::default(),
            &BTreeSet::new(),
            BTreeMap::new(),
            d(2024, 5, 10),
        );
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("total_words_practiced").is_some());
        assert!(value.get("last_active_date").unwrap().is_null());
    }
}
