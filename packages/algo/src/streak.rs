//! Streak Aggregation
//!
//! Counts consecutive practiced days. A streak survives until a full day is
//! missed: practising yesterday but not yet today still counts.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::types::StreakSummary;

/// Days of slack between the last practice day and `today`
pub const GRACE_DAYS: i64 = 1;

pub fn compute_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakSummary {
    let Some(&last) = dates.last() else {
        return StreakSummary::default();
    };

    let day_streak = if (today - last).num_days() <= GRACE_DAYS {
        count_back_from(dates, last)
    } else {
        0
    };

    StreakSummary {
        day_streak,
        last_active_date: Some(last),
    }
}

fn count_back_from(dates: &BTreeSet<NaiveDate>, start: NaiveDate) -> i64 {
    let mut count = 0;
    let mut cursor = Some(start);

    while let Some(day) = cursor.filter(|d| dates.contains(d)) {
        count += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }

    count
}
