//! Benchmark suite for worddee-algo
//!
//! Run with: cargo bench

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use worddee_algo::{compute_streak, normalize, score_sentence};

fn bench_score_sentence(c: &mut Criterion) {
    let sentence = "The clever fox quietly slipped under the old wooden fence at night.";
    c.bench_function("score_sentence", |b| {
        b.iter(|| score_sentence(&normalize(black_box(sentence)), black_box("fox")))
    });
}

fn bench_compute_streak(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let dates: BTreeSet<NaiveDate> = (0..365)
        .filter_map(|n| today.checked_sub_days(Days::new(n)))
        .collect();

    c.bench_function("compute_streak_365_days", |b| {
        b.iter(|| compute_streak(black_box(&dates), black_box(today)))
    });
}

criterion_group!(benches, bench_score_sentence, bench_compute_streak);
criterion_main!(benches);
