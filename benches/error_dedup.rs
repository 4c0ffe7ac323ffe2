// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for error notification intake.
//!
//! Measures the cost of:
//! - Appending distinct errors to a growing list
//! - Collapsing a repeated error at the front of a full list

use criterion::{criterion_group, criterion_main, Criterion};
use notify_store::config::Config;
use notify_store::notifications::ManualClock;
use notify_store::{ErrorObject, NotificationStore};
use std::hint::black_box;

fn api_error(index: usize) -> ErrorObject {
    ErrorObject::new()
        .with_status(400)
        .with_request(format!("/api/clients/{index}"), Some("{}".to_string()))
        .with_body(Some(400), Some("validation_failure".to_string()))
}

/// Fills a fresh store with distinct errors, so every insert scans the whole list.
fn bench_distinct_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_dedup");

    group.bench_function("append_100_distinct", |b| {
        b.iter(|| {
            let mut store = NotificationStore::with_clock(Config::default(), ManualClock::new(0));
            for i in 0..100 {
                store.show_error(api_error(i));
            }
            black_box(store.error_notifications().len());
        });
    });

    group.finish();
}

/// Repeats the oldest error in a list of 100, the worst case for collapse.
fn bench_collapse_oldest(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_dedup");

    let mut store = NotificationStore::with_clock(Config::default(), ManualClock::new(0));
    for i in 0..100 {
        store.show_error(api_error(i));
    }

    group.bench_function("collapse_oldest_of_100", |b| {
        b.iter(|| {
            let oldest = store.error_notifications()[0]
                .error_object()
                .cloned()
                .unwrap_or_default();
            store.show_error(black_box(oldest));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_distinct_errors, bench_collapse_oldest);
criterion_main!(benches);
