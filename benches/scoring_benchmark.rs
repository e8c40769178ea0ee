//! Benchmarks for fit scoring and catalog ranking.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use web3_focus_slider::{compute_fit, rank_catalog, Preferences, SortField, StyleProfile, STYLES};

/// A synthetic catalog larger than the built-in one, with repeated values
/// so the key tie-break is exercised.
fn synthetic_catalog(size: usize) -> Vec<StyleProfile> {
    let keys: Vec<&'static str> = (0..size)
        .map(|i| &*Box::leak(format!("style-{i:05}").into_boxed_str()))
        .collect();
    keys.into_iter()
        .enumerate()
        .map(|(i, key)| StyleProfile {
            key,
            name: key,
            privacy: (i % 7) as f64 / 6.0,
            soundness: (i % 11) as f64 / 10.0,
            ux_speed: (i % 5) as f64 / 4.0,
            note: "",
        })
        .collect()
}

fn bench_compute_fit(c: &mut Criterion) {
    c.bench_function("compute_fit/builtin_catalog", |b| {
        b.iter(|| {
            for style in STYLES {
                black_box(compute_fit(
                    style,
                    black_box(9),
                    black_box(8),
                    black_box(5),
                ));
            }
        });
    });
}

fn bench_rank_catalog(c: &mut Criterion) {
    let prefs = Preferences::new(8, 7, 6);
    let mut group = c.benchmark_group("rank_catalog");

    for size in [3usize, 100, 1_000] {
        let catalog = synthetic_catalog(size);
        for field in [SortField::Key, SortField::Soundness] {
            group.bench_with_input(
                BenchmarkId::new(field.to_string(), size),
                &catalog,
                |b, catalog| {
                    b.iter(|| black_box(rank_catalog(catalog, &prefs, field, true, 0)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compute_fit, bench_rank_catalog);
criterion_main!(benches);
