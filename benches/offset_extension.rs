use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wide_grid::config::GridConfig;
use wide_grid::data::RowSample;
use wide_grid::grid::{ColumnOffsetCache, ScrollWindowController, WidthEstimator};

fn create_sample(columns: usize) -> RowSample {
    let mut rows: Vec<Vec<String>> = vec![(0..columns).map(|i| format!("field_{}", i)).collect()];
    for r in 0..49 {
        rows.push(
            (0..columns)
                .map(|c| format!("row {} column {} payload {}", r, c, (r * c) % 977))
                .collect(),
        );
    }
    RowSample::new(rows, "field_").unwrap()
}

fn benchmark_extend(c: &mut Criterion) {
    let sample_1k = create_sample(1_000);
    let sample_5k = create_sample(5_000);

    let mut group = c.benchmark_group("offset_extend");

    group.bench_function("initial_window_1k_cols", |b| {
        b.iter(|| {
            let mut cache = ColumnOffsetCache::new(WidthEstimator::new(200.0, 8.0));
            cache.extend(black_box(&sample_1k), 0..16);
            assert!(cache.offset_of(15).is_some());
        });
    });

    group.bench_function("wide_extension_5k_cols", |b| {
        b.iter(|| {
            let mut cache = ColumnOffsetCache::new(WidthEstimator::new(200.0, 8.0));
            cache.extend(black_box(&sample_5k), 0..256);
            assert!(cache.offset_of(255).is_some());
        });
    });

    group.finish();
}

fn benchmark_scroll_sweep(c: &mut Criterion) {
    let config = GridConfig::default();
    let sample = create_sample(2_000);

    c.bench_function("scroll_sweep_100_events", |b| {
        b.iter(|| {
            let mut controller =
                ScrollWindowController::new(sample.clone(), &config, black_box(1000.0));
            let mut position = 0.0;
            for _ in 0..100 {
                position += 900.0;
                controller.on_scroll(black_box(position));
            }
            assert!(controller.window().start > 0);
        });
    });
}

criterion_group!(benches, benchmark_extend, benchmark_scroll_sweep);
criterion_main!(benches);
