use chart_core::{ChartState, Column};
use chart_render_skia::{RasterOptions, SkiaBackend};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_render(c: &mut Criterion) {
    let rows = 20_000usize;
    let x = Column::new("x", (0..rows).map(|i| i as f64).collect());
    let ys: Vec<Column> = (0..4)
        .map(|s| Column::new(format!("y{s}"), (0..rows).map(|i| ((i as f64) * 0.01 + s as f64).sin()).collect()))
        .collect();

    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
    let mut state = ChartState::new(SkiaBackend::new(opts));
    c.bench_function("load_and_render_4x20k", |b| {
        b.iter(|| {
            state.set_multi_xy(x.clone(), ys.clone(), "bench").expect("load");
            black_box(state.backend().redraw_count());
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
