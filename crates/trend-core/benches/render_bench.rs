use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use trend_core::{ChartConfig, Dataset, Record, RenderOptions, TrendChart};

fn build_chart(years: i32) -> TrendChart {
    let mut records = Vec::with_capacity(years as usize * 3);
    for (k, scenario) in ["ssp126", "ssp245", "ssp585"].iter().enumerate() {
        for i in 0..years {
            let drift = (k as f64 + 1.0) * 0.02 * i as f64;
            let wiggle = (i as f64 * 0.3).sin() * 0.1;
            records.push(Record::new(1900 + i, drift + wiggle, *scenario));
        }
    }
    TrendChart::new(Dataset::new(records), ChartConfig::default()).expect("chart")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100i32, 1_000i32] {
        group.bench_function(format!("years_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
