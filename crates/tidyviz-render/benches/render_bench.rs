use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tidyviz_core::{prepare_coal, CoalConfig, ProductionRecord};
use tidyviz_render::{render_stacked_area, RenderOptions, Theme};

fn build_rows() -> Vec<ProductionRecord> {
    let kinds = ["Bituminous Coal", "Lignite Coal", "Thermal Coal", "Metallurgical Coal"];
    (1900..=2022)
        .flat_map(|year| kinds.iter().map(move |k| ProductionRecord::new(year, *k, f64::from(year - 1890))))
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let table = prepare_coal(&build_rows(), &CoalConfig::default()).expect("coal table");
    let theme = Theme::coal();
    let mut opts = RenderOptions::coal();
    opts.draw_text = false;
    group.bench_function("stacked_area_full_size", |b| {
        b.iter(|| black_box(render_stacked_area(&table, &theme, &opts).ok()));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
