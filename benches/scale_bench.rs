//! Type scale performance - computation and export
//!
//! Scales are recomputed on every keystroke by interactive callers, so the
//! whole path from spec to stylesheet should stay in the microseconds.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fluidscale_core::{compute, traits::Exporter, ScaleSpec};
use fluidscale_export::{CssExporter, JsonExporter};

fn wide_spec(count: usize) -> ScaleSpec {
    let steps: Vec<String> = (0..count).map(|i| format!("step-{i}")).collect();
    let base = steps[count / 2].clone();
    ScaleSpec::default().with_steps(steps, base)
}

/// Validation plus arithmetic for the default seven steps and a wide scale
fn bench_compute(c: &mut Criterion) {
    let default_spec = ScaleSpec::default();
    c.bench_function("compute_default_scale", |b| {
        b.iter(|| compute(black_box(&default_spec)).unwrap())
    });

    let wide = wide_spec(40);
    c.bench_function("compute_40_steps", |b| {
        b.iter(|| compute(black_box(&wide)).unwrap())
    });
}

fn bench_export(c: &mut Criterion) {
    let scale = compute(&ScaleSpec::default()).unwrap();
    let plain = CssExporter::default();
    let fallbacks = CssExporter::default().with_fallbacks(true);
    let json = JsonExporter::new();

    c.bench_function("export_css", |b| b.iter(|| plain.export(black_box(&scale)).unwrap()));
    c.bench_function("export_css_fallbacks", |b| {
        b.iter(|| fallbacks.export(black_box(&scale)).unwrap())
    });
    c.bench_function("export_json", |b| b.iter(|| json.export(black_box(&scale)).unwrap()));
}

criterion_group!(benches, bench_compute, bench_export);
criterion_main!(benches);
