//! Conversion and interpolation benchmarks.

use chroma_color::{ColorSpace, LinearRgb, Oklab, Srgb};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("srgb_to_linear", |b| {
        b.iter(|| LinearRgb::from_srgb(black_box(Srgb::new(200, 100, 50))))
    });

    group.bench_function("linear_to_srgb", |b| {
        let lin = LinearRgb::from_srgb_u8(200, 100, 50);
        b.iter(|| black_box(lin).to_srgb())
    });

    group.bench_function("srgb_to_oklab", |b| {
        b.iter(|| Oklab::from_srgb(black_box(Srgb::new(200, 100, 50))))
    });

    group.bench_function("oklab_to_srgb", |b| {
        let lab = Oklab::from_srgb_u8(200, 100, 50);
        b.iter(|| black_box(lab).to_srgb())
    });

    group.finish();
}

fn bench_lerp(c: &mut Criterion) {
    let mut group = c.benchmark_group("lerp");

    let la = LinearRgb::from_srgb_u8(255, 40, 0);
    let lb = LinearRgb::from_srgb_u8(10, 60, 255);
    group.bench_function("linear", |b| {
        b.iter(|| black_box(la).lerp(black_box(lb), black_box(0.5)))
    });

    let oa = Oklab::from_srgb_u8(255, 40, 0);
    let ob = Oklab::from_srgb_u8(10, 60, 255);
    group.bench_function("oklab", |b| {
        b.iter(|| black_box(oa).lerp(black_box(ob), black_box(0.5)))
    });

    // The full gradient step: lerp in Oklab, come back out as 8-bit sRGB
    group.bench_function("oklab_gradient_step", |b| {
        b.iter(|| black_box(oa).lerp(black_box(ob), black_box(0.5)).to_srgb())
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_lerp);
criterion_main!(benches);
