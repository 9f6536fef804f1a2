use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sway_animation::{Curve, CurveConfig};

fn evaluate(c: &mut Criterion) {
    let real = CurveConfig::real(100.0, 1.0).unwrap();
    let complex = CurveConfig::complex(100.0, 0.2, 1.0).unwrap();

    c.bench_function("real_value_at", |b| {
        b.iter(|| real.value_at(black_box(0.37)))
    });

    c.bench_function("complex_value_at", |b| {
        b.iter(|| complex.value_at(black_box(0.37)))
    });

    c.bench_function("complex_frame_deltas_60fps", |b| {
        b.iter(|| {
            let mut curve = Curve::new(complex);
            let mut sum = 0.0;
            for frame in 0..60 {
                sum += curve.advance(black_box(frame as f32 / 60.0));
            }
            sum
        })
    });
}

criterion_group!(benches, evaluate);
criterion_main!(benches);
