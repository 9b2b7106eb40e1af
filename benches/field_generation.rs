#![allow(missing_docs)]
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cloudfield::{CloudNoise, FieldGenerator};

// Dimensions the presentation layer typically requests (50-75 per axis).
const DIM_X: i32 = 50;
const DIM_Y: i32 = 25;
const DIM_Z: i32 = 50;

fn bench_field_generation(c: &mut Criterion) {
    let generator = FieldGenerator::new();

    c.bench_function("generate_50x25x50", |b| {
        b.iter(|| {
            black_box(
                generator
                    .generate(black_box(DIM_X), black_box(DIM_Y), black_box(DIM_Z))
                    .unwrap(),
            )
        });
    });

    let coarse = FieldGenerator::new().with_octaves(1);
    c.bench_function("generate_50x25x50_single_octave", |b| {
        b.iter(|| {
            black_box(
                coarse
                    .generate(black_box(DIM_X), black_box(DIM_Y), black_box(DIM_Z))
                    .unwrap(),
            )
        });
    });
}

fn bench_noise_sample(c: &mut Criterion) {
    let noise = CloudNoise::default();

    c.bench_function("cloud_noise_sample", |b| {
        b.iter(|| black_box(noise.sample(black_box(7.3), black_box(2.9), black_box(14.1))));
    });
}

criterion_group!(benches, bench_field_generation, bench_noise_sample);
criterion_main!(benches);
