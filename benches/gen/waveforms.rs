//! Benchmarks for the individual waveform generators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stimgen::gen::{BiphasicPulse, Generator, MonoPulse, Sawtooth, Sine, Zap};

use crate::BLOCK_SIZES;

const DT: f64 = 1.0 / 48_000.0;

fn run_block<G: Generator>(gen: &mut G, ticks: usize) -> f64 {
    let mut acc = 0.0;
    for _ in 0..ticks {
        acc += gen.get();
    }
    acc
}

pub fn bench_waveforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen/waveforms");

    for &size in BLOCK_SIZES {
        // Sine - one sin() per tick
        let mut sine = Sine::new();
        sine.init(440.0, 1.0, DT);
        sine.clear();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, &n| {
            b.iter(|| run_block(black_box(&mut sine), n))
        });

        // Mono pulse - modulo and compare
        let mut mono = MonoPulse::new();
        mono.init(1e-3, 1e-3, 1.0, DT);
        mono.clear();
        group.bench_with_input(BenchmarkId::new("mono", size), &size, |b, &n| {
            b.iter(|| run_block(black_box(&mut mono), n))
        });

        // Biphasic pulse - modulo and two compares
        let mut biphase = BiphasicPulse::new();
        biphase.init(1e-3, 1e-3, 1.0, DT);
        biphase.clear();
        group.bench_with_input(BenchmarkId::new("biphase", size), &size, |b, &n| {
            b.iter(|| run_block(black_box(&mut biphase), n))
        });

        // Sawtooth - modulo and a division
        let mut saw = Sawtooth::new();
        saw.init(1e-3, 1e-3, 1.0, DT);
        saw.clear();
        group.bench_with_input(BenchmarkId::new("saw", size), &size, |b, &n| {
            b.iter(|| run_block(black_box(&mut saw), n))
        });

        // Zap - sin() plus the phase accumulator
        let mut zap = Zap::new();
        zap.init(20.0, 20_000.0, 1.0, 3600.0, DT);
        zap.clear();
        group.bench_with_input(BenchmarkId::new("zap", size), &size, |b, &n| {
            b.iter(|| {
                let zap = black_box(&mut zap);
                let mut acc = 0.0;
                for _ in 0..n {
                    acc += zap.get_one();
                }
                acc
            })
        });
    }

    group.finish();
}
