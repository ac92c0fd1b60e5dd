//! Benchmarks for controller dispatch and block rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stimgen::{SignalEngine, StimulusParams, WaveMode};

use crate::BLOCK_SIZES;

const DT: f64 = 1.0 / 48_000.0;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/tick");

    for mode in WaveMode::ALL {
        let params = StimulusParams {
            waveform: mode.index(),
            delay: 1e-3,
            width: 1e-3,
            frequency: 440.0,
            amplitude: 1.0,
            zap_end_frequency: 2_000.0,
            zap_duration: 3600.0,
        };
        let mut engine = SignalEngine::new(params, DT).expect("valid period");
        group.bench_function(BenchmarkId::new("dispatch", mode.label()), |b| {
            b.iter(|| black_box(&mut engine).tick())
        });
    }

    group.finish();

    let mut group = c.benchmark_group("engine/render");
    let mut engine = SignalEngine::new(StimulusParams::default(), DT).expect("valid period");
    for &size in BLOCK_SIZES {
        let mut block = vec![0.0f64; size];
        group.bench_with_input(BenchmarkId::new("block", size), &size, |b, _| {
            b.iter(|| {
                engine.render(black_box(&mut block));
                block[0]
            })
        });
    }
    group.finish();
}
