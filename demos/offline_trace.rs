//! Render a short trace of every waveform offline and print summary figures.
//!
//! Run with: cargo run --example offline_trace

use stimgen::{SignalEngine, StimulusParams, WaveMode};

fn main() {
    let dt = 1.0 / 1000.0;
    let seconds = 4.0;
    let samples = (seconds / dt) as usize;

    for mode in WaveMode::ALL {
        let params = StimulusParams {
            waveform: mode.index(),
            delay: 0.5,
            width: 0.5,
            frequency: 2.0,
            amplitude: 1.0,
            zap_end_frequency: 20.0,
            zap_duration: 2.0,
        };
        let mut engine = SignalEngine::new(params, dt).expect("valid period");

        let mut trace = vec![0.0; samples];
        engine.render(&mut trace);

        let peak = trace.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        let mean = trace.iter().sum::<f64>() / samples as f64;
        let nonzero = trace.iter().filter(|s| **s != 0.0).count();
        println!(
            "{:<18} peak {:+.3}  mean {:+.5}  nonzero {:>5}/{} samples",
            mode.label(),
            peak,
            mean,
            nonzero,
            samples
        );
    }
}
