//! Trace the zap stimulus: instantaneous frequency trajectory and the
//! drift between the incremental phase accumulator and the closed form.
//!
//! Run with: cargo run --example zap_sweep

use stimgen::gen::{Generator, Zap};

fn main() {
    let dt = 1e-4;
    let (f0, f1, duration) = (1.0, 20.0, 10.0);

    let mut sweep = Zap::new();
    sweep.init(f0, f1, 1.0, duration, dt);
    sweep.clear();

    println!(
        "linear chirp {f0} Hz -> {f1} Hz over {duration} s (rate {} Hz/s)",
        sweep.rate()
    );
    println!("{:>8}  {:>10}  {:>12}", "t (s)", "f(t) (Hz)", "phase drift");

    let total = (duration / dt) as u64;
    let report_every = total / 10;
    for n in 0..total {
        if n % report_every == 0 {
            let drift = (sweep.phase() - sweep.phase_at(n)).abs();
            println!(
                "{:8.2}  {:10.3}  {:12.3e}",
                n as f64 * dt,
                sweep.frequency_at(n),
                drift
            );
        }
        sweep.get_one();
    }

    // Past the sweep the output is pinned to zero.
    let tail: f64 = (0..1000).map(|_| sweep.get_one().abs()).sum();
    println!(
        "tail energy after sweep: {tail} (active = {})",
        sweep.is_active()
    );
}
