//! Per-tick waveform generator primitives.
//!
//! These components are allocation-free and realtime-safe: every generator
//! owns a fixed-size state record and produces exactly one sample per `get()`
//! call. They intentionally stay focused on the synthesis math so the engine
//! layer can own mode selection and reinitialization.
//!
//! The shared lifecycle is `clear()` then `init(...)` then repeated `get()`.
//! The n-th `get()` after a `clear()` returns the sample at elapsed time
//! `n * dt`; calling `get()` on a generator that was never initialized is
//! defined (all parameters are zero, so the output is 0).

/// Biphasic charge-balanced pulse train.
pub mod biphase;
/// Single-polarity pulse train with leading delay.
pub mod mono;
/// Repeating linear ramp with leading delay.
pub mod saw;
/// Continuous-phase sinusoid.
pub mod sine;
/// Finite linear frequency sweep (one-shot).
pub mod zap;

pub use biphase::BiphasicPulse;
pub use mono::MonoPulse;
pub use saw::Sawtooth;
pub use sine::Sine;
pub use zap::Zap;

/// Operations every waveform variant supports.
///
/// `init` is deliberately not part of the trait: each variant takes a
/// different parameter list, and the engine reconstructs the active variant
/// on every reinitialization anyway.
pub trait Generator {
    /// Reset sample counters and phase accumulators to zero. Stored
    /// parameters are untouched.
    fn clear(&mut self);

    /// Produce the sample for the current index, then advance by one tick.
    fn get(&mut self) -> f64;
}

/// The currently selected generator, one variant per waveform.
///
/// A sum type keeps the per-tick dispatch a plain `match` and makes the
/// fixed set of shapes exhaustively checkable. Switching modes replaces the
/// variant wholesale, so a newly selected generator always starts from a
/// fresh `clear()` + `init()`.
#[derive(Debug, Clone, Copy)]
pub enum ActiveGenerator {
    Sine(Sine),
    Mono(MonoPulse),
    Biphase(BiphasicPulse),
    Saw(Sawtooth),
    Zap(Zap),
}

impl Generator for ActiveGenerator {
    fn clear(&mut self) {
        match self {
            ActiveGenerator::Sine(g) => g.clear(),
            ActiveGenerator::Mono(g) => g.clear(),
            ActiveGenerator::Biphase(g) => g.clear(),
            ActiveGenerator::Saw(g) => g.clear(),
            ActiveGenerator::Zap(g) => g.clear(),
        }
    }

    fn get(&mut self) -> f64 {
        match self {
            ActiveGenerator::Sine(g) => g.get(),
            ActiveGenerator::Mono(g) => g.get(),
            ActiveGenerator::Biphase(g) => g.get(),
            ActiveGenerator::Saw(g) => g.get(),
            ActiveGenerator::Zap(g) => g.get(),
        }
    }
}
