use std::f64::consts::TAU;

use super::Generator;

/*
Zap (Linear Chirp) Stimulus
===========================

A zap is a single, finite sine sweep: the frequency moves linearly from a
start value to an end value over a fixed duration, then the output holds at
zero. Unlike the other waveforms it is one-shot, not periodic; re-arming
after completion is an explicit reset (`clear()` / `set_index(0)`), never
automatic.

The Math: Phase Is the Integral of Frequency
--------------------------------------------

With chirp rate k = (f_end - f_start) / duration (Hz/s, signed, so a
descending sweep works the same way), the instantaneous frequency at elapsed
time t is

    f(t) = f_start + k * t

The output phase must be the time-integral of f(t), not f(t) * t:

    phase(t) = 2π * (f_start * t + 0.5 * k * t²)

Multiplying the instantaneous frequency by t instead would produce phase
discontinuities and audible/electrical glitches as the sweep progresses.

Incremental Accumulation
------------------------

Per sample the phase advances by the integral of f over one period:

    ∫[t, t+dt] f(s) ds = (f_start + k * (t + dt/2)) * dt

Because f is linear in t, the midpoint rule is exact: the accumulated phase
equals the closed form above to within float rounding, no matter how many
samples elapse. `phase_at()` exposes the closed form so the two can be
checked against each other.
*/

/// One-shot linear frequency sweep from `freq_start` to `freq_end`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zap {
    freq_start: f64,
    freq_end: f64,
    amplitude: f64,
    duration: f64,
    dt: f64,
    index: u64,
    phase: f64,
    active: bool,
}

impl Zap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store sweep parameters and the sample period. A negative `duration`
    /// is clamped to 0 (an instantaneous sweep that never fires).
    pub fn init(&mut self, freq_start: f64, freq_end: f64, amplitude: f64, duration: f64, dt: f64) {
        debug_assert!(dt > 0.0);
        self.freq_start = freq_start;
        self.freq_end = freq_end;
        self.amplitude = amplitude;
        self.duration = duration.max(0.0);
        self.dt = dt;
        self.active = self.duration > 0.0 && (self.index as f64 * dt) < self.duration;
    }

    /// True until the sweep has run its full duration.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The incrementally accumulated phase (radians) at the current index.
    /// Agrees with [`Zap::phase_at`] up to float rounding; exposed so the
    /// two computations can be checked against each other.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Linear chirp rate in Hz/s. Zero for a degenerate (empty) sweep.
    pub fn rate(&self) -> f64 {
        if self.duration > 0.0 {
            (self.freq_end - self.freq_start) / self.duration
        } else {
            0.0
        }
    }

    /// Instantaneous frequency at sample index `n`.
    pub fn frequency_at(&self, n: u64) -> f64 {
        self.freq_start + self.rate() * (n as f64 * self.dt)
    }

    /// Closed-form phase at sample index `n`:
    /// `2π * (f_start * t + 0.5 * k * t²)` with `t = n * dt`.
    pub fn phase_at(&self, n: u64) -> f64 {
        let t = n as f64 * self.dt;
        TAU * (self.freq_start * t + 0.5 * self.rate() * t * t)
    }

    /// Reposition the sweep at sample index `n`, re-deriving the phase
    /// accumulator in closed form and re-arming `active` if `n` lands back
    /// inside the sweep. `set_index(0)` restarts from the beginning.
    pub fn set_index(&mut self, n: u64) {
        self.index = n;
        self.phase = self.phase_at(n);
        self.active = self.duration > 0.0 && (n as f64 * self.dt) < self.duration;
    }

    /// Single-shot accessor: returns the current sample and advances. Once
    /// the sweep duration elapses `active` latches false and the output is
    /// exactly 0 until an explicit reset.
    pub fn get_one(&mut self) -> f64 {
        let t = self.index as f64 * self.dt;
        self.index += 1;

        if !self.active || t >= self.duration {
            self.active = false;
            return 0.0;
        }

        let out = self.amplitude * self.phase.sin();
        self.phase += TAU * (self.freq_start + self.rate() * (t + 0.5 * self.dt)) * self.dt;
        out
    }
}

impl Generator for Zap {
    fn clear(&mut self) {
        self.index = 0;
        self.phase = 0.0;
        self.active = self.duration > 0.0;
    }

    /// Uniform contract shared with the repeating generators; same stepping
    /// as [`Zap::get_one`], returning 0 for all `t >= duration`.
    fn get(&mut self) -> f64 {
        self.get_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(f0: f64, f1: f64, amp: f64, duration: f64, dt: f64) -> Zap {
        let mut wave = Zap::new();
        wave.init(f0, f1, amp, duration, dt);
        wave.clear();
        wave
    }

    #[test]
    fn incremental_phase_matches_closed_form() {
        let dt = 1e-4;
        let mut wave = armed(1.0, 20.0, 1.0, 10.0, dt);

        for _ in 0..10_000 {
            wave.get_one();
        }
        let accumulated = wave.phase();
        let closed = wave.phase_at(10_000);
        assert!(
            (accumulated - closed).abs() < 1e-6,
            "phase drift {} rad after 1e4 samples",
            (accumulated - closed).abs()
        );
    }

    #[test]
    fn instantaneous_frequency_is_monotonic() {
        let wave = armed(1.0, 20.0, 1.0, 10.0, 1e-3);
        let mut prev = wave.frequency_at(0);
        assert!((prev - 1.0).abs() < 1e-12);
        for n in 1..10_000 {
            let f = wave.frequency_at(n);
            assert!(f > prev);
            prev = f;
        }
        assert!(wave.frequency_at(10_000) <= 20.0 + 1e-9);
    }

    #[test]
    fn descending_sweep_uses_signed_rate() {
        let wave = armed(20.0, 1.0, 1.0, 10.0, 1e-3);
        assert!(wave.rate() < 0.0);
        assert!(wave.frequency_at(5_000) < 20.0);
    }

    #[test]
    fn output_is_zero_after_duration() {
        let dt = 1e-3;
        let mut wave = armed(2.0, 8.0, 1.0, 0.5, dt);

        let sweep_samples = (0.5 / dt) as usize;
        for _ in 0..sweep_samples {
            wave.get_one();
        }
        assert!(wave.is_active() || wave.get_one() == 0.0);
        for _ in 0..1000 {
            assert_eq!(wave.get_one(), 0.0);
        }
        assert!(!wave.is_active());
    }

    #[test]
    fn set_index_zero_rearms_completed_sweep() {
        let dt = 1e-3;
        let mut wave = armed(2.0, 8.0, 1.0, 0.1, dt);

        let first: Vec<f64> = (0..50).map(|_| wave.get_one()).collect();
        for _ in 0..200 {
            wave.get_one();
        }
        assert!(!wave.is_active());

        wave.set_index(0);
        assert!(wave.is_active());
        let second: Vec<f64> = (0..50).map(|_| wave.get_one()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_duration_never_fires() {
        let mut wave = armed(1.0, 20.0, 1.0, 0.0, 1e-3);
        assert!(!wave.is_active());
        for _ in 0..100 {
            assert_eq!(wave.get_one(), 0.0);
        }
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let mut wave = armed(1.0, 20.0, 1.0, -5.0, 1e-3);
        assert!(!wave.is_active());
        assert_eq!(wave.get_one(), 0.0);
    }
}
