use std::f64::consts::TAU;

use super::Generator;

/// Continuous, infinite sinusoid: `amplitude * sin(2π * frequency * t)`.
///
/// There are no delay/width semantics; a zero frequency or amplitude
/// degenerates to a flat zero line. Restartable from `t = 0` via `clear()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sine {
    frequency: f64,
    amplitude: f64,
    dt: f64,
    index: u64,
}

impl Sine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store parameters and the sample period. Re-entrant.
    pub fn init(&mut self, frequency: f64, amplitude: f64, dt: f64) {
        debug_assert!(dt > 0.0);
        self.frequency = frequency;
        self.amplitude = amplitude;
        self.dt = dt;
    }
}

impl Generator for Sine {
    fn clear(&mut self) {
        self.index = 0;
    }

    fn get(&mut self) -> f64 {
        let t = self.index as f64 * self.dt;
        self.index += 1;
        self.amplitude * (TAU * self.frequency * t).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn matches_closed_form() {
        let dt = 1.0 / 1000.0;
        let mut wave = Sine::new();
        wave.clear();
        wave.init(10.0, 2.0, dt);

        for n in 0..500 {
            let expected = 2.0 * (TAU * 10.0 * n as f64 * dt).sin();
            let actual = wave.get();
            assert!(
                (actual - expected).abs() < 1e-12,
                "sample {n}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn first_sample_is_zero_crossing() {
        let mut wave = Sine::new();
        wave.clear();
        wave.init(5.0, 1.0, 1e-3);
        assert_eq!(wave.get(), 0.0);
    }

    #[test]
    fn uninitialized_output_is_zero() {
        let mut wave = Sine::new();
        for _ in 0..8 {
            assert_eq!(wave.get(), 0.0);
        }
    }
}
