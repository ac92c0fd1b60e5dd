use super::Generator;

/// Two-polarity repeating pulse used for charge-balanced stimulation.
///
/// Each period of `delay + 2 * width` seconds outputs 0 for `delay`, then
/// `+amplitude` for `width`, then `-amplitude` for `width`. The positive and
/// negative areas cancel over a full period. Edge convention matches
/// [`super::MonoPulse`]: closed start, open end. `width == 0` degenerates to
/// constant 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiphasicPulse {
    delay: f64,
    width: f64,
    amplitude: f64,
    dt: f64,
    index: u64,
}

impl BiphasicPulse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store parameters and the sample period. Negative `delay`/`width` are
    /// clamped to 0.
    pub fn init(&mut self, delay: f64, width: f64, amplitude: f64, dt: f64) {
        debug_assert!(dt > 0.0);
        self.delay = delay.max(0.0);
        self.width = width.max(0.0);
        self.amplitude = amplitude;
        self.dt = dt;
    }
}

impl Generator for BiphasicPulse {
    fn clear(&mut self) {
        self.index = 0;
    }

    fn get(&mut self) -> f64 {
        let t = self.index as f64 * self.dt;
        self.index += 1;

        if self.width <= 0.0 {
            return 0.0;
        }
        let period = self.delay + 2.0 * self.width;
        let u = t % period;
        if u < self.delay {
            0.0
        } else if u < self.delay + self.width {
            self.amplitude
        } else {
            // u < period, so this is the negative phase.
            -self.amplitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_balance_over_one_period() {
        let dt = 1.0 / 256.0;
        let (delay, width, amp) = (0.25, 0.5, 2.0);
        let mut wave = BiphasicPulse::new();
        wave.clear();
        wave.init(delay, width, amp, dt);

        let period_samples = ((delay + 2.0 * width) / dt).round() as usize;
        let sum: f64 = (0..period_samples).map(|_| wave.get()).sum();
        assert!(sum.abs() < 1e-9, "expected balanced charge, residual {sum}");
    }

    #[test]
    fn phase_ordering_within_period() {
        let dt = 0.125;
        let mut wave = BiphasicPulse::new();
        wave.clear();
        wave.init(0.25, 0.5, 1.0, dt);

        // period = 1.25 s = 10 samples: 2 silent, 4 positive, 4 negative.
        let samples: Vec<f64> = (0..10).map(|_| wave.get()).collect();
        assert_eq!(&samples[0..2], &[0.0, 0.0]);
        assert_eq!(&samples[2..6], &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(&samples[6..10], &[-1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn zero_width_is_constant_zero() {
        let mut wave = BiphasicPulse::new();
        wave.clear();
        wave.init(0.5, 0.0, 3.0, 1e-3);
        for _ in 0..1024 {
            assert_eq!(wave.get(), 0.0);
        }
    }
}
