use super::Generator;

/// Single-polarity repeating pulse.
///
/// Each period of `delay + width` seconds outputs 0 for the first `delay`
/// seconds and `amplitude` for the remaining `width` seconds. The pulse is
/// closed on its start instant and open on its end instant:
/// `t in [delay, delay + width)` within the period yields `amplitude`.
/// `width == 0` is a defined degenerate case producing constant 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoPulse {
    delay: f64,
    width: f64,
    amplitude: f64,
    dt: f64,
    index: u64,
}

impl MonoPulse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store parameters and the sample period. Negative `delay`/`width` are
    /// clamped to 0 (degenerate output, never a mid-experiment failure).
    pub fn init(&mut self, delay: f64, width: f64, amplitude: f64, dt: f64) {
        debug_assert!(dt > 0.0);
        self.delay = delay.max(0.0);
        self.width = width.max(0.0);
        self.amplitude = amplitude;
        self.dt = dt;
    }
}

impl Generator for MonoPulse {
    fn clear(&mut self) {
        self.index = 0;
    }

    fn get(&mut self) -> f64 {
        let t = self.index as f64 * self.dt;
        self.index += 1;

        if self.width <= 0.0 {
            return 0.0;
        }
        let period = self.delay + self.width;
        // u in [0, period); the pulse occupies [delay, period).
        let u = t % period;
        if u >= self.delay {
            self.amplitude
        } else {
            0.0
        }
    }
}
