use super::Generator;

/// Repeating linear ramp with leading delay.
///
/// Each period of `delay + width` seconds outputs 0 for `delay`, then ramps
/// linearly from 0 toward `amplitude` over `width` seconds (value at offset
/// `u` into the ramp: `amplitude * u / width`). The ramp never quite reaches
/// `amplitude` before the period rolls over; the last sample sits at
/// `amplitude * (1 - dt / width)` on sample-aligned periods. `width == 0`
/// degenerates to constant 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sawtooth {
    delay: f64,
    width: f64,
    amplitude: f64,
    dt: f64,
    index: u64,
}

impl Sawtooth {
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

impl Generator for Sawtooth {
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
        let u = t % period;
        if u >= self.delay {
            self.amplitude * (u - self.delay) / self.width
        } else {
            0.0
        }
    }
}
