//! The mode controller: selects, reinitializes, and drives the active
//! generator.
//!
//! Exactly one generator is active at a time. Any parameter edit, mode
//! switch, or sample-period change rebuilds the active variant from a fresh
//! `clear()` + `init()` against the current snapshot and period; the replaced
//! variant's state is discarded wholesale, so stale state can never leak
//! across a reconfiguration. Pause zeroes the output and resets the active
//! generator's clock, so resuming restarts the waveform (and the zap sweep)
//! from `t = 0` without re-running `init`. Period-change and pause are
//! independent transitions.

use std::fmt;

use crate::gen::{ActiveGenerator, BiphasicPulse, Generator, MonoPulse, Sawtooth, Sine, Zap};
use crate::params::{StimulusParams, WaveMode};

/// Configuration errors the engine refuses to run under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// The sample period must be finite and strictly positive; anything else
    /// is division-by-zero-equivalent timing and is surfaced to the host
    /// rather than silently defaulted.
    InvalidPeriod(f64),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidPeriod(dt) => {
                write!(f, "invalid sample period {dt} s (must be finite and > 0)")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Deterministic per-tick stimulus engine.
///
/// Driven by an external real-time clock: one [`SignalEngine::tick`] per
/// clock period, producing one output sample. The engine has no notion of
/// wall-clock time, only sample counts and the externally authoritative
/// period `dt`.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    params: StimulusParams,
    dt: f64,
    paused: bool,
    generator: Option<ActiveGenerator>,
}

impl SignalEngine {
    /// Build an engine from an initial snapshot and sample period.
    pub fn new(params: StimulusParams, dt: f64) -> Result<Self, EngineError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(EngineError::InvalidPeriod(dt));
        }
        let mut engine = Self {
            params,
            dt,
            paused: false,
            generator: None,
        };
        engine.init_stimulus();
        Ok(engine)
    }

    /// Parameter edit or mode switch: store the new snapshot and rebuild the
    /// selected generator.
    pub fn set_params(&mut self, params: StimulusParams) {
        self.params = params;
        self.init_stimulus();
    }

    /// Sample-period change. Duration-based thresholds are re-derived
    /// against the new period by reinitializing the active generator; an
    /// invalid period drops the selection (the engine emits 0) until a valid
    /// period is supplied.
    pub fn set_period(&mut self, dt: f64) -> Result<(), EngineError> {
        if !(dt.is_finite() && dt > 0.0) {
            self.generator = None;
            return Err(EngineError::InvalidPeriod(dt));
        }
        self.dt = dt;
        self.init_stimulus();
        Ok(())
    }

    /// Emit 0 until unpaused. The active generator's sample clock is cleared
    /// here, so the waveform (and in particular the zap sweep) restarts from
    /// `t = 0` on resume.
    pub fn pause(&mut self) {
        self.paused = true;
        match &mut self.generator {
            Some(ActiveGenerator::Zap(z)) => z.set_index(0),
            Some(g) => g.clear(),
            None => {}
        }
    }

    /// Resume emitting via `get()`; parameters are unchanged so no re-init
    /// happens here.
    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The mode currently selected, if the raw selector is valid.
    pub fn mode(&self) -> Option<WaveMode> {
        self.params.mode()
    }

    pub fn params(&self) -> &StimulusParams {
        &self.params
    }

    pub fn period(&self) -> f64 {
        self.dt
    }

    /// Whether the zap sweep is still running. `None` when the zap is not
    /// the selected mode.
    pub fn zap_active(&self) -> Option<bool> {
        match &self.generator {
            Some(ActiveGenerator::Zap(z)) => Some(z.is_active()),
            _ => None,
        }
    }

    /// Per-tick execute: one call per external clock period.
    ///
    /// Paused or unselected (out-of-range waveform index) states emit 0.
    /// The zap is consumed through its single-shot accessor; the repeating
    /// generators through the uniform `get()` contract.
    pub fn tick(&mut self) -> f64 {
        if self.paused {
            return 0.0;
        }
        match &mut self.generator {
            Some(ActiveGenerator::Zap(z)) => z.get_one(),
            Some(g) => g.get(),
            None => 0.0,
        }
    }

    /// Render one tick per slot. Convenience for offline and block-based
    /// consumers; the semantics are identical to calling
    /// [`SignalEngine::tick`] in a loop.
    pub fn render(&mut self, out: &mut [f64]) {
        for sample in out.iter_mut() {
            *sample = self.tick();
        }
    }

    /// Rebuild the active generator from the current snapshot and period.
    fn init_stimulus(&mut self) {
        let p = &self.params;
        self.generator = match p.mode() {
            Some(WaveMode::Sine) => {
                let mut g = Sine::new();
                g.init(p.frequency, p.amplitude, self.dt);
                g.clear();
                Some(ActiveGenerator::Sine(g))
            }
            Some(WaveMode::MonoPulse) => {
                let mut g = MonoPulse::new();
                g.init(p.delay, p.width, p.amplitude, self.dt);
                g.clear();
                Some(ActiveGenerator::Mono(g))
            }
            Some(WaveMode::BiPulse) => {
                let mut g = BiphasicPulse::new();
                g.init(p.delay, p.width, p.amplitude, self.dt);
                g.clear();
                Some(ActiveGenerator::Biphase(g))
            }
            Some(WaveMode::Sawtooth) => {
                let mut g = Sawtooth::new();
                g.init(p.delay, p.width, p.amplitude, self.dt);
                g.clear();
                Some(ActiveGenerator::Saw(g))
            }
            Some(WaveMode::Zap) => {
                let mut g = Zap::new();
                g.init(
                    p.frequency,
                    p.zap_end_frequency,
                    p.amplitude,
                    p.zap_duration,
                    self.dt,
                );
                g.clear();
                Some(ActiveGenerator::Zap(g))
            }
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(mode: WaveMode) -> StimulusParams {
        StimulusParams {
            waveform: mode.index(),
            ..StimulusParams::default()
        }
    }

    #[test]
    fn rejects_invalid_period() {
        let p = params(WaveMode::Sine);
        assert!(matches!(
            SignalEngine::new(p, 0.0),
            Err(EngineError::InvalidPeriod(_))
        ));
        assert!(matches!(
            SignalEngine::new(p, -1e-3),
            Err(EngineError::InvalidPeriod(_))
        ));
        assert!(matches!(
            SignalEngine::new(p, f64::NAN),
            Err(EngineError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn invalid_selector_emits_silence() {
        let mut p = params(WaveMode::Sine);
        p.waveform = 17;
        let mut engine = SignalEngine::new(p, 1e-3).unwrap();
        assert_eq!(engine.mode(), None);
        for _ in 0..16 {
            assert_eq!(engine.tick(), 0.0);
        }

        // Reselecting a valid mode recovers.
        engine.set_params(params(WaveMode::MonoPulse));
        assert_eq!(engine.mode(), Some(WaveMode::MonoPulse));
    }

    #[test]
    fn pause_emits_zero_and_restarts_waveform() {
        let mut p = params(WaveMode::Sine);
        p.frequency = 7.0;
        let mut engine = SignalEngine::new(p, 1e-3).unwrap();

        let lead_in: Vec<f64> = (0..32).map(|_| engine.tick()).collect();
        engine.pause();
        for _ in 0..10 {
            assert_eq!(engine.tick(), 0.0);
        }
        engine.unpause();
        let resumed: Vec<f64> = (0..32).map(|_| engine.tick()).collect();
        assert_eq!(lead_in, resumed, "waveform must restart cleanly on resume");
    }

    #[test]
    fn pause_resets_zap_sweep() {
        let mut p = params(WaveMode::Zap);
        p.zap_duration = 1.0;
        let mut engine = SignalEngine::new(p, 1e-3).unwrap();

        let first: Vec<f64> = (0..100).map(|_| engine.tick()).collect();
        engine.pause();
        engine.unpause();
        let second: Vec<f64> = (0..100).map(|_| engine.tick()).collect();
        assert_eq!(first, second, "zap must restart from time 0 after pause");
    }

    #[test]
    fn period_change_rederives_thresholds() {
        let mut p = params(WaveMode::MonoPulse);
        p.delay = 0.25;
        p.width = 0.25;
        let dt = 1.0 / 128.0;
        let mut engine = SignalEngine::new(p, dt).unwrap();

        let count_high =
            |engine: &mut SignalEngine, n: usize| (0..n).filter(|_| engine.tick() != 0.0).count();
        // One period at dt: 64 samples, half of them high.
        assert_eq!(count_high(&mut engine, 64), 32);

        // Doubling dt halves the samples per period.
        engine.set_period(dt * 2.0).unwrap();
        assert_eq!(count_high(&mut engine, 32), 16);
    }

    #[test]
    fn invalid_period_change_silences_until_corrected() {
        let mut engine = SignalEngine::new(params(WaveMode::Sine), 1e-3).unwrap();
        assert!(engine.set_period(0.0).is_err());
        for _ in 0..8 {
            assert_eq!(engine.tick(), 0.0);
        }
        engine.set_period(1e-3).unwrap();
        assert!((0..64).map(|_| engine.tick()).any(|s| s != 0.0));
    }

    #[test]
    fn zap_active_flag_is_observable() {
        let mut p = params(WaveMode::Zap);
        p.zap_duration = 0.01;
        let mut engine = SignalEngine::new(p, 1e-3).unwrap();
        assert_eq!(engine.zap_active(), Some(true));
        for _ in 0..20 {
            engine.tick();
        }
        assert_eq!(engine.zap_active(), Some(false));

        let sine = SignalEngine::new(params(WaveMode::Sine), 1e-3).unwrap();
        assert_eq!(sine.zap_active(), None);
    }
}
