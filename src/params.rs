//! Waveform selection and the parameter snapshot handed to the engine.
//!
//! The host owns the live parameter values (see [`crate::host`]); the engine
//! only ever sees an immutable [`StimulusParams`] snapshot taken at each
//! reinitialization. Editing a value therefore always goes through a fresh
//! snapshot plus a re-init, never through shared mutable state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five selectable signal shapes.
///
/// The discriminants match the host's integer selector (combo-box index in
/// the original panel), so `mode as i64` and [`WaveMode::from_index`] are
/// inverses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveMode {
    Sine = 0,
    MonoPulse = 1,
    BiPulse = 2,
    Sawtooth = 3,
    Zap = 4,
}

impl WaveMode {
    pub const ALL: [WaveMode; 5] = [
        WaveMode::Sine,
        WaveMode::MonoPulse,
        WaveMode::BiPulse,
        WaveMode::Sawtooth,
        WaveMode::Zap,
    ];

    /// Decode the host's raw integer selector. Out-of-range values are a
    /// recoverable condition (the engine emits 0), hence `Option` rather
    /// than a panic or a silent default.
    pub fn from_index(index: i64) -> Option<WaveMode> {
        match index {
            0 => Some(WaveMode::Sine),
            1 => Some(WaveMode::MonoPulse),
            2 => Some(WaveMode::BiPulse),
            3 => Some(WaveMode::Sawtooth),
            4 => Some(WaveMode::Zap),
            _ => None,
        }
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    /// Display name, as shown by the selection UI.
    pub fn label(self) -> &'static str {
        match self {
            WaveMode::Sine => "Sine Wave",
            WaveMode::MonoPulse => "Monophasic Pulse",
            WaveMode::BiPulse => "Biphasic Pulse",
            WaveMode::Sawtooth => "Sawtooth Wave",
            WaveMode::Zap => "Zap Stimulus",
        }
    }
}

/// Immutable snapshot of every stimulus parameter.
///
/// `waveform` stays the raw host integer so an out-of-range selector can be
/// represented (and answered with silence) instead of being coerced to a
/// guessed mode. `frequency` doubles as the zap's start frequency, exactly
/// as in the original variable table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StimulusParams {
    /// Raw waveform selector (0-4, see [`WaveMode`]).
    pub waveform: i64,
    /// Leading delay in seconds (pulse and sawtooth modes).
    pub delay: f64,
    /// Pulse/ramp width in seconds.
    pub width: f64,
    /// Frequency in Hz; also the zap sweep's start frequency.
    pub frequency: f64,
    /// Peak amplitude in signal units.
    pub amplitude: f64,
    /// Zap sweep end frequency in Hz.
    pub zap_end_frequency: f64,
    /// Zap sweep duration in seconds.
    pub zap_duration: f64,
}

impl StimulusParams {
    /// The selected mode, if the raw selector is in range.
    pub fn mode(&self) -> Option<WaveMode> {
        WaveMode::from_index(self.waveform)
    }
}

impl Default for StimulusParams {
    fn default() -> Self {
        Self {
            waveform: WaveMode::Sine.index(),
            delay: 1.0,
            width: 1.0,
            frequency: 1.0,
            amplitude: 1.0,
            zap_end_frequency: 20.0,
            zap_duration: 10.0,
        }
    }
}
