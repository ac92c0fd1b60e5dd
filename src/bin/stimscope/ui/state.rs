//! Shared state types for UI communication.
//!
//! The audio callback and the UI thread share the engine through a mutex;
//! the UI copies a small `PanelSnapshot` under the lock each frame so
//! rendering never holds the lock longer than a field copy.

use stimgen::host::ParamId;
use stimgen::{StimulusParams, WaveMode};

/// Editable fields, in panel display order. The waveform selector is
/// handled separately (number keys), so it is not part of the focus cycle.
pub const EDITABLE: [ParamId; 6] = [
    ParamId::Delay,
    ParamId::Width,
    ParamId::Frequency,
    ParamId::Amplitude,
    ParamId::ZapEndFrequency,
    ParamId::ZapDuration,
];

/// Per-field edit step for Up/Down keys.
pub fn step_for(id: ParamId) -> f64 {
    match id {
        ParamId::Delay | ParamId::Width => 0.05,
        ParamId::Frequency => 10.0,
        ParamId::Amplitude => 0.05,
        ParamId::ZapEndFrequency => 20.0,
        ParamId::ZapDuration => 0.5,
        ParamId::Waveform => 1.0,
    }
}

/// Copy of everything the panels need, taken under the lock once per frame.
#[derive(Clone, Copy, Debug)]
pub struct PanelSnapshot {
    pub params: StimulusParams,
    pub mode: Option<WaveMode>,
    pub paused: bool,
    /// `Some(active)` when the zap is selected.
    pub zap_active: Option<bool>,
    pub sample_rate: f32,
}

impl PanelSnapshot {
    pub fn mode_label(&self) -> &'static str {
        self.mode.map(WaveMode::label).unwrap_or("(invalid selector)")
    }
}
