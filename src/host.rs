//! Host-facing parameter surface.
//!
//! The engine never talks to widgets or a plugin registry; it only needs a
//! named-value store the host (panel, script, test harness) can write into,
//! plus an edge-triggered "parameters changed" notification telling the
//! engine owner to take a fresh snapshot and reinitialize. This module is
//! that surface, together with the metadata a host needs to render the
//! seven recognized fields and the single output channel.

use crate::params::{StimulusParams, WaveMode};

/// Identifier for each recognized parameter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    Waveform,
    Delay,
    Width,
    Frequency,
    Amplitude,
    ZapEndFrequency,
    ZapDuration,
}

/// Default value for a parameter: the waveform selector is an integer, all
/// others are doubles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Double(f64),
}

/// Static metadata describing one parameter field.
#[derive(Debug, Clone, Copy)]
pub struct ParamInfo {
    pub id: ParamId,
    pub name: &'static str,
    pub description: &'static str,
    pub default: ParamValue,
}

/// The registration table for all seven parameters, in host display order.
pub fn default_params() -> [ParamInfo; 7] {
    [
        ParamInfo {
            id: ParamId::Waveform,
            name: "Signal Waveform",
            description: "The current type of signal being generated. Current types are \
                          sine, monophasic pulse, biphasic pulse, sawtooth, and zap",
            default: ParamValue::Int(WaveMode::Sine.index()),
        },
        ParamInfo {
            id: ParamId::Delay,
            name: "Delay (s)",
            description: "Delay (s)",
            default: ParamValue::Double(1.0),
        },
        ParamInfo {
            id: ParamId::Width,
            name: "Width (s)",
            description: "Width (s)",
            default: ParamValue::Double(1.0),
        },
        ParamInfo {
            id: ParamId::Frequency,
            name: "Freq (Hz)",
            description: "Freq (Hz), also used as minimum ZAP frequency",
            default: ParamValue::Double(1.0),
        },
        ParamInfo {
            id: ParamId::Amplitude,
            name: "Amplitude (V)",
            description: "Amplitude (V)",
            default: ParamValue::Double(1.0),
        },
        ParamInfo {
            id: ParamId::ZapEndFrequency,
            name: "ZAP max Freq (Hz)",
            description: "Maximum ZAP frequency",
            default: ParamValue::Double(20.0),
        },
        ParamInfo {
            id: ParamId::ZapDuration,
            name: "ZAP duration (s)",
            description: "ZAP duration (s)",
            default: ParamValue::Double(10.0),
        },
    ]
}

/// Descriptor for the one scalar output channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn output_channel() -> ChannelInfo {
    ChannelInfo {
        name: "Signal Generator Output",
        description: "Signal Generator Output",
    }
}

/// Live parameter values with change tracking.
///
/// Hosts write through the typed setters; the engine owner polls
/// [`ParameterStore::take_changed`] and, when it fires, hands
/// [`ParameterStore::snapshot`] to the engine for reinitialization.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    values: StimulusParams,
    changed: bool,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            values: StimulusParams::default(),
            changed: false,
        }
    }

    pub fn set_int(&mut self, id: ParamId, value: i64) {
        match id {
            ParamId::Waveform => self.values.waveform = value,
            // Doubles accept integer writes the way a host numeric field would.
            _ => self.set_double(id, value as f64),
        }
        self.changed = true;
    }

    pub fn set_double(&mut self, id: ParamId, value: f64) {
        match id {
            ParamId::Waveform => self.values.waveform = value as i64,
            ParamId::Delay => self.values.delay = value,
            ParamId::Width => self.values.width = value,
            ParamId::Frequency => self.values.frequency = value,
            ParamId::Amplitude => self.values.amplitude = value,
            ParamId::ZapEndFrequency => self.values.zap_end_frequency = value,
            ParamId::ZapDuration => self.values.zap_duration = value,
        }
        self.changed = true;
    }

    pub fn get_int(&self, id: ParamId) -> i64 {
        match id {
            ParamId::Waveform => self.values.waveform,
            _ => self.get_double(id) as i64,
        }
    }

    pub fn get_double(&self, id: ParamId) -> f64 {
        match id {
            ParamId::Waveform => self.values.waveform as f64,
            ParamId::Delay => self.values.delay,
            ParamId::Width => self.values.width,
            ParamId::Frequency => self.values.frequency,
            ParamId::Amplitude => self.values.amplitude,
            ParamId::ZapEndFrequency => self.values.zap_end_frequency,
            ParamId::ZapDuration => self.values.zap_duration,
        }
    }

    /// Immutable snapshot of the current values.
    pub fn snapshot(&self) -> StimulusParams {
        self.values
    }

    /// Returns true once per batch of edits since the last call.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_registration_table() {
        let store = ParameterStore::new();
        for info in default_params() {
            match info.default {
                ParamValue::Int(v) => assert_eq!(store.get_int(info.id), v),
                ParamValue::Double(v) => assert_eq!(store.get_double(info.id), v),
            }
        }
    }

    #[test]
    fn change_flag_is_edge_triggered() {
        let mut store = ParameterStore::new();
        assert!(!store.take_changed());

        store.set_double(ParamId::Frequency, 5.0);
        store.set_double(ParamId::Amplitude, 2.0);
        assert!(store.take_changed());
        assert!(!store.take_changed());
    }

    #[test]
    fn snapshot_carries_edits() {
        let mut store = ParameterStore::new();
        store.set_int(ParamId::Waveform, WaveMode::Zap.index());
        store.set_double(ParamId::ZapDuration, 2.5);

        let snap = store.snapshot();
        assert_eq!(snap.mode(), Some(WaveMode::Zap));
        assert_eq!(snap.zap_duration, 2.5);
    }
}
