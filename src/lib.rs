pub mod engine;
pub mod gen; // Per-tick waveform generator primitives
pub mod host; // Host parameter store and channel metadata
pub mod params;

pub use engine::{EngineError, SignalEngine};
pub use params::{StimulusParams, WaveMode};

/// Largest block a block-rendering consumer may request in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
