mod engine;
mod waveforms;

pub use engine::bench_engine;
pub use waveforms::bench_waveforms;
