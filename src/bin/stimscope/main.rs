//! stimscope - terminal scope for the stimulus engine
//!
//! Plays the engine output through the default audio device and renders a
//! live oscilloscope, spectrum, and parameter panel. The panel plays the
//! role of the host: it owns the parameter store and forwards key edits as
//! store writes, which the audio side picks up as reinitializations.
//!
//! Run with: cargo run --bin stimscope

mod app;
mod ui;

use app::Stimscope;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    Stimscope::new().run()
}
