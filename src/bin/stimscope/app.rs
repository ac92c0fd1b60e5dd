//! stimscope - audio plumbing and application runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

use stimgen::host::{ParamId, ParameterStore};
use stimgen::{SignalEngine, MAX_BLOCK_SIZE};

use crate::ui::UiApp;

/// Engine plus its host-side parameter store, shared between the audio
/// callback and the UI thread.
pub struct Shared {
    pub engine: SignalEngine,
    pub store: ParameterStore,
    pub sample_rate: f32,
}

pub struct Stimscope {
    store: ParameterStore,
}

impl Stimscope {
    pub fn new() -> Self {
        // The registration defaults (1 Hz, 1 s pulses) are instrumentation
        // values; move the demo into the audible band.
        let mut store = ParameterStore::new();
        store.set_double(ParamId::Frequency, 220.0);
        store.set_double(ParamId::Amplitude, 0.5);
        store.set_double(ParamId::Delay, 0.25);
        store.set_double(ParamId::Width, 0.25);
        store.set_double(ParamId::ZapEndFrequency, 880.0);
        store.set_double(ParamId::ZapDuration, 4.0);
        store.take_changed();
        Self { store }
    }

    /// Open the output stream and run the UI until quit.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        // The audio clock is the engine's external tick source: one tick
        // per frame at 1/sample_rate seconds.
        let dt = 1.0 / sample_rate as f64;
        let engine = SignalEngine::new(self.store.snapshot(), dt)
            .wrap_err("engine rejected the audio clock period")?;

        let shared = Arc::new(Mutex::new(Shared {
            engine,
            store: self.store,
            sample_rate,
        }));

        // Sample transport to the scope: audio thread produces, UI consumes.
        let (mut sample_tx, sample_rx) = rtrb::RingBuffer::<f32>::new(MAX_BLOCK_SIZE * 8);

        let audio_shared = shared.clone();
        let mut block = vec![0.0f64; MAX_BLOCK_SIZE];
        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let mut shared = audio_shared.lock().unwrap();
                let Shared { engine, store, .. } = &mut *shared;

                // Host edits land here, as a snapshot + reinitialization.
                if store.take_changed() {
                    engine.set_params(store.snapshot());
                }

                let total_frames = data.len() / channels;
                let mut frames_written = 0;
                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let chunk = &mut block[..frames];
                    engine.render(chunk);

                    let out_off = frames_written * channels;
                    for (i, &s) in chunk.iter().enumerate() {
                        let s = s as f32;
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                        // Drop samples when the UI lags; the scope only
                        // needs the most recent window.
                        let _ = sample_tx.push(s);
                    }
                    frames_written += frames;
                }
            },
            |err| eprintln!("audio error: {err}"),
            None,
        )?;
        stream.play()?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(shared, sample_rx, sample_rate).run(&mut terminal);
        ratatui::restore();
        result
    }
}

impl Default for Stimscope {
    fn default() -> Self {
        Self::new()
    }
}
