//! TUI module for stimscope
//!
//! Provides real-time visualization of the stimulus output and key-driven
//! parameter editing. All edits go through the shared [`stimgen`] parameter
//! store; the audio side observes the change flag and reinitializes the
//! engine, exactly as an external host would.

pub mod state;

mod controls;
mod scope;
mod spectrum;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stimgen::host::ParamId;

use crate::app::Shared;
use controls::{render_help, render_params, render_status};
use scope::render_scope;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use state::{step_for, PanelSnapshot, EDITABLE};

/// Samples kept for the scope trace and fed to the FFT.
pub const VIS_BUFFER_SIZE: usize = 2048;

pub struct UiApp {
    shared: Arc<Mutex<Shared>>,
    /// Ring buffer receiver for samples from the audio callback
    sample_rx: Consumer<f32>,
    sample_buffer: Vec<f32>,
    analyzer: SpectrumAnalyzer,
    /// Which parameter the Up/Down keys edit
    focus: usize,
    should_quit: bool,
}

impl UiApp {
    pub fn new(shared: Arc<Mutex<Shared>>, sample_rx: Consumer<f32>, sample_rate: f32) -> Self {
        Self {
            shared,
            sample_rx,
            sample_buffer: vec![0.0; VIS_BUFFER_SIZE],
            analyzer: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            focus: 0,
            should_quit: false,
        }
    }

    /// Run the UI event loop (~60 fps poll).
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_samples();

            let snap = self.snapshot();
            self.analyzer.update(&self.sample_buffer);
            terminal.draw(|frame| self.render(frame, &snap))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    /// Drain the ring buffer, keeping the last VIS_BUFFER_SIZE samples.
    fn poll_samples(&mut self) {
        let mut received = false;
        while let Ok(sample) = self.sample_rx.pop() {
            self.sample_buffer.push(sample);
            received = true;
        }
        if received && self.sample_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.sample_buffer.len() - VIS_BUFFER_SIZE;
            self.sample_buffer.drain(0..excess);
        }
    }

    /// Copy render state under the lock.
    fn snapshot(&self) -> PanelSnapshot {
        let shared = self.shared.lock().unwrap();
        PanelSnapshot {
            params: shared.store.snapshot(),
            mode: shared.engine.mode(),
            paused: shared.engine.is_paused(),
            zap_active: shared.engine.zap_active(),
            sample_rate: shared.sample_rate,
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as i64 - '1' as i64;
                let mut shared = self.shared.lock().unwrap();
                shared.store.set_int(ParamId::Waveform, index);
            }
            KeyCode::Char(' ') => {
                let mut shared = self.shared.lock().unwrap();
                if shared.engine.is_paused() {
                    shared.engine.unpause();
                } else {
                    shared.engine.pause();
                }
            }
            KeyCode::Tab => {
                self.focus = (self.focus + 1) % EDITABLE.len();
            }
            KeyCode::Up | KeyCode::Down => {
                let id = EDITABLE[self.focus];
                let direction = if key == KeyCode::Up { 1.0 } else { -1.0 };
                let mut shared = self.shared.lock().unwrap();
                let next = shared.store.get_double(id) + direction * step_for(id);
                // Keep panel edits in the documented non-negative range;
                // the engine would only clamp them to 0 anyway.
                shared.store.set_double(id, next.max(0.0));
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, snap: &PanelSnapshot) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Length(8), // Parameter list
                Constraint::Min(8),    // Scope
                Constraint::Length(9), // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_status(frame, chunks[0], snap);
        render_params(frame, chunks[1], snap, EDITABLE[self.focus]);
        render_scope(frame, chunks[2], &self.sample_buffer, snap.params.amplitude);
        render_spectrum(frame, chunks[3], self.analyzer.data());
        render_help(frame, chunks[4]);
    }
}
