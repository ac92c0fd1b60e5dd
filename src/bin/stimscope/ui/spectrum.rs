//! Spectrum analyzer widget
//!
//! FFT magnitude view with linearly spaced bins. Linear spacing suits the
//! zap stimulus: a linear frequency sweep walks across the panel at constant
//! speed.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Upper edge of the displayed band (Hz). The stimulus lives well below
/// Nyquist at audio rates; showing the full half-spectrum would squash the
/// sweep into the left edge.
const DISPLAY_MAX_HZ: f64 = 2_000.0;

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    scratch: Vec<Complex<f32>>,
    /// (frequency_hz, magnitude_db) per displayed bin.
    spectrum: Vec<(f64, f64)>,
    sample_rate: f32,
}

impl SpectrumAnalyzer {
    /// `fft_len` must match the scope buffer length.
    pub fn new(fft_len: usize, sample_rate: f32) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(fft_len);

        // Hann window keeps the swept tone from smearing across the panel.
        let denom = fft_len.saturating_sub(1).max(1) as f32;
        let window = (0..fft_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();

        let bin_hz = sample_rate as f64 / fft_len as f64;
        let shown = ((DISPLAY_MAX_HZ / bin_hz) as usize).clamp(1, fft_len / 2);
        let spectrum = (0..shown).map(|i| (i as f64 * bin_hz, -120.0)).collect();

        Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); fft_len],
            spectrum,
            sample_rate,
        }
    }

    /// Recompute the spectrum from the latest sample buffer.
    pub fn update(&mut self, samples: &[f32]) {
        if samples.len() != self.window.len() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(samples).zip(&self.window) {
            slot.re = sample * w;
            slot.im = 0.0;
        }
        self.fft.process(&mut self.scratch);

        let bin_hz = self.sample_rate as f64 / self.window.len() as f64;
        for (i, slot) in self.spectrum.iter_mut().enumerate() {
            let bin = self.scratch[i];
            let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
            *slot = (i as f64 * bin_hz, 10.0 * (power as f64).log10());
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

/// Render the spectrum chart.
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_freq = spectrum.last().map(|(f, _)| *f).unwrap_or(1.0).max(1.0);
    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_freq])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-100.0, 10.0])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
