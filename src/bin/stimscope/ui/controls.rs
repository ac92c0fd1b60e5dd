//! Status line and parameter panel widgets.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use stimgen::host::{default_params, ParamId};
use stimgen::WaveMode;

use super::state::{PanelSnapshot, EDITABLE};

/// Transport-style status bar: mode, run state, sample rate.
pub fn render_status(frame: &mut Frame, area: Rect, snap: &PanelSnapshot) {
    let run_state = if snap.paused {
        Span::styled(" PAUSED ", Style::default().fg(Color::Yellow))
    } else if snap.zap_active == Some(false) {
        Span::styled(" SWEEP DONE ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" RUNNING ", Style::default().fg(Color::Green))
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", snap.mode_label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("|"),
        run_state,
        Span::raw("|"),
        Span::styled(
            format!(" {:.0} Hz clock ", snap.sample_rate),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default().title(" stimscope ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Parameter list with the focused field highlighted.
pub fn render_params(frame: &mut Frame, area: Rect, snap: &PanelSnapshot, focus: ParamId) {
    let value_of = |id: ParamId| -> f64 {
        match id {
            ParamId::Waveform => snap.params.waveform as f64,
            ParamId::Delay => snap.params.delay,
            ParamId::Width => snap.params.width,
            ParamId::Frequency => snap.params.frequency,
            ParamId::Amplitude => snap.params.amplitude,
            ParamId::ZapEndFrequency => snap.params.zap_end_frequency,
            ParamId::ZapDuration => snap.params.zap_duration,
        }
    };

    let items: Vec<ListItem> = default_params()
        .iter()
        .filter(|info| EDITABLE.contains(&info.id))
        .map(|info| {
            let style = if info.id == focus {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{:<18} {:>8.3}", info.name, value_of(info.id)),
                style,
            )))
        })
        .collect();

    let block = Block::default().title(" Parameters ").borders(Borders::ALL);
    frame.render_widget(List::new(items).block(block), area);
}

/// Bottom help bar, including the waveform hotkeys.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let modes: Vec<String> = WaveMode::ALL
        .iter()
        .map(|m| format!("[{}] {}", m.index() + 1, m.label()))
        .collect();
    let help = format!(
        " {}  [Tab] Field  [Up/Down] Edit  [Space] Pause  [Q] Quit",
        modes.join("  ")
    );
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
