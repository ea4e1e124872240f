use player::MediaState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::Line,
    widgets::{LineGauge, Paragraph, Widget},
};

use crate::presentation::{format_time, ACCENT};

/// Scrubber with the elapsed time under its left end and the duration
/// under its right end
pub struct Scrubber<'a> {
    state: &'a MediaState,
}

impl<'a> Scrubber<'a> {
    pub fn new(state: &'a MediaState) -> Self {
        Self { state }
    }
}

impl Widget for Scrubber<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        gauge(self.state.progress()).render(rows[0], buf);

        Paragraph::new(format_time(self.state.current_time))
            .dim()
            .render(rows[1], buf);
        Paragraph::new(format_time(self.state.duration))
            .alignment(Alignment::Right)
            .dim()
            .render(rows[1], buf);
    }
}

/// Mute indicator followed by a volume range
pub struct VolumeControl<'a> {
    state: &'a MediaState,
}

impl<'a> VolumeControl<'a> {
    pub fn new(state: &'a MediaState) -> Self {
        Self { state }
    }

    fn level(&self) -> f64 {
        if self.state.muted {
            0.0
        } else {
            f64::from(self.state.volume).clamp(0.0, 1.0)
        }
    }

    fn icon(&self) -> &'static str {
        match self.level() {
            level if level == 0.0 => "🔇",
            level if level < 0.5 => "🔉",
            _ => "🔊",
        }
    }
}

impl Widget for VolumeControl<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        Line::from(self.icon()).dim().render(columns[0], buf);
        gauge(self.level()).render(columns[1], buf);
    }
}

fn gauge(ratio: f64) -> LineGauge<'static> {
    LineGauge::default()
        .filled_style(Style::new().fg(ACCENT))
        .unfilled_style(Style::new().dark_gray())
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(ratio.clamp(0.0, 1.0))
}
