use player::PlaybackView;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::{play_button, ButtonIcon, BUTTON, BUTTON_DISABLED};

/// Shuffle, skip back, play/pause, skip forward and repeat. Only the centre
/// button does anything; the rest are decoration.
pub struct TransportBar {
    view: PlaybackView,
}

impl TransportBar {
    pub fn new(view: PlaybackView) -> Self {
        Self { view }
    }

    fn play_span(&self) -> Span<'static> {
        let button = play_button(&self.view);
        let label = match button.icon {
            ButtonIcon::Play => "  ▶  ",
            ButtonIcon::Pause => "  ⏸  ",
        };
        let background = if button.disabled { BUTTON_DISABLED } else { BUTTON };
        Span::styled(label, Style::new().bg(background).white().bold())
    }
}

impl Widget for TransportBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw("⤮").dim(),
            Span::raw("    "),
            Span::raw("⏮").dim(),
            Span::raw("    "),
            self.play_span(),
            Span::raw("    "),
            Span::raw("⏭").dim(),
            Span::raw("    "),
            Span::raw("⟲").dim(),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).render(area, buf);
    }
}
