use std::time::Duration;

use player::VisualStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::presentation::{artwork_rotation, artwork_scale, ACCENT};

const DISC_PHASES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Album art stand-in: a disc that spins while playing and shrinks when idle
pub struct Artwork {
    status: VisualStatus,
    since: Duration,
}

impl Artwork {
    pub fn new(status: VisualStatus, since: Duration) -> Self {
        Self { status, since }
    }

    fn disc_phase(rotation: f32) -> &'static str {
        let quarter = (rotation / 90.0) as usize % DISC_PHASES.len();
        DISC_PHASES[quarter]
    }
}

impl Widget for Artwork {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scale = artwork_scale(self.status);
        let inset = ((1.0 - scale) * 20.0).round() as u16;
        let area = area.inner(Margin::new(inset, inset / 2));

        let disc = Self::disc_phase(artwork_rotation(self.status, self.since));
        let text = Text::from(vec![
            Line::from(""),
            Line::from(disc).fg(ACCENT),
            Line::from("♫"),
        ]);

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(ACCENT)),
            )
            .render(area, buf);
    }
}
