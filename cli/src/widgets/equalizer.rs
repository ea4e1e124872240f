use std::time::Duration;

use player::VisualStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::presentation::{equalizer_bar, ACCENT, BAR_MAX_HEIGHT, EQUALIZER_BARS};

const LEVELS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];
const BAR_WIDTH: u16 = 2;
const BAR_GAP: u16 = 1;

/// Five vertical bars whose heights follow the visual status
pub struct Equalizer {
    status: VisualStatus,
    since: Duration,
}

impl Equalizer {
    pub fn new(status: VisualStatus, since: Duration) -> Self {
        Self { status, since }
    }

    /// Number of eighth-cells filled for a bar in an area `rows` tall
    fn filled_eighths(height: f32, rows: u16) -> u16 {
        let total = f32::from(rows) * 8.0;
        ((height / BAR_MAX_HEIGHT) * total).round().clamp(0.0, total) as u16
    }
}

impl Widget for Equalizer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for index in 0..EQUALIZER_BARS {
            let x = area.x + index as u16 * (BAR_WIDTH + BAR_GAP);
            if x + BAR_WIDTH > area.right() {
                break;
            }

            let bar = equalizer_bar(self.status, index, self.since);
            let mut style = Style::new().fg(ACCENT);
            if bar.opacity < 1.0 {
                style = style.add_modifier(Modifier::DIM);
            }

            let filled = Self::filled_eighths(bar.height, area.height);
            for row in 0..area.height {
                let level = filled.saturating_sub(row * 8).min(8) as usize;
                let y = area.bottom() - 1 - row;
                let symbol = LEVELS[level].repeat(BAR_WIDTH as usize);
                buf.set_string(x, y, symbol, style);
            }
        }
    }
}
