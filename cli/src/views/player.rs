use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use player::{
    MediaIntent, MediaStore, PlaybackView, SimulatedMediaStore, TrackInfo, TransitionController,
    VisualStatus,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::presentation::{container_style, play_button};
use crate::widgets::{
    artwork::Artwork,
    equalizer::Equalizer,
    timeline::{Scrubber, VolumeControl},
    transport::TransportBar,
    util::centered_rect,
};

use super::View;

const CARD_WIDTH: u16 = 62;
const CARD_HEIGHT: u16 = 18;
const SEEK_STEP: Duration = Duration::from_secs(5);
const VOLUME_STEP: f32 = 0.05;

/// The player card. Play/pause goes through the transition controller;
/// seek, volume and mute go straight to the store.
pub struct PlayerView {
    store: Arc<SimulatedMediaStore>,
    controller: Arc<TransitionController>,
    track: TrackInfo,
    status: VisualStatus,
    status_since: Instant,
}

impl PlayerView {
    pub fn new(
        store: Arc<SimulatedMediaStore>,
        controller: Arc<TransitionController>,
        track: TrackInfo,
    ) -> Self {
        let status = controller.visual_status();
        Self {
            store,
            controller,
            track,
            status,
            status_since: Instant::now(),
        }
    }

    /// Re-binds to the latest view and restarts animation clocks when the
    /// visual status changes
    fn bind(&mut self) -> (PlaybackView, Duration) {
        let view = self.controller.view();
        if view.visual_status != self.status {
            log::debug!("Visual status {} -> {}", self.status, view.visual_status);
            self.status = view.visual_status;
            self.status_since = Instant::now();
        }
        (view, self.status_since.elapsed())
    }

    /// The play button is disabled while loading, whether the delay window
    /// is open or the store itself is still loading
    fn press_play(&self) {
        if play_button(&self.controller.view()).disabled {
            log::debug!("Play button pressed while disabled");
            return;
        }
        self.controller.request_toggle();
    }

    fn seek_by(&self, forward: bool) {
        let state = self.store.state();
        let target = if forward {
            state.current_time.saturating_add(SEEK_STEP)
        } else {
            state.current_time.saturating_sub(SEEK_STEP)
        };
        self.store.dispatch(MediaIntent::SeekRequest(target));
    }

    fn change_volume(&self, delta: f32) {
        let volume = (self.store.state().volume + delta).clamp(0.0, 1.0);
        match MediaIntent::volume(volume) {
            Ok(intent) => self.store.dispatch(intent),
            Err(e) => log::warn!("Volume change rejected: {}", e),
        }
    }

    fn toggle_mute(&self) {
        let intent = if self.store.state().muted {
            MediaIntent::UnmuteRequest
        } else {
            MediaIntent::MuteRequest
        };
        self.store.dispatch(intent);
    }
}

impl View for PlayerView {
    fn render(&mut self, frame: &mut Frame) {
        let (view, since) = self.bind();
        let media = self.store.state();
        let container = container_style(view.visual_status);

        let mut card_style = Style::new().bg(container.background);
        if container.opacity < 1.0 {
            card_style = card_style.add_modifier(Modifier::DIM);
        }
        let border_style = match container.glow {
            Some(glow) => Style::new().fg(glow),
            None => Style::new().dark_gray(),
        };

        let card = centered_rect(frame.area(), CARD_WIDTH, CARD_HEIGHT);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(card_style);
        let inner = block.inner(card).inner(Margin::new(1, 0));
        frame.render_widget(block, card);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // artwork, title, equalizer
                Constraint::Length(1),
                Constraint::Length(2), // scrubber and times
                Constraint::Length(1),
                Constraint::Length(1), // transport
                Constraint::Length(1),
                Constraint::Length(1), // volume
                Constraint::Min(0),
                Constraint::Length(1), // key help
            ])
            .split(inner);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Length(2), Constraint::Min(0)])
            .split(rows[0]);
        frame.render_widget(Artwork::new(view.visual_status, since), header[0]);

        let details = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(header[2]);
        frame.render_widget(Line::from(self.track.title.as_str()).bold(), details[0]);
        frame.render_widget(Line::from(self.track.artist.as_str()).dim(), details[1]);
        frame.render_widget(Equalizer::new(view.visual_status, since), details[3]);

        frame.render_widget(Scrubber::new(&media), rows[2]);
        frame.render_widget(TransportBar::new(view), rows[4]);
        frame.render_widget(VolumeControl::new(&media), rows[6]);
        frame.render_widget(
            Paragraph::new("space play/pause · ←/→ seek · ↑/↓ volume · m mute · q quit")
                .dark_gray()
                .alignment(Alignment::Center),
            rows[8],
        );
    }

    fn handle_input(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.press_play(),
            KeyCode::Left => self.seek_by(false),
            KeyCode::Right => self.seek_by(true),
            KeyCode::Up => self.change_volume(VOLUME_STEP),
            KeyCode::Down => self.change_volume(-VOLUME_STEP),
            KeyCode::Char('m') => self.toggle_mute(),
            _ => {}
        }
    }
}
