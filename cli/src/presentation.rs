use std::f32::consts::PI;
use std::time::Duration;

use player::{PlaybackView, VisualStatus};
use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x8B, 0x5C, 0xF6);
pub const BUTTON: Color = Color::Rgb(0x7C, 0x3A, 0xED);
pub const BUTTON_DISABLED: Color = Color::Rgb(0x6B, 0x72, 0x80);
pub const SURFACE_ACTIVE: Color = Color::Rgb(0x1A, 0x1A, 0x1A);
pub const SURFACE_IDLE: Color = Color::Rgb(0x0F, 0x0F, 0x0F);

pub const EQUALIZER_BARS: usize = 5;
pub const BAR_MIN_HEIGHT: f32 = 6.0;
pub const BAR_MAX_HEIGHT: f32 = 20.0;
const BAR_LOADING_HEIGHT: f32 = 10.0;
const BAR_CYCLE_SECS: f32 = 0.5;
const BAR_STAGGER_SECS: f32 = 0.1;

const ROTATION_PERIOD_SECS: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerStyle {
    pub background: Color,
    pub glow: Option<Color>,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub height: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayButton {
    pub icon: ButtonIcon,
    pub disabled: bool,
}

pub fn container_style(status: VisualStatus) -> ContainerStyle {
    match status {
        VisualStatus::Playing => ContainerStyle {
            background: SURFACE_ACTIVE,
            glow: Some(ACCENT),
            opacity: 1.0,
        },
        VisualStatus::Paused => ContainerStyle {
            background: SURFACE_IDLE,
            glow: None,
            opacity: 1.0,
        },
        VisualStatus::Loading => ContainerStyle {
            background: SURFACE_IDLE,
            glow: None,
            opacity: 0.6,
        },
    }
}

pub fn artwork_scale(status: VisualStatus) -> f32 {
    match status {
        VisualStatus::Playing => 1.0,
        VisualStatus::Paused => 0.95,
        VisualStatus::Loading => 0.9,
    }
}

/// Artwork spin in degrees. `since` is the time spent in the current status;
/// anything but Playing snaps back to zero.
pub fn artwork_rotation(status: VisualStatus, since: Duration) -> f32 {
    match status {
        VisualStatus::Playing => {
            (since.as_secs_f32() / ROTATION_PERIOD_SECS * 360.0) % 360.0
        }
        _ => 0.0,
    }
}

/// Height of equalizer bar `index`. While playing each bar pulses
/// 6 -> 20 -> 6 every half second, staggered by 0.1s per bar.
pub fn equalizer_bar(status: VisualStatus, index: usize, since: Duration) -> BarStyle {
    match status {
        VisualStatus::Playing => {
            let t = since.as_secs_f32() - index as f32 * BAR_STAGGER_SECS;
            if t <= 0.0 {
                return BarStyle {
                    height: BAR_MIN_HEIGHT,
                    opacity: 1.0,
                };
            }
            let phase = (t % BAR_CYCLE_SECS) / BAR_CYCLE_SECS;
            let rise = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
            BarStyle {
                height: BAR_MIN_HEIGHT + (BAR_MAX_HEIGHT - BAR_MIN_HEIGHT) * ease_in_out(rise),
                opacity: 1.0,
            }
        }
        VisualStatus::Paused => BarStyle {
            height: BAR_MIN_HEIGHT,
            opacity: 1.0,
        },
        VisualStatus::Loading => BarStyle {
            height: BAR_LOADING_HEIGHT,
            opacity: 0.5,
        },
    }
}

pub fn play_button(view: &PlaybackView) -> PlayButton {
    PlayButton {
        icon: if view.is_playing() { ButtonIcon::Pause } else { ButtonIcon::Play },
        disabled: view.loading,
    }
}

fn ease_in_out(x: f32) -> f32 {
    0.5 - 0.5 * (PI * x.clamp(0.0, 1.0)).cos()
}

pub fn format_time(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
