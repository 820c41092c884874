mod display_state;
mod hit_areas;
mod theme;
mod ui_state;

pub use display_state::DisplayState;
pub use hit_areas::HitAreas;
pub use theme::*;
pub use ui_state::UiState;

use crate::{DurationStyle, get_readable_duration, player::PlaybackState};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    QUIT,
}

/// Elapsed and total time of the current song as `m:ss`.
///
/// Both read `0:00` when nothing is selected.
pub fn time_labels(playback: &PlaybackState) -> (String, String) {
    match &playback.current_song {
        Some(song) => {
            let total = song.get_duration().as_secs_f64();
            (format_time(playback.progress * total), format_time(total))
        }
        None => (format_time(0.0), format_time(0.0)),
    }
}

pub fn format_time(secs: f64) -> String {
    let duration = Duration::try_from_secs_f64(secs).unwrap_or_default();
    get_readable_duration(duration, DurationStyle::Compact)
}

/// Gauges panic outside [0, 1]
pub fn gauge_ratio(value: f64) -> f64 {
    match value.is_finite() {
        true => value.clamp(0.0, 1.0),
        false => 0.0,
    }
}
