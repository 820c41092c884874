use crate::domain::Song;
use std::sync::Arc;

/// Shared playback state. Only the controller writes to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_song: Option<Arc<Song>>,
    pub is_playing: bool,
    /// Position within the current song, in [0, 1]
    pub progress: f64,
    pub volume: f32,
}

impl PlaybackState {
    pub fn new(volume: f32) -> Self {
        PlaybackState {
            current_song: None,
            is_playing: false,
            progress: 0.0,
            volume,
        }
    }

    pub fn is_current(&self, song: &Song) -> bool {
        self.current_song
            .as_ref()
            .is_some_and(|s| s.get_id() == song.get_id())
    }
}

/// Lifecycle of the live engine instance.
///
/// `Loading` covers the gap between commanding playback and the engine
/// confirming it. `Stopped` and `Ended` are terminal. An instance released
/// by the controller passes through `Stopped` just before it is dropped, so
/// only an engine-initiated stop leaves it observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    Idle,
    Loading,
    Playing,
    Paused,
    Stopped,
    Ended,
}
