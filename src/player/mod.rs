mod backend_rodio;
mod controller;
mod engine;
#[cfg(feature = "media-controls")]
mod media_controls;
mod now_playing;
mod state;

pub use backend_rodio::RodioEngine;
pub use controller::PlaybackController;
pub use engine::{AudioEngine, EngineInstance, LoadOptions};
#[cfg(feature = "media-controls")]
pub use media_controls::MediaControlsNowPlaying;
pub use now_playing::{LogNowPlaying, NowPlaying, NowPlayingMetadata, NowPlayingStatus};
pub use state::{InstanceState, PlaybackState};

use std::time::Duration;

/// Period of the progress poll while an instance is playing
pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Identifies one engine instance for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Play,
    Pause,
    Stop,
    End,
    LoadError(String),
}

/// A lifecycle notification, tagged with the instance that emitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEvent {
    pub instance: InstanceId,
    pub kind: Lifecycle,
}

impl EngineEvent {
    pub fn new(instance: InstanceId, kind: Lifecycle) -> Self {
        EngineEvent { instance, kind }
    }
}

/// External transport requests, e.g. media keys or a lock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    Play,
    Pause,
    Next,
    Previous,
}
