use super::TransportCommand;
use crossbeam_channel::Sender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlayingMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub artwork: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NowPlayingStatus {
    Playing,
    Paused,
}

impl std::fmt::Display for NowPlayingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NowPlayingStatus::Playing => write!(f, "playing"),
            NowPlayingStatus::Paused => write!(f, "paused"),
        }
    }
}

/// Best-effort bridge to the platform's "now playing" surface (lock
/// screen, media keys, desktop widgets). Failures are never fatal.
pub trait NowPlaying {
    fn set_metadata(&mut self, metadata: &NowPlayingMetadata);
    fn set_status(&mut self, status: NowPlayingStatus);
    /// Transport requests from the platform are forwarded to `commands`.
    fn register_handlers(&mut self, commands: Sender<TransportCommand>);
}

/// Used when no platform integration is available.
#[derive(Debug, Default)]
pub struct LogNowPlaying;

impl NowPlaying for LogNowPlaying {
    fn set_metadata(&mut self, metadata: &NowPlayingMetadata) {
        tracing::debug!(
            title = %metadata.title,
            artist = %metadata.artist,
            album = %metadata.album,
            "Now playing"
        );
    }

    fn set_status(&mut self, status: NowPlayingStatus) {
        tracing::trace!(%status, "Now playing status");
    }

    fn register_handlers(&mut self, _commands: Sender<TransportCommand>) {
        tracing::debug!("No platform media controls, transport handlers not registered");
    }
}
