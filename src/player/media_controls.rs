use super::{NowPlaying, NowPlayingMetadata, NowPlayingStatus, TransportCommand};
use crate::config::APP_NAME;
use anyhow::{Result, anyhow};
use crossbeam_channel::Sender;
use souvlaki::{MediaControlEvent, MediaControls, MediaMetadata, MediaPlayback, PlatformConfig};

/// Publishes to MPRIS, SMTC or the macOS Now Playing center via souvlaki.
pub struct MediaControlsNowPlaying {
    controls: MediaControls,
}

impl MediaControlsNowPlaying {
    pub fn new() -> Result<Self> {
        let config = PlatformConfig {
            dbus_name: APP_NAME,
            display_name: "Serenata",
            hwnd: None,
        };

        let controls = MediaControls::new(config)
            .map_err(|e| anyhow!("Could not create media controls: {e:?}"))?;

        Ok(MediaControlsNowPlaying { controls })
    }
}

impl NowPlaying for MediaControlsNowPlaying {
    fn set_metadata(&mut self, metadata: &NowPlayingMetadata) {
        let cover_url = match metadata.artwork.contains("://") {
            true => metadata.artwork.clone(),
            false => format!("file://{}", metadata.artwork),
        };

        let result = self.controls.set_metadata(MediaMetadata {
            title: Some(&metadata.title),
            artist: Some(&metadata.artist),
            album: Some(&metadata.album),
            cover_url: (!metadata.artwork.is_empty()).then_some(cover_url.as_str()),
            ..Default::default()
        });

        if let Err(e) = result {
            tracing::warn!(error = ?e, "Failed to publish media metadata");
        }
    }

    fn set_status(&mut self, status: NowPlayingStatus) {
        let playback = match status {
            NowPlayingStatus::Playing => MediaPlayback::Playing { progress: None },
            NowPlayingStatus::Paused => MediaPlayback::Paused { progress: None },
        };

        if let Err(e) = self.controls.set_playback(playback) {
            tracing::warn!(error = ?e, "Failed to publish playback status");
        }
    }

    fn register_handlers(&mut self, commands: Sender<TransportCommand>) {
        let result = self.controls.attach(move |event: MediaControlEvent| {
            let command = match event {
                MediaControlEvent::Play => TransportCommand::Play,
                MediaControlEvent::Pause => TransportCommand::Pause,
                MediaControlEvent::Next => TransportCommand::Next,
                MediaControlEvent::Previous => TransportCommand::Previous,
                _ => return,
            };
            let _ = commands.send(command);
        });

        match result {
            Ok(()) => tracing::info!("Media control handlers registered"),
            Err(e) => tracing::warn!(error = ?e, "Failed to register media control handlers"),
        }
    }
}
