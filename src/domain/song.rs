use crate::{DurationStyle, get_readable_duration};
use std::{path::PathBuf, time::Duration};

/// A catalog entry. Defined once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) cover: String,
    pub(crate) media: PathBuf,
    pub(crate) duration: Duration,
}

impl Song {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        cover: impl Into<String>,
        media: impl Into<PathBuf>,
        duration: Duration,
    ) -> Self {
        Song {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            cover: cover.into(),
            media: media.into(),
            duration,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_artist(&self) -> &str {
        &self.artist
    }

    pub fn get_cover(&self) -> &str {
        &self.cover
    }

    pub fn get_media(&self) -> &PathBuf {
        &self.media
    }

    /// Nominal duration as declared by the catalog
    pub fn get_duration(&self) -> Duration {
        self.duration
    }

    pub fn get_duration_str(&self) -> String {
        get_readable_duration(self.duration, DurationStyle::Compact)
    }
}
