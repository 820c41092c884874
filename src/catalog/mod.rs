mod catalog_import;
mod error;

pub use error::CatalogError;

use crate::{DurationStyle, domain::Song, get_readable_duration};
use anyhow::Result;
use catalog_import::{CatalogImport, SongImport};
use lofty::file::AudioFile;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

pub const CATALOG_FILENAME: &str = "catalog.toml";

/// Direction of travel through the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
}

/// The fixed, ordered list of playable songs.
///
/// Order is declaration order and never changes at runtime. Ids are
/// guaranteed unique, so a song can always be located by id.
#[derive(Debug, Default)]
pub struct Catalog {
    songs: Vec<Arc<Song>>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(songs.len());

        for (idx, song) in songs.iter().enumerate() {
            if song.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(idx));
            }
            if song.media.as_os_str().is_empty() {
                return Err(CatalogError::MissingMedia(song.id.clone()));
            }
            if !seen.insert(song.id.as_str()) {
                return Err(CatalogError::DuplicateId(song.id.clone()));
            }
        }

        Ok(Catalog {
            songs: songs.into_iter().map(Arc::new).collect(),
        })
    }

    /// Read a catalog from `path`, or fall back to the built-in list when
    /// no such file exists.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(path = %path.display(), "No catalog file found, using built-in catalog");
            let base = path.parent().unwrap_or(Path::new("."));
            return Ok(Self::builtin(base));
        }

        let file_str = std::fs::read_to_string(path)?;
        let base = path.parent().unwrap_or(Path::new("."));
        let catalog = Self::from_toml_str(&file_str, base)?;

        tracing::info!(
            path = %path.display(),
            songs = catalog.len(),
            runtime = %get_readable_duration(catalog.total_duration(), DurationStyle::Clean),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Relative media and cover paths are resolved against `base`.
    pub fn from_toml_str(s: &str, base: &Path) -> Result<Self> {
        let import = toml::from_str::<CatalogImport>(s)?;
        let songs = import
            .songs
            .into_iter()
            .map(|raw| build_song(raw, base))
            .collect();

        Ok(Self::new(songs)?)
    }

    pub fn builtin(base: &Path) -> Self {
        let songs = vec![
            Song::new(
                "1",
                "Kanmoodi",
                "Artist Name",
                resolve(base, "songs/covers/kanmoodi-cover.jpeg"),
                base.join("songs/Kanmoodi.mp3"),
                Duration::from_secs(180),
            ),
            Song::new(
                "2",
                "Marco-Blood",
                "Artist Two",
                resolve(base, "songs/covers/Blood.jpeg"),
                base.join("songs/Blood.mp3"),
                Duration::from_secs(210),
            ),
            Song::new(
                "3",
                "Kochadaiyaan",
                "Artist Name",
                resolve(base, "songs/covers/kochadaiyan.jpeg"),
                base.join("songs/Maattram-Ondrudhaan-Maaraadhadhu.mp3"),
                Duration::from_secs(180),
            ),
        ];

        Catalog {
            songs: songs.into_iter().map(Arc::new).collect(),
        }
    }
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn first(&self) -> Option<&Arc<Song>> {
        self.songs.first()
    }

    pub fn get(&self, idx: usize) -> Option<&Arc<Song>> {
        self.songs.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Song>> {
        self.songs.iter()
    }

    /// Sum of the nominal durations
    pub fn total_duration(&self) -> Duration {
        self.songs.iter().map(|s| s.get_duration()).sum()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    /// The song one step away from `id`, wrapping around both ends.
    ///
    /// Unknown ids resolve to the first entry.
    pub fn neighbor(&self, id: &str, step: Step) -> Option<&Arc<Song>> {
        let len = self.songs.len();
        if len == 0 {
            return None;
        }

        let idx = match (self.position(id), step) {
            (None, _) => 0,
            (Some(i), Step::Forward) => (i + 1) % len,
            (Some(i), Step::Back) => (i + len - 1) % len,
        };

        self.songs.get(idx)
    }
}

fn build_song(raw: SongImport, base: &Path) -> Song {
    let media = match raw.file.is_absolute() {
        true => raw.file,
        false => base.join(raw.file),
    };

    let duration = match raw.duration {
        Some(secs) => Duration::from_secs(secs),
        None => probe_duration(&media),
    };

    Song {
        id: raw.id,
        title: raw.title,
        artist: raw.artist,
        cover: match raw.cover.is_empty() {
            true => raw.cover,
            false => resolve(base, &raw.cover),
        },
        media,
        duration,
    }
}

fn probe_duration(media: &Path) -> Duration {
    match lofty::read_from_path(media) {
        Ok(tagged) => tagged.properties().duration(),
        Err(e) => {
            tracing::warn!(media = %media.display(), error = %e, "Could not probe duration");
            Duration::ZERO
        }
    }
}

// Covers may be URLs, which are left alone
fn resolve(base: &Path, cover: &str) -> String {
    if cover.contains("://") {
        return cover.to_string();
    }

    let path = PathBuf::from(cover);
    match path.is_absolute() {
        true => cover.to_string(),
        false => base.join(path).to_string_lossy().into_owned(),
    }
}
