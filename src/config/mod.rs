use crate::{catalog::CATALOG_FILENAME, expand_tilde};
use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "serenata";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_VOLUME: f32 = 0.7;
const DEFAULT_STEP: f64 = 0.05;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Initial volume in [0, 1]
    pub volume: f32,
    /// Decode from a buffered reader instead of loading whole files
    pub streaming: bool,
    /// Album name published to the platform's now-playing surface
    pub album: String,
    pub catalog: Option<PathBuf>,
    pub seek_step: f64,
    pub volume_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            volume: DEFAULT_VOLUME,
            streaming: true,
            album: String::from("Serenata"),
            catalog: None,
            seek_step: DEFAULT_STEP,
            volume_step: DEFAULT_STEP as f32,
        }
    }
}

impl Settings {
    /// Load `config.toml` from the user config dir. A missing file yields
    /// the defaults.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILENAME);
        Self::load_from_file(path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Settings::default());
        }

        let file_str = std::fs::read_to_string(path)?;
        let settings = toml::from_str::<Settings>(&file_str)?;

        Ok(settings.sanitized())
    }

    pub fn catalog_path(&self) -> Result<PathBuf> {
        match &self.catalog {
            Some(p) => expand_tilde(p),
            None => Ok(config_dir()?.join(CATALOG_FILENAME)),
        }
    }

    // A hand-edited config is the one input the UI does not constrain
    fn sanitized(mut self) -> Self {
        self.volume = unit_f32(self.volume, DEFAULT_VOLUME);
        self.seek_step = unit_f64(self.seek_step, DEFAULT_STEP);
        self.volume_step = unit_f32(self.volume_step, DEFAULT_STEP as f32);
        self
    }
}

// NaN survives `clamp`
fn unit_f64(value: f64, default: f64) -> f64 {
    match value.is_finite() {
        true => value.clamp(0.0, 1.0),
        false => default,
    }
}

fn unit_f32(value: f32, default: f32) -> f32 {
    unit_f64(value as f64, default as f64) as f32
}

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or_else(|| anyhow!("Could not determine config directory!"))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or_else(|| anyhow!("Could not determine data directory!"))
}
