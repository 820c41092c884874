use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize)]
pub struct CatalogImport {
    #[serde(default)]
    pub songs: Vec<SongImport>,
}

#[derive(Deserialize)]
pub struct SongImport {
    pub id: String,
    pub title: String,

    #[serde(default = "unknown_artist")]
    pub artist: String,

    #[serde(default)]
    pub cover: String,

    #[serde(alias = "media")]
    pub file: PathBuf,

    /// Seconds. Probed from the file when absent
    pub duration: Option<u64>,
}

fn unknown_artist() -> String {
    String::from("Unknown Artist")
}
