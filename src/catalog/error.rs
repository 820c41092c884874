use thiserror::Error;

/// Reasons a catalog is rejected at load time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Song #{0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate song id: {0}")]
    DuplicateId(String),

    #[error("Song \"{0}\" has no media file")]
    MissingMedia(String),
}
