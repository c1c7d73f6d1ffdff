use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers. Per-item failures during a bulk scan are
/// recovered locally (the item is skipped) and never reach this type.
#[derive(Error, Debug)]
pub enum WorkshopError {
    /// Path does not exist
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    /// Discovery exhausted the well-known locations and the fallback resolver
    #[error("could not locate the Wallpaper Engine workshop content directory")]
    WorkshopUnresolved,

    /// File extension outside the image allow-list
    #[error("unsupported image type: {0:?}")]
    UnsupportedImage(PathBuf),

    /// Extractor ran but exited non-zero; carries its combined output
    #[error("extraction failed: {output}")]
    ExtractionFailed { output: String },

    /// Extractor process could not be launched at all
    #[error("failed to launch extractor {binary}: {source}")]
    ExtractorLaunch {
        binary: PathBuf,
        source: std::io::Error,
    },

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
