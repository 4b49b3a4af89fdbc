use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("Failed to decode image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("WebP encoding failed for {path:?}: {reason}")]
    Codec { path: PathBuf, reason: String },

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(i32),

    #[error("Output file already exists: {0:?} (use --on-existing overwrite or rename)")]
    OutputExists(PathBuf),

    #[error("Walkdir error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ConvertError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
