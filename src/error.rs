use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("Failed to walk directory tree: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("Failed to decode {path:?} as JPEG: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Content of {path:?} looks like {detected}, not image/jpeg")]
    ContentMismatch { path: PathBuf, detected: &'static str },
}

impl CompressionError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CompressionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Only a content mismatch lets the batch carry on; everything else aborts it.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CompressionError::ContentMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
