//! Error types for image loading and saving

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageError>;

/// Failure while reading or writing an image
///
/// Drawing never fails; only codecs and file access report errors
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("truncated data: expected {expected} bytes, found {found}")]
    TruncatedData { expected: usize, found: usize },

    #[error("decode failed: {0}")]
    DecodeFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for ImageError {
    fn from(e: image::ImageError) -> Self {
        ImageError::DecodeFailure(e.to_string())
    }
}
