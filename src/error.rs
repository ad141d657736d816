use crate::formats::EncoderFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image as {format}: {source}")]
    Encode {
        format: EncoderFormat,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl CompressionError {
    /// Decode failure, except that I/O errors raised by the reader stay I/O errors.
    pub fn decode(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => CompressionError::Io(io),
            other => CompressionError::Decode(other),
        }
    }

    /// Encode failure, except that I/O errors raised by the writer stay I/O errors.
    pub fn encode(format: EncoderFormat, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => CompressionError::Io(io),
            source => CompressionError::Encode { format, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
