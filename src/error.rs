//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoder and encoder errors, and provides semantic variants
//! for argument validation and batch failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("JPEG encode error: {0}")]
    Encode(#[from] jpeg_encoder::EncodingError),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("A {cols}x{rows} RGB buffer needs {bytes} bytes, over the {limit}-byte limit")]
    BufferTooLarge {
        cols: u32,
        rows: u32,
        bytes: u64,
        limit: u64,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("JPEG quality must be between 0 and 100, got: {quality}")]
    QualityOutOfRange { quality: u8 },

    #[error("An archived file already exists at {}", path.display())]
    ArchiveCollision { path: PathBuf },

    #[error("Missing capability: {capability}. {hint}")]
    MissingCapability { capability: String, hint: String },
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
