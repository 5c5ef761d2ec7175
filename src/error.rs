//! Error types for atlas generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using AtlasError.
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Main error type for atlas generation.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Failed to decode or encode an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize layout data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required source texture is not on disk.
    #[error("source texture not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// A tile or source image has a zero dimension.
    #[error("Invalid tile: {0}")]
    InvalidTile(String),

    /// A tile would be pasted outside the canvas.
    #[error("Tile out of bounds: {0}")]
    TileOutOfBounds(String),

    /// Two placements write to the same pixels.
    #[error("Layout overlap: {0}")]
    LayoutOverlap(String),

    /// Failed to encode the atlas.
    #[error("Encode error: {0}")]
    Encode(String),
}
