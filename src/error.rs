// src/error.rs
//! Error types for the parts of the tool that touch the outside world.
//!
//! Drawing and random sampling never fail; only parsing user input,
//! encoding the export and writing files can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtError {
    #[error("unknown pattern type: {0:?}")]
    UnknownPattern(String),

    #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize preferences: {0}")]
    Prefs(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtError>;
