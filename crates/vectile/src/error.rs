//! Error types for tile encoding.

use thiserror::Error;
use vectile_config::ConfigError;

/// Errors surfaced by the render context and the tile pipeline.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("Compression failed: {0}")]
    Compression(#[from] flate2::CompressError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode tile: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Malformed geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// Errors produced while decoding a geometry command stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Unknown command word {word:#x} at index {index}")]
    UnknownCommand { word: u32, index: usize },

    #[error("Truncated run at index {index}: expected {expected} parameters, {available} available")]
    Truncated {
        index: usize,
        expected: usize,
        available: usize,
    },
}
