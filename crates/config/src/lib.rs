//! Shared configuration for vectile
//!
//! This crate provides the single source of truth for the tile grid size,
//! the segment chaining switch, buffer sizing, and compression settings used
//! by the encoder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tile grid size (extent). Coordinates live in `0..grid_size`.
pub const DEFAULT_GRID_SIZE: u32 = 4096;

/// Smallest grid that can hold a diamond marker (markers are clamped to `1..=grid-2`)
pub const MIN_GRID_SIZE: u32 = 4;

/// Initial capacity of the segment and marker buffers
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// zlib default compression level
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Highest zlib compression level
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid size {grid_size} is out of range (minimum {min})")]
    InvalidGridSize { grid_size: u32, min: u32 },
    #[error("Initial buffer capacity must be non-zero")]
    ZeroCapacity,
    #[error("Invalid compression level: {0}")]
    InvalidCompressionLevel(u32),
}

/// Encoder configuration
///
/// Missing fields fall back to their defaults when deserializing, so a host
/// can supply a partial document such as `{"chain_segments": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Grid size (GRID_MAX) and layer extent
    pub grid_size: u32,
    /// Merge end-to-start connected segments into longer paths
    pub chain_segments: bool,
    /// Initial capacity of the geometry buffers
    pub initial_capacity: usize,
    /// zlib compression level
    pub compression_level: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            chain_segments: false,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl EncoderConfig {
    /// Create a config for the given grid size, other settings default
    pub fn with_grid_size(grid_size: u32) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    /// Enable or disable segment chaining
    pub fn chained(mut self, enabled: bool) -> Self {
        self.chain_segments = enabled;
        self
    }

    /// Check that every field is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE || self.grid_size > i32::MAX as u32 {
            return Err(ConfigError::InvalidGridSize {
                grid_size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(ConfigError::InvalidCompressionLevel(self.compression_level));
        }
        Ok(())
    }
}
