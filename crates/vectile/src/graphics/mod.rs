//! Render context for one tile
//!
//! This module connects the pieces a host drives through a render pass:
//! - Clipping and grid mapping of drawn segments and points
//! - Accumulation of segments and markers
//! - Finalization: optional chaining, command encoding, tile serialization
//!   and compression
//!
//! The context is created once per tile, mutated by drawing calls, and
//! consumed by [`TileCanvas::out`]. There is no reset path.

mod backend;
mod draw;
mod output;

pub use backend::GraphicsBackend;
pub use output::{EncodedTile, TileSummary};

use tracing::debug;
use vectile_config::EncoderConfig;

use crate::accumulator::Accumulator;
use crate::clip::{Clipper, GridMapper, RectClipper};
use crate::error::TileError;

/// Render context that accumulates geometry for a single vector tile
pub struct TileCanvas<C = RectClipper> {
    /// Viewport width in host units
    width: u32,
    /// Viewport height in host units
    height: u32,
    pub(crate) config: EncoderConfig,
    pub(crate) mapper: GridMapper,
    pub(crate) clipper: C,
    pub(crate) accumulator: Accumulator,
}

impl TileCanvas<RectClipper> {
    /// Create a context for a `width x height` viewport with default settings
    pub fn new(width: u32, height: u32) -> Result<Self, TileError> {
        Self::with_config(width, height, EncoderConfig::default())
    }

    /// Create a context with the given configuration and the built-in clipper
    pub fn with_config(width: u32, height: u32, config: EncoderConfig) -> Result<Self, TileError> {
        Self::with_clipper(width, height, config, RectClipper)
    }
}

impl<C: Clipper> TileCanvas<C> {
    /// Create a context that clips segments with `clipper`
    pub fn with_clipper(
        width: u32,
        height: u32,
        config: EncoderConfig,
        clipper: C,
    ) -> Result<Self, TileError> {
        config.validate()?;
        if width == 0 || height == 0 {
            return Err(TileError::InvalidViewport { width, height });
        }

        debug!(
            "TileCanvas: {}x{} viewport -> grid {}, chaining {}",
            width, height, config.grid_size, config.chain_segments
        );

        Ok(Self {
            width,
            height,
            mapper: GridMapper::new(width, height, config.grid_size),
            accumulator: Accumulator::with_capacity(config.initial_capacity),
            config,
            clipper,
        })
    }
}

impl<C> TileCanvas<C> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Geometry accumulated so far
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}
