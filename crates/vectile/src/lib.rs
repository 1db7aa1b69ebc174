//! vectile - vector tile encoding for clipped line and point geometry
//!
//! This crate turns line segments and point markers, mapped into a fixed
//! integer grid, into a compressed vector tile:
//! - [`clip`] - Clipper capability and viewport-to-grid mapping
//! - [`accumulator`] - Append-only segment and marker buffers
//! - [`chain`] - Merging of end-to-start connected segments into paths
//! - [`encoder`] - Run-length/zigzag-delta command stream encoding
//! - [`tile`] - Wire schema, serialization and zlib compression
//! - [`graphics`] - The render context a host drives (init, draw, out)

pub mod accumulator;
pub mod chain;
pub mod clip;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod graphics;
pub mod tile;
pub mod types;

pub use accumulator::*;
pub use chain::*;
pub use clip::*;
pub use constants::*;
pub use encoder::*;
pub use error::*;
pub use graphics::*;
pub use tile::*;
pub use types::*;

pub use vectile_config::{ConfigError, EncoderConfig};
