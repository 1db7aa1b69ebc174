//! Tile finalization: chaining, encoding, serialization and compression

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::chain::{chain_segments, unchained_paths};
use crate::encoder::{encode_markers, encode_paths};
use crate::error::TileError;
use crate::tile::{Tile, build_tile, compress};
use crate::types::OutputStyle;

use super::TileCanvas;

/// Counts describing one finalized tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TileSummary {
    pub segments: usize,
    pub markers: usize,
    /// Paths fed to the line feature (equals `segments` without chaining)
    pub paths: usize,
    pub line_words: usize,
    pub polygon_words: usize,
    /// Serialized tile size before compression
    pub raw_bytes: usize,
    pub compressed_bytes: usize,
}

/// A compressed tile and its summary
#[derive(Debug, Clone)]
pub struct EncodedTile {
    pub bytes: Vec<u8>,
    pub summary: TileSummary,
}

impl<C> TileCanvas<C> {
    /// Build the two-layer tile without serializing it
    pub fn encode(self) -> (Tile, TileSummary) {
        let extent = self.config.grid_size;
        let chain = self.config.chain_segments;
        let (segments, markers) = self.accumulator.into_parts();

        let segment_count = segments.len();
        let paths = if chain {
            chain_segments(segments)
        } else {
            unchained_paths(&segments)
        };

        let line_geometry = encode_paths(&paths);
        let polygon_geometry = encode_markers(&markers);

        let summary = TileSummary {
            segments: segment_count,
            markers: markers.len(),
            paths: paths.len(),
            line_words: line_geometry.len(),
            polygon_words: polygon_geometry.len(),
            ..Default::default()
        };

        debug!(
            "encode: {} segments -> {} paths ({} words), {} markers ({} words)",
            summary.segments,
            summary.paths,
            summary.line_words,
            summary.markers,
            summary.polygon_words
        );

        (build_tile(line_geometry, polygon_geometry, extent), summary)
    }

    /// Encode, serialize and compress the tile
    pub fn render(self) -> Result<EncodedTile, TileError> {
        let level = self.config.compression_level;
        let (tile, mut summary) = self.encode();

        let raw = tile.to_bytes();
        let bytes = compress(&raw, level)?;

        summary.raw_bytes = raw.len();
        summary.compressed_bytes = bytes.len();

        Ok(EncodedTile { bytes, summary })
    }

    /// Finalize the tile and write the compressed bytes to `writer`
    ///
    /// Consumes the context; a tile is emitted exactly once. Only the
    /// compressed stream is written, with no length prefix. The output style
    /// is accepted for host compatibility and does not affect the encoding.
    pub fn out<W: Write>(
        self,
        _style: &OutputStyle,
        writer: &mut W,
    ) -> Result<TileSummary, TileError> {
        let EncodedTile { bytes, summary } = self.render()?;

        writer.write_all(&bytes)?;
        writer.flush()?;

        info!(
            "Wrote tile: {} segments, {} paths, {} markers, {} -> {} bytes",
            summary.segments,
            summary.paths,
            summary.markers,
            summary.raw_bytes,
            summary.compressed_bytes
        );

        Ok(summary)
    }
}
