//! Geometry accumulation for a single render pass
//!
//! Segments and markers are appended while the host draws and consumed once
//! when the tile is encoded.

mod buffer;

pub use buffer::GeometryBuffer;

use crate::types::{Marker, Segment};

/// Segment and marker buffers for one tile
#[derive(Debug, Clone)]
pub struct Accumulator {
    segments: GeometryBuffer<Segment>,
    markers: GeometryBuffer<Marker>,
}

impl Accumulator {
    /// Create an accumulator whose buffers start at `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: GeometryBuffer::with_capacity(capacity),
            markers: GeometryBuffer::with_capacity(capacity),
        }
    }

    /// Store an accepted segment
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Store a marker
    pub fn push_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Consume the accumulator, returning segments and markers in insertion order
    pub fn into_parts(self) -> (Vec<Segment>, Vec<Marker>) {
        (self.segments.into_vec(), self.markers.into_vec())
    }
}
