//! Drawing callbacks for the render context

use glam::DVec2;

use crate::clip::Clipper;
use crate::types::{LineStyle, PointStyle};

use super::TileCanvas;

impl<C: Clipper> TileCanvas<C> {
    /// Clip a viewport segment and store it in grid space
    ///
    /// Returns true if a segment was stored. Segments rejected by the clipper
    /// or collapsing to a single grid point are dropped silently. The style
    /// is accepted for host compatibility and does not affect the encoding.
    pub fn draw_clip(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        _style: &LineStyle,
    ) -> bool {
        let start = DVec2::new(x0, y0);
        let end = DVec2::new(x1, y1);
        match self.mapper.map_segment(&self.clipper, start, end) {
            Some(segment) => {
                self.accumulator.push_segment(segment);
                true
            }
            None => false,
        }
    }

    /// Store a point marker
    ///
    /// The marker is always drawn as a unit diamond; brightness and hue are
    /// ignored.
    pub fn draw_pixel(&mut self, x: f64, y: f64, _style: &PointStyle) {
        let marker = self.mapper.map_marker(DVec2::new(x, y));
        self.accumulator.push_marker(marker);
    }

    /// Store a brush mark; identical to [`Self::draw_pixel`], the brush size is ignored
    pub fn draw_brush(&mut self, x: f64, y: f64, _brush: f64, style: &PointStyle) {
        self.draw_pixel(x, y, style);
    }
}
