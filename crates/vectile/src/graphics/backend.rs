//! Host-facing drawing interface

use std::io::Write;

use crate::clip::Clipper;
use crate::error::TileError;
use crate::types::{LineStyle, OutputStyle, PointStyle};

use super::{TileCanvas, TileSummary};

/// Drawing callbacks a host renders a tile through
///
/// The host decides what to draw and calls these in order: any number of
/// `draw_*` calls, then a single `out`, which consumes the backend.
pub trait GraphicsBackend {
    /// Draw a line segment in viewport units; returns true if it was kept
    fn draw_clip(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, style: &LineStyle) -> bool;

    /// Mark a single point
    fn draw_pixel(&mut self, x: f64, y: f64, style: &PointStyle);

    /// Mark a point with a brush of the given size
    fn draw_brush(&mut self, x: f64, y: f64, brush: f64, style: &PointStyle);

    /// Finish the tile and write it out
    fn out<W: Write>(self, style: &OutputStyle, writer: &mut W) -> Result<TileSummary, TileError>
    where
        Self: Sized;
}

impl<C: Clipper> GraphicsBackend for TileCanvas<C> {
    fn draw_clip(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, style: &LineStyle) -> bool {
        TileCanvas::draw_clip(self, x0, y0, x1, y1, style)
    }

    fn draw_pixel(&mut self, x: f64, y: f64, style: &PointStyle) {
        TileCanvas::draw_pixel(self, x, y, style)
    }

    fn draw_brush(&mut self, x: f64, y: f64, brush: f64, style: &PointStyle) {
        TileCanvas::draw_brush(self, x, y, brush, style)
    }

    fn out<W: Write>(self, style: &OutputStyle, writer: &mut W) -> Result<TileSummary, TileError> {
        TileCanvas::out(self, style, writer)
    }
}
