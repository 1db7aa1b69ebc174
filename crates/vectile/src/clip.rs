//! Clipping and viewport-to-grid mapping
//!
//! The host draws in floating-point viewport units. Each segment is first
//! intersected with the viewport rectangle by a [`Clipper`], then scaled onto
//! the integer tile grid and clamped so rounding can never push a coordinate
//! off the grid.

use glam::{DVec2, IVec2};
use tracing::debug;

use crate::types::{Marker, Segment};

/// Axis-aligned clip rectangle in viewport units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl ClipBounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: DVec2::new(min_x, min_y),
            max: DVec2::new(max_x, max_y),
        }
    }

    /// Check whether a point lies inside the rectangle (edges included)
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Clip primitive that intersects a segment with a rectangle
///
/// Returns the clipped endpoints, or `None` if the segment misses the
/// rectangle.
pub trait Clipper {
    fn clip(&self, start: DVec2, end: DVec2, bounds: &ClipBounds) -> Option<(DVec2, DVec2)>;
}

impl<F> Clipper for F
where
    F: Fn(DVec2, DVec2, &ClipBounds) -> Option<(DVec2, DVec2)>,
{
    fn clip(&self, start: DVec2, end: DVec2, bounds: &ClipBounds) -> Option<(DVec2, DVec2)> {
        self(start, end, bounds)
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Iteration cap; each endpoint needs at most two boundary moves.
const MAX_CLIP_STEPS: usize = 8;

/// Cohen-Sutherland rectangle clipper
#[derive(Debug, Clone, Copy, Default)]
pub struct RectClipper;

fn outcode(point: DVec2, bounds: &ClipBounds) -> u8 {
    let mut code = INSIDE;
    if point.x < bounds.min.x {
        code |= LEFT;
    } else if point.x > bounds.max.x {
        code |= RIGHT;
    }
    if point.y < bounds.min.y {
        code |= BOTTOM;
    } else if point.y > bounds.max.y {
        code |= TOP;
    }
    code
}

impl Clipper for RectClipper {
    fn clip(
        &self,
        mut start: DVec2,
        mut end: DVec2,
        bounds: &ClipBounds,
    ) -> Option<(DVec2, DVec2)> {
        if !start.is_finite() || !end.is_finite() {
            return None;
        }

        let mut code_start = outcode(start, bounds);
        let mut code_end = outcode(end, bounds);

        for _ in 0..MAX_CLIP_STEPS {
            if code_start | code_end == INSIDE {
                return Some((start, end));
            }
            if code_start & code_end != 0 {
                return None;
            }

            // Move the outside endpoint onto the boundary it violates
            let out = if code_start != INSIDE { code_start } else { code_end };
            let d = end - start;
            let point = if out & TOP != 0 {
                DVec2::new(start.x + d.x * (bounds.max.y - start.y) / d.y, bounds.max.y)
            } else if out & BOTTOM != 0 {
                DVec2::new(start.x + d.x * (bounds.min.y - start.y) / d.y, bounds.min.y)
            } else if out & RIGHT != 0 {
                DVec2::new(bounds.max.x, start.y + d.y * (bounds.max.x - start.x) / d.x)
            } else {
                DVec2::new(bounds.min.x, start.y + d.y * (bounds.min.x - start.x) / d.x)
            };

            if out == code_start {
                start = point;
                code_start = outcode(start, bounds);
            } else {
                end = point;
                code_end = outcode(end, bounds);
            }
        }

        None
    }
}

/// Maps viewport coordinates onto the tile grid
///
/// Both axes use the same scale, `grid_size / viewport_width`.
#[derive(Debug, Clone, Copy)]
pub struct GridMapper {
    scale: f64,
    bounds: ClipBounds,
    max_coord: i32,
}

impl GridMapper {
    /// Create a mapper for a `width x height` viewport onto a square grid
    pub fn new(width: u32, height: u32, grid_size: u32) -> Self {
        Self {
            scale: grid_size as f64 / width as f64,
            bounds: ClipBounds::new(0.0, 0.0, width as f64, height as f64),
            max_coord: grid_size.saturating_sub(1).min(i32::MAX as u32) as i32,
        }
    }

    /// Viewport-to-grid scale factor
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Clip rectangle in viewport units
    #[inline]
    pub fn bounds(&self) -> &ClipBounds {
        &self.bounds
    }

    /// Scale a viewport point, truncating toward zero
    #[inline]
    fn scale_point(&self, point: DVec2) -> IVec2 {
        let scaled = point * self.scale;
        IVec2::new(scaled.x as i32, scaled.y as i32)
    }

    /// Clip a viewport segment and map it onto the grid
    ///
    /// Returns `None` if the clipper rejects the segment or the mapped
    /// segment collapses to a single grid point.
    pub fn map_segment<C: Clipper + ?Sized>(
        &self,
        clipper: &C,
        start: DVec2,
        end: DVec2,
    ) -> Option<Segment> {
        let Some((start, end)) = clipper.clip(start, end, &self.bounds) else {
            debug!("map_segment: rejected {:?} -> {:?}", start, end);
            return None;
        };

        let max = IVec2::splat(self.max_coord);
        let segment = Segment {
            start: self.scale_point(start).clamp(IVec2::ZERO, max),
            end: self.scale_point(end).clamp(IVec2::ZERO, max),
        };

        if segment.is_degenerate() {
            debug!("map_segment: degenerate at {:?}", segment.start);
            return None;
        }

        Some(segment)
    }

    /// Map a viewport point onto the grid as a marker
    ///
    /// Markers are clamped to `1..=grid_size - 2`.
    pub fn map_marker(&self, point: DVec2) -> Marker {
        let min = IVec2::ONE;
        let max = IVec2::splat(self.max_coord - 1);
        Marker {
            position: self.scale_point(point).clamp(min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ClipBounds {
        ClipBounds::new(0.0, 0.0, 256.0, 256.0)
    }

    #[test]
    fn test_clip_inside_unchanged() {
        let start = DVec2::new(10.0, 20.0);
        let end = DVec2::new(100.0, 200.0);
        assert_eq!(RectClipper.clip(start, end, &bounds()), Some((start, end)));
    }

    #[test]
    fn test_clip_outside_rejected() {
        let result = RectClipper.clip(DVec2::new(-10.0, -10.0), DVec2::new(-5.0, 300.0), &bounds());
        assert_eq!(result, None);

        let result = RectClipper.clip(DVec2::new(300.0, 10.0), DVec2::new(400.0, 20.0), &bounds());
        assert_eq!(result, None);
    }

    #[test]
    fn test_clip_crossing_segment() {
        let (start, end) = RectClipper
            .clip(DVec2::new(-100.0, 128.0), DVec2::new(356.0, 128.0), &bounds())
            .unwrap();
        assert_eq!(start, DVec2::new(0.0, 128.0));
        assert_eq!(end, DVec2::new(256.0, 128.0));

        let (start, end) = RectClipper
            .clip(DVec2::new(-64.0, -64.0), DVec2::new(128.0, 128.0), &bounds())
            .unwrap();
        assert_eq!(start, DVec2::new(0.0, 0.0));
        assert_eq!(end, DVec2::new(128.0, 128.0));
    }

    #[test]
    fn test_clip_non_finite_rejected() {
        let result = RectClipper.clip(DVec2::new(f64::NAN, 0.0), DVec2::new(10.0, 10.0), &bounds());
        assert_eq!(result, None);
    }

    #[test]
    fn test_bounds_contains() {
        let b = bounds();
        assert!(b.contains(DVec2::new(0.0, 0.0)));
        assert!(b.contains(DVec2::new(256.0, 256.0)));
        assert!(!b.contains(DVec2::new(-0.5, 10.0)));
    }

    #[test]
    fn test_map_segment_scales_to_grid() {
        let mapper = GridMapper::new(256, 256, 4096);
        assert_eq!(mapper.scale(), 16.0);

        let segment = mapper
            .map_segment(&RectClipper, DVec2::new(0.0, 0.0), DVec2::new(128.0, 64.5))
            .unwrap();
        assert_eq!(segment, Segment::new(0, 0, 2048, 1032));
    }

    #[test]
    fn test_map_segment_clamps_to_grid() {
        let mapper = GridMapper::new(256, 256, 4096);
        let segment = mapper
            .map_segment(&RectClipper, DVec2::new(10.0, 10.0), DVec2::new(500.0, 10.0))
            .unwrap();
        assert_eq!(segment.end.x, 4095);

        let segment = mapper
            .map_segment(&RectClipper, DVec2::new(256.0, 256.0), DVec2::new(0.0, 0.0))
            .unwrap();
        assert_eq!(segment.start, IVec2::new(4095, 4095));
    }

    #[test]
    fn test_map_segment_drops_degenerate() {
        // Grid coarser than the viewport: both endpoints land in one cell
        let mapper = GridMapper::new(256, 256, 16);
        let result = mapper.map_segment(&RectClipper, DVec2::new(1.0, 1.0), DVec2::new(2.0, 2.0));
        assert_eq!(result, None);
    }

    #[test]
    fn test_map_segment_respects_clipper() {
        let mapper = GridMapper::new(256, 256, 4096);
        let reject_all = |_: DVec2, _: DVec2, _: &ClipBounds| -> Option<(DVec2, DVec2)> { None };
        let result = mapper.map_segment(&reject_all, DVec2::new(1.0, 1.0), DVec2::new(20.0, 20.0));
        assert_eq!(result, None);
    }

    #[test]
    fn test_map_marker_clamps_inside_grid() {
        let mapper = GridMapper::new(256, 256, 4096);
        assert_eq!(mapper.map_marker(DVec2::new(0.0, 0.0)).position, IVec2::new(1, 1));
        assert_eq!(
            mapper.map_marker(DVec2::new(256.0, 300.0)).position,
            IVec2::new(4094, 4094)
        );
        assert_eq!(
            mapper.map_marker(DVec2::new(10.0, 20.0)).position,
            IVec2::new(160, 320)
        );
    }
}
