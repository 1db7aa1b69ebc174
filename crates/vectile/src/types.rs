use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A line segment in grid space
///
/// Both endpoints lie in `0..grid_size`. Segments with identical endpoints
/// are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: IVec2,
    pub end: IVec2,
}

impl Segment {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            start: IVec2::new(x0, y0),
            end: IVec2::new(x1, y1),
        }
    }

    /// True if both endpoints coincide
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Lexicographic ordering key: start point first, then end point
    #[inline]
    pub fn sort_key(&self) -> (i32, i32, i32, i32) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }
}

/// A point marker in grid space, drawn as a unit diamond
///
/// Markers are clamped one unit inside the grid so the diamond around them
/// stays on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker {
    pub position: IVec2,
}

impl Marker {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
        }
    }
}

/// Style of a drawn line. Accepted from the host, not used by the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineStyle {
    pub bright: f64,
    pub hue: f64,
    pub antialias: bool,
    pub thick: f64,
}

/// Style of a marked point. Accepted from the host, not used by the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointStyle {
    pub bright: f64,
    pub hue: f64,
}

/// Output options passed to finalize. Accepted from the host, not used by the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputStyle {
    pub transparency: i32,
    pub gamma: f64,
    pub invert: bool,
    pub color: i32,
    pub color2: i32,
    pub saturate: bool,
    pub mask: bool,
}
