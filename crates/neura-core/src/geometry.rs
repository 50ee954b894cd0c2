//! Points, viewport dimensions and visibility math.

use ratatui::layout::Rect;

/// Horizontal Braille dots per terminal cell.
const DOTS_PER_CELL_X: f32 = 2.0;
/// Vertical Braille dots per terminal cell.
const DOTS_PER_CELL_Y: f32 = 4.0;

/// A 2D point in viewport space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface in viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    /// The static 1920x1080 space used before the real size is known.
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport matching the Braille dot grid of a terminal area.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self::new(
            f32::from(columns) * DOTS_PER_CELL_X,
            f32::from(rows) * DOTS_PER_CELL_Y,
        )
    }

    /// Whether `point` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }

    /// True when the viewport has no drawable area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Fraction of `element` that lies inside `viewport`, in `[0, 1]`.
///
/// An element with zero area is never considered visible.
pub fn intersection_ratio(element: Rect, viewport: Rect) -> f32 {
    let element_area = element.area();
    if element_area == 0 {
        return 0.0;
    }
    let visible = element.intersection(viewport).area();
    visible as f32 / element_area as f32
}
