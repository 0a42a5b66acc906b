//! Measured rectangles.

/// An axis-aligned box measured in pixels.
///
/// The coordinate space depends on who produced it: document (page)
/// coordinates when the container is the body, otherwise coordinates local
/// to the container's padding box. Rects are produced fresh by every
/// measurement and never mutated afterwards by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Distance of the top edge from the origin.
    pub top: f32,
    /// Distance of the left edge from the origin.
    pub left: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Vertical midpoint.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Horizontal midpoint.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }
}
