//! Geometry helpers shared by the layout and drawing code.

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle in canvas pixels.
///
/// Coordinates are fractional; nothing is rounded until Cairo rasterizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Shrinks the rectangle by `amount` on every side.
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }

    /// Whether the point lies inside the rectangle (min inclusive, max exclusive).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

// ============================================================================
// Floating-point comparisons
// ============================================================================

/// Compares two values within an absolute tolerance.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_every_side() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0).inset(5.0);
        assert_eq!(rect, Rect::new(15.0, 25.0, 90.0, 40.0));
    }

    #[test]
    fn contains_uses_half_open_bounds() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(9.9, 9.9));
        assert!(!rect.contains(10.0, 5.0));
        assert!(!rect.contains(5.0, -0.1));
    }

    #[test]
    fn center_of_rect() {
        let rect = Rect::new(-10.0, 4.0, 20.0, 8.0);
        assert_eq!(rect.center_x(), 0.0);
        assert_eq!(rect.center_y(), 8.0);
    }
}
