use serde::{Deserialize, Serialize};

/// A detection region in pixel coordinates, using the engine's
/// left/top/right/bottom edge convention.
///
/// All four edges are inclusive: region (10, 10)-(50, 50) covers rows
/// 10..=50 and columns 10..=50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    /// Create a rectangle from two opposite corners.
    ///
    /// Swapped corners are normalized: each axis takes the smaller
    /// coordinate as the left/top edge and the larger as the
    /// right/bottom edge, so the result is always a valid rectangle.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
        }
    }

    /// Width in pixels, counting both inclusive edges.
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    /// Height in pixels, counting both inclusive edges.
    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// Clamp the rectangle to an image of `width` x `height` pixels.
    ///
    /// Returns `None` when the rectangle lies entirely outside the image.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 || self.left >= width || self.top >= height {
            return None;
        }
        Some(Self {
            left: self.left,
            top: self.top,
            right: self.right.min(width - 1),
            bottom: self.bottom.min(height - 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_ordered_corners() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left, 10);
        assert_eq!(r.top, 20);
        assert_eq!(r.right, 30);
        assert_eq!(r.bottom, 40);
    }

    #[test]
    fn new_normalizes_swapped_corners() {
        let r = Rect::new(30, 40, 10, 20);
        assert_eq!(r, Rect::new(10, 20, 30, 40));
    }

    #[test]
    fn degenerate_rect_is_one_pixel() {
        let r = Rect::new(5, 5, 5, 5);
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 1);
    }

    #[test]
    fn clamp_trims_overhanging_edges() {
        let r = Rect::new(90, 90, 150, 150).clamp_to(100, 100).unwrap();
        assert_eq!(r, Rect::new(90, 90, 99, 99));
    }

    #[test]
    fn clamp_rejects_fully_outside_rect() {
        assert!(Rect::new(100, 100, 150, 150).clamp_to(100, 100).is_none());
        assert!(Rect::new(0, 0, 5, 5).clamp_to(0, 0).is_none());
    }
}
