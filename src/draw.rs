//! Rectangle outline annotation.

use image::{Rgb, RgbImage};

use crate::types::Rect;

/// Outline color for detected regions.
const OUTLINE: Rgb<u8> = Rgb([255, 255, 255]);

/// Draw a one-pixel-wide unfilled white rectangle outline in place.
///
/// Writes the top row, bottom row, left column, and right column,
/// inclusive of all four edges; the interior is left untouched. A
/// region reaching past the image is clamped to it, and a region
/// entirely outside draws nothing.
pub fn draw_rect_outline(img: &mut RgbImage, rect: Rect) {
    let Some(r) = rect.clamp_to(img.width(), img.height()) else {
        return;
    };

    for x in r.left..=r.right {
        img.put_pixel(x, r.top, OUTLINE);
        img.put_pixel(x, r.bottom, OUTLINE);
    }
    for y in r.top..=r.bottom {
        img.put_pixel(r.left, y, OUTLINE);
        img.put_pixel(r.right, y, OUTLINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Rgb<u8> = Rgb([128, 128, 128]);

    fn canvas(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, GRAY)
    }

    fn on_border(r: &Rect, x: u32, y: u32) -> bool {
        let on_edge_x = x == r.left || x == r.right;
        let on_edge_y = y == r.top || y == r.bottom;
        let in_x = x >= r.left && x <= r.right;
        let in_y = y >= r.top && y <= r.bottom;
        (on_edge_x && in_y) || (on_edge_y && in_x)
    }

    #[test]
    fn border_is_white_and_nothing_else_changes() {
        let mut img = canvas(30, 30);
        let r = Rect::new(5, 8, 20, 25);
        draw_rect_outline(&mut img, r);

        for y in 0..30 {
            for x in 0..30 {
                let expected = if on_border(&r, x, y) { OUTLINE } else { GRAY };
                assert_eq!(img.get_pixel(x, y), &expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn degenerate_rect_draws_single_point() {
        let mut img = canvas(10, 10);
        draw_rect_outline(&mut img, Rect::new(4, 4, 4, 4));

        for y in 0..10 {
            for x in 0..10 {
                let expected = if (x, y) == (4, 4) { OUTLINE } else { GRAY };
                assert_eq!(img.get_pixel(x, y), &expected);
            }
        }
    }

    #[test]
    fn swapped_corners_draw_same_border() {
        let mut a = canvas(20, 20);
        let mut b = canvas(20, 20);
        draw_rect_outline(&mut a, Rect::new(3, 4, 15, 16));
        draw_rect_outline(&mut b, Rect::new(15, 16, 3, 4));
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn overhanging_rect_is_clamped_to_image() {
        let mut img = canvas(10, 10);
        draw_rect_outline(&mut img, Rect::new(6, 6, 14, 14));

        // Clamped border: rows 6 and 9, columns 6 and 9, spanning 6..=9.
        let r = Rect::new(6, 6, 9, 9);
        for y in 0..10 {
            for x in 0..10 {
                let expected = if on_border(&r, x, y) { OUTLINE } else { GRAY };
                assert_eq!(img.get_pixel(x, y), &expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn fully_outside_rect_draws_nothing() {
        let mut img = canvas(10, 10);
        let before = img.clone();
        draw_rect_outline(&mut img, Rect::new(20, 20, 30, 30));
        assert_eq!(img.as_raw(), before.as_raw());
    }
}
