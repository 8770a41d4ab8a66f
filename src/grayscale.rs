//! RGB to grayscale conversion for the engine's raw-buffer contract.

use image::RgbImage;

use crate::engine::{RawFrame, GRAYSCALE_FORMAT};

/// A single-channel 8-bit luminance buffer.
///
/// Rows are `stride` bytes apart with `stride >= width`, so a raw
/// pointer plus the geometry can be handed straight to a detection
/// engine's buffer-ingestion contract via [`GrayFrame::raw_frame`].
pub struct GrayFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: u32,
}

impl GrayFrame {
    /// Convert an RGB image into a tightly packed luminance buffer.
    pub fn from_rgb(img: &RgbImage) -> Self {
        Self::from_rgb_raw(img.as_raw(), img.width(), img.height(), img.width() * 3)
    }

    /// Convert an interleaved RGB buffer with `stride` bytes per row
    /// into a tightly packed luminance buffer of the same dimensions.
    ///
    /// Uses the ITU-R BT.601 luminance formula with integer math:
    /// Y = (299*R + 587*G + 114*B) / 1000. The weights sum to 1000, so
    /// the result always fits in a u8.
    ///
    /// A source buffer shorter than the declared geometry is a
    /// programming error, not user input.
    pub fn from_rgb_raw(rgb: &[u8], width: u32, height: u32, stride: u32) -> Self {
        debug_assert!(stride >= width * 3);
        debug_assert!(
            height == 0
                || rgb.len() as u64 >= stride as u64 * (height as u64 - 1) + width as u64 * 3
        );

        let mut data = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            let row = &rgb[y as usize * stride as usize..][..width as usize * 3];
            for px in row.chunks_exact(3) {
                let r = px[0] as u32;
                let g = px[1] as u32;
                let b = px[2] as u32;
                data.push(((299 * r + 587 * g + 114 * b) / 1000) as u8);
            }
        }

        Self {
            data,
            width,
            height,
            stride: width,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row. Always `width` for frames built by this module.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Marshal the buffer into the engine's raw-buffer ingestion
    /// contract: data, geometry, one 8-bit channel, "GRAYSCALE" tag.
    pub fn raw_frame(&self) -> RawFrame<'_> {
        RawFrame {
            data: &self.data,
            width: self.width,
            height: self.height,
            channels: 1,
            pixel_size: 1,
            stride: self.stride,
            format: GRAYSCALE_FORMAT,
        }
    }
}
