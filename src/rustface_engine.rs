//! Face engine backed by the `rustface` crate (SeetaFace).

use std::path::Path;

use crate::engine::{emit_message, Detection, EngineConfig, FaceEngine, RawFrame, GRAYSCALE_FORMAT};
use crate::error::{Error, Result};
use crate::types::Rect;

/// [`FaceEngine`] implementation using the SeetaFace frontal detector.
///
/// rustface locates faces but computes no attributes or ratings, so
/// every attribute line in the report renders as "unknown". The
/// detector handle is owned by this struct and released on drop.
pub struct RustfaceEngine {
    detector: Box<dyn rustface::Detector>,
}

impl RustfaceEngine {
    /// Load a SeetaFace model file and configure the detector.
    ///
    /// Configuration maps onto the knobs rustface exposes: minimum face
    /// size and minimum score. Pyramid tuning is fixed; the remaining
    /// options (tracking, identity memory, attribute analysis) have no
    /// rustface counterpart.
    pub fn open<P: AsRef<Path>>(model: P, config: &EngineConfig) -> Result<Self> {
        let path = model.as_ref().to_str().ok_or_else(|| {
            Error::EngineUnavailable(format!("invalid model path: {:?}", model.as_ref()))
        })?;
        let mut detector = rustface::create_detector(path)
            .map_err(|e| Error::EngineUnavailable(format!("cannot load model {}: {}", path, e)))?;

        detector.set_min_face_size(config.min_face_size);
        detector.set_score_thresh(config.min_face_score as f64);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        emit_message(&format!("rustface: loaded model {}", path));
        Ok(Self { detector })
    }
}

impl FaceEngine for RustfaceEngine {
    fn version(&self) -> String {
        "rustface (SeetaFace frontal)".to_string()
    }

    fn process(&mut self, frame: RawFrame<'_>, _time_offset_ms: u64) -> Result<Vec<Detection>> {
        if frame.format != GRAYSCALE_FORMAT || frame.channels != 1 || frame.pixel_size != 1 {
            return Err(Error::Processing(format!(
                "rustface accepts 8-bit {} frames, got {} with {} channel(s)",
                GRAYSCALE_FORMAT, frame.format, frame.channels
            )));
        }

        // rustface expects tightly packed rows; repack when the frame
        // carries row padding.
        let tight: Vec<u8>;
        let data = if frame.stride == frame.width {
            frame.data
        } else {
            tight = frame
                .data
                .chunks(frame.stride as usize)
                .take(frame.height as usize)
                .flat_map(|row| row[..frame.width as usize].iter().copied())
                .collect();
            tight.as_slice()
        };

        let image = rustface::ImageData::new(data, frame.width, frame.height);
        let faces = self.detector.detect(&image);
        emit_message(&format!("rustface: {} face(s) found", faces.len()));

        Ok(faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                region_from_bbox(bbox.x(), bbox.y(), bbox.width(), bbox.height())
                    .map(Detection::new)
            })
            .collect())
    }
}

/// Convert a detector box (x/y/width/height, possibly extending past the
/// top-left image edge) to inclusive region edges.
///
/// The true right/bottom edges are computed before clamping, so a box at
/// a negative coordinate is clamped in place rather than shifted into
/// the image. Returns `None` for empty boxes and boxes lying entirely
/// above or left of the image.
fn region_from_bbox(x: i32, y: i32, width: u32, height: u32) -> Option<Rect> {
    if width == 0 || height == 0 {
        return None;
    }
    let right = x as i64 + width as i64 - 1;
    let bottom = y as i64 + height as i64 - 1;
    if right < 0 || bottom < 0 {
        return None;
    }
    Some(Rect::new(
        x.max(0) as u32,
        y.max(0) as u32,
        right as u32,
        bottom as u32,
    ))
}
