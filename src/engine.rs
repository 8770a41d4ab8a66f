//! The face-detection engine boundary.
//!
//! The engine itself is an external collaborator; this module defines
//! everything the rest of the crate needs to talk to one: the named
//! configuration record, the raw-buffer ingestion contract, the
//! detection result types, and the process-wide message sink engines
//! log through.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::Rect;

/// Format tag for single-channel 8-bit luminance buffers.
pub const GRAYSCALE_FORMAT: &str = "GRAYSCALE";

type MessageSink = Box<dyn Fn(&str) + Send + Sync>;

static MESSAGE_SINK: Mutex<Option<MessageSink>> = Mutex::new(None);

/// Install the process-wide sink for engine log lines.
///
/// There is no default sink: lines emitted before one is installed are
/// dropped. Install a sink before constructing any engine.
pub fn set_message_sink(sink: MessageSink) {
    if let Ok(mut guard) = MESSAGE_SINK.lock() {
        *guard = Some(sink);
    }
}

/// Route one engine log line to the installed sink, if any.
pub fn emit_message(msg: &str) {
    if let Ok(guard) = MESSAGE_SINK.lock() {
        if let Some(sink) = guard.as_ref() {
            sink(msg);
        }
    }
}

/// How the engine remembers identities across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMemoryType {
    /// Re-identify by position in the frame.
    #[default]
    Spatial,
    /// Re-identify by appearance over time.
    Temporal,
}

/// Suppression of phantom (spuriously repeated) detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhantomTrap {
    #[default]
    Off,
    On,
}

/// Facial landmark locator mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointLocator {
    #[default]
    Off,
    Eyes,
    Face,
}

/// Engine construction options, one named field per option of the
/// engine's configuration record, so call sites stay self-documenting
/// instead of relying on positional ordering.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Timestamp base for frame time offsets, in milliseconds.
    pub time_base: u64,
    /// Whether the engine advances the time base itself between calls.
    pub update_time_base: bool,
    /// Worker threads the engine may use internally.
    pub thread_count: u32,
    /// Detection model variant, e.g. "Face.Front".
    pub model_type: String,
    /// Scale factor applied to the input image before detection.
    pub image_scale: f32,
    /// Minimum face size in pixels.
    pub min_face_size: u32,
    /// Minimum detection score for a face to be reported.
    pub min_face_score: f32,
    /// How many frames an identity is remembered; 0 disables memory.
    pub id_memory_length: u32,
    pub id_memory_type: IdMemoryType,
    /// Track faces across frames.
    pub track_faces: bool,
    pub phantom_trap: PhantomTrap,
    pub search_eyes: bool,
    pub search_nose: bool,
    pub search_mouth: bool,
    pub analyze_eyes: bool,
    pub analyze_mouth: bool,
    pub analyze_gender: bool,
    pub analyze_age: bool,
    pub analyze_happy: bool,
    pub analyze_sad: bool,
    pub analyze_surprised: bool,
    pub analyze_angry: bool,
    pub point_locator: PointLocator,
}

impl Default for EngineConfig {
    /// Frontal-face configuration: single worker thread, 96px minimum
    /// face size, eye search plus gender/age/emotion analysis enabled.
    fn default() -> Self {
        Self {
            time_base: 0,
            update_time_base: false,
            thread_count: 1,
            model_type: "Face.Front".to_string(),
            image_scale: 1.0,
            min_face_size: 96,
            min_face_score: 9.0,
            id_memory_length: 0,
            id_memory_type: IdMemoryType::Spatial,
            track_faces: false,
            phantom_trap: PhantomTrap::Off,
            search_eyes: true,
            search_nose: false,
            search_mouth: false,
            analyze_eyes: false,
            analyze_mouth: false,
            analyze_gender: true,
            analyze_age: true,
            analyze_happy: true,
            analyze_sad: true,
            analyze_surprised: true,
            analyze_angry: true,
            point_locator: PointLocator::Off,
        }
    }
}

/// The engine's raw-buffer ingestion contract: pixel data plus the
/// geometry needed to address it.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
    /// Interleaved channels per pixel (1 for grayscale).
    pub channels: u32,
    /// Bytes per channel sample.
    pub pixel_size: u32,
    /// Bytes per row; at least `width * channels * pixel_size`.
    pub stride: u32,
    /// Pixel format tag, e.g. "GRAYSCALE".
    pub format: &'static str,
}

/// One detected face: a bounding region plus whatever named attributes
/// and ratings the engine was configured to compute.
///
/// A missing attribute or rating is a valid, expected state, not an
/// error: the engine simply was not asked to compute it.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    /// Bounding region in image pixel coordinates.
    pub region: Rect,
    attributes: BTreeMap<String, String>,
    ratings: BTreeMap<String, f32>,
}

impl Detection {
    /// A detection with a region and no computed attributes or ratings.
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            attributes: BTreeMap::new(),
            ratings: BTreeMap::new(),
        }
    }

    /// Attach a categorical attribute, e.g. "Gender" = "Female".
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Attach a numeric rating, e.g. "Age" = 31.5.
    pub fn with_rating(mut self, name: &str, value: f32) -> Self {
        self.ratings.insert(name.to_string(), value);
        self
    }

    /// Categorical attribute by name; `None` when not computed.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Numeric rating by name; `None` when not computed.
    pub fn rating(&self, name: &str) -> Option<f32> {
        self.ratings.get(name).copied()
    }
}

/// A face-detection engine instance.
///
/// One instance serves one run: construct it, call [`process`] once,
/// and drop it. Backends release their underlying engine handle in
/// `Drop`, so teardown happens on every exit path without manual
/// cleanup at call sites.
///
/// [`process`]: FaceEngine::process
pub trait FaceEngine {
    /// Engine version string, printed at the top of the report.
    fn version(&self) -> String;

    /// Run detection over one grayscale frame.
    ///
    /// `time_offset_ms` is the frame timestamp relative to the
    /// configured time base.
    fn process(&mut self, frame: RawFrame<'_>, time_offset_ms: u64) -> Result<Vec<Detection>>;
}

/// An engine that replays a fixed detection list.
///
/// Stands in for a real backend in tests and offline runs: whatever
/// the caller scripts is what the next [`process`] call reports.
///
/// [`process`]: FaceEngine::process
pub struct ScriptedEngine {
    detections: Vec<Detection>,
}

impl ScriptedEngine {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }
}

impl FaceEngine for ScriptedEngine {
    fn version(&self) -> String {
        "scripted/1.0".to_string()
    }

    fn process(&mut self, frame: RawFrame<'_>, _time_offset_ms: u64) -> Result<Vec<Detection>> {
        if frame.format != GRAYSCALE_FORMAT {
            return Err(Error::Processing(format!(
                "unsupported frame format: {}",
                frame.format
            )));
        }
        emit_message(&format!(
            "scripted engine: {}x{} frame, {} detection(s)",
            frame.width,
            frame.height,
            self.detections.len()
        ));
        Ok(self.detections.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn default_config_matches_frontal_demo() {
        let config = EngineConfig::default();
        assert_eq!(config.thread_count, 1);
        assert_eq!(config.model_type, "Face.Front");
        assert_eq!(config.min_face_size, 96);
        assert_eq!(config.id_memory_type, IdMemoryType::Spatial);
        assert_eq!(config.phantom_trap, PhantomTrap::Off);
        assert_eq!(config.point_locator, PointLocator::Off);
        assert!(config.search_eyes);
        assert!(!config.search_nose);
        assert!(config.analyze_gender && config.analyze_age);
        assert!(config.analyze_happy && config.analyze_sad);
        assert!(config.analyze_surprised && config.analyze_angry);
    }

    #[test]
    fn missing_attributes_read_as_none() {
        let det = Detection::new(Rect::new(0, 0, 10, 10)).with_rating("Age", 25.0);
        assert_eq!(det.rating("Age"), Some(25.0));
        assert_eq!(det.rating("Happy"), None);
        assert_eq!(det.attribute("Gender"), None);
    }

    #[test]
    fn scripted_engine_replays_detections() {
        let mut engine = ScriptedEngine::new(vec![
            Detection::new(Rect::new(1, 2, 3, 4)),
            Detection::new(Rect::new(5, 6, 7, 8)),
        ]);
        let data = [0u8; 16];
        let frame = RawFrame {
            data: &data,
            width: 4,
            height: 4,
            channels: 1,
            pixel_size: 1,
            stride: 4,
            format: GRAYSCALE_FORMAT,
        };
        let detections = engine.process(frame, 0).unwrap();
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].region, Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn scripted_engine_rejects_non_grayscale_frames() {
        let mut engine = ScriptedEngine::new(vec![]);
        let data = [0u8; 12];
        let frame = RawFrame {
            data: &data,
            width: 2,
            height: 2,
            channels: 3,
            pixel_size: 1,
            stride: 6,
            format: "RGB",
        };
        assert!(engine.process(frame, 0).is_err());
    }

    #[test]
    fn message_sink_captures_engine_lines() {
        let captured = Arc::new(Mutex::new(Vec::<String>::new()));
        let lines = Arc::clone(&captured);
        set_message_sink(Box::new(move |msg| {
            lines.lock().unwrap().push(msg.to_string());
        }));

        emit_message("engine says hello");

        let captured = captured.lock().unwrap();
        assert!(captured.iter().any(|l| l == "engine says hello"));
    }
}
