//! # face-annotate
//!
//! Run a face-detection engine over a JPEG image, annotate detected
//! face bounding boxes, and report per-face attribute scores.
//!
//! The detection engine is an external collaborator behind the
//! [`FaceEngine`] trait; this crate contributes the glue around it:
//!
//! - **Grayscale conversion**: engines ingest single-channel luminance
//!   buffers. [`GrayFrame`] produces one from an RGB image and marshals
//!   it into the engine's raw-buffer contract ([`RawFrame`]).
//! - **Annotation**: [`draw_rect_outline`] draws reported regions back
//!   onto the original RGB image as unfilled white rectangles.
//! - **Reporting**: [`format_detection`] renders per-face attributes,
//!   printing "unknown" for anything the engine did not compute.
//!
//! ## Quick start
//!
//! ```rust
//! use face_annotate::{
//!     draw_rect_outline, format_detection, Detection, FaceEngine, GrayFrame, Rect,
//!     ScriptedEngine,
//! };
//!
//! let mut img = image::RgbImage::new(100, 100);
//! let gray = GrayFrame::from_rgb(&img);
//!
//! let mut engine = ScriptedEngine::new(vec![Detection::new(Rect::new(10, 10, 50, 50))]);
//! let detections = engine.process(gray.raw_frame(), 0).unwrap();
//!
//! for (i, det) in detections.iter().enumerate() {
//!     draw_rect_outline(&mut img, det.region);
//!     print!("{}", format_detection(i, det));
//! }
//! ```
//!
//! Real detection uses [`RustfaceEngine`] (SeetaFace); any other engine
//! plugs in by implementing [`FaceEngine`].

mod draw;
mod engine;
mod error;
mod grayscale;
mod report;
mod rustface_engine;
mod types;

pub use draw::draw_rect_outline;
pub use engine::{
    emit_message, set_message_sink, Detection, EngineConfig, FaceEngine, IdMemoryType,
    PhantomTrap, PointLocator, RawFrame, ScriptedEngine, GRAYSCALE_FORMAT,
};
pub use error::{Error, Result};
pub use grayscale::GrayFrame;
pub use report::format_detection;
pub use rustface_engine::RustfaceEngine;
pub use types::Rect;
