//! Per-face attribute report formatting.

use crate::engine::Detection;

/// Rating names reported for every face, in print order.
const RATINGS: [&str; 5] = ["Age", "Happy", "Sad", "Angry", "Surprised"];

/// Marker printed when the engine did not compute a value.
const UNKNOWN: &str = "unknown";

/// Format one detection as a multi-line report block.
///
/// The block starts with the face index, then one line per attribute:
/// gender, followed by the rating names in [`RATINGS`] order. Ratings
/// print with six decimal places (the stable precision choice for this
/// report); values the engine did not compute print as "unknown".
pub fn format_detection(index: usize, detection: &Detection) -> String {
    let mut s = String::new();
    s.push_str(&format!("Face #{} :\n", index));
    s.push_str(&format!(
        "Gender: {}\n",
        detection.attribute("Gender").unwrap_or(UNKNOWN)
    ));
    for name in RATINGS {
        match detection.rating(name) {
            Some(value) => s.push_str(&format!("{}: {:.6}\n", name, value)),
            None => s.push_str(&format!("{}: {}\n", name, UNKNOWN)),
        }
    }
    s
}
