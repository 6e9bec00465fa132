//! Live hover feedback: proximity-to-color classification and feedback
//! circles.

use kurbo::Point;
use peniko::Color;

/// Circle drawn at a hovering fingertip, colored by proximity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackCircle {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    /// Stroke weight of the circle outline.
    pub weight: f64,
}

/// Index of the proximity band for a normalized distance, 0 (nearest) through
/// 8 (farthest). Distances past the last threshold stay in band 8.
pub fn proximity_band(distance: f32) -> usize {
    const THRESHOLDS: [f32; 8] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
    THRESHOLDS
        .iter()
        .position(|threshold| distance <= *threshold)
        .unwrap_or(THRESHOLDS.len())
}

/// Map a normalized proximity distance to a feedback color.
///
/// Total and monotonic over all inputs: green at contact range, shading
/// through yellow and orange to red at the edge of the sensing volume.
pub fn distance_to_color(distance: f32) -> Color {
    match proximity_band(distance) {
        0 => Color::from_rgb8(0, 255, 0),    // green
        1 => Color::from_rgb8(84, 255, 0),   // lime green
        2 => Color::from_rgb8(173, 255, 0),  // yellow green
        3 => Color::from_rgb8(199, 255, 0),  // pickle
        4 => Color::from_rgb8(255, 237, 0),  // yellow
        5 => Color::from_rgb8(255, 156, 0),  // sunset
        6 => Color::from_rgb8(255, 97, 0),   // orange
        7 => Color::from_rgb8(255, 46, 0),   // crimson
        _ => Color::from_rgb8(255, 0, 0),    // red
    }
}
