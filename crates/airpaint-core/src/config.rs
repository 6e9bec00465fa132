//! Pipeline tuning parameters.

use serde::{Deserialize, Serialize};

/// Tuning for sensor interpretation and feedback rendering.
///
/// Defaults match the sensor configuration the painting application ships
/// with; a deployment can override them from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum travel (sensor mm) for a swipe to count as a command.
    pub swipe_min_length: f64,
    /// Minimum speed (mm/s) for a swipe to count as a command.
    pub swipe_min_velocity: f64,
    /// Frames a draw event survives without a refresh before it expires.
    pub stroke_max_age: u32,
    /// Hover feedback circle radius, canvas units.
    pub feedback_circle_radius: f64,
    /// Hover feedback circle stroke weight.
    pub feedback_circle_weight: f64,
    /// Circle-gesture tips with y below this height (sensor mm) fall in the
    /// upper command band.
    pub upper_band: f64,
    /// Circle-gesture tips with y above this height fall in the lower
    /// command band. Tips between the two bands map to no command.
    pub lower_band: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            swipe_min_length: 150.0,
            swipe_min_velocity: 500.0,
            stroke_max_age: 1,
            feedback_circle_radius: 40.0,
            feedback_circle_weight: 50.0,
            upper_band: 150.0,
            lower_band: 250.0,
        }
    }
}
