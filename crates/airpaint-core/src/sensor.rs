//! Sensor frame model: pointer samples, proximity zones, canvas projection.

use crate::gesture::GestureEvent;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Minimal 3D vector for sensor-space geometry (tip positions, circle axes).
///
/// The sensor reports positions in millimeters relative to the device center,
/// with y growing upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Distance to another point in sensor space.
    pub fn distance(self, other: Self) -> f64 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z).length()
    }

    /// Angle to another vector in radians, in [0, π].
    ///
    /// Zero-length vectors are treated as parallel.
    pub fn angle_to(self, other: Self) -> f64 {
        let denom = self.length() * other.length();
        if denom < f64::EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }
}

/// The sensor's coarse proximity zone for a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchZone {
    /// Outside the sensing volume.
    None,
    /// Hovering above the virtual touch plane.
    Hovering,
    /// At or past the virtual touch plane.
    Touching,
}

impl TouchZone {
    /// Whether the pointer is inside the active sensing zone at all.
    pub fn is_active(self) -> bool {
        !matches!(self, TouchZone::None)
    }
}

/// One sensor reading for one pointer in one frame.
///
/// The pointer id is frame-scoped and may be reused for a different physical
/// pointer in later frames; identity across frames is reconstructed by the
/// frame processor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Transient id assigned by the sensor.
    pub pointer_id: i32,
    /// Stabilized tip position, normalized into [0,1]² by the sensor's
    /// interaction box.
    pub normalized: Point,
    /// Signed proximity distance: negative means contact with the virtual
    /// drawing surface, positive means hovering. `None` when the pointer is
    /// outside the sensing volume.
    pub touch_distance: Option<f32>,
    /// Zone classification matching `touch_distance`.
    pub zone: TouchZone,
}

impl PointerSample {
    /// Project the normalized position into canvas coordinates.
    ///
    /// Sensor y grows upward, canvas y grows downward, so the y axis flips.
    pub fn canvas_position(&self, canvas: Size) -> Point {
        Point::new(
            self.normalized.x * canvas.width,
            canvas.height - self.normalized.y * canvas.height,
        )
    }
}

/// One delivered sensor frame: every tracked pointer plus the gestures the
/// sensor classified since the previous frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorFrame {
    pub pointers: Vec<PointerSample>,
    pub gestures: Vec<GestureEvent>,
}
