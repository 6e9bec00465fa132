//! Gesture events delivered by the sensor.

use crate::sensor::Vec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Rotation sense of a circle gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Clockwise,
    CounterClockwise,
}

impl Handedness {
    /// Derive handedness from the pointing direction and the circle normal.
    ///
    /// An angle of at most 90° (inclusive) between the two is clockwise.
    pub fn between(pointing_direction: Vec3, normal: Vec3) -> Self {
        if pointing_direction.angle_to(normal) <= FRAC_PI_2 {
            Handedness::Clockwise
        } else {
            Handedness::CounterClockwise
        }
    }
}

/// A gesture the sensor classified, with its type-specific geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GestureEvent {
    /// A finger tracing a circle in the air.
    Circle {
        /// Tip position of the tracing finger, sensor space.
        tip_position: Vec3,
        /// Direction the finger points in.
        pointing_direction: Vec3,
        /// Normal of the traced circle.
        normal: Vec3,
    },
    /// A straight-line hand movement.
    Swipe {
        start_position: Vec3,
        position: Vec3,
        direction: Vec3,
        /// Instantaneous speed in mm/s.
        speed: f32,
    },
    /// A quick downward finger tap, like striking a key.
    KeyTap { position: Vec3 },
    /// A quick forward finger tap toward the screen.
    ScreenTap { position: Vec3 },
    /// A type this build does not understand.
    Unknown { type_code: i32 },
}

impl GestureEvent {
    /// Handedness of a circle gesture; `None` for every other type.
    pub fn handedness(&self) -> Option<Handedness> {
        match self {
            GestureEvent::Circle {
                pointing_direction,
                normal,
                ..
            } => Some(Handedness::between(*pointing_direction, *normal)),
            _ => None,
        }
    }
}
