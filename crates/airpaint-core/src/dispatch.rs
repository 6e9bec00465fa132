//! Gesture classification into UI commands.
//!
//! Classification is pure; applying the resulting commands to the brush,
//! image handler, and menu is the frame processor's job.

use crate::collaborators::{BrushColor, BrushShape, IconId};
use crate::config::PipelineConfig;
use crate::gesture::{GestureEvent, Handedness};
use log::{debug, trace};

/// A UI command produced by classifying a single gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    CycleShape,
    CycleColor,
    Save,
    HideMenu,
    ToggleMenu,
}

/// Classify one gesture into a UI command, if it maps to one.
///
/// Clockwise circles select a command by the quadrant of the tip position:
/// sign of x against the sensor center, and the tip height against the two
/// configured command bands. Counter-clockwise circles toggle the proximity
/// menu regardless of position.
pub fn classify(gesture: &GestureEvent, config: &PipelineConfig) -> Option<UiCommand> {
    match gesture {
        GestureEvent::Circle {
            tip_position,
            pointing_direction,
            normal,
        } => match Handedness::between(*pointing_direction, *normal) {
            Handedness::CounterClockwise => Some(UiCommand::ToggleMenu),
            Handedness::Clockwise => {
                let left = tip_position.x < 0.0;
                let upper = tip_position.y < config.upper_band;
                let lower = tip_position.y > config.lower_band;
                match (left, upper, lower) {
                    (true, true, _) => Some(UiCommand::CycleShape),
                    (true, _, true) => Some(UiCommand::CycleColor),
                    (false, _, true) => Some(UiCommand::Save),
                    (false, true, _) => Some(UiCommand::HideMenu),
                    // Tip in the dead band between the two heights.
                    _ => None,
                }
            }
        },
        GestureEvent::Swipe {
            start_position,
            position,
            speed,
            ..
        } => {
            let travel = start_position.distance(*position);
            if f64::from(*speed) >= config.swipe_min_velocity
                && travel >= config.swipe_min_length
            {
                Some(UiCommand::CycleColor)
            } else {
                trace!(
                    "swipe below tuning thresholds (travel {travel:.0}mm, speed {speed:.0}mm/s), ignored"
                );
                None
            }
        }
        GestureEvent::KeyTap { .. } => Some(UiCommand::Save),
        // Recognized but not bound to a command yet.
        GestureEvent::ScreenTap { .. } => None,
        GestureEvent::Unknown { type_code } => {
            debug!("unknown gesture type {type_code}, ignored");
            None
        }
    }
}

/// Confirmation icon for a brush color; white has none.
pub fn color_icon(color: BrushColor) -> Option<IconId> {
    match color {
        BrushColor::Black => Some(IconId::ColorBlack),
        BrushColor::Red => Some(IconId::ColorRed),
        BrushColor::Yellow => Some(IconId::ColorYellow),
        BrushColor::Green => Some(IconId::ColorGreen),
        BrushColor::Aqua => Some(IconId::ColorAqua),
        BrushColor::Blue => Some(IconId::ColorBlue),
        BrushColor::Purple => Some(IconId::ColorPurple),
        BrushColor::Orange => Some(IconId::ColorOrange),
        BrushColor::White => None,
    }
}

/// Confirmation icon for a brush shape, honoring the filled-shapes setting.
pub fn shape_icon(shape: BrushShape, filled: bool) -> IconId {
    match (shape, filled) {
        (BrushShape::Line, _) => IconId::ShapeLine,
        (BrushShape::Circle, false) => IconId::ShapeCircle,
        (BrushShape::Circle, true) => IconId::ShapeFilledCircle,
        (BrushShape::Rectangle, false) => IconId::ShapeRectangle,
        (BrushShape::Rectangle, true) => IconId::ShapeFilledRectangle,
        (BrushShape::Triangle, false) => IconId::ShapeTriangle,
        (BrushShape::Triangle, true) => IconId::ShapeFilledTriangle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::Vec3;

    fn clockwise_circle_at(x: f64, y: f64) -> GestureEvent {
        GestureEvent::Circle {
            tip_position: Vec3::new(x, y, 0.0),
            pointing_direction: Vec3::new(0.0, 0.0, -1.0),
            normal: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    fn counter_clockwise_circle() -> GestureEvent {
        GestureEvent::Circle {
            tip_position: Vec3::ZERO,
            pointing_direction: Vec3::new(0.0, 0.0, -1.0),
            normal: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn test_clockwise_quadrants() {
        let config = PipelineConfig::default();
        assert_eq!(
            classify(&clockwise_circle_at(-10.0, 100.0), &config),
            Some(UiCommand::CycleShape)
        );
        assert_eq!(
            classify(&clockwise_circle_at(-10.0, 300.0), &config),
            Some(UiCommand::CycleColor)
        );
        assert_eq!(
            classify(&clockwise_circle_at(10.0, 300.0), &config),
            Some(UiCommand::Save)
        );
        assert_eq!(
            classify(&clockwise_circle_at(10.0, 100.0), &config),
            Some(UiCommand::HideMenu)
        );
    }

    #[test]
    fn test_dead_band_produces_no_command() {
        let config = PipelineConfig::default();
        assert_eq!(classify(&clockwise_circle_at(-10.0, 200.0), &config), None);
        assert_eq!(classify(&clockwise_circle_at(10.0, 200.0), &config), None);
    }

    #[test]
    fn test_counter_clockwise_toggles_menu() {
        let config = PipelineConfig::default();
        assert_eq!(
            classify(&counter_clockwise_circle(), &config),
            Some(UiCommand::ToggleMenu)
        );
    }

    #[test]
    fn test_swipe_cycles_color_when_past_tuning() {
        let config = PipelineConfig::default();
        let swipe = GestureEvent::Swipe {
            start_position: Vec3::ZERO,
            position: Vec3::new(200.0, 0.0, 0.0),
            direction: Vec3::new(1.0, 0.0, 0.0),
            speed: 800.0,
        };
        assert_eq!(classify(&swipe, &config), Some(UiCommand::CycleColor));
    }

    #[test]
    fn test_slow_or_short_swipe_is_ignored() {
        let config = PipelineConfig::default();
        let slow = GestureEvent::Swipe {
            start_position: Vec3::ZERO,
            position: Vec3::new(200.0, 0.0, 0.0),
            direction: Vec3::new(1.0, 0.0, 0.0),
            speed: 100.0,
        };
        let short = GestureEvent::Swipe {
            start_position: Vec3::ZERO,
            position: Vec3::new(50.0, 0.0, 0.0),
            direction: Vec3::new(1.0, 0.0, 0.0),
            speed: 800.0,
        };
        assert_eq!(classify(&slow, &config), None);
        assert_eq!(classify(&short, &config), None);
    }

    #[test]
    fn test_taps() {
        let config = PipelineConfig::default();
        let key_tap = GestureEvent::KeyTap {
            position: Vec3::ZERO,
        };
        let screen_tap = GestureEvent::ScreenTap {
            position: Vec3::ZERO,
        };
        assert_eq!(classify(&key_tap, &config), Some(UiCommand::Save));
        assert_eq!(classify(&screen_tap, &config), None);
    }

    #[test]
    fn test_unknown_gesture_is_ignored() {
        let config = PipelineConfig::default();
        assert_eq!(
            classify(&GestureEvent::Unknown { type_code: 99 }, &config),
            None
        );
    }

    #[test]
    fn test_every_color_but_white_has_an_icon() {
        let mut color = BrushColor::Black;
        for _ in 0..9 {
            match color {
                BrushColor::White => assert!(color_icon(color).is_none()),
                _ => assert!(color_icon(color).is_some()),
            }
            color = color.next();
        }
    }

    #[test]
    fn test_filled_setting_selects_filled_icons() {
        assert_eq!(shape_icon(BrushShape::Line, true), IconId::ShapeLine);
        assert_eq!(
            shape_icon(BrushShape::Circle, true),
            IconId::ShapeFilledCircle
        );
        assert_eq!(
            shape_icon(BrushShape::Triangle, false),
            IconId::ShapeTriangle
        );
    }
}
