//! Interfaces to the surrounding painting application.
//!
//! The frame processor owns its collaborators as trait objects; the traits
//! describe exactly the call surface the core needs, and implementations can
//! render, persist, or merely record.

use crate::feedback::FeedbackCircle;
use crate::menu::ProximityMenu;
use crate::stroke::DrawEvent;
use kurbo::Size;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Brush colors the painting application cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushColor {
    #[default]
    Black,
    Red,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
    Orange,
    White,
}

impl BrushColor {
    /// Cycle to the next color.
    pub fn next(self) -> Self {
        match self {
            BrushColor::Black => BrushColor::Red,
            BrushColor::Red => BrushColor::Yellow,
            BrushColor::Yellow => BrushColor::Green,
            BrushColor::Green => BrushColor::Aqua,
            BrushColor::Aqua => BrushColor::Blue,
            BrushColor::Blue => BrushColor::Purple,
            BrushColor::Purple => BrushColor::Orange,
            BrushColor::Orange => BrushColor::White,
            BrushColor::White => BrushColor::Black,
        }
    }
}

/// Brush shapes the painting application cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushShape {
    #[default]
    Line,
    Circle,
    Rectangle,
    Triangle,
}

impl BrushShape {
    /// Cycle to the next shape.
    pub fn next(self) -> Self {
        match self {
            BrushShape::Line => BrushShape::Circle,
            BrushShape::Circle => BrushShape::Rectangle,
            BrushShape::Rectangle => BrushShape::Triangle,
            BrushShape::Triangle => BrushShape::Line,
        }
    }
}

/// Icons shown as transient confirmation feedback after a mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconId {
    ColorBlack,
    ColorRed,
    ColorYellow,
    ColorGreen,
    ColorAqua,
    ColorBlue,
    ColorPurple,
    ColorOrange,
    ShapeLine,
    ShapeCircle,
    ShapeFilledCircle,
    ShapeRectangle,
    ShapeFilledRectangle,
    ShapeTriangle,
    ShapeFilledTriangle,
}

/// Consumer of finished draw events and live feedback geometry.
pub trait Illustrator {
    /// Queue one frame's batch of hover feedback circles.
    fn add_temporary_circles(&mut self, circles: Vec<FeedbackCircle>);

    /// Queue one frame's batch of finalized draw events.
    fn add_draw_events(&mut self, events: Vec<DrawEvent>);

    /// Register an overlay menu to render above the canvas.
    fn add_menu(&mut self, menu: &ProximityMenu);
}

/// Current brush state.
pub trait Brush {
    fn cycle_color(&mut self);
    fn cycle_shape(&mut self);
    fn color(&self) -> BrushColor;
    fn shape(&self) -> BrushShape;
    fn filled_shapes_enabled(&self) -> bool;
}

/// Icon feedback and canvas export.
pub trait ImageHandler {
    /// Show a transient confirmation icon.
    fn load_icon(&mut self, icon: IconId);

    /// Whether a confirmation icon is currently on screen.
    fn icon_feedback_active(&self) -> bool;

    /// Render and persist the canvas with the given background.
    fn save_canvas(&mut self, size: Size, background: Color);
}

/// Surrounding UI state the dispatcher consults.
pub trait UserInterfaceState {
    fn background_is_transparent(&self) -> bool;
    fn background_color(&self) -> Color;

    /// Signal that the brush mode changed, so the UI can refresh.
    fn notify_mode_changed(&mut self);
}
