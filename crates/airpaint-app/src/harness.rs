//! In-memory collaborator implementations for replay and testing.
//!
//! Every collaborator records into a shared [`ReplayLedger`] instead of
//! rendering or touching disk, so a replay can be inspected afterwards.

use airpaint_core::{
    Brush, BrushColor, BrushShape, DrawEvent, FeedbackCircle, IconId, Illustrator, ImageHandler,
    ProximityMenu, UserInterfaceState,
};
use kurbo::Size;
use log::debug;
use peniko::Color;
use std::cell::RefCell;
use std::rc::Rc;

/// Frames a confirmation icon stays on screen during replay.
const ICON_HOLD_FRAMES: u32 = 30;

/// Shared observation state for the replay collaborators.
#[derive(Debug, Default)]
pub struct ReplayLedger {
    pub strokes: Vec<DrawEvent>,
    pub feedback_circles: usize,
    pub icons: Vec<IconId>,
    pub saves: usize,
    pub mode_changes: usize,
    pub background_transparent: bool,
    icon_frames_remaining: u32,
}

impl ReplayLedger {
    /// Advance the transient icon feedback by one frame.
    pub fn tick_icon(&mut self) {
        self.icon_frames_remaining = self.icon_frames_remaining.saturating_sub(1);
    }

    pub fn icon_feedback_active(&self) -> bool {
        self.icon_frames_remaining > 0
    }

    fn show_icon(&mut self, icon: IconId) {
        self.icons.push(icon);
        self.icon_frames_remaining = ICON_HOLD_FRAMES;
    }
}

/// Handle shared between the replay loop and the collaborators.
pub type SharedLedger = Rc<RefCell<ReplayLedger>>;

pub fn new_ledger() -> SharedLedger {
    Rc::new(RefCell::new(ReplayLedger::default()))
}

/// Illustrator that collects batches instead of painting them.
pub struct CanvasLog {
    ledger: SharedLedger,
}

impl CanvasLog {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }
}

impl Illustrator for CanvasLog {
    fn add_temporary_circles(&mut self, circles: Vec<FeedbackCircle>) {
        self.ledger.borrow_mut().feedback_circles += circles.len();
    }

    fn add_draw_events(&mut self, events: Vec<DrawEvent>) {
        debug!("illustrator received {} draw event(s)", events.len());
        self.ledger.borrow_mut().strokes.extend(events);
    }

    fn add_menu(&mut self, _menu: &ProximityMenu) {
        debug!("proximity menu registered");
    }
}

/// Brush that cycles the stock palette and shape set.
#[derive(Debug, Default)]
pub struct CyclingBrush {
    color: BrushColor,
    shape: BrushShape,
    filled: bool,
}

impl CyclingBrush {
    pub fn new(filled: bool) -> Self {
        Self {
            filled,
            ..Self::default()
        }
    }
}

impl Brush for CyclingBrush {
    fn cycle_color(&mut self) {
        self.color = self.color.next();
    }

    fn cycle_shape(&mut self) {
        self.shape = self.shape.next();
    }

    fn color(&self) -> BrushColor {
        self.color
    }

    fn shape(&self) -> BrushShape {
        self.shape
    }

    fn filled_shapes_enabled(&self) -> bool {
        self.filled
    }
}

/// Image handler that records icon loads and saves.
///
/// Icon feedback stays active for a fixed number of frames after a load, so
/// gesture suppression is observable in replays.
pub struct IconRecorder {
    ledger: SharedLedger,
}

impl IconRecorder {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }
}

impl ImageHandler for IconRecorder {
    fn load_icon(&mut self, icon: IconId) {
        debug!("icon feedback {icon:?}");
        self.ledger.borrow_mut().show_icon(icon);
    }

    fn icon_feedback_active(&self) -> bool {
        self.ledger.borrow().icon_feedback_active()
    }

    fn save_canvas(&mut self, size: Size, background: Color) {
        debug!("canvas save requested ({size:?}, background {background:?})");
        self.ledger.borrow_mut().saves += 1;
    }
}

/// UI state backed by the ledger.
pub struct ReplayUiState {
    ledger: SharedLedger,
}

impl ReplayUiState {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }
}

impl UserInterfaceState for ReplayUiState {
    fn background_is_transparent(&self) -> bool {
        self.ledger.borrow().background_transparent
    }

    fn background_color(&self) -> Color {
        Color::from_rgb8(255, 255, 255)
    }

    fn notify_mode_changed(&mut self) {
        self.ledger.borrow_mut().mode_changes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_feedback_decays() {
        let ledger = new_ledger();
        ledger.borrow_mut().show_icon(IconId::ColorRed);
        assert!(ledger.borrow().icon_feedback_active());

        for _ in 0..ICON_HOLD_FRAMES {
            ledger.borrow_mut().tick_icon();
        }
        assert!(!ledger.borrow().icon_feedback_active());
    }

    #[test]
    fn test_brush_cycles() {
        let mut brush = CyclingBrush::default();
        assert_eq!(brush.color(), BrushColor::Black);
        brush.cycle_color();
        assert_eq!(brush.color(), BrushColor::Red);
        brush.cycle_shape();
        assert_eq!(brush.shape(), BrushShape::Circle);
    }
}
