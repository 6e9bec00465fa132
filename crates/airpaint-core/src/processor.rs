//! Per-frame orchestration: draw input, hover feedback, gesture dispatch.

use crate::collaborators::{Brush, Illustrator, ImageHandler, UserInterfaceState};
use crate::config::PipelineConfig;
use crate::dispatch::{classify, color_icon, shape_icon, UiCommand};
use crate::feedback::{distance_to_color, FeedbackCircle};
use crate::gesture::GestureEvent;
use crate::identity::IdentityBinder;
use crate::menu::ProximityMenu;
use crate::sensor::{PointerSample, SensorFrame};
use crate::stroke::{ContactOutcome, StrokeTracker};
use kurbo::Size;
use log::{debug, trace};
use peniko::Color;

/// Result of processing one sensor frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameDisposition {
    /// The caller must not advance to a new sensor frame while this is set:
    /// a contact stroke is being correlated across consecutive frames, and a
    /// skipped frame would orphan its bridging segment.
    pub hold_frame: bool,
    /// Draw events finalized and delivered this frame.
    pub finalized: usize,
    /// Hover feedback circles delivered this frame.
    pub feedback_circles: usize,
}

/// Interprets sensor frames into strokes and UI commands.
///
/// Owns all per-frame state and its collaborators exclusively; every mutation
/// happens inside [`process_frame`](Self::process_frame), so no locking is
/// needed under a single-frame-at-a-time contract.
pub struct FrameProcessor {
    canvas_size: Size,
    config: PipelineConfig,
    binder: IdentityBinder,
    tracker: StrokeTracker,
    menu: ProximityMenu,
    illustrator: Box<dyn Illustrator>,
    brush: Box<dyn Brush>,
    images: Box<dyn ImageHandler>,
    ui: Box<dyn UserInterfaceState>,
}

impl FrameProcessor {
    /// Build a processor and register the proximity menu with the
    /// illustrator.
    pub fn new(
        canvas_size: Size,
        config: PipelineConfig,
        mut illustrator: Box<dyn Illustrator>,
        brush: Box<dyn Brush>,
        images: Box<dyn ImageHandler>,
        ui: Box<dyn UserInterfaceState>,
    ) -> Self {
        let menu = ProximityMenu::new(canvas_size);
        illustrator.add_menu(&menu);
        Self {
            canvas_size,
            config,
            binder: IdentityBinder::new(),
            tracker: StrokeTracker::new(),
            menu,
            illustrator,
            brush,
            images,
            ui,
        }
    }

    /// Per-frame entry point.
    ///
    /// While the proximity menu is visible the draw pipeline is bypassed
    /// entirely; gestures are still dispatched, which is how the menu gets
    /// toggled back off.
    pub fn process_frame(&mut self, frame: &SensorFrame) -> FrameDisposition {
        let disposition = if self.menu.is_visible() {
            FrameDisposition::default()
        } else {
            self.process_draw_input(&frame.pointers)
        };
        self.dispatch_gestures(&frame.gestures);
        disposition
    }

    fn process_draw_input(&mut self, pointers: &[PointerSample]) -> FrameDisposition {
        let mut circles = Vec::new();
        let mut emitted = Vec::new();
        let mut hold_frame = false;

        for sample in pointers {
            let Some(distance) = sample.touch_distance else {
                trace!(
                    "pointer {} sample without distance, skipped",
                    sample.pointer_id
                );
                continue;
            };
            if !sample.zone.is_active() {
                continue;
            }
            let point = sample.canvas_position(self.canvas_size);
            let id = self.binder.resolve(sample.pointer_id);

            if distance > 0.0 {
                circles.push(FeedbackCircle {
                    center: point,
                    radius: self.config.feedback_circle_radius,
                    color: distance_to_color(distance),
                    weight: self.config.feedback_circle_weight,
                });
                if let Some(event) = self.tracker.hover_release(id, point) {
                    trace!("stroke {id} finalized at {point:?}");
                    emitted.push(event);
                    self.binder.unbind(sample.pointer_id);
                }
            }
            if distance < 0.0 {
                hold_frame = true;
                let outcome =
                    self.tracker
                        .contact(id, point, self.config.stroke_max_age, &mut emitted);
                if outcome == ContactOutcome::StrokeBegun {
                    trace!("stroke {id} begun at {point:?}");
                    self.binder.bind(sample.pointer_id, id);
                }
            }
        }

        let disposition = FrameDisposition {
            hold_frame,
            finalized: emitted.len(),
            feedback_circles: circles.len(),
        };
        if !circles.is_empty() {
            self.illustrator.add_temporary_circles(circles);
        }
        if !emitted.is_empty() {
            self.illustrator.add_draw_events(emitted);
        }
        self.tracker.advance_age();
        disposition
    }

    fn dispatch_gestures(&mut self, gestures: &[GestureEvent]) {
        // A gesture must not fire while a confirmation icon is on screen.
        if self.images.icon_feedback_active() {
            return;
        }
        for gesture in gestures {
            if let Some(command) = classify(gesture, &self.config) {
                debug!("gesture dispatched as {command:?}");
                self.apply_command(command);
            }
        }
    }

    fn apply_command(&mut self, command: UiCommand) {
        match command {
            UiCommand::CycleColor => self.cycle_color(),
            UiCommand::CycleShape => self.cycle_shape(),
            UiCommand::Save => self.save_canvas(),
            UiCommand::HideMenu => self.menu.hide(),
            UiCommand::ToggleMenu => self.menu.toggle_visibility(),
        }
    }

    fn cycle_color(&mut self) {
        self.brush.cycle_color();
        self.ui.notify_mode_changed();
        if let Some(icon) = color_icon(self.brush.color()) {
            self.images.load_icon(icon);
        }
    }

    fn cycle_shape(&mut self) {
        self.brush.cycle_shape();
        self.ui.notify_mode_changed();
        let icon = shape_icon(self.brush.shape(), self.brush.filled_shapes_enabled());
        self.images.load_icon(icon);
    }

    fn save_canvas(&mut self) {
        let rgba = self.ui.background_color().to_rgba8();
        let alpha = if self.ui.background_is_transparent() {
            0
        } else {
            255
        };
        let background = Color::from_rgba8(rgba.r, rgba.g, rgba.b, alpha);
        self.images.save_canvas(self.canvas_size, background);
    }

    /// Resize notification from the shell; rebuilds the menu guides.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = size;
        self.menu.resize(size);
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn menu(&self) -> &ProximityMenu {
        &self.menu
    }

    /// Read access to the stroke lifecycle state, for diagnostics.
    pub fn tracker(&self) -> &StrokeTracker {
        &self.tracker
    }
}
