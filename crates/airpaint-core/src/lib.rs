//! Airpaint Core Library
//!
//! Interprets a stream of motion-sensor frames — pointer samples with
//! ambiguous proximity readings, plus classified hand gestures — into
//! identity-stable drawing strokes and UI commands for a painting canvas.
//!
//! The heart of the crate is temporal correlation: sensor pointer ids are
//! frame-scoped, so [`IdentityBinder`] rebinds them to durable identities,
//! [`StrokeTracker`] advances each identity's draw-event lifecycle
//! (pending → bridging → finalized or expired), and [`FrameProcessor`]
//! orchestrates both together with gesture dispatch and the proximity-menu
//! gate.

pub mod collaborators;
pub mod config;
pub mod dispatch;
pub mod feedback;
pub mod gesture;
pub mod identity;
pub mod menu;
pub mod processor;
pub mod sensor;
pub mod session;
pub mod stroke;

pub use collaborators::{
    Brush, BrushColor, BrushShape, IconId, Illustrator, ImageHandler, UserInterfaceState,
};
pub use config::PipelineConfig;
pub use dispatch::UiCommand;
pub use feedback::{distance_to_color, FeedbackCircle};
pub use gesture::{GestureEvent, Handedness};
pub use identity::{IdentityBinder, StrokeId};
pub use menu::ProximityMenu;
pub use processor::{FrameDisposition, FrameProcessor};
pub use sensor::{PointerSample, SensorFrame, TouchZone, Vec3};
pub use session::{RecordedSession, SessionError, SessionResult};
pub use stroke::{ContactOutcome, DrawEvent, StrokeTracker};
