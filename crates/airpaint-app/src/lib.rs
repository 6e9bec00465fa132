//! Airpaint replay shell.
//!
//! Feeds recorded sensor sessions through the core frame processor against
//! in-memory collaborators, for debugging pipelines without a live sensor.

pub mod harness;
pub mod replay;

pub use harness::{CanvasLog, CyclingBrush, IconRecorder, ReplayLedger, ReplayUiState};
pub use replay::{replay_session, run, ReplaySummary};
