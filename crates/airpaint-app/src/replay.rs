//! Session replay: drive the frame processor from a recorded session.

use crate::harness::{new_ledger, CanvasLog, CyclingBrush, IconRecorder, ReplayUiState};
use airpaint_core::{FrameProcessor, PipelineConfig, RecordedSession, SessionResult};
use log::info;
use std::fmt;
use std::path::Path;

/// Aggregate outcome of replaying one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: usize,
    /// Frames that requested a hold of the live sensor frame. Replayed frames
    /// are pre-recorded, so the request is counted rather than honored.
    pub held_frames: usize,
    pub strokes: usize,
    pub feedback_circles: usize,
    pub saves: usize,
    pub icons: usize,
    pub mode_changes: usize,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frame(s): {} stroke(s), {} feedback circle(s), {} save(s), \
             {} icon(s), {} mode change(s), {} hold request(s)",
            self.frames,
            self.strokes,
            self.feedback_circles,
            self.saves,
            self.icons,
            self.mode_changes,
            self.held_frames,
        )
    }
}

/// Replay a session through a fresh processor wired to in-memory
/// collaborators.
pub fn replay_session(session: &RecordedSession, config: PipelineConfig) -> ReplaySummary {
    let ledger = new_ledger();
    let mut processor = FrameProcessor::new(
        session.canvas_size,
        config,
        Box::new(CanvasLog::new(ledger.clone())),
        Box::new(CyclingBrush::default()),
        Box::new(IconRecorder::new(ledger.clone())),
        Box::new(ReplayUiState::new(ledger.clone())),
    );

    let mut held_frames = 0;
    let mut feedback_circles = 0;
    for frame in &session.frames {
        let disposition = processor.process_frame(frame);
        if disposition.hold_frame {
            held_frames += 1;
        }
        feedback_circles += disposition.feedback_circles;
        ledger.borrow_mut().tick_icon();
    }

    let ledger = ledger.borrow();
    ReplaySummary {
        frames: session.len(),
        held_frames,
        strokes: ledger.strokes.len(),
        feedback_circles,
        saves: ledger.saves,
        icons: ledger.icons.len(),
        mode_changes: ledger.mode_changes,
    }
}

/// Load a session file and replay it with the default configuration.
pub fn run(path: &Path) -> SessionResult<ReplaySummary> {
    let session = RecordedSession::load(path)?;
    info!(
        "replaying {} frame(s) on a {:.0}x{:.0} canvas",
        session.len(),
        session.canvas_size.width,
        session.canvas_size.height
    );
    Ok(replay_session(&session, PipelineConfig::default()))
}
