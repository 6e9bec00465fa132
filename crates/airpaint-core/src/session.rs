//! Recorded sensor sessions: JSON persistence for replay and debugging.

use crate::sensor::SensorFrame;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Session persistence errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// A recorded run of sensor frames, replayable through the frame processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Canvas size at recording time.
    pub canvas_size: Size,
    /// Frames in delivery order.
    pub frames: Vec<SensorFrame>,
}

impl RecordedSession {
    pub fn new(canvas_size: Size) -> Self {
        Self {
            canvas_size,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: SensorFrame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn to_json(&self) -> SessionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SessionError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> SessionResult<Self> {
        serde_json::from_str(json).map_err(|e| SessionError::Serialization(e.to_string()))
    }

    /// Write the session as JSON.
    pub fn save(&self, path: &Path) -> SessionResult<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| SessionError::Io(format!("failed to write {}: {}", path.display(), e)))
    }

    /// Load a session from a JSON file.
    pub fn load(path: &Path) -> SessionResult<Self> {
        if !path.exists() {
            return Err(SessionError::NotFound(path.display().to_string()));
        }
        let json = fs::read_to_string(path)
            .map_err(|e| SessionError::Io(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureEvent;
    use crate::sensor::{PointerSample, TouchZone, Vec3};
    use kurbo::Point;

    fn sample_session() -> RecordedSession {
        let mut session = RecordedSession::new(Size::new(800.0, 600.0));
        session.push(SensorFrame {
            pointers: vec![PointerSample {
                pointer_id: 4,
                normalized: Point::new(0.3, 0.6),
                touch_distance: Some(-0.5),
                zone: TouchZone::Touching,
            }],
            gestures: vec![GestureEvent::KeyTap {
                position: Vec3::new(0.0, 200.0, 0.0),
            }],
        });
        session
    }

    #[test]
    fn test_json_round_trip() {
        let session = sample_session();
        let json = session.to_json().expect("serializes");
        let restored = RecordedSession::from_json(&json).expect("deserializes");

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.canvas_size, session.canvas_size);
        assert_eq!(
            restored.frames[0].pointers[0].touch_distance,
            Some(-0.5)
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");

        let session = sample_session();
        session.save(&path).expect("saves");
        let restored = RecordedSession::load(&path).expect("loads");

        assert_eq!(restored.len(), session.len());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.json");

        match RecordedSession::load(&missing) {
            Err(SessionError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        match RecordedSession::from_json("{ not json") {
            Err(SessionError::Serialization(_)) => {}
            other => panic!("expected Serialization, got {other:?}"),
        }
    }
}
