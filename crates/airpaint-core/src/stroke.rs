//! Draw-event lifecycle: pending strokes, bridging segments, aging.
//!
//! A contact sample alone cannot distinguish a resting finger from an active
//! stroke, so commitment is deferred: the authoritative (finalizable) event
//! stays open while short-lived bridging segments are emitted for each
//! refreshed contact, and a hover transition is the unambiguous end-of-stroke
//! signal.

use crate::identity::StrokeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stroke fragment correlated across sensor frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawEvent {
    id: StrokeId,
    start: Point,
    end: Option<Point>,
    finalizable: bool,
    age: u32,
    max_age: u32,
}

impl DrawEvent {
    fn open(id: StrokeId, start: Point, finalizable: bool, max_age: u32) -> Self {
        Self {
            id,
            start,
            end: None,
            finalizable,
            age: 0,
            max_age,
        }
    }

    /// Identity of the stroke this fragment belongs to.
    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// End point; absent while the event is still open.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether this is the authoritative stroke event rather than a bridging
    /// segment.
    pub fn is_finalizable(&self) -> bool {
        self.finalizable
    }

    fn close(&mut self, end: Point) {
        self.end = Some(end);
    }

    fn refresh(&mut self) {
        self.age = 0;
    }

    fn tick(&mut self) {
        self.age += 1;
    }

    fn expired(&self) -> bool {
        self.age > self.max_age
    }
}

/// What a contact sample did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// A new stroke opened. The caller must hold the current sensor frame
    /// until the stroke finalizes; advancing would orphan the correlation.
    StrokeBegun,
    /// An existing stroke was refreshed; a bridging segment may have been
    /// emitted.
    Continued,
}

/// Owns the two identity-keyed event collections and advances them per frame.
///
/// A bridging event only ever exists alongside its parent finalizable event,
/// and each event lives in exactly the collection matching its kind.
#[derive(Debug, Default)]
pub struct StrokeTracker {
    finalizable: HashMap<StrokeId, DrawEvent>,
    bridging: HashMap<StrokeId, DrawEvent>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a contact sample for an identity.
    ///
    /// First contact opens the finalizable event. Each further contact
    /// refreshes its age and alternates the bridging segment: close and emit
    /// the open one, or open a new one anchored at the stroke's original
    /// start.
    pub fn contact(
        &mut self,
        id: StrokeId,
        point: Point,
        max_age: u32,
        emitted: &mut Vec<DrawEvent>,
    ) -> ContactOutcome {
        match self.finalizable.get_mut(&id) {
            None => {
                self.finalizable
                    .insert(id, DrawEvent::open(id, point, true, max_age));
                ContactOutcome::StrokeBegun
            }
            Some(event) => {
                event.refresh();
                if let Some(mut bridge) = self.bridging.remove(&id) {
                    bridge.close(point);
                    emitted.push(bridge);
                } else {
                    let bridge = DrawEvent::open(id, event.start(), false, max_age);
                    self.bridging.insert(id, bridge);
                }
                ContactOutcome::Continued
            }
        }
    }

    /// Apply a hover sample for an identity: finalize its pending stroke.
    ///
    /// Returns the closed event, ready for emission. Any bridging segment
    /// still open for the identity is left to expire through aging.
    pub fn hover_release(&mut self, id: StrokeId, point: Point) -> Option<DrawEvent> {
        let mut event = self.finalizable.remove(&id)?;
        event.close(point);
        Some(event)
    }

    /// End-of-frame aging; entries past their lifespan are dropped without
    /// emission.
    pub fn advance_age(&mut self) {
        for events in [&mut self.finalizable, &mut self.bridging] {
            for event in events.values_mut() {
                event.tick();
            }
            events.retain(|_, event| !event.expired());
        }
    }

    pub fn has_pending(&self, id: StrokeId) -> bool {
        self.finalizable.contains_key(&id)
    }

    pub fn has_bridging(&self, id: StrokeId) -> bool {
        self.bridging.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.finalizable.len()
    }

    pub fn bridging_count(&self) -> usize {
        self.bridging.len()
    }

    /// True when no stroke state is being tracked at all.
    pub fn is_idle(&self) -> bool {
        self.finalizable.is_empty() && self.bridging.is_empty()
    }
}
