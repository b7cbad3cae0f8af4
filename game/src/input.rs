//! Controller-facing input surface.
//!
//! The XR collaborator maintains per-frame snapshots of controller state.
//! This module defines the read side: a non-blocking pose query per hand,
//! the two discrete edge-triggered events, and a finite per-frame queue
//! drained by a single consumer (the app's dispatcher).

use std::collections::VecDeque;

use physics::BodyPose;

/// Which physical controller is bound to the tracked in-world hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

/// De-bounced, edge-triggered controller signals: at most one per physical
/// trigger action, never reordered relative to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Trigger pull. Restarts the tower in game mode; activates the hovered
    /// button in intro mode.
    Select,
    /// Grip squeeze. Returns to the menu from game mode.
    Squeeze,
}

/// Non-blocking view of the XR runtime's controller snapshot for this frame.
pub trait ControllerInput {
    /// Current pose for the given hand, or `None` when it is not tracked
    /// this frame. Absence is not an error; callers hold the last pose.
    fn pose(&self, hand: Handedness) -> Option<BodyPose>;
}

/// Finite per-frame event queue with single-consumer dispatch.
///
/// The host pushes events as they fire (possibly between frames); the app
/// drains the queue once per tick and dispatches each event exactly once to
/// the active mode's handler.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<ControllerEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ControllerEvent) {
        self.events.push_back(event);
    }

    /// Take every queued event in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<ControllerEvent> {
        self.events.drain(..).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
