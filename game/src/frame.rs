//! Explicit per-frame tick scheduling.
//!
//! Per-frame side effects (today: the hand tracker's pose copy) are
//! registered with a scheduler and invoked once per frame, before the
//! physics step consumes kinematic transforms for collision. Registration
//! and removal are tied to scene-mode transitions, which are serialized by
//! the single-threaded frame loop.

use physics::PhysicsWorld;

use crate::input::ControllerInput;

/// Work executed once per frame tick. Synchronous and non-blocking.
pub trait FrameTick {
    fn tick(&mut self, world: &mut PhysicsWorld, input: &dyn ControllerInput);
}

/// Identifier for a registered tick, used to unregister on mode exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickId(u64);

#[derive(Default)]
pub struct FrameScheduler {
    next_id: u64,
    ticks: Vec<(TickId, Box<dyn FrameTick>)>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tick: Box<dyn FrameTick>) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.ticks.push((id, tick));
        id
    }

    /// Returns false if the id was already unregistered.
    pub fn unregister(&mut self, id: TickId) -> bool {
        let before = self.ticks.len();
        self.ticks.retain(|(tick_id, _)| *tick_id != id);
        self.ticks.len() != before
    }

    /// Run every registered tick in registration order.
    pub fn run(&mut self, world: &mut PhysicsWorld, input: &dyn ControllerInput) {
        for (_, tick) in &mut self.ticks {
            tick.tick(world, input);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
