//! Game-mode resource ownership.
//!
//! Entering game mode allocates everything the mode needs: the static ground
//! slab, a fresh tower, and the kinematic hand with its per-frame tick
//! registration. Leaving game mode releases all of it explicitly. Nothing
//! survives a mode switch except the handedness selection, which lives in
//! the app context.

use rand::Rng;

use physics::{BodyPose, PhysicsWorld, RigidBodyHandle};

use crate::error::GameError;
use crate::frame::{FrameScheduler, TickId};
use crate::hand::{HandAsset, HandTracker};
use crate::input::Handedness;
use crate::settings;
use crate::tower::{Tower, TowerKey, TowerLayout};

pub struct GameSession {
    ground: RigidBodyHandle,
    tower: Tower,
    hand_body: RigidBodyHandle,
    hand_tick: TickId,
    next_key: u64,
}

impl GameSession {
    /// Enter game mode: register ground, tower, and hand with the world and
    /// the hand tracker with the scheduler.
    pub fn begin<R: Rng>(
        world: &mut PhysicsWorld,
        scheduler: &mut FrameScheduler,
        handedness: Handedness,
        hand_mesh: Option<HandAsset>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let ground = world.insert_static_box(
            settings::half_extents(settings::GROUND_DIMS),
            BodyPose::from_translation(settings::ground_center()),
        );
        let tower = Tower::build(world, TowerKey(0), TowerLayout::default(), rng)?;

        let tracker = HandTracker::new(world, handedness, hand_mesh);
        let hand_body = tracker.body();
        let hand_tick = scheduler.register(Box::new(tracker));

        log::info!("entered game mode, hand = {handedness:?}");
        Ok(Self {
            ground,
            tower,
            hand_body,
            hand_tick,
            next_key: 1,
        })
    }

    /// Rebuild the tower under a new key: remove the old generation's bodies
    /// and register a fresh set, atomically within this call. The ground and
    /// hand bodies are deliberately untouched.
    pub fn reset_tower<R: Rng>(
        &mut self,
        world: &mut PhysicsWorld,
        rng: &mut R,
    ) -> Result<TowerKey, GameError> {
        let key = TowerKey(self.next_key);
        self.next_key += 1;

        let layout = self.tower.layout();
        self.tower.teardown(world);
        self.tower = Tower::build(world, key, layout, rng)?;
        Ok(key)
    }

    /// Leave game mode: release every body and the hand's tick registration.
    pub fn end(mut self, world: &mut PhysicsWorld, scheduler: &mut FrameScheduler) {
        self.tower.teardown(world);
        world.remove_body(self.ground);
        scheduler.unregister(self.hand_tick);
        world.remove_body(self.hand_body);
        log::info!("left game mode");
    }

    #[inline]
    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    #[inline]
    pub fn ground(&self) -> RigidBodyHandle {
        self.ground
    }

    #[inline]
    pub fn hand_body(&self) -> RigidBodyHandle {
        self.hand_body
    }
}
