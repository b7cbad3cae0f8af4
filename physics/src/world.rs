//! The rigid-body registry and per-frame stepping.
//!
//! `PhysicsWorld` owns every Rapier set and pipeline needed for full dynamics.
//! The game core mutates it in exactly three places: tower build/teardown,
//! ground/hand setup on mode entry and exit, and the per-frame step. All of
//! those run on the single-threaded frame loop, so no interior locking exists.
//!
//! Conventions
//! - All colliders are cuboids; the game is boxes all the way down.
//! - Box sizes are half-extents in meters.
//! - Kinematic poses are applied via `set_next_kinematic_position` so Rapier can
//!   derive a velocity for collision response against the sticks.

use std::num::NonZeroUsize;

use rapier3d::prelude::*;

use crate::settings::PhysicsSettings;
use crate::types::BodyPose;

pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    gravity: Vector<f32>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    contact_friction: f32,
}

impl PhysicsWorld {
    pub fn new(settings: PhysicsSettings) -> Self {
        let mut params = IntegrationParameters::default();
        if let Some(iterations) = NonZeroUsize::new(settings.solver_iterations) {
            params.num_solver_iterations = iterations.into();
        }
        params.normalized_allowed_linear_error = settings.solver_tolerance;

        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: settings.gravity,
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            contact_friction: settings.contact_friction,
        }
    }

    /// Insert a force-integrated box with the given mass (a stick).
    pub fn insert_dynamic_box(
        &mut self,
        half_extents: Vector<f32>,
        mass: f32,
        pose: BodyPose,
    ) -> RigidBodyHandle {
        self.insert_box(RigidBodyBuilder::dynamic(), half_extents, mass, pose)
    }

    /// Insert a zero-mass box that never moves (the ground slab).
    pub fn insert_static_box(
        &mut self,
        half_extents: Vector<f32>,
        pose: BodyPose,
    ) -> RigidBodyHandle {
        self.insert_box(RigidBodyBuilder::fixed(), half_extents, 0.0, pose)
    }

    /// Insert a box whose pose is driven externally each frame (the hand).
    /// It collides with dynamic bodies but is excluded from force integration.
    pub fn insert_kinematic_box(
        &mut self,
        half_extents: Vector<f32>,
        pose: BodyPose,
    ) -> RigidBodyHandle {
        self.insert_box(
            RigidBodyBuilder::kinematic_position_based(),
            half_extents,
            0.0,
            pose,
        )
    }

    fn insert_box(
        &mut self,
        builder: RigidBodyBuilder,
        half_extents: Vector<f32>,
        mass: f32,
        pose: BodyPose,
    ) -> RigidBodyHandle {
        let body = builder.pose(pose.to_isometry()).build();
        let handle = self.bodies.insert(body);

        let mut collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .friction(self.contact_friction);
        if mass > 0.0 {
            collider = collider.mass(mass);
        }
        self.colliders
            .insert_with_parent(collider.build(), handle, &mut self.bodies);
        handle
    }

    /// Remove a body and its collider. Returns false if the handle was stale.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Queue the target pose for a kinematic body; the next `step` applies it.
    /// A stale handle is ignored.
    pub fn set_kinematic_pose(&mut self, handle: RigidBodyHandle, pose: BodyPose) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_next_kinematic_position(pose.to_isometry());
        }
    }

    pub fn body_pose(&self, handle: RigidBodyHandle) -> Option<BodyPose> {
        self.bodies
            .get(handle)
            .map(|body| BodyPose::from_isometry(body.position()))
    }

    pub fn linear_velocity(&self, handle: RigidBodyHandle) -> Option<Vector<f32>> {
        self.bodies.get(handle).map(|body| *body.linvel())
    }

    #[inline]
    pub fn contains(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.params.dt = dt;

        // Default hooks/events: the game reads poses back, it does not need
        // contact callbacks.
        let hooks = ();
        let events = ();

        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &hooks,
            &events,
        );
    }
}
