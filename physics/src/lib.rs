//! Rapier-based dynamics world for the stick-tower game core.
//!
//! This crate is the one place that talks to the physics engine. The game crate
//! registers boxes (dynamic sticks, a fixed ground slab, a kinematic hand) and
//! steps the simulation once per frame; everything else (layout, interaction,
//! scene state) lives upstream.
//!
//! Design goals
//! - Explicit registry: bodies are inserted and removed by handle, never
//!   implicitly reconciled. Teardown is an auditable operation.
//! - Query-focused surface: pose and velocity reads for rendering and tests,
//!   a settable pose for kinematic bodies, nothing else leaks out.

// Re-export Rapier so downstream crates can use Rapier types (handles, math)
// without needing to depend on `rapier3d` directly.
pub use rapier3d;

pub mod settings;
pub mod types;
pub mod world;

pub use rapier3d::prelude::RigidBodyHandle;
pub use settings::PhysicsSettings;
pub use types::{BodyPose, Quat, Vec3};
pub use world::PhysicsWorld;
