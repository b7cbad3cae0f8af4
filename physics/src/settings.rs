/*!
Simulation settings and tolerances.

These constants centralize the solver parameters the host hands to the
physics step. Keeping them together makes tuning easier and keeps the
world construction free of magic numbers.

Notes
- Distances are in meters, time in seconds.
- The defaults reproduce the feel the game was tuned against: soft gravity,
  many solver iterations, and a very slippery default contact.
*/

use crate::types::Vec3;

/// Downward gravity used by the game world (m/s^2). Softer than Earth gravity
/// so toppling sticks stay readable in VR.
pub const DEFAULT_GRAVITY_Y: f32 = -6.0;

/// Velocity solver iterations per step. High for stable tall stacks.
pub const DEFAULT_SOLVER_ITERATIONS: usize = 20;

/// Solver convergence tolerance (meters of allowed residual penetration).
pub const DEFAULT_SOLVER_TOLERANCE: f32 = 1.0e-4;

/// Friction coefficient applied to every collider. Nearly frictionless so
/// sticks slide out of the stack instead of dragging their neighbors.
pub const DEFAULT_CONTACT_FRICTION: f32 = 0.003;

/// Fallback timestep when the host presentation clock supplies none (seconds).
pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;

/// Host-configurable parameters for a [`crate::PhysicsWorld`].
#[derive(Clone, Copy, Debug)]
pub struct PhysicsSettings {
    /// World gravity vector (m/s^2).
    pub gravity: Vec3,
    /// Velocity solver iterations per step (clamped to at least 1).
    pub solver_iterations: usize,
    /// Allowed solver residual (meters).
    pub solver_tolerance: f32,
    /// Friction applied to every collider this world creates.
    pub contact_friction: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, DEFAULT_GRAVITY_Y, 0.0),
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            solver_tolerance: DEFAULT_SOLVER_TOLERANCE,
            contact_friction: DEFAULT_CONTACT_FRICTION,
        }
    }
}
