//! Procedural stick-tower construction.
//!
//! A tower is 10 rows of 3 dynamic boxes in the classic alternating pattern:
//! even rows lay their sticks long-axis along X, odd rows are turned 90
//! degrees about the vertical axis. Rows rise by the stick height; within a
//! row the three sticks sit at lateral slots {-1, 0, +1} spread by the stick
//! depth, perpendicular to the row's long axis.
//!
//! Ownership is arena-style: a build registers a fresh set of body handles,
//! a teardown releases all of them. Successive generations are distinguished
//! by an opaque [`TowerKey`] so dependent systems can discard stale state
//! instead of mutating it. Sticks are never added or removed individually.

use rand::Rng;

use physics::{BodyPose, PhysicsWorld, RigidBodyHandle, Vec3};

use crate::error::GameError;
use crate::settings::{self, STICK_MASS, STICKS_PER_ROW, TOWER_ROWS};

/// Opaque identifier distinguishing successive tower generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TowerKey(pub u64);

/// Geometry parameters for a tower build.
#[derive(Clone, Copy, Debug)]
pub struct TowerLayout {
    /// Stick size (length, height, depth) in meters. Halved for the
    /// collider; also sets the row/lateral spacing so sticks touch exactly.
    pub stick_dims: [f32; 3],
    /// Number of rows.
    pub rows: usize,
    /// World-space center of the bottom row.
    pub base_offset: Vec3,
}

impl Default for TowerLayout {
    fn default() -> Self {
        Self {
            stick_dims: settings::stick_dims(),
            rows: TOWER_ROWS,
            base_offset: settings::vec3(settings::TOWER_BASE_OFFSET),
        }
    }
}

impl TowerLayout {
    /// Reject degenerate geometry. Building with zero rows or a non-positive
    /// stick dimension is a precondition violation, never clamped.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 {
            return Err(GameError::ZeroRows);
        }
        for (axis, value) in ['x', 'y', 'z'].into_iter().zip(self.stick_dims) {
            if value <= 0.0 {
                return Err(GameError::NonPositiveDim { axis, value });
            }
        }
        Ok(())
    }

    /// Pose of the stick at `(row, lateral)`, `lateral` in {-1, 0, +1}.
    ///
    /// Even rows are axis-aligned with lateral spread along Z; odd rows are
    /// rotated 90 degrees about Y with lateral spread along X.
    pub fn stick_pose(&self, row: usize, lateral: i32) -> BodyPose {
        let [_, height, depth] = self.stick_dims;
        let y = self.base_offset.y + height * row as f32;
        let spread = depth * lateral as f32;

        let aligned = row % 2 == 0;
        let (x, z, rot_y) = if aligned {
            (self.base_offset.x, self.base_offset.z + spread, 0.0)
        } else {
            (
                self.base_offset.x + spread,
                self.base_offset.z,
                std::f32::consts::FRAC_PI_2,
            )
        };
        BodyPose::from_euler(Vec3::new(x, y, z), 0.0, rot_y, 0.0)
    }

    /// Total tower height: base offset plus rows times stick height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.base_offset.y + self.stick_dims[1] * self.rows as f32
    }
}

/// Sample a cosmetic stick color uniformly from the fixed palette.
pub fn sample_color<R: Rng>(rng: &mut R) -> &'static str {
    settings::STICK_PALETTE[rng.gen_range(0..settings::STICK_PALETTE.len())]
}

/// One simulated stick: its body handle plus the color sampled at creation.
#[derive(Clone, Copy, Debug)]
pub struct Stick {
    pub body: RigidBodyHandle,
    pub color: &'static str,
}

/// A built tower generation: `rows x 3` dynamic bodies registered with the
/// physics world, owned until [`Tower::teardown`].
pub struct Tower {
    key: TowerKey,
    layout: TowerLayout,
    sticks: Vec<Stick>,
}

impl Tower {
    /// Build a fresh tower and register its bodies with the world.
    ///
    /// Fails without touching the world when the layout is degenerate, so a
    /// partially-built tower can never escape.
    pub fn build<R: Rng>(
        world: &mut PhysicsWorld,
        key: TowerKey,
        layout: TowerLayout,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        layout.validate()?;

        let half = settings::half_extents(layout.stick_dims);
        let mut sticks = Vec::with_capacity(layout.rows * STICKS_PER_ROW);
        for row in 0..layout.rows {
            for lateral in [-1i32, 0, 1] {
                let body =
                    world.insert_dynamic_box(half, STICK_MASS, layout.stick_pose(row, lateral));
                sticks.push(Stick {
                    body,
                    color: sample_color(rng),
                });
            }
        }

        log::info!("built tower {:?}: {} sticks", key, sticks.len());
        Ok(Self {
            key,
            layout,
            sticks,
        })
    }

    #[inline]
    pub fn key(&self) -> TowerKey {
        self.key
    }

    #[inline]
    pub fn layout(&self) -> TowerLayout {
        self.layout
    }

    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sticks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sticks.is_empty()
    }

    /// Remove every stick body from the world. Handles held elsewhere for
    /// this generation are stale afterwards and must not be dereferenced.
    pub fn teardown(&mut self, world: &mut PhysicsWorld) {
        for stick in self.sticks.drain(..) {
            world.remove_body(stick.body);
        }
        log::info!("tore down tower {:?}", self.key);
    }
}
