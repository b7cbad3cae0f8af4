//! Hand tracking: a kinematic body driven by the controller pose stream.
//!
//! Every frame the tracker copies the selected controller's pose onto its
//! kinematic body; the physics step then resolves collisions between the
//! hand and the sticks without the hand ever being moved by them. When the
//! controller is not tracked this frame the body simply keeps its last pose.

use physics::{BodyPose, PhysicsWorld, RigidBodyHandle};

use crate::frame::FrameTick;
use crate::input::{ControllerInput, Handedness};
use crate::settings;

/// Opaque id of the cosmetic hand mesh supplied by the asset collaborator.
/// Purely visual: its absence never affects tracking or collision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandAsset(pub String);

pub struct HandTracker {
    body: RigidBodyHandle,
    handedness: Handedness,
    mesh: Option<HandAsset>,
}

impl HandTracker {
    /// Insert the kinematic hand body and bind it to the given controller.
    pub fn new(
        world: &mut PhysicsWorld,
        handedness: Handedness,
        mesh: Option<HandAsset>,
    ) -> Self {
        let body = world.insert_kinematic_box(
            settings::half_extents(settings::HAND_DIMS),
            BodyPose::default(),
        );
        if mesh.is_none() {
            log::debug!("hand mesh unavailable; tracking continues without a visual");
        }
        Self {
            body,
            handedness,
            mesh,
        }
    }

    #[inline]
    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    #[inline]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn mesh(&self) -> Option<&HandAsset> {
        self.mesh.as_ref()
    }
}

impl FrameTick for HandTracker {
    fn tick(&mut self, world: &mut PhysicsWorld, input: &dyn ControllerInput) {
        // Not tracked this frame: hold the last pose. No snapping to origin.
        let Some(pose) = input.pose(self.handedness) else {
            return;
        };
        world.set_kinematic_pose(self.body, pose);
    }
}
