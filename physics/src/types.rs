//! Shared math types for body poses.
//!
//! Conventions
//! - Units are meters.
//! - Rotation is a unit quaternion; Euler helpers exist because the layout
//!   data upstream is authored as per-axis angles.

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};

pub type Vec3 = Vector3<f32>;
pub type Quat = UnitQuaternion<f32>;

/// World-space pose of a rigid body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl BodyPose {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pose at `translation` with identity rotation.
    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity())
    }

    /// Pose from per-axis Euler angles (radians): roll about X, pitch about Y,
    /// yaw about Z, matching `nalgebra::UnitQuaternion::from_euler_angles`.
    #[inline]
    pub fn from_euler(translation: Vec3, roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::new(translation, Quat::from_euler_angles(roll, pitch, yaw))
    }

    #[inline]
    pub fn to_isometry(&self) -> Isometry3<f32> {
        Isometry3::from_parts(Translation3::from(self.translation), self.rotation)
    }

    #[inline]
    pub fn from_isometry(iso: &Isometry3<f32>) -> Self {
        Self::new(iso.translation.vector, iso.rotation)
    }
}

impl Default for BodyPose {
    fn default() -> Self {
        Self::from_translation(Vec3::zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isometry_round_trip_preserves_pose() {
        let pose = BodyPose::from_euler(Vec3::new(1.0, -2.0, 3.5), 0.1, 0.2, -0.3);
        let back = BodyPose::from_isometry(&pose.to_isometry());
        assert!((back.translation - pose.translation).norm() < 1.0e-6);
        assert!(back.rotation.angle_to(&pose.rotation) < 1.0e-6);
    }

    #[test]
    fn pitch_rotates_about_vertical_axis() {
        // A pitch of 90 degrees must map +X onto -Z (right-handed, Y up).
        let pose = BodyPose::from_euler(Vec3::zeros(), 0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let mapped = pose.rotation * Vec3::x();
        assert!((mapped - Vec3::new(0.0, 0.0, -1.0)).norm() < 1.0e-6);
    }
}
