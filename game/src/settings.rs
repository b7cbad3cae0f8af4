/*!
Game layout constants.

These centralize the geometry and cosmetic parameters the tower, hand, and
menu are built from. Keeping them together makes tuning easier.

Notes
- Distances are in meters; box sizes are full extents, halved when the
  collider is created.
- The stick dimensions double as layout spacing: rows rise by the stick's
  height dimension and sticks within a row are spread by its depth
  dimension, so a fresh tower is exactly touching, never overlapping.
*/

use nalgebra::Vector3;

use physics::Vec3;

/// Base stick dimensions before scaling: length, height, depth (meters).
pub const STICK_BASE_DIMS: [f32; 3] = [0.75, 0.15, 0.25];

/// Uniform scale applied to [`STICK_BASE_DIMS`].
pub const STICK_SCALE: f32 = 0.7;

/// Stick mass (kg). Large relative to expected hand impacts so pushes read
/// as nudges rather than explosions.
pub const STICK_MASS: f32 = 100.0;

/// Rows in a freshly built tower.
pub const TOWER_ROWS: usize = 10;

/// Sticks per row; lateral slots are {-1, 0, +1}.
pub const STICKS_PER_ROW: usize = 3;

/// World-space offset of the tower's bottom row center.
pub const TOWER_BASE_OFFSET: [f32; 3] = [0.0, 0.5, -0.9];

/// Ground slab size.
pub const GROUND_DIMS: [f32; 3] = [5.0, 1.0, 5.0];

/// Kinematic hand box size.
pub const HAND_DIMS: [f32; 3] = [0.06, 0.07, 0.28];

/// Fixed cosmetic palette; each stick samples one entry at creation time.
pub const STICK_PALETTE: [&str; 5] = ["#69d2e7", "#a7dbd8", "#e0e4cc", "#f38630", "#fa6900"];

/// Menu button scale at rest and while hovered (cosmetic tween endpoints).
pub const BUTTON_REST_SCALE: f32 = 1.0;
pub const BUTTON_HOVER_SCALE: f32 = 1.05;

/// Menu button face colors.
pub const BUTTON_REST_COLOR: &str = "#f3f3f3";
pub const BUTTON_HOVER_COLOR: &str = "#6666ff";

/// Exponential approach rate for menu tweens (1/seconds).
pub const TWEEN_RATE: f32 = 12.0;

/// Intro-menu layout: button centers and sizes, marker positions.
pub const BUTTON_HAND_RIGHT_POS: [f32; 3] = [-0.57, 0.75, -1.0];
pub const BUTTON_HAND_LEFT_POS: [f32; 3] = [-0.57, 0.5, -1.0];
pub const BUTTON_START_POS: [f32; 3] = [0.47, 0.69, -1.0];
pub const BUTTON_HAND_SIZE: [f32; 3] = [0.5, 0.2, 0.1];
pub const BUTTON_START_SIZE: [f32; 3] = [1.0, 0.6, 0.1];

/// Handedness marker sphere positions, next to the matching hand button.
pub const MARKER_RIGHT_POS: [f32; 3] = [-0.9, 0.75, -1.0];
pub const MARKER_LEFT_POS: [f32; 3] = [-0.9, 0.5, -1.0];

/// Intro scene text: title, help line, and hand-selection label.
pub const TITLE_TEXT: &str = "YUBI";
pub const TITLE_POS: [f32; 3] = [0.0, 1.5, -1.0];
pub const TITLE_FONT_SIZE: f32 = 0.4;
pub const HELP_TEXT: &str = "Trigger - restart, Squeeze - menu";
pub const HELP_POS: [f32; 3] = [0.0, 1.2, -1.0];
pub const HELP_FONT_SIZE: f32 = 0.05;
pub const HAND_LABEL_TEXT: &str = "Hand";
pub const HAND_LABEL_POS: [f32; 3] = [-0.7, 0.95, -1.0];
pub const HAND_LABEL_FONT_SIZE: f32 = 0.1;

/// Shared color of the intro text entries.
pub const TEXT_COLOR: &str = "#448";

/// Scaled stick dimensions (length, height, depth).
#[inline]
pub fn stick_dims() -> [f32; 3] {
    [
        STICK_BASE_DIMS[0] * STICK_SCALE,
        STICK_BASE_DIMS[1] * STICK_SCALE,
        STICK_BASE_DIMS[2] * STICK_SCALE,
    ]
}

#[inline]
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vector3::new(v[0], v[1], v[2])
}

/// Collider half-extents for a box of the given full size.
#[inline]
pub fn half_extents(dims: [f32; 3]) -> Vec3 {
    Vector3::new(dims[0] * 0.5, dims[1] * 0.5, dims[2] * 0.5)
}

/// Ground slab center, placed so the slab's top face touches the bottom of
/// the tower's first row: the stack starts resting on the platform instead
/// of dropping onto it.
#[inline]
pub fn ground_center() -> Vec3 {
    let top = TOWER_BASE_OFFSET[1] - stick_dims()[1] * 0.5;
    Vector3::new(0.0, top - GROUND_DIMS[1] * 0.5, 0.0)
}
