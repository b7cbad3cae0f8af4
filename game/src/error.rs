//! Error types for the game core, using `thiserror`.
//!
//! The only hard failures here are malformed construction parameters; they
//! surface at the call site instead of propagating into a partially-built
//! tower. Missing tracking data and unhandled events are not errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GameError {
    /// A tower build was requested with no rows.
    #[error("tower must have at least one row")]
    ZeroRows,

    /// A stick dimension was zero or negative.
    #[error("stick dimension along {axis} must be positive, got {value}")]
    NonPositiveDim {
        /// Axis name ('x', 'y', or 'z').
        axis: char,
        /// Offending value in meters.
        value: f32,
    },
}
