//! Error types for the simulation core.
//!
//! Construction-time errors (`InvalidMass`, `InvalidRadius`) are fatal to the
//! construction call. Per-step errors (`DimensionMismatch`, `DegenerateVector`,
//! `InvalidTimeStep`, `DegenerateContact`) are caught per body at step
//! granularity and logged; the run continues for the remaining bodies.

use thiserror::Error;

/// Errors raised by vector arithmetic, body construction, and the step loop.
#[derive(Debug, Error)]
pub enum SimError {
    /// Operation between vectors of different dimensionality.
    #[error("vector dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch {
        /// Dimension of the left-hand vector.
        expected: usize,
        /// Dimension of the right-hand vector.
        found: usize,
    },

    /// Normalization of a zero-magnitude vector.
    #[error("cannot normalize a vector with zero magnitude")]
    DegenerateVector,

    /// Body constructed with non-positive mass.
    #[error("mass must be positive, got {0}")]
    InvalidMass(f64),

    /// Obstacle constructed with negative radius.
    #[error("obstacle radius must be non-negative, got {0}")]
    InvalidRadius(f64),

    /// Integration step with non-positive dt.
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f64),

    /// Collision response where the body sits exactly on the obstacle center,
    /// so the contact normal is undefined.
    #[error("contact normal undefined: position coincides with obstacle center")]
    DegenerateContact,
}
