//! Global force fields and the per-body net acceleration.
//!
//! The environment carries two uniform fields:
//! - `gravity`, expressed as an acceleration, applied to every body unscaled
//! - `wind`, expressed as a force, so its contribution is `wind / mass`
//!
//! The body's own applied force is a force as well and is also divided by
//! mass. Gravity is the only field that bypasses the mass division.

use crate::simulation::errors::SimError;
use crate::simulation::states::Body;
use crate::simulation::vector::Vector;

/// Uniform vector fields applied to every body each step.
#[derive(Debug, Clone)]
pub struct GlobalFields {
    pub gravity: Vector, // acceleration field
    pub wind: Vector, // force field
}

impl GlobalFields {
    pub fn new(gravity: Vector, wind: Vector) -> Self {
        Self { gravity, wind }
    }
}

impl Default for GlobalFields {
    /// 2D fields: gravity 9.81 straight down, no wind.
    fn default() -> Self {
        Self {
            gravity: Vector::from([0.0, -9.81]),
            wind: Vector::zeros(2),
        }
    }
}

/// Net acceleration on `body` under `fields`.
///
/// Computes `(force + wind) / m + gravity`:
/// - `force` and `wind` are forces, so they are summed first and divided by
///   the body's mass
/// - `gravity` is already an acceleration and is added unscaled
///
/// Fails with [`SimError::DimensionMismatch`] when the body's vectors and the
/// fields do not share one dimensionality.
pub fn net_acceleration(body: &Body, fields: &GlobalFields) -> Result<Vector, SimError> {
    // Total applied force: the body's own force plus the wind field
    let applied = body.force.add(&fields.wind)?;

    // F = m a, so the force part contributes F / m
    // (m > 0 is a construction invariant of Body)
    let from_forces = applied.scale(1.0 / body.m);

    // Gravity is an acceleration field, added as-is
    from_forces.add(&fields.gravity)
}
