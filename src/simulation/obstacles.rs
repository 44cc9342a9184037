//! Static obstacles: collision test and response.
//!
//! Obstacles are a closed set of shape variants (currently only `Circle`) so
//! the collision test and response stay exhaustive and statically checkable.
//! Obstacles are created once at setup time and never move or resize.

use crate::simulation::errors::SimError;
use crate::simulation::states::Body;
use crate::simulation::vector::Vector;

/// A static region bodies bounce off of.
#[derive(Debug, Clone)]
pub enum Obstacle {
    /// Closed disk around `center`.
    Circle { center: Vector, radius: f64 },
}

impl Obstacle {
    /// Create a circular obstacle.
    ///
    /// Fails with [`SimError::InvalidRadius`] unless `radius >= 0`.
    pub fn circle(center: Vector, radius: f64) -> Result<Self, SimError> {
        if !(radius >= 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        Ok(Self::Circle { center, radius })
    }

    /// Closed-disk collision test: true iff the distance from `position` to
    /// the center is `<= radius`. A position exactly on the boundary counts
    /// as a hit.
    pub fn collides_with(&self, position: &Vector) -> Result<bool, SimError> {
        match self {
            Self::Circle { center, radius } => {
                Ok(position.sub(center)?.magnitude() <= *radius)
            }
        }
    }

    /// Elastic, frictionless bounce off the obstacle surface.
    ///
    /// The contact normal is the unit vector from the center toward the
    /// body's position. The velocity component along the normal is negated,
    /// the tangential component is kept, and the position is clamped back
    /// onto the boundary so the body does not start the next step inside the
    /// obstacle.
    ///
    /// When the body sits exactly on the center the normal is undefined and
    /// the response fails with [`SimError::DegenerateContact`]; the caller
    /// treats that as "no bounce" for the step. On any error the body is left
    /// untouched.
    pub fn respond(&self, body: &mut Body) -> Result<(), SimError> {
        match self {
            Self::Circle { center, radius } => {
                let offset = body.x.sub(center)?;
                if offset.magnitude() == 0.0 {
                    return Err(SimError::DegenerateContact);
                }
                let normal = offset.normalize()?;

                // Reflect about the normal: v' = v - 2 (v . n) n
                // The tangential component of v passes through unchanged
                let v_n = body.v.dot(&normal)?;
                let reflected = body.v.sub(&normal.scale(2.0 * v_n))?;

                // Clamp onto the surface: center + radius * n
                let surface = center.add(&normal.scale(*radius))?;

                body.v = reflected;
                body.x = surface;
                Ok(())
            }
        }
    }
}
