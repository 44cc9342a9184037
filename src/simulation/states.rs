//! Core state types for the movement simulation.
//!
//! Defines the simulated body:
//! - `Body` holds mass, velocity, applied force, position, and the recorded
//!   trajectory
//!
//! Bodies never reference the environment that owns them; the global fields
//! are passed in explicitly wherever they are needed.

use crate::simulation::errors::SimError;
use crate::simulation::vector::Vector;

/// One simulated point-mass body.
#[derive(Debug, Clone)]
pub struct Body {
    pub ident: String, // label used for reporting, unique per environment by convention
    pub m: f64, // mass, strictly positive
    pub v: Vector, // velocity
    pub force: Vector, // applied external force, excludes the global fields
    pub x: Vector, // position
    pub trajectory: Vec<Vector>, // recorded positions, seeded with the start position
}

impl Body {
    /// Create a body at the origin.
    ///
    /// Fails with [`SimError::InvalidMass`] unless `m > 0`. The trajectory
    /// starts out containing the initial position.
    pub fn new(ident: impl Into<String>, m: f64, v: Vector, force: Vector) -> Result<Self, SimError> {
        if !(m > 0.0) {
            return Err(SimError::InvalidMass(m));
        }
        let x = Vector::zeros(v.dim());
        let trajectory = vec![x.clone()];
        Ok(Self {
            ident: ident.into(),
            m,
            v,
            force,
            x,
            trajectory,
        })
    }

    /// Move the body to a starting position other than the origin.
    ///
    /// Resets the trajectory so its first sample is the new start.
    pub fn with_position(mut self, x: Vector) -> Self {
        self.trajectory = vec![x.clone()];
        self.x = x;
        self
    }
}
