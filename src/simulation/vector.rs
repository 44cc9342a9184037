//! Checked N-dimensional vector arithmetic.
//!
//! `Vector` is the value type every other module computes with. It wraps
//! `nalgebra::DVector<f64>` so the dimensionality is fixed at construction
//! (typically 2) and checked at every binary operation instead of being part
//! of the type. All operations return a new `Vector`; nothing is mutated in
//! place.

use std::fmt;
use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::DVector;

use crate::simulation::errors::SimError;

/// Tolerance used for approximate equality in tests.
pub const EQ_TOLERANCE: f64 = 1e-9;

/// An ordered, fixed-length sequence of real components.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: DVector<f64>,
}

impl Vector {
    /// Build a vector from its components.
    pub fn new(components: Vec<f64>) -> Self {
        Self {
            data: DVector::from_vec(components),
        }
    }

    /// The zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: DVector::zeros(dim),
        }
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Components as a slice, in order.
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    // Both operands of a binary operation must have the same dimension
    fn check_dim(&self, other: &Vector) -> Result<(), SimError> {
        if self.dim() != other.dim() {
            return Err(SimError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector, SimError> {
        self.check_dim(other)?;
        Ok(Vector {
            data: &self.data + &other.data,
        })
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Vector) -> Result<Vector, SimError> {
        self.check_dim(other)?;
        Ok(Vector {
            data: &self.data - &other.data,
        })
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> Result<f64, SimError> {
        self.check_dim(other)?;
        Ok(self.data.dot(&other.data))
    }

    /// Component-wise multiplication by a scalar.
    pub fn scale(&self, k: f64) -> Vector {
        Vector {
            data: &self.data * k,
        }
    }

    /// Euclidean norm. Zero for the zero vector.
    pub fn magnitude(&self) -> f64 {
        self.data.norm()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`SimError::DegenerateVector`] when the magnitude is zero,
    /// so the division can never silently produce NaN or infinity.
    pub fn normalize(&self) -> Result<Vector, SimError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(SimError::DegenerateVector);
        }
        Ok(self.scale(1.0 / mag))
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

// Component-wise approximate equality with a default tolerance of 1e-9,
// used by the test suite. Vectors of different dimension never compare equal.
impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EQ_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dim() == other.dim() && self.data.abs_diff_eq(&other.data, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        EQ_TOLERANCE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dim() == other.dim() && self.data.relative_eq(&other.data, epsilon, max_relative)
    }
}
