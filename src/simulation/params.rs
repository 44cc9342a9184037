//! Numerical parameters for a simulation run
//!
//! `Parameters` holds runtime settings:
//! - integration step size,
//! - number of steps for a headless run

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size
    pub steps: u32, // steps to run headless; the viewer steps once per frame
}
