//! Fixed-step time integration for a single body.
//!
//! Implements semi-implicit (symplectic) Euler: the velocity is updated
//! first and the position then advances with the *updated* velocity. This
//! keeps the long-term energy behavior noticeably better than fully-explicit
//! Euler at the same cost of one force evaluation per step.

use crate::simulation::errors::SimError;
use crate::simulation::forces::{net_acceleration, GlobalFields};
use crate::simulation::states::Body;

/// Advance `body` by one step of size `dt` under the global `fields`.
///
/// On success the new position is appended to the body's trajectory, so each
/// successful step extends it by exactly one sample. On any error the body is
/// left untouched: velocity, position, and trajectory all keep their previous
/// values.
///
/// Requires `dt > 0`; anything else fails with [`SimError::InvalidTimeStep`].
/// Collision handling is not done here; the environment tests the
/// post-integration position so the response can see the overshoot.
pub fn semi_implicit_euler(body: &mut Body, fields: &GlobalFields, dt: f64) -> Result<(), SimError> {
    if !(dt > 0.0) {
        return Err(SimError::InvalidTimeStep(dt));
    }

    // a_n = (F + wind) / m + g
    let a = net_acceleration(body, fields)?;

    // Kick: v_n+1 = v_n + dt * a_n
    let v_next = body.v.add(&a.scale(dt))?;

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    let x_next = body.x.add(&v_next.scale(dt))?;

    // Commit only once every operation has succeeded, then record the sample
    body.v = v_next;
    body.x = x_next.clone();
    body.trajectory.push(x_next);

    Ok(())
}
