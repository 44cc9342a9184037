//! The environment: owns the bodies and obstacles and drives the step loop.
//!
//! `step(dt)` integrates every body, then resolves collisions against the
//! obstacles. Iteration is always in insertion/registration order so runs are
//! reproducible. Per-body errors are logged and skip only that body's update
//! for the step; the simulation keeps going for everything else.
//!
//! Exactly one caller drives the loop: `step` takes `&mut self`, so a shared
//! environment cannot be stepped from two threads at once.

use std::collections::BTreeMap;

use tracing::warn;

use crate::simulation::forces::GlobalFields;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::obstacles::Obstacle;
use crate::simulation::states::Body;
use crate::simulation::vector::Vector;

/// Aggregate root of one simulation session.
#[derive(Debug)]
pub struct Environment {
    pub fields: GlobalFields, // gravity and wind, uniform over all bodies
    pub bodies: Vec<Body>, // insertion order is the step iteration order
    pub obstacles: Vec<Obstacle>, // registration order is the collision check order
}

impl Environment {
    pub fn new(fields: GlobalFields) -> Self {
        Self {
            fields,
            bodies: Vec::new(),
            obstacles: Vec::new(),
        }
    }

    /// Register a body. Bodies persist for the life of the environment.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Register an obstacle. Invalid radii are rejected at
    /// [`Obstacle::circle`] construction, not here.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Look up a body by identifier.
    pub fn body(&self, ident: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.ident == ident)
    }

    /// Advance the whole environment by one step of size `dt`.
    ///
    /// For each body in insertion order:
    /// 1. integrate one semi-implicit Euler step
    /// 2. test the new position against the obstacles in registration order;
    ///    the first hit wins and the remaining obstacles are not consulted
    ///    this step
    ///
    /// A failed integration skips the body for this step (its trajectory is
    /// not extended). A degenerate contact skips only the bounce; the
    /// position stays recorded.
    pub fn step(&mut self, dt: f64) {
        for body in &mut self.bodies {
            if let Err(err) = semi_implicit_euler(body, &self.fields, dt) {
                warn!(ident = %body.ident, error = %err, "step skipped for body");
                continue;
            }

            for obstacle in &self.obstacles {
                match obstacle.collides_with(&body.x) {
                    Ok(true) => {
                        match obstacle.respond(body) {
                            Ok(()) => {
                                // The response moved the body onto the
                                // obstacle boundary; record that resulting
                                // position instead of the overshoot sample
                                // the integrator pushed
                                if let Some(last) = body.trajectory.last_mut() {
                                    *last = body.x.clone();
                                }
                            }
                            Err(err) => {
                                warn!(ident = %body.ident, error = %err, "collision response skipped, velocity kept");
                            }
                        }
                        // At most one obstacle resolves a body per step
                        break;
                    }
                    Ok(false) => {}
                    Err(err) => {
                        warn!(ident = %body.ident, error = %err, "collision test skipped");
                    }
                }
            }
        }
    }

    /// Run `steps` iterations of [`Environment::step`] with step size
    /// `time_step`. Zero steps is a valid no-op.
    pub fn simulate_movement(&mut self, time_step: f64, steps: u32) {
        for _ in 0..steps {
            self.step(time_step);
        }
    }

    /// The recorded trajectory of every body, keyed by identifier.
    ///
    /// Read-only view of the accumulated state; safe to call at any point,
    /// including mid-run. The map ordering is deterministic.
    pub fn trajectories(&self) -> BTreeMap<&str, &[Vector]> {
        self.bodies
            .iter()
            .map(|b| (b.ident.as_str(), b.trajectory.as_slice()))
            .collect()
    }
}

impl Default for Environment {
    /// Empty environment with the default 2D fields.
    fn default() -> Self {
        Self::new(GlobalFields::default())
    }
}
