//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the populated `Environment` (fields, bodies, obstacles)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems when the viewer is enabled.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::environment::Environment;
use crate::simulation::errors::SimError;
use crate::simulation::forces::GlobalFields;
use crate::simulation::obstacles::Obstacle;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;
use crate::simulation::vector::Vector;

/// A fully-initialized simulation scenario.
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, and the environment holding every body and
/// obstacle at their initial state.
#[derive(Debug, Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub environment: Environment,
}

impl Scenario {
    /// Assemble the runtime scenario from its configuration.
    ///
    /// Construction-time errors (non-positive mass, negative radius) are
    /// surfaced immediately; a scenario with an invalid entity never runs.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Fields: explicit vectors in the file override the 2D defaults
        let defaults = GlobalFields::default();
        let gravity = cfg.environment.gravity.map(Vector::new).unwrap_or(defaults.gravity);
        let wind = cfg.environment.wind.map(Vector::new).unwrap_or(defaults.wind);

        let mut environment = Environment::new(GlobalFields::new(gravity, wind));

        // Bodies: map `ObjectConfig` -> runtime `Body`; position defaults to
        // the origin when the file leaves it out
        for oc in cfg.objects {
            let mut body = Body::new(oc.ident, oc.m, Vector::new(oc.v), Vector::new(oc.force))?;
            if let Some(x) = oc.x {
                body = body.with_position(Vector::new(x));
            }
            environment.add_body(body);
        }

        // Obstacles, in file order; that order is also the collision
        // tie-break order
        for obc in cfg.obstacles {
            environment.add_obstacle(Obstacle::circle(Vector::new(obc.center), obc.radius)?);
        }

        let parameters = Parameters {
            h0: cfg.parameters.h0,
            steps: cfg.parameters.steps,
        };

        let engine = Engine {
            viewer: cfg.engine.viewer,
        };

        Ok(Self {
            engine,
            parameters,
            environment,
        })
    }
}
