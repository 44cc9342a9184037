//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – how the run is driven (viewer or headless)
//! - [`ParametersConfig`]  – step size and step count
//! - [`EnvironmentConfig`] – optional gravity and wind field overrides
//! - [`ObjectConfig`]      – initial state for each simulated body
//! - [`ObstacleConfig`]    – one circular obstacle
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   viewer: false           # false -> headless run, true -> 2D viewer
//!
//! parameters:
//!   h0: 0.1                 # fixed step size
//!   steps: 300              # steps for a headless run
//!
//! environment:
//!   gravity: [ 0.0, -9.8 ]  # acceleration; omit for the 9.81 default
//!   wind: [ 1.5, 0.0 ]      # force; omit for no wind
//!
//! objects:
//!   - ident: "ball-1"
//!     m: 10.0
//!     v: [ 5.0, 15.0 ]
//!     force: [ 0.0, -5.0 ]
//!     x: [ 0.0, 2.0 ]       # optional, defaults to the origin
//!
//! obstacles:
//!   - center: [ 20.0, 0.0 ]
//!     radius: 2.0
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// How a built scenario is driven.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub viewer: bool, // `false` - headless batch run, `true` - interactive 2D viewer
}

/// Step size and step count for a run.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64,    // fixed time step size, must be positive
    pub steps: u32, // number of steps for a headless run; 0 is a valid no-op
}

/// Optional overrides for the global fields.
/// Missing entries fall back to gravity 9.81 straight down and zero wind.
#[derive(Deserialize, Debug, Default)]
pub struct EnvironmentConfig {
    pub gravity: Option<Vec<f64>>, // acceleration field
    pub wind: Option<Vec<f64>>,    // force field
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct ObjectConfig {
    pub ident: String,      // label used in reports and trajectory lookups
    pub m: f64,             // mass, must be positive
    pub v: Vec<f64>,        // initial velocity
    pub force: Vec<f64>,    // applied force, excludes the global fields
    pub x: Option<Vec<f64>>, // initial position, defaults to the origin
}

/// Configuration for one circular obstacle.
#[derive(Deserialize, Debug)]
pub struct ObstacleConfig {
    pub center: Vec<f64>, // circle center
    pub radius: f64,      // must be non-negative
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // run mode
    pub parameters: ParametersConfig, // step size and count
    #[serde(default)]
    pub environment: EnvironmentConfig, // global field overrides
    pub objects: Vec<ObjectConfig>, // bodies that define the initial state
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>, // static obstacles, in check order
}
