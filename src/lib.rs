pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::vector::Vector;
pub use simulation::errors::SimError;
pub use simulation::states::Body;
pub use simulation::forces::{GlobalFields, net_acceleration};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::obstacles::Obstacle;
pub use simulation::environment::Environment;
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, EnvironmentConfig, ObjectConfig, ObstacleConfig, ScenarioConfig};

pub use visualization::sim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
