use movesim::{Scenario, ScenarioConfig};
use movesim::run_2d;

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "projectile.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

// Headless driver: run the configured number of steps, then hand the
// recorded trajectories to stdout
fn run_headless(mut scenario: Scenario) {
    let h0 = scenario.parameters.h0;
    let steps = scenario.parameters.steps;

    scenario.environment.simulate_movement(h0, steps);

    for (ident, trajectory) in scenario.environment.trajectories() {
        match trajectory.last() {
            Some(last) => println!("{ident}: {} samples, final position {last}", trajectory.len()),
            None => println!("{ident}: no samples"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if scenario.engine.viewer {
        run_2d(scenario);
    } else {
        run_headless(scenario);
    }

    Ok(())
}
