use std::time::Instant;

use crate::simulation::environment::Environment;
use crate::simulation::obstacles::Obstacle;
use crate::simulation::states::Body;
use crate::simulation::vector::Vector;

/// Helper to build an environment with `n` bodies and a ring of obstacles
fn make_environment(n: usize, n_obstacles: usize) -> Environment {
    let mut env = Environment::default();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic initial state, no rand needed
        let v = Vector::from([(i_f * 0.37).sin() * 3.0, (i_f * 0.13).cos() * 3.0]);
        let x = Vector::from([(i_f * 0.07).sin() * 50.0, (i_f * 0.11).cos() * 50.0]);

        let body = Body::new(format!("body-{i}"), 1.0, v, Vector::zeros(2))
            .expect("benchmark mass is positive")
            .with_position(x);
        env.add_body(body);
    }

    // Obstacles spread on a circle around the spawn area
    for k in 0..n_obstacles {
        let angle = k as f64 / n_obstacles as f64 * std::f64::consts::TAU;
        let center = Vector::from([angle.cos() * 25.0, angle.sin() * 25.0]);
        env.add_obstacle(Obstacle::circle(center, 2.0).expect("benchmark radius is non-negative"));
    }

    env
}

pub fn bench_step() {
    // Different system sizes to test
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 100; // steps timed per size

    for n in ns {
        let mut env = make_environment(n, 8);

        // Warm up
        env.step(0.01);

        let t0 = Instant::now();
        for _ in 0..steps {
            env.step(0.01);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}

/// Benchmark step cost across a range of body counts
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 800 { 50 } else { 10 };

        let mut env = make_environment(n, 8);
        env.step(0.01);

        let t0 = Instant::now();
        for _ in 0..steps {
            env.step(0.01);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
