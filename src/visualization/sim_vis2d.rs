use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::obstacles::Obstacle;
use crate::simulation::scenario::Scenario;
use crate::simulation::vector::Vector;

/// Component tagging each dot with its body index into Scenario.environment.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// World-space -> screen-space scaling factor
const SCALE: f32 = 10.0;

/// Screen radius of the dot drawn for a point mass
const BODY_RADIUS: f32 = 3.0;

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.environment.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_overlays_system))
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.environment.bodies.iter().enumerate() {
        let pos = screen_pos(&body.x).unwrap_or(Vec2::ZERO);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(BODY_RADIUS))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        environment,
        parameters,
        ..
    } = &mut *scenario;

    environment.step(parameters.h0);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.environment.bodies.get(*i) {
            if let Some(pos) = screen_pos(&b.x) {
                transform.translation.x = pos.x;
                transform.translation.y = pos.y;
            }
        }
    }
}

/// Obstacles as circle outlines, recorded trajectories as polylines
fn draw_overlays_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    for obstacle in &scenario.environment.obstacles {
        let Obstacle::Circle { center, radius } = obstacle;
        if let Some(c) = screen_pos(center) {
            gizmos.circle_2d(c, *radius as f32 * SCALE, Color::GRAY);
        }
    }

    for (_ident, trajectory) in scenario.environment.trajectories() {
        for pair in trajectory.windows(2) {
            if let (Some(a), Some(b)) = (screen_pos(&pair[0]), screen_pos(&pair[1])) {
                gizmos.line_2d(a, b, Color::YELLOW);
            }
        }
    }
}

/// Project the first two components onto the screen.
/// The viewer only draws vectors with at least two components.
fn screen_pos(v: &Vector) -> Option<Vec2> {
    let c = v.as_slice();
    if c.len() < 2 {
        return None;
    }
    Some(Vec2::new(c[0] as f32 * SCALE, c[1] as f32 * SCALE))
}
