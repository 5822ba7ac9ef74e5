use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use starlance_simulation::{init_logger, spawn_camera_rig, spawn_player_ship, SimulationPlugin};

mod input;
mod rendering;

use input::FlightInputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    // Simulation log goes to the console unless a printer is plugged in
    init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "STARLANCE - Flight Slice".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // FPS readout in the log
        .add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::filtered(vec![FrameTimeDiagnosticsPlugin::FPS]),
        ))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        // Keyboard → FlightInput snapshot
        .add_plugins(FlightInputPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Setup scene
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn lights, static bodies, the player ship and its camera rig
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Moon (static body overhead)
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.6, 0.6, 0.65))),
        Transform::from_xyz(0.0, 50.0, 0.0).with_scale(Vec3::splat(10.0)),
    ));

    // World origin marker
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.1))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.1, 0.1))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Player ship (simulation entity) + camera rig bound to it
    // These will be mirrored into visuals by RenderingSyncPlugin
    let ship = spawn_player_ship(&mut commands, Vec3::ZERO);
    commands.entity(ship).insert(rendering::NeedsVisual);

    spawn_camera_rig(&mut commands, ship);
}
