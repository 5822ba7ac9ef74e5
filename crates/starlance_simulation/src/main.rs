//! Headless STARLANCE flight
//!
//! Запускает Bevy App без рендера и прогоняет скриптованный полёт:
//! тяга, разворот, очередь выстрелов, переключение камеры.

use bevy::prelude::*;
use starlance_simulation::{
    advance_ticks, create_headless_app, spawn_camera_rig, spawn_player_ship, CameraRig,
    FlightInput, ProjectilePool,
};

const TICKS: usize = 600;

fn main() {
    println!("Starting STARLANCE headless flight ({} ticks)", TICKS);

    let mut app = create_headless_app();

    let ship = spawn_player_ship(&mut app.world_mut().commands(), Vec3::ZERO);
    let rig = spawn_camera_rig(&mut app.world_mut().commands(), ship);

    for tick in 0..TICKS {
        // Скрипт управления
        {
            let mut input = app.world_mut().resource_mut::<FlightInput>();
            input.release_all();

            input.thrust = tick < 300;
            input.steer_right = (60..150).contains(&tick);
            input.pitch_up = (150..200).contains(&tick);

            if tick % 40 == 0 {
                input.fire = true;
            }
            if tick == 300 {
                input.toggle_follow = true;
            }
        }

        advance_ticks(&mut app, 1);

        if tick % 100 == 0 {
            let position = app
                .world()
                .get::<Transform>(ship)
                .map(|transform| transform.translation)
                .unwrap_or(Vec3::ZERO);
            let bolts = app
                .world()
                .get::<ProjectilePool>(ship)
                .map(|pool| pool.active_count())
                .unwrap_or(0);
            let mode = app.world().get::<CameraRig>(rig).map(|rig| rig.mode);

            println!(
                "Tick {}: ship at {:.2?}, {} bolts, camera {:?}",
                tick, position, bolts, mode
            );
        }
    }

    println!("Flight complete!");
}
