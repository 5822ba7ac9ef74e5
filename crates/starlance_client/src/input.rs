use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystem};
use bevy::prelude::*;
use starlance_simulation::FlightInput;

pub struct FlightInputPlugin;

impl Plugin for FlightInputPlugin {
    fn build(&self, app: &mut App) {
        // Right before the fixed ticks of this frame, so the simulation
        // reads the freshest snapshot
        app.add_systems(
            RunFixedMainLoop,
            collect_flight_input.in_set(RunFixedMainLoopSystem::BeforeFixedMainLoop),
        );
    }
}

/// Poll the keyboard into the simulation's input snapshot.
///
/// Held keys overwrite the snapshot; edge keys OR-accumulate so a press
/// landing on a frame without a fixed tick still reaches the simulation
/// (which clears the flag when it consumes it).
fn collect_flight_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<FlightInput>) {
    input.thrust = keyboard.pressed(KeyCode::Space);

    input.steer_right = keyboard.pressed(KeyCode::KeyD);
    input.steer_left = keyboard.pressed(KeyCode::KeyA);
    input.pitch_up = keyboard.pressed(KeyCode::KeyW);
    input.pitch_down = keyboard.pressed(KeyCode::KeyS);

    input.orbit_right = keyboard.pressed(KeyCode::KeyE);
    input.orbit_left = keyboard.pressed(KeyCode::KeyQ);
    input.zoom_in =
        keyboard.pressed(KeyCode::NumpadAdd) || keyboard.pressed(KeyCode::Equal);
    input.zoom_out =
        keyboard.pressed(KeyCode::NumpadSubtract) || keyboard.pressed(KeyCode::Minus);

    input.fire |= keyboard.just_pressed(KeyCode::ShiftLeft);
    input.toggle_follow |= keyboard.just_pressed(KeyCode::ControlLeft);
}
