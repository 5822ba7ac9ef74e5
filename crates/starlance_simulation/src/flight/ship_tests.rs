//! Tests for the ship tick chain (direction, thrust, steering, fire).

#[cfg(test)]
mod tests {
    use super::super::projectile::ProjectilePool;
    use super::super::ship::{spawn_player_ship, Ship};
    use crate::{advance_ticks, create_headless_app, FlightInput};
    use bevy::prelude::*;

    /// Helper: headless app + корабль
    fn create_flight_app(position: Vec3) -> (App, Entity) {
        let mut app = create_headless_app();
        let ship = spawn_player_ship(&mut app.world_mut().commands(), position);
        (app, ship)
    }

    fn ship_state(app: &App, ship: Entity) -> (Ship, Vec3) {
        let state = app.world().get::<Ship>(ship).unwrap().clone();
        let position = app.world().get::<Transform>(ship).unwrap().translation;
        (state, position)
    }

    #[test]
    fn test_idle_tick_is_idempotent() {
        let (mut app, ship) = create_flight_app(Vec3::new(2.0, 3.0, 4.0));
        advance_ticks(&mut app, 1);
        let (before, position_before) = ship_state(&app, ship);

        // Тик без input: поза не меняется, direction пересчитан в то же
        advance_ticks(&mut app, 1);
        let (after, position_after) = ship_state(&app, ship);

        assert_eq!(before.rotation, after.rotation);
        assert_eq!(before.direction, after.direction);
        assert_eq!(position_before, position_after);
    }

    #[test]
    fn test_thrust_five_ticks_from_origin() {
        let (mut app, ship) = create_flight_app(Vec3::ZERO);

        app.world_mut().resource_mut::<FlightInput>().thrust = true;
        advance_ticks(&mut app, 5);

        let (state, position) = ship_state(&app, ship);
        assert_eq!(state.direction, Vec3::X);
        assert!((position.x - 1.0).abs() < 1e-5);
        assert_eq!(position.y, 0.0);
        assert_eq!(position.z, 0.0);
    }

    #[test]
    fn test_steering_accumulates_unbounded() {
        let (mut app, ship) = create_flight_app(Vec3::ZERO);

        // 450 тиков вправо: rotation не сворачивается, курс — как у 90°
        app.world_mut().resource_mut::<FlightInput>().steer_right = true;
        advance_ticks(&mut app, 450);

        let (state, _) = ship_state(&app, ship);
        assert_eq!(state.rotation.z, 450.0);

        let quarter_turn = super::super::orientation::flight_direction(Vec3::new(0.0, 0.0, 90.0));
        assert!(state.direction.abs_diff_eq(quarter_turn, 1e-4));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let (mut app, ship) = create_flight_app(Vec3::ZERO);

        {
            let mut input = app.world_mut().resource_mut::<FlightInput>();
            input.steer_left = true;
            input.steer_right = true;
            input.pitch_up = true;
            input.pitch_down = true;
        }
        advance_ticks(&mut app, 10);

        let (state, _) = ship_state(&app, ship);
        assert_eq!(state.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_fire_edge_spawns_exactly_one_bolt() {
        let (mut app, ship) = create_flight_app(Vec3::ZERO);

        // Один press, три тика: edge потребляется ровно один раз
        app.world_mut().resource_mut::<FlightInput>().fire = true;
        advance_ticks(&mut app, 3);

        let pool = app.world().get::<ProjectilePool>(ship).unwrap();
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_bolt_inherits_pose_at_fire_time() {
        let (mut app, ship) = create_flight_app(Vec3::new(5.0, 0.0, 0.0));

        app.world_mut().resource_mut::<FlightInput>().fire = true;
        advance_ticks(&mut app, 1);

        let pool = app.world().get::<ProjectilePool>(ship).unwrap();
        let bolt = pool.iter_active().next().unwrap();

        // Спавн из позиции корабля вдоль direction, затем один advance
        assert_eq!(bolt.direction, Vec3::X);
        assert!((bolt.position.x - 5.5).abs() < 1e-5);
    }
}
