//! Корабль игрока: курс, тяга, выстрелы
//!
//! Per-tick цепочка (порядок фиксирован, см. FlightPlugin):
//! 1. derive_direction — direction из rotation ТЕКУЩЕГО тика
//! 2. fire_projectiles — edge-триггер выстрела
//! 3. apply_thrust — held-тяга, мгновенная постоянная скорость
//! 4. steer_ship — held-руление, ±1°/tick, без clamping
//! 5. advance_projectiles — тик всех активных болтов
//! 6. sync_hull_attitude — attitude корпуса в Transform для рендера
//!
//! Позиция живёт в Bevy `Transform` entity — клиент зеркалит её в
//! визуал без пересчётов.

use bevy::prelude::*;

use super::orientation::{flight_direction, hull_attitude};
use super::projectile::ProjectilePool;
use crate::logger;
use crate::shared::input::FlightInput;

/// Тяга: units/tick. Без кривых разгона — скорость мгновенная.
pub const THRUST_SPEED: f32 = 0.2;

/// Руление: градусов/tick на каждую зажатую клавишу
pub const TURN_RATE_DEG: f32 = 1.0;

/// Скорость болта: units/tick
pub const BOLT_SPEED: f32 = 0.5;

/// Компонент корабля игрока.
///
/// `rotation` копит градусы без ограничений — sin/cos периодичны,
/// явный wraparound не нужен. `direction` — производное поле,
/// пересчитывается в начале каждого тика и не бывает stale.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Ship {
    /// (pitch, yaw, heading) в градусах; yaw участвует только в attitude
    pub rotation: Vec3,
    /// Единичный forward-вектор (производное от rotation)
    pub direction: Vec3,
    /// Тяга units/tick
    pub speed: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            direction: Vec3::X, // flight_direction(ZERO)
            speed: THRUST_SPEED,
        }
    }
}

/// Spawn корабля игрока. Клиент добавляет свои визуальные маркеры
/// поверх возвращённого entity.
pub fn spawn_player_ship(commands: &mut Commands, position: Vec3) -> Entity {
    let entity = commands
        .spawn((
            Ship::default(),
            ProjectilePool::default(),
            Transform::from_translation(position),
        ))
        .id();

    logger::log(&format!("player ship spawned: {:?} at {}", entity, position));

    entity
}

/// System: direction из текущего rotation (каждый тик, до потребителей)
pub fn derive_direction(mut ships: Query<&mut Ship>) {
    for mut ship in ships.iter_mut() {
        ship.direction = flight_direction(ship.rotation);
    }
}

/// System: edge-триггер выстрела → pool.try_spawn
///
/// Насыщенный pool дропает запрос молча — backpressure, не ошибка;
/// дроп только логируем.
pub fn fire_projectiles(
    mut input: ResMut<FlightInput>,
    mut ships: Query<(&Ship, &Transform, &mut ProjectilePool)>,
) {
    if !input.take_fire() {
        return;
    }

    for (ship, transform, mut pool) in ships.iter_mut() {
        if !pool.try_spawn(transform.translation, ship.direction, BOLT_SPEED) {
            logger::log("fire request dropped: projectile pool saturated");
        }
    }
}

/// System: held-тяга вдоль direction
pub fn apply_thrust(input: Res<FlightInput>, mut ships: Query<(&Ship, &mut Transform)>) {
    if !input.thrust {
        return;
    }

    for (ship, mut transform) in ships.iter_mut() {
        transform.translation += ship.direction * ship.speed;
    }
}

/// System: held-руление. Одновременные клавиши складываются; встречные
/// гасят друг друга в ноль.
pub fn steer_ship(input: Res<FlightInput>, mut ships: Query<&mut Ship>) {
    for mut ship in ships.iter_mut() {
        if input.steer_right {
            ship.rotation.z += TURN_RATE_DEG;
        }
        if input.steer_left {
            ship.rotation.z -= TURN_RATE_DEG;
        }

        if input.pitch_up {
            ship.rotation.x += TURN_RATE_DEG;
        }
        if input.pitch_down {
            ship.rotation.x -= TURN_RATE_DEG;
        }
    }
}

/// System: тик всех pool корабля
pub fn advance_projectiles(mut pools: Query<&mut ProjectilePool>) {
    for mut pool in pools.iter_mut() {
        pool.advance_all();
    }
}

/// System: attitude корпуса в Transform (после руления — рендер видит
/// rotation уже этого тика)
pub fn sync_hull_attitude(mut ships: Query<(&Ship, &mut Transform)>) {
    for (ship, mut transform) in ships.iter_mut() {
        transform.rotation = hull_attitude(ship.rotation);
    }
}
