//! Camera rig: двухрежимный state machine (Orbit / Follow)
//!
//! Режимы взаимоисключающие — за тик применяется ровно одно правило:
//! - Orbit: кружение вокруг world origin, held-клавиши крутят угол и радиус
//! - Follow: chase cam — позиция и target привязаны к кораблю
//!
//! Переключение — edge-событие, обрабатывается ПОСЛЕ правила тика:
//! нажатие видно со следующего тика.
//! Переход ничего не сбрасывает — orbit возобновляется с тех же
//! угла/радиуса.

use bevy::prelude::*;


use crate::flight::orientation::chase_up;
use crate::flight::ship::Ship;
use crate::logger;
use crate::shared::input::FlightInput;
use crate::SimulationSet;

/// Дистанция chase cam за кормой (units)
pub const FOLLOW_DISTANCE: f32 = 15.0;

/// Высота orbit camera (units). Орбита плоская: вертикальной
/// компоненты у кружения нет, y прибит к константе.
pub const ORBIT_HEIGHT: f32 = 4.0;

/// Orbit: градусов/tick на зажатую клавишу
pub const ORBIT_TURN_RATE_DEG: f32 = 1.0;

/// Orbit: units/tick изменения радиуса
pub const ZOOM_RATE: f32 = 1.0;

/// Границы orbit-радиуса: zoom не должен протаскивать камеру сквозь
/// origin (радиус ≤ 0 переворачивает вид).
pub const ORBIT_RADIUS_MIN: f32 = 3.0;
pub const ORBIT_RADIUS_MAX: f32 = 50.0;

/// Режим камеры
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum CameraMode {
    /// Кружение вокруг world origin (начальный режим)
    #[default]
    Orbit,

    /// Chase cam за кораблём
    Follow,
}

/// Camera rig: параметры вида + orbit state + handle корабля.
///
/// `ship` — non-owning handle: rig не владеет кораблём и не переживает
/// его (порядок конструирования гарантирует, что корабль уже существует).
/// Повисший handle пропускает follow-обновление, не паникует.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CameraRig {
    pub mode: CameraMode,

    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical FOV (градусы)
    pub fov_deg: f32,

    /// Orbit: угол вокруг origin (градусы, без нормализации)
    pub orbit_angle: f32,
    /// Orbit: радиус кружения (units)
    pub orbit_radius: f32,

    /// Корабль, за которым умеет следовать rig
    pub ship: Entity,
}

/// Spawn camera rig, привязанного к кораблю
pub fn spawn_camera_rig(commands: &mut Commands, ship: Entity) -> Entity {
    commands
        .spawn(CameraRig {
            mode: CameraMode::default(),
            position: Vec3::new(10.0, 4.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_deg: 45.0,
            orbit_angle: 0.0,
            orbit_radius: 15.0,
            ship,
        })
        .id()
}

/// System: per-tick правило активного режима
pub fn update_camera_rig(
    input: Res<FlightInput>,
    mut rigs: Query<&mut CameraRig>,
    ships: Query<(&Ship, &Transform)>,
) {
    for mut rig in rigs.iter_mut() {
        match rig.mode {
            CameraMode::Follow => {
                let Ok((ship, transform)) = ships.get(rig.ship) else {
                    continue;
                };

                rig.target = transform.translation;
                // «Верх» относительно корабля, не мира
                rig.up = chase_up(ship.rotation);
                // Сдвиг за корму вдоль forward-вектора
                rig.position = transform.translation - ship.direction * FOLLOW_DISTANCE;
            }
            CameraMode::Orbit => {
                rig.target = Vec3::ZERO;
                // «Верх» относительно мира
                rig.up = Vec3::Y;

                if input.orbit_right {
                    rig.orbit_angle += ORBIT_TURN_RATE_DEG;
                }
                if input.orbit_left {
                    rig.orbit_angle -= ORBIT_TURN_RATE_DEG;
                }

                if input.zoom_in {
                    rig.orbit_radius -= ZOOM_RATE;
                }
                if input.zoom_out {
                    rig.orbit_radius += ZOOM_RATE;
                }
                rig.orbit_radius = rig.orbit_radius.clamp(ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX);

                let angle = rig.orbit_angle.to_radians();
                rig.position = Vec3::new(
                    rig.orbit_radius * angle.sin(),
                    ORBIT_HEIGHT,
                    rig.orbit_radius * angle.cos(),
                );
            }
        }
    }
}

/// System: edge-переключение режима (после update — эффект со
/// следующего тика)
pub fn toggle_camera_mode(mut input: ResMut<FlightInput>, mut rigs: Query<&mut CameraRig>) {
    if !input.take_toggle_follow() {
        return;
    }

    for mut rig in rigs.iter_mut() {
        rig.mode = match rig.mode {
            CameraMode::Orbit => CameraMode::Follow,
            CameraMode::Follow => CameraMode::Orbit,
        };

        logger::log(&format!("camera mode switched to {:?}", rig.mode));
    }
}

/// Plugin camera-подсистемы
pub struct FlightCameraPlugin;

impl Plugin for FlightCameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraRig>().add_systems(
            FixedUpdate,
            (update_camera_rig, toggle_camera_mode)
                .chain()
                .in_set(SimulationSet::Camera),
        );
    }
}
