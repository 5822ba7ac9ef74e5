//! STARLANCE Simulation Core
//!
//! Headless ECS-симуляция полёта на Bevy 0.16.
//!
//! LAYERED ARCHITECTURE:
//! - ECS = flight layer (курс корабля, projectile pool, camera rig)
//! - Client = presentation layer (окно, клавиатура, меши, презентация кадра)
//!
//! Ядро не знает про рендер: клиент каждый кадр заполняет [`FlightInput`]
//! и зеркалит state симуляции в визуальные entities. Один fixed tick =
//! один кадр игровой логики (60Hz), все константы полёта — per-tick.

use bevy::prelude::*;

// Публичные модули
pub mod camera;
pub mod flight;
pub mod logger;
pub mod shared;

// Re-export базовых типов для удобства
pub use camera::{
    spawn_camera_rig, CameraMode, CameraRig, FlightCameraPlugin, FOLLOW_DISTANCE, ORBIT_HEIGHT,
};
pub use flight::orientation::{chase_up, flight_direction, hull_attitude};
pub use flight::projectile::{Projectile, ProjectilePool, BOLT_LIFETIME_TICKS, POOL_CAPACITY};
pub use flight::ship::{spawn_player_ship, Ship, BOLT_SPEED, THRUST_SPEED, TURN_RATE_DEG};
pub use flight::FlightPlugin;
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use shared::input::FlightInput;

/// Частота simulation tick (Hz). Все константы полёта заданы per-tick,
/// поэтому частота меняет только скорость воспроизведения, не траектории.
pub const SIMULATION_TICK_HZ: f64 = 60.0;

/// Порядок подсистем внутри одного тика.
///
/// Инвариант: камера читает курс корабля ТЕКУЩЕГО тика, поэтому
/// Flight всегда выполняется до Camera.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Корабль: direction, выстрелы, тяга, руление, болты
    Flight,
    /// Camera rig: orbit/follow правила + переключение режима
    Camera,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_TICK_HZ))
            // Снимок input от collaborator (клиент или headless скрипт)
            .init_resource::<FlightInput>()
            .configure_sets(
                FixedUpdate,
                (SimulationSet::Flight, SimulationSet::Camera).chain(),
            )
            // Подсистемы (flight layer)
            .add_plugins((FlightPlugin, FlightCameraPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);

    app
}

/// Прогоняет ровно `ticks` simulation ticks, минуя realtime clock.
///
/// `FixedUpdate` запускается напрямую, поэтому тесты получают точную
/// tick-семантику (один вызов = один кадр логики), без накопителя
/// времени и без зависимости от wall clock.
pub fn advance_ticks(app: &mut App, ticks: usize) {
    // Применяем отложенные commands (spawn helpers пишут через Commands)
    app.world_mut().flush();

    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Snapshot мира для сравнения детерминизма
/// (упрощённая версия: Debug-формат, отсортировано по Entity ID)
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
