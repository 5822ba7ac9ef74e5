//! Снимок player input для flight layer
//!
//! Архитектура:
//! - Collaborator (клиент/headless скрипт) заполняет resource каждый frame
//! - Simulation системы читают held-состояния и потребляют edge-флаги
//! - Ядро не трогает окно и клавиатуру → логика тестируется без рендера

use bevy::prelude::*;

/// Снимок текущего состояния управления.
///
/// Held-поля — абсолютное состояние клавиши, клиент перезаписывает их
/// каждый frame. Edge-поля (`fire`, `toggle_follow`) клиент накапливает
/// через OR (`|= just_pressed`), а симуляция сбрасывает при потреблении
/// (`take_*`) — так нажатие не теряется, когда render frame не совпал
/// с fixed tick, и не срабатывает дважды, когда тиков было два.
///
/// Для headless тестов — mock input через этот resource.
/// Для игры — заполняется из `ButtonInput<KeyCode>`.
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct FlightInput {
    /// Тяга вперёд (held)
    pub thrust: bool,

    /// Курс вправо: +1°/tick к heading (held)
    pub steer_right: bool,
    /// Курс влево (held)
    pub steer_left: bool,
    /// Тангаж: +1°/tick к pitch (held)
    pub pitch_up: bool,
    /// Тангаж: −1°/tick (held)
    pub pitch_down: bool,

    /// Orbit camera: угол +1°/tick (held)
    pub orbit_right: bool,
    /// Orbit camera: угол −1°/tick (held)
    pub orbit_left: bool,
    /// Orbit camera: радиус −1/tick (held)
    pub zoom_in: bool,
    /// Orbit camera: радиус +1/tick (held)
    pub zoom_out: bool,

    /// Выстрел (edge: true только до потребления)
    pub fire: bool,
    /// Переключение orbit/follow (edge)
    pub toggle_follow: bool,
}

impl FlightInput {
    /// Потребляет edge-флаг выстрела (сбрасывает в false)
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire)
    }

    /// Потребляет edge-флаг переключения камеры
    pub fn take_toggle_follow(&mut self) -> bool {
        std::mem::take(&mut self.toggle_follow)
    }

    /// Отпускает все клавиши (для скриптов и тестов)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
