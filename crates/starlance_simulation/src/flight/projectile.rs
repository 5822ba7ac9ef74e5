//! Projectile pool: 16 слотов, manual slot reuse
//!
//! Архитектура:
//! - Слот — plain value (никаких entity per bolt), pool — компонент корабля
//! - Аллокация = linear scan до первого неактивного слота (lowest-index)
//! - Pool полон → запрос молча дропается: это backpressure, не ошибка
//!
//! Гарантии: bounded memory (capacity константна), bounded latency
//! (скан максимум 16 слотов), ни одной аллокации на выстрел.

use bevy::prelude::*;

/// Ёмкость pool (слотов). Константа на всё время жизни.
pub const POOL_CAPACITY: usize = 16;

/// Время жизни болта в тиках (2 секунды при 60Hz)
pub const BOLT_LIFETIME_TICKS: u32 = 120;

/// Один слот pool. Когда `active == false`, геометрические поля —
/// мусор прошлого владельца: их нельзя ни рендерить, ни двигать.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct Projectile {
    pub active: bool,
    /// Оставшиеся тики жизни
    pub timer: u32,
    pub position: Vec3,
    /// Единичный вектор полёта (фиксируется при спавне)
    pub direction: Vec3,
    /// Units/tick
    pub speed: f32,
}

impl Projectile {
    /// Активирует слот. Вызывающий гарантирует, что слот был неактивен.
    pub fn spawn(&mut self, position: Vec3, direction: Vec3, speed: f32) {
        self.active = true;
        self.timer = BOLT_LIFETIME_TICKS;
        self.position = position;
        self.direction = direction;
        self.speed = speed;
    }

    /// Один тик жизни болта.
    ///
    /// Проверка таймера и перенос позиции — независимые шаги: болт
    /// смещается даже на тике, когда гаснет.
    pub fn advance(&mut self) {
        if self.timer > 0 {
            self.timer -= 1;
        } else {
            self.active = false;
        }

        self.position += self.direction * self.speed;
    }
}

/// Fixed-capacity pool болтов, принадлежит одному кораблю.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ProjectilePool {
    pub slots: [Projectile; POOL_CAPACITY],
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self {
            slots: [Projectile::default(); POOL_CAPACITY],
        }
    }
}

impl ProjectilePool {
    /// Спавнит болт в первый неактивный слот (lowest-index-first).
    ///
    /// Возвращает false, если pool насыщен — запрос дропнут, не
    /// ретраится и не ставится в очередь.
    pub fn try_spawn(&mut self, position: Vec3, direction: Vec3, speed: f32) -> bool {
        for slot in self.slots.iter_mut() {
            if !slot.active {
                slot.spawn(position, direction, speed);
                return true;
            }
        }

        false
    }

    /// Продвигает все активные слоты; неактивные стоят только flag check.
    pub fn advance_all(&mut self) {
        for slot in self.slots.iter_mut() {
            if slot.active {
                slot.advance();
            }
        }
    }

    /// Активные слоты (для зеркалирования в визуал и тестов)
    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|slot| slot.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }
}
