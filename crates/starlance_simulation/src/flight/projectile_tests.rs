//! Tests for the projectile pool (slot reuse, lifetime, saturation).

#[cfg(test)]
mod tests {
    use super::super::projectile::{Projectile, ProjectilePool, BOLT_LIFETIME_TICKS, POOL_CAPACITY};
    use bevy::prelude::*;

    #[test]
    fn test_slots_start_inactive() {
        let pool = ProjectilePool::default();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.slots.len(), POOL_CAPACITY);
    }

    #[test]
    fn test_spawn_sets_fields() {
        let mut slot = Projectile::default();
        slot.spawn(Vec3::new(1.0, 2.0, 3.0), Vec3::X, 0.5);

        assert!(slot.active);
        assert_eq!(slot.timer, BOLT_LIFETIME_TICKS);
        assert_eq!(slot.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(slot.direction, Vec3::X);
        assert_eq!(slot.speed, 0.5);
    }

    #[test]
    fn test_bolt_expires_on_121st_advance_and_moves_every_tick() {
        let mut slot = Projectile::default();
        slot.spawn(Vec3::ZERO, Vec3::X, 0.5);

        // 120 тиков — таймер тает до нуля, болт ещё жив
        for tick in 0..BOLT_LIFETIME_TICKS {
            slot.advance();
            assert!(slot.active, "bolt died early on tick {}", tick);
        }
        assert_eq!(slot.timer, 0);

        // 121-й advance гасит слот, но болт всё равно смещается
        slot.advance();
        assert!(!slot.active);

        let expected = (BOLT_LIFETIME_TICKS + 1) as f32 * 0.5;
        assert!((slot.position.x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_pool_saturation_drops_17th_request() {
        let mut pool = ProjectilePool::default();

        for _ in 0..POOL_CAPACITY {
            assert!(pool.try_spawn(Vec3::ZERO, Vec3::X, 0.5));
        }
        assert_eq!(pool.active_count(), POOL_CAPACITY);

        // 17-й запрос — no-op: pool не меняется
        let before = pool.clone();
        assert!(!pool.try_spawn(Vec3::ONE, Vec3::Z, 0.5));
        assert_eq!(pool.slots, before.slots);
        assert_eq!(pool.active_count(), POOL_CAPACITY);
    }

    #[test]
    fn test_spawn_reuses_lowest_free_slot() {
        let mut pool = ProjectilePool::default();

        for _ in 0..POOL_CAPACITY {
            pool.try_spawn(Vec3::ZERO, Vec3::X, 0.5);
        }

        // Освобождаем только слот 3
        pool.slots[3].active = false;

        assert!(pool.try_spawn(Vec3::new(9.0, 9.0, 9.0), Vec3::Y, 0.5));
        assert!(pool.slots[3].active);
        assert_eq!(pool.slots[3].position, Vec3::new(9.0, 9.0, 9.0));
        assert_eq!(pool.slots[3].direction, Vec3::Y);
    }

    #[test]
    fn test_advance_all_skips_inactive_slots() {
        let mut pool = ProjectilePool::default();
        pool.try_spawn(Vec3::ZERO, Vec3::X, 0.5);

        // Неактивный слот с мусорной позицией двигаться не должен
        pool.slots[5].position = Vec3::new(7.0, 7.0, 7.0);
        pool.slots[5].direction = Vec3::X;
        pool.slots[5].speed = 1.0;

        pool.advance_all();

        assert!((pool.slots[0].position.x - 0.5).abs() < 1e-6);
        assert_eq!(pool.slots[5].position, Vec3::new(7.0, 7.0, 7.0));
    }

    #[test]
    fn test_expired_slot_is_recycled() {
        let mut pool = ProjectilePool::default();
        pool.try_spawn(Vec3::ZERO, Vec3::X, 0.5);

        // Полный цикл жизни + гасящий advance
        for _ in 0..=BOLT_LIFETIME_TICKS {
            pool.advance_all();
        }
        assert_eq!(pool.active_count(), 0);

        // Слот 0 снова первый свободный
        assert!(pool.try_spawn(Vec3::ONE, Vec3::Z, 0.5));
        assert!(pool.slots[0].active);
        assert_eq!(pool.slots[0].timer, BOLT_LIFETIME_TICKS);
    }
}
