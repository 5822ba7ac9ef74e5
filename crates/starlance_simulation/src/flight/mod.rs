//! Flight layer: корабль, orientation math, projectile pool
//!
//! Порядок систем внутри тика фиксирован и значим:
//! direction пересчитывается ДО выстрела и тяги (оба его потребляют),
//! руление меняет rotation ПОСЛЕ — новый курс виден со следующего тика.

use bevy::prelude::*;

pub mod orientation;
pub mod projectile;
pub mod ship;

#[cfg(test)]
mod projectile_tests;
#[cfg(test)]
mod ship_tests;

pub use projectile::{Projectile, ProjectilePool};
pub use ship::Ship;

use crate::SimulationSet;

/// Plugin flight-подсистемы
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Ship>()
            .register_type::<ProjectilePool>()
            .add_systems(
                FixedUpdate,
                (
                    ship::derive_direction,
                    ship::fire_projectiles,
                    ship::apply_thrust,
                    ship::steer_ship,
                    ship::advance_projectiles,
                    ship::sync_hull_attitude,
                )
                    .chain()
                    .in_set(SimulationSet::Flight),
            );
    }
}
