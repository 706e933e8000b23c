//! Combat module (hitscan + damage capability)
//!
//! ECS ответственность:
//! - Game state: Health, ShotCooldown, authored WeaponStats
//! - Combat rules: cooldown gating, death crossing
//! - Events: DamageIntent, DamageDealt, EntityDied
//!
//! Physics backend ответственность:
//! - HitscanRequest → HitscanHit (raycast)

use bevy::prelude::*;

use crate::SimulationSet;

pub mod components;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use systems::*;

/// Combat Plugin
///
/// Порядок выполнения:
/// 1. TickTimers: tick_shot_cooldowns
/// 2. Player: fire_weapon (регистрирует PlayerPlugin, внутри player chain)
/// 3. Combat: hitscan_hits_to_damage → apply_damage::<Health>
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<DamageIntent>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .register_type::<Health>()
            .register_type::<ShotCooldown>()
            .register_type::<Dead>();

        app.add_systems(
            Update,
            tick_shot_cooldowns.in_set(SimulationSet::TickTimers),
        )
        .add_systems(
            Update,
            (hitscan_hits_to_damage, apply_damage::<Health>)
                .chain()
                .in_set(SimulationSet::Combat),
        );
    }
}
