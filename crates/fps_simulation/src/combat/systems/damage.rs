//! Damage resolution: hitscan hits → intents → typed capability lookup.

use std::any::type_name;

use bevy::prelude::*;

use crate::combat::Damageable;
use crate::physics::HitscanHit;

/// Event: нанести урон entity (источник: выстрел, ловушка, скрипт)
#[derive(Event, Debug, Clone)]
pub struct DamageIntent {
    pub source: Option<Entity>,
    pub target: Entity,
    pub amount: i32,
}

/// Event: урон применён
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub source: Option<Entity>,
    pub target: Entity,
    pub amount: i32,
    /// Health после попадания
    pub remaining: i32,
}

/// Event: entity умер (переход health > 0 → ≤ 0, ровно один раз)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Компонент-маркер: entity мертв
///
/// Деспавн не автоматический: host решает что делать с телом.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Dead;

/// Система: HitscanHit → DamageIntent
pub fn hitscan_hits_to_damage(
    mut hits: EventReader<HitscanHit>,
    mut intents: EventWriter<DamageIntent>,
) {
    for hit in hits.read() {
        intents.write(DamageIntent {
            source: Some(hit.shooter),
            target: hit.target,
            amount: hit.damage,
        });
    }
}

/// Система: apply damage через capability `T`
///
/// Цель без `T` игнорируется (луч попал в стену/декор).
/// Мёртвые цели пропускаются: смерть и `Dead` случаются один раз.
pub fn apply_damage<T: Damageable>(
    mut commands: Commands,
    mut intents: EventReader<DamageIntent>,
    mut targets: Query<&mut T>,
    mut damage_dealt: EventWriter<DamageDealt>,
    mut entity_died: EventWriter<EntityDied>,
) {
    for intent in intents.read() {
        let Ok(mut target) = targets.get_mut(intent.target) else {
            crate::logger::log(&format!(
                "Hit {:?} has no {} capability, ignored",
                intent.target,
                type_name::<T>()
            ));
            continue;
        };

        if !target.is_alive() {
            continue;
        }

        let outcome = target.take_damage(intent.amount);

        crate::logger::log(&format!(
            "💥 {:?} → {:?}: {} damage (remaining {})",
            intent.source, intent.target, intent.amount, outcome.remaining
        ));

        damage_dealt.write(DamageDealt {
            source: intent.source,
            target: intent.target,
            amount: intent.amount,
            remaining: outcome.remaining,
        });

        if outcome.died {
            commands.entity(intent.target).insert(Dead);
            entity_died.write(EntityDied {
                entity: intent.target,
                killer: intent.source,
            });

            crate::logger::log_info(&format!("☠️ Entity {:?} died", intent.target));
        }
    }
}
