//! Hitscan shooting: fire input → cooldown + raycast request.

use bevy::prelude::*;

use crate::combat::ShotCooldown;
use crate::equipment::ActiveWeapon;
use crate::input::PlayerInput;
use crate::physics::HitscanRequest;
use crate::player::{EyeCamera, PlayerBody};
use crate::PlayerSettings;

/// Система: выстрел (автоматический огонь пока fire зажат)
///
/// Если cooldown не идёт: стартуем его на `fire_rate` секунд и в этом же
/// frame шлём ровно один `HitscanRequest` из глаз игрока.
pub fn fire_weapon(
    mut shooters: Query<(
        Entity,
        &PlayerInput,
        &ActiveWeapon,
        &PlayerSettings,
        &Transform,
        &PlayerBody,
        &EyeCamera,
        &mut ShotCooldown,
    )>,
    mut requests: EventWriter<HitscanRequest>,
) {
    for (entity, input, weapon, settings, transform, body, eye, mut cooldown) in shooters.iter_mut() {
        if !input.fire.held || cooldown.is_shooting() {
            continue;
        }

        cooldown.start(weapon.fire_rate);

        let (origin, direction) = eye.ray(transform, body);
        requests.write(HitscanRequest {
            shooter: entity,
            origin,
            direction,
            max_distance: weapon.shoot_distance,
            ignore_mask: settings.ignore_mask,
            damage: weapon.shoot_damage,
        });
    }
}

/// Система: tick cooldown на virtual clock (пауза замораживает)
pub fn tick_shot_cooldowns(time: Res<Time>, mut cooldowns: Query<&mut ShotCooldown>) {
    for mut cooldown in cooldowns.iter_mut() {
        let Some(timer) = cooldown.0.as_mut() else {
            continue;
        };

        if timer.tick(time.delta()).finished() {
            cooldown.0 = None;
        }
    }
}
