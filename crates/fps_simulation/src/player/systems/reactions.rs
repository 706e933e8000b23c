//! Реакции игрока на урон: health bar tween, damage flash, смерть → PlayerDied.

use bevy::prelude::*;

use crate::combat::{DamageDealt, EntityDied, Health};
use crate::game::PlayerDied;
use crate::hud::{DamageFlash, HealthBarAnimation, HealthBarTween, HudState};
use crate::player::Player;
use crate::PlayerSettings;

/// System: DamageDealt по игроку → новый tween + flash
///
/// Новый tween заменяет текущий (старый отменяется).
pub fn player_damage_reactions(
    mut dealt: EventReader<DamageDealt>,
    mut players: Query<
        (&Health, &PlayerSettings, &mut HealthBarAnimation, &mut DamageFlash),
        With<Player>,
    >,
    mut hud: ResMut<HudState>,
) {
    for event in dealt.read() {
        let Ok((health, settings, mut animation, mut flash)) = players.get_mut(event.target) else {
            continue;
        };

        animation.0 = Some(HealthBarTween::new(
            hud.health_fill,
            health.fraction(),
            settings.health_lerp_duration,
        ));

        flash.start(settings.damage_flash_duration);
        hud.damage_flash_visible = true;

        crate::logger::log(&format!(
            "🩸 Player took {} damage, health {}/{}",
            event.amount, health.current, health.original
        ));
    }
}

/// System: смерть игрока → tween отменён, bar пустой, PlayerDied
pub fn player_death(
    mut died: EventReader<EntityDied>,
    mut players: Query<&mut HealthBarAnimation, With<Player>>,
    mut hud: ResMut<HudState>,
    mut player_died: EventWriter<PlayerDied>,
) {
    for event in died.read() {
        let Ok(mut animation) = players.get_mut(event.entity) else {
            continue;
        };

        animation.0 = None;
        hud.health_fill = 0.0;
        player_died.write(PlayerDied {
            entity: event.entity,
        });

        crate::logger::log_info(&format!("💀 Player {:?} died", event.entity));
    }
}
