//! HUD systems (UI timers на virtual clock)

use bevy::prelude::*;

use crate::combat::Health;
use crate::hud::{DamageFlash, HealthBarAnimation, HealthBarTween, HudState};
use crate::PlayerSettings;

/// System: стартовый tween при spawn (текущий fill → health / original)
pub fn start_health_bar_on_spawn(
    mut spawned: Query<(&Health, &PlayerSettings, &mut HealthBarAnimation), Added<HealthBarAnimation>>,
    hud: Res<HudState>,
) {
    for (health, settings, mut animation) in spawned.iter_mut() {
        animation.0 = Some(HealthBarTween::new(
            hud.health_fill,
            health.fraction(),
            settings.health_lerp_duration,
        ));
    }
}

/// System: шаг tween'а health bar
///
/// Пока elapsed < duration: fill = lerp(start, end, elapsed / duration), elapsed += dt.
/// Затем fill = end и tween снимается.
pub fn tick_health_bar(
    time: Res<Time>,
    mut animations: Query<&mut HealthBarAnimation>,
    mut hud: ResMut<HudState>,
) {
    let dt = time.delta_secs();

    for mut animation in animations.iter_mut() {
        let Some(tween) = animation.0.as_mut() else {
            continue;
        };

        if tween.is_finished() {
            hud.health_fill = tween.end;
            animation.0 = None;
            continue;
        }

        hud.health_fill = tween.sample();
        tween.elapsed += dt;
    }
}

/// System: damage flash гаснет по таймеру
pub fn tick_damage_flash(
    time: Res<Time>,
    mut flashes: Query<&mut DamageFlash>,
    mut hud: ResMut<HudState>,
) {
    for mut flash in flashes.iter_mut() {
        let Some(timer) = flash.0.as_mut() else {
            continue;
        };

        if timer.tick(time.delta()).finished() {
            flash.0 = None;
            hud.damage_flash_visible = false;
        }
    }
}
