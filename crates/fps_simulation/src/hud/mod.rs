//! HUD collaborator state
//!
//! ECS НЕ рисует UI. Публикуем состояние, host применяет:
//! - `HudState`: health fill, damage flash, goal text, menu panels
//! - `CursorState`: видимость + режим захвата курсора
//!
//! Таймеры (health bar tween, damage flash) тикают на virtual clock:
//! пауза замораживает их вместе со всей симуляцией.

use bevy::prelude::*;

use crate::SimulationSet;

pub mod components;
pub mod systems;


pub use components::*;
pub use systems::*;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudState>()
            .init_resource::<CursorState>()
            .register_type::<HudState>()
            .register_type::<CursorState>()
            .register_type::<HealthBarAnimation>()
            .register_type::<DamageFlash>()
            // Стартовый tween (на spawn) до Combat: урон в том же frame его заменит
            .add_systems(
                Update,
                start_health_bar_on_spawn.in_set(SimulationSet::TickTimers),
            )
            .add_systems(
                Update,
                (tick_health_bar, tick_damage_flash).in_set(SimulationSet::Hud),
            );
    }
}
