//! Player spawn helper
//!
//! Утилиты для spawn player entity в ECS world.

use bevy::prelude::*;

use crate::combat::{Health, ShotCooldown};
use crate::config::SimulationConfig;
use crate::equipment::{ActiveWeapon, Attachment, HandIkTargets, Loadout, WeaponAttachments};
use crate::hud::{DamageFlash, HealthBarAnimation};
use crate::input::PlayerInput;
use crate::physics::{CharacterMotor, CollisionMask};
use crate::player::{EyeCamera, OriginalBody, Player, PlayerBody, PlayerMotion, Stance};

/// Spawn player entity в ECS world
///
/// # Параметры
/// - `commands`: ECS Commands для spawn
/// - `config`: настройки игрока + геометрия тела
/// - `transform`: стартовая позиция (ступни) + yaw
///
/// # Returns
/// Entity ID созданного player
///
/// # Компоненты
/// - Player marker + `PlayerSettings` (копия config)
/// - Health (original = settings.health)
/// - PlayerMotion / Stance / PlayerBody + OriginalBody (фиксируются здесь)
/// - CharacterMotor (physics backend двигает тело)
/// - Оружие "из коробки": пустой Loadout, ActiveWeapon из settings
/// - HUD state: health bar tween + damage flash
pub fn spawn_player(
    commands: &mut Commands,
    config: &SimulationConfig,
    transform: Transform,
) -> Entity {
    let settings = config.player.clone();
    let body = PlayerBody::from(&config.body);

    let entity = commands
        .spawn((
            Player,
            transform,
            Health::new(settings.health),
            PlayerMotion::new(settings.speed),
            Stance::default(),
            body,
            OriginalBody(body),
            EyeCamera::default(),
            CharacterMotor::new(body.collider_height),
            CollisionMask::PLAYER,
            PlayerInput::default(),
        ))
        .insert((
            Loadout::default(),
            ActiveWeapon::from_settings(&settings),
            ShotCooldown::default(),
            Attachment::weapon(""),
            WeaponAttachments::default(),
            HandIkTargets::default(),
            HealthBarAnimation::default(),
            DamageFlash::default(),
            settings,
        ))
        .id();

    crate::logger::log_info(&format!(
        "🧍 Spawned player {:?} at {:?}",
        entity, transform.translation
    ));

    entity
}
