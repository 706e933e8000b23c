//! P&P2 FPS Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 (gameplay layer первого лица)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = gameplay state (player controller, weapons, health, pause/win/lose)
//! - Host engine = tactical layer (physics backend, rendering, UI, IK solving)
//!
//! Host пишет input (`PlayerInput`, `MenuInput`) → вызывает `app.update()` →
//! читает опубликованное состояние (`Transform`, `Attachment`, `HandIkTargets`,
//! `HudState`, `CursorState`).

use bevy::prelude::*;

// Публичные модули
pub mod combat;
pub mod config;
pub mod equipment;
pub mod game;
pub mod hud;
pub mod input;
pub mod logger;
pub mod physics;
pub mod player;

#[cfg(test)]
mod testing;

// Re-export базовых типов для удобства
pub use combat::{
    CombatPlugin, DamageDealt, DamageIntent, DamageOutcome, Damageable, Dead, EntityDied, Health,
    ShotCooldown, WeaponCategory, WeaponStats,
};
pub use config::{BodyDimensions, PlayerSettings, SimulationConfig};
pub use equipment::{
    AcquireWeapon, ActiveWeapon, Attachment, EquipmentPlugin, HandIkTargets, Loadout,
    WeaponAttachments, WeaponSwitched,
};
pub use game::{GamePlugin, GameSession, GoalTarget, Menu, PlayerDied, UpdateGameGoal};
pub use hud::{CursorGrab, CursorState, DamageFlash, HealthBarAnimation, HudPlugin, HudState};
pub use input::{ButtonState, MenuInput, PlayerInput};
pub use logger::*;
pub use physics::{
    CharacterMotor, CollisionMask, HeadlessPhysicsPlugin, HeadlessWorld, HitscanHit,
    HitscanRequest, RayTarget,
};
#[cfg(feature = "rapier")]
pub use physics::RapierBackendPlugin;
pub use player::{
    spawn_player, EyeCamera, OriginalBody, Player, PlayerBody, PlayerMotion, PlayerPlugin, Stance,
};

/// Порядок фаз одного frame (все в `Update`)
///
/// 1. PhysicsFeedback: backend результат прошлого шага (только Rapier)
/// 2. TickTimers: cooldowns на virtual clock
/// 3. Player: movement/jump/fire → sprint → crouch → weapon switch
/// 4. Physics: backend исполняет moves + hitscan
/// 5. Combat: hits → damage → реакции игрока
/// 6. Hud: health bar tween, damage flash
/// 7. Game: cancel/pause, goal, loss
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PhysicsFeedback,
    TickTimers,
    Player,
    Physics,
    Combat,
    Hud,
    Game,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Physics backend НЕ входит: тесты/demo добавляют `HeadlessPhysicsPlugin`,
/// игра: `RapierBackendPlugin` (feature = "rapier").
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SimulationSet::PhysicsFeedback,
                SimulationSet::TickTimers,
                SimulationSet::Player,
                SimulationSet::Physics,
                SimulationSet::Combat,
                SimulationSet::Hud,
                SimulationSet::Game,
            )
                .chain(),
        );

        if !app.world().contains_resource::<SimulationConfig>() {
            app.insert_resource(SimulationConfig::default());
        }

        app.init_resource::<MenuInput>()
            .register_type::<PlayerInput>()
            .register_type::<MenuInput>()
            // Подсистемы
            .add_plugins((
                physics::PhysicsEventsPlugin,
                CombatPlugin,
                EquipmentPlugin,
                PlayerPlugin,
                HudPlugin,
                GamePlugin,
            ));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
