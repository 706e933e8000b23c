//! Equipment module: weapon inventory
//!
//! # Architecture
//!
//! **Events → Systems flow:**
//! - Pickup/скрипт шлёт `AcquireWeapon`
//! - Scroll input двигает курсор `Loadout`
//! - Systems меняют `ActiveWeapon` / `Attachment` / `WeaponAttachments` / `HandIkTargets`
//! - Changed<T> → host подменяет визуал и IK rig
//!
//! **Weapon lifecycle:**
//! - Acquire → append + adopt stats/model
//! - Switch → курсор ±1 + adopt stats/model + IK retarget

use bevy::prelude::*;

use crate::SimulationSet;

pub mod components;
pub mod events;
pub mod systems;


// Re-exports
pub use components::*;
pub use events::*;
pub use systems::*;

/// Equipment plugin
///
/// `switch_weapon_on_scroll` регистрирует PlayerPlugin (последний шаг player chain).
pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app
            // Events
            .add_event::<AcquireWeapon>()
            .add_event::<WeaponSwitched>()
            .register_type::<Loadout>()
            .register_type::<ActiveWeapon>()
            .register_type::<Attachment>()
            .register_type::<WeaponAttachments>()
            .register_type::<HandIkTargets>()
            // Подбор до player chain: оружие в руках уже в этом frame
            .add_systems(
                Update,
                process_acquire_weapon
                    .in_set(SimulationSet::Player)
                    .before(crate::player::player_movement),
            );
    }
}
