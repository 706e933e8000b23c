//! Equipment events
//!
//! - `AcquireWeapon` → подбор оружия (pickup на сцене, скрипт, demo)
//! - `WeaponSwitched` → курсор loadout сдвинулся (колесо мыши)

use bevy::prelude::*;

use crate::combat::WeaponStats;

/// Подобрать оружие
///
/// # Flow
/// 1. Append в `Loadout` (курсор не двигается)
/// 2. `ActiveWeapon` + `Attachment` ← stats/model нового оружия
/// 3. Rifle → attachments видимы (остальные категории не трогают)
/// 4. IK targets НЕ меняются
#[derive(Event, Clone, Debug)]
pub struct AcquireWeapon {
    pub entity: Entity,
    pub weapon: WeaponStats,
}

/// Курсор loadout сдвинулся на `index`
#[derive(Event, Clone, Debug)]
pub struct WeaponSwitched {
    pub entity: Entity,
    pub index: usize,
}
