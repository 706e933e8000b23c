//! Equipment components
//!
//! # Архитектура
//!
//! **Loadout**: подобранное оружие (append-only):
//! - Курсор `current` двигается колесом мыши, clamp без wrap
//! - Хранит authored `WeaponStats` (immutable записи из каталога)
//!
//! **ActiveWeapon**: числа текущего оружия (damage/distance/cooldown):
//! - Стартует из `PlayerSettings` (оружие "из коробки")
//! - Перезаписывается при подборе и переключении
//!
//! **Attachment / WeaponAttachments / HandIkTargets**: опубликованное
//! визуальное состояние, host применяет по `Changed<T>`.

use bevy::prelude::*;

use crate::combat::WeaponStats;
use crate::PlayerSettings;

// ============================================================================
// Loadout
// ============================================================================

/// Инвентарь оружия (только растёт)
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Loadout {
    weapons: Vec<WeaponStats>,
    current: usize,
}

impl Loadout {
    pub fn weapons(&self) -> &[WeaponStats] {
        &self.weapons
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Добавить оружие (курсор НЕ двигается)
    pub fn push(&mut self, weapon: WeaponStats) {
        self.weapons.push(weapon);
    }

    /// Куда сдвинется курсор от scroll (None = остаёмся на месте)
    ///
    /// Вверх только если есть следующий, вниз только если не на нулевом.
    pub fn scroll_target(&self, scroll: f32) -> Option<usize> {
        if scroll > 0.0 && self.current + 1 < self.weapons.len() {
            return Some(self.current + 1);
        }
        if scroll < 0.0 && self.current > 0 {
            return Some(self.current - 1);
        }
        None
    }

    /// Переместить курсор (index вне диапазона игнорируется)
    pub fn select(&mut self, index: usize) -> Option<&WeaponStats> {
        if index >= self.weapons.len() {
            return None;
        }
        self.current = index;
        self.weapons.get(index)
    }
}

// ============================================================================
// ActiveWeapon
// ============================================================================

/// Числа оружия в руках
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActiveWeapon {
    pub shoot_damage: i32,
    pub shoot_distance: f32,
    /// Cooldown между выстрелами (секунды)
    pub fire_rate: f32,
}

impl ActiveWeapon {
    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self {
            shoot_damage: settings.shoot_damage,
            shoot_distance: settings.shoot_distance,
            fire_rate: settings.fire_rate,
        }
    }

    pub fn adopt(&mut self, weapon: &WeaponStats) {
        self.shoot_damage = weapon.shoot_damage;
        self.shoot_distance = weapon.shoot_distance;
        self.fire_rate = weapon.shoot_rate;
    }
}

impl Default for ActiveWeapon {
    fn default() -> Self {
        Self::from_settings(&PlayerSettings::default())
    }
}

// ============================================================================
// Visual state (host-applied)
// ============================================================================

/// Модель оружия в руке
///
/// Пустой `prefab_path` = authored модель по умолчанию (ещё ничего не подобрано).
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Attachment {
    /// Путь к модели (например "Weapons/M4/Model")
    pub prefab_path: String,
}

impl Attachment {
    /// Создать attachment для weapon
    pub fn weapon(prefab_path: impl Into<String>) -> Self {
        Self {
            prefab_path: prefab_path.into(),
        }
    }
}

/// Видимость навесных attachments винтовки (прицел, рукоять, ...)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct WeaponAttachments {
    pub visible: bool,
}

/// IK anchors рук (пути к target nodes оружия)
///
/// None = ещё не назначено (authored rig по умолчанию).
#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct HandIkTargets {
    pub left: Option<String>,
    pub right: Option<String>,
}
