//! Weapon stats (authored data) + shot cooldown
//!
//! `WeaponStats`: НЕ компонент: immutable запись из каталога, хранится
//! в `Loadout`. Активные числа живут в `ActiveWeapon` (equipment).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Категория оружия (управляет видимостью attachments)
///
/// | Категория | Подбор   | Переключение |
/// |-----------|----------|--------------|
/// | Rifle     | показать | показать     |
/// | Pistol    |:        | скрыть       |
/// | Other     |:        |:            |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum WeaponCategory {
    Rifle,
    Pistol,
    #[default]
    Other,
}

impl WeaponCategory {
    /// Правило видимости attachments при подборе (None = не трогать)
    pub fn attachments_on_acquire(self) -> Option<bool> {
        match self {
            WeaponCategory::Rifle => Some(true),
            WeaponCategory::Pistol | WeaponCategory::Other => None,
        }
    }

    /// Правило видимости attachments при переключении (None = не трогать)
    pub fn attachments_on_switch(self) -> Option<bool> {
        match self {
            WeaponCategory::Rifle => Some(true),
            WeaponCategory::Pistol => Some(false),
            WeaponCategory::Other => None,
        }
    }
}

/// Authored weapon record
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
pub struct WeaponStats {
    pub name: String,
    pub category: WeaponCategory,
    pub shoot_damage: i32,
    /// Дальность луча (метры)
    pub shoot_distance: f32,
    /// Cooldown между выстрелами (секунды, НЕ выстрелы/сек)
    pub shoot_rate: f32,
    /// Путь к модели оружия (host подменяет визуал)
    pub model: String,
    /// IK anchor левой руки
    #[serde(default)]
    pub left_hand_target: Option<String>,
    /// IK anchor правой руки
    #[serde(default)]
    pub right_hand_target: Option<String>,
}

impl WeaponStats {
    /// Authored пистолет (M1911)
    pub fn pistol() -> Self {
        Self {
            name: "M1911".into(),
            category: WeaponCategory::Pistol,
            shoot_damage: 5,
            shoot_distance: 40.0,
            shoot_rate: 0.4,
            model: "Weapons/M1911/Model".into(),
            left_hand_target: Some("Weapons/M1911/LeftHandTarget".into()),
            right_hand_target: Some("Weapons/M1911/RightHandTarget".into()),
        }
    }

    /// Authored винтовка (M4)
    pub fn rifle() -> Self {
        Self {
            name: "M4".into(),
            category: WeaponCategory::Rifle,
            shoot_damage: 3,
            shoot_distance: 80.0,
            shoot_rate: 0.1,
            model: "Weapons/M4/Model".into(),
            left_hand_target: Some("Weapons/M4/LeftHandTarget".into()),
            right_hand_target: Some("Weapons/M4/RightHandTarget".into()),
        }
    }
}

/// Cooldown выстрела
///
/// `Some(timer)` = "идёт выстрел": fire input отклоняется до окончания таймера.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ShotCooldown(pub Option<Timer>);

impl ShotCooldown {
    pub fn is_shooting(&self) -> bool {
        self.0.is_some()
    }

    pub fn start(&mut self, seconds: f32) {
        self.0 = Some(Timer::from_seconds(seconds.max(0.0), TimerMode::Once));
    }
}
