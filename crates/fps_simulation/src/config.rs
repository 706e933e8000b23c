//! Simulation config (RON)
//!
//! Дефолты = значения из authored prefab игрока. Файл `config/default.ron`
//! повторяет их + каталог оружия.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::WeaponStats;
use crate::physics::CollisionMask;

/// Корневой config симуляции
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub player: PlayerSettings,
    pub body: BodyDimensions,
    /// Каталог authored оружия (подбирается через `AcquireWeapon`)
    pub weapons: Vec<WeaponStats>,
}

impl SimulationConfig {
    pub fn from_ron_str(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_ron_str(&content)?;

        crate::logger::log_info(&format!(
            "⚙️ Loaded config {:?} ({} weapons)",
            path.as_ref(),
            config.weapons.len()
        ));

        Ok(config)
    }

    /// Оружие из каталога по имени
    pub fn weapon(&self, name: &str) -> Option<&WeaponStats> {
        self.weapons.iter().find(|weapon| weapon.name == name)
    }
}

/// Настройки игрока (копируются на entity при spawn)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct PlayerSettings {
    /// Базовая скорость (м/с)
    pub speed: f32,
    pub sprint_modifier: f32,
    /// Максимум прыжков до приземления (2 = double jump)
    pub jump_max: u32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub health: i32,
    /// Длительность tween'а health bar (секунды)
    pub health_lerp_duration: f32,

    // === Стартовое оружие (до первого подбора) ===
    pub shoot_damage: i32,
    pub shoot_distance: f32,
    /// Cooldown между выстрелами (секунды)
    pub fire_rate: f32,

    // === Crouch ===
    pub crouch_move_speed: f32,
    pub crouch_collider_height: f32,
    pub crouch_camera_height: f32,
    /// Разовый импульс вниз при приседании (м/с)
    pub crouch_impulse: f32,

    pub damage_flash_duration: f32,
    /// Слои, которые луч выстрела пропускает
    pub ignore_mask: CollisionMask,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: 7.0,
            sprint_modifier: 2.0,
            jump_max: 2,
            jump_speed: 10.0,
            gravity: 5.0,
            health: 10,
            health_lerp_duration: 0.25,
            shoot_damage: 25,
            shoot_distance: 50.0,
            fire_rate: 20.0,
            crouch_move_speed: 3.0,
            crouch_collider_height: 1.0,
            crouch_camera_height: 0.9,
            crouch_impulse: 5.0,
            damage_flash_duration: 0.1,
            ignore_mask: CollisionMask::PLAYER,
        }
    }
}

/// Геометрия тела игрока (стоя)
///
/// Vec3 хранятся массивами: bevy собран без feature `serialize`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDimensions {
    pub collider_height: f32,
    pub collider_center: [f32; 3],
    /// Локальная позиция камеры относительно ступней
    pub camera_local: [f32; 3],
}

impl Default for BodyDimensions {
    fn default() -> Self {
        Self {
            collider_height: 2.0,
            collider_center: [0.0, 1.0, 0.0],
            camera_local: [0.0, 1.6, 0.0],
        }
    }
}

impl BodyDimensions {
    pub fn collider_center(&self) -> Vec3 {
        Vec3::from_array(self.collider_center)
    }

    pub fn camera_local(&self) -> Vec3 {
        Vec3::from_array(self.camera_local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::WeaponCategory;

    const DEFAULT_RON: &str = include_str!("../config/default.ron");

    #[test]
    fn test_default_file_parses() {
        let config = SimulationConfig::from_ron_str(DEFAULT_RON).expect("default.ron must parse");

        assert_eq!(config.player, PlayerSettings::default());
        assert_eq!(config.body, BodyDimensions::default());
        assert_eq!(config.weapons.len(), 2);
        assert_eq!(config.weapon("M4").map(|w| w.category), Some(WeaponCategory::Rifle));
        assert_eq!(config.weapon("M1911").map(|w| w.category), Some(WeaponCategory::Pistol));
    }

    #[test]
    fn test_config_ron_roundtrip() {
        let config = SimulationConfig {
            weapons: vec![WeaponStats::pistol(), WeaponStats::rifle()],
            ..default()
        };

        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())
            .expect("serialize config");
        let parsed = SimulationConfig::from_ron_str(&text).expect("parse config");

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SimulationConfig::from_ron_str("(player: (speed: 12.0))").expect("parse");

        assert_eq!(config.player.speed, 12.0);
        assert_eq!(config.player.jump_max, 2);
        assert!(config.weapons.is_empty());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(SimulationConfig::from_ron_str("(player: (speed: \"fast\"))").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(SimulationConfig::load_from_file("config/does_not_exist.ron").is_err());
    }
}
