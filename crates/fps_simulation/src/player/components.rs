//! Player components
//!
//! Отмечает entity которым управляет игрок через input + хранит состояние
//! контроллера (скорость, прыжки, stance, геометрия тела).

use bevy::prelude::*;

use crate::config::BodyDimensions;

/// Marker component для player-controlled entity
///
/// # Single-player
/// `GameSession` ищет ровно один entity с этим компонентом при старте.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Кинематика контроллера
///
/// Инвариант: `speed` ∈ {base_speed, base_speed × sprint_modifier, crouch_move_speed},
/// никаких промежуточных значений.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerMotion {
    /// Вертикальная скорость (x/z не используются, горизонталь: из input)
    pub velocity: Vec3,
    /// Прыжков с последнего приземления (0..=jump_max)
    pub jump_count: u32,
    pub speed: f32,
    /// Скорость стоя (фиксируется при spawn)
    pub base_speed: f32,
}

impl PlayerMotion {
    pub fn new(base_speed: f32) -> Self {
        Self {
            velocity: Vec3::ZERO,
            jump_count: 0,
            speed: base_speed,
            base_speed,
        }
    }
}

/// Stance flags
///
/// NOTE: присед во время спринта НЕ сбрасывает `sprinting`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Stance {
    pub crouched: bool,
    pub sprinting: bool,
}

/// Текущая геометрия тела (collider + камера)
///
/// Host синхронизирует свой collider по `Changed<PlayerBody>`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerBody {
    pub collider_height: f32,
    pub collider_center: Vec3,
    /// Локальная позиция камеры относительно ступней
    pub camera_local: Vec3,
}

impl From<&BodyDimensions> for PlayerBody {
    fn from(body: &BodyDimensions) -> Self {
        Self {
            collider_height: body.collider_height,
            collider_center: body.collider_center(),
            camera_local: body.camera_local(),
        }
    }
}

/// Геометрия стоя, зафиксированная при spawn (restore после приседа)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct OriginalBody(pub PlayerBody);

/// Камера первого лица
///
/// Yaw = rotation игрока (Transform), pitch пишет host из mouse look.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EyeCamera {
    /// Наклон вверх/вниз (радианы, > 0: вверх)
    pub pitch: f32,
}

impl EyeCamera {
    /// Луч из глаз: (origin, normalized direction)
    pub fn ray(&self, transform: &Transform, body: &PlayerBody) -> (Vec3, Vec3) {
        let origin = transform.translation + transform.rotation * body.camera_local;
        let direction = transform.rotation * Quat::from_rotation_x(self.pitch) * Vec3::NEG_Z;
        (origin, direction.normalize_or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn body() -> PlayerBody {
        PlayerBody::from(&BodyDimensions::default())
    }

    #[test]
    fn test_eye_ray_looks_forward() {
        let transform = Transform::from_xyz(1.0, 0.0, 2.0);
        let (origin, direction) = EyeCamera::default().ray(&transform, &body());

        assert_eq!(origin, Vec3::new(1.0, 1.6, 2.0));
        assert!((direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_eye_ray_follows_yaw_and_pitch() {
        let transform = Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_2));
        let (_, direction) = EyeCamera::default().ray(&transform, &body());
        // Поворот на 90° влево: forward = -X
        assert!((direction - Vec3::NEG_X).length() < 1e-5);

        let eye = EyeCamera { pitch: FRAC_PI_2 };
        let (_, direction) = eye.ray(&Transform::default(), &body());
        assert!((direction - Vec3::Y).length() < 1e-5);
    }
}
