//! Physics collaborators (collision-aware movement + hitscan raycasts)
//!
//! ECS НЕ симулирует физику сама. Gameplay системы пишут намерения:
//! - `CharacterMotor::move_by`: collision-aware move (аналог CharacterController.Move)
//! - `HitscanRequest`: raycast из камеры
//!
//! Backend (headless для тестов, Rapier для игры) исполняет их и пишет feedback:
//! - `CharacterMotor.grounded` / `collided_above`
//! - `HitscanHit` events
//!
//! Feedback читается на СЛЕДУЮЩЕМ frame (backend отрабатывает после Player systems).

use bevy::prelude::*;

pub mod headless;
pub mod layers;
#[cfg(feature = "rapier")]
pub mod rapier;

pub use headless::{HeadlessPhysicsPlugin, HeadlessWorld, RayTarget};
pub use layers::*;
#[cfg(feature = "rapier")]
pub use rapier::RapierBackendPlugin;

/// Collision-aware mover персонажа
///
/// # Flow
/// 1. Player systems: `move_by(delta)` (может вызываться несколько раз за frame)
/// 2. Backend: `take_pending()` → двигает тело → пишет `grounded` / `collided_above`
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CharacterMotor {
    /// Накопленное перемещение за текущий frame (метры)
    pub pending: Vec3,
    /// Высота collision volume (нужна backend'у для проверки потолка)
    pub height: f32,
    /// Тело стоит на опоре (результат последнего move)
    pub grounded: bool,
    /// Последний move упёрся в потолок
    pub collided_above: bool,
}

impl CharacterMotor {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            ..default()
        }
    }

    pub fn move_by(&mut self, delta: Vec3) {
        self.pending += delta;
    }

    pub fn take_pending(&mut self) -> Vec3 {
        std::mem::take(&mut self.pending)
    }
}

/// Event: raycast из камеры стрелка (hitscan выстрел)
#[derive(Event, Debug, Clone)]
pub struct HitscanRequest {
    pub shooter: Entity,
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
    pub max_distance: f32,
    /// Слои, которые луч пропускает
    pub ignore_mask: CollisionMask,
    pub damage: i32,
}

/// Event: луч попал в entity (ближайшее попадание)
#[derive(Event, Debug, Clone)]
pub struct HitscanHit {
    pub shooter: Entity,
    pub target: Entity,
    pub distance: f32,
    pub damage: i32,
}

/// Регистрация событий physics слоя (backend-agnostic)
pub struct PhysicsEventsPlugin;

impl Plugin for PhysicsEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HitscanRequest>()
            .add_event::<HitscanHit>()
            .register_type::<CharacterMotor>()
            .register_type::<CollisionMask>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motor_accumulates_moves() {
        let mut motor = CharacterMotor::new(2.0);

        motor.move_by(Vec3::new(1.0, 0.0, 0.0));
        motor.move_by(Vec3::new(0.0, 0.5, 0.0));

        assert_eq!(motor.take_pending(), Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(motor.pending, Vec3::ZERO);
    }
}
