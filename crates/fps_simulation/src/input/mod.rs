//! Player/menu input: то, что host сэмплит каждый frame
//!
//! # Архитектура
//!
//! ```text
//! Host input API (keyboard/mouse/gamepad)
//!     ↓  (каждый frame, до app.update())
//! PlayerInput (component) / MenuInput (resource)
//!     ↓
//! Player / Game systems (читают только edges + held + axes)
//! ```
//!
//! Для headless тестов: mock input напрямую через эти структуры.

use bevy::prelude::*;

/// Состояние одной кнопки с edge detection
///
/// `update(held)` вызывается ровно один раз за frame: edges считаются
/// относительно held предыдущего frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct ButtonState {
    pub held: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl ButtonState {
    pub fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.held;
        self.just_released = !held && self.held;
        self.held = held;
    }

    pub fn press(&mut self) {
        self.update(true);
    }

    pub fn release(&mut self) {
        self.update(false);
    }
}

/// Player input (один frame)
///
/// # Fields
/// - `movement`: x = Horizontal axis (strafe), y = Vertical axis (forward/back).
///   Raw axis values, НЕ нормализуются.
/// - `scroll`: mouse wheel axis (> 0: следующее оружие, < 0: предыдущее)
/// - `jump` / `sprint` / `crouch`: используются только edges
/// - `fire`: используется held (автоматический огонь)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    pub movement: Vec2,
    pub scroll: f32,
    pub jump: ButtonState,
    pub fire: ButtonState,
    pub sprint: ButtonState,
    pub crouch: ButtonState,
}

impl PlayerInput {
    /// Следующий frame без нажатий: held-кнопки отпускаются, оси в ноль
    pub fn clear(&mut self) {
        self.movement = Vec2::ZERO;
        self.scroll = 0.0;
        self.jump.update(false);
        self.fire.update(false);
        self.sprint.update(false);
        self.crouch.update(false);
    }
}

/// Menu input (Cancel / Escape)
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct MenuInput {
    pub cancel: ButtonState,
}
