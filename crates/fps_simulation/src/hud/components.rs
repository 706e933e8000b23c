//! HUD resources + player-scoped UI timers

use bevy::prelude::*;

use crate::game::Menu;

/// Состояние HUD для host UI
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct HudState {
    /// Заполнение health bar (0.0..=1.0)
    pub health_fill: f32,
    pub damage_flash_visible: bool,
    /// Текст счётчика целей
    pub goal_text: String,
    pub panels: MenuPanels,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            health_fill: 1.0,
            damage_flash_visible: false,
            goal_text: "0".into(),
            panels: MenuPanels::default(),
        }
    }
}

/// Видимость menu panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct MenuPanels {
    pub pause: bool,
    pub win: bool,
    pub loss: bool,
}

impl MenuPanels {
    pub fn set(&mut self, menu: Menu, visible: bool) {
        match menu {
            Menu::Pause => self.pause = visible,
            Menu::Win => self.win = visible,
            Menu::Loss => self.loss = visible,
        }
    }

    pub fn is_visible(&self, menu: Menu) -> bool {
        match menu {
            Menu::Pause => self.pause,
            Menu::Win => self.win,
            Menu::Loss => self.loss,
        }
    }
}

/// Режим захвата курсора
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum CursorGrab {
    /// Центр экрана (gameplay)
    #[default]
    Locked,
    /// В пределах окна (меню)
    Confined,
}

/// Курсор (host применяет к окну)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct CursorState {
    pub visible: bool,
    pub grab: CursorGrab,
}

/// Линейная интерполяция health bar
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct HealthBarTween {
    pub start: f32,
    pub end: f32,
    pub elapsed: f32,
    pub duration: f32,
}

impl HealthBarTween {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            elapsed: 0.0,
            duration,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn sample(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.end;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * t
    }
}

/// Tween health bar в процессе (максимум один; новый заменяет старый)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HealthBarAnimation(pub Option<HealthBarTween>);

/// Full-screen damage flash
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct DamageFlash(pub Option<Timer>);

impl DamageFlash {
    pub fn start(&mut self, seconds: f32) {
        self.0 = Some(Timer::from_seconds(seconds.max(0.0), TimerMode::Once));
    }

    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }
}
