//! GameSession: состояние сессии (pause / menu / goal)
//!
//! Явный resource вместо глобального singleton: создаётся `init_game_session`
//! на старте, живёт пока живёт App.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::hud::{CursorGrab, CursorState, HudState};

/// Активное меню (взаимоисключающие)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Menu {
    Pause,
    Win,
    Loss,
}

/// Состояние игровой сессии
///
/// NOTE: `is_paused` переключается (toggle), а не выставляется. Повторная пауза
/// (win/loss поверх pause) инвертирует флаг, `active_menu` при этом корректен.
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct GameSession {
    pub is_paused: bool,
    pub active_menu: Option<Menu>,
    pub goal_count: i32,
    /// Relative speed virtual clock на старте сессии
    pub time_scale_original: f32,
    pub player: Entity,
}

impl GameSession {
    pub fn new(player: Entity, time_scale_original: f32) -> Self {
        Self {
            is_paused: false,
            active_menu: None,
            goal_count: 0,
            time_scale_original,
            player,
        }
    }
}

/// Всё, что трогают переходы pause/unpause/menu
#[derive(SystemParam)]
pub struct GameControl<'w> {
    pub session: ResMut<'w, GameSession>,
    time: ResMut<'w, Time<Virtual>>,
    cursor: ResMut<'w, CursorState>,
    hud: ResMut<'w, HudState>,
}

impl GameControl<'_> {
    /// Пауза: virtual clock стоит, курсор видим и в пределах окна
    pub fn state_paused(&mut self) {
        self.session.is_paused = !self.session.is_paused;
        self.time.set_relative_speed(0.0);
        self.cursor.visible = true;
        self.cursor.grab = CursorGrab::Confined;

        crate::logger::log_info("⏸️ Paused");
    }

    /// Снятие паузы: исходная скорость, курсор скрыт и захвачен, меню закрыто
    pub fn state_unpaused(&mut self) {
        self.session.is_paused = !self.session.is_paused;
        self.time.set_relative_speed(self.session.time_scale_original);
        self.cursor.visible = false;
        self.cursor.grab = CursorGrab::Locked;

        if let Some(menu) = self.session.active_menu.take() {
            self.hud.panels.set(menu, false);
        }

        crate::logger::log_info("▶️ Unpaused");
    }

    pub fn activate_menu(&mut self, menu: Menu) {
        self.session.active_menu = Some(menu);
        self.hud.panels.set(menu, true);
    }

    /// Счётчик целей: ≤ 0 → пауза + Win
    pub fn update_game_goal(&mut self, amount: i32) {
        self.session.goal_count += amount;
        self.hud.goal_text = self.session.goal_count.to_string();

        if self.session.goal_count <= 0 {
            self.state_paused();
            self.activate_menu(Menu::Win);
            crate::logger::log_info("🏆 Goal reached, you win");
        }
    }

    pub fn lose(&mut self) {
        self.state_paused();
        self.activate_menu(Menu::Loss);
        crate::logger::log_info("🪦 You lose");
    }
}
