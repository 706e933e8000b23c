//! Game systems: session init, cancel/pause, goal, loss

use bevy::prelude::*;

use crate::game::{GameControl, GameSession, Menu, PlayerDied, UpdateGameGoal};
use crate::input::MenuInput;
use crate::player::Player;

/// Startup: создать GameSession
///
/// Сессия уже есть → warning, оставляем существующую.
/// Нет игрока (или больше одного) → ошибка инициализации.
pub fn init_game_session(
    mut commands: Commands,
    existing: Option<Res<GameSession>>,
    time: Res<Time<Virtual>>,
    players: Query<Entity, With<Player>>,
) -> Result {
    if existing.is_some() {
        crate::logger::log_warning("GameSession already exists, keeping the current one");
        return Ok(());
    }

    let player = players.single()?;
    commands.insert_resource(GameSession::new(player, time.relative_speed()));

    crate::logger::log_info(&format!("🎮 Game session started (player {:?})", player));
    Ok(())
}

/// System: Cancel edge → pause menu / unpause
///
/// Win/Loss активны → cancel игнорируется.
pub fn handle_cancel_input(menu_input: Res<MenuInput>, mut game: GameControl) {
    if !menu_input.cancel.just_pressed {
        return;
    }

    match game.session.active_menu {
        None => {
            game.state_paused();
            game.activate_menu(Menu::Pause);
        }
        Some(Menu::Pause) => game.state_unpaused(),
        Some(Menu::Win | Menu::Loss) => {}
    }
}

/// System: UpdateGameGoal events → счётчик
pub fn apply_goal_updates(mut events: EventReader<UpdateGameGoal>, mut game: GameControl) {
    for event in events.read() {
        game.update_game_goal(event.amount);
    }
}

/// System: PlayerDied → Loss
pub fn lose_on_player_death(mut events: EventReader<PlayerDied>, mut game: GameControl) {
    for _ in events.read() {
        game.lose();
    }
}
