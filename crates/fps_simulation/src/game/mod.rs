//! Game session (pause / win / lose / goal)
//!
//! Порядок в SimulationSet::Game (chain):
//! 1. handle_cancel_input: Cancel edge
//! 2. goal_target_deaths → apply_goal_updates: счётчик целей, Win
//! 3. lose_on_player_death: Loss

use bevy::prelude::*;

use crate::SimulationSet;

pub mod events;
pub mod goal;
pub mod session;
pub mod systems;


pub use events::*;
pub use goal::*;
pub use session::*;
pub use systems::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UpdateGameGoal>()
            .add_event::<PlayerDied>()
            .register_type::<GameSession>()
            .register_type::<GoalTarget>()
            .add_observer(register_goal_target)
            .add_systems(Startup, init_game_session)
            .add_systems(
                Update,
                (
                    handle_cancel_input,
                    goal_target_deaths,
                    apply_goal_updates,
                    lose_on_player_death,
                )
                    .chain()
                    .in_set(SimulationSet::Game)
                    .run_if(resource_exists::<GameSession>),
            );
    }
}
