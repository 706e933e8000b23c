//! Player controller (first-person)
//!
//! Порядок за frame (SimulationSet::Player, chain):
//! 1. movement + jump, затем fire (выстрел в конце движения)
//! 2. sprint
//! 3. crouch
//! 4. weapon switch (колесо мыши)
//!
//! Реакции на урон: в SimulationSet::Combat, после apply_damage.

use bevy::prelude::*;

use crate::combat::{apply_damage, fire_weapon, Health};
use crate::equipment::switch_weapon_on_scroll;
use crate::SimulationSet;

pub mod components;
pub mod spawn;
pub mod systems;

pub use components::*;
pub use spawn::spawn_player;
pub use systems::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Player>()
            .register_type::<PlayerMotion>()
            .register_type::<Stance>()
            .register_type::<PlayerBody>()
            .register_type::<OriginalBody>()
            .register_type::<EyeCamera>()
            .register_type::<crate::PlayerSettings>()
            .add_systems(
                Update,
                (
                    player_movement,
                    fire_weapon,
                    player_sprint,
                    player_crouch,
                    switch_weapon_on_scroll,
                )
                    .chain()
                    .in_set(SimulationSet::Player),
            )
            .add_systems(
                Update,
                (player_damage_reactions, player_death)
                    .chain()
                    .in_set(SimulationSet::Combat)
                    .after(apply_damage::<Health>),
            );
    }
}
