//! Test helpers: headless App с фиксированным шагом 1/60 s

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::{
    create_headless_app, spawn_player, HeadlessPhysicsPlugin, PlayerInput, SimulationConfig,
    SimulationPlugin,
};

pub const FRAME: f32 = 1.0 / 60.0;

/// App + SimulationPlugin + headless physics, детерминированный dt
pub fn simulation_app() -> App {
    let mut app = create_headless_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )))
    .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));
    app
}

/// Spawn игрока в (0, 0, 0) + первый update (Startup, приземление)
pub fn spawn_test_player(app: &mut App) -> Entity {
    let config = app.world().resource::<SimulationConfig>().clone();
    let player = spawn_player(&mut app.world_mut().commands(), &config, Transform::default());
    app.world_mut().flush();
    app.update();
    player
}

/// Изменить input игрока на следующий frame
pub fn with_input(app: &mut App, player: Entity, apply: impl FnOnce(&mut PlayerInput)) {
    if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
        apply(&mut *input);
    }
}

/// N frames без новых нажатий (held сохраняется, edges гаснут)
pub fn run_frames(app: &mut App, player: Entity, frames: usize) {
    for _ in 0..frames {
        release_edges(app, player);
        app.update();
    }
}

/// Один frame с изменённым input
pub fn frame_with(app: &mut App, player: Entity, apply: impl FnOnce(&mut PlayerInput)) {
    release_edges(app, player);
    with_input(app, player, apply);
    app.update();
}

fn release_edges(app: &mut App, player: Entity) {
    with_input(app, player, |input| {
        input.jump.update(input.jump.held);
        input.fire.update(input.fire.held);
        input.sprint.update(input.sprint.held);
        input.crouch.update(input.crouch.held);
    });
}

pub fn component<T: Component + Clone>(app: &App, entity: Entity) -> T {
    app.world()
        .get::<T>(entity)
        .cloned()
        .unwrap_or_else(|| panic!("missing {}", std::any::type_name::<T>()))
}

/// Забрать все события E (с прошлого drain)
pub fn drain_events<E: Event>(app: &mut App) -> Vec<E> {
    app.world_mut().resource_mut::<Events<E>>().drain().collect()
}
