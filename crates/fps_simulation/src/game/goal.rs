//! GoalTarget: entity, которые нужно уничтожить для победы
//!
//! Появление цели: +1 к счётчику. Смерть цели: -1.

use bevy::prelude::*;

use crate::combat::EntityDied;
use crate::game::UpdateGameGoal;

/// Marker: цель для счётчика победы
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct GoalTarget;

/// Observer: новая цель
pub fn register_goal_target(
    _trigger: Trigger<OnAdd, GoalTarget>,
    mut goals: EventWriter<UpdateGameGoal>,
) {
    goals.write(UpdateGameGoal { amount: 1 });
}

/// System: цель умерла → -1
pub fn goal_target_deaths(
    mut died: EventReader<EntityDied>,
    targets: Query<(), With<GoalTarget>>,
    mut goals: EventWriter<UpdateGameGoal>,
) {
    for event in died.read() {
        if targets.contains(event.entity) {
            goals.write(UpdateGameGoal { amount: -1 });
        }
    }
}
