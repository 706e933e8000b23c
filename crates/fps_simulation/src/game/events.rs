//! Game events

use bevy::prelude::*;

/// Изменить счётчик целей (отрицательное: цель выполнена)
#[derive(Event, Debug, Clone, Copy)]
pub struct UpdateGameGoal {
    pub amount: i32,
}

/// Игрок умер (шлётся ровно один раз, на переходе health > 0 → ≤ 0)
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDied {
    pub entity: Entity,
}
