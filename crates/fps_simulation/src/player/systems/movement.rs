//! Player movement: ground reset → walk → jump → vertical Euler → ceiling.

use bevy::prelude::*;

use crate::input::PlayerInput;
use crate::physics::CharacterMotor;
use crate::player::{Player, PlayerMotion};
use crate::PlayerSettings;

/// System: движение игрока за один frame
///
/// 1. На земле: сброс вертикальной скорости и счётчика прыжков
/// 2. Упёрлись в потолок: velocity.y -= jump_speed (ровно один раз за удар)
/// 3. Горизонталь: (right × x + forward × y) × speed × dt, без нормализации
/// 4. Прыжок (edge, до `jump_max` раз в воздухе)
/// 5. Вертикаль: velocity × dt, затем velocity.y -= gravity × dt
///
/// `grounded` / `collided_above`: feedback backend'а от прошлого frame.
pub fn player_movement(
    time: Res<Time>,
    mut players: Query<
        (
            &PlayerInput,
            &PlayerSettings,
            &Transform,
            &mut PlayerMotion,
            &mut CharacterMotor,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (input, settings, transform, mut motion, mut motor) in players.iter_mut() {
        if motor.grounded {
            motion.jump_count = 0;
            motion.velocity = Vec3::ZERO;
        }

        // Feedback прошлого frame: корректируем до вертикального move этого frame
        if motor.collided_above {
            motion.velocity.y -= settings.jump_speed;
        }

        let direction =
            transform.right() * input.movement.x + transform.forward() * input.movement.y;
        motor.move_by(direction * motion.speed * dt);

        try_jump(input, settings, &mut motion);

        motor.move_by(motion.velocity * dt);
        motion.velocity.y -= settings.gravity * dt;
    }
}

fn try_jump(input: &PlayerInput, settings: &PlayerSettings, motion: &mut PlayerMotion) {
    if input.jump.just_pressed && motion.jump_count < settings.jump_max {
        motion.jump_count += 1;
        motion.velocity.y = settings.jump_speed;
    }
}
