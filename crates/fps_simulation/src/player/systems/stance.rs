//! Sprint / crouch (только edges, held ничего не меняет)

use bevy::prelude::*;

use crate::input::PlayerInput;
use crate::physics::CharacterMotor;
use crate::player::{OriginalBody, Player, PlayerBody, PlayerMotion, Stance};
use crate::PlayerSettings;

/// System: sprint down/up (игнорируется в приседе)
pub fn player_sprint(
    mut players: Query<(&PlayerInput, &PlayerSettings, &mut PlayerMotion, &mut Stance), With<Player>>,
) {
    for (input, settings, mut motion, mut stance) in players.iter_mut() {
        if stance.crouched {
            continue;
        }

        if input.sprint.just_pressed {
            motion.speed = motion.base_speed * settings.sprint_modifier;
            stance.sprinting = true;
        } else if input.sprint.just_released {
            motion.speed = motion.base_speed;
            stance.sprinting = false;
        }
    }
}

/// System: crouch down/up
///
/// Down: crouch speed, collider ниже (center.y / 2), камера ниже, импульс вниз.
/// Up: всё из `OriginalBody`, скорость = base (флаг sprint не трогаем).
pub fn player_crouch(
    mut players: Query<
        (
            &PlayerInput,
            &PlayerSettings,
            &OriginalBody,
            &mut PlayerMotion,
            &mut Stance,
            &mut PlayerBody,
            &mut CharacterMotor,
        ),
        With<Player>,
    >,
) {
    for (input, settings, original, mut motion, mut stance, mut body, mut motor) in
        players.iter_mut()
    {
        if input.crouch.just_pressed {
            motion.speed = settings.crouch_move_speed;
            stance.crouched = true;

            body.collider_height = settings.crouch_collider_height;
            body.collider_center.y /= 2.0;
            body.camera_local.y = settings.crouch_camera_height;

            motion.velocity.y -= settings.crouch_impulse;
            motor.height = body.collider_height;
        }

        if input.crouch.just_released {
            motion.speed = motion.base_speed;
            stance.crouched = false;

            body.collider_height = original.0.collider_height;
            body.collider_center = original.0.collider_center;
            body.camera_local.y = original.0.camera_local.y;

            motor.height = body.collider_height;
        }
    }
}
