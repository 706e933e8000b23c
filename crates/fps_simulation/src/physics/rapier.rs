//! Rapier backend (feature = "rapier")
//!
//! - `CharacterMotor` → `KinematicCharacterController.translation`
//! - `KinematicCharacterControllerOutput` → `grounded` / `collided_above`
//! - `HitscanRequest` → `RapierContext::cast_ray`
//!
//! Host добавляет `RapierPhysicsPlugin` сам (шаг физики в PostUpdate),
//! этот plugin только связывает ECS intents с Rapier.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::{CharacterMotor, HitscanHit, HitscanRequest};
use crate::SimulationSet;

/// Допуск для сравнения desired/effective translation (метры)
const CEILING_EPSILON: f32 = 1e-4;

pub struct RapierBackendPlugin;

impl Plugin for RapierBackendPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            read_controller_output.in_set(SimulationSet::PhysicsFeedback),
        )
        .add_systems(
            Update,
            (push_motor_translation, resolve_hitscan_requests)
                .chain()
                .in_set(SimulationSet::Physics),
        );
    }
}

/// System: результат прошлого шага Rapier → CharacterMotor feedback
///
/// Потолок: тело просило подняться, но effective translation по Y срезана.
pub fn read_controller_output(
    mut query: Query<(&mut CharacterMotor, &KinematicCharacterControllerOutput)>,
) {
    for (mut motor, output) in query.iter_mut() {
        motor.grounded = output.grounded;

        let desired_up = output.desired_translation.y;
        motor.collided_above = desired_up > CEILING_EPSILON
            && output.effective_translation.y + CEILING_EPSILON < desired_up;
    }
}

/// System: накопленные moves → KinematicCharacterController
pub fn push_motor_translation(
    mut query: Query<(&mut CharacterMotor, &mut KinematicCharacterController)>,
) {
    for (mut motor, mut controller) in query.iter_mut() {
        controller.translation = Some(motor.take_pending());
    }
}

/// System: hitscan через Rapier query pipeline
pub fn resolve_hitscan_requests(
    mut requests: EventReader<HitscanRequest>,
    mut hits: EventWriter<HitscanHit>,
    rapier: ReadRapierContext,
) -> Result {
    if requests.is_empty() {
        return Ok(());
    }

    let context = rapier.single()?;

    for request in requests.read() {
        let visible = request.ignore_mask.complement();
        let filter = QueryFilter::new()
            .exclude_collider(request.shooter)
            .groups(CollisionGroups::new(
                Group::ALL,
                Group::from_bits_truncate(visible.0),
            ));

        let Some((target, distance)) = context.cast_ray(
            request.origin,
            request.direction,
            request.max_distance,
            true,
            filter,
        ) else {
            continue;
        };

        hits.write(HitscanHit {
            shooter: request.shooter,
            target,
            distance,
            damage: request.damage,
        });
    }

    Ok(())
}
