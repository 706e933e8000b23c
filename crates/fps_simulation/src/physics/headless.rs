//! Headless physics backend (без Rapier)
//!
//! Используется в тестах и headless demo:
//! - Плоский пол на `floor_height` (+ опциональный потолок)
//! - Прямая интеграция `CharacterMotor.pending` → `Transform.translation`
//! - Hitscan против сфер `RayTarget`

use bevy::prelude::*;

use super::{CharacterMotor, CollisionMask, HitscanHit, HitscanRequest};
use crate::SimulationSet;

/// Геометрия headless мира
#[derive(Resource, Debug, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct HeadlessWorld {
    /// Y пола (ступни персонажа = Transform.translation.y)
    pub floor_height: f32,
    /// Y потолка (None: открытое небо)
    pub ceiling_height: Option<f32>,
}

impl Default for HeadlessWorld {
    fn default() -> Self {
        Self {
            floor_height: 0.0,
            ceiling_height: None,
        }
    }
}

/// Сферический collider для hitscan (headless)
///
/// Центр = Transform.translation + offset. Слой берётся из `CollisionMask`
/// (без компонента: `CollisionMask::DEFAULT`).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct RayTarget {
    pub radius: f32,
    pub offset: Vec3,
}

impl RayTarget {
    pub fn sphere(radius: f32) -> Self {
        Self {
            radius,
            offset: Vec3::ZERO,
        }
    }
}

pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeadlessWorld>()
            .register_type::<HeadlessWorld>()
            .register_type::<RayTarget>()
            .add_systems(
                Update,
                (apply_motor_moves, resolve_hitscan_requests)
                    .chain()
                    .in_set(SimulationSet::Physics),
            );
    }
}

/// System: применить накопленные moves + ground/ceiling detection
pub fn apply_motor_moves(
    mut query: Query<(&mut Transform, &mut CharacterMotor)>,
    world: Res<HeadlessWorld>,
) {
    for (mut transform, mut motor) in query.iter_mut() {
        let delta = motor.take_pending();
        transform.translation += delta;

        motor.grounded = false;
        motor.collided_above = false;

        if transform.translation.y <= world.floor_height {
            transform.translation.y = world.floor_height;
            motor.grounded = true;
        }

        if let Some(ceiling) = world.ceiling_height {
            let top = transform.translation.y + motor.height;
            if delta.y > 0.0 && top >= ceiling {
                transform.translation.y = ceiling - motor.height;
                motor.collided_above = true;
            }
        }
    }
}

/// System: hitscan против `RayTarget` сфер (ближайшее попадание в пределах max_distance)
pub fn resolve_hitscan_requests(
    mut requests: EventReader<HitscanRequest>,
    mut hits: EventWriter<HitscanHit>,
    targets: Query<(Entity, &Transform, &RayTarget, Option<&CollisionMask>)>,
) {
    for request in requests.read() {
        let visible = request.ignore_mask.complement();

        let nearest = targets
            .iter()
            .filter(|(entity, ..)| *entity != request.shooter)
            .filter(|(_, _, _, layer)| {
                visible.intersects(layer.copied().unwrap_or(CollisionMask::DEFAULT))
            })
            .filter_map(|(entity, transform, target, _)| {
                let center = transform.translation + target.offset;
                ray_sphere_distance(request.origin, request.direction, center, target.radius)
                    .map(|distance| (entity, distance))
            })
            .filter(|(_, distance)| *distance <= request.max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((target, distance)) = nearest else {
            continue;
        };

        hits.write(HitscanHit {
            shooter: request.shooter,
            target,
            distance,
            damage: request.damage,
        });
    }
}

/// Расстояние вдоль луча до входа в сферу
///
/// None если луч не пересекает сферу, сфера позади, или origin внутри сферы
/// (raycast не видит collider, внутри которого начинается).
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }

    let to_origin = origin - center;
    let c = to_origin.length_squared() - radius * radius;
    if c <= 0.0 {
        return None;
    }

    let b = to_origin.dot(direction);
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let distance = -b - discriminant.sqrt();
    (distance >= 0.0).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_sphere_in_front() {
        let distance = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -10.0), 1.0);
        let distance = distance.expect("sphere in front must be hit");
        assert!((distance - 9.0).abs() < 1e-4, "distance = {}", distance);
    }

    #[test]
    fn test_ray_misses_sphere_behind() {
        let distance = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(distance.is_none());
    }

    #[test]
    fn test_ray_misses_sphere_off_axis() {
        let distance = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(5.0, 0.0, -10.0), 1.0);
        assert!(distance.is_none());
    }

    #[test]
    fn test_ray_from_inside_sphere_ignored() {
        let distance = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!(distance.is_none());
    }
}
