//! Tests for damage systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::{
        apply_damage, hitscan_hits_to_damage, DamageDealt, DamageIntent, Dead, EntityDied, Health,
    };
    use crate::physics::HitscanHit;

    fn damage_app() -> App {
        let mut app = App::new();
        app.add_event::<HitscanHit>()
            .add_event::<DamageIntent>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_systems(
                Update,
                (hitscan_hits_to_damage, apply_damage::<Health>).chain(),
            );
        app
    }

    fn drain<E: Event + Clone>(app: &mut App) -> Vec<E> {
        app.world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_hit_becomes_damage() {
        let mut app = damage_app();
        let shooter = app.world_mut().spawn_empty().id();
        let target = app.world_mut().spawn(Health::new(50)).id();

        app.world_mut().send_event(HitscanHit {
            shooter,
            target,
            distance: 3.0,
            damage: 20,
        });
        app.update();

        assert_eq!(app.world().get::<Health>(target).map(|h| h.current), Some(30));

        let dealt = drain::<DamageDealt>(&mut app);
        assert_eq!(dealt.len(), 1);
        assert_eq!(dealt[0].source, Some(shooter));
        assert_eq!(dealt[0].remaining, 30);
        assert!(drain::<EntityDied>(&mut app).is_empty());
    }

    #[test]
    fn test_target_without_capability_ignored() {
        let mut app = damage_app();
        let wall = app.world_mut().spawn(Transform::default()).id();

        app.world_mut().send_event(DamageIntent {
            source: None,
            target: wall,
            amount: 10,
        });
        app.update();

        assert!(drain::<DamageDealt>(&mut app).is_empty());
        assert!(app.world().get::<Dead>(wall).is_none());
    }

    #[test]
    fn test_death_reported_once() {
        let mut app = damage_app();
        let target = app.world_mut().spawn(Health::new(10)).id();

        // Два смертельных попадания в одном frame + одно в следующем
        app.world_mut().send_event(DamageIntent { source: None, target, amount: 15 });
        app.world_mut().send_event(DamageIntent { source: None, target, amount: 15 });
        app.update();
        app.world_mut().send_event(DamageIntent { source: None, target, amount: 15 });
        app.update();

        let died = drain::<EntityDied>(&mut app);
        assert_eq!(died.len(), 1);
        assert_eq!(died[0].entity, target);

        let health = app.world().get::<Health>(target).copied().expect("health");
        assert_eq!(health.current, 0);
        assert!(app.world().get::<Dead>(target).is_some());
    }
}
