//! Тесты детерминизма
//!
//! Один и тот же скрипт input на фиксированном dt даёт идентичный мир

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use fps_simulation::*;

#[test]
fn test_determinism_same_script() {
    const TICK_COUNT: u32 = 600;

    let snapshot1 = run_simulation(TICK_COUNT);
    let snapshot2 = run_simulation(TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Одинаковый скрипт input дал разные результаты!"
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const TICK_COUNT: u32 = 300;

    // Запускаем 5 раз: все должны быть идентичны
    let snapshots: Vec<_> = (0..5).map(|_| run_simulation(TICK_COUNT)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

/// Скрипт: ходьба + strafe, прыжки, спринт, присед, два ствола, огонь
fn scripted_input(tick: u32, input: &mut PlayerInput) {
    input.movement = match tick {
        0..=99 => Vec2::new(0.0, 1.0),
        100..=199 => Vec2::new(0.7, 0.7),
        _ => Vec2::ZERO,
    };
    input.scroll = if tick == 230 { 1.0 } else { 0.0 };
    input.jump.update(tick == 20 || tick == 35);
    input.sprint.update((50..150).contains(&tick));
    input.crouch.update((160..190).contains(&tick));
    input.fire.update(tick >= 240);
}

/// Запускает симуляцию и возвращает snapshot мира
fn run_simulation(tick_count: u32) -> Vec<u8> {
    let mut app = create_headless_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )))
    .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));

    let config = app.world().resource::<SimulationConfig>().clone();
    let player = spawn_player(&mut app.world_mut().commands(), &config, Transform::default());
    for z in [-30.0, -35.0] {
        app.world_mut().spawn((
            Transform::from_xyz(0.0, 1.6, z),
            Health::new(40),
            GoalTarget,
            RayTarget::sphere(0.5),
            CollisionMask::ENEMY,
        ));
    }
    app.world_mut().flush();

    for tick in 0..tick_count {
        if tick == 220 {
            for weapon in [WeaponStats::pistol(), WeaponStats::rifle()] {
                app.world_mut().send_event(AcquireWeapon {
                    entity: player,
                    weapon,
                });
            }
        }
        if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
            scripted_input(tick, &mut input);
        }
        app.update();
    }

    let world = app.world_mut();
    let mut snapshot = world_snapshot::<Transform>(world);
    snapshot.extend(world_snapshot::<PlayerMotion>(world));
    snapshot.extend(world_snapshot::<Health>(world));
    snapshot.extend(world_snapshot::<Loadout>(world));
    snapshot
}
