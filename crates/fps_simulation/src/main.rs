//! Headless demo P&P2 FPS
//!
//! Скриптованный input: ходьба, double jump, спринт, присед, подбор двух
//! стволов, переключение колесом, огонь по двум целям до победы.
//!
//! Usage: `fps_simulation [config.ron]`

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use fps_simulation::*;

const MAX_TICKS: u32 = 3600;
const FIRE_FROM: u32 = 600;

fn main() -> Result {
    let mut app = create_headless_app();

    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load_from_file(path)?,
        None => SimulationConfig::default(),
    };

    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )))
    .insert_resource(config.clone())
    .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin))
    .add_systems(Update, strip_dead_targets.after(SimulationSet::Game));

    log_info("🚀 Starting P&P2 FPS headless demo");

    let player = spawn_player(&mut app.world_mut().commands(), &config, Transform::default());
    for z in [-40.0, -50.0] {
        app.world_mut().spawn((
            Transform::from_xyz(0.0, 0.0, z),
            Health::new(15),
            GoalTarget,
            RayTarget {
                radius: 0.5,
                offset: Vec3::new(0.0, 1.6, 0.0),
            },
            CollisionMask::ENEMY,
        ));
    }
    app.world_mut().flush();

    for tick in 0..MAX_TICKS {
        if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
            scripted_input(tick, &mut input);
        }

        if tick == 320 {
            for name in ["M1911", "M4"] {
                let Some(weapon) = config.weapon(name).cloned() else {
                    log_warning(&format!("Weapon {} not in config catalog", name));
                    continue;
                };
                app.world_mut().send_event(AcquireWeapon {
                    entity: player,
                    weapon,
                });
            }
        }

        app.update();

        if tick % 60 == 0 {
            report(&app, tick, player);
        }

        let session = app.world().resource::<GameSession>();
        if let Some(menu) = session.active_menu.filter(|menu| *menu != Menu::Pause) {
            report(&app, tick, player);
            log_info(&format!("🏁 Demo finished at tick {}: {:?}", tick, menu));
            return Ok(());
        }
    }

    log_warning(&format!("Demo hit {} ticks without a result", MAX_TICKS));
    Ok(())
}

fn scripted_input(tick: u32, input: &mut PlayerInput) {
    let sprinting = (150..210).contains(&tick);
    let walking = tick < 120 || sprinting;

    input.movement = if walking { Vec2::Y } else { Vec2::ZERO };
    input.scroll = if tick == 330 { 1.0 } else { 0.0 };
    input.jump.update(tick == 30 || tick == 45);
    input.sprint.update(sprinting);
    input.crouch.update((240..300).contains(&tick));
    input.fire.update(tick >= FIRE_FROM);
}

/// Мертвая цель больше не перекрывает луч
fn strip_dead_targets(
    mut commands: Commands,
    dead: Query<Entity, (Added<Dead>, With<RayTarget>)>,
) {
    for entity in dead.iter() {
        commands.entity(entity).remove::<RayTarget>();
    }
}

fn report(app: &App, tick: u32, player: Entity) {
    let world = app.world();
    let (Some(transform), Some(motion), Some(health), Some(weapon)) = (
        world.get::<Transform>(player),
        world.get::<PlayerMotion>(player),
        world.get::<Health>(player),
        world.get::<ActiveWeapon>(player),
    ) else {
        return;
    };
    let hud = world.resource::<HudState>();

    log_info(&format!(
        "Tick {}: pos {:.2?}, speed {}, jumps {}, hp {}/{}, weapon dmg {}, goal {}",
        tick,
        transform.translation,
        motion.speed,
        motion.jump_count,
        health.current,
        health.original,
        weapon.shoot_damage,
        hud.goal_text,
    ));
}
