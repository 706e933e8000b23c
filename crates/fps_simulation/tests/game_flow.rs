//! Game flow integration test
//!
//! Pause / Win / Loss глазами host'а: MenuInput + цели на сцене →
//! GameSession, HudState, CursorState, Time<Virtual>.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use fps_simulation::*;

fn create_game_app() -> (App, Entity) {
    let mut app = create_headless_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )))
    .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));

    let config = app.world().resource::<SimulationConfig>().clone();
    let player = spawn_player(&mut app.world_mut().commands(), &config, Transform::default());
    app.world_mut().flush();
    app.update();

    (app, player)
}

fn spawn_dummy(app: &mut App, z: f32, health: i32) -> Entity {
    app.world_mut()
        .spawn((
            Transform::from_xyz(0.0, 1.6, z),
            Health::new(health),
            GoalTarget,
            RayTarget::sphere(0.5),
            CollisionMask::ENEMY,
        ))
        .id()
}

fn press_cancel(app: &mut App) {
    app.world_mut().resource_mut::<MenuInput>().cancel.press();
    app.update();
    app.world_mut().resource_mut::<MenuInput>().cancel.release();
    app.update();
}

fn session(app: &App) -> GameSession {
    app.world().resource::<GameSession>().clone()
}

fn position(app: &App, player: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(player)
        .map(|transform| transform.translation)
        .unwrap_or_else(|| panic!("player has no Transform"))
}

/// Test: пауза замораживает virtual clock, снятие паузы возвращает всё как было
#[test]
fn test_pause_freezes_and_resumes() {
    let (mut app, player) = create_game_app();
    assert_eq!(*app.world().resource::<CursorState>(), CursorState::default());

    press_cancel(&mut app);
    assert!(session(&app).is_paused);
    assert!(app.world().resource::<HudState>().panels.is_visible(Menu::Pause));
    assert!(app.world().resource::<CursorState>().visible);
    assert_eq!(app.world().resource::<CursorState>().grab, CursorGrab::Confined);

    // Time<Virtual> стоит: ходьба не двигает игрока
    let before = position(&app, player);
    if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
        input.movement = Vec2::Y;
    }
    for _ in 0..30 {
        app.update();
    }
    assert_eq!(position(&app, player), before);

    press_cancel(&mut app);
    let session = session(&app);
    assert!(!session.is_paused);
    assert_eq!(session.active_menu, None);
    assert!(!app.world().resource::<HudState>().panels.is_visible(Menu::Pause));
    assert_eq!(*app.world().resource::<CursorState>(), CursorState::default());
    assert_eq!(
        app.world().resource::<Time<Virtual>>().relative_speed(),
        session.time_scale_original
    );

    for _ in 0..30 {
        app.update();
    }
    assert!(position(&app, player).z < before.z);
}

/// Test: стрельба по целям до победы
#[test]
fn test_shooting_goal_targets_wins() {
    let (mut app, player) = create_game_app();
    let dummy = spawn_dummy(&mut app, -10.0, 5);
    app.update();
    assert_eq!(session(&app).goal_count, 1);
    assert_eq!(app.world().resource::<HudState>().goal_text, "1");

    // Быстрый cooldown, урон 25 убивает с первого попадания
    if let Some(mut weapon) = app.world_mut().get_mut::<ActiveWeapon>(player) {
        weapon.fire_rate = 0.1;
    }
    if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
        input.fire.press();
    }
    app.update();

    assert!(app.world().get::<Dead>(dummy).is_some());
    let session = session(&app);
    assert_eq!(session.goal_count, 0);
    assert_eq!(session.active_menu, Some(Menu::Win));
    assert!(session.is_paused);
    assert!(app.world().resource::<HudState>().panels.is_visible(Menu::Win));
    assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 0.0);

    // Cancel не закрывает экран победы
    press_cancel(&mut app);
    assert_eq!(app.world().resource::<GameSession>().active_menu, Some(Menu::Win));
}

/// Test: смерть игрока → Loss, курсор освобождён
#[test]
fn test_player_death_shows_loss() {
    let (mut app, player) = create_game_app();

    app.world_mut().send_event(DamageIntent {
        source: None,
        target: player,
        amount: 100,
    });
    app.update();

    let session = session(&app);
    assert_eq!(session.active_menu, Some(Menu::Loss));
    assert!(session.is_paused);
    assert!(app.world().resource::<HudState>().panels.is_visible(Menu::Loss));
    assert_eq!(
        *app.world().resource::<CursorState>(),
        CursorState {
            visible: true,
            grab: CursorGrab::Confined,
        }
    );

    // Повторный урон по мертвому игроку не даёт второго Loss
    app.world_mut().send_event(DamageIntent {
        source: None,
        target: player,
        amount: 100,
    });
    app.update();
    assert!(app.world().resource::<GameSession>().is_paused);
}
