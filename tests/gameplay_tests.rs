//! Headless end-to-end collision scenarios.
//!
//! Built on `MinimalPlugins` + `StatesPlugin` with the collision systems added
//! directly — no window, no rendering, no input.  Entities are spawned
//! straight into the `World` at hand-picked positions and a frame is driven
//! with `App::update`, then the resulting world is inspected.

use attrition::asteroid::{Asteroid, AsteroidTier};
use attrition::collision::{
    player_asteroid_collision_system, player_powerup_collision_system,
    shot_asteroid_collision_system, Lives, Score,
};
use attrition::config::GameConfig;
use attrition::game::GameState;
use attrition::motion::{CircleBody, Velocity};
use attrition::player::{Player, PlayerEffects, Shot, Weapon};
use attrition::powerup::{PowerKind, PowerUp};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

// ── Harness ───────────────────────────────────────────────────────────────────

/// An 800×600 playfield so the screen centre is (400, 300).
fn test_config() -> GameConfig {
    GameConfig {
        screen_width: 800.0,
        screen_height: 600.0,
        ..Default::default()
    }
}

fn game_app(lives: u32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.insert_resource(test_config());
    app.insert_resource(Score::default());
    app.insert_resource(Lives(lives));
    app.add_systems(
        Update,
        (
            player_asteroid_collision_system,
            player_powerup_collision_system,
            shot_asteroid_collision_system,
        )
            .chain(),
    );
    app
}

fn spawn_test_player(app: &mut App, position: Vec2, effects: PlayerEffects) -> Entity {
    let radius = test_config().player_radius;
    app.world_mut()
        .spawn((
            Player::default(),
            Weapon::default(),
            effects,
            Velocity(Vec2::ZERO),
            CircleBody { radius },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

fn spawn_test_asteroid(app: &mut App, position: Vec2, tier: AsteroidTier, velocity: Vec2) -> Entity {
    let radius = tier.radius(&test_config());
    app.world_mut()
        .spawn((
            Asteroid { tier },
            Velocity(velocity),
            CircleBody { radius },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

fn spawn_test_shot(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Shot,
            Velocity(Vec2::new(0.0, 500.0)),
            CircleBody {
                radius: test_config().shot_radius,
            },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

fn asteroid_tiers(app: &mut App) -> Vec<(AsteroidTier, Vec2)> {
    let world = app.world_mut();
    world
        .query::<(&Asteroid, &Transform)>()
        .iter(world)
        .map(|(a, t)| (a.tier, t.translation.truncate()))
        .collect()
}

// ── Player × Asteroid ─────────────────────────────────────────────────────────

/// Overlapping player and asteroid at (400,300)/(400,250) —
/// 50 apart, radii sum 80.  One life is lost and a fresh invulnerable ship
/// appears at the screen centre.
#[test]
fn fatal_hit_decrements_lives_and_respawns_invulnerable() {
    let mut app = game_app(3);
    let old_player = spawn_test_player(&mut app, Vec2::new(400.0, 300.0), PlayerEffects::default());
    spawn_test_asteroid(
        &mut app,
        Vec2::new(400.0, 250.0),
        AsteroidTier::Large,
        Vec2::ZERO,
    );

    app.update();

    assert_eq!(app.world().resource::<Lives>().0, 2);
    assert!(app.world().get_entity(old_player).is_err(), "old ship must be gone");

    let world = app.world_mut();
    let ships: Vec<(Vec2, bool)> = world
        .query_filtered::<(&Transform, &PlayerEffects), With<Player>>()
        .iter(world)
        .map(|(t, e)| (t.translation.truncate(), e.invulnerable))
        .collect();
    assert_eq!(ships.len(), 1, "exactly one fresh ship");
    let (position, invulnerable) = ships[0];
    assert_eq!(position, Vec2::new(400.0, 300.0), "respawn at screen centre");
    assert!(invulnerable, "respawn grants invulnerability");
}

/// Losing the last life ends the game instead of respawning.
#[test]
fn last_life_triggers_game_over_without_respawn() {
    let mut app = game_app(1);
    spawn_test_player(&mut app, Vec2::new(400.0, 300.0), PlayerEffects::default());
    spawn_test_asteroid(
        &mut app,
        Vec2::new(400.0, 250.0),
        AsteroidTier::Large,
        Vec2::ZERO,
    );

    app.update(); // collision requests GameOver
    app.update(); // StateTransition applies it

    assert_eq!(app.world().resource::<Lives>().0, 0);
    let world = app.world_mut();
    assert_eq!(
        world.query::<&Player>().iter(world).count(),
        0,
        "no respawn on the last life"
    );
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::GameOver
    );
}

/// An invulnerable ship sails through an asteroid untouched.
#[test]
fn invulnerable_ship_ignores_collisions() {
    let mut app = game_app(3);
    let mut effects = PlayerEffects::default();
    effects.make_invulnerable(3.0);
    let ship = spawn_test_player(&mut app, Vec2::new(400.0, 300.0), effects);
    spawn_test_asteroid(
        &mut app,
        Vec2::new(400.0, 250.0),
        AsteroidTier::Large,
        Vec2::ZERO,
    );

    app.update();

    assert_eq!(app.world().resource::<Lives>().0, 3);
    assert!(app.world().get_entity(ship).is_ok(), "same ship survives");
}

/// A shield absorbs exactly one hit and knocks the asteroid straight away
/// from the ship; the shield is gone immediately after.
#[test]
fn shield_absorbs_one_hit_and_knocks_asteroid_away() {
    let mut app = game_app(3);
    let mut effects = PlayerEffects::default();
    effects.activate_shield(5.0);
    let ship = spawn_test_player(&mut app, Vec2::new(400.0, 300.0), effects);
    let asteroid = spawn_test_asteroid(
        &mut app,
        Vec2::new(400.0, 250.0),
        AsteroidTier::Large,
        Vec2::new(30.0, 30.0),
    );

    app.update();

    assert_eq!(app.world().resource::<Lives>().0, 3, "shield prevents the death");
    assert!(app.world().get_entity(ship).is_ok());
    assert!(
        !app.world().get::<PlayerEffects>(ship).unwrap().shield,
        "shield is consumed by the hit"
    );

    let knocked = app.world().get::<Velocity>(asteroid).unwrap().0;
    let away = Vec2::new(0.0, -1.0); // asteroid sits below the ship
    assert!(
        knocked.normalize().dot(away) > 0.99,
        "asteroid knocked straight away, got {knocked:?}"
    );

    // Second frame, still overlapping: the shield no longer protects.
    app.world_mut().get_mut::<Velocity>(asteroid).unwrap().0 = Vec2::ZERO;
    app.update();
    assert_eq!(app.world().resource::<Lives>().0, 2, "second hit costs a life");
}

// ── Shot × Asteroid ───────────────────────────────────────────────────────────

/// A shot at (100,100) overlapping a Large asteroid at
/// (102,100).  Shot and parent vanish; two Medium children appear at the
/// parent's position; the Large point value lands on the score.
#[test]
fn shot_splits_large_asteroid_into_two_mediums() {
    let mut app = game_app(3);
    let config = test_config();
    let shot = spawn_test_shot(&mut app, Vec2::new(100.0, 100.0));
    let parent = spawn_test_asteroid(
        &mut app,
        Vec2::new(102.0, 100.0),
        AsteroidTier::Large,
        Vec2::new(60.0, 0.0),
    );

    app.update();

    assert!(app.world().get_entity(shot).is_err(), "shot is consumed");
    assert!(app.world().get_entity(parent).is_err(), "parent is destroyed");
    assert_eq!(app.world().resource::<Score>().0, config.points_large);

    let children = asteroid_tiers(&mut app);
    assert_eq!(children.len(), 2, "exactly two children");
    for (tier, position) in children {
        assert_eq!(tier, AsteroidTier::Medium);
        assert_eq!(position, Vec2::new(102.0, 100.0), "children spawn at the parent");
    }
}

/// The smallest tier shatters into nothing.
#[test]
fn shot_destroys_small_asteroid_with_no_children() {
    let mut app = game_app(3);
    let config = test_config();
    spawn_test_shot(&mut app, Vec2::new(100.0, 100.0));
    spawn_test_asteroid(
        &mut app,
        Vec2::new(102.0, 100.0),
        AsteroidTier::Small,
        Vec2::new(60.0, 0.0),
    );

    app.update();

    assert_eq!(app.world().resource::<Score>().0, config.points_small);
    assert_eq!(asteroid_tiers(&mut app).len(), 0, "Small leaves no fragments");
}

/// One shot never kills two asteroids, and split children are not re-hit by
/// other shots within the same frame's scan.
#[test]
fn one_shot_consumes_at_most_one_asteroid() {
    let mut app = game_app(3);
    let config = test_config();
    spawn_test_shot(&mut app, Vec2::new(100.0, 100.0));
    // Two Smalls both overlapping the single shot.
    spawn_test_asteroid(&mut app, Vec2::new(102.0, 100.0), AsteroidTier::Small, Vec2::ZERO);
    spawn_test_asteroid(&mut app, Vec2::new(98.0, 100.0), AsteroidTier::Small, Vec2::ZERO);

    app.update();

    assert_eq!(app.world().resource::<Score>().0, config.points_small);
    assert_eq!(asteroid_tiers(&mut app).len(), 1, "one asteroid survives the frame");
}

// ── Player × Power-up ─────────────────────────────────────────────────────────

/// Touching a pickup consumes it and starts the matching effect.
#[test]
fn collecting_powerups_grants_their_effects() {
    let mut app = game_app(3);
    let config = test_config();
    let ship = spawn_test_player(&mut app, Vec2::new(400.0, 300.0), PlayerEffects::default());

    for (kind, offset) in [
        (PowerKind::Shield, Vec2::new(10.0, 0.0)),
        (PowerKind::Speed, Vec2::new(-10.0, 0.0)),
    ] {
        app.world_mut().spawn((
            PowerUp {
                kind,
                lifetime: config.powerup_lifetime,
                pulse: 0.0,
            },
            Velocity(Vec2::ZERO),
            CircleBody {
                radius: config.powerup_radius,
            },
            Transform::from_translation((Vec2::new(400.0, 300.0) + offset).extend(0.0)),
        ));
    }

    app.update();

    let effects = app.world().get::<PlayerEffects>(ship).unwrap();
    assert!(effects.shield, "shield effect active after pickup");
    assert!(effects.speed_boost, "speed boost active after pickup");
    assert_eq!(effects.shield_timer, config.shield_duration);

    let world = app.world_mut();
    assert_eq!(
        world.query::<&PowerUp>().iter(world).count(),
        0,
        "both pickups consumed"
    );
}
