//! Pairwise collision resolution and score / lives bookkeeping.
//!
//! Three scans run in a fixed order every frame: player×asteroid (first
//! qualifying hit wins), player×power-up, then shot×asteroid (a full nested
//! scan — no spatial partitioning at these entity counts).  All tests are
//! circle overlaps via [`crate::motion::circles_overlap`].

use crate::asteroid::{split_asteroid, Asteroid};
use crate::config::GameConfig;
use crate::explosion::spawn_explosion;
use crate::game::GameState;
use crate::motion::{circles_overlap, CircleBody, Velocity};
use crate::player::{spawn_player, Player, PlayerEffects, Shot};
use crate::powerup::{maybe_spawn_powerup, PowerKind, PowerUp};
use bevy::prelude::*;
use std::collections::HashSet;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Accumulated score, awarded per asteroid by its pre-split tier.
#[derive(Resource, Debug, Default)]
pub struct Score(pub u32);

/// Remaining lives.  Reaching zero is the designed terminal state, not an
/// error.
#[derive(Resource, Debug)]
pub struct Lives(pub u32);

// ── Player × Asteroid ─────────────────────────────────────────────────────────

/// Resolve the first asteroid overlapping the ship this frame.
///
/// Invulnerability ignores the hit entirely; a shield is consumed and knocks
/// the asteroid away; otherwise the ship dies — a life is lost, and the ship
/// either respawns at centre with grace invulnerability or the game ends.
#[allow(clippy::type_complexity)]
pub fn player_asteroid_collision_system(
    mut commands: Commands,
    mut q_player: Query<(Entity, &Transform, &CircleBody, &mut PlayerEffects), With<Player>>,
    mut q_asteroids: Query<
        (&Transform, &CircleBody, &mut Velocity),
        (With<Asteroid>, Without<Player>),
    >,
    mut lives: ResMut<Lives>,
    mut next_state: ResMut<NextState<GameState>>,
    config: Res<GameConfig>,
) {
    let Ok((player_entity, player_transform, player_body, mut effects)) = q_player.single_mut()
    else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (ast_transform, ast_body, mut ast_velocity) in q_asteroids.iter_mut() {
        let ast_pos = ast_transform.translation.truncate();
        if !circles_overlap(player_pos, player_body.radius, ast_pos, ast_body.radius) {
            continue;
        }

        if effects.invulnerable {
            // Grace period: the hit is ignored outright.
        } else if effects.shield {
            effects.consume_shield();
            // Knock the offending asteroid straight away from the ship.
            let away = (ast_pos - player_pos).normalize_or_zero();
            ast_velocity.0 = away * config.shield_knockback_speed;
            println!("Shield absorbed a hit!");
        } else {
            lives.0 = lives.0.saturating_sub(1);
            let mut rng = rand::thread_rng();
            spawn_explosion(
                &mut commands,
                &mut rng,
                &config,
                player_pos,
                player_body.radius,
                config.explosion_particles,
            );
            commands.entity(player_entity).despawn();

            if lives.0 == 0 {
                println!("Game over!");
                next_state.set(GameState::GameOver);
            } else {
                println!("Ship destroyed! Lives left: {}", lives.0);
                spawn_player(&mut commands, &config, config.respawn_invulnerability);
            }
        }

        // First qualifying hit wins; later asteroids wait for the next frame.
        break;
    }
}

// ── Player × Power-up ─────────────────────────────────────────────────────────

/// Consume every pickup the ship overlaps this frame; collecting a duplicate
/// kind refreshes its duration.
pub fn player_powerup_collision_system(
    mut commands: Commands,
    mut q_player: Query<(&Transform, &CircleBody, &mut PlayerEffects), With<Player>>,
    q_powerups: Query<(Entity, &Transform, &CircleBody, &PowerUp)>,
    config: Res<GameConfig>,
) {
    let Ok((player_transform, player_body, mut effects)) = q_player.single_mut() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (entity, transform, body, powerup) in q_powerups.iter() {
        let pos = transform.translation.truncate();
        if !circles_overlap(player_pos, player_body.radius, pos, body.radius) {
            continue;
        }
        match powerup.kind {
            PowerKind::Shield => effects.activate_shield(config.shield_duration),
            PowerKind::Speed => effects.activate_speed_boost(config.speed_boost_duration),
        }
        commands.entity(entity).despawn();
    }
}

// ── Shot × Asteroid ───────────────────────────────────────────────────────────

/// Nested shot×asteroid scan.  A hit removes the shot, splits (or destroys)
/// the asteroid, awards the pre-split tier's points, rolls the power-up drop,
/// and bursts an explosion at the impact.
pub fn shot_asteroid_collision_system(
    mut commands: Commands,
    q_shots: Query<(Entity, &Transform, &CircleBody), With<Shot>>,
    q_asteroids: Query<(Entity, &Transform, &CircleBody, &Velocity, &Asteroid)>,
    mut score: ResMut<Score>,
    config: Res<GameConfig>,
) {
    // Entities handled this frame; a shot kills one asteroid and vice versa.
    let mut spent_shots: HashSet<Entity> = HashSet::new();
    let mut broken_asteroids: HashSet<Entity> = HashSet::new();

    for (shot_entity, shot_transform, shot_body) in q_shots.iter() {
        if spent_shots.contains(&shot_entity) {
            continue;
        }
        let shot_pos = shot_transform.translation.truncate();

        for (ast_entity, ast_transform, ast_body, ast_velocity, asteroid) in q_asteroids.iter() {
            if broken_asteroids.contains(&ast_entity) {
                continue;
            }
            let ast_pos = ast_transform.translation.truncate();
            if !circles_overlap(shot_pos, shot_body.radius, ast_pos, ast_body.radius) {
                continue;
            }

            spent_shots.insert(shot_entity);
            broken_asteroids.insert(ast_entity);
            commands.entity(shot_entity).despawn();
            commands.entity(ast_entity).despawn();

            score.0 += asteroid.tier.points(&config);

            let mut rng = rand::thread_rng();
            split_asteroid(
                &mut commands,
                &mut rng,
                &config,
                ast_pos,
                ast_velocity.0,
                asteroid.tier,
            );
            maybe_spawn_powerup(&mut commands, &mut rng, &config, ast_pos);
            spawn_explosion(
                &mut commands,
                &mut rng,
                &config,
                ast_pos,
                ast_body.radius,
                config.explosion_particles,
            );
            break;
        }
    }
}
