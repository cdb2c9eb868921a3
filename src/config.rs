//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.player_max_speed`, `config.asteroid_spawn_rate`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,

    // ── Player: Ship ─────────────────────────────────────────────────────────
    pub player_radius: f32,
    pub player_turn_speed: f32,
    pub player_acceleration: f32,
    pub player_max_speed: f32,
    pub player_friction: f32,
    pub player_lives: u32,
    pub respawn_invulnerability: f32,

    // ── Player: Weapon ───────────────────────────────────────────────────────
    pub player_shoot_speed: f32,
    pub player_shoot_cooldown: f32,
    pub shot_radius: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_min_radius: f32,
    pub asteroid_spawn_rate: f32,
    pub asteroid_speed_min: f32,
    pub asteroid_speed_max: f32,
    pub asteroid_spawn_cone: f32,
    pub asteroid_split_angle_min: f32,
    pub asteroid_split_angle_max: f32,
    pub asteroid_split_speedup: f32,
    pub points_large: u32,
    pub points_medium: u32,
    pub points_small: u32,

    // ── Power-ups ────────────────────────────────────────────────────────────
    pub powerup_radius: f32,
    pub powerup_speed: f32,
    pub powerup_lifetime: f32,
    pub powerup_spawn_chance: f32,
    pub shield_duration: f32,
    pub shield_knockback_speed: f32,
    pub speed_boost_duration: f32,
    pub speed_boost_multiplier: f32,

    // ── Explosions ───────────────────────────────────────────────────────────
    pub explosion_particles: u32,
    pub explosion_speed: f32,
    pub explosion_lifetime: f32,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl GameConfig {
    /// Screen-centre spawn point for the player ship.
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Screen
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            // Player: Ship
            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_max_speed: PLAYER_MAX_SPEED,
            player_friction: PLAYER_FRICTION,
            player_lives: PLAYER_LIVES,
            respawn_invulnerability: RESPAWN_INVULNERABILITY,
            // Player: Weapon
            player_shoot_speed: PLAYER_SHOOT_SPEED,
            player_shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            shot_radius: SHOT_RADIUS,
            // Asteroids
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_spawn_rate: ASTEROID_SPAWN_RATE,
            asteroid_speed_min: ASTEROID_SPEED_MIN,
            asteroid_speed_max: ASTEROID_SPEED_MAX,
            asteroid_spawn_cone: ASTEROID_SPAWN_CONE,
            asteroid_split_angle_min: ASTEROID_SPLIT_ANGLE_MIN,
            asteroid_split_angle_max: ASTEROID_SPLIT_ANGLE_MAX,
            asteroid_split_speedup: ASTEROID_SPLIT_SPEEDUP,
            points_large: POINTS_LARGE,
            points_medium: POINTS_MEDIUM,
            points_small: POINTS_SMALL,
            // Power-ups
            powerup_radius: POWERUP_RADIUS,
            powerup_speed: POWERUP_SPEED,
            powerup_lifetime: POWERUP_LIFETIME,
            powerup_spawn_chance: POWERUP_SPAWN_CHANCE,
            shield_duration: SHIELD_DURATION,
            shield_knockback_speed: SHIELD_KNOCKBACK_SPEED,
            speed_boost_duration: SPEED_BOOST_DURATION,
            speed_boost_multiplier: SPEED_BOOST_MULTIPLIER,
            // Explosions
            explosion_particles: EXPLOSION_PARTICLES,
            explosion_speed: EXPLOSION_SPEED,
            explosion_lifetime: EXPLOSION_LIFETIME,
            // HUD
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are printed
/// to stderr but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded game config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}
