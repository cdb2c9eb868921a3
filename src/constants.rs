//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors every constant for runtime override
//! via `assets/game.toml`; this file remains the authoritative default source.

// ── Screen ────────────────────────────────────────────────────────────────────

/// Playfield width in pixels. Entity positions live in `[0, SCREEN_WIDTH)`
/// and wrap toroidally at the edges.
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Playfield height in pixels. Positions wrap within `[0, SCREEN_HEIGHT)`.
pub const SCREEN_HEIGHT: f32 = 720.0;

// ── Player: Ship ──────────────────────────────────────────────────────────────

/// Collision radius of the player ship (pixels).
pub const PLAYER_RADIUS: f32 = 20.0;

/// Rotation rate while a turn key is held (degrees/s).
pub const PLAYER_TURN_SPEED: f32 = 300.0;

/// Forward acceleration while thrusting (pixels/s²).
pub const PLAYER_ACCELERATION: f32 = 300.0;

/// Hard cap on ship speed (pixels/s), before the boost multiplier.
///
/// Velocity is clamped to this magnitude after every thrust application, so
/// no input sequence can exceed it within a single tick.
pub const PLAYER_MAX_SPEED: f32 = 350.0;

/// Per-tick velocity multiplier (< 1), applied every update regardless of
/// thrust. Yields exponential decay toward rest, not linear braking.
pub const PLAYER_FRICTION: f32 = 0.99;

/// Starting (and restart) life count.
pub const PLAYER_LIVES: u32 = 3;

/// Seconds of invulnerability granted to a freshly respawned ship.
pub const RESPAWN_INVULNERABILITY: f32 = 3.0;

// ── Player: Weapon ────────────────────────────────────────────────────────────

/// Muzzle speed of a shot (pixels/s). Shots never decelerate.
pub const PLAYER_SHOOT_SPEED: f32 = 500.0;

/// Minimum interval between shots (seconds). The cooldown is reset to this
/// constant on every accepted shot; elapsed overshoot is discarded.
pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;

/// Collision radius of a shot (pixels).
pub const SHOT_RADIUS: f32 = 5.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Radius of the smallest asteroid tier (pixels). Medium and Large are 2×
/// and 3× this value.
pub const ASTEROID_MIN_RADIUS: f32 = 20.0;

/// Average seconds between field spawns at a screen edge.
pub const ASTEROID_SPAWN_RATE: f32 = 0.8;

/// Minimum initial asteroid speed (pixels/s).
pub const ASTEROID_SPEED_MIN: f32 = 40.0;

/// Maximum initial asteroid speed (pixels/s).
pub const ASTEROID_SPEED_MAX: f32 = 100.0;

/// Half-angle of the inward spawn cone (degrees). A spawned asteroid's
/// velocity is the inward edge normal rotated by a uniform sample in
/// `±ASTEROID_SPAWN_CONE`.
pub const ASTEROID_SPAWN_CONE: f32 = 30.0;

/// Minimum divergence angle between a split parent and each child (degrees).
pub const ASTEROID_SPLIT_ANGLE_MIN: f32 = 20.0;

/// Maximum divergence angle for split children (degrees).
pub const ASTEROID_SPLIT_ANGLE_MAX: f32 = 50.0;

/// Speed multiplier applied to split children. Deliberately > 1: fragments
/// fly faster than the parent (arcade feel, not energy conservation).
pub const ASTEROID_SPLIT_SPEEDUP: f32 = 1.2;

/// Points awarded for shooting a Large asteroid.
pub const POINTS_LARGE: u32 = 20;

/// Points awarded for shooting a Medium asteroid.
pub const POINTS_MEDIUM: u32 = 50;

/// Points awarded for shooting a Small asteroid. Smallest fragments are the
/// hardest to hit and worth the most.
pub const POINTS_SMALL: u32 = 100;

// ── Power-ups ─────────────────────────────────────────────────────────────────

/// Collision radius of a power-up pickup (pixels).
pub const POWERUP_RADIUS: f32 = 15.0;

/// Drift speed of a power-up (pixels/s).
pub const POWERUP_SPEED: f32 = 50.0;

/// Seconds an uncollected power-up survives before expiring.
pub const POWERUP_LIFETIME: f32 = 10.0;

/// Probability that destroying an asteroid drops a power-up.
pub const POWERUP_SPAWN_CHANCE: f32 = 0.15;

/// Seconds a collected shield lasts if it is never consumed by a hit.
pub const SHIELD_DURATION: f32 = 5.0;

/// Speed given to an asteroid knocked away by a shield hit (pixels/s).
pub const SHIELD_KNOCKBACK_SPEED: f32 = 200.0;

/// Seconds a speed boost lasts.
pub const SPEED_BOOST_DURATION: f32 = 5.0;

/// Multiplier applied to acceleration and max speed while boosted.
pub const SPEED_BOOST_MULTIPLIER: f32 = 1.5;

// ── Explosions ────────────────────────────────────────────────────────────────

/// Particles spawned per explosion burst.
pub const EXPLOSION_PARTICLES: u32 = 20;

/// Upper bound of outward particle speed (pixels/s); the lower bound is half
/// of this.
pub const EXPLOSION_SPEED: f32 = 150.0;

/// Seconds a particle survives before despawning.
pub const EXPLOSION_LIFETIME: f32 = 0.8;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Font size of the score / lives HUD text.
pub const HUD_FONT_SIZE: f32 = 22.0;
