//! Collectible power-ups: drifting pickups dropped by destroyed asteroids.
//!
//! A pickup drifts in a random direction, screen-wraps, pulses visually, and
//! expires after a fixed lifetime if nobody collects it.  Touching one grants
//! (or refreshes) the matching timed effect on the ship.

use crate::config::GameConfig;
use crate::motion::{CircleBody, Velocity};
use bevy::prelude::*;
use rand::Rng;

// ── Components ────────────────────────────────────────────────────────────────

/// The effect a pickup grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerKind {
    Shield,
    Speed,
}

/// A drifting pickup.  `pulse` only feeds the radius modulation of the icon;
/// it never affects the collision radius.
#[derive(Component, Debug)]
pub struct PowerUp {
    pub kind: PowerKind,
    pub lifetime: f32,
    pub pulse: f32,
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

/// Roll the drop chance once.  Returns the kind to spawn, uniformly chosen,
/// or `None` on a failed roll.  Pure so tests can drive it with a seeded RNG.
pub fn roll_powerup(rng: &mut impl Rng, chance: f32) -> Option<PowerKind> {
    if !rng.gen_bool(chance as f64) {
        return None;
    }
    Some(if rng.gen_bool(0.5) {
        PowerKind::Shield
    } else {
        PowerKind::Speed
    })
}

/// Spawn a pickup of the given kind drifting in a random direction.
pub fn spawn_powerup(
    commands: &mut Commands,
    rng: &mut impl Rng,
    config: &GameConfig,
    position: Vec2,
    kind: PowerKind,
) {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    commands.spawn((
        PowerUp {
            kind,
            lifetime: config.powerup_lifetime,
            pulse: 0.0,
        },
        Velocity(Vec2::from_angle(angle) * config.powerup_speed),
        CircleBody {
            radius: config.powerup_radius,
        },
        Transform::from_translation(position.extend(0.0)),
    ));
}

/// Roll the drop chance at a destroyed asteroid's position and spawn the
/// pickup on success.
pub fn maybe_spawn_powerup(
    commands: &mut Commands,
    rng: &mut impl Rng,
    config: &GameConfig,
    position: Vec2,
) {
    if let Some(kind) = roll_powerup(rng, config.powerup_spawn_chance) {
        spawn_powerup(commands, rng, config, position, kind);
    }
}

// ── Lifetime ──────────────────────────────────────────────────────────────────

/// Advance pulse phase and lifetime; despawn expired pickups.
pub fn powerup_lifetime_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut PowerUp)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (entity, mut powerup) in query.iter_mut() {
        powerup.pulse += dt;
        powerup.lifetime -= dt;
        if powerup.lifetime <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Sinusoidal radius modulation for the icon: 0.8–1.0 of the base radius.
fn pulse_scale(pulse: f32) -> f32 {
    (pulse * 5.0).sin() * 0.2 + 0.8
}

/// Draw each pickup's pulsing icon: concentric circles for a shield, a circle
/// with a chevron arrow for speed.
pub fn powerup_gizmo_system(
    mut gizmos: Gizmos,
    query: Query<(&PowerUp, &Transform, &CircleBody)>,
) {
    for (powerup, transform, body) in query.iter() {
        let pos = transform.translation.truncate();
        let radius = body.radius * pulse_scale(powerup.pulse);

        match powerup.kind {
            PowerKind::Shield => {
                let color = Color::srgb(0.4, 0.78, 1.0);
                gizmos.circle_2d(pos, radius, color);
                gizmos.circle_2d(pos, radius / 2.0, color);
            }
            PowerKind::Speed => {
                let color = Color::srgb(1.0, 1.0, 0.4);
                gizmos.circle_2d(pos, radius, color);
                let tip = pos + Vec2::new(0.0, radius * 0.6);
                let left = pos + Vec2::new(-radius * 0.4, -radius * 0.3);
                let right = pos + Vec2::new(radius * 0.4, -radius * 0.3);
                gizmos.linestrip_2d([left, tip, right], color);
            }
        }
    }
}
