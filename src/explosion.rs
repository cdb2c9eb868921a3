//! Explosion particles: purely cosmetic debris spawned when something dies.
//!
//! Particles drift outward, shrink by a constant factor each tick, fade with
//! remaining lifetime, and despawn on expiry or once too small to see.  They
//! never participate in any gameplay query.

use crate::config::GameConfig;
use crate::motion::Velocity;
use bevy::prelude::*;
use rand::Rng;

/// Size below which a particle is removed early.
const MIN_VISIBLE_SIZE: f32 = 0.5;

/// Shrink factor applied to a particle's size every update tick.
const SHRINK_FACTOR: f32 = 0.95;

// ── Components ────────────────────────────────────────────────────────────────

/// One piece of explosion debris.
#[derive(Component, Debug)]
pub struct Particle {
    pub color: Color,
    pub size: f32,
    pub lifetime: f32,
    pub initial_lifetime: f32,
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

/// Burst `count` particles outward from `position`.
///
/// Direction is uniform over the circle; speed is sampled from the upper half
/// of the configured range; color is a random warm orange-to-red; particle
/// size scales with the `size` of whatever blew up.
pub fn spawn_explosion(
    commands: &mut Commands,
    rng: &mut impl Rng,
    config: &GameConfig,
    position: Vec2,
    size: f32,
    count: u32,
) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(config.explosion_speed * 0.5..config.explosion_speed);
        let color = Color::srgb(
            rng.gen_range(0.78..1.0),
            rng.gen_range(0.39..0.78),
            rng.gen_range(0.0..0.2),
        );
        commands.spawn((
            Particle {
                color,
                size: rng.gen_range(size * 0.1..size * 0.3),
                lifetime: config.explosion_lifetime,
                initial_lifetime: config.explosion_lifetime,
            },
            Velocity(Vec2::from_angle(angle) * speed),
            Transform::from_translation(position.extend(0.0)),
        ));
    }
}

// ── Decay ─────────────────────────────────────────────────────────────────────

/// Shrink and age every particle; despawn the expired and the invisible.
pub fn particle_decay_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Particle)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle) in query.iter_mut() {
        particle.lifetime -= dt;
        particle.size *= SHRINK_FACTOR;
        if particle.lifetime <= 0.0 || particle.size < MIN_VISIBLE_SIZE {
            commands.entity(entity).despawn();
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Draw particles as filled-looking dots whose color darkens as they age.
pub fn particle_gizmo_system(mut gizmos: Gizmos, query: Query<(&Particle, &Transform)>) {
    for (particle, transform) in query.iter() {
        let fade = (particle.lifetime / particle.initial_lifetime).clamp(0.0, 1.0);
        let c = particle.color.to_srgba();
        gizmos.circle_2d(
            transform.translation.truncate(),
            particle.size,
            Color::srgb(c.red * fade, c.green * fade, c.blue * fade),
        );
    }
}
