//! Shared kinematics: velocity integration, toroidal screen wrap, and the
//! circle-overlap test every collision system is built on.
//!
//! Every moving entity — ship, asteroid, shot, power-up, particle — carries a
//! [`Velocity`] and a [`CircleBody`] and is advanced by the same two systems.
//! There is no swept collision: a fast, small body can tunnel through another
//! between frames.  That approximation is accepted.

use crate::config::GameConfig;
use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Linear velocity in pixels/s.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// Circular collision body. Overlap is tested centre-to-centre against the
/// sum of two radii; orientation never matters.
#[derive(Component, Debug, Clone, Copy)]
pub struct CircleBody {
    pub radius: f32,
}

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Wrap a position into `[0, width) × [0, height)`.
///
/// Uses `rem_euclid`, so arbitrarily large overshoot on either axis lands
/// back in bounds in one call, and a position already in bounds is returned
/// unchanged.
pub fn wrap_vec2(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(pos.x.rem_euclid(width), pos.y.rem_euclid(height))
}

/// Circle-circle overlap: true when the centres are closer than the sum of
/// the radii.
pub fn circles_overlap(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    p1.distance_squared(p2) < (r1 + r2) * (r1 + r2)
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Advance every moving entity: `position += velocity * dt`.
pub fn integrate_motion_system(mut query: Query<(&Velocity, &mut Transform)>, time: Res<Time>) {
    let dt = time.delta_secs();
    for (velocity, mut transform) in query.iter_mut() {
        transform.translation.x += velocity.0.x * dt;
        transform.translation.y += velocity.0.y * dt;
    }
}

/// Teleport entities that left the playfield to the opposite edge.
pub fn wrap_position_system(
    mut query: Query<&mut Transform, With<Velocity>>,
    config: Res<GameConfig>,
) {
    for mut transform in query.iter_mut() {
        let wrapped = wrap_vec2(
            transform.translation.truncate(),
            config.screen_width,
            config.screen_height,
        );
        transform.translation.x = wrapped.x;
        transform.translation.y = wrapped.y;
    }
}
