//! Player ship: controls, thrust model, weapon, timed effects, and rendering.
//!
//! The ship is the only entity the keyboard drives.  Its movement model is
//! arcade-style: thrust accelerates along the facing direction, speed is
//! clamped to a maximum, and a per-tick friction multiplier decays velocity
//! exponentially toward rest whether or not the engine is firing.

use crate::config::GameConfig;
use crate::motion::{CircleBody, Velocity};
use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// The player ship.  `rotation` is an unbounded accumulating angle in
/// degrees; 0° points straight up and positive angles turn counter-clockwise.
#[derive(Component, Debug, Default)]
pub struct Player {
    pub rotation: f32,
    /// True on frames where the thrust key is held; drives the flame visual.
    pub thrusting: bool,
}

/// Fire-rate gate.  Reset to the configured cooldown constant on every
/// accepted shot; elapsed overshoot past zero is discarded.
#[derive(Component, Debug, Default)]
pub struct Weapon {
    pub cooldown: f32,
}

/// Timed status effects, one independent flag + countdown per effect.
///
/// The flags are orthogonal: a ship can be invulnerable, shielded, and
/// boosted all at once.  Each timer ticks down every frame and clears its
/// flag at zero; the shield can additionally be consumed early by a hit.
#[derive(Component, Debug, Default)]
pub struct PlayerEffects {
    pub invulnerable: bool,
    pub invulnerable_timer: f32,
    pub shield: bool,
    pub shield_timer: f32,
    pub speed_boost: bool,
    pub speed_boost_timer: f32,
}

impl PlayerEffects {
    /// Grant timed invulnerability (fresh spawns and respawns).
    pub fn make_invulnerable(&mut self, duration: f32) {
        self.invulnerable = true;
        self.invulnerable_timer = duration;
    }

    /// Raise the shield.  Collecting a second shield refreshes the duration;
    /// there is no stacking.
    pub fn activate_shield(&mut self, duration: f32) {
        self.shield = true;
        self.shield_timer = duration;
    }

    /// Spend the shield on a hit.  Blocks exactly one collision: the flag is
    /// false immediately after and stays false until reactivated.
    pub fn consume_shield(&mut self) {
        self.shield = false;
        self.shield_timer = 0.0;
    }

    pub fn activate_speed_boost(&mut self, duration: f32) {
        self.speed_boost = true;
        self.speed_boost_timer = duration;
    }

    /// Tick every countdown and drop flags whose timer expired.
    pub fn tick(&mut self, dt: f32) {
        if self.invulnerable {
            self.invulnerable_timer -= dt;
            if self.invulnerable_timer <= 0.0 {
                self.invulnerable = false;
                self.invulnerable_timer = 0.0;
            }
        }
        if self.shield {
            self.shield_timer -= dt;
            if self.shield_timer <= 0.0 {
                self.consume_shield();
            }
        }
        if self.speed_boost {
            self.speed_boost_timer -= dt;
            if self.speed_boost_timer <= 0.0 {
                self.speed_boost = false;
                self.speed_boost_timer = 0.0;
            }
        }
    }
}

/// A fired projectile.  Constant velocity, screen-wraps like everything else,
/// and is removed only by hitting an asteroid — a shot that misses keeps
/// orbiting the torus indefinitely.
#[derive(Component, Debug)]
pub struct Shot;

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Unit vector the ship is facing for a rotation in degrees.
/// 0° is +Y ("up"); positive rotation is counter-clockwise.
pub fn forward(rotation_degrees: f32) -> Vec2 {
    let rad = rotation_degrees.to_radians();
    Vec2::new(-rad.sin(), rad.cos())
}

/// Clamp a velocity to a maximum magnitude, preserving direction.
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    if velocity.length() > max_speed {
        velocity.normalize() * max_speed
    } else {
        velocity
    }
}

/// The three world-space corners of the ship triangle.
fn ship_triangle(position: Vec2, rotation: f32, radius: f32) -> [Vec2; 3] {
    let fwd = forward(rotation);
    let right = fwd.perp() * radius / 1.5;
    [
        position + fwd * radius,
        position - fwd * radius - right,
        position - fwd * radius + right,
    ]
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

/// Spawn a fresh ship at screen centre with zero velocity and the given
/// invulnerability grace period.
pub fn spawn_player(commands: &mut Commands, config: &GameConfig, invulnerability: f32) {
    let mut effects = PlayerEffects::default();
    effects.make_invulnerable(invulnerability);

    commands.spawn((
        Player::default(),
        Weapon::default(),
        effects,
        Velocity(Vec2::ZERO),
        CircleBody {
            radius: config.player_radius,
        },
        Transform::from_translation(config.screen_center().extend(0.0)),
    ));
}

/// Spawn a shot at `position` travelling along the ship's facing direction.
pub fn spawn_shot(commands: &mut Commands, config: &GameConfig, position: Vec2, rotation: f32) {
    commands.spawn((
        Shot,
        Velocity(forward(rotation) * config.player_shoot_speed),
        CircleBody {
            radius: config.shot_radius,
        },
        Transform::from_translation(position.extend(0.0)),
    ));
}

// ── Control system ────────────────────────────────────────────────────────────

/// Apply turn / thrust input, clamp speed, and apply friction.
///
/// Friction runs every tick regardless of thrust, so releasing the key decays
/// the ship exponentially toward rest rather than stopping it linearly.
pub fn player_control_system(
    mut query: Query<(&mut Player, &mut Velocity, &PlayerEffects)>,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let Ok((mut player, mut velocity, effects)) = query.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    // A/← and D/→ turn; rotation accumulates without bound.
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        player.rotation += config.player_turn_speed * dt;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        player.rotation -= config.player_turn_speed * dt;
    }

    let (mut acceleration, mut max_speed) = (config.player_acceleration, config.player_max_speed);
    if effects.speed_boost {
        acceleration *= config.speed_boost_multiplier;
        max_speed *= config.speed_boost_multiplier;
    }

    player.thrusting = keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp);
    if player.thrusting {
        velocity.0 += forward(player.rotation) * acceleration * dt;
    }

    velocity.0 = clamp_speed(velocity.0, max_speed);
    velocity.0 *= config.player_friction;
}

// ── Fire system ───────────────────────────────────────────────────────────────

/// Spawn a shot while the fire key is held, throttled by the weapon cooldown.
pub fn player_fire_system(
    mut commands: Commands,
    mut query: Query<(&Player, &mut Weapon, &Transform)>,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let Ok((player, mut weapon, transform)) = query.single_mut() else {
        return;
    };

    weapon.cooldown = (weapon.cooldown - time.delta_secs()).max(0.0);

    if keys.pressed(KeyCode::Space) && weapon.cooldown <= 0.0 {
        spawn_shot(
            &mut commands,
            &config,
            transform.translation.truncate(),
            player.rotation,
        );
        weapon.cooldown = config.player_shoot_cooldown;
    }
}

// ── Effect timers ─────────────────────────────────────────────────────────────

/// Tick invulnerability / shield / boost countdowns every frame.
pub fn player_effects_system(mut query: Query<&mut PlayerEffects>, time: Res<Time>) {
    let dt = time.delta_secs();
    for mut effects in query.iter_mut() {
        effects.tick(dt);
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Draw the ship, its status rings, the thrust flame, and all live shots as
/// gizmo wireframes.
pub fn player_gizmo_system(
    mut gizmos: Gizmos,
    q_player: Query<(&Player, &PlayerEffects, &Transform, &CircleBody)>,
    q_shots: Query<&Transform, With<Shot>>,
) {
    if let Ok((player, effects, transform, body)) = q_player.single() {
        let pos = transform.translation.truncate();

        // 10 Hz blink while invulnerable: skip the ship on odd phases.
        let blink_off = effects.invulnerable && (effects.invulnerable_timer * 10.0) as i32 % 2 == 1;
        if !blink_off {
            let color = if effects.invulnerable {
                Color::srgb(0.4, 0.4, 1.0)
            } else {
                Color::WHITE
            };
            let [a, b, c] = ship_triangle(pos, player.rotation, body.radius);
            gizmos.linestrip_2d([a, b, c, a], color);

            if player.thrusting {
                let fwd = forward(player.rotation);
                let side = fwd.perp() * 5.0;
                let base = pos - fwd * body.radius;
                let tip = base - fwd * 10.0;
                let left = base - fwd * 5.0 + side;
                let right = base - fwd * 5.0 - side;
                gizmos.linestrip_2d([base, left, tip, right, base], Color::srgb(1.0, 0.55, 0.0));
            }
        }

        if effects.shield {
            gizmos.circle_2d(pos, body.radius + 10.0, Color::srgb(0.4, 0.78, 1.0));
        }
        if effects.speed_boost {
            gizmos.circle_2d(pos, body.radius + 5.0, Color::srgb(1.0, 1.0, 0.4));
        }
    }

    let shot_color = Color::srgb(1.0, 0.9, 0.2);
    for transform in q_shots.iter() {
        gizmos.circle_2d(transform.translation.truncate(), 3.0, shot_color);
    }
}
