//! Asteroids: the three size tiers, the edge-spawning field, and splitting.
//!
//! The field spawns one asteroid at a random point just outside a random
//! screen edge on a fixed cadence, aimed inward within a cone.  A shot
//! destroys a Small asteroid outright; Medium and Large break into exactly
//! two children of the next tier down, diverging from the parent's heading.

use crate::config::GameConfig;
use crate::motion::{CircleBody, Velocity};
use bevy::prelude::*;
use rand::Rng;

// ── Components / Resources ────────────────────────────────────────────────────

/// The three discrete asteroid size classes.  Tier fixes radius, point value,
/// and split behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidTier {
    Small,
    Medium,
    Large,
}

impl AsteroidTier {
    pub const ALL: [AsteroidTier; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Radius multiplier over the configured minimum radius.
    fn multiplier(self) -> f32 {
        match self {
            Self::Small => 1.0,
            Self::Medium => 2.0,
            Self::Large => 3.0,
        }
    }

    /// Collision (and drawn) radius for this tier.
    pub fn radius(self, config: &GameConfig) -> f32 {
        config.asteroid_min_radius * self.multiplier()
    }

    /// Points awarded for shooting an asteroid of this tier.
    pub fn points(self, config: &GameConfig) -> u32 {
        match self {
            Self::Small => config.points_small,
            Self::Medium => config.points_medium,
            Self::Large => config.points_large,
        }
    }

    /// The next tier down, or `None` at the minimum — a Small asteroid is
    /// destroyed with no children.
    pub fn smaller(self) -> Option<AsteroidTier> {
        match self {
            Self::Small => None,
            Self::Medium => Some(Self::Small),
            Self::Large => Some(Self::Medium),
        }
    }
}

/// A drifting rock.
#[derive(Component, Debug)]
pub struct Asteroid {
    pub tier: AsteroidTier,
}

/// Edge spawner state.  The timer repeats forever; there is no population cap.
#[derive(Resource)]
pub struct AsteroidField {
    pub spawn_timer: Timer,
}

impl AsteroidField {
    pub fn new(spawn_rate: f32) -> Self {
        Self {
            spawn_timer: Timer::from_seconds(spawn_rate, TimerMode::Repeating),
        }
    }
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

/// Spawn a single asteroid entity.
pub fn spawn_asteroid(
    commands: &mut Commands,
    config: &GameConfig,
    position: Vec2,
    velocity: Vec2,
    tier: AsteroidTier,
) {
    commands.spawn((
        Asteroid { tier },
        Velocity(velocity),
        CircleBody {
            radius: tier.radius(config),
        },
        Transform::from_translation(position.extend(0.0)),
    ));
}

/// Pick a random spawn point just outside a random screen edge, plus the
/// inward velocity for it: the edge normal rotated by a uniform sample within
/// the spawn cone, scaled by a uniform speed.
fn edge_spawn(rng: &mut impl Rng, config: &GameConfig, radius: f32) -> (Vec2, Vec2) {
    let (w, h) = (config.screen_width, config.screen_height);
    let t = rng.gen_range(0.0..1.0_f32);

    // Edges 0..4: left, right, top, bottom; `inward` is the unrotated heading.
    let (position, inward) = match rng.gen_range(0..4) {
        0 => (Vec2::new(-radius, t * h), Vec2::X),
        1 => (Vec2::new(w + radius, t * h), Vec2::NEG_X),
        2 => (Vec2::new(t * w, h + radius), Vec2::NEG_Y),
        _ => (Vec2::new(t * w, -radius), Vec2::Y),
    };

    let cone = config.asteroid_spawn_cone.to_radians();
    let angle = rng.gen_range(-cone..cone);
    let speed = rng.gen_range(config.asteroid_speed_min..config.asteroid_speed_max);
    (position, Vec2::from_angle(angle).rotate(inward) * speed)
}

/// Tick the field timer and spawn one asteroid of a random tier per expiry.
pub fn asteroid_field_system(
    mut commands: Commands,
    mut field: ResMut<AsteroidField>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    field.spawn_timer.tick(time.delta());
    // A long hitch can bank several expiries; honour each of them.
    for _ in 0..field.spawn_timer.times_finished_this_tick() {
        let mut rng = rand::thread_rng();
        let tier = AsteroidTier::ALL[rng.gen_range(0..AsteroidTier::ALL.len())];
        let (position, velocity) = edge_spawn(&mut rng, &config, tier.radius(&config));
        spawn_asteroid(&mut commands, &config, position, velocity, tier);
    }
}

// ── Split ─────────────────────────────────────────────────────────────────────

/// The two diverging child velocities for a split: the parent velocity
/// rotated by ±(a random divergence angle) and sped up.
pub fn split_velocities(rng: &mut impl Rng, config: &GameConfig, parent_velocity: Vec2) -> (Vec2, Vec2) {
    let angle = rng
        .gen_range(config.asteroid_split_angle_min..config.asteroid_split_angle_max)
        .to_radians();
    let speedup = config.asteroid_split_speedup;
    (
        Vec2::from_angle(angle).rotate(parent_velocity) * speedup,
        Vec2::from_angle(-angle).rotate(parent_velocity) * speedup,
    )
}

/// Break an already-despawned parent into children.
///
/// A Small parent leaves nothing; otherwise exactly two asteroids of the next
/// tier down appear at the parent's last position with diverging velocities.
pub fn split_asteroid(
    commands: &mut Commands,
    rng: &mut impl Rng,
    config: &GameConfig,
    position: Vec2,
    velocity: Vec2,
    tier: AsteroidTier,
) {
    let Some(child_tier) = tier.smaller() else {
        return;
    };
    let (v1, v2) = split_velocities(rng, config, velocity);
    spawn_asteroid(commands, config, position, v1, child_tier);
    spawn_asteroid(commands, config, position, v2, child_tier);
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Draw every asteroid as a white wireframe circle.
pub fn asteroid_gizmo_system(mut gizmos: Gizmos, query: Query<(&Transform, &CircleBody), With<Asteroid>>) {
    for (transform, body) in query.iter() {
        gizmos.circle_2d(transform.translation.truncate(), body.radius, Color::WHITE);
    }
}
