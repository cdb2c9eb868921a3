//! Game orchestration: the state machine, system registration and ordering,
//! the HUD, and the game-over overlay.
//!
//! ## States
//!
//! | State      | Description                                            |
//! |------------|--------------------------------------------------------|
//! | `Playing`  | Live gameplay; the full update chain runs              |
//! | `GameOver` | Gameplay frozen; world still rendered; Enter restarts  |
//!
//! ## Update order (while `Playing`)
//!
//! input/control → fire → integrate → wrap → effect timers → field spawn →
//! power-up lifetime → particle decay → player×asteroid → player×power-up →
//! shot×asteroid.  Rendering systems run in every state so the frozen world
//! stays visible behind the game-over overlay.

use crate::asteroid::{asteroid_field_system, asteroid_gizmo_system, Asteroid, AsteroidField};
use crate::collision::{
    player_asteroid_collision_system, player_powerup_collision_system,
    shot_asteroid_collision_system, Lives, Score,
};
use crate::config::{load_game_config, GameConfig};
use crate::explosion::{particle_decay_system, particle_gizmo_system, Particle};
use crate::motion::{integrate_motion_system, wrap_position_system};
use crate::player::{
    player_control_system, player_effects_system, player_fire_system, player_gizmo_system,
    spawn_player, Player, Shot,
};
use crate::powerup::{powerup_gizmo_system, powerup_lifetime_system, PowerUp};
use bevy::prelude::*;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.  The game drops straight into
/// `Playing`; `GameOver` freezes the update chain but keeps rendering.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Active gameplay.
    #[default]
    Playing,
    /// Terminal state after the last life is lost; Enter restarts.
    GameOver,
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the game-over overlay; the whole tree is despawned on
/// `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Marker for the score / lives HUD text node.
#[derive(Component)]
pub struct HudDisplay;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the state machine, resources, and every gameplay / rendering
/// system in its fixed order.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<Score>()
            .insert_resource(Lives(0))
            .add_systems(
                Startup,
                (
                    load_game_config,
                    setup_camera.after(load_game_config),
                    setup_hud.after(load_game_config),
                ),
            )
            .add_systems(OnEnter(GameState::Playing), enter_playing)
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over)
            .add_systems(
                Update,
                (
                    player_control_system,
                    player_fire_system,
                    integrate_motion_system,
                    wrap_position_system,
                    player_effects_system,
                    asteroid_field_system,
                    powerup_lifetime_system,
                    particle_decay_system,
                    player_asteroid_collision_system,
                    player_powerup_collision_system,
                    shot_asteroid_collision_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                restart_system.run_if(in_state(GameState::GameOver)),
            )
            // Rendering runs in every state so game over shows the frozen field.
            .add_systems(
                Update,
                (
                    asteroid_gizmo_system,
                    player_gizmo_system,
                    powerup_gizmo_system,
                    particle_gizmo_system,
                    hud_display_system,
                ),
            );
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the 2D camera centred on the playfield, so world coordinates run
/// `[0, width) × [0, height)` with the origin at the bottom-left.
pub fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(config.screen_center().extend(0.0)),
    ));
    eprintln!("[SETUP] Camera spawned");
}

/// Spawn the permanent top-left score / lives HUD.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0    Lives: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// ── OnEnter(Playing): (re)initialise the world ────────────────────────────────

/// Shared path for first launch and restart: clear every tracked entity,
/// reset score / lives / field timer, and spawn a fresh ship at centre.
#[allow(clippy::type_complexity)]
pub fn enter_playing(
    mut commands: Commands,
    leftovers: Query<
        Entity,
        Or<(
            With<Player>,
            With<Asteroid>,
            With<Shot>,
            With<PowerUp>,
            With<Particle>,
        )>,
    >,
    mut score: ResMut<Score>,
    mut lives: ResMut<Lives>,
    config: Res<GameConfig>,
) {
    for entity in leftovers.iter() {
        commands.entity(entity).despawn();
    }
    score.0 = 0;
    lives.0 = config.player_lives;
    commands.insert_resource(AsteroidField::new(config.asteroid_spawn_rate));
    spawn_player(&mut commands, &config, 0.0);
    println!("✓ World initialised: {} lives", config.player_lives);
}

// ── HUD refresh ───────────────────────────────────────────────────────────────

/// Rewrite the HUD text whenever score or lives changed.
pub fn hud_display_system(
    score: Res<Score>,
    lives: Res<Lives>,
    hud: Query<&Children, With<HudDisplay>>,
    mut texts: Query<&mut Text>,
) {
    if !score.is_changed() && !lives.is_changed() {
        return;
    }
    for children in hud.iter() {
        for child in children.iter() {
            if let Ok(mut text) = texts.get_mut(child) {
                text.0 = format!("Score: {}    Lives: {}", score.0, lives.0);
            }
        }
    }
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

/// Spawn the game-over card centred over the frozen world.
pub fn setup_game_over(mut commands: Commands, score: Res<Score>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            ZIndex(100),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.06, 0.02, 0.02)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("GAME OVER"),
                        TextFont {
                            font_size: 46.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.22, 0.22)),
                    ));
                    card.spawn((
                        Text::new(format!("Final score: {}", score.0)),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.85, 0.85, 0.85)),
                    ));
                    card.spawn((
                        Text::new("Press Enter to play again"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.45, 0.45, 0.55)),
                    ));
                });
        });
}

/// Despawn the game-over overlay tree.
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Restart on Enter: re-entering `Playing` runs [`enter_playing`], which
/// clears the field and respawns the ship.
pub fn restart_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
    }
}
