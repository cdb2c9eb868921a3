//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering — so they run
//! fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `Playing` (the game starts straight in).
//! 2. A `NextState` request transitions `Playing` → `GameOver`.
//! 3. `GameOver` persists across frames with no new transition request.
//! 4. `GameOver` → `Playing` (the restart path) works.

use attrition::game::GameState;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
fn app_with_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

fn current_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The game boots directly into `Playing` — there is no front menu.
#[test]
fn default_state_is_playing() {
    let mut app = app_with_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(current_state(&app), GameState::Playing);
}

/// Losing the last life requests `GameOver`; the transition lands on the next
/// `StateTransition` pass.
#[test]
fn transition_playing_to_game_over() {
    let mut app = app_with_state();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();

    assert_eq!(current_state(&app), GameState::GameOver);
}

/// `GameOver` is stable: without a restart request it never reverts.
#[test]
fn game_over_persists_across_frames() {
    let mut app = app_with_state();
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(current_state(&app), GameState::GameOver);
}

/// The restart path: `GameOver` → `Playing` round-trips cleanly.
#[test]
fn restart_returns_to_playing() {
    let mut app = app_with_state();
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();

    assert_eq!(current_state(&app), GameState::Playing);
}
