use attrition::config::GameConfig;
use attrition::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use attrition::game::GamePlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    println!("Starting Attrition!");

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Attrition".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup schedule.
        .insert_resource(GameConfig::default())
        .add_plugins(GamePlugin)
        .run();
}
