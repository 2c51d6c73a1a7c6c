use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use wirechess::core::config::{load_config_system, Cli, CliOverrides};
use wirechess::game::GamePlugin;
use wirechess::networking::NetworkPlugin;
use wirechess::rendering::{BoardPlugin, PieceGlyphPlugin};
use wirechess::ui::UiPlugin;

const WINDOW_WIDTH: u32 = 920;
const WINDOW_HEIGHT: u32 = 700;

fn main() {
    let cli = Cli::parse();

    let window = Window {
        title: "wirechess".into(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };
    let primary_window = Some(window);

    App::new()
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..default()
        })
        // Configuration (CLI overrides the config file)
        .insert_resource(CliOverrides { server: cli.server })
        .add_systems(PreStartup, load_config_system)
        // Game systems
        .add_plugins(GamePlugin)
        .add_plugins(NetworkPlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(PieceGlyphPlugin)
        .add_plugins(UiPlugin)
        .run();
}
