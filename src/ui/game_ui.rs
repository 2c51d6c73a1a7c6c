//! Control panel: role selection, game status and connection health
//!
//! A single egui side panel holds the whole control surface: four role
//! buttons that each restart the game under that role, a turn/role readout,
//! the outcome banner once the server ends the game, and a warning when the
//! connection drops.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use wirechess_core::{PlayerRole, Side};

use crate::game::events::RestartRequested;
use crate::game::resources::ActiveGame;
use crate::networking::ConnectionStatus;

fn role_label(role: PlayerRole) -> &'static str {
    match role {
        PlayerRole::White => "White",
        PlayerRole::Black => "Black",
        PlayerRole::Both => "Both",
        PlayerRole::Spectator => "Spectator",
    }
}

/// Draw the control panel
pub fn control_panel_ui(
    mut contexts: EguiContexts,
    game: Res<ActiveGame>,
    connection: Res<ConnectionStatus>,
    mut restart: MessageWriter<RestartRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("control_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("wirechess");
            ui.separator();

            if connection.lost {
                ui.colored_label(egui::Color32::RED, "Connection lost!");
                ui.separator();
            }

            let session = &game.session;
            ui.label(format!("Playing as: {}", role_label(session.role())));

            match session.outcome() {
                Some(outcome) => {
                    ui.strong(outcome.message());
                }
                None => {
                    let turn = match session.side_to_move() {
                        Side::White => "White",
                        Side::Black => "Black",
                    };
                    ui.label(format!("{turn} to move"));
                }
            }

            ui.separator();
            ui.label("New game as:");
            for role in [
                PlayerRole::White,
                PlayerRole::Black,
                PlayerRole::Both,
                PlayerRole::Spectator,
            ] {
                if ui.button(role_label(role)).clicked() {
                    restart.write(RestartRequested(role));
                }
            }
        });
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, control_panel_ui);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(role_label(PlayerRole::White), "White");
        assert_eq!(role_label(PlayerRole::Black), "Black");
        assert_eq!(role_label(PlayerRole::Both), "Both");
        assert_eq!(role_label(PlayerRole::Spectator), "Spectator");
    }
}
