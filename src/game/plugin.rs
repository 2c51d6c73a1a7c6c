//! Game plugin - session state, wire messages and game systems
//!
//! Registers the [`ActiveGame`] resource, the ECS messages the client
//! exchanges between layers, and the systems that consume them. Inbound
//! messages are applied before restart requests and input each frame so a
//! click never races a server move within one update.

use bevy::prelude::*;

use super::events::{InboundWire, OutboundWire, RestartRequested};
use super::resources::ActiveGame;
use super::systems::{apply_inbound_messages, board_click_system, handle_restart_requests};
use crate::core::GameState;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>();
        app.init_resource::<ActiveGame>();

        app.add_message::<InboundWire>()
            .add_message::<OutboundWire>()
            .add_message::<RestartRequested>();

        app.add_systems(
            Update,
            (
                apply_inbound_messages,
                handle_restart_requests,
                board_click_system.run_if(in_state(GameState::Playing)),
            )
                .chain(),
        );
    }
}
