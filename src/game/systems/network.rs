//! Applying server messages and restart requests to the session

use bevy::prelude::*;
use wirechess_core::Received;

use crate::core::GameState;
use crate::game::events::{InboundWire, OutboundWire, RestartRequested};
use crate::game::resources::ActiveGame;

/// Apply each inbound wire message to the game session
///
/// A move notation mutates the board; a terminal sentinel ends the game. A
/// message that is neither is protocol corruption: it is logged at error
/// level and dropped, leaving the session untouched.
pub fn apply_inbound_messages(
    mut inbound: MessageReader<InboundWire>,
    mut game: ResMut<ActiveGame>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for message in inbound.read() {
        match game.session.receive(&message.0) {
            Ok(Received::Move(mv)) => {
                debug!("[GAME] applied {mv}");
            }
            Ok(Received::GameOver(outcome)) => {
                info!("[GAME] {}", outcome.message());
                next_state.set(GameState::GameOver);
            }
            Err(err) => {
                error!("[GAME] dropping corrupt message {:?}: {err}", message.0);
            }
        }
    }
}

/// Reset the session for a chosen role and announce it to the server
pub fn handle_restart_requests(
    mut requests: MessageReader<RestartRequested>,
    mut game: ResMut<ActiveGame>,
    mut outbound: MessageWriter<OutboundWire>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for request in requests.read() {
        let token = game.session.restart(request.0);
        outbound.write(OutboundWire(token.to_owned()));
        next_state.set(GameState::Playing);
        info!("[GAME] restarted as {token}");
    }
}
