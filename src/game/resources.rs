//! Game resources

use bevy::prelude::*;
use wirechess_core::GameSession;

/// The one owned game state
///
/// Every stimulus (a click, an inbound message, a restart) mutates the
/// session through exclusive `ResMut` access within a single system run, so
/// no partial mutation is ever visible across events. Rendering systems react
/// to change detection on this resource.
#[derive(Resource, Debug, Default)]
pub struct ActiveGame {
    pub session: GameSession,
}
