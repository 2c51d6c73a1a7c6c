//! Application states for the client
//!
//! The client has exactly two modes: a game in progress (from its own point
//! of view; the server owns the truth) and a finished game waiting for one of
//! the role buttons to start the next one. Input systems only run while
//! playing; the control panel is available in both states.

use bevy::prelude::*;

/// Top-level client state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States)]
pub enum GameState {
    /// A game is in progress
    #[default]
    Playing,

    /// The server announced a terminal outcome; awaiting restart
    GameOver,
}
