//! ECS messages connecting input, game logic and the transport

use bevy::prelude::*;
use wirechess_core::PlayerRole;

/// Raw text payload received from the server
#[derive(Message, Debug, Clone)]
pub struct InboundWire(pub String);

/// Raw text payload queued for the server
#[derive(Message, Debug, Clone)]
pub struct OutboundWire(pub String);

/// A role button was pressed: start a fresh game under that role
#[derive(Message, Debug, Clone, Copy)]
pub struct RestartRequested(pub PlayerRole);
