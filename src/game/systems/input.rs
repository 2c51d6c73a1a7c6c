//! Pointer input: turning clicks into board squares
//!
//! The cursor position is projected into world space and snapped to the tile
//! grid; the resulting square feeds the core selection state machine, which
//! decides whether the click selects a piece or completes a move attempt.
//! Clicks outside the board, or with no window/camera available, are ignored.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::game::events::OutboundWire;
use crate::game::resources::ActiveGame;
use crate::rendering::board::square_at;

/// Feed left clicks into the selection state machine
pub fn board_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut game: ResMut<ActiveGame>,
    mut outbound: MessageWriter<OutboundWire>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };
    let Some(square) = square_at(world) else {
        return;
    };

    debug!("[INPUT] click on {square}");
    if let Some(attempt) = game.session.click(square) {
        info!("[INPUT] sending move attempt {attempt}");
        outbound.write(OutboundWire(attempt.to_string()));
    }
}
