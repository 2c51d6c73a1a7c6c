//! Board rendering: the 8x8 tile grid and its highlight colors
//!
//! Tiles are flat sprites centered on the origin with rank 0 at the bottom
//! (white's point of view). Colors layer in priority order: the selected
//! square, then the two endpoints of the last applied move, then the plain
//! checker pattern. Recoloring runs only when the game resource actually
//! changed.

use bevy::prelude::*;
use wirechess_core::{GameSession, Square};

use crate::game::resources::ActiveGame;

/// Edge length of one board tile in world units
pub const TILE_SIZE: f32 = 80.0;

const BOARD_HALF: f32 = TILE_SIZE * 4.0;

/// Component identifying a board tile's square
#[derive(Component, Debug, Clone, Copy)]
pub struct Tile {
    pub square: Square,
}

/// World-space center of a square
pub fn tile_center(square: Square) -> Vec2 {
    Vec2::new(
        (square.file as f32 - 3.5) * TILE_SIZE,
        (square.rank as f32 - 3.5) * TILE_SIZE,
    )
}

/// Snap a world-space point to the square containing it
pub fn square_at(world: Vec2) -> Option<Square> {
    let file = ((world.x + BOARD_HALF) / TILE_SIZE).floor();
    let rank = ((world.y + BOARD_HALF) / TILE_SIZE).floor();
    if (0.0..8.0).contains(&file) && (0.0..8.0).contains(&rank) {
        Some(Square::new(file as u8, rank as u8))
    } else {
        None
    }
}

fn is_light(square: Square) -> bool {
    (square.file + square.rank) % 2 == 0
}

fn base_color(square: Square) -> Color {
    if is_light(square) {
        Color::srgb_u8(0xaa, 0xaa, 0xaa)
    } else {
        Color::srgb_u8(0x22, 0x22, 0x22)
    }
}

/// Color of a tile given the current selection and highlight pair
fn tile_color(square: Square, session: &GameSession) -> Color {
    if session.selected() == Some(square) {
        return Color::srgb_u8(0x74, 0xff, 0x4a);
    }
    let highlighted = session
        .last_move()
        .is_some_and(|(from, to)| square == from || square == to);
    if highlighted {
        if is_light(square) {
            Color::srgb_u8(0xe0, 0xd8, 0x72)
        } else {
            Color::srgb_u8(0xc4, 0xbd, 0x58)
        }
    } else {
        base_color(square)
    }
}

/// Spawn the camera and the 64 tile sprites
pub fn spawn_board(mut commands: Commands) {
    commands.spawn(Camera2d);

    for rank in 0..8 {
        for file in 0..8 {
            let square = Square::new(file, rank);
            commands.spawn((
                Sprite::from_color(base_color(square), Vec2::splat(TILE_SIZE)),
                Transform::from_translation(tile_center(square).extend(0.0)),
                Tile { square },
            ));
        }
    }
}

/// Repaint tiles after any session mutation
pub fn recolor_tiles(game: Res<ActiveGame>, mut tiles: Query<(&Tile, &mut Sprite)>) {
    for (tile, mut sprite) in tiles.iter_mut() {
        sprite.color = tile_color(tile.square, &game.session);
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_board);
        app.add_systems(Update, recolor_tiles.run_if(resource_changed::<ActiveGame>));
    }
}
