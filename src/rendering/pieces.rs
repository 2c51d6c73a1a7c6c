//! Piece rendering: glyphs drawn over the tile grid
//!
//! Each occupied square gets a text glyph from a per-piece mapping table,
//! colored by side. The glyph layer is rebuilt from the session whenever the
//! game resource changes; with at most 32 pieces on screen, despawn-and-
//! respawn is simpler than diffing and cheap enough.

use bevy::prelude::*;
use wirechess_core::{Piece, PieceKind, Side, Square};

use crate::game::resources::ActiveGame;
use crate::rendering::board::tile_center;

const GLYPH_SIZE: f32 = 44.0;

/// Marker for spawned piece glyphs
#[derive(Component, Debug, Clone, Copy)]
pub struct PieceGlyph;

/// Display letter for a piece
pub fn glyph(piece: Piece) -> &'static str {
    match piece.kind {
        PieceKind::Pawn => "P",
        PieceKind::Knight => "N",
        PieceKind::Bishop => "B",
        PieceKind::Rook => "R",
        PieceKind::Queen => "Q",
        PieceKind::King => "K",
    }
}

fn glyph_color(side: Side) -> Color {
    match side {
        Side::White => Color::srgb_u8(0xf5, 0xf5, 0xf5),
        Side::Black => Color::srgb_u8(0x85, 0x3a, 0x1d),
    }
}

/// Rebuild the glyph layer from the session
pub fn sync_piece_glyphs(
    mut commands: Commands,
    game: Res<ActiveGame>,
    existing: Query<Entity, With<PieceGlyph>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let board = game.session.board();
    for rank in 0..8 {
        for file in 0..8 {
            let square = Square::new(file, rank);
            let Ok(Some(piece)) = board.get(square) else {
                continue;
            };
            commands.spawn((
                Text2d::new(glyph(piece)),
                TextFont {
                    font_size: GLYPH_SIZE,
                    ..default()
                },
                TextColor(glyph_color(piece.side)),
                Transform::from_translation(tile_center(square).extend(1.0)),
                PieceGlyph,
            ));
        }
    }
}

pub struct PieceGlyphPlugin;

impl Plugin for PieceGlyphPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            sync_piece_glyphs.run_if(resource_changed::<ActiveGame>),
        );
    }
}
