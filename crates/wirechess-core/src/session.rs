//! Game session: move application, turn state and click selection
//!
//! [`GameSession`] owns the position store exclusively and is the only code
//! that mutates it. Two stimulus paths exist, both synchronous and handled to
//! completion: a local click feeds the selection state machine and may yield
//! an outgoing [`WireMove`], and an inbound wire message feeds
//! [`GameSession::receive`], which either applies a move or records a
//! terminal verdict.
//!
//! # Move application
//!
//! The wire carries endpoints only, so every special rule is inferred from
//! geometry when a move is applied, in a fixed order: the plain
//! source-to-destination write first, then promotion, then en passant
//! clearing, then the castling rook relocation, then the turn flip and
//! highlight update. The same algorithm runs for moves regardless of which
//! participant originated them.
//!
//! No legality checking happens here. The remote peer is authoritative:
//! illegal local attempts are sent and simply ignored by the peer, and any
//! well-formed inbound notation is applied unconditionally.

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::CoreError;
use crate::piece::{Piece, PieceKind, Side};
use crate::protocol::{GameOutcome, PlayerRole, WireMove};
use crate::square::Square;

/// Result of feeding one inbound wire message to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Received {
    /// A move notation was decoded and applied
    Move(WireMove),
    /// A terminal sentinel ended the game
    GameOver(GameOutcome),
}

/// Client-side state of one game: board, turn, role, selection, highlight
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Side,
    role: PlayerRole,
    playing: bool,
    selected: Option<Square>,
    last_move: Option<(Square, Square)>,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    pub fn new(role: PlayerRole) -> Self {
        GameSession {
            board: Board::new(),
            to_move: Side::White,
            role,
            playing: true,
            selected: None,
            last_move: None,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Endpoints of the most recently applied move, for display only
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Reset to a fresh game under the given role
    ///
    /// Returns the role-announcement token the caller must send to the
    /// server. Restarting twice in a row yields the same state as once.
    pub fn restart(&mut self, role: PlayerRole) -> &'static str {
        self.board.reset();
        self.to_move = Side::White;
        self.role = role;
        self.playing = true;
        self.selected = None;
        self.last_move = None;
        self.outcome = None;
        debug!("[SESSION] restarted as {}", role.token());
        role.token()
    }

    /// Feed one click into the selection state machine
    ///
    /// Selecting a piece of the side to move (when the role permits it)
    /// overwrites any prior selection. Any other click while a selection
    /// exists completes a move attempt: the notation is returned for the
    /// transport and the selection clears, with no local legality check.
    /// Spectators, and clicks after the game has ended, are ignored.
    pub fn click(&mut self, target: Square) -> Option<WireMove> {
        if self.role == PlayerRole::Spectator || !self.playing {
            return None;
        }

        if self.board.is_side(target, self.to_move) && self.role.may_move(self.to_move) {
            trace!("[SESSION] selected {target}");
            self.selected = Some(target);
            return None;
        }

        if let Some(origin) = self.selected.take() {
            let attempt = WireMove::new(origin, target);
            debug!("[SESSION] move attempt {attempt}");
            return Some(attempt);
        }

        None
    }

    /// Handle one inbound wire message
    ///
    /// Terminal sentinels mark the session non-playing and are never fed to
    /// the notation parser; anything else must be a move notation and is
    /// applied. A parse failure is protocol corruption and propagates as a
    /// hard error. The selection clears on every inbound message.
    pub fn receive(&mut self, raw: &str) -> Result<Received, CoreError> {
        self.selected = None;

        if let Some(outcome) = GameOutcome::from_signal(raw) {
            debug!("[SESSION] game over: {}", outcome.message());
            self.playing = false;
            self.outcome = Some(outcome);
            return Ok(Received::GameOver(outcome));
        }

        let mv = WireMove::parse(raw)?;
        self.apply_move(mv)?;
        Ok(Received::Move(mv))
    }

    /// Apply a decoded move to the board, inferring special-rule effects
    pub fn apply_move(&mut self, mv: WireMove) -> Result<(), CoreError> {
        let moving = self.board.get(mv.from)?;
        let captured = self.board.get(mv.to)?;

        self.board.set(mv.to, moving)?;
        self.board.set(mv.from, None)?;

        if let Some(piece) = moving {
            // Promotion: the wire cannot express a piece choice, so a pawn
            // reaching its far rank always becomes a queen.
            if piece.kind == PieceKind::Pawn && mv.to.rank == piece.side.promotion_rank() {
                self.board
                    .set(mv.to, Some(Piece::new(piece.side, PieceKind::Queen)))?;
            }

            // En passant: a diagonal pawn move onto an empty square can only
            // be an en passant capture; the victim sits beside the source.
            if piece.kind == PieceKind::Pawn && mv.from.file != mv.to.file && captured.is_none() {
                self.board.set(Square::new(mv.to.file, mv.from.rank), None)?;
            }

            // Castling: a king leaving file 4 on its home rank for file 2 or
            // 6 drags the matching rook along.
            if piece.kind == PieceKind::King
                && mv.from.file == 4
                && mv.from.rank == piece.side.home_rank()
            {
                let rank = piece.side.home_rank();
                let rook = Some(Piece::new(piece.side, PieceKind::Rook));
                match mv.to.file {
                    2 => {
                        self.board.set(Square::new(3, rank), rook)?;
                        self.board.set(Square::new(0, rank), None)?;
                    }
                    6 => {
                        self.board.set(Square::new(5, rank), rook)?;
                        self.board.set(Square::new(7, rank), None)?;
                    }
                    _ => {}
                }
            }
        }

        self.to_move = self.to_move.opposite();
        self.last_move = Some((mv.from, mv.to));
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(PlayerRole::White)
    }
}
