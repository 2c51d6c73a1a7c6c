//! Wire protocol: move notation, role tokens, terminal signals
//!
//! The wire format is deliberately minimal. A move is the 4-character
//! concatenation of its source and destination square names ("e2e4") with no
//! promotion, capture or check fields; every secondary effect is inferred by
//! the receiver from board geometry. The only other inbound payloads are the
//! three terminal sentinels, and the only other outbound payload is the role
//! announcement token sent on restart.
//!
//! Because promotion carries no piece field, underpromotion is not
//! representable; a promoting pawn always becomes a queen.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::piece::Side;
use crate::square::Square;

/// A move on the wire: source and destination endpoints, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireMove {
    pub from: Square,
    pub to: Square,
}

impl WireMove {
    pub fn new(from: Square, to: Square) -> Self {
        WireMove { from, to }
    }

    /// Parse the 4-character notation, e.g. "g1f3"
    pub fn parse(text: &str) -> Result<WireMove, CoreError> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(CoreError::MalformedNotation {
                text: text.to_owned(),
            });
        }
        Ok(WireMove {
            from: Square::from_name(&text[..2])?,
            to: Square::from_name(&text[2..])?,
        })
    }
}

impl fmt::Display for WireMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for WireMove {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WireMove::parse(s)
    }
}

/// The local participant's relationship to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerRole {
    #[default]
    White,
    Black,
    /// Hot-seat: both sides are driven from this client
    Both,
    Spectator,
}

impl PlayerRole {
    /// Announcement token sent to the server on restart
    pub fn token(self) -> &'static str {
        match self {
            PlayerRole::White => "white",
            PlayerRole::Black => "black",
            PlayerRole::Both => "both",
            PlayerRole::Spectator => "spectator",
        }
    }

    /// Whether this role is allowed to move pieces of the given side
    pub fn may_move(self, side: Side) -> bool {
        match self {
            PlayerRole::White => side == Side::White,
            PlayerRole::Black => side == Side::Black,
            PlayerRole::Both => true,
            PlayerRole::Spectator => false,
        }
    }
}

/// End-of-game verdict reported by the authoritative peer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    /// Decode a terminal sentinel, `None` if the text is not one
    pub fn from_signal(text: &str) -> Option<GameOutcome> {
        match text {
            "white wins" => Some(GameOutcome::WhiteWins),
            "black wins" => Some(GameOutcome::BlackWins),
            "draw" => Some(GameOutcome::Draw),
            _ => None,
        }
    }

    /// Banner text shown to the user
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "Checkmate! White wins",
            GameOutcome::BlackWins => "Checkmate! Black wins",
            GameOutcome::Draw => "Stalemate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_move_parse_and_display() {
        let mv = WireMove::parse("e2e4").unwrap();
        assert_eq!(mv.from, Square::new(4, 1));
        assert_eq!(mv.to, Square::new(4, 3));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_wire_move_rejects_garbage() {
        for text in ["", "e2", "e2e", "e2e44", "e2x4", "white wins", "\u{265a}2e4"] {
            assert!(
                matches!(
                    WireMove::parse(text),
                    Err(CoreError::MalformedNotation { .. })
                ),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_role_tokens() {
        assert_eq!(PlayerRole::White.token(), "white");
        assert_eq!(PlayerRole::Black.token(), "black");
        assert_eq!(PlayerRole::Both.token(), "both");
        assert_eq!(PlayerRole::Spectator.token(), "spectator");
    }

    #[test]
    fn test_role_move_permissions() {
        assert!(PlayerRole::White.may_move(Side::White));
        assert!(!PlayerRole::White.may_move(Side::Black));
        assert!(PlayerRole::Black.may_move(Side::Black));
        assert!(!PlayerRole::Black.may_move(Side::White));
        assert!(PlayerRole::Both.may_move(Side::White));
        assert!(PlayerRole::Both.may_move(Side::Black));
        assert!(!PlayerRole::Spectator.may_move(Side::White));
        assert!(!PlayerRole::Spectator.may_move(Side::Black));
    }

    #[test]
    fn test_terminal_signals() {
        assert_eq!(GameOutcome::from_signal("white wins"), Some(GameOutcome::WhiteWins));
        assert_eq!(GameOutcome::from_signal("black wins"), Some(GameOutcome::BlackWins));
        assert_eq!(GameOutcome::from_signal("draw"), Some(GameOutcome::Draw));
        assert_eq!(GameOutcome::from_signal("e2e4"), None);
        assert_eq!(GameOutcome::from_signal("White Wins"), None);
    }
}
