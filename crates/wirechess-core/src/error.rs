//! Error types for the board core
//!
//! Provides typed errors for notation parsing and board access. Malformed
//! notation means the wire protocol handed us something unparseable, which the
//! core cannot recover from; out-of-range coordinates indicate a logic defect
//! in a caller rather than bad input.

use thiserror::Error;

/// Errors that can occur in the board core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A move or square name on the wire did not parse
    #[error("malformed notation: {text:?}")]
    MalformedNotation { text: String },

    /// A coordinate outside the 8x8 grid was used for board access
    #[error("coordinate out of range: file {file}, rank {rank}")]
    OutOfRange { file: u8, rank: u8 },
}

/// Result type alias for board core operations
pub type CoreResult<T> = Result<T, CoreError>;
