//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by board operations,
//! notation parsing and the engine layer. Every board-level rule violation is
//! a recoverable value: the caller inspects it, reports it and retries with
//! different input. Nothing in the rules engine panics on bad input.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Position};

/// Result alias used by every fallible operation in the crate.
pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A coordinate fell outside `0..8` on either axis.
    #[error("coordinate ({file}, {row}) is outside the board")]
    InvalidCoordinate { file: i16, row: i16 },

    /// A square or move string could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// The requested origin square holds no piece.
    #[error("no piece on square {0}")]
    NoPieceAtSquare(Position),

    /// The move has the right shape but breaks a rule of the game.
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveReason),

    /// A FEN placement field is malformed.
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    /// An engine could not produce or play a move.
    #[error("engine failure: {0}")]
    EngineFailure(String),
}

/// Why `Board::validate` rejected a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("the destination holds a piece of the same color")]
    SameColorCapture,

    #[error("it is not this side's turn")]
    WrongTurn,

    #[error("the piece cannot reach the destination")]
    UnreachableSquare,

    #[error("a pawn cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("the move leaves the mover's king in check")]
    LeavesKingInCheck,

    #[error("the king may not castle out of or through check")]
    CastleThroughCheck,
}

impl From<IllegalMoveReason> for ChessError {
    fn from(reason: IllegalMoveReason) -> Self {
        ChessError::IllegalMove(reason)
    }
}
