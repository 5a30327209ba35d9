//! Move values.
//!
//! `Move` is a plain relocation. `ChessMove` tags the special moves with the
//! extra structure they need to be applied: both halves of a castle, the piece
//! a pawn promotes to, and the square of a pawn taken en passant.
//! `MoveRequest` is what a caller submits before the board has typed it.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::utils::algebraic::algebraic_to_square;

/// A single piece relocation. Two moves are equal when piece, start and end are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(piece: Piece, from: Position, to: Position) -> Self {
        Self { piece, from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChessMove {
    Normal(Move),
    /// King and rook relocations applied together.
    Castle { king: Move, rook: Move },
    Promotion { pawn: Move, promote_to: PieceKind },
    /// `captured` holds the enemy pawn, beside the pawn's landing square.
    EnPassant { pawn: Move, captured: Position },
}

impl ChessMove {
    /// The relocation of the moving piece (the king for a castle).
    #[inline]
    pub const fn primary(&self) -> &Move {
        match self {
            ChessMove::Normal(mv) => mv,
            ChessMove::Castle { king, .. } => king,
            ChessMove::Promotion { pawn, .. } => pawn,
            ChessMove::EnPassant { pawn, .. } => pawn,
        }
    }

    #[inline]
    pub const fn piece(&self) -> Piece {
        self.primary().piece
    }

    #[inline]
    pub const fn from(&self) -> Position {
        self.primary().from
    }

    /// Landing square of the moving piece. For a castle this is two files
    /// toward the rook from the king's start.
    #[inline]
    pub const fn target(&self) -> Position {
        self.primary().to
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self, ChessMove::Castle { .. })
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self {
            ChessMove::Promotion { promote_to, .. } => Some(*promote_to),
            _ => None,
        }
    }

    /// Squares whose contents change when the move is applied.
    pub fn touched_squares(&self) -> Vec<Position> {
        match self {
            ChessMove::Normal(mv) | ChessMove::Promotion { pawn: mv, .. } => vec![mv.from, mv.to],
            ChessMove::Castle { king, rook } => vec![king.from, king.to, rook.from, rook.to],
            ChessMove::EnPassant { pawn, captured } => vec![pawn.from, pawn.to, *captured],
        }
    }
}

/// Long algebraic text: `e2e4`, or `e7e8q` for a promotion.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.target())?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.fen_letter())?;
        }
        Ok(())
    }
}

/// A caller's candidate move, before the board matches it against the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
    /// Piece to promote to if the move turns out to be a promotion. Queen when unset.
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promote_to(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    /// Build a request from raw `(file, row)` pairs, rejecting off-board values.
    pub fn from_coordinates(from: (i16, i16), to: (i16, i16)) -> ChessResult<Self> {
        Ok(Self::new(
            Position::try_new(from.0, from.1)?,
            Position::try_new(to.0, to.1)?,
        ))
    }

    /// Build a request from two algebraic squares, for example `("e2", "e4")`.
    pub fn from_algebraic(from: &str, to: &str) -> ChessResult<Self> {
        Ok(Self::new(algebraic_to_square(from)?, algebraic_to_square(to)?))
    }
}

impl From<&ChessMove> for MoveRequest {
    fn from(mv: &ChessMove) -> Self {
        Self {
            from: mv.from(),
            to: mv.target(),
            promotion: mv.promotion(),
        }
    }
}

impl TryFrom<(&str, &str)> for MoveRequest {
    type Error = ChessError;

    fn try_from((from, to): (&str, &str)) -> ChessResult<Self> {
        Self::from_algebraic(from, to)
    }
}
