//! Closed dispatch from piece kind to its movement rules.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::{castling_moves, king_moves};
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{en_passant_moves, pawn_moves};
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Moves `piece` could make from `from` on `grid`, ignoring check.
///
/// `piece` is passed explicitly and need not be the occupant of `from`; the
/// check detector relies on this to probe squares with phantom pieces.
pub fn pseudo_legal_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, from, grid),
        PieceKind::Knight => knight_moves(piece, from, grid),
        PieceKind::Bishop => bishop_moves(piece, from, grid),
        PieceKind::Rook => rook_moves(piece, from, grid),
        PieceKind::Queen => queen_moves(piece, from, grid),
        PieceKind::King => king_moves(piece, from, grid),
    }
}

/// Castles and en passant captures, which depend on history rather than
/// on the grid alone.
pub fn special_moves(
    piece: Piece,
    from: Position,
    grid: &Grid,
    last_move: Option<&ChessMove>,
) -> Vec<ChessMove> {
    match piece.kind {
        PieceKind::King => castling_moves(piece, from, grid),
        PieceKind::Pawn => en_passant_moves(piece, from, grid, last_move),
        _ => Vec::new(),
    }
}
