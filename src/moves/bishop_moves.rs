use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_shared::slide_moves;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    slide_moves(piece, from, grid, &BISHOP_DIRECTIONS)
}
