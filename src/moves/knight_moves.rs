use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_shared::step_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knight jumps. Nothing blocks a knight; only friendly landings are dropped.
#[inline]
pub fn knight_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    step_moves(piece, from, grid, &KNIGHT_OFFSETS)
}
