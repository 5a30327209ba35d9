use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_shared::slide_moves;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn queen_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    let mut moves = slide_moves(piece, from, grid, &ROOK_DIRECTIONS);
    moves.extend(slide_moves(piece, from, grid, &BISHOP_DIRECTIONS));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_from_d4_on_empty_board_has_twenty_seven_targets() {
        let d4 = Position::new(3, 4).expect("d4 is on the board");
        let queen = Piece::new(PieceKind::Queen, Color::White);
        assert_eq!(queen_moves(queen, d4, &EMPTY_GRID).len(), 27);
    }
}
