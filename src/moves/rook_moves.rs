use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::move_shared::slide_moves;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn rook_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    slide_moves(piece, from, grid, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_always_has_fourteen_targets_on_empty_board() {
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        for square in Position::all() {
            assert_eq!(rook_moves(rook, square, &EMPTY_GRID).len(), 14);
        }
    }

    #[test]
    fn rook_does_not_capture_own_piece() {
        let mut grid = EMPTY_GRID;
        let a8 = Position::new(0, 0).expect("a8 is on the board");
        let a7 = Position::new(0, 1).expect("a7 is on the board");
        set_piece(&mut grid, a7, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let moves = rook_moves(rook, a8, &grid);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| mv.target().row() == 0));
    }
}
