//! King steps and castling.
//!
//! `king_moves` is the plain one-square step set. `castling_moves` only
//! checks the static preconditions (both pieces unmoved, path empty); whether
//! the king starts in or crosses check is decided by the legality layer.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{ChessMove, Move};
use crate::moves::move_shared::step_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Files a castling rook may stand on.
const ROOK_FILES: [u8; 2] = [0, 7];

#[inline]
pub fn king_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    step_moves(piece, from, grid, &KING_OFFSETS)
}

pub fn castling_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    if piece.kind != PieceKind::King || piece.has_moved(from) {
        return moves;
    }

    for rook_file in ROOK_FILES {
        let Some(rook_square) = Position::new(rook_file as i8, from.row() as i8) else {
            continue;
        };
        let Some(rook) = piece_at(grid, rook_square) else {
            continue;
        };
        if rook.kind != PieceKind::Rook
            || rook.color != piece.color
            || rook.has_moved(rook_square)
            || rook_file.abs_diff(from.file()) < 3
        {
            continue;
        }

        let step: i8 = if rook_file > from.file() { 1 } else { -1 };
        if !path_is_empty(grid, from, rook_square, step) {
            continue;
        }

        let (Some(king_to), Some(rook_to)) = (from.offset(2 * step, 0), from.offset(step, 0))
        else {
            continue;
        };
        moves.push(ChessMove::Castle {
            king: Move::new(piece, from, king_to),
            rook: Move::new(rook, rook_square, rook_to),
        });
    }

    moves
}

/// Squares the king crosses during a castle, excluding its start square.
pub fn castle_path(king: &Move) -> Vec<Position> {
    let step: i8 = if king.to.file() > king.from.file() { 1 } else { -1 };
    let distance = king.to.file().abs_diff(king.from.file()) as i8;
    (1..=distance)
        .filter_map(|n| king.from.offset(step * n, 0))
        .collect()
}

fn path_is_empty(grid: &Grid, from: Position, to: Position, step: i8) -> bool {
    let mut cursor = from.offset(step, 0);
    while let Some(square) = cursor {
        if square == to {
            return true;
        }
        if piece_at(grid, square).is_some() {
            return false;
        }
        cursor = square.offset(step, 0);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::start_grid;

    fn sq(file: i8, row: i8) -> Position {
        Position::new(file, row).expect("test square should be on the board")
    }

    fn castling_grid() -> Grid {
        let mut grid = EMPTY_GRID;
        for (file, kind) in [(0, PieceKind::Rook), (4, PieceKind::King), (7, PieceKind::Rook)] {
            let square = sq(file, 7);
            set_piece(
                &mut grid,
                square,
                Some(Piece::with_initial(kind, Color::White, square)),
            );
        }
        grid
    }

    #[test]
    fn king_in_the_corner_has_three_steps() {
        let king = Piece::new(PieceKind::King, Color::White);
        assert_eq!(king_moves(king, sq(0, 7), &EMPTY_GRID).len(), 3);
    }

    #[test]
    fn unmoved_king_and_rooks_castle_both_sides() {
        let grid = castling_grid();
        let king = piece_at(&grid, sq(4, 7)).expect("king should be on e1");
        let moves = castling_moves(king, sq(4, 7), &grid);
        let targets: Vec<Position> = moves.iter().map(ChessMove::target).collect();
        assert_eq!(targets, vec![sq(2, 7), sq(6, 7)]);

        let ChessMove::Castle { rook, .. } = moves[1] else {
            panic!("castling_moves should only emit castles");
        };
        assert_eq!((rook.from, rook.to), (sq(7, 7), sq(5, 7)));
    }

    #[test]
    fn blocked_or_moved_pieces_prevent_castling() {
        let grid = start_grid();
        let king = piece_at(&grid, sq(4, 7)).expect("king should be on e1");
        assert!(castling_moves(king, sq(4, 7), &grid).is_empty());

        let mut grid = castling_grid();
        let rook = piece_at(&grid, sq(7, 7)).expect("rook should be on h1");
        set_piece(&mut grid, sq(7, 7), Some(rook.marked_moved()));
        let king = piece_at(&grid, sq(4, 7)).expect("king should be on e1");
        assert_eq!(castling_moves(king, sq(4, 7), &grid).len(), 1);
        assert!(castling_moves(king.marked_moved(), sq(4, 7), &grid).is_empty());
    }

    #[test]
    fn castle_path_lists_crossed_squares() {
        let king = Piece::new(PieceKind::King, Color::Black);
        let mv = Move::new(king, sq(4, 0), sq(2, 0));
        assert_eq!(castle_path(&mv), vec![sq(3, 0), sq(2, 0)]);
    }
}
