//! Check and attack detection on raw grids.
//!
//! Attacks are found with mirror pieces: to ask whether an enemy piece of
//! kind K attacks square S, generate the pseudo-legal moves of a K of the
//! defender's color standing on S and look for an enemy K on a landing
//! square. Every movement rule here is symmetric under that reflection,
//! pawns included, because pawn captures are generated from the mirror's
//! own forward direction.

use crate::game_state::chess_types::*;
use crate::moves::piece_moves::pseudo_legal_moves;

/// Squares holding a king of `color`. Normally one; setups may have none.
pub fn king_squares(grid: &Grid, color: Color) -> Vec<Position> {
    Position::all()
        .filter(|&square| {
            piece_at(grid, square)
                .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == color)
        })
        .collect()
}

/// True iff an enemy piece attacks any king of `color`. False without a king.
#[inline]
pub fn is_king_in_check(grid: &Grid, color: Color) -> bool {
    king_squares(grid, color)
        .into_iter()
        .any(|square| is_square_attacked(grid, square, color))
}

/// True iff a piece of `defender`'s opponent attacks `square`. The square
/// itself may be empty.
pub fn is_square_attacked(grid: &Grid, square: Position, defender: Color) -> bool {
    ALL_PIECE_KINDS
        .iter()
        .any(|&kind| !mirror_hits(grid, square, defender, kind).is_empty())
}

/// Every enemy piece attacking `square`, as seen by `defender`.
pub fn attackers_to_square(
    grid: &Grid,
    square: Position,
    defender: Color,
) -> Vec<(Position, Piece)> {
    ALL_PIECE_KINDS
        .iter()
        .flat_map(|&kind| mirror_hits(grid, square, defender, kind))
        .collect()
}

fn mirror_hits(
    grid: &Grid,
    square: Position,
    defender: Color,
    kind: PieceKind,
) -> Vec<(Position, Piece)> {
    // The mirror counts as moved so a pawn mirror never probes a double step.
    let mirror = Piece::new(kind, defender).marked_moved();
    pseudo_legal_moves(mirror, square, grid)
        .into_iter()
        .filter_map(|mv| {
            let landing = mv.target();
            piece_at(grid, landing)
                .filter(|piece| piece.kind == kind && piece.color != defender)
                .map(|piece| (landing, piece))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i8, row: i8) -> Position {
        Position::new(file, row).expect("test square should be on the board")
    }

    fn put(grid: &mut Grid, file: i8, row: i8, kind: PieceKind, color: Color) {
        set_piece(grid, sq(file, row), Some(Piece::new(kind, color)));
    }

    #[test]
    fn queen_gives_check_until_a_pawn_interposes() {
        let mut grid = EMPTY_GRID;
        put(&mut grid, 4, 7, PieceKind::King, Color::White);
        put(&mut grid, 4, 0, PieceKind::Queen, Color::Black);
        assert!(is_king_in_check(&grid, Color::White));

        put(&mut grid, 4, 6, PieceKind::Pawn, Color::White);
        assert!(!is_king_in_check(&grid, Color::White));
    }

    #[test]
    fn pawns_attack_diagonally_toward_the_enemy() {
        let mut grid = EMPTY_GRID;
        put(&mut grid, 4, 4, PieceKind::King, Color::White);
        put(&mut grid, 3, 3, PieceKind::Pawn, Color::Black);
        assert!(is_king_in_check(&grid, Color::White));

        let mut grid = EMPTY_GRID;
        put(&mut grid, 4, 4, PieceKind::King, Color::White);
        put(&mut grid, 3, 5, PieceKind::Pawn, Color::Black);
        assert!(!is_king_in_check(&grid, Color::White), "pawns do not attack backwards");

        let mut grid = EMPTY_GRID;
        put(&mut grid, 4, 4, PieceKind::King, Color::White);
        put(&mut grid, 4, 3, PieceKind::Pawn, Color::Black);
        assert!(!is_king_in_check(&grid, Color::White), "pawns do not attack forwards");
    }

    #[test]
    fn empty_squares_can_be_attacked() {
        let mut grid = EMPTY_GRID;
        put(&mut grid, 0, 0, PieceKind::Rook, Color::Black);
        assert!(is_square_attacked(&grid, sq(5, 0), Color::White));
        assert!(!is_square_attacked(&grid, sq(5, 1), Color::White));
    }

    #[test]
    fn attackers_lists_every_enemy_piece() {
        let mut grid = EMPTY_GRID;
        put(&mut grid, 4, 4, PieceKind::King, Color::Black);
        put(&mut grid, 4, 0, PieceKind::Rook, Color::White);
        put(&mut grid, 5, 6, PieceKind::Knight, Color::White);
        put(&mut grid, 0, 0, PieceKind::Bishop, Color::White);
        let attackers = attackers_to_square(&grid, sq(4, 4), Color::Black);
        let squares: Vec<Position> = attackers.iter().map(|(square, _)| *square).collect();
        assert_eq!(squares.len(), 3);
        assert!(squares.contains(&sq(4, 0)));
        assert!(squares.contains(&sq(5, 6)));
        assert!(squares.contains(&sq(0, 0)));
    }

    #[test]
    fn no_king_means_no_check() {
        let mut grid = EMPTY_GRID;
        put(&mut grid, 4, 0, PieceKind::Queen, Color::Black);
        assert!(!is_king_in_check(&grid, Color::White));
    }
}
