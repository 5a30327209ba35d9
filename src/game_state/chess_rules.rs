//! Canonical chess-rule constants.
//!
//! Stores the standard starting placement and builds the starting grid, with
//! every piece remembering the square it started on.

use crate::game_state::chess_types::*;

/// Standard starting position, piece-placement field of FEN only.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid of the standard starting position.
pub fn start_grid() -> Grid {
    let mut grid = EMPTY_GRID;

    for square in Position::all() {
        let piece = home_piece(square);
        set_piece(
            &mut grid,
            square,
            piece.map(|(kind, color)| Piece::with_initial(kind, color, square)),
        );
    }

    grid
}

/// The piece standing on `square` in the starting position, if any.
pub fn home_piece(square: Position) -> Option<(PieceKind, Color)> {
    let kind = BACK_RANK[square.file() as usize];
    match square.row() {
        0 => Some((kind, Color::Black)),
        1 => Some((PieceKind::Pawn, Color::Black)),
        6 => Some((PieceKind::Pawn, Color::White)),
        7 => Some((kind, Color::White)),
        _ => None,
    }
}

/// Whether a piece of this kind and color would still be unmoved on `square`.
///
/// Pawns count on any square of their starting row; the other kinds only on
/// their exact starting square.
pub fn is_home_square(kind: PieceKind, color: Color, square: Position) -> bool {
    match kind {
        PieceKind::Pawn => square.row() as i8 == color.back_row() as i8 + color.forward(),
        _ => home_piece(square) == Some((kind, color)),
    }
}
