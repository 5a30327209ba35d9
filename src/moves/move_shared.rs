//! Helpers shared by the per-piece move generators.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{ChessMove, Move};

/// What a moving piece would find on a landing square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Empty,
    Enemy,
    Friendly,
}

#[inline]
pub fn classify_landing(grid: &Grid, square: Position, mover: Color) -> Landing {
    match piece_at(grid, square) {
        None => Landing::Empty,
        Some(occupant) if occupant.color == mover => Landing::Friendly,
        Some(_) => Landing::Enemy,
    }
}

#[inline]
pub fn normal_move(piece: Piece, from: Position, to: Position) -> ChessMove {
    ChessMove::Normal(Move::new(piece, from, to))
}

/// Single-step moves for leapers (king, knight): each offset is one landing
/// square, taken when empty or enemy-held.
pub fn step_moves(
    piece: Piece,
    from: Position,
    grid: &Grid,
    offsets: &[(i8, i8)],
) -> Vec<ChessMove> {
    offsets
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| classify_landing(grid, to, piece.color) != Landing::Friendly)
        .map(|to| normal_move(piece, from, to))
        .collect()
}

/// Ray-cast moves for sliders. Each ray stops at the first occupied square,
/// which is included only when it holds an enemy piece.
pub fn slide_moves(
    piece: Piece,
    from: Position,
    grid: &Grid,
    directions: &[(i8, i8)],
) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(14);

    for &(df, dr) in directions {
        let mut cursor = from.offset(df, dr);
        while let Some(to) = cursor {
            match classify_landing(grid, to, piece.color) {
                Landing::Empty => moves.push(normal_move(piece, from, to)),
                Landing::Enemy => {
                    moves.push(normal_move(piece, from, to));
                    break;
                }
                Landing::Friendly => break,
            }
            cursor = to.offset(df, dr);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_classification_follows_color() {
        let mut grid = EMPTY_GRID;
        let d4 = Position::new(3, 4).expect("d4 is on the board");
        let d5 = Position::new(3, 3).expect("d5 is on the board");
        set_piece(&mut grid, d4, Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(classify_landing(&grid, d4, Color::White), Landing::Friendly);
        assert_eq!(classify_landing(&grid, d4, Color::Black), Landing::Enemy);
        assert_eq!(classify_landing(&grid, d5, Color::Black), Landing::Empty);
    }
}
