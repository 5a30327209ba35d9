//! Pawn pushes, captures, promotion and en passant.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{ChessMove, Move};
use crate::moves::move_shared::{classify_landing, Landing};

const CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Pseudo-legal pawn moves. A landing on the promotion row is emitted as a
/// queen promotion.
pub fn pawn_moves(piece: Piece, from: Position, grid: &Grid) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(4);
    let forward = piece.color.forward();

    if let Some(one) = from.offset(0, forward) {
        if piece_at(grid, one).is_none() {
            moves.push(pawn_move(piece, from, one));

            if !piece.has_moved(from) {
                if let Some(two) = from.offset(0, 2 * forward) {
                    if piece_at(grid, two).is_none() {
                        moves.push(pawn_move(piece, from, two));
                    }
                }
            }
        }
    }

    for df in CAPTURE_FILES {
        if let Some(to) = from.offset(df, forward) {
            if classify_landing(grid, to, piece.color) == Landing::Enemy {
                moves.push(pawn_move(piece, from, to));
            }
        }
    }

    moves
}

/// En passant captures available right after `last_move`.
///
/// The previous move must be an enemy pawn's two-square advance that ended
/// beside this pawn on the same row, and that pawn must still be there.
pub fn en_passant_moves(
    piece: Piece,
    from: Position,
    grid: &Grid,
    last_move: Option<&ChessMove>,
) -> Vec<ChessMove> {
    let Some(ChessMove::Normal(last)) = last_move else {
        return Vec::new();
    };
    if piece.kind != PieceKind::Pawn
        || last.piece.kind != PieceKind::Pawn
        || last.piece.color == piece.color
        || last.from.row().abs_diff(last.to.row()) != 2
        || last.to.row() != from.row()
        || last.to.file().abs_diff(from.file()) != 1
    {
        return Vec::new();
    }

    let still_there = piece_at(grid, last.to)
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == last.piece.color);
    let df = last.to.file() as i8 - from.file() as i8;
    match from.offset(df, piece.color.forward()) {
        Some(to) if still_there && piece_at(grid, to).is_none() => vec![ChessMove::EnPassant {
            pawn: Move::new(piece, from, to),
            captured: last.to,
        }],
        _ => Vec::new(),
    }
}

#[inline]
fn pawn_move(piece: Piece, from: Position, to: Position) -> ChessMove {
    let mv = Move::new(piece, from, to);
    if to.row() == piece.color.promotion_row() {
        ChessMove::Promotion {
            pawn: mv,
            promote_to: PieceKind::Queen,
        }
    } else {
        ChessMove::Normal(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i8, row: i8) -> Position {
        Position::new(file, row).expect("test square should be on the board")
    }

    #[test]
    fn unmoved_pawn_can_push_one_or_two() {
        let e2 = sq(4, 6);
        let pawn = Piece::with_initial(PieceKind::Pawn, Color::White, e2);
        let targets: Vec<Position> = pawn_moves(pawn, e2, &EMPTY_GRID)
            .iter()
            .map(ChessMove::target)
            .collect();
        assert_eq!(targets, vec![sq(4, 5), sq(4, 4)]);
    }

    #[test]
    fn moved_or_blocked_pawn_cannot_double_step() {
        let e3 = sq(4, 5);
        let pawn = Piece::with_initial(PieceKind::Pawn, Color::White, sq(4, 6));
        assert_eq!(pawn_moves(pawn, e3, &EMPTY_GRID).len(), 1);

        let mut grid = EMPTY_GRID;
        set_piece(&mut grid, sq(4, 5), Some(Piece::new(PieceKind::Knight, Color::Black)));
        let e2 = sq(4, 6);
        let fresh = Piece::with_initial(PieceKind::Pawn, Color::White, e2);
        assert!(pawn_moves(fresh, e2, &grid).is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let mut grid = EMPTY_GRID;
        let d5 = sq(3, 3);
        set_piece(&mut grid, sq(2, 2), Some(Piece::new(PieceKind::Rook, Color::White)));
        set_piece(&mut grid, sq(4, 4), Some(Piece::new(PieceKind::Rook, Color::White)));
        let pawn = Piece::new(PieceKind::Pawn, Color::Black).marked_moved();
        let targets: Vec<Position> = pawn_moves(pawn, d5, &grid)
            .iter()
            .map(ChessMove::target)
            .collect();
        assert_eq!(targets, vec![sq(3, 4), sq(4, 4)]);
    }

    #[test]
    fn last_rank_push_is_a_queen_promotion() {
        let b2 = sq(1, 6);
        let pawn = Piece::new(PieceKind::Pawn, Color::Black).marked_moved();
        let moves = pawn_moves(pawn, b2, &EMPTY_GRID);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn en_passant_follows_a_double_step_beside_the_pawn() {
        let mut grid = EMPTY_GRID;
        let e5 = sq(4, 3);
        let f7 = sq(5, 1);
        let f5 = sq(5, 3);
        let white = Piece::new(PieceKind::Pawn, Color::White).marked_moved();
        let black = Piece::with_initial(PieceKind::Pawn, Color::Black, f7);
        set_piece(&mut grid, e5, Some(white));
        set_piece(&mut grid, f5, Some(black.after_move_from(f7)));

        let double = ChessMove::Normal(Move::new(black, f7, f5));
        let moves = en_passant_moves(white, e5, &grid, Some(&double));
        assert_eq!(
            moves,
            vec![ChessMove::EnPassant {
                pawn: Move::new(white, e5, sq(5, 2)),
                captured: f5,
            }]
        );

        let single = ChessMove::Normal(Move::new(black, sq(5, 2), f5));
        assert!(en_passant_moves(white, e5, &grid, Some(&single)).is_empty());
        assert!(en_passant_moves(white, e5, &grid, None).is_empty());
    }
}
