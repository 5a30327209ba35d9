use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Single undo record for `push_move` / `undo`.
///
/// Holds the previous contents of every square the move touched, so undo
/// restores captured pieces, the pre-promotion pawn and moved flags exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub previous: Vec<(Position, Option<Piece>)>,
    pub previous_side: Color,
}

impl UndoState {
    /// Record the squares `mv` is about to overwrite on `grid`.
    pub fn capture(grid: &Grid, mv: ChessMove, side_to_move: Color) -> Self {
        let previous = mv
            .touched_squares()
            .into_iter()
            .map(|square| (square, piece_at(grid, square)))
            .collect();
        Self {
            mv,
            previous,
            previous_side: side_to_move,
        }
    }

    /// Put every recorded square back.
    pub fn restore(&self, grid: &mut Grid) {
        for &(square, piece) in &self.previous {
            set_piece(grid, square, piece);
        }
    }
}
