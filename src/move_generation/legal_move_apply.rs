//! Move application.
//!
//! `apply_move` is the pure grid transform used for legality simulation and
//! search. The `Board` methods here mutate the authoritative board and keep
//! the undo log in step with the grid.

use tracing::{debug, trace};

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::moves::move_descriptions::{ChessMove, Move, MoveRequest};

/// Grid after `mv`. Never checks legality.
pub fn apply_move(grid: &Grid, mv: &ChessMove) -> Grid {
    let mut next = *grid;

    match *mv {
        ChessMove::Normal(step) => relocate(&mut next, &step),
        ChessMove::Castle { king, rook } => {
            // Lift both pieces before placing either.
            set_piece(&mut next, king.from, None);
            set_piece(&mut next, rook.from, None);
            set_piece(&mut next, king.to, Some(king.piece.after_move_from(king.from)));
            set_piece(&mut next, rook.to, Some(rook.piece.after_move_from(rook.from)));
        }
        ChessMove::Promotion { pawn, promote_to } => {
            set_piece(&mut next, pawn.from, None);
            let promoted = pawn.piece.after_move_from(pawn.from).with_kind(promote_to);
            set_piece(&mut next, pawn.to, Some(promoted));
        }
        ChessMove::EnPassant { pawn, captured } => {
            set_piece(&mut next, captured, None);
            relocate(&mut next, &pawn);
        }
    }

    next
}

#[inline]
fn relocate(grid: &mut Grid, step: &Move) {
    set_piece(grid, step.from, None);
    set_piece(grid, step.to, Some(step.piece.after_move_from(step.from)));
}

impl Board {
    /// Validate and play `request` on this board.
    ///
    /// On error the board is left untouched.
    pub fn make_move(&mut self, request: MoveRequest) -> ChessResult<ChessMove> {
        let mv = self.validate(request)?;
        self.push_move(mv);
        Ok(mv)
    }

    /// The board that would result from `request`, leaving `self` untouched.
    pub fn after_move(&self, request: MoveRequest) -> ChessResult<Board> {
        let mut next = self.clone();
        next.make_move(request)?;
        Ok(next)
    }

    /// Apply a move already known to be legal: log it, update the grid and
    /// pass the turn.
    pub fn push_move(&mut self, mv: ChessMove) {
        trace!(%mv, side = ?self.side_to_move, "applying move");
        self.history
            .push(UndoState::capture(&self.grid, mv, self.side_to_move));
        self.grid = apply_move(&self.grid, &mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Take back up to `count` moves. Returns how many were undone.
    pub fn undo(&mut self, count: usize) -> usize {
        let mut undone = 0;
        while undone < count {
            let Some(record) = self.history.pop() else {
                break;
            };
            record.restore(&mut self.grid);
            self.side_to_move = record.previous_side;
            undone += 1;
        }
        debug!(requested = count, undone, "undo");
        undone
    }
}
