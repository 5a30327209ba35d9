//! Perft: exhaustive move-tree counting used to validate the rules engine.

use crate::game_state::board::Board;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Count leaf positions `depth` plies below `board`, with per-leaf metrics.
pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = board.clone();
    let mut counts = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut counts);
    counts
}

/// Leaf count under each root move, for narrowing down generator bugs.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(ChessMove, usize)> {
    let mut scratch = board.clone();
    scratch
        .all_actions()
        .into_iter()
        .map(|mv| {
            scratch.push_move(mv);
            let nodes = perft(&scratch, depth.saturating_sub(1)).nodes;
            scratch.undo(1);
            (mv, nodes)
        })
        .collect()
}

fn perft_recurse(board: &mut Board, depth: u8, counts: &mut PerftCounts) {
    for mv in board.all_actions() {
        let is_capture = match mv {
            ChessMove::EnPassant { .. } => true,
            _ => board.piece_at(mv.target()).is_some(),
        };

        board.push_move(mv);

        if depth == 1 {
            counts.nodes += 1;
            if is_capture {
                counts.captures += 1;
            }
            match mv {
                ChessMove::EnPassant { .. } => counts.en_passant += 1,
                ChessMove::Castle { .. } => counts.castles += 1,
                ChessMove::Promotion { .. } => counts.promotions += 1,
                ChessMove::Normal(_) => {}
            }
            let defender = board.side_to_move();
            if board.is_check(defender) {
                counts.checks += 1;
                if !board.has_legal_move(defender) {
                    counts.checkmates += 1;
                }
            }
        } else {
            perft_recurse(board, depth - 1, counts);
        }

        board.undo(1);
    }
}
