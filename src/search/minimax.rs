//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White maximizes and Black
//! minimizes. Each child is searched on a cloned board with the full move
//! applied, so castles move both pieces and the caller's board is never
//! touched. Equal root scores are settled by a coin flip, which keeps the bot
//! from always playing the first of several equivalent moves.

use rand::Rng;
use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{mate_score, BoardScorer, Coefficients};

/// Root window slack so siblings that tie the incumbent come back exact
/// instead of as cut-off bounds.
const TIE_MARGIN: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub depth: u8,
    pub coefficients: Coefficients,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            coefficients: Coefficients::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    pub best_score: f64,
    pub nodes: u64,
}

/// Best move for the side to move, `depth` plies deep.
pub fn best_move(board: &Board, coefficients: &Coefficients, depth: u8) -> SearchResult {
    best_move_with_rng(board, coefficients, depth, &mut rand::rng())
}

#[inline]
pub fn search(board: &Board, config: &SearchConfig) -> SearchResult {
    best_move(board, &config.coefficients, config.depth)
}

/// Same as [`best_move`], drawing tie-break coin flips from `rng`.
pub fn best_move_with_rng<S, R>(board: &Board, scorer: &S, depth: u8, rng: &mut R) -> SearchResult
where
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let mut nodes = 1u64;
    let side = board.side_to_move();
    let actions = board.all_actions();

    if depth == 0 || actions.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: leaf_score(board, scorer, depth),
            nodes,
        };
    }

    let mut alpha = f64::NEG_INFINITY;
    let mut beta = f64::INFINITY;
    let mut best: Option<(ChessMove, f64)> = None;

    for mv in actions {
        let mut child = board.clone();
        child.push_move(mv);
        let value = alpha_beta(&child, depth - 1, alpha, beta, scorer, &mut nodes);

        let replace = match best {
            None => true,
            Some((_, incumbent)) if value == incumbent => rng.random_bool(0.5),
            Some((_, incumbent)) => match side {
                Color::White => value > incumbent,
                Color::Black => value < incumbent,
            },
        };
        if replace {
            best = Some((mv, value));
        }

        if let Some((_, score)) = best {
            match side {
                Color::White => alpha = alpha.max(score - TIE_MARGIN),
                Color::Black => beta = beta.min(score + TIE_MARGIN),
            }
        }
    }

    let (best_move, best_score) = match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, leaf_score(board, scorer, depth)),
    };
    debug!(
        depth,
        nodes,
        best_score,
        best_move = ?best_move.map(|mv| mv.to_string()),
        "search complete"
    );

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

fn alpha_beta<S>(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    scorer: &S,
    nodes: &mut u64,
) -> f64
where
    S: BoardScorer + ?Sized,
{
    *nodes += 1;

    if depth == 0 {
        return leaf_score(board, scorer, 0);
    }

    let actions = board.all_actions();
    if actions.is_empty() {
        return leaf_score(board, scorer, depth);
    }

    let side = board.side_to_move();
    let mut best = match side {
        Color::White => f64::NEG_INFINITY,
        Color::Black => f64::INFINITY,
    };

    for mv in actions {
        let mut child = board.clone();
        child.push_move(mv);
        let value = alpha_beta(&child, depth - 1, alpha, beta, scorer, nodes);

        match side {
            Color::White => {
                best = best.max(value);
                alpha = alpha.max(best);
            }
            Color::Black => {
                best = best.min(value);
                beta = beta.min(best);
            }
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Score of a node that is not expanded further, horizon included. A mated
/// side to move scores the forced extreme, everything else the scorer.
fn leaf_score<S>(board: &Board, scorer: &S, depth: u8) -> f64
where
    S: BoardScorer + ?Sized,
{
    let side = board.side_to_move();
    if board.is_checkmate(side) {
        return mate_score(side, depth);
    }
    scorer.score(board)
}
