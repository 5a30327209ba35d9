//! Engine abstraction used by the self-play harness.
//!
//! Defines common input parameters and output payloads so different move
//! pickers can be selected at runtime behind a single trait interface.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this move.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    /// White-relative score, when the engine computes one.
    pub score: Option<f64>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput>;
}
