//! Alpha-beta minimax engine.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::search::minimax::{best_move_with_rng, SearchConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
    rng: StdRng,
    name: String,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Engine whose tie-breaks are reproducible.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        Self {
            name: format!("Minimax depth {}", config.depth),
            config,
            rng,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.config.depth);
        let result = best_move_with_rng(board, &self.config.coefficients, depth, &mut self.rng);

        info!(
            engine = %self.name,
            depth,
            nodes = result.nodes,
            score = result.best_score,
            "move chosen"
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            info_lines: vec![format!(
                "depth {depth} nodes {} score {:.4}",
                result.nodes, result.best_score
            )],
        })
    }
}
