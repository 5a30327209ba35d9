//! Standalone minimax-vs-minimax series runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `RUST_LOG=debug cargo run --release --bin self_play -- --games 4 --depth1 2 --depth2 3`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use minimax_chess::chess_errors::ChessResult;
use minimax_chess::engines::engine_minimax::MinimaxEngine;
use minimax_chess::engines::engine_random::RandomEngine;
use minimax_chess::engines::engine_trait::Engine;
use minimax_chess::search::board_scoring::Coefficients;
use minimax_chess::search::minimax::SearchConfig;
use minimax_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Parser)]
#[command(about = "Play a series of games between two alpha-beta bots")]
struct Args {
    /// Number of games in the series.
    #[arg(long, default_value_t = 4)]
    games: u16,

    /// Seed for colors and random openings.
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Search depth of player 1.
    #[arg(long, default_value_t = 2)]
    depth1: u8,

    /// Search depth of player 2. Zero plays uniformly random moves.
    #[arg(long, default_value_t = 1)]
    depth2: u8,

    /// Ply cap per game.
    #[arg(long, default_value_t = 120)]
    max_plies: u16,

    #[arg(long, default_value_t = Coefficients::default().material)]
    material: f64,

    #[arg(long, default_value_t = Coefficients::default().control)]
    control: f64,

    #[arg(long, default_value_t = Coefficients::default().state)]
    state: f64,

    #[arg(long, default_value_t = Coefficients::default().threat)]
    threat: f64,
}

fn player(depth: u8, coefficients: Coefficients, seed: u64) -> Box<dyn Engine> {
    if depth == 0 {
        Box::new(RandomEngine::with_seed(seed))
    } else {
        Box::new(MinimaxEngine::with_seed(
            SearchConfig {
                depth,
                coefficients,
            },
            seed,
        ))
    }
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let coefficients = Coefficients {
        material: args.material,
        control: args.control,
        state: args.state,
        threat: args.threat,
    };

    let stats = play_engine_match_series(
        || player(args.depth1, coefficients, args.seed),
        || player(args.depth2, coefficients, args.seed.wrapping_add(1)),
        &MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
