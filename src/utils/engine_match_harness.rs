//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other, with an optional
//! seeded random opening prefix so repeated games diverge.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (board, opening_moves_lan) = apply_random_opening(
        Board::new_game(),
        &mut rng,
        config.opening_min_plies,
        config.opening_max_plies,
    );
    play_from(board, opening_moves_lan, engine_white, engine_black, config)
}

/// Play a match from a caller-provided position, without a random opening.
pub fn play_engine_match_from_board(
    board: Board,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_from(board, Vec::new(), engine_white, engine_black, config)
}

fn play_from(
    mut board: Board,
    opening_moves_lan: Vec<String>,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for _ in 0..config.max_plies {
        let legal_moves = board.all_actions();
        let mover = board.side_to_move();
        if legal_moves.is_empty() {
            outcome = if board.is_check(mover) {
                match mover {
                    Color::White => MatchOutcome::BlackWinCheckmate,
                    Color::Black => MatchOutcome::WhiteWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
            break;
        }

        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };
        let started = Instant::now();
        let out = engine.choose_move(&board, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.unwrap_or(legal_moves[0]);
        if !legal_moves.contains(&chosen) {
            return Err(ChessError::EngineFailure(format!(
                "{} returned illegal move {chosen}",
                engine.name()
            )));
        }

        played_moves_lan.push(chosen.to_string());
        board.push_move(chosen);
    }

    info!(
        ?outcome,
        plies = played_moves_lan.len(),
        "match finished"
    );

    Ok(MatchResult {
        outcome,
        final_board: board,
        opening_moves_lan,
        played_moves_lan,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            game = i + 1,
            of = config.games,
            seed,
            white = if player1_is_white { player1.name() } else { player2.name() },
            black = if player1_is_white { player2.name() } else { player1.name() },
            "starting game"
        );

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner = match result.outcome {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner {
            Some(color) => {
                let player1_won = (color == Color::White) == player1_is_white;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::DrawStalemate {
                    SeriesOutcome::DrawStalemate
                } else {
                    SeriesOutcome::DrawMaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            result = ?mapped,
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "game finished"
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play between `min_plies` and `max_plies` uniformly random legal moves.
fn apply_random_opening(
    mut board: Board,
    rng: &mut StdRng,
    min_plies: u8,
    max_plies: u8,
) -> (Board, Vec<String>) {
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = board.all_actions();
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves_lan.push(chosen.to_string());
        board.push_move(chosen);
    }

    (board, opening_moves_lan)
}
