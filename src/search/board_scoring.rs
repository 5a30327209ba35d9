//! Static position evaluation.
//!
//! Four independent heuristics, each normalized to `[-1, 1]` with positive
//! values favouring White, combined by a weighted average. Search only talks
//! to `BoardScorer`, so a different heuristic can be swapped in without
//! touching the search code.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::game_status::GameStatus;

/// Score of a forced win for White, above anything a static evaluation can
/// reach. Black's is the negation.
pub const WIN_SCORE: f64 = 2.0;

/// Added per ply left to search when the mate was found, so a faster mate
/// outscores a slower one.
pub const MATE_DEPTH_BONUS: f64 = 0.01;

/// White-relative score of a position where `mated` has been checkmated with
/// `plies_left` plies of search depth remaining.
#[inline]
pub fn mate_score(mated: Color, plies_left: u8) -> f64 {
    let score = WIN_SCORE + f64::from(plies_left) * MATE_DEPTH_BONUS;
    match mated {
        Color::White => -score,
        Color::Black => score,
    }
}

pub trait BoardScorer: Send + Sync {
    /// Score in `[-1, 1]` from White's point of view.
    fn score(&self, board: &Board) -> f64;
}

/// Weights of the four heuristics. Zero disables a heuristic entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub material: f64,
    pub control: f64,
    pub state: f64,
    pub threat: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            material: 1.0,
            control: 0.2,
            state: 1.0,
            threat: 0.5,
        }
    }
}

impl Coefficients {
    pub const MATERIAL_ONLY: Coefficients = Coefficients {
        material: 1.0,
        control: 0.0,
        state: 0.0,
        threat: 0.0,
    };
}

impl BoardScorer for Coefficients {
    #[inline]
    fn score(&self, board: &Board) -> f64 {
        final_evaluation(board, self)
    }
}

/// Map `raw` linearly so `black_anchor` lands on -1 and `white_anchor` on +1,
/// clamped to `[-1, 1]`. Anchors may be given in either order.
#[inline]
pub fn normalize(raw: f64, black_anchor: f64, white_anchor: f64) -> f64 {
    let span = white_anchor - black_anchor;
    if span == 0.0 {
        return 0.0;
    }
    ((raw - black_anchor) / span * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// White's share of the material on the board. A 70/30 split saturates.
pub fn material_evaluation(board: &Board) -> f64 {
    let white = board.material_value(Some(Color::White)) as f64;
    let black = board.material_value(Some(Color::Black)) as f64;
    normalize(share(white, black), 0.30, 0.70)
}

/// White's share of moves onto empty squares.
pub fn control_evaluation(board: &Board) -> f64 {
    let white = board.total_moves_score(Color::White) as f64;
    let black = board.total_moves_score(Color::Black) as f64;
    normalize(share(white, black), 0.0, 1.0)
}

/// Game outcome and checks: a win is worth 1, giving check 0.5.
pub fn state_evaluation(board: &Board) -> f64 {
    let raw = match board.game_state() {
        GameStatus::CheckMate(Color::Black) => 1.0,
        GameStatus::CheckMate(Color::White) => -1.0,
        GameStatus::Check(Color::Black) => 0.5,
        GameStatus::Check(Color::White) => -0.5,
        GameStatus::Stalemate(_) | GameStatus::Normal => 0.0,
    };
    normalize(raw, -1.0, 1.0)
}

/// Share of the threatened value that is White's. More of White's material
/// hanging is worse for White, so the anchors are reversed.
pub fn threat_evaluation(board: &Board) -> f64 {
    let white = board.threat_score(Color::White) as f64;
    let black = board.threat_score(Color::Black) as f64;
    normalize(share(white, black), 1.0, 0.0)
}

/// Weighted average of the enabled heuristics; 0 when every weight is zero.
pub fn final_evaluation(board: &Board, coefficients: &Coefficients) -> f64 {
    let heuristics: [(f64, fn(&Board) -> f64); 4] = [
        (coefficients.material, material_evaluation),
        (coefficients.control, control_evaluation),
        (coefficients.state, state_evaluation),
        (coefficients.threat, threat_evaluation),
    ];

    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for (weight, heuristic) in heuristics {
        if weight == 0.0 {
            continue;
        }
        weighted += weight * heuristic(board);
        total_weight += weight;
    }

    if total_weight == 0.0 {
        0.0
    } else {
        weighted / total_weight
    }
}

/// `white / (white + black)`, or an even 0.5 when both are zero.
#[inline]
fn share(white: f64, black: f64) -> f64 {
    let total = white + black;
    if total == 0.0 {
        0.5
    } else {
        white / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Position};

    const EPSILON: f64 = 1e-9;

    fn at(file: i8, row: i8) -> Position {
        Position::new(file, row).expect("test square should be on the board")
    }

    fn kings_only() -> Board {
        let mut board = Board::empty();
        board.set_piece(at(4, 7), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(at(4, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        board
    }

    #[test]
    fn normalize_maps_anchors_and_clamps() {
        assert!((normalize(0.30, 0.30, 0.70) + 1.0).abs() < EPSILON);
        assert!((normalize(0.70, 0.30, 0.70) - 1.0).abs() < EPSILON);
        assert!(normalize(0.50, 0.30, 0.70).abs() < EPSILON);
        assert_eq!(normalize(0.95, 0.30, 0.70), 1.0);
        assert_eq!(normalize(0.0, 0.30, 0.70), -1.0);
        assert_eq!(normalize(1.0, 1.0, 0.0), -1.0);
        assert_eq!(normalize(0.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn material_is_balanced_in_symmetric_positions() {
        assert!(material_evaluation(&Board::new_game()).abs() < EPSILON);
        assert!(material_evaluation(&Board::empty()).abs() < EPSILON);
        assert!(material_evaluation(&kings_only()).abs() < EPSILON);
    }

    #[test]
    fn extra_queen_saturates_material() {
        let mut board = kings_only();
        board.set_piece(at(3, 7), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(material_evaluation(&board), 1.0);
    }

    #[test]
    fn start_position_scores_level() {
        let board = Board::new_game();
        assert!(control_evaluation(&board).abs() < EPSILON);
        assert!(state_evaluation(&board).abs() < EPSILON);
        assert!(threat_evaluation(&board).abs() < EPSILON);
        assert!(final_evaluation(&board, &Coefficients::default()).abs() < EPSILON);
    }

    #[test]
    fn state_reflects_check_and_mate() {
        let mut board = kings_only();
        board.set_piece(at(4, 4), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_side_to_move(Color::Black);
        assert!((state_evaluation(&board) - 0.5).abs() < EPSILON);

        let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/4K3 b").expect("fen should parse");
        assert_eq!(state_evaluation(&mated), 1.0);
    }

    #[test]
    fn hanging_white_piece_scores_for_black() {
        let mut board = kings_only();
        board.set_piece(at(0, 4), Some(Piece::new(PieceKind::Knight, Color::White)));
        board.set_piece(at(0, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(threat_evaluation(&board), -1.0);
    }

    #[test]
    fn mate_scores_beat_any_evaluation() {
        let mut board = kings_only();
        board.set_piece(at(3, 7), Some(Piece::new(PieceKind::Queen, Color::White)));
        let saturated = final_evaluation(&board, &Coefficients::default());
        assert!(mate_score(Color::Black, 0) > saturated);
        assert!(mate_score(Color::White, 0) < -1.0);
        assert!(mate_score(Color::Black, 2) > mate_score(Color::Black, 1));
        assert_eq!(mate_score(Color::White, 3), -mate_score(Color::Black, 3));
    }

    #[test]
    fn zero_weights_give_zero() {
        let weights = Coefficients {
            material: 0.0,
            control: 0.0,
            state: 0.0,
            threat: 0.0,
        };
        let mut board = kings_only();
        board.set_piece(at(3, 7), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(final_evaluation(&board, &weights), 0.0);
        assert_eq!(final_evaluation(&board, &Coefficients::MATERIAL_ONLY), 1.0);
        assert_eq!(Coefficients::MATERIAL_ONLY.score(&board), 1.0);
    }
}
