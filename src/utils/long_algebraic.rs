//! Long algebraic move text (`e2e4`, `e7e8n`).

use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::{ChessMove, MoveRequest};
use crate::utils::algebraic::algebraic_to_square;

/// Parse long algebraic text into an untyped request. Castles are written as
/// the king's two-square step (`e1g1`).
pub fn long_algebraic_to_request(long_algebraic: &str) -> ChessResult<MoveRequest> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid long algebraic move: {long_algebraic:?}"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    let request = MoveRequest::new(from, to);

    match long_algebraic[4..].chars().next() {
        None => Ok(request),
        Some(ch) => {
            let kind = char_to_promotion(ch)?;
            Ok(request.promote_to(kind))
        }
    }
}

impl FromStr for MoveRequest {
    type Err = ChessError;

    fn from_str(text: &str) -> ChessResult<Self> {
        long_algebraic_to_request(text)
    }
}

/// Parse and type `long_algebraic` against `board` without playing it.
pub fn long_algebraic_to_move(long_algebraic: &str, board: &Board) -> ChessResult<ChessMove> {
    board.validate(long_algebraic_to_request(long_algebraic)?)
}

#[inline]
pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    mv.to_string()
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match PieceKind::from_fen_letter(ch) {
        Some(kind) if kind.can_promote_to() => Ok(kind),
        _ => Err(ChessError::InvalidNotation(format!(
            "invalid promotion piece '{ch}'"
        ))),
    }
}
