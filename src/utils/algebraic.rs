//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! positions. Rank 8 is row 0 and rank 1 is row 7, so `"a1"` is `(0, 7)`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a board position.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic square: {square:?}"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    let file_index = (file - b'a') as i16;
    let row_index = (b'8' - rank) as i16;
    Position::try_new(file_index, row_index)
}

/// Convert a board position to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Position) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}
