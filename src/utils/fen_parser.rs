//! FEN-to-Board parser.
//!
//! Reads the piece-placement field and, when present, the side-to-move and
//! castling fields. The board keeps no castling flags of its own, so pieces
//! are marked unmoved when they stand on their starting square and moved
//! otherwise; a castling field then marks any corner rook whose right is
//! missing as moved. En passant and clock fields are accepted and ignored.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_home_square;
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| invalid("missing board layout"))?;
    let mut grid = parse_placement(board_part)?;

    let side_to_move = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::White,
    };

    if let Some(castling_part) = parts.next() {
        apply_castling_field(castling_part, &mut grid)?;
    }

    Ok(Board::from_grid(grid, side_to_move))
}

/// Grid from a placement field such as `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
pub fn parse_placement(board_part: &str) -> ChessResult<Grid> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut grid = EMPTY_GRID;

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_fen_letter(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            if file >= 8 {
                return Err(invalid(format!("rank {} has too many files", 8 - row)));
            }

            let square = Position::try_new(file as i16, row as i16)?;
            set_piece(&mut grid, square, Some(placed_piece(kind, color, square)));
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(grid)
}

fn placed_piece(kind: PieceKind, color: Color, square: Position) -> Piece {
    let piece = Piece::with_initial(kind, color, square);
    if is_home_square(kind, color, square) {
        piece
    } else {
        piece.marked_moved()
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side to move '{side_part}'"))),
    }
}

fn apply_castling_field(castling_part: &str, grid: &mut Grid) -> ChessResult<()> {
    if castling_part != "-" && !castling_part.chars().all(|c| "KQkq".contains(c)) {
        return Err(invalid(format!("invalid castling rights '{castling_part}'")));
    }

    for (right, color, file) in [
        ('K', Color::White, 7),
        ('Q', Color::White, 0),
        ('k', Color::Black, 7),
        ('q', Color::Black, 0),
    ] {
        if castling_part.contains(right) {
            continue;
        }
        let Some(corner) = Position::new(file, color.back_row() as i8) else {
            continue;
        };
        if let Some(rook) = piece_at(grid, corner) {
            if rook.kind == PieceKind::Rook && rook.color == color {
                set_piece(grid, corner, Some(rook.marked_moved()));
            }
        }
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidPlacement(message.into())
}
