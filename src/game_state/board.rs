//! Authoritative board representation.
//!
//! `Board` owns the 8x8 grid of optional pieces, the applied-move log and an
//! explicit side to move. Legality and move application live in
//! `move_generation`; this module holds construction, read-only accessors and
//! the aggregates the evaluator reads.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::start_grid;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::king_squares;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) history: Vec<UndoState>,
    pub(crate) side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Standard starting position, White to move.
    #[inline]
    pub fn new_game() -> Self {
        Self::from_grid(start_grid(), Color::White)
    }

    /// Board with no pieces, White to move. Callers fill it with `set_piece`.
    #[inline]
    pub fn empty() -> Self {
        Self::from_grid(EMPTY_GRID, Color::White)
    }

    #[inline]
    pub fn from_grid(grid: Grid, side_to_move: Color) -> Self {
        Self {
            grid,
            history: Vec::new(),
            side_to_move,
        }
    }

    /// Board from a FEN placement field, optionally followed by the side to move.
    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// FEN piece-placement field of the current grid.
    #[inline]
    pub fn to_fen(&self) -> String {
        generate_placement(&self.grid)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn piece_at(&self, square: Position) -> Option<Piece> {
        piece_at(&self.grid, square)
    }

    /// Place or clear a piece during setup. Does not touch the move log.
    #[inline]
    pub fn set_piece(&mut self, square: Position, piece: Option<Piece>) {
        set_piece(&mut self.grid, square, piece);
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last().map(|undo| &undo.mv)
    }

    /// Squares and pieces of `color`, or of both sides when `color` is `None`.
    pub fn find_pieces(&self, color: Option<Color>) -> Vec<(Position, Piece)> {
        Position::all()
            .filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
            .filter(|(_, piece)| color.is_none() || color == Some(piece.color))
            .collect()
    }

    #[inline]
    pub fn king_squares(&self, color: Color) -> Vec<Position> {
        king_squares(&self.grid, color)
    }

    /// Summed piece values for one side, or for both when `color` is `None`.
    pub fn material_value(&self, color: Option<Color>) -> u32 {
        self.find_pieces(color)
            .iter()
            .map(|(_, piece)| piece.value())
            .sum()
    }

    /// Number of legal moves of `color` that land on an empty square.
    pub fn total_moves_score(&self, color: Color) -> u32 {
        self.moves_for_color(color)
            .iter()
            .filter(|mv| self.piece_at(mv.target()).is_none())
            .count() as u32
    }

    /// Value of `color`'s pieces under attack, counted once per attacking move.
    pub fn threat_score(&self, color: Color) -> u32 {
        self.moves_for_color(color.opposite())
            .iter()
            .filter_map(|mv| self.piece_at(mv.target()))
            .filter(|target| target.color == color)
            .map(|target| target.value())
            .sum()
    }
}

/// Text diagram from White's side, rank 8 on top, empty squares as dots.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let symbol = cell.map_or('.', |piece| piece.symbol());
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{:?} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i8, row: i8) -> Position {
        Position::new(file, row).expect("test square should be on the board")
    }

    #[test]
    fn new_game_has_balanced_material() {
        let board = Board::new_game();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.material_value(Some(Color::White)), 38);
        assert_eq!(board.material_value(Some(Color::Black)), 38);
        assert_eq!(board.material_value(None), 76);
        assert!(board.history().is_empty());
        assert!(board.last_move().is_none());
    }

    #[test]
    fn display_draws_ranks_top_down() {
        let text = Board::new_game().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[9], "White to move");
    }

    #[test]
    fn find_pieces_filters_by_color() {
        let board = Board::new_game();
        assert_eq!(board.find_pieces(Some(Color::White)).len(), 16);
        assert_eq!(board.find_pieces(None).len(), 32);
        assert_eq!(board.king_squares(Color::Black), vec![sq(4, 0)]);
    }

    #[test]
    fn opening_control_counts_only_empty_landings() {
        let board = Board::new_game();
        assert_eq!(board.total_moves_score(Color::White), 20);
        assert_eq!(board.threat_score(Color::White), 0);
    }

    #[test]
    fn threat_score_sums_attacked_values() {
        let mut board = Board::empty();
        board.set_piece(sq(0, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(sq(0, 4), Some(Piece::new(PieceKind::Knight, Color::White)));
        board.set_piece(sq(7, 0), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(board.threat_score(Color::White), 3 + 8);
        assert_eq!(board.threat_score(Color::Black), 5);
    }
}
