//! Core value types shared by every subsystem: colors, piece kinds, pieces,
//! board coordinates and the raw 8x8 grid.
//!
//! Coordinates follow the board as seen from White: `row == 0` is Black's back
//! rank (rank 8) and `row == 7` is White's back rank (rank 1). Files run from
//! `a == 0` to `h == 7`.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::utils::algebraic::square_to_algebraic;

/// Raw board occupancy, indexed `[row][file]`.
pub type Grid = [[Option<Piece>; 8]; 8];

/// An empty grid.
pub const EMPTY_GRID: Grid = [[None; 8]; 8];

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding this color's king and rooks at the start of a game.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind. Color is carried separately by [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Material value used by evaluation. The king is priceless and counts 0.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 8,
            PieceKind::King => 0,
        }
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn fen_letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Whether a pawn may become this kind on the last rank.
    #[inline]
    pub const fn can_promote_to(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A square on the board. Always in range: the only constructors validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: u8,
    row: u8,
}

impl Position {
    /// Build a position, or `None` when either axis is outside `0..8`.
    #[inline]
    pub const fn new(file: i8, row: i8) -> Option<Self> {
        if file < 0 || file > 7 || row < 0 || row > 7 {
            None
        } else {
            Some(Self {
                file: file as u8,
                row: row as u8,
            })
        }
    }

    /// Same as [`Position::new`] but reports the failure as an error.
    pub fn try_new(file: i16, row: i16) -> ChessResult<Self> {
        if (0..8).contains(&file) && (0..8).contains(&row) {
            Ok(Self {
                file: file as u8,
                row: row as u8,
            })
        } else {
            Err(ChessError::InvalidCoordinate { file, row })
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The square `(d_file, d_row)` away, if it is still on the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_row: i8) -> Option<Self> {
        Self::new(self.file as i8 + d_file, self.row as i8 + d_row)
    }

    /// Manhattan distance, used to visit squares in expanding rings.
    #[inline]
    pub const fn manhattan_distance(self, other: Position) -> u8 {
        self.file.abs_diff(other.file) + self.row.abs_diff(other.row)
    }

    /// All 64 squares, row by row from Black's back rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..64).map(|index| Position {
            file: index % 8,
            row: index / 8,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// A piece as stored in the grid.
///
/// The piece does not know its current square. `has_moved` is derived from
/// the square it is queried on: a piece counts as moved once a move has been
/// applied to it, or when its recorded initial square differs from where it
/// stands now. A piece created without an initial square is unmoved until it
/// is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    initial_position: Option<Position>,
    moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            initial_position: None,
            moved: false,
        }
    }

    #[inline]
    pub const fn with_initial(kind: PieceKind, color: Color, initial: Position) -> Self {
        Self {
            kind,
            color,
            initial_position: Some(initial),
            moved: false,
        }
    }

    #[inline]
    pub const fn initial_position(&self) -> Option<Position> {
        self.initial_position
    }

    pub fn has_moved(&self, current: Position) -> bool {
        self.moved || self.initial_position.is_some_and(|initial| initial != current)
    }

    /// Copy of this piece after it has been relocated away from `from`.
    #[inline]
    pub fn after_move_from(self, from: Position) -> Self {
        Self {
            initial_position: self.initial_position.or(Some(from)),
            moved: true,
            ..self
        }
    }

    /// Copy of this piece flagged as already moved, keeping its initial square.
    #[inline]
    pub const fn marked_moved(self) -> Self {
        Self {
            moved: true,
            ..self
        }
    }

    /// Copy of this piece as another kind, keeping color and history.
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Self {
        Self { kind, ..self }
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.kind.value()
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let letter = self.kind.fen_letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    pub const fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

#[inline]
pub fn piece_at(grid: &Grid, square: Position) -> Option<Piece> {
    grid[square.row as usize][square.file as usize]
}

#[inline]
pub fn set_piece(grid: &mut Grid, square: Position, piece: Option<Piece>) {
    grid[square.row as usize][square.file as usize] = piece;
}
