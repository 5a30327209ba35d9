use std::fmt;

use crate::game_state::chess_types::Color;

/// Outcome-relevant status of a position. The color is the side that is in
/// the condition: `CheckMate(Color::Black)` means Black has been mated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Normal,
    Check(Color),
    CheckMate(Color),
    Stalemate(Color),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::CheckMate(_) | GameStatus::Stalemate(_))
    }

    /// The side that delivered mate, if any.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::CheckMate(mated) => Some(mated.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Normal => f.write_str("normal"),
            GameStatus::Check(color) => write!(f, "{color:?} in check"),
            GameStatus::CheckMate(color) => write!(f, "{color:?} checkmated"),
            GameStatus::Stalemate(color) => write!(f, "{color:?} stalemated"),
        }
    }
}
