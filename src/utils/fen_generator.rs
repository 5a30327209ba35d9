use crate::game_state::chess_types::*;

/// Piece-placement field of FEN for `grid`, rank 8 first.
pub fn generate_placement(grid: &Grid) -> String {
    let mut out = String::new();

    for (row, cells) in grid.iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            if let Some(piece) = cell {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}
