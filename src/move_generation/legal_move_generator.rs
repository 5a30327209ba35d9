//! Legal move generation and game-state queries.
//!
//! Candidate moves come from the per-piece pseudo-legal and special move
//! generators. Each candidate is applied to a copied grid and dropped when it
//! leaves the mover's king attacked; castles are additionally dropped when
//! the king starts in check or crosses an attacked square.

use tracing::{debug, trace};

use crate::chess_errors::{ChessError, ChessResult, IllegalMoveReason};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{
    attackers_to_square, is_king_in_check, is_square_attacked,
};
use crate::moves::king_moves::castle_path;
use crate::moves::move_descriptions::{ChessMove, MoveRequest};
use crate::moves::piece_moves::{pseudo_legal_moves, special_moves};

impl Board {
    /// Match `request` against the rules and return the fully typed move.
    ///
    /// Checks run in a fixed order so callers always see the first rule the
    /// request breaks: empty origin, own-piece capture, wrong turn,
    /// unreachable destination, bad promotion piece, self-check, then
    /// castling out of or through check.
    pub fn validate(&self, request: MoveRequest) -> ChessResult<ChessMove> {
        let MoveRequest {
            from,
            to,
            promotion,
        } = request;

        let piece = self
            .piece_at(from)
            .ok_or(ChessError::NoPieceAtSquare(from))?;

        if self
            .piece_at(to)
            .is_some_and(|occupant| occupant.color == piece.color)
        {
            return Err(reject(request, IllegalMoveReason::SameColorCapture));
        }

        if piece.color != self.side_to_move {
            return Err(reject(request, IllegalMoveReason::WrongTurn));
        }

        let mut mv = self
            .candidate_moves(piece, from)
            .into_iter()
            .find(|mv| mv.target() == to)
            .ok_or_else(|| reject(request, IllegalMoveReason::UnreachableSquare))?;

        if let (ChessMove::Promotion { promote_to, .. }, Some(kind)) = (&mut mv, promotion) {
            if !kind.can_promote_to() {
                return Err(reject(request, IllegalMoveReason::InvalidPromotion(kind)));
            }
            *promote_to = kind;
        }

        self.check_king_safety(&mv, piece.color)
            .map_err(|reason| reject(request, reason))?;

        Ok(mv)
    }

    /// Legal moves from `square`, empty when the square is empty or holds a
    /// piece of the side not to move.
    pub fn legal_moves_from(&self, square: Position) -> Vec<ChessMove> {
        match self.piece_at(square) {
            Some(piece) if piece.color == self.side_to_move => self.legal_moves_of(piece, square),
            _ => Vec::new(),
        }
    }

    /// Legal moves of whatever piece stands on `square`, whoever's turn it is.
    pub fn piece_moves(&self, square: Position) -> Vec<ChessMove> {
        self.piece_at(square)
            .map(|piece| self.legal_moves_of(piece, square))
            .unwrap_or_default()
    }

    /// Legal moves of every piece of `color`, whoever's turn it is.
    pub fn moves_for_color(&self, color: Color) -> Vec<ChessMove> {
        self.find_pieces(Some(color))
            .into_iter()
            .flat_map(|(square, piece)| self.legal_moves_of(piece, square))
            .collect()
    }

    /// Legal moves of the side to move.
    #[inline]
    pub fn all_actions(&self) -> Vec<ChessMove> {
        self.moves_for_color(self.side_to_move)
    }

    /// Whether `color` has at least one legal move.
    ///
    /// Pieces are tried nearest the king first, since interpositions and king
    /// steps are the likeliest escapes from check; the whole board is covered.
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut pieces = self.find_pieces(Some(color));
        if let Some(&king) = self.king_squares(color).first() {
            pieces.sort_by_key(|(square, _)| square.manhattan_distance(king));
        }
        pieces
            .into_iter()
            .any(|(square, piece)| !self.legal_moves_of(piece, square).is_empty())
    }

    #[inline]
    pub fn is_check(&self, color: Color) -> bool {
        is_king_in_check(&self.grid, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_move(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_check(color) && !self.has_legal_move(color)
    }

    /// Status of the position for the side to move.
    ///
    /// When the side to move is fine but the other king is attacked (only
    /// possible in a hand-built setup) that check is reported instead.
    pub fn game_state(&self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.is_check(side);
        let can_move = self.has_legal_move(side);

        let status = match (in_check, can_move) {
            (true, false) => GameStatus::CheckMate(side),
            (true, true) => GameStatus::Check(side),
            (false, false) => GameStatus::Stalemate(side),
            (false, true) if self.is_check(side.opposite()) => GameStatus::Check(side.opposite()),
            (false, true) => GameStatus::Normal,
        };
        debug!(%status, "game state");
        status
    }

    /// Enemy pieces attacking `square`, from `defender`'s point of view.
    #[inline]
    pub fn attackers(&self, square: Position, defender: Color) -> Vec<(Position, Piece)> {
        attackers_to_square(&self.grid, square, defender)
    }

    fn candidate_moves(&self, piece: Piece, from: Position) -> Vec<ChessMove> {
        let mut moves = pseudo_legal_moves(piece, from, &self.grid);
        moves.extend(special_moves(piece, from, &self.grid, self.last_move()));
        moves
    }

    fn legal_moves_of(&self, piece: Piece, from: Position) -> Vec<ChessMove> {
        self.candidate_moves(piece, from)
            .into_iter()
            .filter(|mv| self.check_king_safety(mv, piece.color).is_ok())
            .collect()
    }

    fn check_king_safety(&self, mv: &ChessMove, color: Color) -> Result<(), IllegalMoveReason> {
        let next = apply_move(&self.grid, mv);
        if is_king_in_check(&next, color) {
            return Err(IllegalMoveReason::LeavesKingInCheck);
        }

        if let ChessMove::Castle { king, .. } = mv {
            let crosses_attack = castle_path(king)
                .into_iter()
                .any(|square| is_square_attacked(&self.grid, square, color));
            if self.is_check(color) || crosses_attack {
                return Err(IllegalMoveReason::CastleThroughCheck);
            }
        }

        Ok(())
    }
}

fn reject(request: MoveRequest, reason: IllegalMoveReason) -> ChessError {
    trace!(from = %request.from, to = %request.to, %reason, "move rejected");
    ChessError::IllegalMove(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Position {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn at(file: i8, row: i8) -> Position {
        Position::new(file, row).expect("test square should be on the board")
    }

    fn request(from: &str, to: &str) -> MoveRequest {
        MoveRequest::new(sq(from), sq(to))
    }

    fn illegal(reason: IllegalMoveReason) -> ChessResult<ChessMove> {
        Err(ChessError::IllegalMove(reason))
    }

    fn mate_fixture() -> Board {
        let mut board = Board::empty();
        board.set_piece(at(0, 0), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(at(2, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(at(2, 1), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board
    }

    #[test]
    fn start_position_has_twenty_actions() {
        let board = Board::new_game();
        assert_eq!(board.all_actions().len(), 20);
        assert_eq!(board.legal_moves_from(sq("g1")).len(), 2);
        assert!(board.legal_moves_from(sq("g8")).is_empty(), "not Black's turn");
        assert_eq!(board.piece_moves(sq("g8")).len(), 2);
        assert!(board.piece_moves(sq("e4")).is_empty());
        assert_eq!(board.game_state(), GameStatus::Normal);
    }

    #[test]
    fn validation_reports_the_first_broken_rule() {
        let board = Board::new_game();
        assert_eq!(
            board.validate(request("e4", "e5")),
            Err(ChessError::NoPieceAtSquare(sq("e4")))
        );
        assert_eq!(
            board.validate(request("e1", "e2")),
            illegal(IllegalMoveReason::SameColorCapture)
        );
        assert_eq!(
            board.validate(request("e7", "e5")),
            illegal(IllegalMoveReason::WrongTurn)
        );
        assert_eq!(
            board.validate(request("b1", "b3")),
            illegal(IllegalMoveReason::UnreachableSquare)
        );
        assert!(board.validate(request("e2", "e4")).is_ok());
    }

    #[test]
    fn pinned_piece_may_not_expose_the_king() {
        let board = Board::from_fen("4k3/4r3/8/8/8/8/4N3/4K3").expect("fen should parse");
        assert_eq!(
            board.validate(request("e2", "c3")),
            illegal(IllegalMoveReason::LeavesKingInCheck)
        );
        assert!(board.legal_moves_from(sq("e2")).is_empty());
    }

    #[test]
    fn king_promotion_is_rejected() {
        let board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K3").expect("fen should parse");
        assert_eq!(
            board.validate(request("b7", "b8").promote_to(PieceKind::King)),
            illegal(IllegalMoveReason::InvalidPromotion(PieceKind::King))
        );
        assert_eq!(
            board.validate(request("b7", "b8").promote_to(PieceKind::Pawn)),
            illegal(IllegalMoveReason::InvalidPromotion(PieceKind::Pawn))
        );
    }

    #[test]
    fn castling_out_of_or_through_check_is_rejected() {
        let through = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w").expect("fen should parse");
        assert_eq!(
            through.validate(request("e1", "g1")),
            illegal(IllegalMoveReason::CastleThroughCheck)
        );
        assert!(through.validate(request("e1", "c1")).is_ok());

        let in_check = Board::from_fen("k3r3/8/8/8/8/8/8/R3K2R w").expect("fen should parse");
        assert_eq!(
            in_check.validate(request("e1", "c1")),
            illegal(IllegalMoveReason::CastleThroughCheck)
        );

        let onto = Board::from_fen("k5r1/8/8/8/8/8/8/R3K2R w").expect("fen should parse");
        assert_eq!(
            onto.validate(request("e1", "g1")),
            illegal(IllegalMoveReason::LeavesKingInCheck)
        );
    }

    #[test]
    fn cornered_king_is_mated_until_a_rook_can_interpose() {
        let mut board = mate_fixture();
        assert!(board.is_check(Color::White));
        assert!(board.is_checkmate(Color::White));
        assert_eq!(board.game_state(), GameStatus::CheckMate(Color::White));
        assert_eq!(board.game_state().winner(), Some(Color::Black));

        board.set_piece(at(1, 7), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert!(board.is_check(Color::White));
        assert!(!board.is_checkmate(Color::White));
        assert_eq!(board.game_state(), GameStatus::Check(Color::White));

        board.set_piece(at(1, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(!board.is_checkmate(Color::White));
    }

    #[test]
    fn boxed_in_king_without_check_is_stalemated() {
        let board = Board::from_fen("k7/8/1Q6/8/8/8/8/7K b").expect("fen should parse");
        assert!(!board.is_check(Color::Black));
        assert!(board.is_stalemate(Color::Black));
        assert_eq!(board.game_state(), GameStatus::Stalemate(Color::Black));
        assert!(board.all_actions().is_empty());
    }

    #[test]
    fn opponent_check_is_reported_for_hand_built_setups() {
        let mut board = Board::empty();
        board.set_piece(at(0, 7), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(at(4, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set_piece(at(4, 4), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.game_state(), GameStatus::Check(Color::Black));
    }

    #[test]
    fn attackers_are_listed_with_their_squares() {
        let board = mate_fixture();
        let attackers = board.attackers(at(0, 0), Color::White);
        assert_eq!(attackers.len(), 1);
        assert_eq!(attackers[0].0, at(2, 0));
    }
}
