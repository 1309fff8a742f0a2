use serde::{Deserialize, Serialize};

use crate::{
    board::Board, color::Color, end_state::EndState, error::InvalidMove, movement::Move,
    position::Position,
};

/// A board together with the side to move.
///
/// Legality is decided by simulation: every candidate move is played on a
/// throwaway copy of the board, which is then rescanned for attacks on the
/// mover's king. Nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    side_to_move: Color,
    board: Board,
}
impl Game {
    pub fn new() -> Self {
        Game::from_board(Board::starting_position(), Color::White)
    }
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            side_to_move,
            board,
        }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }
    /// Legal moves of the piece on `position`, in generation order.
    ///
    /// Returns `None` when the square is empty, which is distinct from a piece
    /// that has no legal move.
    pub fn valid_moves(&self, position: Position) -> Option<Vec<Move>> {
        let piece = self.board[position]?;
        let moves = piece
            .moves(&self.board, position)
            .filter(|movement| !leaves_king_attacked(&self.board, *movement, piece.color))
            .collect();
        Some(moves)
    }
    /// Every legal move of the side to move.
    pub fn all_valid_moves(&self) -> impl Iterator<Item = Move> {
        self.board
            .pieces_of(self.side_to_move)
            .flat_map(move |(position, _)| self.valid_moves(position).into_iter().flatten())
    }
    pub fn is_move_valid(&self, movement: Move) -> bool {
        self.valid_moves(movement.origin)
            .is_some_and(|moves| moves.contains(&movement))
    }
    /// Plays `movement` for the side to move and passes the turn.
    ///
    /// # Errors
    ///
    /// Fails without touching the game if the origin is empty, holds a piece
    /// of the wrong color, or `movement` is not among its legal moves.
    pub fn make_move(&mut self, movement: Move) -> Result<(), InvalidMove> {
        let Some(piece) = self.board[movement.origin] else {
            return Err(InvalidMove::EmptySquare(movement.origin));
        };
        if piece.color != self.side_to_move {
            return Err(InvalidMove::OutOfTurn {
                piece,
                side_to_move: self.side_to_move,
            });
        }
        if !self.is_move_valid(movement) {
            return Err(InvalidMove::Illegal(movement));
        }
        self.board.apply(movement);
        self.side_to_move = !self.side_to_move;
        Ok(())
    }
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.board, color)
    }
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.has_no_valid_moves(color)
    }
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && self.has_no_valid_moves(color)
    }
    /// Outcome for the side to move, if the game is over.
    pub fn end_state(&self) -> Option<EndState> {
        if !self.has_no_valid_moves(self.side_to_move) {
            None
        } else if self.is_in_check(self.side_to_move) {
            Some(EndState::Win(!self.side_to_move))
        } else {
            Some(EndState::Draw)
        }
    }
    fn has_no_valid_moves(&self, color: Color) -> bool {
        self.board.pieces_of(color).all(|(position, _)| {
            self.valid_moves(position)
                .is_none_or(|moves| moves.is_empty())
        })
    }
}
impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
// A missing king is never in check.
fn is_king_attacked(board: &Board, color: Color) -> bool {
    let Some(king) = board.king(color) else {
        return false;
    };
    board.pieces_of(!color).any(|(position, piece)| {
        piece
            .moves(board, position)
            .any(|movement| movement.destination == king)
    })
}
fn leaves_king_attacked(board: &Board, movement: Move, color: Color) -> bool {
    let mut scratch = board.clone();
    scratch.apply(movement);
    is_king_attacked(&scratch, color)
}
