use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{color::Color, movement::Move, piece::Piece, position::Position};

/// Reason a move was refused by [`Game::make_move`](crate::game::Game::make_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidMove {
    EmptySquare(Position),
    OutOfTurn { piece: Piece, side_to_move: Color },
    Illegal(Move),
}
impl Display for InvalidMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::EmptySquare(position) => write!(f, "no piece found on {position}")?,
            InvalidMove::OutOfTurn {
                piece,
                side_to_move,
            } => write!(f, "cannot move {piece}, it is {side_to_move}'s turn")?,
            InvalidMove::Illegal(movement) => write!(f, "{movement} is not a legal move")?,
        }
        Ok(())
    }
}
impl Error for InvalidMove {}
