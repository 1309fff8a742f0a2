use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    movement::Move,
    piece::{Piece, PieceKind},
    position::{Position, home_rank, pawn_home_rank},
};

/// An 8×8 grid of squares indexed by `[rank - 1][file - 1]`.
///
/// No rule is enforced here: any arrangement of pieces, including ones without
/// kings, can be stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in (1..).zip(PieceKind::STARTING_CONFIGURATION) {
                board.set(
                    Position::new(home_rank(color), file),
                    Some(Piece::new(color, kind)),
                );
                board.set(
                    Position::new(pawn_home_rank(color), file),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }
    pub fn get(&self, position: Position) -> Option<Piece> {
        self[position]
    }
    /// Places `piece` on `position`, or clears it when `None`.
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        self[position] = piece;
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> {
        Position::all().filter_map(move |position| Some((position, self[position]?)))
    }
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
    pub fn king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
    /// Relocates the piece on `movement.origin` and applies the promotion if
    /// the moved piece is a pawn. Does nothing when the origin is empty.
    pub fn apply(&mut self, movement: Move) {
        let Some(mut piece) = self[movement.origin].take() else {
            return;
        };
        if piece.kind == PieceKind::Pawn
            && let Some(promotion) = movement.promotion
        {
            piece = Piece::new(piece.color, promotion);
        }
        self[movement.destination] = Some(piece);
    }
}
impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Position) -> &Self::Output {
        &self.0[index.rank() as usize - 1][index.file() as usize - 1]
    }
}
impl IndexMut<Position> for Board {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self.0[index.rank() as usize - 1][index.file() as usize - 1]
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        movement::Move,
        piece::{Piece, PieceKind},
        position::Position,
    };

    fn at(position: &str) -> Position {
        position.parse().unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.king(Color::White), Some(at("e1")));
        assert_eq!(board.king(Color::Black), Some(at("e8")));
        assert_eq!(
            board[at("d8")],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board[at("g2")],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board[at("e4")], None);
    }
    #[test]
    fn missing_king_is_none() {
        assert_eq!(Board::empty().king(Color::Black), None);
    }
    #[test]
    fn apply_relocates_and_captures() {
        let mut board = Board::starting_position();
        board.apply(Move::new(at("b1"), at("c3")));
        assert_eq!(board[at("b1")], None);
        assert_eq!(
            board[at("c3")],
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        board.apply(Move::new(at("c3"), at("d7")));
        assert_eq!(board.pieces().count(), 31);
    }
    #[test]
    fn apply_promotes_pawns_only() {
        let mut board = Board::empty();
        board.set(at("a7"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set(at("h7"), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.apply(Move::promoting(at("a7"), at("a8"), PieceKind::Knight));
        board.apply(Move::promoting(at("h7"), at("h8"), PieceKind::Queen));
        assert_eq!(
            board[at("a8")],
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(
            board[at("h8")],
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
    }
    #[test]
    fn apply_from_empty_square_is_a_no_op() {
        let mut board = Board::starting_position();
        board.apply(Move::new(at("e4"), at("e5")));
        assert_eq!(board, Board::starting_position());
    }
}
