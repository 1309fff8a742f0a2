use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    color::Color,
    movement::Move,
    position::{Position, Vector, pawn_home_rank, pawn_promotion_rank},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const PROMOTION_CHOICES: [Self; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn uppercase(self) -> char {
        self.lowercase().to_ascii_uppercase()
    }
    pub fn lowercase(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
    pub fn from_fen(c: char) -> Result<Self, InvalidFenPiece> {
        let piece = match c {
            'p' | 'P' => PieceKind::Pawn,
            'n' | 'N' => PieceKind::Knight,
            'b' | 'B' => PieceKind::Bishop,
            'r' | 'R' => PieceKind::Rook,
            'q' | 'Q' => PieceKind::Queen,
            'k' | 'K' => PieceKind::King,
            c => return Err(InvalidFenPiece(c)),
        };
        Ok(piece)
    }
    pub fn is_promotion_choice(self) -> bool {
        PieceKind::PROMOTION_CHOICES.contains(&self)
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidFenPiece(pub char);
impl Display for InvalidFenPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found `{}`, expected one of `p`, `n`, `b`, `r`, `k`, `q`, or uppercase forms of these letters",
            self.0
        )?;
        Ok(())
    }
}
impl Error for InvalidFenPiece {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}
impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
    pub fn fen(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
    pub fn from_fen(c: char) -> Result<Self, InvalidFenPiece> {
        let kind = PieceKind::from_fen(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(color, kind))
    }
    pub fn figurine(self) -> char {
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
    fn step_moves(
        self,
        board: &Board,
        origin: Position,
        offsets: &'static [Vector],
    ) -> impl Iterator<Item = Move> {
        offsets
            .iter()
            .copied()
            .filter_map(move |offset| origin.move_by(offset))
            .filter(move |destination| {
                board[*destination].is_none_or(|target| target.color != self.color)
            })
            .map(move |destination| Move::new(origin, destination))
    }
    fn directional_moves(
        self,
        board: &Board,
        origin: Position,
        direction: Vector,
    ) -> impl Iterator<Item = Move> {
        let mut resume = true;
        origin
            .line_exclusive(direction)
            .map_while(move |destination| {
                if resume {
                    if let Some(target) = board[destination] {
                        resume = false;
                        (target.color != self.color).then_some(Move::new(origin, destination))
                    } else {
                        Some(Move::new(origin, destination))
                    }
                } else {
                    None
                }
            })
    }
    fn all_directional_moves(
        self,
        board: &Board,
        origin: Position,
        directions: &'static [Vector],
    ) -> impl Iterator<Item = Move> {
        directions
            .iter()
            .copied()
            .flat_map(move |direction| self.directional_moves(board, origin, direction))
    }
    fn pawn_moves(self, board: &Board, origin: Position) -> impl Iterator<Item = Move> {
        static PROMOTION_CHOICES: [Option<PieceKind>; 4] = [
            Some(PieceKind::Queen),
            Some(PieceKind::Rook),
            Some(PieceKind::Bishop),
            Some(PieceKind::Knight),
        ];
        static NON_PROMOTION_CHOICES: [Option<PieceKind>; 1] = [None];
        let forward_jumps = if origin.rank() == pawn_home_rank(self.color) {
            2
        } else {
            1
        };
        let advances = origin
            .line_exclusive(Vector::pawn_single_move(self.color))
            .take(forward_jumps)
            .take_while(move |destination| board[*destination].is_none());
        let captures = Vector::pawn_attacks(self.color)
            .into_iter()
            .filter_map(move |attack| origin.move_by(attack))
            .filter(move |destination| {
                board[*destination].is_some_and(|target| target.color != self.color)
            });
        advances.chain(captures).flat_map(move |destination| {
            let promotion_choices: &[_] = if destination.rank() == pawn_promotion_rank(self.color)
            {
                &PROMOTION_CHOICES
            } else {
                &NON_PROMOTION_CHOICES
            };
            promotion_choices.iter().map(move |&promotion| Move {
                origin,
                destination,
                promotion,
            })
        })
    }
    /// Moves matching this piece's movement shape from `origin`, including
    /// those that would leave its own king in check.
    pub fn moves<'a>(
        self,
        board: &'a Board,
        origin: Position,
    ) -> Box<dyn Iterator<Item = Move> + 'a> {
        match self.kind {
            PieceKind::Pawn => Box::new(self.pawn_moves(board, origin)),
            PieceKind::Knight => Box::new(self.step_moves(board, origin, &Vector::KNIGHT_MOVES)),
            PieceKind::Bishop => Box::new(self.all_directional_moves(
                board,
                origin,
                &Vector::BISHOP_DIRECTIONS,
            )),
            PieceKind::Rook => Box::new(self.all_directional_moves(
                board,
                origin,
                &Vector::ROOK_DIRECTIONS,
            )),
            PieceKind::Queen => Box::new(self.all_directional_moves(
                board,
                origin,
                &Vector::QUEEN_DIRECTIONS,
            )),
            PieceKind::King => Box::new(self.step_moves(board, origin, &Vector::KING_MOVES)),
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
/// Pseudo-legal moves of whatever piece stands on `origin`; empty when the
/// square is empty.
pub fn piece_moves(board: &Board, origin: Position) -> impl Iterator<Item = Move> {
    board[origin]
        .into_iter()
        .flat_map(move |piece| piece.moves(board, origin))
}
