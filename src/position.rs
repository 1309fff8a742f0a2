use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Mul,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePositionError {
    InvalidFile(char),
    InvalidRank(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParsePositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePositionError::InvalidFile(file) => write!(
                f,
                "found `{file}`, characters from `a` to `h` were expected instead"
            )?,
            ParsePositionError::InvalidRank(rank) => write!(
                f,
                "found `{rank}`, characters from `1` to `8` were expected instead"
            )?,
            ParsePositionError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParsePositionError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParsePositionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidPosition {
    pub rank: u8,
    pub file: u8,
}
impl Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rank {} and file {} must both be within 1 to 8",
            self.rank, self.file
        )?;
        Ok(())
    }
}
impl Error for InvalidPosition {}

/// A square on the board. Both rank and file are 1-based and always within
/// `1..=8`; there is no way to construct a position outside of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    rank: u8,
    file: u8,
}
#[derive(Serialize, Deserialize)]
struct RawPosition {
    rank: u8,
    file: u8,
}
impl Position {
    /// # Panics
    ///
    /// Panics if either `rank` or `file` is outside of `1..=8`.
    pub fn new(rank: u8, file: u8) -> Self {
        match Position::new_checked(rank, file) {
            Some(position) => position,
            None => panic!("({rank}, {file}) is outside of the board"),
        }
    }
    pub fn new_checked(rank: u8, file: u8) -> Option<Self> {
        if (1..=8).contains(&rank) && (1..=8).contains(&file) {
            Some(Position { rank, file })
        } else {
            None
        }
    }
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParsePositionError> {
        let file = match file {
            'a'..='h' => file as u8 - b'a' + 1,
            _ => return Err(ParsePositionError::InvalidFile(file)),
        };
        let rank = match rank {
            '1'..='8' => rank as u8 - b'0',
            _ => return Err(ParsePositionError::InvalidRank(rank)),
        };
        Ok(Position::new(rank, file))
    }
    pub fn rank(self) -> u8 {
        self.rank
    }
    pub fn file(self) -> u8 {
        self.file
    }
    /// Every square of the board, rank by rank starting from rank 1.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Position { rank, file }))
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Position::new_checked(
            self.rank.checked_add_signed(movement.rank)?,
            self.file.checked_add_signed(movement.file)?,
        )
    }
    pub fn line(self, direction: Vector, start: i8) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (start..).map_while(move |distance| self.move_by(direction * distance))
    }
    /// Squares along `direction`, excluding this one, up to the edge.
    pub fn line_exclusive(self, direction: Vector) -> impl Iterator<Item = Self> {
        self.line(direction, 1)
    }
}
pub fn home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 8,
    }
}
pub fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}
pub fn pawn_promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
    }
}
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.file - 1 + b'a') as char;
        write!(f, "{file}{}", self.rank)?;
        Ok(())
    }
}
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(file) = chars.next() else {
            return Err(ParsePositionError::NotEnoughCharacter(0));
        };
        let Some(rank) = chars.next() else {
            return Err(ParsePositionError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParsePositionError::Unexpected(c));
        }
        Position::from_chars(file, rank)
    }
}
impl TryFrom<RawPosition> for Position {
    type Error = InvalidPosition;

    fn try_from(value: RawPosition) -> Result<Self, Self::Error> {
        Position::new_checked(value.rank, value.file).ok_or(InvalidPosition {
            rank: value.rank,
            file: value.file,
        })
    }
}
impl From<Position> for RawPosition {
    fn from(value: Position) -> Self {
        RawPosition {
            rank: value.rank,
            file: value.file,
        }
    }
}
/// A displacement between squares. Positive `rank` points toward rank 8 and
/// positive `file` toward the h-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub rank: i8,
    pub file: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { rank: 0, file: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { rank: 2, file: 1 },
        Vector { rank: 2, file: -1 },
        Vector { rank: -2, file: 1 },
        Vector { rank: -2, file: -1 },
        Vector { rank: 1, file: 2 },
        Vector { rank: 1, file: -2 },
        Vector { rank: -1, file: 2 },
        Vector { rank: -1, file: -2 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { rank: 1, file: -1 },
        Vector { rank: 1, file: 0 },
        Vector { rank: 1, file: 1 },
        Vector { rank: 0, file: -1 },
        Vector { rank: 0, file: 1 },
        Vector { rank: -1, file: -1 },
        Vector { rank: -1, file: 0 },
        Vector { rank: -1, file: 1 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { rank: 1, file: 0 },
        Vector { rank: -1, file: 0 },
        Vector { rank: 0, file: 1 },
        Vector { rank: 0, file: -1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { rank: 1, file: 1 },
        Vector { rank: 1, file: -1 },
        Vector { rank: -1, file: 1 },
        Vector { rank: -1, file: -1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;

    pub fn pawn_single_move(color: Color) -> Self {
        Vector {
            rank: pawn_direction(color),
            file: 0,
        }
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|file| Vector {
            rank: pawn_direction(color),
            file,
        })
    }
}
pub fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            rank: self.rank * rhs,
            file: self.file * rhs,
        }
    }
}
