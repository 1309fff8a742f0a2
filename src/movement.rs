use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    piece::{InvalidFenPiece, PieceKind},
    position::{ParsePositionError, Position},
};

/// A piece relocation from `origin` to `destination`. `promotion` is only
/// meaningful for a pawn reaching its farthest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Position,
    pub destination: Position,
    pub promotion: Option<PieceKind>,
}
impl Move {
    pub fn new(origin: Position, destination: Position) -> Self {
        Move {
            origin,
            destination,
            promotion: None,
        }
    }
    pub fn promoting(origin: Position, destination: Position, promotion: PieceKind) -> Self {
        Move {
            origin,
            destination,
            promotion: Some(promotion),
        }
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.lowercase())?;
        }
        Ok(())
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let origin = s.get(0..2).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let destination = s.get(2..4).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let mut rest = s
            .get(4..)
            .ok_or(ParseMoveError::InvalidChar)?
            .chars()
            .fuse();
        let promotion = rest.next().map(PieceKind::from_fen).transpose()?;
        if let Some(kind) = promotion
            && !kind.is_promotion_choice()
        {
            return Err(ParseMoveError::InvalidPromotion(kind));
        }
        if let Some(c) = rest.next() {
            return Err(ParseMoveError::Unexpected(c));
        }
        Ok(Move {
            origin,
            destination,
            promotion,
        })
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    InvalidChar,
    ParsePositionError(ParsePositionError),
    InvalidFenPiece(InvalidFenPiece),
    InvalidPromotion(PieceKind),
    Unexpected(char),
}
impl From<ParsePositionError> for ParseMoveError {
    fn from(value: ParsePositionError) -> Self {
        ParseMoveError::ParsePositionError(value)
    }
}
impl From<InvalidFenPiece> for ParseMoveError {
    fn from(value: InvalidFenPiece) -> Self {
        ParseMoveError::InvalidFenPiece(value)
    }
}
impl Display for ParseMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::InvalidChar => write!(f, "provided string contains invalid character")?,
            ParseMoveError::ParsePositionError(err) => write!(f, "{err}")?,
            ParseMoveError::InvalidFenPiece(err) => write!(f, "{err}")?,
            ParseMoveError::InvalidPromotion(kind) => write!(f, "cannot promote to {kind}")?,
            ParseMoveError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseMoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseMoveError::ParsePositionError(err) => Some(err),
            ParseMoveError::InvalidFenPiece(err) => Some(err),
            _ => None,
        }
    }
}
#[cfg(test)]
mod test {
    use crate::{
        movement::{Move, ParseMoveError},
        piece::PieceKind,
        position::{ParsePositionError, Position},
    };

    #[test]
    fn long_algebraic_notation() {
        let movement: Move = "e2e4".parse().unwrap();
        assert_eq!(movement, Move::new(Position::new(2, 5), Position::new(4, 5)));
        assert_eq!(movement.to_string(), "e2e4");

        let promotion: Move = "a7a8n".parse().unwrap();
        assert_eq!(
            promotion,
            Move::promoting(Position::new(7, 1), Position::new(8, 1), PieceKind::Knight)
        );
        assert_eq!(promotion.to_string(), "a7a8n");
    }
    #[test]
    fn rejects_malformed_moves() {
        assert_eq!("e2".parse::<Move>(), Err(ParseMoveError::InvalidChar));
        assert_eq!(
            "e2e9".parse::<Move>(),
            Err(ParseMoveError::ParsePositionError(
                ParsePositionError::InvalidRank('9')
            ))
        );
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(ParseMoveError::InvalidPromotion(PieceKind::King))
        );
        assert_eq!(
            "e7e8qq".parse::<Move>(),
            Err(ParseMoveError::Unexpected('q'))
        );
    }
}
