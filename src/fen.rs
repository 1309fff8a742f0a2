use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{board::Board, color::Color, game::Game, piece::Piece, position::Position};

/// Forsyth–Edwards Notation of a [`Game`].
///
/// Castling and en passant never exist here, so those fields are always
/// written as `-` and ignored when read, along with the move counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fen(pub Game);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFenError {
    NotEnoughSquaresOnRow,
    ExceedingSquaresOnRow,
    UnexpectedChar(char),
    UnexpectedEol,
}
impl Display for ParseFenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseFenError::NotEnoughSquaresOnRow => write!(f, "not enough squares on a row")?,
            ParseFenError::ExceedingSquaresOnRow => write!(f, "too many squares on a row")?,
            ParseFenError::UnexpectedChar(c) => write!(f, "unexpected `{c}`")?,
            ParseFenError::UnexpectedEol => write!(f, "unexpected end of input")?,
        }
        Ok(())
    }
}
impl Error for ParseFenError {}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.trim().chars();
        let mut board = Board::empty();

        // FEN lists rank 8 first
        let mut file: u8 = 0;
        let mut rank: u8 = 8;
        while file < 8 || rank > 1 {
            let c = characters.next().ok_or(ParseFenError::UnexpectedEol)?;
            if c == '/' {
                if file == 8 {
                    file = 0;
                    rank -= 1;
                } else {
                    return Err(ParseFenError::NotEnoughSquaresOnRow);
                }
            } else if matches!(c, '1'..='8') {
                file += c as u8 - b'0';
                if file > 8 {
                    return Err(ParseFenError::ExceedingSquaresOnRow);
                }
            } else {
                if file == 8 {
                    return Err(ParseFenError::ExceedingSquaresOnRow);
                }
                let piece = Piece::from_fen(c).map_err(|_| ParseFenError::UnexpectedChar(c))?;
                file += 1;
                board.set(Position::new(rank, file), Some(piece));
            }
        }
        let space = characters.next().ok_or(ParseFenError::UnexpectedEol)?;
        if space != ' ' {
            return Err(ParseFenError::UnexpectedChar(space));
        }
        let side_to_move = match characters.next().ok_or(ParseFenError::UnexpectedEol)? {
            'w' | 'W' => Color::White,
            'b' | 'B' => Color::Black,
            c => return Err(ParseFenError::UnexpectedChar(c)),
        };
        if let Some(c) = characters.next()
            && c != ' '
        {
            return Err(ParseFenError::UnexpectedChar(c));
        }
        Ok(Fen(Game::from_board(board, side_to_move)))
    }
}
impl Display for Fen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.0.board();
        for rank in (1..=8).rev() {
            let mut empty = 0;
            for file in 1..=8 {
                if let Some(piece) = board[Position::new(rank, file)] {
                    if empty > 0 {
                        write!(f, "{empty}")?;
                        empty = 0;
                    }
                    write!(f, "{}", piece.fen())?;
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 1 {
                write!(f, "/")?;
            }
        }
        write!(f, " {} - - 0 1", self.0.side_to_move().lowercase())?;
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::{
        color::Color,
        fen::{Fen, ParseFenError},
        game::Game,
        piece::{Piece, PieceKind},
        position::Position,
    };

    const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn starting_position() {
        assert_eq!(Fen(Game::new()).to_string(), STARTING_POSITION);
        assert_eq!(STARTING_POSITION.parse(), Ok(Fen(Game::new())));
    }
    #[test]
    fn trailing_fields_are_optional() {
        let fen: Fen = "8/8/8/3q4/8/8/8/4K3 b".parse().unwrap();
        assert_eq!(fen.0.side_to_move(), Color::Black);
        assert_eq!(
            fen.0.board()[Position::new(5, 4)],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(fen.0.board().pieces().count(), 2);
        let full: Fen = "8/8/8/3q4/8/8/8/4K3 b KQkq e3 12 40".parse().unwrap();
        assert_eq!(full, fen);
    }
    #[test]
    fn round_trip_after_moves() {
        let mut game = Game::new();
        for movement in ["e2e4", "d7d5", "e4d5", "g8f6"] {
            game.make_move(movement.parse().unwrap()).unwrap();
        }
        let text = Fen(game.clone()).to_string();
        assert_eq!(text, "rnbqkb1r/ppp1pppp/5n2/3P4/8/8/PPPP1PPP/RNBQKBNR w - - 0 1");
        assert_eq!(text.parse(), Ok(Fen(game)));
    }
    #[test]
    fn malformed() {
        assert_eq!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w".parse::<Fen>(),
            Err(ParseFenError::NotEnoughSquaresOnRow)
        );
        assert_eq!(
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w".parse::<Fen>(),
            Err(ParseFenError::UnexpectedChar('9'))
        );
        assert_eq!(
            "rnbqkbnr/pppppppp/44p/8/8/8/PPPPPPPP/RNBQKBNR w".parse::<Fen>(),
            Err(ParseFenError::ExceedingSquaresOnRow)
        );
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x".parse::<Fen>(),
            Err(ParseFenError::UnexpectedChar('x'))
        );
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8".parse::<Fen>(),
            Err(ParseFenError::UnexpectedEol)
        );
    }
}
