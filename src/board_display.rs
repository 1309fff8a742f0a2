use std::fmt::{self, Display, Formatter};

use chess_arbiter::{Board, Color, Piece, Position};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

fn square_color(position: Position) -> Color {
    if (position.rank() + position.file()) % 2 == 0 {
        Color::Black
    } else {
        Color::White
    }
}
pub struct BoardDisplay<'a, 'b, 'c> {
    pub board: &'a Board,
    pub view: Color,
    pub highlighted: &'b [Position],
    pub info: &'c str,
}
impl Display for BoardDisplay<'_, '_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for row in 0..8 {
            let rank = match self.view {
                Color::White => 8 - row,
                Color::Black => row + 1,
            };
            for column in 0..8 {
                let file = match self.view {
                    Color::White => column + 1,
                    Color::Black => 8 - column,
                };
                let position = Position::new(rank, file);
                let color = if self.highlighted.contains(&position) {
                    HIGHLIGHTED
                } else {
                    match square_color(position) {
                        Color::White => WHITE,
                        Color::Black => BLACK,
                    }
                };
                let figurine = self.board[position].map_or(' ', Piece::figurine);
                write!(f, "{color}{figurine} {RESET}")?;
            }
            write!(f, "{rank}")?;
            if let Some(line) = lines.next() {
                write!(f, " {line}")?;
            }
            writeln!(f)?;
        }
        match self.view {
            Color::White => write!(f, "a b c d e f g h")?,
            Color::Black => write!(f, "h g f e d c b a")?,
        }
        if let Some(line) = lines.next() {
            write!(f, "   {line}")?;
        }
        writeln!(f)?;
        for line in lines {
            writeln!(f, "                  {line}")?;
        }
        Ok(())
    }
}
