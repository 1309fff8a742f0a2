use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write, stderr, stdin, stdout},
    str::FromStr,
};

use chess_arbiter::{
    Color, Fen, Game, Move, Position, fen::ParseFenError, movement::ParseMoveError,
};
use rand::random_range;
use rustc_hash::FxHashSet;

use crate::board_display::BoardDisplay;

#[derive(Debug)]
enum Input {
    Help,
    Flip,
    Restart,
    Quit,
    Import(Fen),
    ExportFen,
    Load(Box<Game>),
    ExportJson,
    Random,
    Position(Position),
    Move(Move),
}
fn strip_prefix_token<'a>(src: &'a str, search: &str) -> Option<&'a str> {
    src.strip_prefix(search)
        .filter(|src| src.chars().next().is_none_or(<char>::is_whitespace))
        .map(<str>::trim_start)
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "flip" => Ok(Input::Flip),
            "restart" => Ok(Input::Restart),
            "quit" => Ok(Input::Quit),
            "fen" => Ok(Input::ExportFen),
            "json" => Ok(Input::ExportJson),
            "random" => Ok(Input::Random),
            s => {
                if let Some(s) = strip_prefix_token(s, "import") {
                    Ok(Input::Import(s.parse()?))
                } else if let Some(s) = strip_prefix_token(s, "load") {
                    Ok(Input::Load(Box::new(serde_json::from_str(s)?)))
                } else if let Ok(position) = s.parse() {
                    Ok(Input::Position(position))
                } else {
                    Ok(Input::Move(s.parse()?))
                }
            }
        }
    }
}
fn status(game: &Game) -> String {
    let side = game.side_to_move();
    match game.end_state() {
        Some(end_state) => format!("{end_state}\n"),
        None if game.is_in_check(side) => format!("{side} plays\n{side} is in check\n"),
        None => format!("{side} plays\n"),
    }
}
#[allow(
    clippy::too_many_lines,
    reason = "further decomposition could potentially hurt readability"
)]
pub fn repl() -> io::Result<()> {
    let input = stdin().lock();
    let mut output = stdout().lock();
    let mut error = stderr().lock();

    let mut lines = input.lines();

    let mut game = Game::new();
    let mut info = String::new();
    let mut highlighted = Vec::new();
    let mut valid_moves: FxHashSet<Move> = FxHashSet::default();
    let mut update = true;
    let mut view = Color::White;
    let mut first_time = true;
    loop {
        if update {
            valid_moves.clear();
            valid_moves.extend(game.all_valid_moves());
            info = status(&game);
        }
        if first_time {
            info.push_str("type `help` for instructions\n");
            first_time = false;
        }
        update = false;
        writeln!(
            output,
            "{}",
            BoardDisplay {
                board: game.board(),
                view,
                highlighted: &highlighted,
                info: &info,
            },
        )?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(text) = lines.next() else {
                return Ok(());
            };
            let text = text?;
            let input = match text.trim().parse::<Input>() {
                Ok(input) => input,
                Err(err) => {
                    writeln!(error, "Error: {err}")?;
                    writeln!(error, "for available command, enter `help`")?;
                    continue;
                }
            };
            match input {
                Input::Help => {
                    writeln!(output, "flip           - flip the board")?;
                    writeln!(output, "restart        - reset to starting position")?;
                    writeln!(output, "quit           - quit the game")?;
                    writeln!(output, "import <fen>   - import a position")?;
                    writeln!(output, "fen            - export the position as fen")?;
                    writeln!(output, "load <json>    - load a saved game")?;
                    writeln!(output, "json           - export the game as json")?;
                    writeln!(output, "random         - play a random legal move")?;
                    writeln!(output, "e2             - view valid moves")?;
                    writeln!(output, "e2e4           - play the move")?;
                    writeln!(output, "e7e8q          - move and promote")?;
                }
                Input::Flip => {
                    view = !view;
                }
                Input::Restart => {
                    game = Game::new();
                    update = true;
                    highlighted.clear();
                }
                Input::Quit => return Ok(()),
                Input::Import(fen) => {
                    game = fen.0;
                    update = true;
                    highlighted.clear();
                }
                Input::ExportFen => {
                    writeln!(output, "{}", Fen(game.clone()))?;
                }
                Input::Load(loaded) => {
                    game = *loaded;
                    update = true;
                    highlighted.clear();
                }
                Input::ExportJson => match serde_json::to_string(&game) {
                    Ok(json) => writeln!(output, "{json}")?,
                    Err(err) => {
                        writeln!(error, "Error: {err}")?;
                        continue;
                    }
                },
                Input::Position(position) => {
                    let Some(piece) = game.board()[position] else {
                        writeln!(error, "Error: No piece found on {position}")?;
                        continue;
                    };
                    if piece.color != game.side_to_move() {
                        writeln!(error, "Error: It is {}'s turn", game.side_to_move())?;
                        continue;
                    }
                    highlighted.clear();
                    highlighted.extend(
                        valid_moves
                            .iter()
                            .filter(|movement| movement.origin == position)
                            .map(|movement| movement.destination),
                    );
                }
                Input::Move(movement) => {
                    if let Err(err) = game.make_move(movement) {
                        writeln!(error, "Error: {err}")?;
                        continue;
                    }
                    highlighted.clear();
                    highlighted.push(movement.origin);
                    highlighted.push(movement.destination);
                    update = true;
                }
                Input::Random => {
                    let moves: Vec<Move> = valid_moves.iter().copied().collect();
                    if moves.is_empty() {
                        writeln!(error, "Error: No legal move left")?;
                        continue;
                    }
                    let movement = moves[random_range(0..moves.len())];
                    if let Err(err) = game.make_move(movement) {
                        writeln!(error, "Error: {err}")?;
                        continue;
                    }
                    writeln!(output, "played {movement}")?;
                    highlighted.clear();
                    highlighted.push(movement.origin);
                    highlighted.push(movement.destination);
                    update = true;
                }
            }
            break;
        }
    }
}

#[derive(Debug)]
enum ParseInputError {
    Fen(ParseFenError),
    Move(ParseMoveError),
    Json(serde_json::Error),
}
impl From<ParseFenError> for ParseInputError {
    fn from(value: ParseFenError) -> Self {
        ParseInputError::Fen(value)
    }
}
impl From<ParseMoveError> for ParseInputError {
    fn from(value: ParseMoveError) -> Self {
        ParseInputError::Move(value)
    }
}
impl From<serde_json::Error> for ParseInputError {
    fn from(value: serde_json::Error) -> Self {
        ParseInputError::Json(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::Fen(err) => write!(f, "{err}")?,
            ParseInputError::Move(err) => write!(f, "{err}")?,
            ParseInputError::Json(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseInputError::Fen(err) => Some(err),
            ParseInputError::Move(err) => Some(err),
            ParseInputError::Json(err) => Some(err),
        }
    }
}
