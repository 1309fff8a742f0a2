#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::process::ExitCode;

mod board_display;
mod repl;

fn main() -> ExitCode {
    match repl::repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
