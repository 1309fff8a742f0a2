//! Rules authority for standard chess: move generation, legality filtering,
//! check, checkmate and stalemate detection, and move execution.
//!
//! Castling, en passant, and draws by repetition or the fifty-move rule are
//! not part of these rules.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_panics_doc)]

pub mod board;
pub mod color;
pub mod end_state;
pub mod error;
pub mod fen;
pub mod game;
pub mod movement;
pub mod piece;
pub mod position;

pub use crate::{
    board::Board,
    color::Color,
    end_state::EndState,
    error::InvalidMove,
    fen::Fen,
    game::Game,
    movement::Move,
    piece::{Piece, PieceKind, piece_moves},
    position::Position,
};
