//! Plays seeded random games and compares every position against the `chess`
//! crate. Positions are exported with no castling rights and no en passant
//! square, so both generators follow the same rules.

use chess::{BoardStatus, ChessMove, MoveGen};
use chess_arbiter::{Board, Fen, Game, Move, PieceKind, Position};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

const GAMES: usize = 24;
const MAX_PLIES: usize = 160;

fn position(square: chess::Square) -> Position {
    Position::new(
        u8::try_from(square.get_rank().to_index() + 1).unwrap(),
        u8::try_from(square.get_file().to_index() + 1).unwrap(),
    )
}
fn kind(piece: chess::Piece) -> PieceKind {
    match piece {
        chess::Piece::Pawn => PieceKind::Pawn,
        chess::Piece::Knight => PieceKind::Knight,
        chess::Piece::Bishop => PieceKind::Bishop,
        chess::Piece::Rook => PieceKind::Rook,
        chess::Piece::Queen => PieceKind::Queen,
        chess::Piece::King => PieceKind::King,
    }
}
fn movement(value: ChessMove) -> Move {
    Move {
        origin: position(value.get_source()),
        destination: position(value.get_dest()),
        promotion: value.get_promotion().map(kind),
    }
}
fn random_position(rng: &mut SmallRng) -> Position {
    Position::new(rng.random_range(1..=8), rng.random_range(1..=8))
}
fn check_position(game: &Game, rng: &mut SmallRng) {
    let fen = Fen(game.clone());
    let reference: chess::Board = fen.to_string().parse().unwrap();
    let side = game.side_to_move();

    let moves: FxHashSet<Move> = game.all_valid_moves().collect();
    let expected: FxHashSet<Move> = MoveGen::new_legal(&reference).map(movement).collect();
    if let Some(extra) = moves.difference(&expected).next() {
        panic!("found {extra} but it's not a legal move\n{fen}");
    }
    if let Some(missing) = expected.difference(&moves).next() {
        panic!("{missing} not found\n{fen}");
    }

    assert_eq!(
        game.is_in_check(side),
        reference.checkers().popcnt() > 0,
        "{fen}"
    );
    let status = reference.status();
    assert_eq!(
        game.is_in_checkmate(side),
        status == BoardStatus::Checkmate,
        "{fen}"
    );
    assert_eq!(
        game.is_in_stalemate(side),
        status == BoardStatus::Stalemate,
        "{fen}"
    );

    for movement in &moves {
        let mut board: Board = game.board().clone();
        board.apply(*movement);
        let after = Game::from_board(board, !side);
        assert!(!after.is_in_check(side), "{movement} escapes filtering\n{fen}");
    }

    let guess = Move::new(random_position(rng), random_position(rng));
    if !moves.contains(&guess) {
        let mut attempt = game.clone();
        assert!(attempt.make_move(guess).is_err(), "{guess} accepted\n{fen}");
        assert_eq!(&attempt, game);
    }
}

#[test]
fn legal_moves_match_reference_in_random_games() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..GAMES {
        let mut game = Game::new();
        for _ in 0..MAX_PLIES {
            check_position(&game, &mut rng);
            let moves: Vec<_> = game.all_valid_moves().collect();
            if moves.is_empty() {
                assert!(game.end_state().is_some());
                break;
            }
            let side = game.side_to_move();
            game.make_move(moves[rng.random_range(0..moves.len())])
                .unwrap();
            assert_eq!(game.side_to_move(), !side);
        }
    }
}

#[test]
fn handpicked_positions_match_reference() {
    let mut rng = SmallRng::seed_from_u64(7);
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w - - 0 1",
        "4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1",
        "7k/8/6Q1/8/8/8/8/K7 b - - 0 1",
    ] {
        let game = fen.parse::<Fen>().unwrap().0;
        check_position(&game, &mut rng);
    }
}
