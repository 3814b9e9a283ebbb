//! Property sweeps: every state reachable from a legal position through
//! generated moves must keep the board invariants intact.

use perch::board::fen::ALL_FENS;
use perch::core::ALL_PIECE_TYPES;
use perch::{BitBoard, Board, PieceType, Player};

/// Recursively applies every generated move, checking the invariants at
/// each resulting state.
fn sweep(board: &Board, depth: u16) {
    let moves = board.generate_moves();

    // Distinct moves only.
    let mut raw: Vec<u32> = moves.iter().map(|m| m.get_raw()).collect();
    raw.sort_unstable();
    let before = raw.len();
    raw.dedup();
    assert_eq!(before, raw.len(), "duplicate move emitted in {}", board.fen());

    for mv in moves.iter() {
        // No move may land on the enemy king.
        assert_ne!(
            mv.get_dest(),
            board.king_sq(board.turn().other_player()),
            "king capture generated in {}",
            board.fen()
        );

        let next = board.apply_move(*mv);
        check_invariants(&next);
        if depth > 1 {
            sweep(&next, depth - 1);
        }
    }
}

fn check_invariants(board: &Board) {
    // The twelve bitboards are pairwise disjoint.
    let mut seen = BitBoard(0);
    for &player in &[Player::White, Player::Black] {
        for &piece in &ALL_PIECE_TYPES {
            let bb = board.piece_bb(player, piece);
            assert!(
                (seen & bb).is_empty(),
                "overlapping bitboards in {}",
                board.fen()
            );
            seen |= bb;
        }
    }

    // Exactly one king per side.
    assert_eq!(board.count_piece(Player::White, PieceType::K), 1);
    assert_eq!(board.count_piece(Player::Black, PieceType::K), 1);

    // The side that just moved must not have left its own king in check.
    let mover = board.turn().other_player();
    let attackers = board.attackers_to(board.king_sq(mover), board.occupied())
        & board.occupied_player(board.turn());
    assert!(
        attackers.is_empty(),
        "mover left its king in check in {}",
        board.fen()
    );
}

#[test]
fn corpus_sweep_depth_two() {
    for fen in ALL_FENS.iter() {
        let board = Board::from_fen(fen).unwrap();
        sweep(&board, 2);
    }
}

#[test]
fn start_pos_sweep_depth_three() {
    sweep(&Board::start_pos(), 3);
}

#[test]
fn boundary_positions() {
    // Checkmate: the side to move is in check and has no moves.
    let mate = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(mate.in_check());
    assert!(mate.generate_moves().is_empty());

    // Stalemate: no moves and no check.
    let stale = Board::from_fen("5k2/5P2/5K2/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!stale.in_check());
    assert!(stale.generate_moves().is_empty());
}

#[test]
fn round_trip_preserves_reachable_states() {
    // Every position two plies deep from the start survives a FEN round
    // trip bit-for-bit.
    let board = Board::start_pos();
    for mv in board.generate_moves() {
        let one = board.apply_move(mv);
        for mv2 in one.generate_moves() {
            let two = one.apply_move(mv2);
            let re = Board::from_fen(&two.fen()).unwrap();
            assert_eq!(two, re, "round trip altered {}", two.fen());
        }
    }
}
