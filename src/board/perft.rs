//! perft, or Performance Test, Move Path Enumeration: counts the leaf nodes
//! of the legal-move tree to a given depth.
//!
//! Perft is the correctness benchmark for move generation: the totals for
//! the well-known positions are published to the last node, so any deviation
//! exposes a generation bug.
//!
//! Three drivers share the same recursion shape:
//!
//! * [`perft`] bulk-counts: at depth 1 the move-list length is taken
//!   directly without making the moves.
//! * [`perft_detailed`] additionally classifies the leaf moves by flag into
//!   a [`PerftNodes`] breakdown.
//! * [`perft_parallel`] splits the root move list across rayon workers.
//!   `Board` is a plain value, so no synchronization beyond the final sum
//!   is needed.
//!
//! The recursion alternates the two player monomorphizations through
//! `P::Opp`, so the hot loops never branch on the side to move.
//!
//! [`perft`]: fn.perft.html
//! [`perft_detailed`]: fn.perft_detailed.html
//! [`perft_parallel`]: fn.perft_parallel.html
//! [`PerftNodes`]: struct.PerftNodes.html

use rayon::prelude::*;

use super::{Board, MoveGen};
use crate::core::mono_traits::{BlackType, PlayerTrait, WhiteType};
use crate::core::Player;

/// Holds the counts of the moves reaching the leaf depth, classified by
/// move flag.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PerftNodes {
    /// Total number of leaf nodes counted.
    pub nodes: u64,
    /// Number of capturing moves, en-passant included.
    pub captures: u64,
    /// Number of en-passant captures.
    pub en_passants: u64,
    /// Number of castles of either side.
    pub castles: u64,
    /// Number of promotions.
    pub promotions: u64,
}

impl PerftNodes {
    /// Checks for the correct number of nodes in each category, panicking
    /// with the failed categories in the message otherwise.
    pub fn check(&self, nodes: u64, captures: u64, en_passants: u64, castles: u64, promotions: u64) {
        let expected = PerftNodes {
            nodes,
            captures,
            en_passants,
            castles,
            promotions,
        };
        assert_eq!(self, &expected, "perft breakdown differs");
    }
}

/// Returns the number of leaf nodes from generating moves to a certain
/// depth. Depth 0 counts the position itself.
pub fn perft(board: &Board, depth: u16) -> u64 {
    if depth == 0 {
        return 1;
    }
    match board.turn() {
        Player::White => inner_perft::<WhiteType>(board, depth),
        Player::Black => inner_perft::<BlackType>(board, depth),
    }
}

/// Returns the count of all leaf move types up to a certain depth.
pub fn perft_detailed(board: &Board, depth: u16) -> PerftNodes {
    let mut counts = PerftNodes::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    match board.turn() {
        Player::White => inner_perft_detailed::<WhiteType>(board, depth, &mut counts),
        Player::Black => inner_perft_detailed::<BlackType>(board, depth, &mut counts),
    }
    counts
}

/// Like [`perft`], with the root move list partitioned across threads.
/// Each worker bulk-counts its own subtree; the results are summed.
///
/// [`perft`]: fn.perft.html
pub fn perft_parallel(board: &Board, depth: u16) -> u64 {
    if depth <= 1 {
        return perft(board, depth);
    }
    let moves = board.generate_moves();
    moves
        .as_slice()
        .par_iter()
        .map(|mv| perft(&board.apply_move(*mv), depth - 1))
        .sum()
}

fn inner_perft<P: PlayerTrait>(board: &Board, depth: u16) -> u64 {
    let moves = MoveGen::generate::<P>(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut count: u64 = 0;
    for mv in moves.iter() {
        let next = board.make_move::<P>(*mv);
        count += inner_perft::<P::Opp>(&next, depth - 1);
    }
    count
}

fn inner_perft_detailed<P: PlayerTrait>(board: &Board, depth: u16, counts: &mut PerftNodes) {
    let moves = MoveGen::generate::<P>(board);

    if depth == 1 {
        counts.nodes += moves.len() as u64;
        for mv in moves.iter() {
            if mv.is_capture() {
                counts.captures += 1;
            }
            if mv.is_en_passant() {
                counts.en_passants += 1;
            }
            if mv.is_castle() {
                counts.castles += 1;
            }
            if mv.is_promo() {
                counts.promotions += 1;
            }
        }
        return;
    }

    for mv in moves.iter() {
        let next = board.make_move::<P>(*mv);
        inner_perft_detailed::<P::Opp>(&next, depth - 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pos_perft() {
        let b = Board::start_pos();
        assert_eq!(1, perft(&b, 0));
        assert_eq!(20, perft(&b, 1));
        assert_eq!(400, perft(&b, 2));
        assert_eq!(8_902, perft(&b, 3));
        assert_eq!(197_281, perft(&b, 4));
        assert_eq!(4_865_609, perft(&b, 5));
    }

    #[test]
    fn start_pos_perft_detailed() {
        let b = Board::start_pos();
        perft_detailed(&b, 3).check(8_902, 34, 0, 0, 0);
        perft_detailed(&b, 4).check(197_281, 1_576, 0, 0, 0);
        perft_detailed(&b, 5).check(4_865_609, 82_719, 258, 0, 0);
    }

    // Counts over a billion nodes; run explicitly when needed.
    #[ignore]
    #[test]
    fn start_pos_perft_deep() {
        let b = Board::start_pos();
        assert_eq!(119_060_324, perft(&b, 6));
    }

    #[test]
    fn perft_kiwipete() {
        let b =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .unwrap();
        assert_eq!(48, perft(&b, 1));
        assert_eq!(2_039, perft(&b, 2));
        assert_eq!(97_862, perft(&b, 3));
        assert_eq!(4_085_603, perft(&b, 4));
    }

    #[test]
    fn perft_kiwipete_detailed() {
        let b =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .unwrap();
        perft_detailed(&b, 1).check(48, 8, 0, 2, 0);
        perft_detailed(&b, 2).check(2_039, 351, 1, 91, 0);
        perft_detailed(&b, 3).check(97_862, 17_102, 45, 3_162, 0);
        perft_detailed(&b, 4).check(4_085_603, 757_163, 1_929, 128_013, 15_172);
    }

    #[test]
    fn perft_rook_endgame() {
        let b = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -").unwrap();
        assert_eq!(14, perft(&b, 1));
        assert_eq!(191, perft(&b, 2));
        assert_eq!(2_812, perft(&b, 3));
        assert_eq!(43_238, perft(&b, 4));
        assert_eq!(674_624, perft(&b, 5));
        assert_eq!(11_030_083, perft(&b, 6));
    }

    #[test]
    fn perft_rook_endgame_detailed() {
        let b = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -").unwrap();
        perft_detailed(&b, 6).check(11_030_083, 940_350, 33_325, 0, 7_552);
    }

    #[test]
    fn perft_mirror() {
        let b =
            Board::from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
                .unwrap();
        assert_eq!(6, perft(&b, 1));
        assert_eq!(264, perft(&b, 2));
        assert_eq!(9_467, perft(&b, 3));
        assert_eq!(422_333, perft(&b, 4));
    }

    #[ignore]
    #[test]
    fn perft_mirror_deep() {
        let b =
            Board::from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
                .unwrap();
        perft_detailed(&b, 5).check(15_833_292, 2_046_173, 6_512, 0, 329_464);
    }

    #[test]
    fn perft_talkchess() {
        let b = Board::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
            .unwrap();
        assert_eq!(44, perft(&b, 1));
        assert_eq!(1_486, perft(&b, 2));
        assert_eq!(62_379, perft(&b, 3));
        assert_eq!(2_103_487, perft(&b, 4));
    }

    #[ignore]
    #[test]
    fn perft_talkchess_deep() {
        let b = Board::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
            .unwrap();
        assert_eq!(89_941_194, perft(&b, 5));
    }

    #[test]
    fn perft_steven_alt() {
        let b = Board::from_fen(
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        )
        .unwrap();
        assert_eq!(46, perft(&b, 1));
        assert_eq!(2_079, perft(&b, 2));
        assert_eq!(89_890, perft(&b, 3));
        assert_eq!(3_894_594, perft(&b, 4));
    }

    #[ignore]
    #[test]
    fn perft_steven_alt_deep() {
        let b = Board::from_fen(
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        )
        .unwrap();
        assert_eq!(164_075_551, perft(&b, 5));
    }

    #[test]
    fn perft_horizontal_ep_pin() {
        let b = Board::from_fen("7k/3p1p2/8/r1P1K1Pr/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(23, perft(&b, 1));
        assert_eq!(160, perft(&b, 2));
        assert_eq!(3_995, perft(&b, 3));
        assert_eq!(26_757, perft(&b, 4));
        assert_eq!(712_872, perft(&b, 5));
        assert_eq!(5_070_440, perft(&b, 6));
    }

    #[test]
    fn perft_diagonal_ep_pin() {
        let b = Board::from_fen("7k/4p2q/2q5/3P1P2/4K3/8/8/8 b - - 0 1").unwrap();
        assert_eq!(36, perft(&b, 1));
        assert_eq!(201, perft(&b, 2));
        assert_eq!(6_985, perft(&b, 3));
        assert_eq!(42_904, perft(&b, 4));
        assert_eq!(1_511_423, perft(&b, 5));
        assert_eq!(9_034_785, perft(&b, 6));
    }

    #[test]
    fn perft_no_ep_rights() {
        let b = Board::from_fen("7k/r2pK3/8/2P5/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(14, perft(&b, 1));
        assert_eq!(93, perft(&b, 2));
        assert_eq!(1_489, perft(&b, 3));
        assert_eq!(8_497, perft(&b, 4));
        assert_eq!(143_911, perft(&b, 5));
        assert_eq!(900_561, perft(&b, 6));
    }

    #[test]
    fn parallel_matches_serial() {
        let b =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .unwrap();
        for depth in 0..=4 {
            assert_eq!(perft(&b, depth), perft_parallel(&b, depth));
        }
    }

    #[test]
    fn perft_sums_over_children() {
        // perft(S, D) must equal the sum of perft over all successors.
        let b = Board::start_pos();
        let depth = 4;
        let total: u64 = b
            .generate_moves()
            .iter()
            .map(|mv| perft(&b.apply_move(*mv), depth - 1))
            .sum();
        assert_eq!(total, perft(&b, depth));
    }
}
