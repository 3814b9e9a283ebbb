//! The legal move generator.
//!
//! Moves are emitted fully legal; there is no pseudo-legal pass followed by
//! filtering. The generator first derives the threat picture for the side to
//! move: the enemy-attacked squares (computed with our king lifted off the
//! board so slider rays extend through it), the checkers, the check mask,
//! and the pinned pieces. Every phase then masks its targets against that
//! geometry:
//!
//! * With two or more checkers only king moves exist; every other phase is
//!   skipped outright.
//! * With one checker the check mask restricts non-king destinations to the
//!   checker square and the squares between checker and king.
//! * A pinned slider or pawn may only move along the line through it and
//!   the king; a pinned knight never moves.
//! * En-passant is validated by replaying its peculiar double occupancy
//!   change and testing the king for a discovered slider attack.
//!
//! Everything is monomorphized over [`PlayerTrait`] so the pawn directions,
//! promotion ranks and castling squares are compile-time constants.
//!
//! [`PlayerTrait`]: ../../core/mono_traits/trait.PlayerTrait.html

use super::Board;
use crate::core::bitboard::BitBoard;
use crate::core::mono_traits::{BishopType, KnightType, PieceTrait, PlayerTrait, QueenType, RookType};
use crate::core::move_list::MoveList;
use crate::core::piece_move::{BitMove, MoveFlags};
use crate::core::sq::{NO_SQ, SQ};
use crate::core::PieceType;
use crate::tables::{
    between_bb, bishop_moves, king_moves, knight_moves, line_bb, pawn_attacks_from, queen_moves,
    rook_moves,
};

/// Public move generator.
pub struct MoveGen {}

impl MoveGen {
    /// Returns a `MoveList` of all legal moves for player `P` on the given
    /// board.
    ///
    /// # Safety
    ///
    /// `P` must match the board's side to move.
    pub fn generate<P: PlayerTrait>(board: &Board) -> MoveList {
        debug_assert_eq!(board.turn(), P::player());
        let mut gen = InnerMoveGen::new::<P>(board);

        gen.generate_king_moves::<P>();
        if !gen.checkers.more_than_one() {
            gen.moves_per_piece::<P, KnightType>();
            gen.moves_per_piece::<P, BishopType>();
            gen.moves_per_piece::<P, RookType>();
            gen.moves_per_piece::<P, QueenType>();
            gen.generate_pawn_moves::<P>();
            if gen.checkers.is_empty() {
                gen.generate_castling::<P>();
            }
        }
        gen.list
    }
}

/// Generator state: the board, the occupancies recomputed on entry, and the
/// threat geometry for the side to move.
struct InnerMoveGen<'a> {
    board: &'a Board,
    list: MoveList,
    /// Occupancy of both players.
    occ: BitBoard,
    /// Occupancy of the side to move.
    us_occ: BitBoard,
    /// Occupancy of the opposing side.
    them_occ: BitBoard,
    /// Our king square.
    ksq: SQ,
    /// Enemy pieces currently giving check.
    checkers: BitBoard,
    /// Squares attacked by the enemy, with our king removed from the
    /// occupancy so squares shadowed by the king still count as unsafe.
    banned: BitBoard,
    /// Squares a non-king move may land on: universal out of check, the
    /// blocking/capturing squares in single check, empty in double check.
    check_mask: BitBoard,
    /// Our pieces that are pinned to our king.
    pinned: BitBoard,
}

impl<'a> InnerMoveGen<'a> {
    fn new<P: PlayerTrait>(board: &'a Board) -> InnerMoveGen<'a> {
        let us = P::player();
        let them = P::opp_player();
        let us_occ = board.occupied_player(us);
        let them_occ = board.occupied_player(them);
        let occ = us_occ | them_occ;
        let ksq = board.king_sq(us);

        let their_pawns = board.piece_bb(them, PieceType::P);
        let their_knights = board.piece_bb(them, PieceType::N);
        let their_diags = board.diagonal_piece_bb(them);
        let their_orths = board.sliding_piece_bb(them);

        // Attacked squares, our king lifted out of the occupancy.
        let occ_no_king = occ ^ ksq.to_bb();
        let mut banned = <P::Opp>::shift_up_left(their_pawns)
            | <P::Opp>::shift_up_right(their_pawns)
            | king_moves(board.king_sq(them));
        let mut iter = their_knights;
        while let Some(s) = iter.pop_some_lsb() {
            banned |= knight_moves(s);
        }
        let mut iter = their_diags;
        while let Some(s) = iter.pop_some_lsb() {
            banned |= bishop_moves(occ_no_king, s);
        }
        let mut iter = their_orths;
        while let Some(s) = iter.pop_some_lsb() {
            banned |= rook_moves(occ_no_king, s);
        }

        // Checkers, found by attacking out from the king square.
        let checkers = (pawn_attacks_from(ksq, us) & their_pawns)
            | (knight_moves(ksq) & their_knights)
            | (bishop_moves(occ, ksq) & their_diags)
            | (rook_moves(occ, ksq) & their_orths);

        let check_mask = if checkers.is_empty() {
            BitBoard::ALL
        } else if checkers.more_than_one() {
            BitBoard::EMPTY
        } else {
            between_bb(ksq, checkers.to_sq()) | checkers
        };

        // Pinned pieces: for each enemy slider aligned with the king, a
        // single blocker of ours on the segment between them is pinned.
        let mut pinned = BitBoard::EMPTY;
        let mut snipers = (bishop_moves(BitBoard::EMPTY, ksq) & their_diags)
            | (rook_moves(BitBoard::EMPTY, ksq) & their_orths);
        while let Some(s) = snipers.pop_some_lsb() {
            let blockers = between_bb(ksq, s) & occ;
            if blockers.count_bits() == 1 {
                pinned |= blockers & us_occ;
            }
        }

        InnerMoveGen {
            board,
            list: MoveList::default(),
            occ,
            us_occ,
            them_occ,
            ksq,
            checkers,
            banned,
            check_mask,
            pinned,
        }
    }

    /// King walks, and nothing else: legal whenever the destination is
    /// neither ours nor attacked.
    fn generate_king_moves<P: PlayerTrait>(&mut self) {
        let targets = king_moves(self.ksq) & !self.us_occ & !self.banned;
        self.push_targets(self.ksq, PieceType::K, targets);
    }

    /// Knight, bishop, rook and queen moves, monomorphized per piece.
    fn moves_per_piece<P: PlayerTrait, Pc: PieceTrait>(&mut self) {
        let piece = Pc::piece_type();
        let mut pieces = self.board.piece_bb(P::player(), piece);
        while let Some(src) = pieces.pop_some_lsb() {
            if piece == PieceType::N && self.pinned.is_set(src) {
                // A pinned knight has no legal move.
                continue;
            }
            let mut targets = self.attacks_from::<Pc>(src) & !self.us_occ & self.check_mask;
            if self.pinned.is_set(src) {
                targets &= line_bb(self.ksq, src);
            }
            self.push_targets(src, piece, targets);
        }
    }

    #[inline]
    fn attacks_from<Pc: PieceTrait>(&self, sq: SQ) -> BitBoard {
        match Pc::piece_type() {
            PieceType::N => knight_moves(sq),
            PieceType::B => bishop_moves(self.occ, sq),
            PieceType::R => rook_moves(self.occ, sq),
            PieceType::Q => queen_moves(self.occ, sq),
            _ => BitBoard::EMPTY,
        }
    }

    /// Pawn pushes, captures, promotions and en-passant.
    fn generate_pawn_moves<P: PlayerTrait>(&mut self) {
        let pawns = self.board.piece_bb(P::player(), PieceType::P);
        let empty = !self.occ;

        // Diagonal captures, generated as one shifted batch per direction
        // and walked back to their source squares.
        let mut caps = P::shift_up_left(pawns) & self.them_occ & self.check_mask;
        while let Some(dst) = caps.pop_some_lsb() {
            let src = P::down_right(dst);
            if self.pin_allows(src, dst) {
                self.push_pawn_capture::<P>(src, dst);
            }
        }
        let mut caps = P::shift_up_right(pawns) & self.them_occ & self.check_mask;
        while let Some(dst) = caps.pop_some_lsb() {
            let src = P::down_left(dst);
            if self.pin_allows(src, dst) {
                self.push_pawn_capture::<P>(src, dst);
            }
        }

        // Single pushes, and double pushes derived from them before the
        // check mask cuts the intermediate square away.
        let single = P::shift_up(pawns) & empty;
        let mut double = P::shift_up(single) & empty & P::DOUBLE_PUSH_RANK & self.check_mask;
        let mut single = single & self.check_mask;
        while let Some(dst) = single.pop_some_lsb() {
            let src = P::down(dst);
            if self.pin_allows(src, dst) {
                if P::PROMOTION_RANK.is_set(dst) {
                    self.push_promotions(src, dst, MoveFlags::empty());
                } else {
                    self.list
                        .push(BitMove::make(src, dst, PieceType::P, MoveFlags::empty()));
                }
            }
        }
        while let Some(dst) = double.pop_some_lsb() {
            let src = P::down(P::down(dst));
            if self.pin_allows(src, dst) {
                self.list
                    .push(BitMove::make(src, dst, PieceType::P, MoveFlags::DOUBLE_PUSH));
            }
        }

        let ep = self.board.ep_square();
        if ep != NO_SQ {
            self.generate_en_passant::<P>(pawns, ep);
        }
    }

    /// En-passant changes three squares of occupancy at once, so the usual
    /// pin bookkeeping does not apply; replay the occupancy change and
    /// probe the king for a discovered slider attack instead.
    fn generate_en_passant<P: PlayerTrait>(&mut self, pawns: BitBoard, ep: SQ) {
        let cap_sq = P::down(ep);
        let them = P::opp_player();
        let mut attackers = pawn_attacks_from(ep, them) & pawns;
        while let Some(src) = attackers.pop_some_lsb() {
            let occ_after = (self.occ ^ src.to_bb() ^ cap_sq.to_bb()) | ep.to_bb();
            if (rook_moves(occ_after, self.ksq) & self.board.sliding_piece_bb(them)).is_not_empty()
            {
                continue;
            }
            if (bishop_moves(occ_after, self.ksq) & self.board.diagonal_piece_bb(them))
                .is_not_empty()
            {
                continue;
            }
            // The move both captures on cap_sq and blocks on ep; it
            // resolves a check if either square does.
            if !self.check_mask.is_set(cap_sq) && !self.check_mask.is_set(ep) {
                continue;
            }
            self.list.push(BitMove::make(
                src,
                ep,
                PieceType::P,
                MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
            ));
        }
    }

    /// Castling. The safety masks include the king's own square, so being
    /// in check is already excluded; the caller additionally skips this
    /// phase entirely while in check.
    fn generate_castling<P: PlayerTrait>(&mut self) {
        let perm = self.board.castle_permission();
        if perm & P::CASTLE_KING_SIDE == P::CASTLE_KING_SIDE
            && (self.occ & P::CASTLE_PATH_KING_SIDE).is_empty()
            && (self.banned & P::CASTLE_SAFE_KING_SIDE).is_empty()
        {
            self.list.push(BitMove::make(
                self.ksq,
                P::KING_SIDE_KING_TO,
                PieceType::K,
                MoveFlags::KING_CASTLE,
            ));
        }
        if perm & P::CASTLE_QUEEN_SIDE == P::CASTLE_QUEEN_SIDE
            && (self.occ & P::CASTLE_PATH_QUEEN_SIDE).is_empty()
            && (self.banned & P::CASTLE_SAFE_QUEEN_SIDE).is_empty()
        {
            self.list.push(BitMove::make(
                self.ksq,
                P::QUEEN_SIDE_KING_TO,
                PieceType::K,
                MoveFlags::QUEEN_CASTLE,
            ));
        }
    }

    /// A pinned piece may only move along the line through it and the king.
    #[inline(always)]
    fn pin_allows(&self, src: SQ, dst: SQ) -> bool {
        !self.pinned.is_set(src) || line_bb(self.ksq, src).is_set(dst)
    }

    #[inline]
    fn push_pawn_capture<P: PlayerTrait>(&mut self, src: SQ, dst: SQ) {
        if P::PROMOTION_RANK.is_set(dst) {
            self.push_promotions(src, dst, MoveFlags::CAPTURE);
        } else {
            self.list
                .push(BitMove::make(src, dst, PieceType::P, MoveFlags::CAPTURE));
        }
    }

    /// Emits the four promotion choices for a pawn reaching the last rank.
    #[inline]
    fn push_promotions(&mut self, src: SQ, dst: SQ, flags: MoveFlags) {
        self.list
            .push(BitMove::make_promotion(src, dst, PieceType::N, flags));
        self.list
            .push(BitMove::make_promotion(src, dst, PieceType::B, flags));
        self.list
            .push(BitMove::make_promotion(src, dst, PieceType::R, flags));
        self.list
            .push(BitMove::make_promotion(src, dst, PieceType::Q, flags));
    }

    /// Emits a move for each bit of `targets`, with the capture flag set
    /// from the enemy occupancy.
    fn push_targets(&mut self, src: SQ, piece: PieceType, mut targets: BitBoard) {
        while let Some(dst) = targets.pop_some_lsb() {
            let flags = if self.them_occ.is_set(dst) {
                MoveFlags::CAPTURE
            } else {
                MoveFlags::empty()
            };
            self.list.push(BitMove::make(src, dst, piece, flags));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_moves(fen: &str) -> usize {
        Board::from_fen(fen).unwrap().generate_moves().len()
    }

    #[test]
    fn start_pos_has_twenty_moves() {
        let moves = Board::start_pos().generate_moves();
        assert_eq!(moves.len(), 20);
        // No duplicates.
        let mut raw: Vec<u32> = moves.iter().map(|m| m.get_raw()).collect();
        raw.sort_unstable();
        raw.dedup();
        assert_eq!(raw.len(), 20);
    }

    #[test]
    fn kiwipete_counts() {
        let board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .unwrap();
        let moves = board.generate_moves();
        assert_eq!(moves.len(), 48);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 8);
        assert_eq!(moves.iter().filter(|m| m.is_castle()).count(), 2);
    }

    #[test]
    fn checkmate_yields_no_moves() {
        // Back-rank mate.
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(board.in_check());
        assert!(board.generate_moves().is_empty());
        assert!(board.checkmate());
        assert!(!board.stalemate());
    }

    #[test]
    fn stalemate_yields_no_moves() {
        let board = Board::from_fen("5k2/5P2/5K2/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!board.in_check());
        assert!(board.generate_moves().is_empty());
        assert!(board.stalemate());
        assert!(!board.checkmate());
    }

    #[test]
    fn double_check_only_king_moves() {
        // Knight on f6 and rook on e1 both check the king on e8.
        let board = Board::from_fen("4k3/8/5N2/8/8/8/8/4R1K1 b - - 0 1").unwrap();
        assert_eq!(board.checkers().count_bits(), 2);
        let moves = board.generate_moves();
        assert!(!moves.is_empty());
        for mv in moves.iter() {
            assert_eq!(mv.moved_piece(), PieceType::K);
        }
    }

    #[test]
    fn pinned_knight_cannot_move() {
        // Knight on e4 is pinned against the king on e1 by the rook on e8.
        let board = Board::from_fen("4r2k/8/8/8/4N3/8/8/4K3 w - - 0 1").unwrap();
        let moves = board.generate_moves();
        assert!(moves.iter().all(|m| m.get_src() != SQ::E4));
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        // Rook on e4 pinned on the e-file may move along it, nowhere else.
        let board = Board::from_fen("4r2k/8/8/8/4R3/8/8/4K3 w - - 0 1").unwrap();
        let rook_moves: Vec<BitMove> = board
            .generate_moves()
            .iter()
            .copied()
            .filter(|m| m.get_src() == SQ::E4)
            .collect();
        assert!(!rook_moves.is_empty());
        for mv in rook_moves {
            assert_eq!(mv.get_dest().file_idx(), SQ::E4.file_idx());
        }
    }

    #[test]
    fn horizontal_pin_forbids_en_passant() {
        // The white king sits on e5 between the two black rooks. Either
        // en-passant capture removes both rank-5 pawns at once and exposes
        // the king along the rank, so neither may be generated.
        let board = Board::from_fen("7k/3p1p2/8/r1P1K1Pr/8/8/8/8 b - - 0 1").unwrap();
        for push in [(SQ::D7, SQ::D5), (SQ::F7, SQ::F5)] {
            let next = board.apply_move(BitMove::make(
                push.0,
                push.1,
                PieceType::P,
                MoveFlags::DOUBLE_PUSH,
            ));
            assert!(next.ep_square().is_okay());
            assert!(next.generate_moves().iter().all(|m| !m.is_en_passant()));
        }
    }

    #[test]
    fn unpinned_en_passant_is_generated() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").unwrap();
        let eps: Vec<BitMove> = board
            .generate_moves()
            .iter()
            .copied()
            .filter(|m| m.is_en_passant())
            .collect();
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].get_src(), SQ::E5);
        assert_eq!(eps[0].get_dest(), SQ::D6);
        assert!(eps[0].is_capture());
    }

    #[test]
    fn en_passant_counts_at_depth_one() {
        assert_eq!(count_moves("7k/3p1p2/8/r1P1K1Pr/8/8/8/8 b - - 0 1"), 23);
        assert_eq!(count_moves("7k/4p2q/2q5/3P1P2/4K3/8/8/8 b - - 0 1"), 36);
        assert_eq!(count_moves("7k/r2pK3/8/2P5/8/8/8/8 b - - 0 1"), 14);
    }

    #[test]
    fn castling_blocked_by_attack() {
        // A black rook on f8 covers f1; white may only castle queen-side.
        let board = Board::from_fen("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let moves = board.generate_moves();
        assert!(moves.iter().any(|m| m.is_queen_castle()));
        assert!(moves.iter().all(|m| !m.is_king_castle()));
    }

    #[test]
    fn castling_queen_side_b_file_attack_allowed() {
        // The b1 square may be attacked during a queen-side castle; only
        // c1, d1 and e1 need to be safe.
        let board = Board::from_fen("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        let moves = board.generate_moves();
        assert!(moves.iter().any(|m| m.is_queen_castle()));
    }

    #[test]
    fn castling_path_must_be_empty() {
        // A knight on b1 blocks queen-side castling even though the king's
        // path is clear.
        let board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").unwrap();
        let moves = board.generate_moves();
        assert!(moves.iter().any(|m| m.is_king_castle()));
        assert!(moves.iter().all(|m| !m.is_queen_castle()));
    }

    #[test]
    fn every_generated_move_is_legal() {
        for fen in crate::board::fen::ALL_FENS.iter() {
            let board = Board::from_fen(fen).unwrap();
            for mv in board.generate_moves() {
                let next = board.apply_move(mv);
                assert!(
                    next.is_sane(),
                    "move {} in {} broke an invariant",
                    mv,
                    fen
                );
            }
        }
    }
}
