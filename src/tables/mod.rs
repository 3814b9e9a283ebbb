//! Precomputed attack tables and the functions for accessing them.
//!
//! The tables are built once per process by [`init_statics`], which every
//! `Board` constructor calls. After initialization they are read-only and
//! safe to share across threads without synchronization.
//!
//! [`init_statics`]: fn.init_statics.html

pub mod boards;
pub mod magic;

use std::sync::Once;

use crate::core::bitboard::BitBoard;
use crate::core::sq::SQ;
use crate::core::Player;

static INIT: Once = Once::new();

/// Initializes the static attack tables. Guaranteed to only run once.
#[cold]
pub fn init_statics() {
    INIT.call_once(|| {
        magic::init_magics();
        boards::init_boards();
    });
}

// MAGIC FUNCTIONS

/// Generate a bishop-moves `BitBoard` from a bishop square and all occupied
/// squares on the board. The result includes captures of pieces on both
/// sides; AND with the inverse of the moving player's occupancy as needed.
#[inline(always)]
pub fn bishop_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::bishop_attacks(occupied.0, sq.0))
}

/// Generate a rook-moves `BitBoard` from a rook square and all occupied
/// squares on the board. The result includes captures of pieces on both
/// sides; AND with the inverse of the moving player's occupancy as needed.
#[inline(always)]
pub fn rook_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::rook_attacks(occupied.0, sq.0))
}

/// Generate a queen-moves `BitBoard` from a queen square and all occupied
/// squares on the board: the bishop and rook attacks from that square.
#[inline(always)]
pub fn queen_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::rook_attacks(occupied.0, sq.0) | magic::bishop_attacks(occupied.0, sq.0))
}

// BOARD FUNCTIONS

/// Generate a knight-moves `BitBoard` from a source square.
#[inline(always)]
pub fn knight_moves(sq: SQ) -> BitBoard {
    BitBoard(boards::knight_moves(sq))
}

/// Generate a king-moves `BitBoard` from a source square.
#[inline(always)]
pub fn king_moves(sq: SQ) -> BitBoard {
    BitBoard(boards::king_moves(sq))
}

/// Pawn attacks `BitBoard` from a given square, per player.
/// Given square x, returns the BitBoard of squares a pawn on x attacks.
#[inline(always)]
pub fn pawn_attacks_from(sq: SQ, player: Player) -> BitBoard {
    BitBoard(boards::pawn_attacks_from(sq, player))
}

/// Get the line (diagonal / file / rank) `BitBoard` that two squares both
/// exist on, if any, both squares included.
#[inline(always)]
pub fn line_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    BitBoard(boards::line_bb(sq_one, sq_two))
}

/// Get the `BitBoard` of squares strictly between two squares, if they
/// share a rank, file or diagonal.
#[inline(always)]
pub fn between_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    BitBoard(boards::between_bb(sq_one, sq_two))
}

/// Returns if three squares are in the same diagonal, file, or rank.
#[inline(always)]
pub fn aligned(s1: SQ, s2: SQ, s3: SQ) -> bool {
    boards::aligned(s1, s2, s3)
}
