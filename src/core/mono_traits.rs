//! Traits and dummy types defined for various enum types. Shouldn't be used
//! in place of their enum representations.
//!
//! This module's only use is to allow for compile-time monomorphization of
//! functions / methods, where each function created can be optimized further.
//! Every hot function in the generator and the perft driver is instantiated
//! once per player, so pawn directions, promotion ranks and castling squares
//! are constants inside the emitted code rather than runtime branches.

use super::bitboard::BitBoard;
use super::masks::*;
use super::sq::SQ;
use super::{PieceType, Player};

/// Defines a player trait, allowing for specific functions in relation
/// to a certain player.
///
/// These shouldn't be used in place of `Player`, as they are only used for
/// compile-time optimizations of certain functions.
pub trait PlayerTrait {
    /// The type of the opposing player, allowing statically alternating
    /// recursion between the two monomorphizations.
    type Opp: PlayerTrait;

    /// The rank a pawn of this player promotes on.
    const PROMOTION_RANK: BitBoard;
    /// The rank a pawn of this player lands on after a double push.
    const DOUBLE_PUSH_RANK: BitBoard;

    /// King and rook home squares of the king-side castling right.
    const CASTLE_KING_SIDE: BitBoard;
    /// King and rook home squares of the queen-side castling right.
    const CASTLE_QUEEN_SIDE: BitBoard;
    /// Squares between king and king-side rook; must be empty to castle.
    const CASTLE_PATH_KING_SIDE: BitBoard;
    /// Squares between king and queen-side rook; must be empty to castle.
    const CASTLE_PATH_QUEEN_SIDE: BitBoard;
    /// Squares that must be free of enemy attack for a king-side castle.
    const CASTLE_SAFE_KING_SIDE: BitBoard;
    /// Squares that must be free of enemy attack for a queen-side castle.
    const CASTLE_SAFE_QUEEN_SIDE: BitBoard;

    /// The king's destination square of a king-side castle.
    const KING_SIDE_KING_TO: SQ;
    /// The king's destination square of a queen-side castle.
    const QUEEN_SIDE_KING_TO: SQ;
    /// The rook's home square of a king-side castle.
    const KING_SIDE_ROOK_FROM: SQ;
    /// The rook's destination square of a king-side castle.
    const KING_SIDE_ROOK_TO: SQ;
    /// The rook's home square of a queen-side castle.
    const QUEEN_SIDE_ROOK_FROM: SQ;
    /// The rook's destination square of a queen-side castle.
    const QUEEN_SIDE_ROOK_TO: SQ;

    /// Return the current `Player`.
    fn player() -> Player;

    /// Return the opposing `Player`.
    fn opp_player() -> Player;

    /// Returns the index of the player.
    fn player_idx() -> usize;

    /// Given a `SQ`, return a square that is up relative to the current
    /// player.
    fn up(sq: SQ) -> SQ;

    /// Given a `SQ`, return a square that is down relative to the current
    /// player.
    fn down(sq: SQ) -> SQ;

    /// Given a `SQ`, return a square that is down-left relative to the
    /// current player.
    fn down_left(sq: SQ) -> SQ;

    /// Given a `SQ`, return a square that is down-right relative to the
    /// current player.
    fn down_right(sq: SQ) -> SQ;

    /// Return the same BitBoard shifted "up" relative to the current player.
    fn shift_up(bb: BitBoard) -> BitBoard;

    /// Return the same BitBoard shifted "up" and "left" relative to the
    /// current player. Does not include the left-most file in the result.
    fn shift_up_left(bb: BitBoard) -> BitBoard;

    /// Return the same BitBoard shifted "up" and "right" relative to the
    /// current player. Does not include the right-most file in the result.
    fn shift_up_right(bb: BitBoard) -> BitBoard;
}

/// Dummy type to represent a `Player::White` which implements `PlayerTrait`.
pub struct WhiteType {}

/// Dummy type to represent a `Player::Black` which implements `PlayerTrait`.
pub struct BlackType {}

impl PlayerTrait for WhiteType {
    type Opp = BlackType;

    const PROMOTION_RANK: BitBoard = BitBoard(RANK_8);
    const DOUBLE_PUSH_RANK: BitBoard = BitBoard(RANK_4);

    const CASTLE_KING_SIDE: BitBoard = BitBoard(CASTLE_W_KING_SIDE);
    const CASTLE_QUEEN_SIDE: BitBoard = BitBoard(CASTLE_W_QUEEN_SIDE);
    const CASTLE_PATH_KING_SIDE: BitBoard = BitBoard(CASTLE_PATH_W_KING_SIDE);
    const CASTLE_PATH_QUEEN_SIDE: BitBoard = BitBoard(CASTLE_PATH_W_QUEEN_SIDE);
    const CASTLE_SAFE_KING_SIDE: BitBoard = BitBoard(CASTLE_SAFE_W_KING_SIDE);
    const CASTLE_SAFE_QUEEN_SIDE: BitBoard = BitBoard(CASTLE_SAFE_W_QUEEN_SIDE);

    const KING_SIDE_KING_TO: SQ = SQ::G1;
    const QUEEN_SIDE_KING_TO: SQ = SQ::C1;
    const KING_SIDE_ROOK_FROM: SQ = SQ::H1;
    const KING_SIDE_ROOK_TO: SQ = SQ::F1;
    const QUEEN_SIDE_ROOK_FROM: SQ = SQ::A1;
    const QUEEN_SIDE_ROOK_TO: SQ = SQ::D1;

    #[inline(always)]
    fn player() -> Player {
        Player::White
    }

    #[inline(always)]
    fn opp_player() -> Player {
        Player::Black
    }

    #[inline(always)]
    fn player_idx() -> usize {
        Player::White as usize
    }

    #[inline(always)]
    fn up(sq: SQ) -> SQ {
        sq - SQ(8)
    }

    #[inline(always)]
    fn down(sq: SQ) -> SQ {
        sq + SQ(8)
    }

    #[inline(always)]
    fn down_left(sq: SQ) -> SQ {
        sq + SQ(7)
    }

    #[inline(always)]
    fn down_right(sq: SQ) -> SQ {
        sq + SQ(9)
    }

    #[inline(always)]
    fn shift_up(bb: BitBoard) -> BitBoard {
        bb >> 8
    }

    #[inline(always)]
    fn shift_up_left(bb: BitBoard) -> BitBoard {
        (bb & !BitBoard::FILE_A) >> 9
    }

    #[inline(always)]
    fn shift_up_right(bb: BitBoard) -> BitBoard {
        (bb & !BitBoard::FILE_H) >> 7
    }
}

impl PlayerTrait for BlackType {
    type Opp = WhiteType;

    const PROMOTION_RANK: BitBoard = BitBoard(RANK_1);
    const DOUBLE_PUSH_RANK: BitBoard = BitBoard(RANK_5);

    const CASTLE_KING_SIDE: BitBoard = BitBoard(CASTLE_B_KING_SIDE);
    const CASTLE_QUEEN_SIDE: BitBoard = BitBoard(CASTLE_B_QUEEN_SIDE);
    const CASTLE_PATH_KING_SIDE: BitBoard = BitBoard(CASTLE_PATH_B_KING_SIDE);
    const CASTLE_PATH_QUEEN_SIDE: BitBoard = BitBoard(CASTLE_PATH_B_QUEEN_SIDE);
    const CASTLE_SAFE_KING_SIDE: BitBoard = BitBoard(CASTLE_SAFE_B_KING_SIDE);
    const CASTLE_SAFE_QUEEN_SIDE: BitBoard = BitBoard(CASTLE_SAFE_B_QUEEN_SIDE);

    const KING_SIDE_KING_TO: SQ = SQ::G8;
    const QUEEN_SIDE_KING_TO: SQ = SQ::C8;
    const KING_SIDE_ROOK_FROM: SQ = SQ::H8;
    const KING_SIDE_ROOK_TO: SQ = SQ::F8;
    const QUEEN_SIDE_ROOK_FROM: SQ = SQ::A8;
    const QUEEN_SIDE_ROOK_TO: SQ = SQ::D8;

    #[inline(always)]
    fn player() -> Player {
        Player::Black
    }

    #[inline(always)]
    fn opp_player() -> Player {
        Player::White
    }

    #[inline(always)]
    fn player_idx() -> usize {
        Player::Black as usize
    }

    #[inline(always)]
    fn up(sq: SQ) -> SQ {
        sq + SQ(8)
    }

    #[inline(always)]
    fn down(sq: SQ) -> SQ {
        sq - SQ(8)
    }

    #[inline(always)]
    fn down_left(sq: SQ) -> SQ {
        sq - SQ(7)
    }

    #[inline(always)]
    fn down_right(sq: SQ) -> SQ {
        sq - SQ(9)
    }

    #[inline(always)]
    fn shift_up(bb: BitBoard) -> BitBoard {
        bb << 8
    }

    #[inline(always)]
    fn shift_up_left(bb: BitBoard) -> BitBoard {
        (bb & !BitBoard::FILE_H) << 9
    }

    #[inline(always)]
    fn shift_up_right(bb: BitBoard) -> BitBoard {
        (bb & !BitBoard::FILE_A) << 7
    }
}

/// A `PieceTrait` allows for specific functions in relation to the type of
/// piece being moved.
///
/// Alike `PlayerTrait`, `PieceTrait` is only used for compile-time
/// optimization through monomorphism. This trait isn't intended to be used
/// elsewhere.
pub trait PieceTrait {
    /// Returns the `PieceType` of an object.
    fn piece_type() -> PieceType;
}

/// Dummy type to represent a `PieceType::N` which implements `PieceTrait`.
pub struct KnightType {}
/// Dummy type to represent a `PieceType::B` which implements `PieceTrait`.
pub struct BishopType {}
/// Dummy type to represent a `PieceType::R` which implements `PieceTrait`.
pub struct RookType {}
/// Dummy type to represent a `PieceType::Q` which implements `PieceTrait`.
pub struct QueenType {}

impl PieceTrait for KnightType {
    #[inline(always)]
    fn piece_type() -> PieceType {
        PieceType::N
    }
}

impl PieceTrait for BishopType {
    #[inline(always)]
    fn piece_type() -> PieceType {
        PieceType::B
    }
}

impl PieceTrait for RookType {
    #[inline(always)]
    fn piece_type() -> PieceType {
        PieceType::R
    }
}

impl PieceTrait for QueenType {
    #[inline(always)]
    fn piece_type() -> PieceType {
        PieceType::Q
    }
}
