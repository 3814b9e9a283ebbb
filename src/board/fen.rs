//! FEN (Forsyth-Edwards Notation) parsing and serialization.
//!
//! A FEN string describes a particular state of a chess game. For example,
//! the start position is
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`.
//!
//! The parser accepts the halfmove and fullmove fields being omitted,
//! defaulting them to 0 and 1 respectively. Serializing always emits all
//! six fields, with the castling rights normalized to `KQkq` order, so a
//! round trip is lossless modulo those two normalizations.

use std::error::Error;
use std::fmt;

use lazy_static::lazy_static;

use super::Board;
use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::mono_traits::{BlackType, PlayerTrait, WhiteType};
use crate::core::sq::{NO_SQ, SQ};
use crate::core::{u8_to_u64, PieceType, Player, Rank, ALL_PLAYERS};
use crate::tables;

/// The FEN string of the start position.
pub const OPENING_POS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

lazy_static! {
    /// A corpus of valid positions, used by the tests to sweep generator
    /// and round-trip properties across varied material balances.
    pub static ref ALL_FENS: Vec<&'static str> = vec![
        OPENING_POS_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 10",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 11",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        "4rrk1/pp1n3p/3q2pQ/2p1pb2/2PP4/2P3N1/P2B2PP/4RRK1 b - - 7 19",
        "r3r1k1/2p2ppp/p1p1bn2/8/1q2P3/2NPQN2/PPP3PP/R4RK1 b - - 2 15",
        "r1bbk1nr/pp3p1p/2n5/1N4p1/2Np1B2/8/PPP2PPP/2KR1B1R w kq - 0 13",
        "r1bq1rk1/ppp1nppp/4n3/3p3Q/3P4/1BP1B3/PP1N2PP/R4RK1 w - - 1 16",
        "2rqkb1r/ppp2p2/2npb1p1/1N1Nn2p/2P1PP2/8/PP2B1PP/R1BQK2R b KQ - 0 11",
        "3r1rk1/p5pp/bpp1pp2/8/q1PP1P2/b3P3/P2NQRPP/1R2B1K1 b - - 6 22",
        "4k2r/1pb2ppp/1p2p3/1R1p4/3P4/2r1PN2/P4PPP/1R4K1 b k - 3 22",
        "6k1/6p1/6Pp/ppp5/3pn2P/1P3K2/1PP2P2/3N4 b - - 0 1",
        "8/6pk/1p6/8/PP3p1p/5P2/4KP1q/3Q4 w - - 0 1",
        "8/2p5/8/2kPKp1p/2p4P/2P5/3P4/8 w - - 0 1",
        "8/pp2r1k1/2p1p3/3pP2p/1P1P1P1P/P5KR/8/8 w - - 0 1",
        "5k2/7R/4P2p/5K2/p1r2P1p/8/8/8 b - - 0 1",
        "1r3k2/4q3/2Pp3b/3Bp3/2Q2p2/1p1P2P1/1P2KP2/3N4 w - - 0 1",
        "8/3p3B/5p2/5P2/p7/PP5b/k7/6K1 w - - 0 1",
        "7k/3p1p2/8/r1P1K1Pr/8/8/8/8 b - - 0 1",
        "7k/4p2q/2q5/3P1P2/4K3/8/8/8 b - - 0 1",
    ];
}

/// Represents things that can go wrong when building a [`Board`] from a FEN
/// string.
///
/// [`Board`]: ../struct.Board.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenBuildError {
    /// The FEN had fewer whitespace-separated fields than the required four.
    NotEnoughSections { sections: usize },
    /// The placement field contained a character that is not a piece, a
    /// digit, or a rank separator.
    UnrecognizedPiece { piece: char },
    /// The placement field did not describe exactly 64 squares.
    PlacementSize { squares: u32 },
    /// A side must have exactly one king.
    IllegalNumKings { player: Player, num: u8 },
    /// The side-to-move field was not `w` or `b`.
    IllegalSide { side: String },
    /// The castling field contained a character outside `KQkq-`.
    IllegalCastlingRights { castle: String },
    /// The en-passant field was not `-` or a square on the correct rank
    /// with an enemy pawn directly beyond it.
    EpSquareInvalid { ep: String },
    /// A clock field was present but not a number.
    UnreadableClock { clock: String },
}

impl fmt::Display for FenBuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FenBuildError::NotEnoughSections { sections } => {
                write!(f, "invalid number of fen sections: {}, expected at least 4", sections)
            }
            FenBuildError::UnrecognizedPiece { piece } => {
                write!(f, "unrecognized piece character: {}", piece)
            }
            FenBuildError::PlacementSize { squares } => {
                write!(f, "piece placement describes {} squares, expected 64", squares)
            }
            FenBuildError::IllegalNumKings { player, num } => {
                write!(f, "{} has {} kings, expected 1", player, num)
            }
            FenBuildError::IllegalSide { side } => {
                write!(f, "invalid side to move: {}, expected 'w' or 'b'", side)
            }
            FenBuildError::IllegalCastlingRights { castle } => {
                write!(f, "invalid castling rights: {}", castle)
            }
            FenBuildError::EpSquareInvalid { ep } => {
                write!(f, "invalid en-passant square: {}", ep)
            }
            FenBuildError::UnreadableClock { clock } => {
                write!(f, "unreadable move clock: {}", clock)
            }
        }
    }
}

impl Error for FenBuildError {}

fn piece_from_char(c: char) -> Result<(Player, PieceType), FenBuildError> {
    let player = if c.is_ascii_uppercase() {
        Player::White
    } else {
        Player::Black
    };
    let piece = match c.to_ascii_lowercase() {
        'p' => PieceType::P,
        'n' => PieceType::N,
        'b' => PieceType::B,
        'r' => PieceType::R,
        'q' => PieceType::Q,
        'k' => PieceType::K,
        _ => return Err(FenBuildError::UnrecognizedPiece { piece: c }),
    };
    Ok((player, piece))
}

impl Board {
    /// Constructs a board from a FEN string.
    ///
    /// # Examples
    ///
    /// ```
    /// use perch::Board;
    ///
    /// let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    /// assert!(board.is_ok());
    ///
    /// let bad = Board::from_fen("this is not a fen");
    /// assert!(bad.is_err());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Board, FenBuildError> {
        tables::init_statics();

        let sections: Vec<&str> = fen.split_whitespace().collect();
        if sections.len() < 4 {
            return Err(FenBuildError::NotEnoughSections {
                sections: sections.len(),
            });
        }

        // Piece placement: rank 8 first, which is square 0 in this layout,
        // so the FEN reads out in ascending square order.
        let mut bit_boards = [[BitBoard(0); PIECE_TYPE_CNT]; PLAYER_CNT];
        let mut sq: u32 = 0;
        for c in sections[0].chars() {
            match c {
                '/' => {}
                '1'..='8' => sq += c as u32 - '0' as u32,
                _ => {
                    let (player, piece) = piece_from_char(c)?;
                    if sq >= 64 {
                        return Err(FenBuildError::PlacementSize { squares: sq + 1 });
                    }
                    bit_boards[player as usize][piece as usize] |= u8_to_u64(sq as u8);
                    sq += 1;
                }
            }
            if sq > 64 {
                return Err(FenBuildError::PlacementSize { squares: sq });
            }
        }
        if sq != 64 {
            return Err(FenBuildError::PlacementSize { squares: sq });
        }

        for &player in &ALL_PLAYERS {
            let num = bit_boards[player as usize][PieceType::K as usize].count_bits();
            if num != 1 {
                return Err(FenBuildError::IllegalNumKings { player, num });
            }
        }

        let turn = match sections[1] {
            "w" => Player::White,
            "b" => Player::Black,
            s => {
                return Err(FenBuildError::IllegalSide {
                    side: s.to_string(),
                })
            }
        };

        // Castling rights. A claimed right only survives if its king and
        // rook actually stand on their home squares, which keeps the
        // permission bitboard consistent with the position.
        let castle_str = sections[2];
        let (mut wk, mut wq, mut bk, mut bq) = (false, false, false, false);
        if castle_str != "-" {
            for c in castle_str.chars() {
                match c {
                    'K' => wk = true,
                    'Q' => wq = true,
                    'k' => bk = true,
                    'q' => bq = true,
                    _ => {
                        return Err(FenBuildError::IllegalCastlingRights {
                            castle: castle_str.to_string(),
                        })
                    }
                }
            }
        }
        let w_rooks = bit_boards[Player::White as usize][PieceType::R as usize];
        let b_rooks = bit_boards[Player::Black as usize][PieceType::R as usize];
        let w_king_home = bit_boards[Player::White as usize][PieceType::K as usize].is_set(SQ::E1);
        let b_king_home = bit_boards[Player::Black as usize][PieceType::K as usize].is_set(SQ::E8);
        let mut castle_perm = BitBoard(0);
        if wk && w_king_home && w_rooks.is_set(SQ::H1) {
            castle_perm |= CASTLE_W_KING_SIDE;
        }
        if wq && w_king_home && w_rooks.is_set(SQ::A1) {
            castle_perm |= CASTLE_W_QUEEN_SIDE;
        }
        if bk && b_king_home && b_rooks.is_set(SQ::H8) {
            castle_perm |= CASTLE_B_KING_SIDE;
        }
        if bq && b_king_home && b_rooks.is_set(SQ::A8) {
            castle_perm |= CASTLE_B_QUEEN_SIDE;
        }

        // En-passant target: must lie on the correct relative rank with the
        // double-pushed enemy pawn directly beyond it.
        let ep_sq = if sections[3] == "-" {
            NO_SQ
        } else {
            let ep = SQ::from_algebraic(sections[3]).ok_or_else(|| FenBuildError::EpSquareInvalid {
                ep: sections[3].to_string(),
            })?;
            let valid = match turn {
                Player::White => {
                    ep.rank() == Rank::R6
                        && bit_boards[Player::Black as usize][PieceType::P as usize]
                            .is_set(WhiteType::down(ep))
                }
                Player::Black => {
                    ep.rank() == Rank::R3
                        && bit_boards[Player::White as usize][PieceType::P as usize]
                            .is_set(BlackType::down(ep))
                }
            };
            if !valid {
                return Err(FenBuildError::EpSquareInvalid {
                    ep: sections[3].to_string(),
                });
            }
            ep
        };

        let half_moves = match sections.get(4) {
            Some(s) => s.parse::<u16>().map_err(|_| FenBuildError::UnreadableClock {
                clock: (*s).to_string(),
            })?,
            None => 0,
        };
        let full_moves = match sections.get(5) {
            Some(s) => s.parse::<u16>().map_err(|_| FenBuildError::UnreadableClock {
                clock: (*s).to_string(),
            })?,
            None => 1,
        };

        Ok(Board {
            bit_boards,
            castle_perm,
            ep_sq,
            turn,
            half_moves,
            full_moves,
        })
    }

    /// Creates the FEN string of this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use perch::Board;
    /// use perch::board::fen::OPENING_POS_FEN;
    ///
    /// assert_eq!(Board::start_pos().fen(), OPENING_POS_FEN);
    /// ```
    pub fn fen(&self) -> String {
        let mut s = String::with_capacity(90);

        for row in 0..8u8 {
            let mut blanks = 0u8;
            for file in 0..8u8 {
                match self.piece_at_sq(SQ(row * 8 + file)) {
                    Some((player, piece)) => {
                        if blanks != 0 {
                            s.push(char::from(b'0' + blanks));
                            blanks = 0;
                        }
                        s.push(piece.character(player));
                    }
                    None => blanks += 1,
                }
            }
            if blanks != 0 {
                s.push(char::from(b'0' + blanks));
            }
            if row != 7 {
                s.push('/');
            }
        }

        s.push(' ');
        s.push(match self.turn() {
            Player::White => 'w',
            Player::Black => 'b',
        });

        s.push(' ');
        s.push_str(&self.castle_rights_string());

        s.push(' ');
        if self.ep_square() == NO_SQ {
            s.push('-');
        } else {
            s.push_str(&self.ep_square().to_string());
        }

        s.push(' ');
        s.push_str(&self.halfmove_clock().to_string());
        s.push(' ');
        s.push_str(&self.fullmove_number().to_string());

        s
    }

    /// The castling rights in FEN form: a subset of `KQkq`, or `-`.
    pub(crate) fn castle_rights_string(&self) -> String {
        let perm = self.castle_permission();
        let mut s = String::with_capacity(4);
        if perm & CASTLE_W_KING_SIDE == BitBoard(CASTLE_W_KING_SIDE) {
            s.push('K');
        }
        if perm & CASTLE_W_QUEEN_SIDE == BitBoard(CASTLE_W_QUEEN_SIDE) {
            s.push('Q');
        }
        if perm & CASTLE_B_KING_SIDE == BitBoard(CASTLE_B_KING_SIDE) {
            s.push('k');
        }
        if perm & CASTLE_B_QUEEN_SIDE == BitBoard(CASTLE_B_QUEEN_SIDE) {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}
