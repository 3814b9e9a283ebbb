//! A fast legal chess move generator and the perft driver built on top of
//! it.
//!
//! The crate is a board-representation library: a copy-make [`Board`] value
//! over twelve piece bitboards, precomputed attack tables (including a
//! magic-bitboard slider hash), a fully-legal move generator, and bulk /
//! detailed / parallel perft drivers. Search, evaluation and protocol
//! handling are deliberately out of scope.
//!
//! # Examples
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```
//! use perch::Board;
//! let board = Board::start_pos();
//! ```
//!
//! Generating a list of moves (contained inside a [`MoveList`]) can be done
//! with:
//!
//! ```
//! # use perch::Board;
//! # let board = Board::start_pos();
//! let list = board.generate_moves();
//! assert_eq!(list.len(), 20);
//! ```
//!
//! Applying moves produces new positions rather than mutating old ones:
//!
//! ```
//! use perch::Board;
//!
//! let board = Board::start_pos();
//! for mv in board.generate_moves() {
//!     let next = board.apply_move(mv);
//!     assert_ne!(next.turn(), board.turn());
//! }
//! ```
//!
//! FEN strings are supported on the boundary:
//!
//! ```
//! use perch::Board;
//!
//! let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
//! assert_eq!(perch::perft(&board, 3), 8_902);
//! ```
//!
//! [`Board`]: board/struct.Board.html
//! [`MoveList`]: core/move_list/struct.MoveList.html

#[macro_use]
extern crate bitflags;

pub mod board;
pub mod core;
pub mod tables;
pub mod tools;

pub use crate::board::perft::{perft, perft_detailed, perft_parallel, PerftNodes};
pub use crate::board::{Board, FenBuildError, MoveGen};
pub use crate::core::bitboard::BitBoard;
pub use crate::core::move_list::MoveList;
pub use crate::core::piece_move::BitMove;
pub use crate::core::sq::SQ;
pub use crate::core::{PieceType, Player};
