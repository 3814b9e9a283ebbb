//! Masks and various other constants.
//!
//! Squares are numbered from the top-left of the board: A8 is 0, H8 is 7,
//! A1 is 56 and H1 is 63. "Up" for White is therefore a right-shift by 8.

/// The total number of players on a chessboard.
pub const PLAYER_CNT: usize = 2;
/// The total number of types of pieces on a chessboard.
pub const PIECE_TYPE_CNT: usize = 6;
/// The total number of squares on a chessboard.
pub const SQ_CNT: usize = 64;
/// The total number of files on a chessboard.
pub const FILE_CNT: usize = 8;
/// The total number of ranks on a chessboard.
pub const RANK_CNT: usize = 8;
/// The number of castling sides per player: king side and queen side.
pub const CASTLING_SIDES: usize = 2;

/// Bit representation of file A.
pub const FILE_A: u64 = 0x0101_0101_0101_0101;
/// Bit representation of file B.
pub const FILE_B: u64 = FILE_A << 1;
/// Bit representation of file C.
pub const FILE_C: u64 = FILE_A << 2;
/// Bit representation of file D.
pub const FILE_D: u64 = FILE_A << 3;
/// Bit representation of file E.
pub const FILE_E: u64 = FILE_A << 4;
/// Bit representation of file F.
pub const FILE_F: u64 = FILE_A << 5;
/// Bit representation of file G.
pub const FILE_G: u64 = FILE_A << 6;
/// Bit representation of file H.
pub const FILE_H: u64 = FILE_A << 7;

/// Bit representation of rank 8, the top row of the board.
pub const RANK_8: u64 = 0x0000_0000_0000_00FF;
/// Bit representation of rank 7.
pub const RANK_7: u64 = RANK_8 << 8;
/// Bit representation of rank 6.
pub const RANK_6: u64 = RANK_8 << 16;
/// Bit representation of rank 5.
pub const RANK_5: u64 = RANK_8 << 24;
/// Bit representation of rank 4.
pub const RANK_4: u64 = RANK_8 << 32;
/// Bit representation of rank 3.
pub const RANK_3: u64 = RANK_8 << 40;
/// Bit representation of rank 2.
pub const RANK_2: u64 = RANK_8 << 48;
/// Bit representation of rank 1, the bottom row of the board.
pub const RANK_1: u64 = RANK_8 << 56;

/// Array of all files and their corresponding bits, indexed from
/// file A to file H.
pub static FILE_BB: [u64; FILE_CNT] = [
    FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H,
];

/// Array of all ranks and their corresponding bits, indexed by row from the
/// top of the board: entry 0 is rank 8, entry 7 is rank 1.
pub static RANK_BB: [u64; RANK_CNT] = [
    RANK_8, RANK_7, RANK_6, RANK_5, RANK_4, RANK_3, RANK_2, RANK_1,
];

/// Starting bits for the white pawns.
pub const START_W_PAWN: u64 = RANK_2;
/// Starting bits for the white knights.
pub const START_W_KNIGHT: u64 = (1 << 57) | (1 << 62);
/// Starting bits for the white bishops.
pub const START_W_BISHOP: u64 = (1 << 58) | (1 << 61);
/// Starting bits for the white rooks.
pub const START_W_ROOK: u64 = (1 << 56) | (1 << 63);
/// Starting bits for the white queen.
pub const START_W_QUEEN: u64 = 1 << 59;
/// Starting bits for the white king.
pub const START_W_KING: u64 = 1 << 60;

/// Starting bits for the black pawns.
pub const START_B_PAWN: u64 = RANK_7;
/// Starting bits for the black knights.
pub const START_B_KNIGHT: u64 = (1 << 1) | (1 << 6);
/// Starting bits for the black bishops.
pub const START_B_BISHOP: u64 = (1 << 2) | (1 << 5);
/// Starting bits for the black rooks.
pub const START_B_ROOK: u64 = 1 | (1 << 7);
/// Starting bits for the black queen.
pub const START_B_QUEEN: u64 = 1 << 3;
/// Starting bits for the black king.
pub const START_B_KING: u64 = 1 << 4;

// Castling permission is stored as a bitboard over the six king/rook home
// squares. A right stays alive only while both of its endpoints are set, so
// any move touching either endpoint kills it with a single mask.

/// Endpoint squares (E1, H1) of the white king-side castling right.
pub const CASTLE_W_KING_SIDE: u64 = (1 << 60) | (1 << 63);
/// Endpoint squares (E1, A1) of the white queen-side castling right.
pub const CASTLE_W_QUEEN_SIDE: u64 = (1 << 60) | (1 << 56);
/// Endpoint squares (E8, H8) of the black king-side castling right.
pub const CASTLE_B_KING_SIDE: u64 = (1 << 4) | (1 << 7);
/// Endpoint squares (E8, A8) of the black queen-side castling right.
pub const CASTLE_B_QUEEN_SIDE: u64 = (1 << 4) | 1;
/// All castling endpoint squares.
pub const CASTLE_ALL: u64 =
    CASTLE_W_KING_SIDE | CASTLE_W_QUEEN_SIDE | CASTLE_B_KING_SIDE | CASTLE_B_QUEEN_SIDE;

/// Squares between the white king and king-side rook (F1, G1); must be empty.
pub const CASTLE_PATH_W_KING_SIDE: u64 = (1 << 61) | (1 << 62);
/// Squares between the white king and queen-side rook (B1, C1, D1); must be empty.
pub const CASTLE_PATH_W_QUEEN_SIDE: u64 = (1 << 57) | (1 << 58) | (1 << 59);
/// Squares between the black king and king-side rook (F8, G8); must be empty.
pub const CASTLE_PATH_B_KING_SIDE: u64 = (1 << 5) | (1 << 6);
/// Squares between the black king and queen-side rook (B8, C8, D8); must be empty.
pub const CASTLE_PATH_B_QUEEN_SIDE: u64 = (1 << 1) | (1 << 2) | (1 << 3);

/// Squares that must be safe for a white king-side castle (E1, F1, G1).
pub const CASTLE_SAFE_W_KING_SIDE: u64 = (1 << 60) | (1 << 61) | (1 << 62);
/// Squares that must be safe for a white queen-side castle (C1, D1, E1).
/// B1 may be attacked; only the king's path matters.
pub const CASTLE_SAFE_W_QUEEN_SIDE: u64 = (1 << 58) | (1 << 59) | (1 << 60);
/// Squares that must be safe for a black king-side castle (E8, F8, G8).
pub const CASTLE_SAFE_B_KING_SIDE: u64 = (1 << 4) | (1 << 5) | (1 << 6);
/// Squares that must be safe for a black queen-side castle (C8, D8, E8).
pub const CASTLE_SAFE_B_QUEEN_SIDE: u64 = (1 << 2) | (1 << 3) | (1 << 4);

/// Array mapping a square index to its algebraic name.
///
/// # Examples
///
/// ```
/// use perch::core::masks::SQ_DISPLAY;
///
/// assert_eq!(SQ_DISPLAY[0], "a8");
/// assert_eq!(SQ_DISPLAY[7], "h8");
/// assert_eq!(SQ_DISPLAY[56], "a1");
/// assert_eq!(SQ_DISPLAY[63], "h1");
/// ```
pub static SQ_DISPLAY: [&str; SQ_CNT] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

/// Characters for each file, indexed from file A to file H.
pub static FILE_DISPLAYS: [char; FILE_CNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Characters for each rank, indexed by row from the top of the board.
pub static RANK_DISPLAYS: [char; RANK_CNT] = ['8', '7', '6', '5', '4', '3', '2', '1'];
