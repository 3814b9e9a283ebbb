//! Random `BitBoard` generation, used by the table-verification tests.

use super::prng::PRNG;
use crate::core::bitboard::BitBoard;

/// Sets the number of random bits on a randomly-generated `BitBoard`.
#[derive(Eq, PartialEq)]
enum RandAmount {
    VeryDense,       // Average 48 bits
    Dense,           // Average 32 bits
    Standard,        // Average 16 bits
    Sparse,          // Average 8 bits
    VerySparse,      // Average 6 bits
    ExtremelySparse, // Average 4 bits
}

/// BitBoard generating structure.
///
/// Defaults to a non-deterministic seed; use [`RandBitBoard::pseudo_random`]
/// for reproducible sequences.
///
/// [`RandBitBoard::pseudo_random`]: struct.RandBitBoard.html#method.pseudo_random
pub struct RandBitBoard {
    prng: PRNG,
    rand: RandAmount,
    max: u16,
    min: u16,
}

impl Default for RandBitBoard {
    fn default() -> Self {
        RandBitBoard {
            prng: PRNG::init(rand::random::<u64>() | 1),
            rand: RandAmount::Standard,
            max: 64,
            min: 1,
        }
    }
}

impl RandBitBoard {
    /// Returns a vector of `amount` BitBoards.
    pub fn many(mut self, amount: usize) -> Vec<BitBoard> {
        let mut boards: Vec<BitBoard> = Vec::with_capacity(amount);
        for _ in 0..amount {
            boards.push(self.go());
        }
        boards
    }

    /// Returns a singular random BitBoard.
    pub fn one(mut self) -> BitBoard {
        self.go()
    }

    /// Sets the average number of bits in the resulting BitBoards.
    pub fn avg(mut self, bits: u8) -> Self {
        self.rand = if bits >= 36 {
            RandAmount::VeryDense
        } else if bits >= 26 {
            RandAmount::Dense
        } else if bits >= 12 {
            RandAmount::Standard
        } else if bits >= 7 {
            RandAmount::Sparse
        } else if bits >= 5 {
            RandAmount::VerySparse
        } else {
            RandAmount::ExtremelySparse
        };
        self
    }

    /// Allows empty BitBoards to be returned.
    pub fn allow_empty(mut self) -> Self {
        self.min = 0;
        self
    }

    /// Sets the maximum number of bits in a `BitBoard`.
    pub fn max(mut self, max: u16) -> Self {
        self.max = max;
        self
    }

    /// Sets the minimum number of bits in a `BitBoard`.
    pub fn min(mut self, min: u16) -> Self {
        self.min = min;
        self
    }

    /// Switches the generation to a deterministic sequence seeded with the
    /// given value.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.prng = PRNG::init(if seed == 0 { 1 } else { seed });
        self
    }

    fn go(&mut self) -> BitBoard {
        loop {
            let num = match self.rand {
                RandAmount::VeryDense => self.prng.rand() | self.prng.rand(),
                RandAmount::Dense => self.prng.rand(),
                RandAmount::Standard => self.prng.rand() & self.prng.rand(),
                RandAmount::Sparse => self.prng.sparse_rand(),
                RandAmount::VerySparse => {
                    self.prng.sparse_rand() & (self.prng.rand() | self.prng.rand())
                }
                RandAmount::ExtremelySparse => self.prng.sparse_rand() & self.prng.rand(),
            };
            let count = u16::from(num.count_ones() as u8);
            if count >= self.min && count <= self.max {
                return BitBoard(num);
            }
        }
    }
}
