//! Syndrome computation for the (8,4) parity-check equations.
//!
//! With bits numbered 1 (MSB) through 8 (LSB):
//!
//! ```text
//! s1 = b4 ^ b5 ^ b6 ^ b7
//! s2 = b2 ^ b3 ^ b6 ^ b7
//! s3 = b1 ^ b3 ^ b5 ^ b7
//! s4 = b1 ^ b2 ^ b3 ^ b4 ^ b5 ^ b6 ^ b7 ^ b8
//! ```
//!
//! Every valid codeword has an all-zero syndrome. A single flipped bit `k`
//! in 1..=7 produces `s4 = 1` and `(s1, s2, s3)` spelling `k` in binary; a
//! flipped bit 8 produces `s4 = 1` alone.

use crate::ecc::bits::BitPosition;
use bitvec::prelude::*;

/// The four syndrome bits of a received codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Syndrome {
    pub s1: bool,
    pub s2: bool,
    pub s3: bool,
    /// Overall parity across all eight bits
    pub s4: bool,
}

impl Syndrome {
    /// Evaluates the parity-check equations over `codeword`.
    pub fn of(codeword: u8) -> Self {
        let bits = codeword.view_bits::<Msb0>();
        // 1-based accessor to keep the equations readable
        let b = |k: usize| bits[k - 1];

        Syndrome {
            s1: b(4) ^ b(5) ^ b(6) ^ b(7),
            s2: b(2) ^ b(3) ^ b(6) ^ b(7),
            s3: b(1) ^ b(3) ^ b(5) ^ b(7),
            s4: bits.count_ones() % 2 == 1,
        }
    }

    /// True when every equation holds.
    pub fn is_zero(&self) -> bool {
        !(self.s1 || self.s2 || self.s3 || self.s4)
    }

    /// `4*s1 + 2*s2 + s3`, in 0..=7.
    pub fn locator(&self) -> u8 {
        (u8::from(self.s1) << 2) | (u8::from(self.s2) << 1) | u8::from(self.s3)
    }

    /// Position of the single flipped bit this syndrome points at, if the
    /// overall parity says exactly one bit (or an odd number) changed.
    pub fn error_position(&self) -> Option<BitPosition> {
        if !self.s4 {
            return None;
        }
        match self.locator() {
            0 => Some(BitPosition::OVERALL_PARITY),
            k => Some(BitPosition::new_unchecked(k)),
        }
    }

    /// Even overall parity with a non-zero locator: two bits flipped.
    pub fn is_double_error(&self) -> bool {
        !self.s4 && self.locator() != 0
    }
}
