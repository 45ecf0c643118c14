//! Bit-level helpers shared by the codec stages.
//!
//! Bits of a codeword are numbered 1 (most significant) through 8 (least
//! significant). [`BitPosition`] carries that numbering so the rest of the
//! crate never has to juggle 0- versus 1-based indices.

use crate::ecc::Result;
use crate::error::Error;
use std::fmt::{Display, Formatter};

/// Number of bits in a codeword.
pub const CODEWORD_BITS: u8 = 8;

/// A 4-bit unit of information, half of a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nibble(u8);

impl Nibble {
    /// Largest value a nibble can hold
    pub const MAX: u8 = 0x0F;

    /// Creates a nibble, rejecting values above 15.
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::InvalidInput(format!(
                "nibble value {} out of range 0..=15",
                value
            )));
        }
        Ok(Nibble(value))
    }

    /// Upper four bits of `byte`.
    pub const fn high_of(byte: u8) -> Self {
        Nibble(byte >> 4)
    }

    /// Lower four bits of `byte`.
    pub const fn low_of(byte: u8) -> Self {
        Nibble(byte & Self::MAX)
    }

    /// The nibble as an integer in 0..=15
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All sixteen nibbles in ascending order.
    pub fn all() -> impl Iterator<Item = Nibble> {
        (0..=Self::MAX).map(Nibble)
    }
}

impl From<Nibble> for u8 {
    fn from(nibble: Nibble) -> u8 {
        nibble.0
    }
}

impl TryFrom<u8> for Nibble {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Nibble::new(value)
    }
}

impl Display for Nibble {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A bit position inside a codeword, 1 (MSB) through 8 (LSB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPosition(u8);

impl BitPosition {
    /// Creates a position, rejecting anything outside 1..=8.
    pub fn new(position: u8) -> Result<Self> {
        if !(1..=CODEWORD_BITS).contains(&position) {
            return Err(Error::InvalidInput(format!(
                "bit position {} out of range 1..=8",
                position
            )));
        }
        Ok(BitPosition(position))
    }

    /// Position of the overall parity bit.
    pub const OVERALL_PARITY: BitPosition = BitPosition(8);

    pub(crate) const fn new_unchecked(position: u8) -> Self {
        debug_assert!(position >= 1 && position <= CODEWORD_BITS);
        BitPosition(position)
    }

    /// All eight positions, MSB first.
    pub fn all() -> impl Iterator<Item = BitPosition> {
        (1..=CODEWORD_BITS).map(BitPosition)
    }

    /// 1-based position number
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based index in MSB-first order, as used by `bitvec::order::Msb0`.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Single-bit mask selecting this position within an 8-bit codeword.
    pub const fn mask(self) -> u8 {
        0x80 >> (self.0 - 1)
    }
}

impl Display for BitPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Toggles exactly one bit of `codeword`.
pub fn flip_bit(codeword: u8, position: BitPosition) -> u8 {
    codeword ^ position.mask()
}

/// Reads a single bit of `codeword`.
pub fn bit_at(codeword: u8, position: BitPosition) -> bool {
    codeword & position.mask() != 0
}

/// Splits a byte into its (high, low) nibbles.
pub fn split_byte(byte: u8) -> (Nibble, Nibble) {
    (Nibble::high_of(byte), Nibble::low_of(byte))
}

/// Recombines two nibbles into the byte `(high << 4) | low`.
pub fn reassemble(high: Nibble, low: Nibble) -> u8 {
    (high.value() << 4) | low.value()
}

/// Number of bit positions in which `a` and `b` differ.
pub fn hamming_distance(a: u8, b: u8) -> u32 {
    (a ^ b).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_bounds() {
        assert_eq!(Nibble::new(15).unwrap().value(), 15);
        assert!(Nibble::new(16).is_err());
        assert!(Nibble::try_from(0xF0).is_err());
        assert_eq!(Nibble::all().count(), 16);
    }

    #[test]
    fn test_bit_position_masks() {
        let masks: Vec<u8> = BitPosition::all().map(|p| p.mask()).collect();
        assert_eq!(masks, vec![0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01]);
        for position in BitPosition::all() {
            assert_eq!(position.mask().count_ones(), 1);
        }
        assert!(BitPosition::new(0).is_err());
        assert!(BitPosition::new(9).is_err());
    }

    #[test]
    fn test_flip_and_read() {
        let p3 = BitPosition::new(3).unwrap();
        assert_eq!(flip_bit(0xFF, p3), 0xDF);
        assert_eq!(flip_bit(flip_bit(0x5A, p3), p3), 0x5A);
        assert!(bit_at(0x20, p3));
        assert!(!bit_at(0xDF, p3));
    }

    #[test]
    fn test_split_and_reassemble() {
        for byte in 0..=255u8 {
            let (high, low) = split_byte(byte);
            assert_eq!(reassemble(high, low), byte);
        }
        let (high, low) = split_byte(0xA7);
        assert_eq!(high.value(), 0xA);
        assert_eq!(low.value(), 0x7);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(0x00, 0xFF), 8);
        assert_eq!(hamming_distance(0x1E, 0x1E), 0);
        assert_eq!(hamming_distance(0x00, 0x1E), 4);
    }
}
