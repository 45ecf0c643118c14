//! Syndrome decoding with single-error correction and double-error detection.
//!
//! The decoder classifies a received codeword by its [`Syndrome`]:
//!
//! | s4 | s1 s2 s3 | outcome                                   |
//! |----|----------|-------------------------------------------|
//! | 0  | 000      | clean                                     |
//! | 0  | non-zero | two bits flipped, left untouched          |
//! | 1  | 000      | bit 8 flipped, corrected                  |
//! | 1  | non-zero | bit `4*s1 + 2*s2 + s3` flipped, corrected |
//!
//! Decoding never prints or logs. The outcome comes back as a [`Correction`]
//! and presentation is left to the caller.

use crate::ecc::bits::{BitPosition, Nibble};
use crate::ecc::codeword::extract_nibble;
use crate::ecc::syndrome::Syndrome;
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};

/// What the decoder did to a codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correction {
    /// All parity checks passed
    Clean,
    /// A single flipped bit was found and restored
    CorrectedAt(BitPosition),
    /// Two flipped bits were detected; the codeword was left as received
    Uncorrectable,
}

impl Correction {
    pub fn is_clean(&self) -> bool {
        matches!(self, Correction::Clean)
    }

    /// Corrected bit position, if any.
    pub fn position(&self) -> Option<BitPosition> {
        match self {
            Correction::CorrectedAt(position) => Some(*position),
            _ => None,
        }
    }
}

impl Display for Correction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Correction::Clean => write!(f, "clean"),
            Correction::CorrectedAt(position) => write!(f, "error corrected at bit {}", position),
            Correction::Uncorrectable => write!(f, "two bits flipped, cannot correct"),
        }
    }
}

/// Checks `codeword` against the parity equations and repairs a single-bit
/// error in place.
///
/// Returns the (possibly corrected) codeword and the outcome. On
/// [`Correction::Uncorrectable`] the codeword is returned unchanged.
pub fn check_and_correct(codeword: u8) -> (u8, Correction) {
    let syndrome = Syndrome::of(codeword);

    if syndrome.is_double_error() {
        return (codeword, Correction::Uncorrectable);
    }

    match syndrome.error_position() {
        None => (codeword, Correction::Clean),
        Some(position) => {
            let mut bits = BitArray::<[u8; 1], Msb0>::new([codeword]);
            let flipped = !bits[position.index()];
            bits.set(position.index(), flipped);
            (bits.into_inner()[0], Correction::CorrectedAt(position))
        }
    }
}

/// Decodes one received codeword back to its information nibble.
///
/// For zero or one flipped bits the nibble is the one originally encoded.
/// For two flipped bits the outcome is [`Correction::Uncorrectable`] and the
/// nibble is read from the uncorrected codeword on a best-effort basis.
pub fn decode_correct(codeword: u8) -> (Nibble, Correction) {
    let (corrected, correction) = check_and_correct(codeword);
    (extract_nibble(corrected), correction)
}
