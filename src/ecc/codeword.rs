//! The fixed Hamming(8,4) codeword table.
//!
//! Entry `n` is the codeword transmitted for nibble `n`. The information
//! nibble sits in bits 1..=4 (the high half) and bits 5..=8 are parity, so
//! every entry has `codeword >> 4 == n`. Any two entries differ in at least
//! four bit positions.

use crate::ecc::bits::{hamming_distance, Nibble};

/// Codewords indexed by information nibble.
pub const CODEWORDS: [u8; 16] = [
    0, 30, 45, 51, 75, 85, 102, 120, 135, 153, 170, 180, 204, 210, 225, 255,
];

/// Minimum Hamming distance the table guarantees.
pub const MIN_DISTANCE: u32 = 4;

/// Maps a nibble to its codeword.
pub fn encode_nibble(nibble: Nibble) -> u8 {
    CODEWORDS[nibble.value() as usize]
}

/// Reads the information nibble out of a codeword.
///
/// This is the inverse of the table layout, so it works on any 8-bit value,
/// not just table entries.
pub fn extract_nibble(codeword: u8) -> Nibble {
    Nibble::high_of(codeword)
}

/// Reverse table lookup; `None` when `codeword` is not a table entry.
pub fn lookup(codeword: u8) -> Option<Nibble> {
    let nibble = extract_nibble(codeword);
    (encode_nibble(nibble) == codeword).then_some(nibble)
}

/// Smallest pairwise Hamming distance over the table.
pub fn min_distance() -> u32 {
    let mut min = u32::MAX;
    for (i, &a) in CODEWORDS.iter().enumerate() {
        for &b in &CODEWORDS[i + 1..] {
            min = min.min(hamming_distance(a, b));
        }
    }
    min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::syndrome::Syndrome;
    use bitvec::prelude::*;

    /// Builds the table from the parity equations: data in bits 1..=4,
    /// b5 = b2^b3^b4, b6 = b1^b3^b4, b7 = b1^b2^b4, b8 = overall parity.
    fn build_table() -> [u8; 16] {
        let mut table = [0u8; 16];
        for (n, entry) in table.iter_mut().enumerate() {
            let mut word = bitarr![u8, Msb0; 0; 8];
            let nibble = n as u8;
            let data = nibble.view_bits::<Msb0>();
            word[..4].copy_from_bitslice(&data[4..]);
            let b = |k: usize| word[k - 1];
            let (b5, b6, b7) = (
                b(2) ^ b(3) ^ b(4),
                b(1) ^ b(3) ^ b(4),
                b(1) ^ b(2) ^ b(4),
            );
            word.set(4, b5);
            word.set(5, b6);
            word.set(6, b7);
            let parity = word[..7].count_ones() % 2 == 1;
            word.set(7, parity);
            *entry = word.into_inner()[0];
        }
        table
    }

    #[test]
    fn test_table_matches_parity_equations() {
        assert_eq!(build_table(), CODEWORDS);
        for &codeword in &CODEWORDS {
            assert!(Syndrome::of(codeword).is_zero(), "codeword {}", codeword);
        }
    }

    #[test]
    fn test_minimum_distance() {
        assert_eq!(min_distance(), MIN_DISTANCE);
        for i in Nibble::all() {
            for j in Nibble::all().filter(|&j| j != i) {
                assert!(hamming_distance(encode_nibble(i), encode_nibble(j)) >= MIN_DISTANCE);
            }
        }
    }

    #[test]
    fn test_table_is_injective() {
        let mut seen = std::collections::HashSet::new();
        for nibble in Nibble::all() {
            assert!(seen.insert(encode_nibble(nibble)));
        }
        assert_eq!(seen.len(), CODEWORDS.len());
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(encode_nibble(Nibble::new(0).unwrap()), 0);
        assert_eq!(encode_nibble(Nibble::new(5).unwrap()), 85);
        assert_eq!(encode_nibble(Nibble::new(15).unwrap()), 255);
    }

    #[test]
    fn test_extract_and_lookup() {
        for nibble in Nibble::all() {
            let codeword = encode_nibble(nibble);
            assert_eq!(extract_nibble(codeword), nibble);
            assert_eq!(lookup(codeword), Some(nibble));
        }
        assert_eq!(lookup(0x01), None);
    }
}
