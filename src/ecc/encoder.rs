//! Byte-stream encoder.
//!
//! Each input byte becomes two codewords: the high nibble's codeword
//! followed by the low nibble's. The output is always twice the input length.

use crate::ecc::bits::split_byte;
use crate::ecc::codeword::encode_nibble;

/// Encodes a single byte into its (high, low) codeword pair.
pub fn encode_byte(byte: u8) -> [u8; 2] {
    let (high, low) = split_byte(byte);
    [encode_nibble(high), encode_nibble(low)]
}

/// Encodes a byte slice, preserving order.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(data.len() * 2);
    for &byte in data {
        encoded.extend_from_slice(&encode_byte(byte));
    }
    encoded
}
