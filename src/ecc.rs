//! Hamming(8,4) error correction over a simulated noisy channel.
//!
//! Each 4-bit nibble is mapped to an 8-bit codeword whose pairwise Hamming
//! distance is at least 4. That is enough to correct any single flipped bit
//! and to detect, without correcting, any two flipped bits (SECDED).
//!
//! The stages, in data-flow order:
//! - [`encoder`]: bytes to codeword pairs
//! - [`channel`]: per-codeword random single-bit flips
//! - [`decoder`]: syndrome decoding and correction
//! - [`pipeline`]: pairs codewords back into bytes and reports events
//!
//! # Examples
//!
//! ```
//! use hamming84::ecc::{ErrorCorrection, Hamming84};
//!
//! let codec = Hamming84::new();
//! let encoded = codec.encode(b"hello").unwrap();
//! assert_eq!(encoded.len(), 10);
//! assert_eq!(codec.decode(&encoded).unwrap(), b"hello");
//! ```

pub use crate::error::Result;

pub mod bits;
pub mod channel;
pub mod codeword;
pub mod decoder;
pub mod encoder;
pub mod pipeline;
pub mod syndrome;

pub use bits::{reassemble, split_byte, BitPosition, Nibble};
pub use channel::{corrupt, BitFlipChannel, Channel, NoiselessChannel};
pub use codeword::{encode_nibble, CODEWORDS};
pub use decoder::{decode_correct, Correction};
pub use encoder::encode;
pub use pipeline::{
    decode_stream, decode_stream_collect, CodewordEvent, DecodeReport, DecodeStats, EventSink,
    LogSink,
};

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// The fixed Hamming(8,4) codec over a noiseless channel.
///
/// Uncorrectable codewords do not fail [`ErrorCorrection::decode`]; use
/// [`Hamming84::decode_with_report`] to see them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming84;

impl Hamming84 {
    pub fn new() -> Self {
        Hamming84
    }

    /// Decodes `encoded` and returns the bytes together with every event.
    pub fn decode_with_report(&self, encoded: &[u8]) -> Result<DecodeReport> {
        decode_stream_collect(encoded, &mut NoiselessChannel)
    }
}

impl ErrorCorrection for Hamming84 {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(encoder::encode(data))
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let (bytes, _) = decode_stream(data, &mut NoiselessChannel, &mut ())?;
        Ok(bytes)
    }
}
