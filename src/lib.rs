//! hamming84: a Hamming(8,4) SECDED codec driven through a simulated noisy channel.
//!
//! Bytes are split into nibbles, each nibble is encoded into an 8-bit
//! codeword, every codeword may have one bit flipped on its way through the
//! channel, and the decoder repairs single-bit errors and flags double-bit
//! errors before reassembling the original bytes.
//!
//! - [`ecc`]: the codec itself, free of I/O and printing
//! - [`config`]: run parameters and RNG seeding
//! - [`io`]: reading and writing the byte streams

pub mod config;
pub mod ecc;
pub mod error;
pub mod io;

pub use config::SimConfig;
pub use error::{Error, Result};
