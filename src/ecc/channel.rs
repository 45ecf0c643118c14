//! Noisy channel simulation.
//!
//! A channel is applied once per codeword. The noisy channel flips, with a
//! configurable probability, exactly one bit chosen uniformly among the eight
//! positions of the codeword. All randomness comes from an injected RNG, so
//! runs are reproducible when it is seeded.

use crate::ecc::bits::{flip_bit, BitPosition, CODEWORD_BITS};
use crate::ecc::Result;
use crate::error::Error;
use rand::distributions::Bernoulli;
use rand::Rng;

/// Default probability that a codeword is hit by a bit flip.
pub const DEFAULT_FLIP_PROBABILITY: f64 = 0.1;

/// Something a codeword passes through between encoder and decoder.
pub trait Channel {
    /// Transmits one codeword, returning what the receiver sees.
    fn transmit(&mut self, codeword: u8) -> u8;
}

/// A channel that delivers every codeword untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiselessChannel;

impl Channel for NoiselessChannel {
    fn transmit(&mut self, codeword: u8) -> u8 {
        codeword
    }
}

/// A channel that flips at most one bit per codeword.
#[derive(Debug, Clone)]
pub struct BitFlipChannel<R: Rng> {
    rng: R,
    flip: Bernoulli,
    probability: f64,
    /// Number of codewords that have been corrupted so far
    flips: u64,
}

impl<R: Rng> BitFlipChannel<R> {
    /// Creates a channel that corrupts each codeword with `probability`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `probability` is NaN or outside `[0, 1]`.
    pub fn new(probability: f64, rng: R) -> Result<Self> {
        let flip = Bernoulli::new(probability).map_err(|_| {
            Error::InvalidInput(format!(
                "flip probability {} must lie within [0, 1]",
                probability
            ))
        })?;
        Ok(BitFlipChannel {
            rng,
            flip,
            probability,
            flips: 0,
        })
    }

    /// Creates a channel with the default 1/10 flip probability.
    pub fn with_default_probability(rng: R) -> Self {
        // We know this is valid, no need to handle Result
        Self::new(DEFAULT_FLIP_PROBABILITY, rng).unwrap()
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Number of codewords corrupted so far.
    pub fn flips(&self) -> u64 {
        self.flips
    }

    /// Hands the RNG back, e.g. to continue a seeded sequence elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> Channel for BitFlipChannel<R> {
    fn transmit(&mut self, codeword: u8) -> u8 {
        if !self.rng.sample(self.flip) {
            return codeword;
        }
        self.flips += 1;
        flip_bit(codeword, random_position(&mut self.rng))
    }
}

/// Uniformly chosen bit position in 1..=8.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> BitPosition {
    BitPosition::new_unchecked(rng.gen_range(1..=CODEWORD_BITS))
}

/// Corrupts a single codeword: with `probability`, flips one uniformly
/// chosen bit; otherwise returns it unchanged.
///
/// Probabilities outside `[0, 1]` are clamped.
pub fn corrupt<R: Rng + ?Sized>(codeword: u8, probability: f64, rng: &mut R) -> u8 {
    let probability = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    if rng.gen_bool(probability) {
        flip_bit(codeword, random_position(rng))
    } else {
        codeword
    }
}
