//! Run configuration for the encode / corrupt / decode simulation.

use crate::ecc::channel::{BitFlipChannel, DEFAULT_FLIP_PROBABILITY};
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::{Path, PathBuf};

/// File the encoded stream is written to unless overridden.
pub const DEFAULT_ENCODED_PATH: &str = "encoded.txt";

/// File the decoded stream is written to unless overridden.
pub const DEFAULT_DECODED_PATH: &str = "decoded.txt";

/// Parameters of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Probability that a codeword suffers a single bit flip
    pub flip_probability: f64,
    /// Seed for the channel RNG; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Where the intermediate encoded stream is materialized
    pub encoded_path: PathBuf,
    /// Where the decoded stream is written
    pub decoded_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            flip_probability: DEFAULT_FLIP_PROBABILITY,
            seed: None,
            encoded_path: PathBuf::from(DEFAULT_ENCODED_PATH),
            decoded_path: PathBuf::from(DEFAULT_DECODED_PATH),
        }
    }
}

impl SimConfig {
    pub fn with_flip_probability(mut self, probability: f64) -> Self {
        self.flip_probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_encoded_path(mut self, path: impl AsRef<Path>) -> Self {
        self.encoded_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_decoded_path(mut self, path: impl AsRef<Path>) -> Self {
        self.decoded_path = path.as_ref().to_path_buf();
        self
    }

    /// Checks that the configuration describes a runnable simulation.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(Error::InvalidInput(format!(
                "flip probability {} must lie within [0, 1]",
                self.flip_probability
            )));
        }
        if self.encoded_path == self.decoded_path {
            return Err(Error::InvalidInput(format!(
                "encoded and decoded streams both point at {}",
                self.encoded_path.display()
            )));
        }
        Ok(())
    }

    /// Channel RNG: seeded when a seed is configured, from entropy otherwise.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }

    /// Builds the noisy channel this configuration describes.
    pub fn channel(&self) -> Result<BitFlipChannel<ChaCha20Rng>> {
        self.validate()?;
        BitFlipChannel::new(self.flip_probability, self.rng())
    }
}
