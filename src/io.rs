//! File glue around the codec.
//!
//! The input file is encoded into an intermediate file, which is then read
//! back, sent through the channel codeword by codeword, decoded and written
//! to the output file. I/O failures are returned to the caller with the path
//! that caused them; nothing here retries.

use crate::config::SimConfig;
use crate::ecc::channel::Channel;
use crate::ecc::encoder::encode;
use crate::ecc::pipeline::{decode_stream, DecodeStats, EventSink};
use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

/// Encodes the file at `input` into `encoded_path`.
///
/// Returns the number of encoded bytes written.
pub fn encode_file(input: impl AsRef<Path>, encoded_path: impl AsRef<Path>) -> Result<usize> {
    let (input, encoded_path) = (input.as_ref(), encoded_path.as_ref());
    let data = read(input)?;
    let encoded = encode(&data);
    write(encoded_path, &encoded)?;
    info!(
        "encoded {} bytes from {} into {} codewords at {}",
        data.len(),
        input.display(),
        encoded.len(),
        encoded_path.display()
    );
    Ok(encoded.len())
}

/// Decodes `encoded_path` through `channel` into `decoded_path`.
///
/// A malformed (odd-length) encoded file fails before `decoded_path` is
/// touched.
pub fn decode_file<C, S>(
    encoded_path: impl AsRef<Path>,
    decoded_path: impl AsRef<Path>,
    channel: &mut C,
    sink: &mut S,
) -> Result<DecodeStats>
where
    C: Channel + ?Sized,
    S: EventSink + ?Sized,
{
    let (encoded_path, decoded_path) = (encoded_path.as_ref(), decoded_path.as_ref());
    let encoded = read(encoded_path)?;
    let (decoded, stats) = decode_stream(&encoded, channel, sink)?;
    write(decoded_path, &decoded)?;
    info!(
        "decoded {} bytes into {}: {}",
        decoded.len(),
        decoded_path.display(),
        stats
    );
    Ok(stats)
}

/// Runs the whole simulation for `input` as described by `config`.
pub fn run<S>(input: impl AsRef<Path>, config: &SimConfig, sink: &mut S) -> Result<DecodeStats>
where
    S: EventSink + ?Sized,
{
    let mut channel = config.channel()?;
    debug!(
        "flip probability {}, seed {:?}",
        config.flip_probability, config.seed
    );
    encode_file(input, &config.encoded_path)?;
    let stats = decode_file(&config.encoded_path, &config.decoded_path, &mut channel, sink)?;
    info!("channel flipped {} codewords", channel.flips());
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::channel::NoiselessChannel;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hamming84-io-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_encode_then_decode_files() {
        let (input, encoded, decoded) = (scratch("in"), scratch("enc"), scratch("dec"));
        fs::write(&input, b"Hamming").unwrap();

        assert_eq!(encode_file(&input, &encoded).unwrap(), 14);
        let stats = decode_file(&encoded, &decoded, &mut NoiselessChannel, &mut ()).unwrap();
        assert_eq!(stats.clean, 14);
        assert_eq!(fs::read(&decoded).unwrap(), b"Hamming");

        for path in [input, encoded, decoded] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn test_missing_input_reports_path() {
        let missing = scratch("does-not-exist");
        match encode_file(&missing, scratch("unused")) {
            Err(Error::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_odd_encoded_file_leaves_output_untouched() {
        let (encoded, decoded) = (scratch("odd-enc"), scratch("odd-dec"));
        fs::write(&encoded, [0u8, 30, 45]).unwrap();
        let _ = fs::remove_file(&decoded);

        let result = decode_file(&encoded, &decoded, &mut NoiselessChannel, &mut ());
        assert!(matches!(result, Err(Error::OddCodewordCount { len: 3 })));
        assert!(!decoded.exists());

        let _ = fs::remove_file(encoded);
    }
}
