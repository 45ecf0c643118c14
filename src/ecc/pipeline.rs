//! Decode orchestration: channel, correction and byte reassembly.
//!
//! The encoded stream is consumed two codewords at a time. Each codeword is
//! passed through the [`Channel`] and then
//! [`decode_correct`](crate::ecc::decoder::decode_correct), and the two
//! recovered nibbles are joined into one output byte. Every codeword that
//! was not clean is handed to an [`EventSink`] as a [`CodewordEvent`].
//!
//! A stream with an odd number of codewords is rejected before anything is
//! decoded.

use crate::ecc::bits::reassemble;
use crate::ecc::channel::Channel;
use crate::ecc::codeword::extract_nibble;
use crate::ecc::decoder::{check_and_correct, Correction};
use crate::ecc::Result;
use crate::error::Error;
use log::{info, warn};
use std::fmt::{Display, Formatter};

/// A non-clean decoding outcome for one codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordEvent {
    /// 0-based index of the codeword in the encoded stream
    pub index: usize,
    /// Codeword as delivered by the channel
    pub received: u8,
    /// Codeword after correction (equal to `received` when uncorrectable)
    pub corrected: u8,
    pub correction: Correction,
}

impl Display for CodewordEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.correction {
            Correction::CorrectedAt(position) => {
                write!(f, "Error corrected at bit {}.", position)
            }
            Correction::Uncorrectable => write!(f, "Two bits were flipped; can't correct!"),
            Correction::Clean => write!(f, "Codeword {} is clean.", self.index),
        }
    }
}

/// Receives decoding events as they happen.
pub trait EventSink {
    fn on_event(&mut self, event: &CodewordEvent);
}

/// Collects every event.
impl EventSink for Vec<CodewordEvent> {
    fn on_event(&mut self, event: &CodewordEvent) {
        self.push(*event);
    }
}

/// Discards every event.
impl EventSink for () {
    fn on_event(&mut self, _event: &CodewordEvent) {}
}

/// Renders events through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &CodewordEvent) {
        match event.correction {
            Correction::Uncorrectable => warn!(
                "codeword {} ({:#010b}): {}",
                event.index, event.received, event
            ),
            _ => info!(
                "codeword {} ({:#010b} -> {:#010b}): {}",
                event.index, event.received, event.corrected, event
            ),
        }
    }
}

/// Outcome counts for a decode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeStats {
    pub codewords: usize,
    pub clean: usize,
    pub corrected: usize,
    pub uncorrectable: usize,
}

impl DecodeStats {
    fn record(&mut self, correction: Correction) {
        self.codewords += 1;
        match correction {
            Correction::Clean => self.clean += 1,
            Correction::CorrectedAt(_) => self.corrected += 1,
            Correction::Uncorrectable => self.uncorrectable += 1,
        }
    }
}

impl Display for DecodeStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} codewords: {} clean, {} corrected, {} uncorrectable",
            self.codewords, self.clean, self.corrected, self.uncorrectable
        )
    }
}

/// Everything a decode run produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeReport {
    pub bytes: Vec<u8>,
    pub events: Vec<CodewordEvent>,
    pub stats: DecodeStats,
}

/// Fails with [`Error::OddCodewordCount`] unless `encoded` holds whole pairs.
pub fn validate_encoded(encoded: &[u8]) -> Result<()> {
    if encoded.len() % 2 != 0 {
        return Err(Error::OddCodewordCount { len: encoded.len() });
    }
    Ok(())
}

/// Decodes an encoded stream through `channel`, reporting to `sink`.
///
/// # Errors
///
/// Returns [`Error::OddCodewordCount`] if the stream length is odd. No bytes
/// are decoded in that case.
pub fn decode_stream<C, S>(
    encoded: &[u8],
    channel: &mut C,
    sink: &mut S,
) -> Result<(Vec<u8>, DecodeStats)>
where
    C: Channel + ?Sized,
    S: EventSink + ?Sized,
{
    validate_encoded(encoded)?;

    let mut decoded = Vec::with_capacity(encoded.len() / 2);
    let mut stats = DecodeStats::default();

    let mut receive = |index: usize, codeword: u8| {
        let received = channel.transmit(codeword);
        let (corrected, correction) = check_and_correct(received);
        stats.record(correction);
        if !correction.is_clean() {
            sink.on_event(&CodewordEvent {
                index,
                received,
                corrected,
                correction,
            });
        }
        extract_nibble(corrected)
    };

    for (pair_idx, pair) in encoded.chunks_exact(2).enumerate() {
        let high = receive(pair_idx * 2, pair[0]);
        let low = receive(pair_idx * 2 + 1, pair[1]);
        decoded.push(reassemble(high, low));
    }

    Ok((decoded, stats))
}

/// Like [`decode_stream`], collecting events into a [`DecodeReport`].
pub fn decode_stream_collect<C>(encoded: &[u8], channel: &mut C) -> Result<DecodeReport>
where
    C: Channel + ?Sized,
{
    let mut events = Vec::new();
    let (bytes, stats) = decode_stream(encoded, channel, &mut events)?;
    Ok(DecodeReport {
        bytes,
        events,
        stats,
    })
}
