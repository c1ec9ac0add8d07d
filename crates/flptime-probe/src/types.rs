//! Core types for the time-spent statistic

use std::fmt;

use crate::constants::PAYLOAD_LEN;
use crate::format::format_minutes;

/// The three payload bytes exactly as they are stored on disk.
///
/// The stored order is least significant byte first, so the bytes are
/// reversed before numeric interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct PayloadBytes([u8; PAYLOAD_LEN]);

impl PayloadBytes {
    pub fn new(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }

    /// Bytes in on-disk order.
    pub fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    /// Bytes in big-endian order.
    pub fn reversed(&self) -> [u8; PAYLOAD_LEN] {
        let [a, b, c] = self.0;
        [c, b, a]
    }

    /// Lowercase hex of the reversed bytes, two digits per byte.
    pub fn raw_hex(&self) -> String {
        hex::encode(self.reversed())
    }

    /// The reversed bytes read as an unsigned integer (0..=0xFFFFFF).
    pub fn raw_value(&self) -> u32 {
        let [a, b, c] = self.reversed();
        u32::from_be_bytes([0, a, b, c])
    }
}

impl From<[u8; PAYLOAD_LEN]> for PayloadBytes {
    fn from(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for PayloadBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{:02x} {:02x} {:02x}", a, b, c)
    }
}

/// A duration in whole minutes, displayed as hours and minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Minutes(pub u64);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.0))
    }
}

impl From<u32> for Minutes {
    fn from(minutes: u32) -> Self {
        Self(u64::from(minutes))
    }
}

impl From<u64> for Minutes {
    fn from(minutes: u64) -> Self {
        Self(minutes)
    }
}

impl std::iter::Sum for Minutes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

/// Everything the pipeline learns about one block, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Inspection {
    /// Position of the marker byte within the block
    pub marker_offset: usize,
    /// Payload in on-disk order
    pub payload: PayloadBytes,
    /// Hex of the reversed payload
    pub raw_hex: String,
    /// Reversed payload as an integer
    pub raw_value: u32,
    /// Raw value minus the bias
    pub biased: i64,
    /// Decoded minutes, `None` when the value overflows
    pub minutes: Option<u32>,
}
