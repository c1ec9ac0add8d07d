//! Fixed layout and calibration constants.
//!
//! None of these come from a published schema. The marker and offsets were
//! found by comparing project files byte by byte, and the decode coefficients
//! are a regression fit against projects with known time spent.

/// Number of bytes read from the start of a project file.
///
/// Only this first block is ever scanned for the marker record.
pub const BLOCK_SIZE: usize = 2048;

/// First byte of the marker record (237).
pub const MARKER_BYTE: u8 = 0xED;

/// Second byte of the marker record (16).
pub const TYPE_BYTE: u8 = 0x10;

/// Offset of the first payload byte relative to the marker position.
pub const PAYLOAD_OFFSET: usize = 15;

/// Payload length in bytes.
pub const PAYLOAD_LEN: usize = 3;

/// Subtracted from the raw value so that new projects decode to zero.
pub const BIAS: i64 = 4_145_152;

/// Scale coefficient of the exponential fit.
pub const SCALE: f64 = 0.698032696183935;

/// Exponent coefficient of the exponential fit.
pub const EXPONENT: f64 = 0.00016979447312;

/// Largest decodable minute count. Project totals were stored as signed
/// 32-bit integers, anything above this wrapped negative.
pub const MAX_MINUTES: u32 = i32::MAX as u32;
