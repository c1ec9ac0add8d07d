//! # flptime-probe
//!
//! Reads the "time spent" statistic that FL Studio stores, undocumented,
//! inside its `.flp` project files.
//!
//! The statistic is found in two steps:
//!
//! - **Locate**: scan the first 2048 bytes of the file for the marker record
//!   `0xED 0x10` and take the 3 bytes at offsets `+15..=+17`.
//! - **Decode**: reverse those bytes, read them as an integer and run it
//!   through a calibrated exponential model to get whole minutes.
//!
//! ## Example
//!
//! ```no_run
//! use flptime_probe::{probe_file, Minutes};
//!
//! let minutes = probe_file("song.flp").unwrap();
//! println!("Logged {}", Minutes::from(minutes));
//! ```

pub mod constants;
pub mod decoder;
pub mod error;
pub mod format;
pub mod locator;
pub mod types;

pub use decoder::{decode_minutes, minutes_from_raw};
pub use error::{DecodeOverflow, NotFoundReason, ProbeError, RecordNotFound};
pub use format::format_minutes;
pub use locator::{extract_payload, locate_marker, read_block, read_payload, read_payload_from_path};
pub use types::*;

use std::io::Read;
use std::path::Path;

/// Probe a project file and return the minutes spent on it
///
/// Reads only the first block of the file; the handle is released before
/// returning.
///
/// # Example
///
/// ```no_run
/// let minutes = flptime_probe::probe_file("/projects/beat.flp").unwrap();
/// println!("{}", flptime_probe::format_minutes(minutes.into()));
/// ```
pub fn probe_file<P: AsRef<Path>>(path: P) -> Result<u32, ProbeError> {
    let payload = read_payload_from_path(path.as_ref())?;
    Ok(decode_minutes(&payload)?)
}

/// Probe project data from any reader
pub fn probe_reader<R: Read>(source: R) -> Result<u32, ProbeError> {
    let payload = read_payload(source)?;
    Ok(decode_minutes(&payload)?)
}

/// Probe project data that is already in memory
///
/// Only the first [`constants::BLOCK_SIZE`] bytes are considered.
pub fn probe_bytes(data: &[u8]) -> Result<u32, ProbeError> {
    probe_reader(data)
}

/// Run the pipeline on a block and report every intermediate value.
///
/// A decode overflow is not an error here; it shows up as
/// `minutes: None`.
pub fn inspect_block(block: &[u8]) -> Result<Inspection, RecordNotFound> {
    let marker_offset = locate_marker(block)?;
    let payload = locator::payload_at(block, marker_offset)?;
    let raw_value = payload.raw_value();

    Ok(Inspection {
        marker_offset,
        payload,
        raw_hex: payload.raw_hex(),
        raw_value,
        biased: decoder::biased(raw_value),
        minutes: minutes_from_raw(raw_value).ok(),
    })
}

/// Read the first block of a file and inspect it
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<Inspection, ProbeError> {
    let block = locator::read_block_from_path(path.as_ref())?;
    Ok(inspect_block(&block)?)
}
