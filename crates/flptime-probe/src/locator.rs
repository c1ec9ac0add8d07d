//! Marker record location and payload extraction

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::constants::{BLOCK_SIZE, MARKER_BYTE, PAYLOAD_LEN, PAYLOAD_OFFSET, TYPE_BYTE};
use crate::error::{NotFoundReason, ProbeError, RecordNotFound};
use crate::types::PayloadBytes;

/// Read the first block of a source.
///
/// Returns fewer than [`BLOCK_SIZE`] bytes only when the source is shorter.
/// Nothing past the first block is read.
pub fn read_block<R: Read>(source: R) -> io::Result<Vec<u8>> {
    let mut block = Vec::with_capacity(BLOCK_SIZE);
    source.take(BLOCK_SIZE as u64).read_to_end(&mut block)?;
    Ok(block)
}

/// Find the position of the first marker byte that is directly followed by
/// the type byte.
pub fn locate_marker(block: &[u8]) -> Result<usize, RecordNotFound> {
    if !block.contains(&MARKER_BYTE) {
        return Err(NotFoundReason::NoEntryPointByte.into());
    }

    block
        .windows(2)
        .position(|pair| *pair == [MARKER_BYTE, TYPE_BYTE])
        .ok_or_else(|| NotFoundReason::NoValidEntryPoint.into())
}

/// Locate the marker record and return the payload bytes that follow it.
pub fn extract_payload(block: &[u8]) -> Result<PayloadBytes, RecordNotFound> {
    let marker = locate_marker(block)?;
    payload_at(block, marker)
}

/// Read the payload belonging to the marker at `marker`.
pub(crate) fn payload_at(block: &[u8], marker: usize) -> Result<PayloadBytes, RecordNotFound> {
    let start = marker + PAYLOAD_OFFSET;
    let bytes: [u8; PAYLOAD_LEN] = block
        .get(start..start + PAYLOAD_LEN)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(RecordNotFound::from(NotFoundReason::TruncatedPayload))?;

    trace!(marker, payload = ?bytes, "Extracted payload");
    Ok(PayloadBytes::new(bytes))
}

/// Read the first block of `source` and extract the payload from it.
pub fn read_payload<R: Read>(source: R) -> Result<PayloadBytes, ProbeError> {
    let block = read_block(source)?;
    Ok(extract_payload(&block)?)
}

/// Open a project file, read its first block and extract the payload.
///
/// The file is closed before this returns, on success and on failure.
pub fn read_payload_from_path(path: &Path) -> Result<PayloadBytes, ProbeError> {
    let block = read_block_from_path(path)?;
    debug!(path = %path.display(), bytes = block.len(), "Read first block");
    Ok(extract_payload(&block)?)
}

/// Open a file and read its first block.
pub fn read_block_from_path(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    read_block(BufReader::new(file))
}
