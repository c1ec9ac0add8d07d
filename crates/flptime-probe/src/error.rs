//! Error types for flptime-probe

use std::fmt;

/// Why the marker record could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
pub enum NotFoundReason {
    /// The block contains no marker byte at all.
    NoEntryPointByte,
    /// Marker bytes exist but none is followed by the type byte.
    NoValidEntryPoint,
    /// The marker was found but the block ends before the payload does.
    TruncatedPayload,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::NoEntryPointByte => {
                write!(f, "Failed to find time data entry point in first block.")
            }
            NotFoundReason::NoValidEntryPoint => write!(f, "Failed to find time data entry point."),
            NotFoundReason::TruncatedPayload => {
                write!(f, "Time data entry point is too close to the end of the block.")
            }
        }
    }
}

/// The marker record is absent or unusable in the scanned block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct RecordNotFound {
    pub reason: NotFoundReason,
}

impl From<NotFoundReason> for RecordNotFound {
    fn from(reason: NotFoundReason) -> Self {
        Self { reason }
    }
}

/// The decoded minute count does not fit the supported range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Time byte value was too large. Value = {hex}")]
pub struct DecodeOverflow {
    /// Hex rendering of the byte-reversed payload.
    pub hex: String,
}

/// Errors that can occur while probing a project file
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Marker record missing or malformed
    #[error(transparent)]
    RecordNotFound(#[from] RecordNotFound),

    /// Payload decoded outside the supported range
    #[error(transparent)]
    DecodeOverflow(#[from] DecodeOverflow),
}
