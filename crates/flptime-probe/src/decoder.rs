//! Payload to minutes conversion
//!
//! The stored value grows exponentially with time spent. The fit
//! `minutes = SCALE * e^(EXPONENT * (raw - BIAS))` has R² = 0.9992 for
//! projects above ten minutes; shorter projects are only roughly right.

use tracing::trace;

use crate::constants::{BIAS, EXPONENT, MAX_MINUTES, SCALE};
use crate::error::DecodeOverflow;
use crate::types::PayloadBytes;

/// Raw value with the bias removed. Zero or negative means no time logged.
pub fn biased(raw: u32) -> i64 {
    i64::from(raw) - BIAS
}

/// Decode a payload into whole minutes.
pub fn decode_minutes(payload: &PayloadBytes) -> Result<u32, DecodeOverflow> {
    minutes_from_raw(payload.raw_value())
}

/// Decode an already reversed raw value into whole minutes.
pub fn minutes_from_raw(raw: u32) -> Result<u32, DecodeOverflow> {
    let biased = biased(raw);
    if biased <= 0 {
        return Ok(0);
    }

    let minutes = (SCALE * (EXPONENT * biased as f64).exp()).floor();
    trace!(raw, biased, minutes, "Decoded raw value");

    if !minutes.is_finite() || minutes > f64::from(MAX_MINUTES) {
        return Err(DecodeOverflow {
            hex: format!("{:06x}", raw),
        });
    }
    Ok(minutes as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_for_biased(x: u32) -> PayloadBytes {
        let raw = BIAS as u32 + x;
        let [_, a, b, c] = raw.to_be_bytes();
        PayloadBytes::new([c, b, a])
    }

    #[test]
    fn test_zero_payload_is_zero_minutes() {
        let payload = PayloadBytes::new([0x00, 0x00, 0x00]);
        assert_eq!(payload.raw_value(), 0);
        assert_eq!(biased(payload.raw_value()), -4_145_152);
        assert_eq!(decode_minutes(&payload).unwrap(), 0);
    }

    #[test]
    fn test_bias_boundary() {
        assert_eq!(minutes_from_raw(BIAS as u32).unwrap(), 0);
        assert_eq!(minutes_from_raw(BIAS as u32 - 1).unwrap(), 0);
        // 0.698 * e^0.00017 still floors to zero
        assert_eq!(minutes_from_raw(BIAS as u32 + 1).unwrap(), 0);
    }

    #[test]
    fn test_known_value() {
        let payload = payload_for_biased(10_000);
        assert_eq!(payload.as_bytes(), &[0x10, 0x67, 0x3F]);
        assert_eq!(payload.raw_hex(), "3f6710");
        assert_eq!(decode_minutes(&payload).unwrap(), 3);
    }

    #[test]
    fn test_calibrated_range() {
        assert_eq!(decode_minutes(&payload_for_biased(15_000)).unwrap(), 8);
        assert_eq!(decode_minutes(&payload_for_biased(20_000)).unwrap(), 20);
        assert_eq!(decode_minutes(&payload_for_biased(25_000)).unwrap(), 48);
        assert_eq!(decode_minutes(&payload_for_biased(30_000)).unwrap(), 113);
        assert_eq!(decode_minutes(&payload_for_biased(40_000)).unwrap(), 621);
    }

    #[test]
    fn test_matches_formula() {
        for x in [500u32, 7_500, 12_345, 33_333, 60_000] {
            let expected = (0.698032696183935 * (0.00016979447312 * f64::from(x)).exp()).floor();
            assert_eq!(
                decode_minutes(&payload_for_biased(x)).unwrap(),
                expected as u32
            );
        }
    }

    #[test]
    fn test_large_but_representable() {
        assert_eq!(
            decode_minutes(&payload_for_biased(128_000)).unwrap(),
            1_917_337_275
        );
    }

    #[test]
    fn test_overflow_boundary() {
        assert_eq!(
            decode_minutes(&payload_for_biased(128_667)).unwrap(),
            2_147_255_041
        );
        let err = decode_minutes(&payload_for_biased(128_668)).unwrap_err();
        assert_eq!(err.hex, "41369c");
    }

    #[test]
    fn test_overflow_reports_hex() {
        let err = decode_minutes(&payload_for_biased(130_000)).unwrap_err();
        assert_eq!(err.hex, "413bd0");
        assert_eq!(
            err.to_string(),
            "Time byte value was too large. Value = 413bd0"
        );
    }

    #[test]
    fn test_max_payload_overflows() {
        let err = decode_minutes(&PayloadBytes::new([0xFF, 0xFF, 0xFF])).unwrap_err();
        assert_eq!(err.hex, "ffffff");
    }

    #[test]
    fn test_decode_is_idempotent() {
        let payload = payload_for_biased(27_182);
        assert_eq!(decode_minutes(&payload), decode_minutes(&payload));
    }
}
