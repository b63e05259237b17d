//! Map block size limits to prevent memory exhaustion during loading
//!
//! The persisted header carries raw 32 bit dimensions, a corrupt file could
//! otherwise request gigabytes of cell storage. The cap applies to the total
//! payload so long, narrow grids stay loadable.

use crate::row_bytes;

/// Maximum cell payload in bytes (512 MiB)
pub const MAX_PAYLOAD_BYTES: u64 = 512 * 1024 * 1024;

/// Payload size in bytes, computed without overflow for any `i32` dimensions
#[inline]
pub fn payload_bytes(width: i32, height: i32) -> u64 {
    row_bytes(width) as u64 * u64::from(height.max(0).unsigned_abs())
}

/// Check if dimensions are positive and the payload stays below [`MAX_PAYLOAD_BYTES`]
#[inline]
pub fn is_within_limits(width: i32, height: i32) -> bool {
    width > 0 && height > 0 && payload_bytes(width, height) <= MAX_PAYLOAD_BYTES
}

/// Raise a single dimension to at least `min`
#[inline]
pub fn clamp_dimension(value: i32, min: i32) -> i32 {
    value.max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert!(is_within_limits(1, 1));
        assert!(is_within_limits(70_000, 1));
        assert!(is_within_limits(1, 100_000_000));
        assert!(!is_within_limits(0, 10));
        assert!(!is_within_limits(10, -1));
        assert!(!is_within_limits(i32::MAX, i32::MAX));
        assert!(!is_within_limits(65_536, 65_536));
    }

    #[test]
    fn test_payload_bytes() {
        assert_eq!(payload_bytes(70_000, 1), 8751);
        assert_eq!(payload_bytes(i32::MAX, i32::MAX), (i32::MAX as u64 / 8 + 1) * i32::MAX as u64);
    }

    #[test]
    fn test_clamp_dimension() {
        assert_eq!(clamp_dimension(3, 16), 16);
        assert_eq!(clamp_dimension(300, 16), 300);
        assert_eq!(clamp_dimension(i32::MAX, 16), i32::MAX);
    }
}
