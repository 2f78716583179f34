//! Conversions between `Int64` and 64-bit integer representations
//!
//! These conversions are lossless in both directions: `Int64` stores
//! exactly 64 bits, so a native `u64` round-trips bit for bit. Signed
//! values keep their two's-complement bit pattern, which is exactly the
//! representation `Int64` arithmetic operates on.

use crate::primitives::Int64;

/// Converts an `Int64` into the `u64` with the same bit pattern.
impl From<Int64> for u64 {
    fn from(value: Int64) -> Self {
        u64::from_le_bytes(value.0)
    }
}

/// Converts a `u64` into an `Int64` with the same bit pattern.
impl From<u64> for Int64 {
    fn from(value: u64) -> Self {
        Int64(value.to_le_bytes())
    }
}

/// Converts an `i64` into an `Int64` holding its two's-complement bit
/// pattern.
///
/// Negative values map to the upper half of the unsigned range, so for
/// example `-1` becomes `0xffffffffffffffff`.
impl From<i64> for Int64 {
    fn from(value: i64) -> Self {
        Int64((value as u64).to_le_bytes())
    }
}
