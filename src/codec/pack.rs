//! Fixed-width reinterpretation between bytes and native values.
//!
//! Each supported width has its own explicit pack/unpack pair instead of a
//! single width-dispatching entry point, so the type of every conversion is
//! visible at the call site.
//!
//! All byte representations are little-endian. The `f64` pair operates on
//! the raw IEEE-754 bit pattern, never on the numeric value; every float
//! reinterpretation in the crate goes through this file.

use crate::codec::CodecError;

/// Packs a byte into its one-byte representation.
pub fn pack_u8(value: u8) -> [u8; 1] {
    [value]
}

/// Packs a 32-bit integer into its little-endian byte representation.
pub fn pack_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Packs a double's raw IEEE-754 bit pattern into little-endian bytes.
///
/// Every double has a defined bit pattern, NaNs included, so this never
/// fails and round-trips bit-exactly through [`unpack_f64`].
pub fn pack_f64(value: f64) -> [u8; 8] {
    f64_to_le(value)
}

/// Reads a one-byte buffer back as a byte.
///
/// # Errors
///
/// Returns [`CodecError::SizeMismatch`] unless `bytes.len() == 1`.
pub fn unpack_u8(bytes: &[u8]) -> Result<u8, CodecError> {
    match bytes {
        &[b] => Ok(b),
        _ => Err(CodecError::SizeMismatch),
    }
}

/// Reads a little-endian four-byte buffer back as a 32-bit integer.
///
/// # Errors
///
/// Returns [`CodecError::SizeMismatch`] unless `bytes.len() == 4`.
pub fn unpack_u32(bytes: &[u8]) -> Result<u32, CodecError> {
    let raw: [u8; 4] = bytes.try_into().map_err(|_| CodecError::SizeMismatch)?;

    Ok(u32::from_le_bytes(raw))
}

/// Reinterprets a little-endian eight-byte buffer as a double's bit
/// pattern.
///
/// # Errors
///
/// Returns [`CodecError::SizeMismatch`] unless `bytes.len() == 8`.
pub fn unpack_f64(bytes: &[u8]) -> Result<f64, CodecError> {
    let raw: [u8; 8] = bytes.try_into().map_err(|_| CodecError::SizeMismatch)?;

    Ok(f64_from_le(raw))
}

/// Reinterprets exactly eight little-endian bytes as a double.
pub(crate) fn f64_from_le(bytes: [u8; 8]) -> f64 {
    f64::from_bits(u64::from_le_bytes(bytes))
}

/// Reinterprets a double as exactly eight little-endian bytes.
pub(crate) fn f64_to_le(value: f64) -> [u8; 8] {
    value.to_bits().to_le_bytes()
}
