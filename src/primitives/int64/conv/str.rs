//! Construction of `Int64` from hexadecimal text.

use crate::codec::{CodecError, unhexlify};
use crate::primitives::Int64;

use std::str::FromStr;

/// Parses an `Int64` from big-endian hexadecimal text.
///
/// An optional `0x` prefix is stripped, and odd-length input is left-padded
/// with a single zero nibble. The digits are read in big-endian order and
/// stored reversed; shorter input fills only the low bytes, leaving the
/// rest zero.
///
/// # Errors
///
/// Returns [`CodecError::InvalidFormat`] for non-hexadecimal characters and
/// [`CodecError::SizeMismatch`] if the input encodes more than eight bytes.
impl FromStr for Int64 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);

        let padded;
        let digits = if digits.len() % 2 == 1 {
            padded = format!("0{digits}");
            &padded
        } else {
            digits
        };

        let big_endian = unhexlify(digits)?;
        if big_endian.len() > 8 {
            return Err(CodecError::SizeMismatch);
        }

        let mut out = [0u8; 8];
        for (o, &b) in out.iter_mut().zip(big_endian.iter().rev()) {
            *o = b;
        }

        Ok(Int64(out))
    }
}
