//! 64-bit integer primitive
//!
//! This module defines a fixed-size 64-bit integer type (`Int64`) storing
//! exactly eight bytes in little-endian order.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - pointer and address arithmetic
//! - bit-exact reinterpretation of IEEE-754 doubles
//! - hexadecimal rendering of raw 64-bit values
//!
//! The internal representation is little-endian, which matches the memory
//! layout of the targets this type is used to describe; all hexadecimal
//! text is big-endian for human readability.

use crate::codec::{f64_from_le, f64_to_le, hexlify};

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// Fixed-size 64-bit integer.
///
/// The value is stored as 8 bytes in **little-endian** order. Arithmetic is
/// closed over the eight-byte domain and wraps modulo 2^64; overflow is
/// never signaled.
///
/// This type intentionally exposes only minimal functionality, favoring
/// explicit byte-level semantics over completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Int64(pub(crate) [u8; 8]);

/// Errors raised when an `Int64` bit pattern cannot be read under a
/// requested numeric interpretation.
#[derive(Debug, PartialEq, Eq)]
pub enum Int64Error {
    /// The bit pattern has no value under the requested interpretation:
    /// a NaN encoding for [`Int64::as_double`], or a value outside the
    /// boxable tag range for [`Int64::as_js_value`].
    UnrepresentableValue,
}

impl Int64 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 8]);

    /// The value one.
    pub const ONE: Self = Self::one_le();

    /// The maximum representable value (2⁶⁴ − 1).
    pub const MAX: Self = Self([255u8; 8]);

    /// Returns the value one encoded in little-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn one_le() -> Self {
        let mut out = [0u8; 8];
        out[0] = 1;
        Int64(out)
    }

    /// Returns the low 32 bits of the value.
    pub fn lower(&self) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.0[..4]);

        u32::from_le_bytes(word)
    }

    /// Returns the high 32 bits of the value.
    pub fn upper(&self) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.0[4..]);

        u32::from_le_bytes(word)
    }

    /// Returns a copy of the underlying bytes, least significant first.
    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.0
    }

    /// Returns the byte at the given index, where index 0 is the least
    /// significant byte.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in `0..8`.
    pub fn byte_at(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// Constructs an `Int64` with the same bit representation as the given
    /// double.
    ///
    /// Every double has a defined bit pattern, NaNs included, so this
    /// conversion never fails.
    pub fn from_double(d: f64) -> Self {
        Int64(f64_to_le(d))
    }

    /// Returns a double with the same underlying bit representation.
    ///
    /// # Errors
    ///
    /// Returns [`Int64Error::UnrepresentableValue`] if the bit pattern is a
    /// NaN encoding. The value is refused outright rather than returned as
    /// a NaN, since NaN payload bits are not preserved reliably by
    /// float-typed channels.
    pub fn as_double(&self) -> Result<f64, Int64Error> {
        if self.0[7] == 0xff && (self.0[6] == 0xff || self.0[6] == 0xfe) {
            return Err(Int64Error::UnrepresentableValue);
        }

        Ok(f64_from_le(self.0))
    }

    /// Returns the double that a NaN-boxing engine would use to represent
    /// this bit pattern as a tagged value.
    ///
    /// JavaScriptCore stores tagged values as doubles offset by 2^48, so
    /// this computes `self - 2^48` into a temporary and reinterprets the
    /// result; the receiver is left untouched. The encoding is specific to
    /// that one engine and offered as an extension, not a portable
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns [`Int64Error::UnrepresentableValue`] if the value lies
    /// outside `[0x0001000000000000, 0xffff000000000000)`, the range the
    /// encoding can express.
    pub fn as_js_value(&self) -> Result<f64, Int64Error> {
        if (self.0[7] == 0x00 && self.0[6] == 0x00) || (self.0[7] == 0xff && self.0[6] == 0xff) {
            return Err(Int64Error::UnrepresentableValue);
        }

        let unboxed = *self - Int64::from(0x1_0000_0000_0000u64);

        Ok(f64_from_le(unboxed.0))
    }
}

impl Display for Int64 {
    /// Formats the value as `0x` followed by 16 lowercase hexadecimal
    /// characters in big-endian order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut be = self.0;
        be.reverse();

        write!(f, "0x{}", hexlify(&be))
    }
}

impl Ord for Int64 {
    /// Compares numerically, most significant byte first.
    ///
    /// The derived ordering would compare the little-endian storage bytes
    /// in the wrong direction, so this is implemented by hand.
    fn cmp(&self, other: &Self) -> Ordering {
        u64::from(*self).cmp(&u64::from(*other))
    }
}

impl PartialOrd for Int64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
