//! Byte and hexadecimal codec
//!
//! This module defines stateless conversions between byte sequences,
//! hexadecimal text, and fixed-width numeric representations.
//!
//! The functions here are pure: they allocate their own output, never touch
//! shared buffers, and are safe to call from any number of threads. Each
//! submodule covers one concern:
//! - `hex`: byte sequences to and from hexadecimal text
//! - `pack`: fixed-width reinterpretation between bytes, integers, and
//!   IEEE-754 doubles
//!
//! Byte order is little-endian everywhere in `pack`; `hex` preserves the
//! order of its input.

mod hex;
mod pack;

pub use hex::{hex_byte, hexdump, hexlify, unhexlify};
pub use pack::{pack_f64, pack_u8, pack_u32, unpack_f64, unpack_u8, unpack_u32};

pub(crate) use pack::{f64_from_le, f64_to_le};

/// Errors that may occur while encoding or decoding byte sequences.
#[derive(Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Hexadecimal text is malformed: odd length, or a character outside
    /// `[0-9a-fA-F]`.
    InvalidFormat,

    /// A byte buffer does not have the exact length required by the
    /// requested width.
    SizeMismatch,
}
