//! 64-bit integer primitive
//!
//! This module defines the `Int64` type, a fixed-size 64-bit integer stored
//! as eight raw bytes in little-endian order.
//!
//! `Int64` is designed as a low-level, dependency-free primitive rather
//! than a numeric tower. It provides exact two's-complement arithmetic,
//! hexadecimal construction and rendering, and lossless bit-pattern
//! reinterpretation to and from IEEE-754 doubles.
//!
//! Typical use cases include:
//! - pointer and address arithmetic on raw memory dumps
//! - decoding values read back through float-typed channels
//! - building and checking tagged (NaN-boxed) value encodings
//!
//! The internal representation is little-endian and remains stable across
//! all operations and conversions; hexadecimal text is always big-endian.

mod conv;
mod core;
mod ops;

pub use core::{Int64, Int64Error};
