//! Primitive types
//!
//! This module defines low-level fixed-size value types built on top of the
//! `codec` module.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics and predictable behavior. They are intentionally minimal and
//! do not attempt to replicate full big-integer libraries: arithmetic is
//! closed over the type's width and wraps silently, which is the contract
//! pointer-level tooling relies on.
//!
//! Current primitives include:
//! - `Int64`: a fixed-size 64-bit integer with two's-complement arithmetic
//!   and IEEE-754 bit-pattern reinterpretation

mod int64;

/// Fixed-size 64-bit integer primitive.
///
/// Re-exported as the primary integer type of this crate.
pub use int64::{Int64, Int64Error};
