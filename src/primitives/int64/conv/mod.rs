//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `Int64` primitive and native representations.
//!
//! Each submodule is responsible for one input kind, following these
//! principles:
//! - explicit little-endian storage semantics
//! - no implicit truncation
//! - fallible conversions when narrowing may lose information
//! - simple, auditable implementations
//!
//! Together with `Int64::from_double` these impls form the full set of
//! constructors: native integers, hexadecimal text, byte sequences, other
//! `Int64` values (via `Copy`), and raw double bit patterns. There is one
//! explicit entry point per input kind; nothing is inferred at runtime.

mod str;
mod u8;
mod u32;
mod u64;
