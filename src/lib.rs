//! Fixed-width integer and binary codec utilities
//!
//! This crate provides the low-level byte-manipulation building blocks used
//! by memory-introspection and binary-analysis tooling: exact 64-bit integer
//! arithmetic over raw bytes, hexadecimal (de)serialization, and lossless
//! bit-pattern reinterpretation between integers and IEEE-754 doubles.
//!
//! The focus is on **clarity, predictability, and auditability**. All
//! components are dependency-free, explicit in their semantics, and safe to
//! reason about byte by byte.
//!
//! # Module overview
//!
//! - `codec`
//!   Stateless conversions between raw bytes, hexadecimal text, and
//!   fixed-width numeric representations. This module also hosts the single
//!   code path through which every float bit reinterpretation in the crate
//!   flows.
//!
//! - `primitives`
//!   Fixed-size, low-level value types, currently the 64-bit `Int64`. These
//!   types provide explicit two's-complement semantics and are built
//!   directly on top of the `codec` module.
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic paths
//! - Minimal and explicit APIs
//! - Stable, well-defined overflow and byte-order semantics
//! - No shared mutable state; every value owns its own bytes
//!
//! This crate is not a general big-integer library. Arithmetic is closed
//! over exactly 64 bits and wraps modulo 2^64 by design, which is the
//! behavior pointer- and bit-level tooling depends on.

pub mod codec;
pub mod primitives;
