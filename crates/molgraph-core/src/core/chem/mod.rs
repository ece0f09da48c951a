//! Static chemical lookup tables.
//!
//! Everything here is compile-time data: no configuration, no I/O. The
//! tables drive element-symbol disambiguation in the parser and the
//! radius/color lookups consumers use to draw atoms.

pub mod elements;
