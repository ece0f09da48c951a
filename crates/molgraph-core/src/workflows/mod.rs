//! # Workflows Module
//!
//! The public, user-facing API: complete operations that tie the parser and
//! the bonding engine together. Front-ends (CLI, browser bindings) call
//! these instead of wiring the layers themselves.

pub mod load;
