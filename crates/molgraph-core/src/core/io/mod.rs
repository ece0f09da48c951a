//! Reading molecular structure files.
//!
//! The parser is deliberately tolerant: records that fail to parse are
//! skipped, never fatal, and non-structure text simply yields an empty
//! molecule. Callers that need to reject such input loudly use the
//! validation collaborator in [`crate::workflows::load`].

pub mod pdb;
pub mod traits;
