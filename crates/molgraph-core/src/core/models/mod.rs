//! # Core Models Module
//!
//! Data structures exchanged between the parser, the bonding engine, and
//! external consumers.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom records with serial, element, and coordinates
//! - [`bond`] - Unordered atom pairs with their interatomic distance
//! - [`molecule`] - The parse output ([`molecule::Molecule`]) and the bonded
//!   graph handed to renderers ([`molecule::MoleculeGraph`])
//!
//! All models are plain value data: created once per parse call, immutable
//! afterward, and owned by the caller for the remainder of the session.

pub mod atom;
pub mod bond;
pub mod molecule;
