//! # molgraph Core Library
//!
//! A library that turns molecular-structure text files (PDB format) into a 3D
//! graph of atoms and chemical bonds, ready for consumption by visualization
//! front-ends (desktop viewers, browser/AR renderers).
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models ([`Atom`],
//!   [`Bond`], [`Molecule`]), static chemical lookup tables (covalent radii,
//!   CPK display colors), the tolerant fixed-column PDB parser, and geometric
//!   queries over atom sets.
//!
//! - **[`engine`]: The Logic Core.** Implements bond inference: replay of
//!   explicit CONECT connectivity when present, or pairwise covalent-radius
//!   distance analysis otherwise, with configurable thresholds and progress
//!   reporting for long scans.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the parser and the bonding engine together into a single load
//!   operation and hosts the content-validation collaborator that callers use
//!   to reject non-structure input before parsing.
//!
//! Rendering, camera placement, and any device/session integration are
//! explicitly out of scope: consumers receive the atom/bond graph and map it
//! to spheres and cylinders themselves.
//!
//! [`Atom`]: crate::core::models::atom::Atom
//! [`Bond`]: crate::core::models::bond::Bond
//! [`Molecule`]: crate::core::models::molecule::Molecule

pub mod core;
pub mod engine;
pub mod workflows;
