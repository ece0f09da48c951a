use super::atom::Atom;
use super::bond::Bond;
use serde::Serialize;
use std::collections::HashMap;

/// The raw result of parsing a structure file: atoms in file order plus the
/// explicit connectivity table read from CONECT records.
///
/// Atoms with duplicated serials are kept as-is (the parser never
/// deduplicates); serial-based lookups through [`serial_index`] resolve to
/// the last atom carrying the serial.
///
/// [`serial_index`]: Molecule::serial_index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    /// Atom records in the order they appeared in the file.
    pub atoms: Vec<Atom>,
    /// Explicit connectivity: source serial to the serials listed on its
    /// CONECT record. May be asymmetric; consumers symmetrize.
    pub connections: HashMap<usize, Vec<usize>>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether the file carried any CONECT records. When true, bond building
    /// uses the explicit table exclusively and ignores geometry.
    pub fn has_explicit_connectivity(&self) -> bool {
        !self.connections.is_empty()
    }

    /// Builds a serial-to-index lookup over the atom sequence.
    ///
    /// Later atoms win when a serial is duplicated, so resolution through
    /// this index is last-one-wins.
    pub fn serial_index(&self) -> HashMap<usize, usize> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (atom.serial, index))
            .collect()
    }
}

/// The bonded graph handed to renderers: atoms plus the deduplicated bond
/// set derived by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoleculeGraph {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl MoleculeGraph {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }
}
