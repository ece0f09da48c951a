use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading molecular structure formats.
///
/// Parsing itself is infallible by contract (malformed records degrade to
/// fewer atoms, not errors); the error type only surfaces I/O failures from
/// the reader- and path-based entry points.
pub trait StructureFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Parses structure text into a [`Molecule`].
    ///
    /// Never fails: unrecognized or malformed content yields an empty (or
    /// partial) molecule rather than an error.
    fn parse_str(text: &str) -> Molecule;

    /// Reads a molecule from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying source fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse_str(&text))
    }

    /// Reads a molecule from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Molecule, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
