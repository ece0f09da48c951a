use super::traits::StructureFile;
use crate::core::chem::elements::{canonical_symbol, is_two_letter_symbol};
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Returns the trimmed slice of `line` between byte columns `start..end`,
/// or the empty string when the range falls outside the line. Short lines
/// therefore read as missing fields instead of panicking.
fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coordinate(line: &str, start: usize, end: usize) -> f64 {
    slice_and_trim(line, start, end).parse().unwrap_or(f64::NAN)
}

/// Extracts the element symbol from an ATOM/HETATM line, canonicalized to
/// TitleCase.
///
/// Prefers the standard element field (columns 77-78). When that field is
/// empty, falls back to the atom-name field (columns 13-16): digits are
/// stripped and the leading characters are matched against the two-letter
/// symbol table to decide between a one- and two-letter element.
pub fn extract_element(line: &str) -> String {
    let standard = slice_and_trim(line, 76, 78);
    if !standard.is_empty() {
        return canonical_symbol(standard);
    }

    let name: String = slice_and_trim(line, 12, 16)
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();
    let upper = name.trim().to_ascii_uppercase();

    if let Some(prefix) = upper.get(..2) {
        if is_two_letter_symbol(prefix) {
            return canonical_symbol(prefix);
        }
    }
    upper.chars().next().map(String::from).unwrap_or_default()
}

/// Fixed-column PDB reader.
///
/// Only ATOM, HETATM, and CONECT records are consumed; every other record
/// type is ignored. CR, CRLF, and LF line endings are all accepted.
pub struct PdbFile;

impl PdbFile {
    /// Parses one ATOM/HETATM line, or `None` when the serial field is
    /// missing or non-numeric (the record is skipped, not the file).
    ///
    /// Coordinate fields that fail to parse become NaN and propagate to the
    /// caller, matching the contract that the parser never drops an atom for
    /// bad geometry.
    fn parse_atom_line(line: &str) -> Option<Atom> {
        let serial = slice_and_trim(line, 6, 11).parse::<usize>().ok()?;
        let x = parse_coordinate(line, 30, 38);
        let y = parse_coordinate(line, 38, 46);
        let z = parse_coordinate(line, 46, 54);
        let element = extract_element(line);

        Some(Atom::new(
            serial,
            &element,
            Point3::new(x, y, z),
            line.starts_with("HETATM"),
        ))
    }
}

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn parse_str(text: &str) -> Molecule {
        let mut molecule = Molecule::new();

        for line in text.split(['\r', '\n']) {
            if line.starts_with("ATOM") || line.starts_with("HETATM") {
                if let Some(atom) = Self::parse_atom_line(line) {
                    molecule.atoms.push(atom);
                }
            } else if let Some(rest) = line.strip_prefix("CONECT") {
                let mut fields = rest.split_whitespace();
                let Some(source) = fields.next().and_then(|f| f.parse::<usize>().ok()) else {
                    continue;
                };
                let targets: Vec<usize> = fields.filter_map(|f| f.parse().ok()).collect();
                // A later CONECT line for the same source replaces the
                // earlier list (last-write-wins, see DESIGN.md).
                molecule.connections.insert(source, targets);
            }
        }

        molecule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    /// Builds a column-accurate ATOM/HETATM line. Passing an empty element
    /// leaves columns 77-78 blank, forcing the atom-name fallback.
    fn record(kind: &str, serial: usize, name: &str, x: f64, y: f64, z: f64, element: &str) -> String {
        format!(
            "{:<6}{:>5} {:<4} {:<3} A{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
            kind, serial, name, "MOL", 1, x, y, z, 1.00, 0.00, element
        )
    }

    #[test]
    fn parses_atom_and_hetatm_records() {
        let text = format!(
            "{}\n{}\n",
            record("ATOM", 1, "N", 11.104, 6.134, -6.504, "N"),
            record("HETATM", 2, "FE", 0.0, 1.5, 2.25, "FE"),
        );
        let molecule = PdbFile::parse_str(&text);

        assert_eq!(molecule.atom_count(), 2);
        let first = &molecule.atoms[0];
        assert_eq!(first.serial, 1);
        assert_eq!(first.element, "N");
        assert_eq!(first.position, Point3::new(11.104, 6.134, -6.504));
        assert!(!first.is_hetero);

        let second = &molecule.atoms[1];
        assert_eq!(second.serial, 2);
        assert_eq!(second.element, "Fe");
        assert!(second.is_hetero);
    }

    #[test]
    fn ignores_unrelated_records() {
        let text = "HEADER    OXIDOREDUCTASE\nREMARK 350\nTER\nEND\n";
        let molecule = PdbFile::parse_str(text);
        assert!(molecule.is_empty());
        assert!(!molecule.has_explicit_connectivity());
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_molecule() {
        assert!(PdbFile::parse_str("").is_empty());
        assert!(PdbFile::parse_str("   \n  \n").is_empty());
    }

    #[test]
    fn record_with_bad_serial_is_skipped() {
        let mut bad = record("ATOM", 1, "C", 0.0, 0.0, 0.0, "C");
        bad.replace_range(6..11, "  abc");
        let text = format!("{}\n{}\n", bad, record("ATOM", 2, "O", 1.0, 0.0, 0.0, "O"));
        let molecule = PdbFile::parse_str(&text);
        assert_eq!(molecule.atom_count(), 1);
        assert_eq!(molecule.atoms[0].serial, 2);
    }

    #[test]
    fn short_line_produces_nan_coordinates() {
        // Serial is present but the line stops before the coordinate block.
        let molecule = PdbFile::parse_str("ATOM      7  C\n");
        assert_eq!(molecule.atom_count(), 1);
        let atom = &molecule.atoms[0];
        assert_eq!(atom.serial, 7);
        assert!(!atom.has_finite_position());
    }

    #[test]
    fn element_prefers_standard_field_and_canonicalizes() {
        let text = record("ATOM", 1, "CA", 0.0, 0.0, 0.0, "FE");
        let molecule = PdbFile::parse_str(&text);
        assert_eq!(molecule.atoms[0].element, "Fe");
    }

    #[test]
    fn element_falls_back_to_two_letter_atom_name() {
        let text = record("HETATM", 1, "CA", 0.0, 0.0, 0.0, "");
        let molecule = PdbFile::parse_str(&text);
        assert_eq!(molecule.atoms[0].element, "Ca");
    }

    #[test]
    fn element_falls_back_to_single_letter_after_digit_strip() {
        let text = record("ATOM", 1, "C1", 0.0, 0.0, 0.0, "");
        let molecule = PdbFile::parse_str(&text);
        assert_eq!(molecule.atoms[0].element, "C");
    }

    #[test]
    fn conect_records_build_the_connection_table() {
        let text = format!(
            "{}\n{}\nCONECT    1    2\n",
            record("ATOM", 1, "C", 0.0, 0.0, 0.0, "C"),
            record("ATOM", 2, "O", 1.2, 0.0, 0.0, "O"),
        );
        let molecule = PdbFile::parse_str(&text);
        assert!(molecule.has_explicit_connectivity());
        assert_eq!(molecule.connections[&1], vec![2]);
    }

    #[test]
    fn repeated_conect_source_is_last_write_wins() {
        let text = "CONECT    1    2    3\nCONECT    1    4\n";
        let molecule = PdbFile::parse_str(text);
        assert_eq!(molecule.connections[&1], vec![4]);
    }

    #[test]
    fn conect_with_unparseable_source_is_skipped() {
        let molecule = PdbFile::parse_str("CONECT  foo    2\n");
        assert!(!molecule.has_explicit_connectivity());
    }

    #[test]
    fn conect_drops_unparseable_targets() {
        let molecule = PdbFile::parse_str("CONECT    1    2  bar    3\n");
        assert_eq!(molecule.connections[&1], vec![2, 3]);
    }

    #[test]
    fn line_endings_do_not_change_the_result() {
        let line1 = record("ATOM", 1, "C", 0.0, 0.0, 0.0, "C");
        let line2 = record("ATOM", 2, "O", 1.2, 0.0, 0.0, "O");
        let unix = format!("{}\n{}\nCONECT    1    2\n", line1, line2);
        let dos = unix.replace('\n', "\r\n");
        let mac = unix.replace('\n', "\r");

        let parsed_unix = PdbFile::parse_str(&unix);
        assert_eq!(parsed_unix, PdbFile::parse_str(&dos));
        assert_eq!(parsed_unix, PdbFile::parse_str(&mac));
        assert_eq!(parsed_unix.atom_count(), 2);
    }

    #[test]
    fn duplicate_serials_are_kept_in_file_order() {
        let text = format!(
            "{}\n{}\n",
            record("ATOM", 9, "C", 0.0, 0.0, 0.0, "C"),
            record("ATOM", 9, "O", 1.2, 0.0, 0.0, "O"),
        );
        let molecule = PdbFile::parse_str(&text);
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.atoms[0].element, "C");
        assert_eq!(molecule.atoms[1].element, "O");
    }

    #[test]
    fn read_from_path_parses_a_file_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("water.pdb");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", record("ATOM", 1, "O", 0.0, 0.0, 0.0, "O")).unwrap();
        writeln!(file, "{}", record("ATOM", 2, "H", 0.0, 0.0, 0.96, "H")).unwrap();

        let molecule = PdbFile::read_from_path(&path).unwrap();
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.atoms[1].element, "H");
    }

    #[test]
    fn read_from_path_surfaces_io_errors() {
        let result = PdbFile::read_from_path("/definitely/not/a/file.pdb");
        assert!(matches!(result, Err(PdbError::Io(_))));
    }
}
