use nalgebra::Point3;
use serde::Serialize;

/// Represents a single atom record read from a structure file.
///
/// Atoms carry exactly the information a visualization consumer needs: the
/// file-assigned serial, the element symbol used for color/radius lookups,
/// the position in Angstroms, and whether the record was a HETATM.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    /// The serial number from the source record. Unique per file, but not
    /// guaranteed contiguous or starting at 1.
    pub serial: usize,
    /// The element symbol in canonical capitalization (e.g. "C", "Fe").
    /// May be empty when the record carried no element information.
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms, as given in the file.
    /// Components may be NaN when the source field was absent or malformed.
    pub position: Point3<f64>,
    /// Whether the atom came from a HETATM record rather than ATOM.
    pub is_hetero: bool,
}

impl Atom {
    /// Creates a new `Atom` from its source-record fields.
    pub fn new(serial: usize, element: &str, position: Point3<f64>, is_hetero: bool) -> Self {
        Self {
            serial,
            element: element.to_string(),
            position,
            is_hetero,
        }
    }

    /// Returns `true` if every coordinate component is finite.
    ///
    /// The parser propagates NaN for malformed coordinate fields instead of
    /// dropping the record; callers that cannot tolerate non-finite positions
    /// use this to filter.
    pub fn has_finite_position(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_all_fields() {
        let atom = Atom::new(7, "Fe", Point3::new(1.0, 2.0, 3.0), true);
        assert_eq!(atom.serial, 7);
        assert_eq!(atom.element, "Fe");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert!(atom.is_hetero);
    }

    #[test]
    fn finite_position_is_detected() {
        let atom = Atom::new(1, "C", Point3::new(0.0, -4.5, 12.25), false);
        assert!(atom.has_finite_position());
    }

    #[test]
    fn nan_coordinate_is_not_finite() {
        let atom = Atom::new(1, "C", Point3::new(0.0, f64::NAN, 0.0), false);
        assert!(!atom.has_finite_position());
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new(3, "O", Point3::new(0.0, 0.0, 0.96), false);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
