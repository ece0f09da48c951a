use crate::core::models::atom::Atom;
use nalgebra::{Point3, Vector3};

/// Extent reported for an empty atom set, a nominal viewing size that lets
/// renderers frame "nothing" sensibly.
const EMPTY_EXTENT: f64 = 10.0;

/// Computes the geometric center (centroid) of an atom set.
///
/// Returns the origin for empty input. Non-finite coordinates propagate into
/// the result; filter with [`Atom::has_finite_position`] first if that
/// matters to the caller.
pub fn geometric_center(atoms: &[Atom]) -> Point3<f64> {
    if atoms.is_empty() {
        return Point3::origin();
    }
    let sum: Vector3<f64> = atoms
        .iter()
        .map(|atom| atom.position.coords)
        .sum();
    Point3::from(sum / atoms.len() as f64)
}

/// Computes the largest axis-aligned bounding-box dimension of an atom set.
pub fn bounding_extent(atoms: &[Atom]) -> f64 {
    if atoms.is_empty() {
        return EMPTY_EXTENT;
    }
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);
    for atom in atoms {
        min = min.inf(&atom.position.coords);
        max = max.sup(&atom.position.coords);
    }
    let size = max - min;
    size.x.max(size.y).max(size.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(serial: usize, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(serial, "C", Point3::new(x, y, z), false)
    }

    #[test]
    fn center_of_empty_set_is_origin() {
        assert_eq!(geometric_center(&[]), Point3::origin());
    }

    #[test]
    fn center_averages_positions() {
        let atoms = [atom(1, 0.0, 0.0, 0.0), atom(2, 2.0, 4.0, -6.0)];
        assert_eq!(geometric_center(&atoms), Point3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn extent_of_empty_set_is_the_nominal_size() {
        assert_eq!(bounding_extent(&[]), 10.0);
    }

    #[test]
    fn extent_is_the_largest_axis_span() {
        let atoms = [
            atom(1, -1.0, 0.0, 0.0),
            atom(2, 3.0, 1.0, 0.0),
            atom(3, 0.0, 2.0, 1.5),
        ];
        assert_eq!(bounding_extent(&atoms), 4.0);
    }

    #[test]
    fn single_atom_has_zero_extent() {
        assert_eq!(bounding_extent(&[atom(1, 5.0, 5.0, 5.0)]), 0.0);
    }
}
