use super::config::BondingConfig;
use super::progress::{Progress, ProgressReporter};
use crate::core::chem::elements::covalent_radius;
use crate::core::models::bond::{Bond, pair_key};
use crate::core::models::molecule::Molecule;
use std::collections::HashSet;
use tracing::{debug, info};

/// Derives the bond set for a parsed molecule.
///
/// The strategy is a strict either/or: when the molecule carries an explicit
/// CONECT table, bonds come exclusively from it and geometry is ignored;
/// otherwise every unordered atom pair is tested against the covalent-radius
/// distance criterion. The two strategies are never mixed in one output set.
///
/// Both paths guarantee set semantics (no duplicate unordered pair, no
/// self-bonds) and degrade to an empty set for degenerate input - zero atoms,
/// a single atom, or no qualifying pair is not an error.
pub fn infer_bonds(
    molecule: &Molecule,
    config: &BondingConfig,
    reporter: &ProgressReporter,
) -> Vec<Bond> {
    if molecule.has_explicit_connectivity() {
        debug!(
            entries = molecule.connections.len(),
            "Building bonds from the explicit connectivity table"
        );
        bonds_from_connectivity(molecule)
    } else {
        info!("No CONECT records present; inferring bonds from interatomic distances");
        bonds_from_distance(molecule, config, reporter)
    }
}

/// Replays the CONECT table: symmetrized, deduplicated by canonical pair,
/// with dangling references and self-references silently skipped.
fn bonds_from_connectivity(molecule: &Molecule) -> Vec<Bond> {
    let index = molecule.serial_index();
    let atoms = &molecule.atoms;
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut bonds = Vec::new();

    for (&source, targets) in &molecule.connections {
        let Some(&source_idx) = index.get(&source) else {
            continue;
        };
        for &target in targets {
            if target == source {
                continue;
            }
            let Some(&target_idx) = index.get(&target) else {
                continue;
            };
            if !seen.insert(pair_key(source, target)) {
                continue;
            }
            let distance = (atoms[source_idx].position - atoms[target_idx].position).norm();
            bonds.push(Bond::new(source, target, distance));
        }
    }

    bonds
}

/// O(n²) pairwise scan over all atoms in file order.
///
/// No spatial index is used; for structures beyond a few thousand atoms this
/// scan is the performance ceiling.
fn bonds_from_distance(
    molecule: &Molecule,
    config: &BondingConfig,
    reporter: &ProgressReporter,
) -> Vec<Bond> {
    let atoms = &molecule.atoms;
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut bonds = Vec::new();

    reporter.report(Progress::ScanStart {
        total_rows: atoms.len() as u64,
    });

    for (i, first) in atoms.iter().enumerate() {
        let radius_first = covalent_radius(&first.element);
        for second in &atoms[i + 1..] {
            if first.serial == second.serial {
                continue;
            }
            let distance = (first.position - second.position).norm();
            let radius_sum = radius_first + covalent_radius(&second.element);
            if !within_bonding_range(distance, radius_sum, config) {
                continue;
            }
            // The i < j loop already visits each pair once; keying on the
            // canonical serial pair additionally guards against duplicated
            // serials in the input.
            if seen.insert(pair_key(first.serial, second.serial)) {
                bonds.push(Bond::new(first.serial, second.serial, distance));
            }
        }
        reporter.report(Progress::ScanRowDone);
    }

    reporter.report(Progress::ScanFinish);
    bonds
}

/// The distance criterion: strictly above the minimum plausible bond length
/// and at most the covalent-radius sum scaled by the tolerance factor.
/// NaN distances fail both comparisons and never bond.
fn within_bonding_range(distance: f64, radius_sum: f64, config: &BondingConfig) -> bool {
    distance > config.min_bond_distance && distance <= radius_sum * config.tolerance_factor
}
