use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::models::molecule::MoleculeGraph;
use crate::engine::bonding::infer_bonds;
use crate::engine::config::BondingConfig;
use crate::engine::progress::{Progress, ProgressReporter};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input contains no ATOM or HETATM records")]
    NoAtomRecords,
}

fn atom_record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^(ATOM|HETATM)\s+\d+").expect("atom record pattern must compile")
    })
}

/// Content-sanity check run before parsing: the input must contain at least
/// one line that looks like an atom record.
///
/// The parser itself never rejects input (non-structure text just parses to
/// an empty molecule); this collaborator exists for callers that must fail
/// loudly instead of rendering nothing.
///
/// # Errors
///
/// Returns [`ValidationError::NoAtomRecords`] when no atom record is found.
pub fn validate_content(text: &str) -> Result<(), ValidationError> {
    if atom_record_pattern().is_match(text) {
        Ok(())
    } else {
        Err(ValidationError::NoAtomRecords)
    }
}

/// Parses structure text and derives its bond set in one step.
///
/// This is the operation front-ends call per loaded file: raw text in,
/// renderable atom/bond graph out. Malformed records degrade to fewer
/// atoms/bonds, never errors; run [`validate_content`] first to reject
/// non-structure input.
#[instrument(skip_all, name = "load_workflow")]
pub fn run(text: &str, config: &BondingConfig, reporter: &ProgressReporter) -> MoleculeGraph {
    reporter.report(Progress::PhaseStart { name: "Parsing" });
    let molecule = PdbFile::parse_str(text);
    info!(
        atoms = molecule.atom_count(),
        conect_entries = molecule.connections.len(),
        "Parsed structure records"
    );
    reporter.report(Progress::PhaseFinish);

    let bonds = infer_bonds(&molecule, config, reporter);
    info!(bonds = bonds.len(), "Bond set complete");

    MoleculeGraph {
        atoms: molecule.atoms,
        bonds,
    }
}
