use crate::cli::InfoArgs;
use crate::config::resolve_bonding_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use molgraph::core::io::pdb::PdbFile;
use molgraph::core::io::traits::StructureFile;
use molgraph::core::utils::geometry::{bounding_extent, geometric_center};
use molgraph::engine::bonding::infer_bonds;
use molgraph::engine::progress::ProgressReporter;
use molgraph::workflows::load::validate_content;
use std::collections::BTreeMap;
use tracing::info;

pub fn run(args: InfoArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.input).map_err(|e| CliError::FileRead {
        path: args.input.clone(),
        source: e,
    })?;
    validate_content(&text)?;
    let config = resolve_bonding_config(&args.bonding)?;

    let molecule = PdbFile::parse_str(&text);
    let explicit = molecule.has_explicit_connectivity();

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.callback());
    let bonds = infer_bonds(&molecule, &config, &reporter);
    info!(
        atoms = molecule.atom_count(),
        bonds = bonds.len(),
        "Structure summary ready"
    );

    let hetero_count = molecule.atoms.iter().filter(|a| a.is_hetero).count();
    let invalid_count = molecule
        .atoms
        .iter()
        .filter(|a| !a.has_finite_position())
        .count();

    let mut histogram: BTreeMap<&str, usize> = BTreeMap::new();
    for atom in &molecule.atoms {
        let symbol = if atom.element.is_empty() {
            "?"
        } else {
            atom.element.as_str()
        };
        *histogram.entry(symbol).or_default() += 1;
    }
    let elements = histogram
        .iter()
        .map(|(symbol, count)| format!("{} x{}", symbol, count))
        .collect::<Vec<_>>()
        .join(", ");

    let center = geometric_center(&molecule.atoms);
    let extent = bounding_extent(&molecule.atoms);
    let strategy = if explicit {
        "explicit CONECT records"
    } else {
        "distance inference"
    };

    println!("Structure: {}", args.input.display());
    println!("  Atoms:     {} ({} HETATM)", molecule.atom_count(), hetero_count);
    if invalid_count > 0 {
        println!("  Warning:   {} atom(s) with non-finite coordinates", invalid_count);
    }
    println!("  Elements:  {}", if elements.is_empty() { "-".to_string() } else { elements });
    println!("  Bonds:     {} (from {})", bonds.len(), strategy);
    println!(
        "  Center:    ({:.3}, {:.3}, {:.3}) A",
        center.x, center.y, center.z
    );
    println!("  Extent:    {:.3} A", extent);

    Ok(())
}
