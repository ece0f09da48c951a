use crate::cli::ExportArgs;
use crate::config::resolve_bonding_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use molgraph::core::chem::elements::{covalent_radius, cpk_color};
use molgraph::core::models::molecule::MoleculeGraph;
use molgraph::core::utils::geometry::{bounding_extent, geometric_center};
use molgraph::engine::progress::ProgressReporter;
use molgraph::workflows::load;
use serde::Serialize;
use tracing::info;

/// One atom as the renderer consumes it: identity, geometry, and the
/// CPK color / covalent radius it keys sphere materials on.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneAtom {
    id: usize,
    element: String,
    position: [f64; 3],
    is_hetero: bool,
    color: u32,
    radius: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneBond {
    a: usize,
    b: usize,
    distance: f64,
}

/// The JSON document handed to the external renderer: the bonded graph plus
/// the framing hints (center, extent) it needs to place a camera.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneDocument {
    atoms: Vec<SceneAtom>,
    bonds: Vec<SceneBond>,
    center: [f64; 3],
    extent: f64,
}

impl SceneDocument {
    fn from_graph(graph: &MoleculeGraph) -> Self {
        let center = geometric_center(&graph.atoms);
        let extent = bounding_extent(&graph.atoms);

        let atoms = graph
            .atoms
            .iter()
            .map(|atom| SceneAtom {
                id: atom.serial,
                element: atom.element.clone(),
                position: [atom.position.x, atom.position.y, atom.position.z],
                is_hetero: atom.is_hetero,
                color: cpk_color(&atom.element),
                radius: covalent_radius(&atom.element),
            })
            .collect();
        let bonds = graph
            .bonds
            .iter()
            .map(|bond| SceneBond {
                a: bond.serial_a,
                b: bond.serial_b,
                distance: bond.distance,
            })
            .collect();

        Self {
            atoms,
            bonds,
            center: [center.x, center.y, center.z],
            extent,
        }
    }
}

pub fn run(args: ExportArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.input).map_err(|e| CliError::FileRead {
        path: args.input.clone(),
        source: e,
    })?;
    load::validate_content(&text)?;
    let config = resolve_bonding_config(&args.bonding)?;

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.callback());
    let graph = load::run(&text, &config, &reporter);

    let document = SceneDocument::from_graph(&graph);
    let json = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(
                atoms = document.atoms.len(),
                bonds = document.bonds.len(),
                output = %path.display(),
                "Scene document written"
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
