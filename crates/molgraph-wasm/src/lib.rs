//! WebAssembly bindings for the molgraph structure library.
//!
//! This crate exposes the parse-and-bond pipeline to JavaScript/TypeScript
//! renderers (browser and AR viewers): structure text goes in, a plain data
//! graph of atoms and bonds comes out, together with the color/radius table
//! lookups the renderer keys its spheres on.

use molgraph::core::chem::elements::{covalent_radius, cpk_color};
use molgraph::core::models::molecule::MoleculeGraph;
use molgraph::core::utils::geometry::{bounding_extent, geometric_center};
use molgraph::engine::config::BondingConfig;
use molgraph::engine::progress::ProgressReporter;
use molgraph::workflows::load;
use serde::{Deserialize, Serialize};
use tsify::Tsify;
use wasm_bindgen::prelude::*;

/// Initializes panic hook for better error messages in browser console.
///
/// This function is automatically called when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Converts any displayable error into a JavaScript error.
fn to_js_error<E: std::fmt::Display>(e: E) -> JsError {
    JsError::new(&e.to_string())
}

/// Optional bonding-threshold overrides; absent fields keep the defaults
/// (0.4 A minimum distance, 1.15 tolerance factor).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct BondingOptions {
    #[serde(default)]
    pub min_bond_distance: Option<f64>,
    #[serde(default)]
    pub tolerance_factor: Option<f64>,
}

impl BondingOptions {
    fn to_config(&self) -> BondingConfig {
        let mut config = BondingConfig::default();
        if let Some(min_distance) = self.min_bond_distance {
            config.min_bond_distance = min_distance;
        }
        if let Some(tolerance) = self.tolerance_factor {
            config.tolerance_factor = tolerance;
        }
        config
    }
}

#[derive(Debug, Clone, Serialize, Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsAtom {
    /// Serial number from the source record.
    pub id: usize,
    /// Canonical element symbol; may be empty.
    pub element: String,
    /// Position in Angstroms as [x, y, z].
    pub position: [f64; 3],
    /// Whether the record was a HETATM.
    pub is_hetero: bool,
    /// CPK display color as 0xRRGGBB.
    pub color: u32,
    /// Covalent radius in Angstroms.
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsBond {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// The renderable structure graph: atoms, bonds, and framing hints.
#[derive(Debug, Clone, Serialize, Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsStructure {
    pub atoms: Vec<JsAtom>,
    pub bonds: Vec<JsBond>,
    pub center: [f64; 3],
    pub extent: f64,
}

impl JsStructure {
    fn from_graph(graph: &MoleculeGraph) -> Self {
        let center = geometric_center(&graph.atoms);
        Self {
            atoms: graph
                .atoms
                .iter()
                .map(|atom| JsAtom {
                    id: atom.serial,
                    element: atom.element.clone(),
                    position: [atom.position.x, atom.position.y, atom.position.z],
                    is_hetero: atom.is_hetero,
                    color: cpk_color(&atom.element),
                    radius: covalent_radius(&atom.element),
                })
                .collect(),
            bonds: graph
                .bonds
                .iter()
                .map(|bond| JsBond {
                    a: bond.serial_a,
                    b: bond.serial_b,
                    distance: bond.distance,
                })
                .collect(),
            center: [center.x, center.y, center.z],
            extent: bounding_extent(&graph.atoms),
        }
    }
}

/// Whether the text contains at least one ATOM/HETATM record.
///
/// Callers use this to reject non-structure files with a user-facing
/// message before parsing.
#[wasm_bindgen]
pub fn is_valid_structure(text: &str) -> bool {
    load::validate_content(text).is_ok()
}

fn parse_structure_impl(
    text: &str,
    options: Option<BondingOptions>,
) -> Result<JsStructure, load::ValidationError> {
    load::validate_content(text)?;
    let config = options.unwrap_or_default().to_config();
    let graph = load::run(text, &config, &ProgressReporter::new());
    Ok(JsStructure::from_graph(&graph))
}

/// Parses structure text and derives its bond graph.
///
/// # Errors
///
/// Rejects input containing no atom records; everything else degrades to a
/// smaller graph rather than failing.
#[wasm_bindgen]
pub fn parse_structure(
    text: &str,
    options: Option<BondingOptions>,
) -> Result<JsStructure, JsError> {
    parse_structure_impl(text, options).map_err(to_js_error)
}

/// CPK display color for an element symbol (neutral grey fallback).
#[wasm_bindgen]
pub fn element_color(element: &str) -> u32 {
    cpk_color(element)
}

/// Covalent radius in Angstroms for an element symbol (1.0 fallback).
#[wasm_bindgen]
pub fn element_radius(element: &str) -> f64 {
    covalent_radius(element)
}
