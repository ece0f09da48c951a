use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Minimum plausible bond length in Angstroms; pairs at or below this are
/// treated as coincident/duplicate atoms, not bonds.
pub const DEFAULT_MIN_BOND_DISTANCE: f64 = 0.4;

/// Tolerance applied to the sum of covalent radii (15%).
pub const DEFAULT_TOLERANCE_FACTOR: f64 = 1.15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Thresholds for distance-based bond inference.
///
/// The defaults reproduce the reference behavior exactly; the fields exist
/// so front-ends can expose overrides.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BondingConfig {
    /// Strict lower bound on bond length in Angstroms.
    pub min_bond_distance: f64,
    /// Multiplier on the covalent-radius sum forming the upper bound.
    pub tolerance_factor: f64,
}

impl Default for BondingConfig {
    fn default() -> Self {
        Self {
            min_bond_distance: DEFAULT_MIN_BOND_DISTANCE,
            tolerance_factor: DEFAULT_TOLERANCE_FACTOR,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct ConfigFile {
    bonding: BondingConfig,
}

impl BondingConfig {
    /// Loads the `[bonding]` table from a TOML file; absent keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(file.bonding)
    }
}
