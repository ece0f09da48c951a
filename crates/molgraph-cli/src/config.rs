use crate::cli::BondingArgs;
use crate::error::{CliError, Result};
use molgraph::engine::config::BondingConfig;
use tracing::debug;

/// Resolves the effective bonding configuration: the TOML file when given,
/// defaults otherwise, with individual flag overrides applied on top.
pub fn resolve_bonding_config(args: &BondingArgs) -> Result<BondingConfig> {
    let mut config = match &args.config {
        Some(path) => {
            BondingConfig::from_toml_path(path).map_err(|e| CliError::Config(e.to_string()))?
        }
        None => BondingConfig::default(),
    };

    if let Some(tolerance) = args.tolerance_factor {
        if tolerance <= 0.0 {
            return Err(CliError::Argument(
                "tolerance factor must be positive".into(),
            ));
        }
        config.tolerance_factor = tolerance;
    }
    if let Some(min_distance) = args.min_bond_distance {
        if min_distance < 0.0 {
            return Err(CliError::Argument(
                "minimum bond distance must not be negative".into(),
            ));
        }
        config.min_bond_distance = min_distance;
    }

    debug!(?config, "Resolved bonding configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> BondingArgs {
        BondingArgs {
            config: None,
            tolerance_factor: None,
            min_bond_distance: None,
        }
    }

    #[test]
    fn defaults_are_used_without_a_config_file() {
        let config = resolve_bonding_config(&args()).unwrap();
        assert_eq!(config, BondingConfig::default());
    }

    #[test]
    fn flag_overrides_apply_on_top_of_defaults() {
        let mut a = args();
        a.tolerance_factor = Some(1.3);
        a.min_bond_distance = Some(0.2);
        let config = resolve_bonding_config(&a).unwrap();
        assert_eq!(config.tolerance_factor, 1.3);
        assert_eq!(config.min_bond_distance, 0.2);
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        let mut a = args();
        a.tolerance_factor = Some(0.0);
        assert!(matches!(
            resolve_bonding_config(&a),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn negative_min_distance_is_rejected() {
        let mut a = args();
        a.min_bond_distance = Some(-0.1);
        assert!(matches!(
            resolve_bonding_config(&a),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let mut a = args();
        a.config = Some("/no/such/molgraph.toml".into());
        assert!(matches!(
            resolve_bonding_config(&a),
            Err(CliError::Config(_))
        ));
    }
}
