use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molgraph CLI - Parse PDB structure files and derive the atom/bond graphs consumed by molecular viewers.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the atoms and bonds derived from a structure file.
    Info(InfoArgs),
    /// Export the derived atom/bond graph as a JSON scene document for an
    /// external renderer.
    Export(ExportArgs),
}

/// Bonding-threshold options shared by all subcommands.
#[derive(Args, Debug)]
pub struct BondingArgs {
    /// Path to a TOML configuration file with a [bonding] table.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the covalent-radius tolerance factor from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance_factor: Option<f64>,

    /// Override the minimum plausible bond distance in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub min_bond_distance: Option<f64>,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input structure file (.pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub bonding: BondingArgs,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the input structure file (.pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output JSON document (stdout when omitted).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub bonding: BondingArgs,
}
