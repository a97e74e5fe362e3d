use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Delphi tabular KNN classifier.
#[derive(Parser)]
#[command(
    name = "delphi",
    version,
    about = "Seeded k-nearest-neighbors classification over delimited tabular data"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a dataset, classify the held-out rows, and report accuracy.
    Classify(ClassifyArgs),
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "delphi.toml")]
    pub config: PathBuf,

    /// Override input dataset path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override number of nearest neighbors from config.
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override train fraction from config.
    #[arg(long = "train-fraction")]
    pub train_fraction: Option<f64>,
}
