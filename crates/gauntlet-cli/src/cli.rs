use clap::{Parser, Subcommand, ValueEnum};
use gauntlet_core::RecordId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(about = "gauntlet - resiliency test harness for cloud infrastructure")]
#[command(version)]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/gauntlet/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog directory (overrides config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Report output directory (overrides config file)
    #[arg(long, global = true)]
    pub report_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the sample definition catalog to the data directory
    Init {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },

    /// List a definition collection as a table
    List {
        /// Which collection to list
        #[arg(value_enum)]
        collection: Collection,
    },

    /// Show one record with its cross references resolved
    Show {
        /// Which collection the record lives in
        #[arg(value_enum)]
        collection: Collection,
        /// Record ID
        id: RecordId,
    },

    /// Execute a test definition once and write the CSV reports
    Run {
        /// Test definition ID
        id: RecordId,
    },

    /// Export the whole definition catalog to one timestamped CSV
    Export,

    /// Interactive menu (the default when no subcommand is given)
    Menu,
}

/// Catalog collections addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    TestCases,
    TestDefinitions,
    ChallengeDefinitions,
    Metrics,
    Recipients,
    PhysicalResources,
    CloudResources,
    Vnfs,
}
