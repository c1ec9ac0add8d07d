use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flptime")]
#[command(author, version, about = "Report the time spent on FL Studio projects")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree and total the time spent on every project
    Scan {
        /// Directory to scan (prompted for when omitted)
        dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Probe files in parallel
        #[arg(long)]
        parallel: bool,

        /// Wait for enter before exiting
        #[arg(long)]
        pause: bool,
    },

    /// Show the raw time record of a single project file
    Inspect {
        /// Project file to inspect
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (searches the default locations if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
