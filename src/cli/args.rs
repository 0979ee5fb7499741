// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for locview

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locview")]
#[command(about = "Render sample-management location pages from JSON fixtures")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a location page from a JSON request fixture
    Render {
        #[arg(help = "Path to render request JSON file")]
        fixture: PathBuf,

        #[arg(short, long, help = "Write HTML to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Locale override for this render")]
        locale: Option<String>,
    },

    /// Validate a render request fixture without producing output
    Check {
        #[arg(help = "Path to render request JSON file")]
        fixture: PathBuf,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
