//! CLI interface for toolbelt

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod display;
pub mod git;
pub mod s3;

/// toolbelt: personal command-line conveniences
#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(about = "Personal command-line conveniences", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging for this invocation
    #[arg(long, global = true)]
    pub debug: bool,

    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Display arrangement operations
    Display(display::DisplayCommand),
    /// Git-related operations
    Git(git::GitCommand),
    /// S3 URL operations
    S3(s3::S3Command),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Display(display_cmd) => display_cmd.execute(),
            Commands::Git(git_cmd) => git_cmd.execute(),
            Commands::S3(s3_cmd) => s3_cmd.execute(),
        }
    }
}
