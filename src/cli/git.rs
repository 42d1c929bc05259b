//! Git-related CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Git operations.
#[derive(Parser)]
pub struct GitCommand {
    /// Git subcommand to execute.
    #[command(subcommand)]
    pub command: GitSubcommands,
}

/// Git subcommands.
#[derive(Subcommand)]
pub enum GitSubcommands {
    /// Checks out a branch, with fuzzy matching if the exact name fails.
    Checkout(CheckoutCommand),
}

/// Checkout command options.
#[derive(Parser)]
pub struct CheckoutCommand {
    /// Branch name to check out (typos welcome).
    #[arg(value_name = "BRANCH")]
    pub branch: String,
}

impl GitCommand {
    /// Executes the git command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            GitSubcommands::Checkout(checkout_cmd) => checkout_cmd.execute(),
        }
    }
}

impl CheckoutCommand {
    /// Executes the checkout command.
    pub fn execute(self) -> Result<()> {
        // Preflight check: validate git repository before any processing
        crate::utils::check_git_repository()?;

        crate::git::fuzzy_checkout(&self.branch)
    }
}
