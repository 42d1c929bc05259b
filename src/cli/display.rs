//! Display-related CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::display::{layout, parser, primary_and_secondary, Direction, Displayplacer};

/// Display operations.
#[derive(Parser)]
pub struct DisplayCommand {
    /// Display subcommand to execute.
    #[command(subcommand)]
    pub command: DisplaySubcommands,
}

/// Display subcommands.
#[derive(Subcommand)]
pub enum DisplaySubcommands {
    /// Repositions the secondary display relative to the primary one.
    Arrange(ArrangeCommand),
}

/// Arrange command options.
#[derive(Parser)]
pub struct ArrangeCommand {
    /// Where to place the secondary display relative to the primary.
    #[arg(value_name = "DIRECTION")]
    pub direction: Direction,
}

impl DisplayCommand {
    /// Executes the display command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            DisplaySubcommands::Arrange(arrange_cmd) => arrange_cmd.execute(),
        }
    }
}

impl ArrangeCommand {
    /// Executes the arrange command.
    pub fn execute(self) -> Result<()> {
        let placer = Displayplacer::new();

        // Preflight check: validate the external tool before any processing
        crate::utils::check_displayplacer(&placer)?;

        let listing = placer.list()?;
        let displays = parser::parse_listing(&listing)?;
        let (primary, secondary) = primary_and_secondary(&displays)?;
        debug!("primary display: {primary}");
        debug!("secondary display: {secondary}");

        let placement = layout::place(primary, secondary, self.direction);
        debug!(
            "new origin: ({},{}) - {}",
            placement.x, placement.y, placement.description
        );

        println!(
            "Positioning secondary display {}...",
            placement.description
        );

        placer.apply(&[
            (primary, (0, 0)),
            (secondary, (placement.x, placement.y)),
        ])?;

        println!("Display arrangement updated successfully!");
        Ok(())
    }
}
