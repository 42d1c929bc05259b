//! S3-related CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

/// S3 operations.
#[derive(Parser)]
pub struct S3Command {
    /// S3 subcommand to execute.
    #[command(subcommand)]
    pub command: S3Subcommands,
}

/// S3 subcommands.
#[derive(Subcommand)]
pub enum S3Subcommands {
    /// Rewrites S3 HTTP URLs into s3:// URIs.
    Uri(UriCommand),
}

/// Uri command options.
#[derive(Parser)]
pub struct UriCommand {
    /// URLs (or bare object keys) to rewrite.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}

impl S3Command {
    /// Executes the s3 command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            S3Subcommands::Uri(uri_cmd) => uri_cmd.execute(),
        }
    }
}

impl UriCommand {
    /// Executes the uri command.
    pub fn execute(self) -> Result<()> {
        for url in &self.urls {
            match crate::s3::to_s3_uri(url) {
                Some(uri) => println!("{uri}"),
                None => debug!("skipping non-S3 URL: {url}"),
            }
        }

        Ok(())
    }
}
