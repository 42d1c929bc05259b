//! Preflight validation checks for early failure detection
//!
//! This module provides functions to validate required external tools
//! before starting an operation. Commands should call these checks early
//! to fail fast with clear error messages.

use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::display::Displayplacer;

/// Validate we're in a valid git repository
///
/// This is a lightweight check that opens the repository without
/// loading any branch data.
pub fn check_git_repository() -> Result<()> {
    crate::git::GitRepository::open().context(
        "Not in a git repository. Please run this command from within a git repository.",
    )?;
    Ok(())
}

/// Validate `displayplacer` is available, installing it if possible
///
/// This checks:
/// 1. The configured displayplacer executable is on PATH
/// 2. If not, Homebrew is used to install it
///
/// Fails with manual install instructions when neither is available.
pub fn check_displayplacer(placer: &Displayplacer) -> Result<()> {
    if is_on_path(placer.bin()) {
        return Ok(());
    }

    println!("displayplacer tool not found. Attempting to install...");

    if !is_on_path("brew") {
        bail!(
            "displayplacer is not installed and Homebrew is not available.\n\
             Please install it manually:\n\
             1. Install Homebrew: https://brew.sh\n\
             2. Install displayplacer: brew install jakehilborn/jakehilborn/displayplacer"
        );
    }

    let status = Command::new("brew")
        .args(["install", "jakehilborn/jakehilborn/displayplacer"])
        .status()
        .context("Failed to execute brew install")?;

    if !status.success() {
        bail!("Homebrew failed to install displayplacer");
    }

    Ok(())
}

/// Validate `fzf` is available for the interactive picker
///
/// Checked lazily, only when fuzzy checkout actually reaches the
/// interactive fallback.
pub fn check_fzf(fzf: &str) -> Result<()> {
    if is_on_path(fzf) {
        return Ok(());
    }

    bail!(
        "'{fzf}' is not installed or not in PATH.\n\
         The interactive picker needs fzf: https://github.com/junegunn/fzf"
    )
}

/// Checks whether an executable resolves on PATH.
fn is_on_path(bin: &str) -> bool {
    Command::new("which")
        .arg(bin)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
