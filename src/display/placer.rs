//! Wrapper around the external `displayplacer` executable.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

use crate::display::DisplayInfo;
use crate::utils::settings;

/// Environment variable (or settings key) overriding the executable path.
pub const DISPLAYPLACER_BIN_VAR: &str = "DISPLAYPLACER_BIN";

const DEFAULT_BIN: &str = "displayplacer";

/// Handle to the `displayplacer` executable.
pub struct Displayplacer {
    bin: String,
}

impl Default for Displayplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Displayplacer {
    /// Creates a handle, honoring the `DISPLAYPLACER_BIN` override.
    pub fn new() -> Self {
        let bin = settings::get_env_var(DISPLAYPLACER_BIN_VAR)
            .unwrap_or_else(|_| DEFAULT_BIN.to_string());
        Self { bin }
    }

    /// Creates a handle for a specific executable path.
    pub fn with_bin(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    /// The executable this handle invokes.
    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Runs `displayplacer list` and returns its raw output.
    pub fn list(&self) -> Result<String> {
        let output = Command::new(&self.bin)
            .arg("list")
            .output()
            .with_context(|| format!("Failed to execute '{} list'", self.bin))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("'{} list' failed: {}", self.bin, stderr.trim());
        }

        let listing = String::from_utf8_lossy(&output.stdout).to_string();
        debug!("got displayplacer output of length {}", listing.len());
        Ok(listing)
    }

    /// Applies a layout: one config argument per display with its new origin.
    pub fn apply(&self, layout: &[(&DisplayInfo, (i32, i32))]) -> Result<()> {
        let args: Vec<String> = layout
            .iter()
            .map(|(display, origin)| config_arg(display, *origin))
            .collect();

        debug!("applying layout: {} {}", self.bin, args.join(" "));

        let output = Command::new(&self.bin)
            .args(&args)
            .output()
            .with_context(|| format!("Failed to execute '{}'", self.bin))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Error updating display arrangement: {}", stderr.trim());
        }

        Ok(())
    }
}

/// Formats one display's config argument in displayplacer's `key:value` form.
fn config_arg(display: &DisplayInfo, origin: (i32, i32)) -> String {
    format!(
        "id:{} res:{} enabled:{} scaling:{} origin:({},{})",
        display.id,
        display.resolution(),
        display.enabled,
        if display.scaling { "on" } else { "off" },
        origin.0,
        origin.1
    )
}
