//! Parser for the free-text listing printed by `displayplacer list`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::display::{DisplayError, DisplayInfo};

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static RESOLUTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Resolution: (\d+)x(\d+)").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static ORIGIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Origin: \((-?\d+),(-?\d+)\)").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static HERTZ_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Hertz: (\d+)").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static COLOR_DEPTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Color Depth: (\d+)").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static ROTATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Rotation: (\d+)").unwrap());

/// Parses `displayplacer list` output into display records.
///
/// The listing is split on `Persistent screen id:` section headers. Each
/// section yields one record; fields absent from a section fall back to
/// displayplacer's defaults (60 Hz, 8-bit color, no rotation). The returned
/// sequence always orders the main display first.
pub fn parse_listing(output: &str) -> Result<Vec<DisplayInfo>, DisplayError> {
    let mut displays = Vec::new();

    let sections: Vec<&str> = output.split("Persistent screen id:").skip(1).collect();
    debug!("found {} display sections", sections.len());

    for section in sections {
        let id = section
            .lines()
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        debug!("parsing display section for id {id}");

        let (width, height) = RESOLUTION_PATTERN
            .captures(section)
            .and_then(|caps| {
                let w = caps[1].parse().ok()?;
                let h = caps[2].parse().ok()?;
                Some((w, h))
            })
            .ok_or_else(|| DisplayError::MissingResolution(id.clone()))?;

        let (origin_x, origin_y) = ORIGIN_PATTERN
            .captures(section)
            .and_then(|caps| {
                let x = caps[1].parse().ok()?;
                let y = caps[2].parse().ok()?;
                Some((x, y))
            })
            .unwrap_or((0, 0));

        displays.push(DisplayInfo {
            id,
            width,
            height,
            origin_x,
            origin_y,
            hertz: capture_number(&HERTZ_PATTERN, section).unwrap_or(60),
            color_depth: capture_number(&COLOR_DEPTH_PATTERN, section).unwrap_or(8),
            scaling: section.contains("Scaling: on"),
            enabled: section.contains("Enabled: true"),
            rotation: capture_number(&ROTATION_PATTERN, section).unwrap_or(0),
            main: section.contains("main display"),
        });
    }

    if displays.is_empty() {
        return Err(DisplayError::NoDisplays);
    }

    // Main display first.
    displays.sort_by_key(|d| !d.main);

    Ok(displays)
}

fn capture_number(pattern: &Regex, section: &str) -> Option<u32> {
    pattern.captures(section).and_then(|caps| caps[1].parse().ok())
}
