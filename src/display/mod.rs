//! Display arrangement: parsing `displayplacer` output and computing layouts.

use thiserror::Error;

pub mod layout;
pub mod parser;
pub mod placer;

pub use layout::{Direction, Placement};
pub use placer::Displayplacer;

/// One connected display, as reported by `displayplacer list`.
///
/// Built fresh from parsed text on every invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Persistent screen id.
    pub id: String,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// X offset within the combined virtual screen space.
    pub origin_x: i32,
    /// Y offset within the combined virtual screen space.
    pub origin_y: i32,
    /// Refresh rate.
    pub hertz: u32,
    /// Color depth in bits.
    pub color_depth: u32,
    /// Whether HiDPI scaling is on.
    pub scaling: bool,
    /// Whether the display is enabled.
    pub enabled: bool,
    /// Rotation in degrees.
    pub rotation: u32,
    /// Whether this is the main display.
    pub main: bool,
}

impl DisplayInfo {
    /// Resolution in `displayplacer`'s `WxH` form.
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl std::fmt::Display for DisplayInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Display(id={}, res={} origin=({},{}), main={})",
            self.id,
            self.resolution(),
            self.origin_x,
            self.origin_y,
            self.main
        )
    }
}

/// Splits a parsed listing into the primary and secondary displays.
///
/// The parser orders the main display first; any third display is ignored.
pub fn primary_and_secondary(
    displays: &[DisplayInfo],
) -> Result<(&DisplayInfo, &DisplayInfo), DisplayError> {
    match displays {
        [primary, secondary, ..] => Ok((primary, secondary)),
        _ => Err(DisplayError::NotEnoughDisplays),
    }
}

/// Display arrangement errors.
#[derive(Error, Debug)]
pub enum DisplayError {
    /// The listing contained no recognizable display sections.
    #[error("displayplacer output contained no displays")]
    NoDisplays,

    /// A display section lacked a `Resolution:` line.
    #[error("display {0} is missing a resolution")]
    MissingResolution(String),

    /// Arranging requires a primary and a secondary display.
    #[error("at least two connected displays are required")]
    NotEnoughDisplays,
}
