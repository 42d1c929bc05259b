//! Origin computation for placing the secondary display around the primary.

use clap::ValueEnum;

use crate::display::DisplayInfo;

/// Where to place the secondary display relative to the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Above the primary display.
    Up,
    /// Below the primary display.
    Down,
    /// To the left of the primary display.
    Left,
    /// To the right of the primary display.
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Computed origin for the secondary display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// New X origin of the secondary display.
    pub x: i32,
    /// New Y origin of the secondary display.
    pub y: i32,
    /// Human-readable description, e.g. "above the primary display".
    pub description: &'static str,
}

/// Computes where the secondary display's origin lands for a direction.
///
/// The primary display is anchored at (0, 0), so "right" starts at the
/// primary's width and "down" at its height; "left" and "up" are offset by
/// the secondary's own dimensions so the two edges meet.
pub fn place(primary: &DisplayInfo, secondary: &DisplayInfo, direction: Direction) -> Placement {
    match direction {
        Direction::Up => Placement {
            x: 0,
            y: -(secondary.height as i32),
            description: "above the primary display",
        },
        Direction::Down => Placement {
            x: 0,
            y: primary.height as i32,
            description: "below the primary display",
        },
        Direction::Left => Placement {
            x: -(secondary.width as i32),
            y: 0,
            description: "to the left of the primary display",
        },
        Direction::Right => Placement {
            x: primary.width as i32,
            y: 0,
            description: "to the right of the primary display",
        },
    }
}
