use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Canonical on-court slot, ordered from the ball handler (1) to the big man (5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    PointGuard = 1,    // PG
    ShootingGuard = 2, // SG
    SmallForward = 3,  // SF
    PowerForward = 4,  // PF
    Center = 5,        // C
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Position slot must be between 1 and 5, got {0}")]
pub struct InvalidSlot(pub u8);

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Position::PointGuard),
            2 => Some(Position::ShootingGuard),
            3 => Some(Position::SmallForward),
            4 => Some(Position::PowerForward),
            5 => Some(Position::Center),
            _ => None,
        }
    }

    #[inline]
    pub fn slot(self) -> u8 {
        self as u8
    }

    /// Zero-based index for per-slot tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    #[inline]
    pub fn distance(self, other: Position) -> u8 {
        self.slot().abs_diff(other.slot())
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Position::PointGuard => "Point Guard",
            Position::ShootingGuard => "Shooting Guard",
            Position::SmallForward => "Small Forward",
            Position::PowerForward => "Power Forward",
            Position::Center => "Center",
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.slot()
    }
}

impl TryFrom<u8> for Position {
    type Error = InvalidSlot;

    fn try_from(slot: u8) -> Result<Self, Self::Error> {
        Position::from_slot(slot).ok_or(InvalidSlot(slot))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
