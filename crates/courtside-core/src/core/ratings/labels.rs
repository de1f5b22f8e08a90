use crate::core::models::position::Position;
use phf::{Map, phf_map};
use tracing::debug;

const FALLBACK_POSITION: Position = Position::SmallForward;
const SEPARATOR: char = '-';

static POSITION_LABELS: Map<&'static str, Position> = phf_map! {
    "PG" => Position::PointGuard, "Point Guard" => Position::PointGuard,
    "SG" => Position::ShootingGuard, "Shooting Guard" => Position::ShootingGuard,
    "Guard" => Position::ShootingGuard, "G" => Position::ShootingGuard,
    "SF" => Position::SmallForward, "Small Forward" => Position::SmallForward,
    "Forward" => Position::SmallForward, "F" => Position::SmallForward,
    "PF" => Position::PowerForward, "Power Forward" => Position::PowerForward,
    "C" => Position::Center, "Center" => Position::Center,
    "F-C" => Position::PowerForward, "C-F" => Position::PowerForward,
    "G-F" => Position::ShootingGuard,
};

/// Maps a published position label onto a canonical slot. Never fails.
///
/// Hyphenated combo labels listed in the table (`F-C`, `C-F`, `G-F`) match
/// as a whole; any other hyphenated label is reduced to its primary segment,
/// so `PG-SG` maps like `PG`. Lookup is case sensitive and unknown labels
/// fall back to small forward.
pub fn map_position(label: &str) -> Position {
    let position = POSITION_LABELS
        .get(label)
        .or_else(|| {
            label
                .split_once(SEPARATOR)
                .and_then(|(primary, _)| POSITION_LABELS.get(primary))
        })
        .copied()
        .unwrap_or(FALLBACK_POSITION);
    debug!(label, position = %position, "Mapped position label.");
    position
}

/// Whether `label` (or its primary segment) is a recognised label.
pub fn is_known_label(label: &str) -> bool {
    POSITION_LABELS.contains_key(label)
        || label
            .split_once(SEPARATOR)
            .is_some_and(|(primary, _)| POSITION_LABELS.contains_key(primary))
}
