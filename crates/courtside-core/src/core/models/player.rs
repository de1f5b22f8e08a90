use super::attributes::AttributeProfile;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Interaction probabilities the game engine rolls against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedProbabilities {
    pub complete_pass: f64,
    pub protect_drive: f64,
    pub steal_drive: f64,
    pub steal_pass: f64,
    pub block_chance: f64,
}

/// Deserialization goes through [`PlayerRecord`], so the slot label is always
/// rebuilt from the slot and never taken from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerRecord")]
pub struct Player {
    pub name: String,
    position: Position,
    position_label: String,
    listed_position: String, // Label as published by the stats source (e.g. "G-F")
    pub attributes: AttributeProfile,
    pub probabilities: DerivedProbabilities,
}

/// Serialized form of a [`Player`] minus the derived `position_label`.
#[derive(Deserialize)]
struct PlayerRecord {
    name: String,
    position: Position,
    listed_position: String,
    attributes: AttributeProfile,
    probabilities: DerivedProbabilities,
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Player::new(
            &record.name,
            &record.listed_position,
            record.position,
            record.attributes,
            record.probabilities,
        )
    }
}

impl Player {
    pub fn new(
        name: &str,
        listed_position: &str,
        position: Position,
        attributes: AttributeProfile,
        probabilities: DerivedProbabilities,
    ) -> Self {
        Self {
            name: name.to_string(),
            position,
            position_label: position.label().to_string(),
            listed_position: listed_position.to_string(),
            attributes,
            probabilities,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn position_label(&self) -> &str {
        &self.position_label
    }

    pub fn listed_position(&self) -> &str {
        &self.listed_position
    }

    /// Moves the player to another slot. Only roster balancing does this.
    pub(crate) fn reassign(&mut self, position: Position) {
        self.position = position;
        self.position_label = position.label().to_string();
    }
}
