use super::player::Player;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// An assembled roster, handed to the game engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: &str, players: Vec<Player>) -> Self {
        Self {
            name: name.to_string(),
            players,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn slot_counts(&self) -> [usize; 5] {
        slot_counts(&self.players)
    }

    /// True when every slot has at least one player.
    pub fn covers_all_positions(&self) -> bool {
        self.slot_counts().iter().all(|&count| count > 0)
    }

    pub fn players_at(&self, position: Position) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(move |player| player.position() == position)
    }
}

/// Number of players per slot, indexed by [`Position::index`].
pub fn slot_counts(players: &[Player]) -> [usize; 5] {
    let mut counts = [0; 5];
    for player in players {
        counts[player.position().index()] += 1;
    }
    counts
}
