use super::config::ConfigError;
use crate::core::io::traits::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Stats provider unavailable: {source}")]
    ProviderUnavailable {
        #[source]
        source: ProviderError,
    },

    #[error("Failed to fetch roster for team {team_id} ({season}): {source}")]
    RosterFetch {
        team_id: u64,
        season: String,
        #[source]
        source: ProviderError,
    },

    #[error("No roster available for team {team_id} ({season})")]
    RosterUnavailable { team_id: u64, season: String },

    #[error("Only {created} players could be created for '{team}'; at least {required} are required")]
    InsufficientRoster {
        team: String,
        created: usize,
        required: usize,
    },

    #[error("Team assembly for '{team}' was cancelled")]
    Cancelled { team: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Why a single roster entry could not be turned into a player.
///
/// Never escapes team assembly: the entry is logged and skipped.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Stats fetch failed for player {player_id}: {source}")]
    Fetch {
        player_id: u64,
        #[source]
        source: ProviderError,
    },

    #[error("Roster entry for player {player_id} has no name")]
    MissingName { player_id: u64 },
}
