use crate::core::models::roster::{RosterEntry, TeamInfo};
use crate::core::models::stats::RawStats;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Stats source is unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to fetch {subject}: {message}")]
    Fetch { subject: String, message: String },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Defines the interface to an external source of rosters and player statistics.
///
/// Implementors wrap whatever actually holds the numbers (a statistics web
/// service, a set of exported files, an in-memory fixture). They are not
/// expected to cache; [`crate::engine::provider::StatsProvider`] layers an
/// explicit cache on top of any source.
pub trait StatsSource {
    /// Verifies that the source can serve requests at all.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` when the source is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] when the source cannot be reached
    /// or was never initialized. Callers treat this as fatal.
    fn check_available(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Lists every team the source knows about.
    ///
    /// # Errors
    ///
    /// Returns an error if the team list cannot be fetched.
    fn list_teams(&self) -> Result<Vec<TeamInfo>, ProviderError>;

    /// Lists a team's roster for one season, in the source's own order.
    ///
    /// # Arguments
    ///
    /// * `team_id` - The source's identifier for the team.
    /// * `season` - Season key, e.g. `"2024-25"`.
    ///
    /// # Return
    ///
    /// The roster entries. An empty list means the source has no roster for
    /// that team and season.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be fetched.
    fn list_roster(&self, team_id: u64, season: &str) -> Result<Vec<RosterEntry>, ProviderError>;

    /// Fetches one player's per-game statistics for a season.
    ///
    /// # Arguments
    ///
    /// * `player_id` - The source's identifier for the player.
    /// * `season` - Season key, e.g. `"2024-25"`.
    ///
    /// # Return
    ///
    /// `Ok(None)` when the player has no recorded season.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn player_season_stats(
        &self,
        player_id: u64,
        season: &str,
    ) -> Result<Option<RawStats>, ProviderError>;
}
