use super::cache::StatsCache;
use crate::core::io::traits::{ProviderError, StatsSource};
use crate::core::models::roster::{RosterEntry, TeamDirectory};
use crate::core::models::stats::RawStats;
use tracing::{debug, trace};

/// A [`StatsSource`] with an explicit, caller-owned result cache.
///
/// Successful lookups are remembered for as long as the provider (or the
/// cache handed to [`with_cache`](Self::with_cache)) lives; failures are not.
#[derive(Debug)]
pub struct StatsProvider<S> {
    source: S,
    cache: StatsCache,
}

impl<S: StatsSource> StatsProvider<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, StatsCache::new())
    }

    pub fn with_cache(source: S, cache: StatsCache) -> Self {
        Self { source, cache }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Returns the source and its cache, e.g. to reuse the cache elsewhere.
    pub fn into_parts(self) -> (S, StatsCache) {
        (self.source, self.cache)
    }

    pub fn check_available(&self) -> Result<(), ProviderError> {
        self.source.check_available()
    }

    pub fn team_directory(&self) -> Result<TeamDirectory, ProviderError> {
        self.source.list_teams().map(TeamDirectory::new)
    }

    pub fn roster(&mut self, team_id: u64, season: &str) -> Result<Vec<RosterEntry>, ProviderError> {
        if let Some(roster) = self.cache.roster(team_id, season) {
            debug!(team_id, season, "Using cached roster.");
            return Ok(roster.to_vec());
        }
        let roster = self.source.list_roster(team_id, season)?;
        debug!(team_id, season, players = roster.len(), "Fetched roster.");
        self.cache.insert_roster(team_id, season, roster.clone());
        Ok(roster)
    }

    pub fn player_stats(
        &mut self,
        player_id: u64,
        season: &str,
    ) -> Result<Option<RawStats>, ProviderError> {
        if let Some(stats) = self.cache.stats(player_id, season) {
            trace!(player_id, season, "Using cached player stats.");
            return Ok(stats.cloned());
        }
        let stats = self.source.player_season_stats(player_id, season)?;
        self.cache.insert_stats(player_id, season, stats.clone());
        Ok(stats)
    }
}
