use crate::core::models::roster::RosterEntry;
use crate::core::models::stats::RawStats;
use std::collections::HashMap;

/// Results already fetched from a stats source.
///
/// Entries never expire; drop or [`clear`](StatsCache::clear) the cache to
/// force fresh lookups.
#[derive(Debug, Default, Clone)]
pub struct StatsCache {
    rosters: HashMap<(u64, String), Vec<RosterEntry>>,
    stats: HashMap<(u64, String), Option<RawStats>>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self, team_id: u64, season: &str) -> Option<&[RosterEntry]> {
        self.rosters
            .get(&(team_id, season.to_string()))
            .map(Vec::as_slice)
    }

    pub fn insert_roster(&mut self, team_id: u64, season: &str, roster: Vec<RosterEntry>) {
        self.rosters.insert((team_id, season.to_string()), roster);
    }

    /// `Some(None)` is a cached "no stats for this season".
    pub fn stats(&self, player_id: u64, season: &str) -> Option<Option<&RawStats>> {
        self.stats
            .get(&(player_id, season.to_string()))
            .map(Option::as_ref)
    }

    pub fn insert_stats(&mut self, player_id: u64, season: &str, stats: Option<RawStats>) {
        self.stats.insert((player_id, season.to_string()), stats);
    }

    pub fn roster_count(&self) -> usize {
        self.rosters.len()
    }

    pub fn stats_count(&self) -> usize {
        self.stats.len()
    }

    pub fn clear(&mut self) {
        self.rosters.clear();
        self.stats.clear();
    }
}
