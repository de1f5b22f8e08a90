use super::traits::{ProviderError, StatsSource};
use crate::core::models::roster::{RosterEntry, TeamInfo};
use crate::core::models::stats::RawStats;
use std::collections::HashMap;

/// A [`StatsSource`] held entirely in memory.
///
/// Useful for embedding pre-fetched data and for exercising failure paths:
/// individual players or rosters can be set to fail, and the whole source
/// can be marked unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsSource {
    teams: Vec<TeamInfo>,
    rosters: HashMap<(u64, String), Result<Vec<RosterEntry>, String>>,
    stats: HashMap<(u64, String), Result<RawStats, String>>,
    unavailable: Option<String>,
}

impl MemoryStatsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team: TeamInfo) -> Self {
        self.teams.push(team);
        self
    }

    pub fn with_roster(mut self, team_id: u64, season: &str, roster: Vec<RosterEntry>) -> Self {
        self.rosters.insert((team_id, season.to_string()), Ok(roster));
        self
    }

    pub fn with_failing_roster(mut self, team_id: u64, season: &str, message: &str) -> Self {
        self.rosters
            .insert((team_id, season.to_string()), Err(message.to_string()));
        self
    }

    pub fn with_stats(mut self, player_id: u64, season: &str, stats: RawStats) -> Self {
        self.stats.insert((player_id, season.to_string()), Ok(stats));
        self
    }

    pub fn with_failing_stats(mut self, player_id: u64, season: &str, message: &str) -> Self {
        self.stats
            .insert((player_id, season.to_string()), Err(message.to_string()));
        self
    }

    pub fn unavailable(mut self, reason: &str) -> Self {
        self.unavailable = Some(reason.to_string());
        self
    }
}

impl StatsSource for MemoryStatsSource {
    fn check_available(&self) -> Result<(), ProviderError> {
        match &self.unavailable {
            Some(reason) => Err(ProviderError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn list_teams(&self) -> Result<Vec<TeamInfo>, ProviderError> {
        Ok(self.teams.clone())
    }

    fn list_roster(&self, team_id: u64, season: &str) -> Result<Vec<RosterEntry>, ProviderError> {
        match self.rosters.get(&(team_id, season.to_string())) {
            Some(Ok(roster)) => Ok(roster.clone()),
            Some(Err(message)) => Err(ProviderError::Fetch {
                subject: format!("roster for team {team_id} ({season})"),
                message: message.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn player_season_stats(
        &self,
        player_id: u64,
        season: &str,
    ) -> Result<Option<RawStats>, ProviderError> {
        match self.stats.get(&(player_id, season.to_string())) {
            Some(Ok(stats)) => Ok(Some(stats.clone())),
            Some(Err(message)) => Err(ProviderError::Fetch {
                subject: format!("stats for player {player_id} ({season})"),
                message: message.clone(),
            }),
            None => Ok(None),
        }
    }
}
