use super::balance::BalanceStrategy;
use crate::core::ratings::modifiers::ModifierTable;
use std::time::Duration;
use thiserror::Error;

/// Smallest team the game engine accepts; also one player per slot.
pub const MIN_PLAYABLE_ROSTER: usize = 5;
pub const DEFAULT_MIN_ROSTER: usize = 8;
pub const DEFAULT_MAX_ROSTER: usize = 12;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyConfig {
    pub season: String,
    pub min_roster: usize,
    pub max_roster: usize,
    /// Pause between consecutive player lookups.
    pub pacing: Duration,
    pub balance: BalanceStrategy,
    pub modifiers: ModifierTable,
}

impl AssemblyConfig {
    /// Standard 8..=12 roster limits for `season`, no pacing.
    pub fn for_season(season: &str) -> Self {
        Self {
            season: season.to_string(),
            min_roster: DEFAULT_MIN_ROSTER,
            max_roster: DEFAULT_MAX_ROSTER,
            pacing: Duration::ZERO,
            balance: BalanceStrategy::default(),
            modifiers: ModifierTable::default(),
        }
    }
}

#[derive(Default)]
pub struct AssemblyConfigBuilder {
    season: Option<String>,
    min_roster: Option<usize>,
    max_roster: Option<usize>,
    pacing: Option<Duration>,
    balance: Option<BalanceStrategy>,
    modifiers: Option<ModifierTable>,
}

impl AssemblyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn season(mut self, season: &str) -> Self {
        self.season = Some(season.to_string());
        self
    }
    pub fn min_roster(mut self, size: usize) -> Self {
        self.min_roster = Some(size);
        self
    }
    pub fn max_roster(mut self, size: usize) -> Self {
        self.max_roster = Some(size);
        self
    }
    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.pacing = Some(pacing);
        self
    }
    pub fn balance(mut self, strategy: BalanceStrategy) -> Self {
        self.balance = Some(strategy);
        self
    }
    pub fn modifiers(mut self, table: ModifierTable) -> Self {
        self.modifiers = Some(table);
        self
    }

    pub fn build(self) -> Result<AssemblyConfig, ConfigError> {
        let season = self
            .season
            .ok_or(ConfigError::MissingParameter("season"))?;
        if season.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "season",
                reason: "must not be empty".to_string(),
            });
        }
        let min_roster = self
            .min_roster
            .ok_or(ConfigError::MissingParameter("min_roster"))?;
        let max_roster = self
            .max_roster
            .ok_or(ConfigError::MissingParameter("max_roster"))?;

        if min_roster < MIN_PLAYABLE_ROSTER {
            return Err(ConfigError::InvalidParameter {
                name: "min_roster",
                reason: format!("must be at least {MIN_PLAYABLE_ROSTER}, got {min_roster}"),
            });
        }
        if max_roster < min_roster {
            return Err(ConfigError::InvalidParameter {
                name: "max_roster",
                reason: format!("must not be below min_roster ({min_roster}), got {max_roster}"),
            });
        }

        Ok(AssemblyConfig {
            season,
            min_roster,
            max_roster,
            pacing: self.pacing.unwrap_or_default(),
            balance: self.balance.unwrap_or_default(),
            modifiers: self.modifiers.unwrap_or_default(),
        })
    }
}
