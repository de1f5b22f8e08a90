use courtside::engine::balance::BalanceStrategy;
use courtside::engine::config::{DEFAULT_MAX_ROSTER, DEFAULT_MIN_ROSTER};

pub struct DefaultsConfig {
    pub data_dir: String,
    pub season: String,
    pub min_roster: usize,
    pub max_roster: usize,
    pub pacing_ms: u64,
    pub balance: BalanceStrategy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            season: "2024-25".to_string(),
            min_roster: DEFAULT_MIN_ROSTER,
            max_roster: DEFAULT_MAX_ROSTER,
            pacing_ms: 100,
            balance: BalanceStrategy::Snapshot,
        }
    }
}
