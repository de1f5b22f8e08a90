use serde::{Deserialize, Serialize};

/// Per-game averages and season shooting ratios for one player-season.
///
/// Every field is optional: a provider may know a player's scoring but not
/// their free-throw percentage. Missing values are filled in during
/// conversion, see [`crate::core::ratings::conversion::StatLine`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStats {
    pub games_played: Option<u32>,
    pub minutes_per_game: Option<f64>,
    pub points_per_game: Option<f64>,
    pub assists_per_game: Option<f64>,
    pub rebounds_per_game: Option<f64>,
    pub steals_per_game: Option<f64>,
    pub blocks_per_game: Option<f64>,
    pub turnovers_per_game: Option<f64>,
    pub field_goal_pct: Option<f64>,
    pub three_point_pct: Option<f64>,
    pub free_throw_pct: Option<f64>,
}

/// Raw season totals as published by a statistics source.
///
/// Percentages are already ratios in `[0, 1]`; counting stats are totals
/// over `games_played`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonTotals {
    pub games_played: u32,
    pub minutes: f64,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub field_goal_pct: Option<f64>,
    pub three_point_pct: Option<f64>,
    pub free_throw_pct: Option<f64>,
}

impl SeasonTotals {
    /// Divides totals by games played. A zero game count is treated as one game.
    pub fn per_game(&self) -> RawStats {
        let games = f64::from(self.games_played.max(1));
        RawStats {
            games_played: Some(self.games_played),
            minutes_per_game: Some(self.minutes / games),
            points_per_game: Some(self.points / games),
            assists_per_game: Some(self.assists / games),
            rebounds_per_game: Some(self.rebounds / games),
            steals_per_game: Some(self.steals / games),
            blocks_per_game: Some(self.blocks / games),
            turnovers_per_game: Some(self.turnovers / games),
            field_goal_pct: self.field_goal_pct,
            three_point_pct: self.three_point_pct,
            free_throw_pct: self.free_throw_pct,
        }
    }
}
