use super::traits::{ProviderError, StatsSource};
use crate::core::models::roster::{RosterEntry, TeamInfo};
use crate::core::models::stats::{RawStats, SeasonTotals};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const TEAMS_FILE: &str = "teams.csv";
pub const ROSTERS_FILE: &str = "rosters.csv";
pub const SEASON_TOTALS_FILE: &str = "season_totals.csv";

type SeasonKey = (u64, String);
type Keyed<T> = HashMap<SeasonKey, Result<Vec<T>, String>>;

#[derive(Debug, Deserialize)]
struct TeamRow {
    id: u64,
    full_name: String,
    abbreviation: String,
    city: String,
    nickname: String,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    player_id: u64,
    player: String,
    position: String,
    height: Option<String>,
    weight: Option<String>,
    age: Option<u32>,
    exp: Option<String>,
    num: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeasonTotalsRow {
    gp: u32,
    min: f64,
    pts: f64,
    ast: f64,
    reb: f64,
    stl: f64,
    blk: f64,
    #[serde(default)]
    tov: f64,
    fg_pct: Option<f64>,
    fg3_pct: Option<f64>,
    ft_pct: Option<f64>,
}

impl From<TeamRow> for TeamInfo {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id,
            name: row.full_name,
            abbreviation: row.abbreviation,
            city: row.city,
            nickname: row.nickname,
        }
    }
}

impl From<RosterRow> for RosterEntry {
    fn from(row: RosterRow) -> Self {
        Self {
            player_id: row.player_id,
            name: row.player,
            position: row.position,
            height: row.height,
            weight: row.weight,
            age: row.age,
            experience: row.exp,
            jersey_number: row.num,
        }
    }
}

impl From<SeasonTotalsRow> for SeasonTotals {
    fn from(row: SeasonTotalsRow) -> Self {
        Self {
            games_played: row.gp,
            minutes: row.min,
            points: row.pts,
            assists: row.ast,
            rebounds: row.reb,
            steals: row.stl,
            blocks: row.blk,
            turnovers: row.tov,
            field_goal_pct: row.fg_pct,
            three_point_pct: row.fg3_pct,
            free_throw_pct: row.ft_pct,
        }
    }
}

/// Locations of the exported statistics tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub teams: Option<PathBuf>,
    pub rosters: PathBuf,
    pub season_totals: PathBuf,
}

impl SourcePaths {
    /// Standard file names inside `dir`. The teams table is optional.
    pub fn in_dir(dir: &Path) -> Self {
        let teams = dir.join(TEAMS_FILE);
        Self {
            teams: teams.exists().then_some(teams),
            rosters: dir.join(ROSTERS_FILE),
            season_totals: dir.join(SEASON_TOTALS_FILE),
        }
    }
}

/// A [`StatsSource`] backed by CSV exports of rosters and season totals.
///
/// Rows that fail to parse do not fail the whole file: the affected team
/// roster or player season is recorded as a fetch error and reported only
/// when that team or player is requested.
#[derive(Debug, Clone, Default)]
pub struct CsvStatsSource {
    teams: Vec<TeamInfo>,
    rosters: Keyed<RosterEntry>,
    season_totals: Keyed<SeasonTotals>,
}

impl CsvStatsSource {
    pub fn open(dir: &Path) -> Result<Self, ProviderError> {
        if !dir.is_dir() {
            return Err(ProviderError::Unavailable(format!(
                "data directory '{}' does not exist",
                dir.display()
            )));
        }
        Self::from_paths(&SourcePaths::in_dir(dir))
    }

    pub fn from_paths(paths: &SourcePaths) -> Result<Self, ProviderError> {
        for required in [&paths.rosters, &paths.season_totals] {
            if !required.is_file() {
                return Err(ProviderError::Unavailable(format!(
                    "required table '{}' is missing",
                    required.display()
                )));
            }
        }

        let teams = match &paths.teams {
            Some(path) => read_teams(path)?,
            None => Vec::new(),
        };
        let rosters = read_keyed::<RosterRow, RosterEntry>(&paths.rosters, "team_id")?;
        let season_totals =
            read_keyed::<SeasonTotalsRow, SeasonTotals>(&paths.season_totals, "player_id")?;

        info!(
            teams = teams.len(),
            rosters = rosters.len(),
            player_seasons = season_totals.len(),
            "Loaded CSV statistics tables."
        );
        Ok(Self {
            teams,
            rosters,
            season_totals,
        })
    }
}

impl StatsSource for CsvStatsSource {
    fn list_teams(&self) -> Result<Vec<TeamInfo>, ProviderError> {
        Ok(self.teams.clone())
    }

    fn list_roster(&self, team_id: u64, season: &str) -> Result<Vec<RosterEntry>, ProviderError> {
        match self.rosters.get(&(team_id, season.to_string())) {
            Some(Ok(entries)) => Ok(entries.clone()),
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
        match self.season_totals.get(&(player_id, season.to_string())) {
            Some(Ok(rows)) => Ok(rows.first().map(SeasonTotals::per_game)),
            Some(Err(message)) => Err(ProviderError::Fetch {
                subject: format!("stats for player {player_id} ({season})"),
                message: message.clone(),
            }),
            None => Ok(None),
        }
    }
}

fn csv_error(path: &Path, source: csv::Error) -> ProviderError {
    ProviderError::Csv {
        path: path.to_string_lossy().to_string(),
        source,
    }
}

fn read_teams(path: &Path) -> Result<Vec<TeamInfo>, ProviderError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
    reader
        .deserialize::<TeamRow>()
        .map(|row| row.map(TeamInfo::from).map_err(|e| csv_error(path, e)))
        .collect()
}

/// Reads a table whose rows are keyed by an id column plus `season`.
fn read_keyed<R, T>(path: &Path, id_column: &str) -> Result<Keyed<T>, ProviderError>
where
    R: DeserializeOwned,
    T: From<R>,
{
    // Ragged rows must reach per-row deserialization instead of aborting the read.
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ProviderError::Fetch {
                subject: path.to_string_lossy().to_string(),
                message: format!("missing required column '{name}'"),
            })
    };
    let id_idx = column(id_column)?;
    let season_idx = column("season")?;

    let mut table: Keyed<T> = HashMap::new();
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %path.display(), row = line + 1, error = %e, "Skipping unreadable row.");
                continue;
            }
        };
        let Some(id) = record.get(id_idx).and_then(|v| v.parse::<u64>().ok()) else {
            warn!(
                path = %path.display(),
                row = line + 1,
                "Skipping row with unreadable '{}' value.",
                id_column
            );
            continue;
        };
        let season = record.get(season_idx).unwrap_or_default().to_string();
        let parsed = record.deserialize::<R>(Some(&headers));

        let entry = table.entry((id, season)).or_insert_with(|| Ok(Vec::new()));
        match parsed {
            Ok(row) => {
                if let Ok(rows) = entry {
                    rows.push(T::from(row));
                }
            }
            Err(e) => {
                if entry.is_ok() {
                    debug!(path = %path.display(), row = line + 1, error = %e, "Malformed row.");
                    *entry = Err(format!("malformed row {}: {}", line + 1, e));
                }
            }
        }
    }
    Ok(table)
}
