use serde::{Deserialize, Serialize};

/// Teams shown first when a user browses the directory.
pub const FEATURED_TEAM_NAMES: [&str; 16] = [
    "Los Angeles Lakers",
    "Golden State Warriors",
    "Boston Celtics",
    "Miami Heat",
    "Chicago Bulls",
    "New York Knicks",
    "Brooklyn Nets",
    "Philadelphia 76ers",
    "Milwaukee Bucks",
    "Denver Nuggets",
    "Phoenix Suns",
    "Dallas Mavericks",
    "Toronto Raptors",
    "Los Angeles Clippers",
    "Memphis Grizzlies",
    "Atlanta Hawks",
];

const DEFAULT_AGE: u32 = 25;

/// One line of a team roster listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: u64,
    pub name: String,
    pub position: String,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub age: Option<u32>,
    pub experience: Option<String>,
    pub jersey_number: Option<String>,
}

impl RosterEntry {
    pub fn new(player_id: u64, name: &str, position: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            position: position.to_string(),
            height: None,
            weight: None,
            age: None,
            experience: None,
            jersey_number: None,
        }
    }

    pub fn age_or_default(&self) -> u32 {
        self.age.unwrap_or(DEFAULT_AGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: u64,
    pub name: String,
    pub abbreviation: String,
    pub city: String,
    pub nickname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDirectory {
    teams: Vec<TeamInfo>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamInfo>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[TeamInfo] {
        &self.teams
    }

    pub fn find_by_id(&self, id: u64) -> Option<&TeamInfo> {
        self.teams.iter().find(|team| team.id == id)
    }

    /// Matches the full name exactly, or the abbreviation ignoring case.
    pub fn find(&self, name_or_abbreviation: &str) -> Option<&TeamInfo> {
        let query = name_or_abbreviation.trim();
        self.teams
            .iter()
            .find(|team| team.name == query)
            .or_else(|| {
                self.teams
                    .iter()
                    .find(|team| team.abbreviation.eq_ignore_ascii_case(query))
            })
    }

    /// Teams named in `preferred`, in that order. Unknown names are skipped.
    pub fn featured(&self, preferred: &[&str]) -> Vec<TeamInfo> {
        preferred
            .iter()
            .filter_map(|name| self.teams.iter().find(|team| team.name == *name))
            .cloned()
            .collect()
    }
}
