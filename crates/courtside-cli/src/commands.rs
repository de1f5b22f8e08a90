pub mod assemble;
pub mod matchup;
pub mod teams;

use crate::error::{CliError, Result};
use crate::utils::parser;
use courtside::core::io::csv::CsvStatsSource;
use courtside::core::models::roster::TeamDirectory;
use courtside::engine::provider::StatsProvider;
use courtside::workflows::assemble::TeamRequest;
use serde::Serialize;
use std::path::Path;
use tracing::info;

fn open_provider(data_dir: &Path) -> Result<StatsProvider<CsvStatsSource>> {
    info!("Opening stats tables in {:?}", data_dir);
    let source = CsvStatsSource::open(data_dir)?;
    Ok(StatsProvider::new(source))
}

fn resolve_request(input: &str, directory: &TeamDirectory) -> Result<TeamRequest> {
    let selector =
        parser::parse_team_selector(input).map_err(|e| CliError::Argument(e.to_string()))?;
    parser::resolve_team(&selector, directory).map_err(|e| CliError::Argument(e.to_string()))
}

/// Pretty JSON to `output`, or to stdout when no path is given.
fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote {:?}", path);
            eprintln!("✓ Written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const TEAMS: &str = "\
id,full_name,abbreviation,city,nickname
1,Test City Testers,TCT,Test City,Testers
2,Mock Town Mockers,MTM,Mock Town,Mockers
";

    /// Two teams of nine players each; only the first player of each has stats.
    pub(crate) fn data_dir() -> TempDir {
        let labels = ["PG", "SG", "SF", "PF", "C", "G", "F", "F-C", "G-F"];
        let mut rosters =
            String::from("team_id,season,player_id,player,position,height,weight,age,exp,num\n");
        for team_id in [1u64, 2] {
            for (i, label) in labels.iter().enumerate() {
                let player_id = team_id * 100 + i as u64;
                rosters.push_str(&format!(
                    "{team_id},2024-25,{player_id},Player {player_id},{label},6-6,210,25,3,{i}\n"
                ));
            }
        }
        let totals = "\
player_id,season,gp,min,pts,ast,reb,stl,blk,tov,fg_pct,fg3_pct,ft_pct
100,2024-25,82,2952,2460,820,328,164,41,200,0.50,0.40,0.85
200,2024-25,70,2100,1050,280,560,70,105,120,0.55,0.30,0.70
";

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("teams.csv"), TEAMS).unwrap();
        fs::write(dir.path().join("rosters.csv"), rosters).unwrap();
        fs::write(dir.path().join("season_totals.csv"), totals).unwrap();
        dir
    }
}
