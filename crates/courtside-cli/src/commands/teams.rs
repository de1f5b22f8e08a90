use super::open_provider;
use crate::cli::TeamsArgs;
use crate::config::resolve_data_dir;
use crate::error::Result;
use courtside::core::models::roster::{FEATURED_TEAM_NAMES, TeamInfo};
use std::io::Write;

pub fn run(args: TeamsArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_teams(&args, &mut stdout)
}

fn write_teams(args: &TeamsArgs, out: &mut impl Write) -> Result<()> {
    let data_dir = resolve_data_dir(&args.source)?;
    let provider = open_provider(&data_dir)?;
    let directory = provider.team_directory()?;

    let teams: Vec<TeamInfo> = if args.featured {
        directory.featured(&FEATURED_TEAM_NAMES)
    } else {
        directory.teams().to_vec()
    };

    for team in &teams {
        writeln!(out, "{:>12}  {:<4} {}", team.id, team.abbreviation, team.name)?;
    }
    if teams.is_empty() {
        eprintln!("No teams listed in {}", data_dir.display());
    }
    Ok(())
}
