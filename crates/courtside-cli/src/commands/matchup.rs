use super::{open_provider, resolve_request, write_json};
use crate::cli::MatchupArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use courtside::engine::cancel::CancellationToken;
use courtside::engine::progress::ProgressReporter;
use courtside::workflows;
use tracing::info;

pub fn run(args: MatchupArgs) -> Result<()> {
    run_with(args, CliProgressHandler::new())
}

fn run_with(args: MatchupArgs, progress_handler: CliProgressHandler) -> Result<()> {
    let config = build_config(&args.assembly)?;

    let mut provider = open_provider(&config.data_dir)?;
    let directory = provider.team_directory()?;
    let home = resolve_request(&args.home, &directory)?;
    let away = resolve_request(&args.away, &directory)?;
    if home.team_id == away.team_id {
        return Err(CliError::Argument(format!(
            "A team cannot play itself ('{}').",
            home.name
        )));
    }

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let matchup = workflows::matchup::run(
        &mut provider,
        &home,
        &away,
        &config.core_config,
        &reporter,
        &CancellationToken::new(),
    )?;

    info!(
        "Matchup ready: {} ({} players) vs {} ({} players).",
        matchup.home.name,
        matchup.home.len(),
        matchup.away.name,
        matchup.away.len()
    );
    write_json(&matchup, args.output.as_deref())
}
