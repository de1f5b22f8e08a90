use super::{open_provider, resolve_request, write_json};
use crate::cli::AssembleArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use courtside::engine::cancel::CancellationToken;
use courtside::engine::progress::ProgressReporter;
use courtside::workflows;
use tracing::info;

pub fn run(args: AssembleArgs) -> Result<()> {
    run_with(args, CliProgressHandler::new())
}

fn run_with(args: AssembleArgs, progress_handler: CliProgressHandler) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.assembly)?;

    let mut provider = open_provider(&config.data_dir)?;
    let directory = provider.team_directory()?;
    let request = resolve_request(&args.team, &directory)?;

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    info!(
        "Assembling {} (id {}) for season {}",
        request.name, request.team_id, config.core_config.season
    );
    let team = workflows::assemble::run(
        &mut provider,
        &request,
        &config.core_config,
        &reporter,
        &CancellationToken::new(),
    )?;

    info!("Assembled {} with {} players.", team.name, team.len());
    write_json(&team, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::commands::fixtures;
    use crate::error::CliError;
    use clap::Parser;
    use courtside::core::models::team::Team;
    use courtside::engine::error::EngineError;

    fn parse(args: &[&str]) -> AssembleArgs {
        match Cli::parse_from(args).command {
            Commands::Assemble(args) => args,
            _ => panic!("Expected 'assemble' subcommand"),
        }
    }

    #[test]
    fn writes_balanced_team_json() {
        let data = fixtures::data_dir();
        let output = data.path().join("team.json");
        let args = parse(&[
            "courtside",
            "assemble",
            "tct",
            "-d",
            data.path().to_str().unwrap(),
            "--pacing-ms",
            "0",
            "-o",
            output.to_str().unwrap(),
        ]);
        run_with(args, CliProgressHandler::hidden()).unwrap();

        let team: Team = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(team.name, "Test City Testers");
        assert_eq!(team.len(), 9);
        assert!(team.covers_all_positions());
        let star = team.players.iter().find(|p| p.name == "Player 100").unwrap();
        assert_eq!(star.attributes.shooting.free_throw, 100);
    }

    #[test]
    fn too_small_roster_is_reported() {
        let data = fixtures::data_dir();
        let args = parse(&[
            "courtside",
            "assemble",
            "2",
            "-d",
            data.path().to_str().unwrap(),
            "--pacing-ms",
            "0",
            "--min-roster",
            "10",
            "--max-roster",
            "12",
        ]);
        let result = run_with(args, CliProgressHandler::hidden());
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::InsufficientRoster { created: 9, .. }))
        ));
    }

    #[test]
    fn unknown_team_is_an_argument_error() {
        let data = fixtures::data_dir();
        let args = parse(&[
            "courtside",
            "assemble",
            "Nowhere Nobodies",
            "-d",
            data.path().to_str().unwrap(),
        ]);
        let result = run_with(args, CliProgressHandler::hidden());
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn missing_data_dir_is_a_provider_error() {
        let data = fixtures::data_dir();
        let missing = data.path().join("missing");
        let args = parse(&[
            "courtside",
            "assemble",
            "TCT",
            "-d",
            missing.to_str().unwrap(),
        ]);
        let result = run_with(args, CliProgressHandler::hidden());
        assert!(matches!(result, Err(CliError::Provider(_))));
    }
}
