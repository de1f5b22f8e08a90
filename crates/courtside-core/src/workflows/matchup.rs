use super::assemble::{self, TeamRequest};
use crate::core::io::traits::StatsSource;
use crate::core::models::team::Team;
use crate::engine::cancel::CancellationToken;
use crate::engine::config::AssemblyConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::provider::StatsProvider;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Two assembled teams ready to be simulated against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: Team,
    pub away: Team,
}

/// Assembles the home team, then the away team, sharing one provider cache.
///
/// Fails with the first team's error; no partial matchup is returned.
#[instrument(skip_all, name = "matchup_workflow", fields(home = %home.name, away = %away.name))]
pub fn run<S: StatsSource>(
    provider: &mut StatsProvider<S>,
    home: &TeamRequest,
    away: &TeamRequest,
    config: &AssemblyConfig,
    reporter: &ProgressReporter,
    cancel: &CancellationToken,
) -> Result<Matchup, EngineError> {
    reporter.report(Progress::Message(format!("Assembling {}", home.name)));
    let home = assemble::run(provider, home, config, reporter, cancel)?;
    reporter.report(Progress::Message(format!("Assembling {}", away.name)));
    let away = assemble::run(provider, away, config, reporter, cancel)?;

    info!(home = %home.name, away = %away.name, "Matchup ready.");
    Ok(Matchup { home, away })
}
