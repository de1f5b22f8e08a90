use crate::core::io::traits::StatsSource;
use crate::core::models::player::Player;
use crate::core::models::roster::RosterEntry;
use crate::core::models::team::Team;
use crate::core::ratings::conversion::convert;
use crate::core::ratings::labels::{is_known_label, map_position};
use crate::core::ratings::probabilities::derive;
use crate::engine::balance::balance;
use crate::engine::cancel::CancellationToken;
use crate::engine::config::AssemblyConfig;
use crate::engine::error::{EngineError, PlayerError};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::provider::StatsProvider;
use serde::{Deserialize, Serialize};
use std::thread;
use tracing::{info, instrument, warn};

/// Which team to build and what to call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    pub team_id: u64,
}

impl TeamRequest {
    pub fn new(name: &str, team_id: u64) -> Self {
        Self {
            name: name.to_string(),
            team_id,
        }
    }
}

/// Builds a balanced team from a roster listing.
///
/// Roster entries are converted in the source's order until
/// `config.max_roster` players exist. Entries whose stats cannot be fetched
/// are logged and skipped. Entries with no stats for the season get their
/// position's default profile.
///
/// # Errors
///
/// - [`EngineError::ProviderUnavailable`] if the source fails its availability check.
/// - [`EngineError::RosterFetch`] / [`EngineError::RosterUnavailable`] if no roster can be listed.
/// - [`EngineError::InsufficientRoster`] if fewer than `config.min_roster` players were created.
/// - [`EngineError::Cancelled`] if `cancel` fires; partial work is discarded.
#[instrument(skip_all, name = "assemble_workflow", fields(team = %request.name))]
pub fn run<S: StatsSource>(
    provider: &mut StatsProvider<S>,
    request: &TeamRequest,
    config: &AssemblyConfig,
    reporter: &ProgressReporter,
    cancel: &CancellationToken,
) -> Result<Team, EngineError> {
    let roster = fetch_roster(provider, request, config, reporter)?;
    let mut players = convert_roster(provider, request, &roster, config, reporter, cancel)?;

    if players.len() < config.min_roster {
        return Err(EngineError::InsufficientRoster {
            team: request.name.clone(),
            created: players.len(),
            required: config.min_roster,
        });
    }

    reporter.report(Progress::PhaseStart { name: "Balancing" });
    let report = balance(&mut players, config.balance);
    reporter.report(Progress::PhaseFinish);

    info!(
        players = players.len(),
        moved = report.reassignments.len(),
        counts = ?report.final_counts,
        "Team assembled."
    );
    Ok(Team::new(&request.name, players))
}

fn fetch_roster<S: StatsSource>(
    provider: &mut StatsProvider<S>,
    request: &TeamRequest,
    config: &AssemblyConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<RosterEntry>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Fetching Roster",
    });
    provider
        .check_available()
        .map_err(|source| EngineError::ProviderUnavailable { source })?;

    let roster = provider
        .roster(request.team_id, &config.season)
        .map_err(|source| EngineError::RosterFetch {
            team_id: request.team_id,
            season: config.season.clone(),
            source,
        })?;
    if roster.is_empty() {
        return Err(EngineError::RosterUnavailable {
            team_id: request.team_id,
            season: config.season.clone(),
        });
    }
    info!(entries = roster.len(), season = %config.season, "Roster fetched.");
    reporter.report(Progress::PhaseFinish);
    Ok(roster)
}

fn convert_roster<S: StatsSource>(
    provider: &mut StatsProvider<S>,
    request: &TeamRequest,
    roster: &[RosterEntry],
    config: &AssemblyConfig,
    reporter: &ProgressReporter,
    cancel: &CancellationToken,
) -> Result<Vec<Player>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Converting Players",
    });
    reporter.report(Progress::TaskStart {
        total_steps: roster.len().min(config.max_roster) as u64,
    });

    let mut players = Vec::with_capacity(config.max_roster);
    for (i, entry) in roster.iter().enumerate() {
        if players.len() >= config.max_roster {
            break;
        }
        if cancel.is_cancelled() {
            warn!(created = players.len(), "Assembly cancelled, discarding partial roster.");
            return Err(EngineError::Cancelled {
                team: request.name.clone(),
            });
        }
        if i > 0 && !config.pacing.is_zero() {
            thread::sleep(config.pacing);
        }

        match build_player(provider, entry, config) {
            Ok(player) => {
                reporter.report(Progress::PlayerCreated {
                    name: player.name.clone(),
                });
                players.push(player);
            }
            Err(e) => {
                warn!(player = %entry.name, error = %e, "Skipping roster entry.");
                reporter.report(Progress::PlayerSkipped {
                    name: entry.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    Ok(players)
}

/// Turns one roster entry into a player with attributes and probabilities.
pub fn build_player<S: StatsSource>(
    provider: &mut StatsProvider<S>,
    entry: &RosterEntry,
    config: &AssemblyConfig,
) -> Result<Player, PlayerError> {
    if entry.name.trim().is_empty() {
        return Err(PlayerError::MissingName {
            player_id: entry.player_id,
        });
    }
    if !is_known_label(&entry.position) {
        warn!(
            player = %entry.name,
            label = %entry.position,
            "Unrecognised position label, treating as small forward."
        );
    }
    let position = map_position(&entry.position);
    let stats = provider
        .player_stats(entry.player_id, &config.season)
        .map_err(|source| PlayerError::Fetch {
            player_id: entry.player_id,
            source,
        })?;

    let attributes = convert(stats.as_ref(), position, &config.modifiers);
    let probabilities = derive(&attributes);
    Ok(Player::new(
        &entry.name,
        &entry.position,
        position,
        attributes,
        probabilities,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::memory::MemoryStatsSource;
    use crate::core::models::position::Position;
    use crate::core::models::stats::RawStats;
    use crate::core::ratings::defaults::position_default;
    use std::sync::Mutex;

    const SEASON: &str = "2024-25";
    const TEAM_ID: u64 = 1610612747;

    fn entries(labels: &[&str]) -> Vec<RosterEntry> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| RosterEntry::new(100 + i as u64, &format!("Player {i}"), label))
            .collect()
    }

    fn source_with(labels: &[&str]) -> MemoryStatsSource {
        MemoryStatsSource::new().with_roster(TEAM_ID, SEASON, entries(labels))
    }

    fn request() -> TeamRequest {
        TeamRequest::new("Los Angeles Lakers", TEAM_ID)
    }

    fn assemble(source: MemoryStatsSource) -> Result<Team, EngineError> {
        let mut provider = StatsProvider::new(source);
        run(
            &mut provider,
            &request(),
            &AssemblyConfig::for_season(SEASON),
            &ProgressReporter::new(),
            &CancellationToken::new(),
        )
    }

    #[test]
    fn full_roster_is_capped_and_balanced() {
        let labels = ["G", "G", "F", "F", "F", "F-C", "C", "G-F", "PG", "SF", "C", "F", "G", "PF", "C"];
        let team = assemble(source_with(&labels)).unwrap();

        assert_eq!(team.name, "Los Angeles Lakers");
        assert_eq!(team.len(), 12);
        assert!(team.covers_all_positions());
        let names: Vec<&str> = team.players.iter().map(|p| p.name.as_str()).collect();
        assert!(!names.contains(&"Player 12"));
    }

    #[test]
    fn players_without_stats_get_position_defaults() {
        let team = assemble(source_with(&["PG", "SG", "SF", "PF", "C", "PG", "SG", "SF"])).unwrap();
        let center = team.players_at(Position::Center).next().unwrap();
        assert_eq!(center.attributes, position_default(Position::Center));
        assert_eq!(center.probabilities, derive(&center.attributes));
    }

    #[test]
    fn stats_flow_into_attributes() {
        let stats = RawStats {
            points_per_game: Some(30.0),
            field_goal_pct: Some(0.50),
            ..Default::default()
        };
        let source = source_with(&["PG", "SG", "SF", "PF", "C", "PG", "SG", "SF"])
            .with_stats(100, SEASON, stats);
        let team = assemble(source).unwrap();
        let star = team.players.iter().find(|p| p.name == "Player 0").unwrap();
        assert_eq!(star.attributes.shooting.close, 100);
        assert_eq!(star.attributes.shooting.mid, 100);
    }

    #[test]
    fn unrecognised_label_becomes_small_forward() {
        let mut provider = StatsProvider::new(MemoryStatsSource::new());
        let entry = RosterEntry::new(7, "Test Swingman", "Swingman");
        let player =
            build_player(&mut provider, &entry, &AssemblyConfig::for_season(SEASON)).unwrap();
        assert_eq!(player.position(), Position::SmallForward);
        assert_eq!(player.listed_position(), "Swingman");
        assert_eq!(player.attributes, position_default(Position::SmallForward));
    }

    #[test]
    fn failing_players_are_skipped() {
        let labels = ["PG", "SG", "SF", "PF", "C", "PG", "SG", "SF", "PF", "C"];
        let source = source_with(&labels)
            .with_failing_stats(101, SEASON, "timeout")
            .with_failing_stats(103, SEASON, "timeout");
        let team = assemble(source).unwrap();
        assert_eq!(team.len(), 8);
        assert!(team.players.iter().all(|p| p.name != "Player 1" && p.name != "Player 3"));
    }

    #[test]
    fn seven_players_are_not_enough() {
        let labels = ["PG", "SG", "SF", "PF", "C", "PG", "SG", "SF"];
        let source = source_with(&labels).with_failing_stats(102, SEASON, "timeout");
        let err = assemble(source).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientRoster {
                created: 7,
                required: 8,
                ..
            }
        ));
    }

    #[test]
    fn nameless_entries_are_skipped() {
        let mut roster = entries(&["PG", "SG", "SF", "PF", "C", "PG", "SG", "SF", "PF"]);
        roster[4].name = "  ".to_string();
        let source = MemoryStatsSource::new().with_roster(TEAM_ID, SEASON, roster);
        let team = assemble(source).unwrap();
        assert_eq!(team.len(), 8);
        assert!(team.covers_all_positions());
    }

    #[test]
    fn empty_roster_is_unavailable() {
        let err = assemble(MemoryStatsSource::new()).unwrap_err();
        assert!(matches!(err, EngineError::RosterUnavailable { team_id: TEAM_ID, .. }));
    }

    #[test]
    fn roster_errors_are_fatal() {
        let source = MemoryStatsSource::new().with_failing_roster(TEAM_ID, SEASON, "503");
        let err = assemble(source).unwrap_err();
        assert!(matches!(err, EngineError::RosterFetch { .. }));
    }

    #[test]
    fn unavailable_provider_is_fatal() {
        let source = source_with(&["PG"; 10]).unavailable("not installed");
        let err = assemble(source).unwrap_err();
        assert!(matches!(err, EngineError::ProviderUnavailable { .. }));
    }

    #[test]
    fn cancelled_token_stops_assembly() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut provider = StatsProvider::new(source_with(&["PG"; 10]));
        let err = run(
            &mut provider,
            &request(),
            &AssemblyConfig::for_season(SEASON),
            &ProgressReporter::new(),
            &cancel,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Cancelled { .. }));
    }

    #[test]
    fn second_assembly_is_served_from_cache() {
        let mut provider = StatsProvider::new(source_with(&["PG"; 9]));
        let config = AssemblyConfig::for_season(SEASON);
        let first = run(
            &mut provider,
            &request(),
            &config,
            &ProgressReporter::new(),
            &CancellationToken::new(),
        )
        .unwrap();
        assert_eq!(provider.cache().roster_count(), 1);
        assert_eq!(provider.cache().stats_count(), 9);

        let second = run(
            &mut provider,
            &request(),
            &config,
            &ProgressReporter::new(),
            &CancellationToken::new(),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn progress_reports_every_entry() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let source = source_with(&["PG", "SG", "SF", "PF", "C", "PG", "SG", "SF", "PF"])
            .with_failing_stats(104, SEASON, "timeout");
        let mut provider = StatsProvider::new(source);
        run(
            &mut provider,
            &request(),
            &AssemblyConfig::for_season(SEASON),
            &reporter,
            &CancellationToken::new(),
        )
        .unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        let created = events
            .iter()
            .filter(|e| matches!(e, Progress::PlayerCreated { .. }))
            .count();
        let skipped = events
            .iter()
            .filter(|e| matches!(e, Progress::PlayerSkipped { .. }))
            .count();
        assert_eq!((created, skipped), (8, 1));
        assert!(events.contains(&Progress::TaskStart { total_steps: 9 }));
    }
}
