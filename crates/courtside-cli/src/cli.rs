use clap::{Args, Parser, Subcommand, ValueEnum};
use courtside::engine::balance::BalanceStrategy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Courtside Contributors",
    version,
    about = "Courtside CLI - Convert real basketball statistics into balanced simulation rosters.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build one team from its roster and write it as JSON.
    Assemble(AssembleArgs),
    /// Build a home and an away team for a game.
    Matchup(MatchupArgs),
    /// List the teams known to the stats source.
    Teams(TeamsArgs),
}

/// Where the stats come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory holding teams.csv, rosters.csv and season_totals.csv.
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Overrides for the assembly settings of the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct AssemblyArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Season to read rosters and stats for (e.g. 2024-25).
    #[arg(short, long, value_name = "SEASON")]
    pub season: Option<String>,

    /// Fewest players a team may end up with.
    #[arg(long, value_name = "INT")]
    pub min_roster: Option<usize>,

    /// Most players taken from a roster.
    #[arg(long, value_name = "INT")]
    pub max_roster: Option<usize>,

    /// Pause between player lookups, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub pacing_ms: Option<u64>,

    /// How empty position slots are filled.
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    pub balance: Option<BalanceArg>,

    /// TOML file overriding the built-in position modifiers.
    #[arg(short, long, value_name = "PATH")]
    pub modifiers: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S assembly.season=2023-24
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceArg {
    Snapshot,
    Sequential,
}

impl From<BalanceArg> for BalanceStrategy {
    fn from(arg: BalanceArg) -> Self {
        match arg {
            BalanceArg::Snapshot => BalanceStrategy::Snapshot,
            BalanceArg::Sequential => BalanceStrategy::Sequential,
        }
    }
}

/// Arguments for the `assemble` subcommand.
#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Team to build: full name, abbreviation or numeric id.
    #[arg(required = true, value_name = "TEAM")]
    pub team: String,

    #[command(flatten)]
    pub assembly: AssemblyArgs,

    /// Write the team JSON here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `matchup` subcommand.
#[derive(Args, Debug)]
pub struct MatchupArgs {
    /// Home team: full name, abbreviation or numeric id.
    #[arg(required = true, value_name = "HOME")]
    pub home: String,

    /// Away team: full name, abbreviation or numeric id.
    #[arg(required = true, value_name = "AWAY")]
    pub away: String,

    #[command(flatten)]
    pub assembly: AssemblyArgs,

    /// Write the matchup JSON here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `teams` subcommand.
#[derive(Args, Debug)]
pub struct TeamsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only list the featured teams, in their preferred order.
    #[arg(long)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assemble_accepts_overrides() {
        let cli = Cli::parse_from([
            "courtside",
            "-vv",
            "assemble",
            "LAL",
            "--data-dir",
            "stats",
            "--season",
            "2023-24",
            "--balance",
            "sequential",
            "-S",
            "assembly.pacing-ms=0",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Assemble(args) = cli.command else {
            panic!("Expected 'assemble' subcommand");
        };
        assert_eq!(args.team, "LAL");
        assert_eq!(args.assembly.source.data_dir, Some(PathBuf::from("stats")));
        assert_eq!(args.assembly.season.as_deref(), Some("2023-24"));
        assert_eq!(args.assembly.balance, Some(BalanceArg::Sequential));
        assert_eq!(args.assembly.set_values, vec!["assembly.pacing-ms=0"]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["courtside", "-q", "-v", "teams"]);
        assert!(result.is_err());
    }

    #[test]
    fn matchup_requires_two_teams() {
        assert!(Cli::try_parse_from(["courtside", "matchup", "BOS"]).is_err());
        assert!(Cli::try_parse_from(["courtside", "matchup", "BOS", "LAL"]).is_ok());
    }
}
