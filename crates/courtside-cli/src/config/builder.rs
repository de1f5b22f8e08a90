use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{AssemblyArgs, SourceArgs};
use crate::error::{CliError, Result};
use courtside::core::ratings::modifiers::ModifierTable;
use courtside::engine::balance::BalanceStrategy;
use courtside::engine::config::AssemblyConfigBuilder;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Merges CLI arguments, `--set` values, the config file and built-in
/// defaults, in that order of precedence.
pub fn build_config(args: &AssemblyArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = FileConfig::load_optional(args.source.config.as_deref())?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let data_dir = pick_data_dir(&args.source, file_config.data_dir.take(), &defaults);

    let assembly_file = file_config.assembly.take().unwrap_or_default();
    let season = args
        .season
        .clone()
        .or(assembly_file.season)
        .unwrap_or(defaults.season);
    let min_roster = args
        .min_roster
        .or(assembly_file.min_roster)
        .unwrap_or(defaults.min_roster);
    let max_roster = args
        .max_roster
        .or(assembly_file.max_roster)
        .unwrap_or(defaults.max_roster);
    let pacing_ms = args
        .pacing_ms
        .or(assembly_file.pacing_ms)
        .unwrap_or(defaults.pacing_ms);
    let balance = args
        .balance
        .map(BalanceStrategy::from)
        .or(assembly_file.balance)
        .unwrap_or(defaults.balance);

    let ratings_file = file_config.ratings.take().unwrap_or_default();
    let modifiers = match args.modifiers.clone().or(ratings_file.modifiers) {
        Some(path) => {
            info!("Loading position modifiers from {:?}", path);
            ModifierTable::load(&path)?
        }
        None => ModifierTable::default(),
    };

    let core_config = AssemblyConfigBuilder::new()
        .season(&season)
        .min_roster(min_roster)
        .max_roster(max_roster)
        .pacing(Duration::from_millis(pacing_ms))
        .balance(balance)
        .modifiers(modifiers)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        data_dir,
        core_config,
    })
}

/// The data directory for commands that only need the stats source.
pub fn resolve_data_dir(source: &SourceArgs) -> Result<PathBuf> {
    let defaults = DefaultsConfig::default();
    let file_config = FileConfig::load_optional(source.config.as_deref())?;
    Ok(pick_data_dir(source, file_config.data_dir, &defaults))
}

fn pick_data_dir(
    source: &SourceArgs,
    from_file: Option<PathBuf>,
    defaults: &DefaultsConfig,
) -> PathBuf {
    source
        .data_dir
        .clone()
        .or(from_file)
        .unwrap_or_else(|| PathBuf::from(&defaults.data_dir))
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "data-dir" => config.data_dir = Some(PathBuf::from(value)),
            "assembly.season" => {
                config
                    .assembly
                    .get_or_insert_with(Default::default)
                    .season = Some(value.to_string());
            }
            "assembly.min-roster" => {
                config
                    .assembly
                    .get_or_insert_with(Default::default)
                    .min_roster = Some(parse_value(key, value, "integer")?);
            }
            "assembly.max-roster" => {
                config
                    .assembly
                    .get_or_insert_with(Default::default)
                    .max_roster = Some(parse_value(key, value, "integer")?);
            }
            "assembly.pacing-ms" => {
                config
                    .assembly
                    .get_or_insert_with(Default::default)
                    .pacing_ms = Some(parse_value(key, value, "integer")?);
            }
            "assembly.balance" => {
                let strategy = match value {
                    "snapshot" => BalanceStrategy::Snapshot,
                    "sequential" => BalanceStrategy::Sequential,
                    _ => {
                        return Err(CliError::Config(format!(
                            "Invalid strategy for {}: {} (expected 'snapshot' or 'sequential')",
                            key, value
                        )));
                    }
                };
                config
                    .assembly
                    .get_or_insert_with(Default::default)
                    .balance = Some(strategy);
            }
            "ratings.modifiers" => {
                config
                    .ratings
                    .get_or_insert_with(Default::default)
                    .modifiers = Some(PathBuf::from(value));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
