//! Command-line surface: argument parsing, wiring, and report printing.

use std::path::PathBuf;

use thiserror::Error;

use domus_config::{ConfigError, ConfigManager};
use domus_core::{CoreError, ForecastService, SystemClock};
use domus_store_json::JsonExpenseStore;

const USAGE: &str = "usage: domus <building-id> [--data-root DIR] [--horizon N]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n{USAGE}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub building_id: String,
    pub data_root: Option<PathBuf>,
    pub horizon: Option<u32>,
}

impl CliArgs {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut parsed = CliArgs::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-root" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--data-root needs a directory".into()))?;
                    parsed.data_root = Some(PathBuf::from(value));
                }
                "--horizon" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--horizon needs a month count".into()))?;
                    let months = value.parse().map_err(|_| {
                        CliError::Usage(format!("invalid horizon `{value}`, expected months"))
                    })?;
                    parsed.horizon = Some(months);
                }
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option `{flag}`")));
                }
                building if parsed.building_id.is_empty() => {
                    parsed.building_id = building.to_string();
                }
                extra => {
                    return Err(CliError::Usage(format!("unexpected argument `{extra}`")));
                }
            }
        }

        if parsed.building_id.is_empty() {
            return Err(CliError::Usage("missing building identifier".into()));
        }
        Ok(parsed)
    }
}

/// Parses process arguments and prints the forecast report as JSON.
pub fn run_cli() -> Result<(), CliError> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    run(args)
}

pub fn run(args: CliArgs) -> Result<(), CliError> {
    let config = ConfigManager::default_location()?.load()?;
    let data_root = args
        .data_root
        .unwrap_or_else(|| config.resolve_data_root());
    let horizon = args.horizon.unwrap_or(config.horizon_months);

    tracing::info!(building = %args.building_id, data_root = %data_root.display(), "running forecast");

    let store = JsonExpenseStore::new(data_root)?;
    let report =
        ForecastService::run_with_horizon(&store, &SystemClock, &args.building_id, horizon)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
