use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User-configurable settings for the domus CLI.
///
/// The ledger location is explicit configuration rather than ambient
/// environment state, so the forecasting core stays testable without any
/// real store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Root directory holding one `<building>.json` ledger file per
    /// building. Defaults to a platform data directory.
    pub data_root: Option<PathBuf>,

    #[serde(default = "Config::default_horizon_months")]
    /// Months forecast past the last observed month.
    pub horizon_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: None,
            horizon_months: Self::default_horizon_months(),
        }
    }
}

impl Config {
    pub fn default_horizon_months() -> u32 {
        6
    }

    /// Resolves the ledger data root, falling back to the platform data
    /// directory.
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("domus").join("buildings")
    }
}
