use serde::{Deserialize, Serialize};

use super::task::{Category, Priority};

/// Configuration from config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}

/// Values applied by `add` when the matching flag is omitted
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Pending tasks older than this many days count as stale
    #[serde(default = "default_stale_days")]
    pub stale_days: i64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            stale_days: default_stale_days(),
        }
    }
}

fn default_stale_days() -> i64 {
    7
}
