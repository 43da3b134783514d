use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Engine settings, loaded once from `search_config.json` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cache results in a transposition table during each search.
    pub use_table: bool,
    /// Initial capacity of that table.
    pub table_capacity: usize,
}

static CONFIG: OnceLock<SearchConfig> = OnceLock::new();

impl SearchConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "search_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: SearchConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// Process-wide settings, read from disk on first use.
    pub fn get() -> &'static SearchConfig {
        CONFIG.get_or_init(Self::load_or_default)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            use_table: false,
            table_capacity: 1024,
        }
    }
}
