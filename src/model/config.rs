use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides for the dark palette, keyed by role name
    #[serde(default)]
    pub dark: HashMap<String, String>,
    /// Hex color overrides for the light palette, keyed by role name
    #[serde(default)]
    pub light: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            dark: HashMap::new(),
            light: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
