//! General application configuration.

use serde::{Deserialize, Serialize};

/// Steps created with every new scenario.
const fn default_steps() -> u32 {
    10
}

/// Scenarios per listing page.
const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Number of placeholder steps (`Step 1..N`) created with a scenario.
    #[serde(default = "default_steps")]
    pub default_steps: u32,

    /// Default page size for `scenario list`.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_steps: default_steps(),
            page_size: default_page_size(),
        }
    }
}
