//! General application configuration.

use serde::{Deserialize, Serialize};

/// Upper bound the ticket service accepts for one page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for `ticket list`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// Page size to request: the explicit value or the default, capped.
    #[must_use]
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, MAX_PAGE_SIZE)
    }
}
