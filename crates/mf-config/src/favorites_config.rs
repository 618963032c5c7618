use crate::DEFAULT_ROLLBACK_ON_FAILURE;

use serde::Deserialize;

/// How optimistic favorite updates settle when the request fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Restore the cached favorites when the add/remove request fails.
    /// Off by default: the cached list keeps the optimistic change.
    pub rollback_on_failure: bool,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            rollback_on_failure: DEFAULT_ROLLBACK_ON_FAILURE,
        }
    }
}
