use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS,
    MAX_API_TIMEOUT_SECS, MIN_API_TIMEOUT_SECS,
};

use serde::Deserialize;
use url::Url;

/// Remote movie API endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::api(format!(
                "api.base_url '{}' is not a valid URL: {e}",
                self.base_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::api(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::api(format!(
                "api.base_url cannot be used as a base: '{}'",
                self.base_url
            )));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::api(
                "api.base_url cannot carry a query string or fragment",
            ));
        }

        if self.timeout_secs < MIN_API_TIMEOUT_SECS || self.timeout_secs > MAX_API_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
