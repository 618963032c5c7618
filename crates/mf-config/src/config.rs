use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    FavoritesConfig, LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub favorites: FavoritesConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MF_CONFIG_DIR env var, else use ~/.myflix/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply MF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MF_CONFIG_DIR env var > ~/.myflix/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains(['/', '\\']) || file == "..")
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a plain file name, got '{file}'"
            )));
        }

        Ok(())
    }

    /// Absolute path of the session storage directory.
    pub fn session_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs session contents).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!("  session: {}", self.session.dir);
        info!(
            "  favorites: rollback_on_failure={}",
            self.favorites.rollback_on_failure
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("MF_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("MF_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_string("MF_SESSION_DIR", &mut self.session.dir);

        // Favorites
        Self::apply_env_bool(
            "MF_FAVORITES_ROLLBACK",
            &mut self.favorites.rollback_on_failure,
        );

        // Logging
        Self::apply_env_parse("MF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MF_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
