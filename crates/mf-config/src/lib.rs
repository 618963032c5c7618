mod api_config;
mod config;
mod error;
mod favorites_config;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use favorites_config::FavoritesConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "MF_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".myflix";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "https://movieappskogaby.herokuapp.com/";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_SESSION_DIR: &str = "session";

const DEFAULT_ROLLBACK_ON_FAILURE: bool = false;

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
