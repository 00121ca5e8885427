mod bot_config;
mod config;
mod database_config;
mod error;
mod handler_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use bot_config::BotConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use handler_config::HandlerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "TZD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tzd";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Guided selector token lifetime
pub const DEFAULT_SELECTION_TTL_SECS: u64 = 900;
pub const MIN_SELECTION_TTL_SECS: u64 = 1;
pub const MAX_SELECTION_TTL_SECS: u64 = 86_400;
pub const DEFAULT_SELECTION_SWEEP_SECS: u64 = 60;
