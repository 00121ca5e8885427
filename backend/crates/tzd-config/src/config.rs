use crate::{
    BotConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, HandlerConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub bot: BotConfig,
    pub handler: HandlerConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TZD_CONFIG_DIR env var, else use ./.tzd/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TZD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

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

    /// Priority: TZD_CONFIG_DIR env var > ./.tzd/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.bot.validate()?;
        self.handler.validate()?;

        // Database path must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
        info!(
            "  bot: operator role {}, selection ttl={}s, sweep={}s",
            if self.bot.operator_role_id.is_some() {
                "configured"
            } else {
                "NOT configured"
            },
            self.bot.selection_ttl_secs,
            self.bot.selection_sweep_secs
        );
        info!("  handler: timeout={}s", self.handler.timeout_secs);
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("TZD_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("TZD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TZD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TZD_LOG_FILE", &mut self.logging.file);

        // Bot
        Self::apply_env_option_string("TZD_OPERATOR_ROLE_ID", &mut self.bot.operator_role_id);
        Self::apply_env_parse(
            "TZD_SELECTION_TTL_SECS",
            &mut self.bot.selection_ttl_secs,
        );
        Self::apply_env_parse(
            "TZD_SELECTION_SWEEP_SECS",
            &mut self.bot.selection_sweep_secs,
        );

        // Handler
        Self::apply_env_parse("TZD_HANDLER_TIMEOUT_SECS", &mut self.handler.timeout_secs);
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
        if let Some(parsed) = std::env::var(var_name).ok().and_then(|v| v.parse().ok()) {
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
