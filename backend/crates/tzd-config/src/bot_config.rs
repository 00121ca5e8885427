use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SELECTION_SWEEP_SECS, DEFAULT_SELECTION_TTL_SECS,
    MAX_SELECTION_TTL_SECS, MIN_SELECTION_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Platform role id that marks a caller as a moderator.
    /// None = nobody passes the operator check.
    pub operator_role_id: Option<String>,
    /// How long a guided selector prompt stays answerable
    pub selection_ttl_secs: u64,
    /// Interval of the expired-prompt sweep
    pub selection_sweep_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            operator_role_id: None,
            selection_ttl_secs: DEFAULT_SELECTION_TTL_SECS,
            selection_sweep_secs: DEFAULT_SELECTION_SWEEP_SECS,
        }
    }
}

impl BotConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.selection_ttl_secs < MIN_SELECTION_TTL_SECS
            || self.selection_ttl_secs > MAX_SELECTION_TTL_SECS
        {
            return Err(ConfigError::bot(format!(
                "bot.selection_ttl_secs must be {}-{}, got {}",
                MIN_SELECTION_TTL_SECS, MAX_SELECTION_TTL_SECS, self.selection_ttl_secs
            )));
        }

        if self.selection_sweep_secs == 0 {
            return Err(ConfigError::bot("bot.selection_sweep_secs must be > 0"));
        }

        if self
            .operator_role_id
            .as_deref()
            .is_some_and(|role| role.trim().is_empty())
        {
            return Err(ConfigError::bot("bot.operator_role_id cannot be blank"));
        }

        Ok(())
    }
}
