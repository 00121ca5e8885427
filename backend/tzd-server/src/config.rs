use crate::TransportConfig;

use tzd_bot::DispatcherConfig;
use tzd_config::Config;

use std::time::Duration;

/// Runtime settings for the dispatcher, taken from the validated config
pub fn dispatcher_config(config: &Config) -> DispatcherConfig {
    DispatcherConfig {
        handler_timeout: Duration::from_secs(config.handler.timeout_secs),
        selection_ttl: Duration::from_secs(config.bot.selection_ttl_secs),
    }
}

pub fn transport_config(config: &Config) -> TransportConfig {
    TransportConfig {
        operator_role_id: config.bot.operator_role_id.clone(),
    }
}

/// Interval of the expired-selection sweep
pub fn sweep_interval(config: &Config) -> Duration {
    Duration::from_secs(config.bot.selection_sweep_secs)
}
