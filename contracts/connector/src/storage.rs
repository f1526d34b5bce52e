//! Connector storage operations
//!
//! The connector keeps a single persistent entry, its config. A stored
//! config is what marks the connector as initialized.

use soroban_sdk::Env;

use crate::types::{ConnectorConfig, DataKey};

/// Ledgers a config entry stays live after it is touched (~1 year)
const CONFIG_TTL: u32 = 6_307_200;

/// Extend once the remaining TTL falls under ~30 days
const CONFIG_TTL_THRESHOLD: u32 = CONFIG_TTL - 518_400;

pub fn has_config(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &ConnectorConfig) {
    let storage = env.storage().persistent();
    storage.set(&DataKey::Config, config);
    storage.extend_ttl(&DataKey::Config, CONFIG_TTL_THRESHOLD, CONFIG_TTL);
}

/// Stored config, `None` before `initialize`
///
/// A hit also keeps the entry live, so quoting alone is enough to stop
/// the config from being archived.
pub fn read_config(env: &Env) -> Option<ConnectorConfig> {
    let storage = env.storage().persistent();
    let config: Option<ConnectorConfig> = storage.get(&DataKey::Config);
    if config.is_some() {
        storage.extend_ttl(&DataKey::Config, CONFIG_TTL_THRESHOLD, CONFIG_TTL);
    }
    config
}
