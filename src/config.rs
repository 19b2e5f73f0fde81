// src/config.rs
use crate::domain::id::PlatformId;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    log_filter: String,
    seed_orgs: Vec<String>,
    id_seed: u64,
    demo_owner: PlatformId,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Filter used until configuration has been loaded, and when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

fn default_seed_orgs() -> Vec<String> {
    vec!["influxdata".into()]
}

fn default_id_seed() -> u64 {
    1
}

const DEFAULT_DEMO_OWNER: &str = "000000000000000a";

impl AppConfig {
    /// Build configuration from environment variables, after letting a
    /// `.env` file populate them when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back
    /// to defaults; set but malformed keys are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("RUST_LOG").unwrap_or_else(default_log_filter);

        let seed_orgs = lookup("TENANT_SEED_ORGS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_seed_orgs);

        let id_seed = match lookup("TENANT_ID_SEED") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "TENANT_ID_SEED must be an unsigned integer, got '{raw}'"
                ))
            })?,
            None => default_id_seed(),
        };
        if id_seed == 0 {
            return Err(ConfigError::Invalid("TENANT_ID_SEED must be non-zero".into()));
        }

        let owner = lookup("TENANT_DEMO_OWNER").unwrap_or_else(|| DEFAULT_DEMO_OWNER.into());
        let demo_owner = owner
            .parse::<PlatformId>()
            .map_err(|err| ConfigError::Invalid(format!("TENANT_DEMO_OWNER: {err}")))?;

        Ok(Self {
            log_filter,
            seed_orgs,
            id_seed,
            demo_owner,
        })
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn seed_orgs(&self) -> &[String] {
        &self.seed_orgs
    }

    pub fn id_seed(&self) -> u64 {
        self.id_seed
    }

    pub fn demo_owner(&self) -> PlatformId {
        self.demo_owner
    }
}
