//! Runtime configuration, read from the environment.
//!
//! | Variable           | Default                 |
//! |--------------------|-------------------------|
//! | `ROSTER_BASE_URL`  | `http://localhost:3300` |
//! | `ROSTER_RECONCILE` | `strict`                |
//!
//! A `.env` file in the working directory is loaded first when present.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3300";

pub const BASE_URL_VAR: &str = "ROSTER_BASE_URL";
pub const RECONCILE_VAR: &str = "ROSTER_RECONCILE";

/// How the view-model folds update and delete outcomes into its list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReconcilePolicy {
    /// Mutate the list only when the call succeeded; report failures.
    #[default]
    Strict,
    /// Mutate the list once the call resolves, whatever the outcome.
    Lenient,
}

impl FromStr for ReconcilePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ReconcilePolicy::Strict),
            "lenient" => Ok(ReconcilePolicy::Lenient),
            _ => Err(ConfigError::InvalidReconcilePolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ReconcilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcilePolicy::Strict => f.write_str("strict"),
            ReconcilePolicy::Lenient => f.write_str("lenient"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub base_url: String,
    pub reconcile: ReconcilePolicy,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reconcile: ReconcilePolicy::default(),
        }
    }
}

impl RosterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = match get(BASE_URL_VAR) {
            Some(value) => parse_base_url(&value)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let reconcile = match get(RECONCILE_VAR) {
            Some(value) => value.parse()?,
            None => ReconcilePolicy::default(),
        };

        Ok(Self {
            base_url,
            reconcile,
        })
    }
}

fn parse_base_url(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason: format!("unsupported scheme {:?}", parsed.scheme()),
        });
    }
    Ok(value.to_string())
}
