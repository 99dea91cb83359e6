/*!
 * Engine Configuration
 * Defaults from core::limits with POLICY_* environment overrides
 */

use super::errors::{PolicyError, PolicyResult};
use super::limits::{MAX_AUDIT_EVENTS, MAX_AUDIT_EVENTS_PER_POLICY};
use serde::{Deserialize, Serialize};

pub const ENV_AUDIT_ENABLED: &str = "POLICY_AUDIT_ENABLED";
pub const ENV_AUDIT_CAPACITY: &str = "POLICY_AUDIT_CAPACITY";
pub const ENV_AUDIT_CAPACITY_PER_POLICY: &str = "POLICY_AUDIT_CAPACITY_PER_POLICY";

/// Decision manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Record every managed evaluation in the audit trail
    pub audit_enabled: bool,
    /// Global audit ring buffer size
    pub audit_capacity: usize,
    /// Per-policy audit buffer size
    pub audit_capacity_per_policy: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            audit_enabled: true,
            audit_capacity: MAX_AUDIT_EVENTS,
            audit_capacity_per_policy: MAX_AUDIT_EVENTS_PER_POLICY,
        }
    }
}

impl EngineConfig {
    /// Build from the process environment, keeping defaults for unset keys
    pub fn from_env() -> PolicyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> PolicyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_AUDIT_ENABLED) {
            config.audit_enabled = parse_bool(ENV_AUDIT_ENABLED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_AUDIT_CAPACITY) {
            config.audit_capacity = parse_capacity(ENV_AUDIT_CAPACITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_AUDIT_CAPACITY_PER_POLICY) {
            config.audit_capacity_per_policy = parse_capacity(ENV_AUDIT_CAPACITY_PER_POLICY, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values no source may supply, however the config was built
    pub fn validate(&self) -> PolicyResult<()> {
        check_capacity(ENV_AUDIT_CAPACITY, self.audit_capacity)?;
        check_capacity(ENV_AUDIT_CAPACITY_PER_POLICY, self.audit_capacity_per_policy)
    }
}

fn parse_bool(key: &str, raw: &str) -> PolicyResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(PolicyError::InvalidConfig {
            key: key.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

fn parse_capacity(key: &str, raw: &str) -> PolicyResult<usize> {
    let value: usize = raw.trim().parse().map_err(|e| PolicyError::InvalidConfig {
        key: key.to_string(),
        reason: format!("{}", e),
    })?;

    check_capacity(key, value)?;
    Ok(value)
}

fn check_capacity(key: &str, value: usize) -> PolicyResult<()> {
    if value == 0 {
        return Err(PolicyError::InvalidConfig {
            key: key.to_string(),
            reason: "capacity must be greater than zero".to_string(),
        });
    }
    Ok(())
}
