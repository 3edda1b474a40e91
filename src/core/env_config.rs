//! Level configuration from environment variables
//!
//! For every level there is a variable `PION_LOG_<NAME>` (falling back to
//! `PIONS_LOG_<NAME>`), where `<NAME>` is one of `DISABLE`, `ERROR`, `WARN`,
//! `INFO`, `DEBUG` or `TRACE`. Its value is either `all`, which raises the
//! default level, or a comma-separated list of scopes to pin at that level:
//!
//! ```text
//! PION_LOG_WARN=all PION_LOG_DEBUG=ice,dtls
//! ```

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ENV_PREFIX: &str = "PION_LOG_";
pub const FALLBACK_ENV_PREFIX: &str = "PIONS_LOG_";

const ALL_SCOPES: &str = "all";

/// Result of resolving the level variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Level for scopes without an override; starts at `Error`
    pub default_level: LogLevel,
    /// Lowercase scope name to level
    pub scope_levels: HashMap<String, LogLevel>,
}

impl EnvConfig {
    /// Resolve against the process environment
    pub fn from_process_env() -> Self {
        parse_env(process_env)
    }
}

/// Resolve the level variables through `getenv`.
///
/// Levels are processed from `Disabled` to `Trace`, so a scope listed under
/// several levels ends up at the most verbose one. An `all` value never lowers
/// the default.
///
/// # Example
///
/// ```
/// use scoped_logger::{parse_env, LogLevel};
///
/// let config = parse_env(|name| match name {
///     "PION_LOG_WARN" => Some("all".to_string()),
///     "PION_LOG_DEBUG" => Some("Foo,bar".to_string()),
///     _ => None,
/// });
///
/// assert_eq!(config.default_level, LogLevel::Warn);
/// assert_eq!(config.scope_levels["foo"], LogLevel::Debug);
/// ```
pub fn parse_env<F>(getenv: F) -> EnvConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EnvConfig {
        default_level: LogLevel::Error,
        scope_levels: HashMap::new(),
    };

    for level in LogLevel::ALL {
        let Some(value) = lookup(&getenv, level) else {
            continue;
        };

        let value = value.to_lowercase();
        if value == ALL_SCOPES {
            config.default_level = config.default_level.max(level);
            continue;
        }

        for scope in value.split(',') {
            config.scope_levels.insert(scope.to_string(), level);
        }
    }

    config
}

fn lookup<F>(getenv: &F, level: LogLevel) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |prefix: &str| {
        getenv(&format!("{}{}", prefix, level.env_name())).filter(|value| !value.is_empty())
    };
    read(ENV_PREFIX).or_else(|| read(FALLBACK_ENV_PREFIX))
}

/// `getenv` backed by the process environment; non-UTF-8 values are
/// decoded lossily
pub fn process_env(name: &str) -> Option<String> {
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}
