use std::time::Duration;

use crate::app_config::{AppConfig, Environment, RequestTimeouts};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, with no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_secs = |var: &str, default: Duration| -> Result<Duration, ConfigError> {
        match lookup(var) {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidEnvVar {
                        var: var.to_string(),
                        reason: "timeout must be at least 1 second".to_string(),
                    });
                }
                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("STORESYNC_ENV", "development"))?;
    let bind_addr = parse_addr("STORESYNC_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STORESYNC_LOG_LEVEL", "info");
    let api_keys = parse_api_keys(&or_default("STORESYNC_API_KEYS", ""));
    let user_agent = or_default("STORESYNC_USER_AGENT", "storesync/0.1 (woo-shim)");

    let rate_limit_per_minute = parse_usize("STORESYNC_RATE_LIMIT_PER_MINUTE", "120")?;
    if rate_limit_per_minute == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STORESYNC_RATE_LIMIT_PER_MINUTE".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let defaults = RequestTimeouts::default();
    let timeouts = RequestTimeouts {
        probe: parse_secs("STORESYNC_PROBE_TIMEOUT_SECS", defaults.probe)?,
        discovery: parse_secs("STORESYNC_DISCOVERY_TIMEOUT_SECS", defaults.discovery)?,
        credentials: parse_secs("STORESYNC_CREDENTIALS_TIMEOUT_SECS", defaults.credentials)?,
        system_status: parse_secs(
            "STORESYNC_SYSTEM_STATUS_TIMEOUT_SECS",
            defaults.system_status,
        )?,
        fetch: parse_secs("STORESYNC_FETCH_TIMEOUT_SECS", defaults.fetch)?,
        update: parse_secs("STORESYNC_UPDATE_TIMEOUT_SECS", defaults.update)?,
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        api_keys,
        user_agent,
        rate_limit_per_minute,
        timeouts,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STORESYNC_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

/// Splits a comma-separated key list, dropping blanks.
fn parse_api_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
