use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "STORESYNC_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.api_keys.is_empty());
    assert_eq!(cfg.user_agent, "storesync/0.1 (woo-shim)");
    assert_eq!(cfg.rate_limit_per_minute, 120);
    assert_eq!(cfg.timeouts, RequestTimeouts::default());
}

#[test]
fn default_timeouts_match_per_step_budget() {
    let t = RequestTimeouts::default();
    assert_eq!(t.probe, Duration::from_secs(10));
    assert_eq!(t.discovery, Duration::from_secs(10));
    assert_eq!(t.credentials, Duration::from_secs(15));
    assert_eq!(t.fetch, Duration::from_secs(30));
    assert_eq!(t.update, Duration::from_secs(20));
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STORESYNC_BIND_ADDR"),
        "expected InvalidEnvVar(STORESYNC_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_env() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STORESYNC_ENV"),
        "expected InvalidEnvVar(STORESYNC_ENV), got: {result:?}"
    );
}

#[test]
fn api_keys_are_split_and_trimmed() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_API_KEYS", " alpha, ,beta ,");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_keys, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn debug_output_redacts_api_keys() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_API_KEYS", "super-secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("super-secret-key"), "leaked key: {debug}");
    assert!(debug.contains("[1 redacted]"));
}

#[test]
fn fetch_timeout_override() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_FETCH_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.timeouts.fetch, Duration::from_secs(45));
    assert_eq!(cfg.timeouts.update, Duration::from_secs(20));
}

#[test]
fn fetch_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_FETCH_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STORESYNC_FETCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STORESYNC_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn zero_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_PROBE_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STORESYNC_PROBE_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STORESYNC_PROBE_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn zero_rate_limit_is_rejected() {
    let mut map = HashMap::new();
    map.insert("STORESYNC_RATE_LIMIT_PER_MINUTE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STORESYNC_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(STORESYNC_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}
