use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

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
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("unknown"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.storage_path, PathBuf::from("./.skybook/storage.json"));
    assert_eq!(cfg.download_dir, PathBuf::from("."));
    assert!(cfg.request_timeout_secs.is_none());
    assert_eq!(cfg.user_agent, "skybook/0.1 (flight-booking)");
}

#[test]
fn api_base_url_override_strips_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("SKYBOOK_API_BASE_URL", "https://flights.example.com/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://flights.example.com");
}

#[test]
fn api_base_url_without_scheme_is_invalid() {
    let mut map = HashMap::new();
    map.insert("SKYBOOK_API_BASE_URL", "127.0.0.1:8000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKYBOOK_API_BASE_URL"),
        "expected InvalidEnvVar(SKYBOOK_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn api_base_url_scheme_only_is_invalid() {
    let mut map = HashMap::new();
    map.insert("SKYBOOK_API_BASE_URL", "http://");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("SKYBOOK_REQUEST_TIMEOUT_SECS", "15");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, Some(15));
}

#[test]
fn request_timeout_secs_blank_means_none() {
    let mut map = HashMap::new();
    map.insert("SKYBOOK_REQUEST_TIMEOUT_SECS", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.request_timeout_secs.is_none());
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("SKYBOOK_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKYBOOK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SKYBOOK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn storage_and_download_paths_override() {
    let mut map = HashMap::new();
    map.insert("SKYBOOK_STORAGE_PATH", "/tmp/skybook/store.json");
    map.insert("SKYBOOK_DOWNLOAD_DIR", "/tmp/receipts");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.storage_path, PathBuf::from("/tmp/skybook/store.json"));
    assert_eq!(cfg.download_dir, PathBuf::from("/tmp/receipts"));
}
