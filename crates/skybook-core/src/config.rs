use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let env = parse_environment(&or_default("SKYBOOK_ENV", "development"));

    let api_base_url = parse_base_url(
        "SKYBOOK_API_BASE_URL",
        &or_default("SKYBOOK_API_BASE_URL", "http://127.0.0.1:8000"),
    )?;
    let log_level = or_default("SKYBOOK_LOG_LEVEL", "info");
    let storage_path = PathBuf::from(or_default(
        "SKYBOOK_STORAGE_PATH",
        "./.skybook/storage.json",
    ));
    let download_dir = PathBuf::from(or_default("SKYBOOK_DOWNLOAD_DIR", "."));
    let request_timeout_secs = parse_optional_u64("SKYBOOK_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("SKYBOOK_USER_AGENT", "skybook/0.1 (flight-booking)");

    Ok(AppConfig {
        env,
        api_base_url,
        log_level,
        storage_path,
        download_dir,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Requires an `http://` or `https://` origin and strips trailing slashes.
fn parse_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !has_scheme || trimmed.split("://").nth(1).is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
