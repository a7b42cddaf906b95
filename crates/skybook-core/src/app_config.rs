use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Flight API origin, without a trailing slash.
    pub api_base_url: String,
    pub log_level: String,
    /// JSON file backing the local key-value storage.
    pub storage_path: PathBuf,
    /// Directory receipts are written to when downloaded.
    pub download_dir: PathBuf,
    /// `None` leaves requests without a timeout.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}
