//! Configuration management

use serde::Deserialize;
use url::Url;

use crate::model::{Identity, Role};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid api_base_url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Config {
    /// Backend serving identities, courses and notifications
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Display clock tick
    #[serde(default = "default_clock_tick_ms")]
    pub clock_tick_ms: u64,

    /// Periodic dashboard refresh
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api/".to_string()
}

fn default_clock_tick_ms() -> u64 {
    1000
}

fn default_refresh_interval_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            clock_tick_ms: default_clock_tick_ms(),
            refresh_interval_secs: default_refresh_interval_secs(),
            accounts: Vec::new(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration document (browser build)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_base()?;
        if self.clock_tick_ms == 0 {
            return Err(ConfigError::ZeroInterval("clock_tick_ms"));
        }
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::ZeroInterval("refresh_interval_secs"));
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative joins append instead of replace
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        let mut raw = self.api_base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            source,
        })
    }

    pub fn clock_tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.clock_tick_ms)
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh_interval_secs)
    }
}

/// An account known to the built-in authenticator
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountConfig {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    /// Hex SHA-256 of the password
    pub password_sha256: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl AccountConfig {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
        }
    }
}

/// File stem looked up in the config directory (any format `config` supports)
pub const CONFIG_FILE_STEM: &str = "research-portal";

/// Get config directory (PORTAL_CONFIG_DIR or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTAL_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/research-portal");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("research-portal");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/research-portal");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("research-portal");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Load configuration: defaults, then the optional config file, then
/// `PORTAL_*` environment variables (e.g. `PORTAL_API_BASE_URL`).
#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<Config> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .add_source(
            ::config::File::with_name(&config_dir.join(CONFIG_FILE_STEM).to_string_lossy())
                .required(false),
        )
        .add_source(
            ::config::Environment::with_prefix("PORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize()?;
    config.validate()?;
    tracing::debug!(
        "Loaded config from {} ({} accounts)",
        config_dir.display(),
        config.accounts.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.clock_tick(), std::time::Duration::from_secs(1));
        assert_eq!(config.refresh_interval(), std::time::Duration::from_secs(30));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = Config {
            api_base_url: "https://portal.example.edu/api".into(),
            ..Config::default()
        };
        let base = config.api_base().unwrap();
        assert_eq!(base.as_str(), "https://portal.example.edu/api/");
        assert_eq!(
            base.join("courses").unwrap().as_str(),
            "https://portal.example.edu/api/courses"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Config::from_json(r#"{"api_base_url": "not a url"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let err = Config::from_json(r#"{"clock_tick_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval("clock_tick_ms")));
        let err = Config::from_json(r#"{"refresh_interval_secs": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval("refresh_interval_secs")));
    }

    #[test]
    fn accounts_parse_with_roles() {
        let config = Config::from_json(
            r#"{"accounts": [{
                "id": "p-1",
                "username": "grace",
                "display_name": "Grace Hopper",
                "email": "grace@uni.edu",
                "role": "professor",
                "password_sha256": "abc"
            }]}"#,
        )
        .unwrap();
        let identity = config.accounts[0].identity();
        assert_eq!(identity.role, Role::Professor);
        assert_eq!(identity.display_name, "Grace Hopper");
        assert!(identity.avatar.is_none());
    }

    #[test]
    fn unknown_account_role_fails_to_parse() {
        let err = Config::from_json(
            r#"{"accounts": [{
                "id": "x", "username": "x", "display_name": "X", "email": "x@uni.edu",
                "role": "admin", "password_sha256": "abc"
            }]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[cfg(feature = "server")]
    mod file_loading {
        use super::super::*;
        use serial_test::serial;
        use std::env;

        #[test]
        #[serial]
        fn loads_file_from_config_dir() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(
                dir.path().join("research-portal.toml"),
                "api_base_url = \"https://backend.uni.edu/v2/\"\nrefresh_interval_secs = 45\n",
            )
            .unwrap();
            env::set_var("PORTAL_CONFIG_DIR", dir.path());

            let config = load_config();

            env::remove_var("PORTAL_CONFIG_DIR");

            let config = config.expect("config should load");
            assert_eq!(config.api_base_url, "https://backend.uni.edu/v2/");
            assert_eq!(config.refresh_interval_secs, 45);
            assert_eq!(config.clock_tick_ms, 1000);
        }

        #[test]
        #[serial]
        fn env_overrides_file() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(
                dir.path().join("research-portal.toml"),
                "refresh_interval_secs = 45\n",
            )
            .unwrap();
            env::set_var("PORTAL_CONFIG_DIR", dir.path());
            env::set_var("PORTAL_REFRESH_INTERVAL_SECS", "10");

            let config = load_config();

            env::remove_var("PORTAL_CONFIG_DIR");
            env::remove_var("PORTAL_REFRESH_INTERVAL_SECS");

            assert_eq!(config.expect("config should load").refresh_interval_secs, 10);
        }

        #[test]
        #[serial]
        fn single_underscore_prefix_sets_base_url() {
            env::set_var("PORTAL_CONFIG_DIR", "/tmp/portal-test-nonexistent");
            env::set_var("PORTAL_API_BASE_URL", "https://backend.uni.edu/api/");
            env::set_var("PORTAL_CLOCK_TICK_MS", "250");

            let config = load_config();

            env::remove_var("PORTAL_CONFIG_DIR");
            env::remove_var("PORTAL_API_BASE_URL");
            env::remove_var("PORTAL_CLOCK_TICK_MS");

            let config = config.expect("config should load");
            assert_eq!(config.api_base_url, "https://backend.uni.edu/api/");
            assert_eq!(config.clock_tick_ms, 250);
        }

        #[test]
        #[serial]
        fn missing_file_uses_defaults() {
            env::set_var("PORTAL_CONFIG_DIR", "/tmp/portal-test-nonexistent");

            let config = load_config();

            env::remove_var("PORTAL_CONFIG_DIR");

            assert_eq!(config.expect("config should load"), Config::default());
        }
    }
}
