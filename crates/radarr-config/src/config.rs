use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::paths::default_config_path;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 7878;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_VERSION: &str = "v3";

/// Connection settings for a single Radarr instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RadarrConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub use_https: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Path prefix when Radarr sits behind a reverse proxy (e.g. "/radarr")
    #[serde(default)]
    pub url_base: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl Default for RadarrConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: String::new(),
            use_https: false,
            timeout: default_timeout(),
            url_base: String::new(),
            api_version: default_api_version(),
        }
    }
}

impl RadarrConfig {
    pub fn new(host: impl Into<String>, port: u16, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RadarrConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Read `path` when it exists, otherwise start from defaults, then apply
    /// `RADARR_*` environment overrides
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// [`RadarrConfig::load_or_default`] at [`default_config_path`]
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_default(&default_config_path()?)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow::anyhow!("host must not be empty"));
        }
        if self.port == 0 {
            return Err(anyhow::anyhow!("port must be greater than zero"));
        }
        if self.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("api_key is required"));
        }
        if self.timeout == 0 {
            return Err(anyhow::anyhow!("timeout must be greater than zero"));
        }
        if self.api_version.trim().is_empty() {
            return Err(anyhow::anyhow!("api_version must not be empty"));
        }
        Ok(())
    }

    /// Override fields from `RADARR_*` environment variables
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from a variable lookup. Unset variables leave the field untouched.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(host) = lookup("RADARR_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("RADARR_PORT") {
            self.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid RADARR_PORT '{}': {}", port, e))?;
        }
        if let Some(api_key) = lookup("RADARR_API_KEY") {
            self.api_key = api_key;
        }
        if let Some(use_https) = lookup("RADARR_USE_HTTPS") {
            self.use_https = matches!(use_https.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(timeout) = lookup("RADARR_TIMEOUT") {
            self.timeout = timeout
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid RADARR_TIMEOUT '{}': {}", timeout, e))?;
        }
        if let Some(url_base) = lookup("RADARR_URL_BASE") {
            self.url_base = url_base;
        }
        if let Some(api_version) = lookup("RADARR_API_VERSION") {
            self.api_version = api_version;
        }
        Ok(())
    }

    /// Root of the versioned API, e.g. `http://localhost:7878/radarr/api/v3`
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let url_base = self.url_base.trim_matches('/');
        if url_base.is_empty() {
            format!("{}://{}:{}/api/{}", scheme, self.host, self.port, self.api_version)
        } else {
            format!(
                "{}://{}:{}/{}/api/{}",
                scheme, self.host, self.port, url_base, self.api_version
            )
        }
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
