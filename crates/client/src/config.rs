//! Backend connection settings
//!
//! Settings are layered: built-in defaults, then environment variables, then
//! an optional TOML file, then whatever the caller sets explicitly.

use console_core::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the backend base URL
pub const ENV_BASE_URL: &str = "CONSOLE_BACKEND_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "CONSOLE_REQUEST_TIMEOUT_SECS";

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Connection settings for [`HttpBackend`](crate::HttpBackend)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend; endpoint paths are appended
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("entity-console/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// On-disk form of the settings; every key is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `CONSOLE_BACKEND_URL` and `CONSOLE_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> ConsoleResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConsoleResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ConsoleError::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Overlay the keys present in a TOML file
    pub fn with_file(self, path: impl AsRef<Path>) -> ConsoleResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConsoleError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        self.with_toml_str(&content)
    }

    /// Overlay the keys present in a TOML document
    pub fn with_toml_str(mut self, content: &str) -> ConsoleResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConsoleError::config(e.to_string()))?;

        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(agent) = file.user_agent {
            self.user_agent = agent;
        }
        Ok(self)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check that the settings can produce a working client
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConsoleError::config("base_url must not be empty"));
        }

        let parsed = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ConsoleError::config(format!("invalid base_url '{}': {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConsoleError::config(format!(
                "base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(ConsoleError::config("timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Full URL for an endpoint path such as `/entity/add`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
