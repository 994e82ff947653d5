//! Client configuration

use std::env;
use std::time::Duration;

use shared::{SharedError, SharedResult};
use url::Url;

/// Matches the default rate limit of the service and Postgres' default
/// max connections.
pub const DEFAULT_RATE_LIMIT: u32 = 100;
pub const DEFAULT_HOST: &str = "localhost:3476";
pub const DEFAULT_TENANT: &str = "t1";
pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the authorization service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// "http" or "https"
    pub protocol: String,
    /// API version path segment, e.g. "v1"
    pub api_version: String,
    /// Host and optional port
    pub host: String,
    pub tenant: String,
    /// Requests per second shared by every caller of one client (burst 1)
    pub rate_limit: u32,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            host: DEFAULT_HOST.to_string(),
            tenant: DEFAULT_TENANT.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `AUTHZ_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> SharedResult<Self> {
        let mut config = Self::default();

        if let Ok(protocol) = env::var("AUTHZ_PROTOCOL") {
            config.protocol = protocol;
        }
        if let Ok(api_version) = env::var("AUTHZ_API_VERSION") {
            config.api_version = api_version;
        }
        if let Ok(host) = env::var("AUTHZ_HOST") {
            config.host = host;
        }
        if let Ok(timeout) = env::var("AUTHZ_TIMEOUT_SECS") {
            let secs = timeout
                .parse::<u64>()
                .map_err(|_| SharedError::invalid("AUTHZ_TIMEOUT_SECS", &timeout))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Fill blank optional fields with defaults and reject what cannot be
    /// defaulted.
    pub fn normalized(mut self) -> SharedResult<Self> {
        if self.host.trim().is_empty() {
            return Err(SharedError::missing("host"));
        }
        if self.rate_limit == 0 {
            return Err(SharedError::invalid("rate_limit", self.rate_limit));
        }
        if self.tenant.is_empty() {
            self.tenant = DEFAULT_TENANT.to_string();
        }
        if self.protocol.is_empty() {
            self.protocol = DEFAULT_PROTOCOL.to_string();
        }
        if self.api_version.is_empty() {
            self.api_version = DEFAULT_API_VERSION.to_string();
        }
        if self.protocol != "http" && self.protocol != "https" {
            return Err(SharedError::invalid("protocol", &self.protocol));
        }

        self.base_url()?;
        Ok(self)
    }

    /// `<protocol>://<host>`
    pub fn base_url(&self) -> SharedResult<Url> {
        let raw = format!("{}://{}", self.protocol, self.host);
        Url::parse(&raw).map_err(|_| SharedError::invalid("host", &self.host))
    }
}
