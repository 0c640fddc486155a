//! Map-server configuration.
//!
//! Reads:
//! - `FLATMAP_SERVER_URL` (default: `https://mapcore-demo.org/devel/flatmap/v4`)
//! - `FLATMAP_TIMEOUT_SECS` (default: `30`)

use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_SERVER_URL: &str = "https://mapcore-demo.org/devel/flatmap/v4";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the knowledge endpoint of a flatmap server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapServerConfig {
    pub server_url: String,
    pub timeout: Duration,
}

impl Default for MapServerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl MapServerConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self { server_url: server_url.into(), ..Self::default() }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = std::env::var("FLATMAP_SERVER_URL").ok().filter(|u| !u.is_empty()) {
            config.server_url = url;
        }
        if let Ok(secs) = std::env::var("FLATMAP_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("FLATMAP_TIMEOUT_SECS is not a number of seconds: {secs:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// The knowledge query endpoint.
    pub fn query_url(&self) -> String {
        format!("{}/knowledge/query/", self.server_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        assert_eq!(
            MapServerConfig::default().query_url(),
            "https://mapcore-demo.org/devel/flatmap/v4/knowledge/query/"
        );
        assert_eq!(
            MapServerConfig::new("http://localhost:4000/").query_url(),
            "http://localhost:4000/knowledge/query/"
        );
    }

    /// Env vars are process-global; keep every env phase in one test.
    #[test]
    fn test_from_env_lifecycle() {
        unsafe {
            std::env::remove_var("FLATMAP_SERVER_URL");
            std::env::remove_var("FLATMAP_TIMEOUT_SECS");
        }
        assert_eq!(MapServerConfig::from_env().unwrap(), MapServerConfig::default());

        unsafe {
            std::env::set_var("FLATMAP_SERVER_URL", "http://maps.local");
            std::env::set_var("FLATMAP_TIMEOUT_SECS", "5");
        }
        let config = MapServerConfig::from_env().unwrap();
        assert_eq!(config.server_url, "http://maps.local");
        assert_eq!(config.timeout, Duration::from_secs(5));

        unsafe { std::env::set_var("FLATMAP_TIMEOUT_SECS", "soon") };
        assert!(matches!(MapServerConfig::from_env(), Err(Error::Config(_))));

        unsafe {
            std::env::remove_var("FLATMAP_SERVER_URL");
            std::env::remove_var("FLATMAP_TIMEOUT_SECS");
        }
    }
}
