use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Url;

use crate::upstream::redacted;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub upstream_timeout: Duration,
    pub service_port: u16,
    pub service_host: String,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let raw_base_url = var("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = Url::parse(&raw_base_url)
            .with_context(|| format!("API_BASE_URL must be an absolute URL, got '{}'", raw_base_url))?;
        if !matches!(api_base_url.scheme(), "http" | "https") {
            bail!(
                "API_BASE_URL must use http or https, got '{}'",
                api_base_url.scheme()
            );
        }

        let service_port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("PORT must be a valid port number (0-65535)")?,
            None => DEFAULT_PORT,
        };

        let service_host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let timeout_secs = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
        }

        let debug = var("DEBUG")
            .map(|flag| matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(Config {
            api_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            service_port,
            service_host,
            debug,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Backend API: {}", redacted(&self.api_base_url));
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout.as_secs());
        tracing::info!("  Debug mode: {}", if self.debug { "on" } else { "off" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
