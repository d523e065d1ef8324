use std::fmt;
use std::net::IpAddr;

use anyhow::{Context, Result};
use axum::body::Bytes;
use reqwest::{Client, Url};
use serde::de::IgnoredAny;

use crate::config::Config;

/// Why a call to the backend API did not produce a usable JSON body.
///
/// Every variant is reported to callers the same way; the distinction only
/// matters for logs.
#[derive(Debug)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout or a broken body stream
    Transport(reqwest::Error),
    /// Backend answered with a 4xx/5xx status
    Status(reqwest::Error),
    /// Backend answered successfully but the body is not JSON
    Decode(serde_json::Error),
    /// Backend body is not valid UTF-8, so it cannot be JSON
    Encoding(std::str::Utf8Error),
    /// A path segment would be collapsed by URL normalisation (`.` or `..`)
    InvalidSegment(String),
}

impl UpstreamError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Transport(err) if err.is_timeout())
    }

    pub fn stage(&self) -> &'static str {
        match self {
            UpstreamError::Transport(_) if self.is_timeout() => "timeout",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Status(_) => "status",
            UpstreamError::Decode(_) | UpstreamError::Encoding(_) => "decode",
            UpstreamError::InvalidSegment(_) => "request",
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Transport(err) | UpstreamError::Status(err) => write!(f, "{err}"),
            UpstreamError::Decode(err) => write!(f, "invalid JSON from backend: {err}"),
            UpstreamError::Encoding(err) => write!(f, "invalid JSON from backend: {err}"),
            UpstreamError::InvalidSegment(segment) => {
                write!(f, "'{segment}' is not a valid plant id")
            }
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Transport(err) | UpstreamError::Status(err) => Some(err),
            UpstreamError::Decode(err) => Some(err),
            UpstreamError::Encoding(err) => Some(err),
            UpstreamError::InvalidSegment(_) => None,
        }
    }
}

/// Shareable client for the backend plant API
///
/// Cloning is cheap: the underlying reqwest client keeps its connection pool
/// behind an `Arc`.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client from configuration, applying the upstream timeout to
    /// every request it sends.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.upstream_timeout);
        if is_loopback(&config.api_base_url) {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .context("Failed to build HTTP client for the backend API")?;

        tracing::info!("Backend API client ready for {}", redacted(&config.api_base_url));

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Fetch the full plant list
    pub async fn list_plants(&self) -> Result<Bytes, UpstreamError> {
        self.get_json(&["api", "plants"]).await
    }

    /// Fetch a single plant by id; the id is sent as one encoded path segment
    pub async fn get_plant(&self, id: &str) -> Result<Bytes, UpstreamError> {
        self.get_json(&["api", "plants", id]).await
    }

    /// Resolve path segments below the base URL, keeping any base path prefix.
    ///
    /// Dot segments are refused: the URL parser would collapse them and the
    /// request would reach a different resource.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(UpstreamError::InvalidSegment(segment.to_string()));
        }

        let mut url = self.base_url.clone();
        // http(s) URLs always have a path, so this never fails
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Issue a single GET and return the raw body once it is known to be JSON.
    async fn get_json(&self, segments: &[&str]) -> Result<Bytes, UpstreamError> {
        let url = self.endpoint(segments)?;

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(UpstreamError::Transport)?
            .error_for_status()
            .map_err(UpstreamError::Status)?;

        let body = response.bytes().await.map_err(UpstreamError::Transport)?;

        let text = std::str::from_utf8(&body).map_err(UpstreamError::Encoding)?;
        serde_json::from_str::<IgnoredAny>(text).map_err(UpstreamError::Decode)?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), redacted(&url));
        Ok(body)
    }
}

/// Percent-encoded spellings are safe: `%` itself is escaped on the way in.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Copy of `url` with any username and password removed, for logging.
pub fn redacted(url: &Url) -> Url {
    let mut url = url.clone();
    // Only fails for URLs without a host, which config never accepts
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url
}

/// A backend on this machine is never reached through an HTTP proxy.
fn is_loopback(url: &Url) -> bool {
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
        None => false,
    }
}
