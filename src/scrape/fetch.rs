use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

/// Errors that can occur while fetching the calendar page.
/// None of them are retried; the viewer has nothing to show without the page.
#[derive(Debug)]
pub enum FetchError {
    /// Client could not be built (bad TLS backend, invalid settings).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Http { status: u16, url: String },
    /// Response body could not be read as text.
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Http { status, url } => write!(f, "HTTP {status} from {url}"),
            FetchError::Body(msg) => write!(f, "could not read response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Somewhere the raw calendar page can be read from.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// Human-readable location, for logs and error messages.
    fn location(&self) -> &str;

    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetches the calendar over HTTP with a single GET.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl CalendarSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        info!("Fetching {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;
        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}
