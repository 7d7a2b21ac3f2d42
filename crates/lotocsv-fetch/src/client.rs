//! HTTP client for downloading draw results.

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::url;

/// Configuration for the download client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the results service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Total attempts per request before giving up.
    pub max_attempts: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between attempts (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: url::BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_attempts: 10, // the service drops requests under load; retrying works
            base_delay_ms: 250,
            max_delay_ms: 10_000,
            user_agent: format!("lotocsv/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur during downloads.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Every attempt for one request failed.
    #[error("gave up after {attempts} attempts")]
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
    },
}

/// HTTP client with connection reuse and bounded retries.
#[derive(Debug, Clone)]
pub struct DownloadClient {
    client: Client,
    config: ClientConfig,
}

impl DownloadClient {
    /// Creates a new download client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // Requests go out one at a time; keep the single connection warm.
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs a GET request, returning the response body bytes.
    ///
    /// Any non-success status and any retryable transport error count
    /// against the attempt budget; exhausting it yields
    /// [`DownloadError::Exhausted`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all attempts, or
    /// immediately on a non-retryable transport error.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, DownloadError> {
        let mut attempts = 0;

        loop {
            attempts += 1;
            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return Ok(response.bytes().await?);
                    }
                    if attempts < self.config.max_attempts {
                        tokio::time::sleep(self.backoff_delay(attempts)).await;
                        continue;
                    }
                    return Err(DownloadError::Exhausted { attempts });
                }
                Err(e) if is_retryable_error(&e) && attempts < self.config.max_attempts => {
                    tokio::time::sleep(self.backoff_delay(attempts)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential growth and jitter.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter (roughly ±25%) keeps retries out of
        // lockstep without pulling in a random number generator.
        let jitter_range = capped / 4;
        let jitter = if jitter_range > 0 {
            (u64::from(attempt) * 17) % (jitter_range * 2)
        } else {
            0
        };

        let delay = (capped + jitter).saturating_sub(jitter_range).max(50);
        Duration::from_millis(delay)
    }
}

/// Determines if a transport error is worth retrying.
fn is_retryable_error(error: &reqwest::Error) -> bool {
    // Builder errors are configuration issues; retrying cannot help.
    if error.is_builder() {
        return false;
    }
    error.is_timeout() || error.is_connect() || error.is_request()
}
