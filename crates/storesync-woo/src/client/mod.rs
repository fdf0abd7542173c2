//! HTTP client for the WooCommerce REST API.

mod diagnose;
mod endpoints;
mod products;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use storesync_core::{RequestTimeouts, StoreConfig};

use crate::error::WooError;

pub use diagnose::{CredentialCheck, VersionLookup};
pub use endpoints::{normalize_store_url, StoreEndpoints};

/// Upper bound on TCP/TLS connection setup for every call. Per-call totals
/// come from [`RequestTimeouts`].
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a WooCommerce store's REST API.
///
/// Holds no per-store state: every method takes the caller's
/// [`StoreConfig`], so one client (and its connection pool) serves any
/// number of stores concurrently. Each remote call carries its own timeout
/// and is never retried.
pub struct WooClient {
    client: Client,
    timeouts: RequestTimeouts,
}

impl WooClient {
    /// Creates a `WooClient` with the given `User-Agent` and per-call timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(user_agent: &str, timeouts: RequestTimeouts) -> Result<Self, WooError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, timeouts })
    }

    /// Starts an authenticated request: HTTP Basic with
    /// `consumer_key:consumer_secret`, JSON accept header, and the given
    /// per-call timeout.
    fn authed(
        &self,
        method: reqwest::Method,
        config: &StoreConfig,
        url: &str,
        timeout: Duration,
    ) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&config.consumer_key, Some(&config.consumer_secret))
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(timeout)
    }
}
