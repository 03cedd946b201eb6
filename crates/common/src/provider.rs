//! Commonly used helpers to construct `Provider`s.

use crate::REQUEST_TIMEOUT;
use alloy_provider::RootProvider;
use alloy_rpc_client::RpcClient;
use alloy_transport::utils::guess_local_url;
use alloy_transport_http::Http;
use eyre::{Result, WrapErr};
use std::time::Duration;
use url::Url;

/// Helper type alias for an HTTP JSON-RPC provider.
pub type HttpProvider = RootProvider;

/// Helper type to construct an [`HttpProvider`].
#[derive(Debug)]
pub struct ProviderBuilder {
    // Note: this is a result, so we can easily chain builder calls
    url: Result<Url>,
    timeout: Duration,
}

// === impl ProviderBuilder ===

impl ProviderBuilder {
    /// Creates a new builder instance.
    pub fn new(url_str: &str) -> Self {
        // a bare `localhost:<port>` is not a valid URL, assume http
        let url = if url_str.starts_with("localhost:") {
            Url::parse(&format!("http://{url_str}"))
        } else {
            Url::parse(url_str)
        };
        let url = url
            .wrap_err_with(|| format!("invalid provider URL: {url_str:?}"))
            .and_then(|url| match url.scheme() {
                "http" | "https" => Ok(url),
                scheme => eyre::bail!("unsupported provider URL scheme {scheme:?}: {url_str:?}"),
            });

        Self { url, timeout: REQUEST_TIMEOUT }
    }

    /// Sets the per-request timeout.
    ///
    /// The timeout is applied from when the request starts connecting until the
    /// response body has finished.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Constructs the provider.
    pub fn build(self) -> Result<HttpProvider> {
        let Self { url, timeout } = self;
        let url = url?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("failed to build HTTP client")?;
        let is_local = guess_local_url(url.as_str());
        let transport = Http::with_client(client, url);
        Ok(RootProvider::new(RpcClient::new(transport, is_local)))
    }
}
