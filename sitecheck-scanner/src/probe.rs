use crate::error::Result;
use reqwest::Client;
use reqwest::redirect::Policy;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_REDIRECTS: usize = 30;

/// Something that can tell us which status code a URL answers with.
///
/// Implementations classify failures into [`ProbeError`](crate::ProbeError) variants so callers
/// never have to look at a particular HTTP library's error types.
pub trait StatusProbe {
    fn fetch_status(&self, url: &str) -> impl Future<Output = Result<u16>>;
}

/// Probe backed by a single reused reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
    max_redirects: usize,
}

impl HttpProbe {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_limits(timeout, DEFAULT_MAX_REDIRECTS)
    }

    /// `timeout` covers the whole request, connect included.
    pub fn with_limits(timeout: Duration, max_redirects: usize) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sitecheck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(Policy::limited(max_redirects))
            .build()?;

        Ok(Self {
            client,
            timeout,
            max_redirects,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

impl StatusProbe for HttpProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16> {
        let parsed = Url::parse(url)?;
        debug!("GET {}", parsed);

        let response = self.client.get(parsed).send().await?;
        let status_code = response.status().as_u16();
        debug!("{} answered {}", url, status_code);

        Ok(status_code)
    }
}
