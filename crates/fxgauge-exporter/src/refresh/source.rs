use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use reqwest::header::{REFERER, USER_AGENT};

use fxgauge_core::error::{FxError, Result};

/// Query date format expected by the upstream (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The upstream refuses requests without a browser-like agent and a referer.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
pub const CBR_REFERER: &str = "http://www.cbr.ru/development/SXML/";

/// Provider of the raw daily rate document.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the undecoded body of the rate table for `date`.
    async fn fetch(&self, date: NaiveDate) -> Result<Bytes>;
}

/// Central Bank of Russia daily XML feed over HTTP.
pub struct CbrSource {
    client: reqwest::Client,
    endpoint: String,
}

impl CbrSource {
    /// `timeout` bounds the whole request; there is no retry inside a cycle.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FxError::Config(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The date goes in verbatim; the upstream does not accept `%2F`.
    pub fn request_url(&self, date: NaiveDate) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}date_req={}", self.endpoint, sep, date.format(DATE_FORMAT))
    }
}

#[async_trait]
impl RateSource for CbrSource {
    async fn fetch(&self, date: NaiveDate) -> Result<Bytes> {
        let url = self.request_url(date);
        tracing::debug!(%url, "requesting rate table");

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(REFERER, CBR_REFERER)
            .send()
            .await
            .map_err(|e| FxError::Transport(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| FxError::Transport(format!("upstream status: {e}")))?;

        resp.bytes()
            .await
            .map_err(|e| FxError::Transport(format!("read body failed: {e}")))
    }
}
