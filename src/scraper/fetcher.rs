use crate::model::FetchError;
use crate::scraper::traits::Fetcher;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

pub struct FetcherImpl {
    client: Client,
}

impl FetcherImpl {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for FetcherImpl {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(Box::new(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(Box::new(e)))?;

        if !status.is_success() {
            warn!("❌ Extraction service responded [{}]", status);
            return Err(FetchError::MalformedResponse(format!("unexpected status {}", status)));
        }

        let envelope: Value = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {}", e)))?;
        unwrap_results(envelope)
    }
}

/// Pulls the `query.results` object out of the service envelope.
/// `results` may legitimately be `null` when nothing matched.
fn unwrap_results(mut envelope: Value) -> Result<Value, FetchError> {
    envelope
        .pointer_mut("/query/results")
        .map(Value::take)
        .ok_or_else(|| FetchError::MalformedResponse("missing query.results".into()))
}
