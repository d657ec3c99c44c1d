use crate::model::FetchError;
use serde_json::Value;

/// One GET against the extraction service, returning the payload nested
/// under `query.results`.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}
