// Field extractors: one remote query per attribute, projected into an ordered list
pub mod projection;
pub mod query;

use crate::model::{FetchError, Field};
use crate::normalizer::EncodedKeywords;
use crate::scraper::Fetcher;
use projection::project;
use query::QueryBuilder;
use std::sync::Arc;
use tracing::debug;

/// Where a field lives on the search page and in the service's answer.
pub struct FieldSpec {
    /// Column named in the `select` clause.
    pub column: &'static str,
    pub xpath: &'static str,
    /// Key under `query.results` holding the matched nodes.
    pub payload_key: &'static str,
    /// Attribute read from each matched node.
    pub attribute: &'static str,
}

static TITLE: FieldSpec = FieldSpec {
    column: "title",
    xpath: "//html/body/div[1]/div[1]/div[3]/div[2]/div/div[4]/div[1]/div/ul/li/div/div/div/div[2]/div[1]/a",
    payload_key: "a",
    attribute: "title",
};

static PRICE: FieldSpec = FieldSpec {
    column: "content",
    xpath: "/html/body/div[1]/div[1]/div[3]/div[2]/div/div[4]/div[1]/div/ul/li/div/div/div/div[2]/div[2]/div[1]/div[1]/a/span",
    payload_key: "span",
    attribute: "content",
};

static IMAGE: FieldSpec = FieldSpec {
    column: "src",
    xpath: "//html/body/div[1]/div[1]/div[3]/div[2]/div/div[4]/div[1]/div/ul/li//div/div[1]/div/div/a/img/@src",
    payload_key: "img",
    attribute: "src",
};

impl Field {
    pub fn spec(self) -> &'static FieldSpec {
        match self {
            Field::Title => &TITLE,
            Field::Price => &PRICE,
            Field::Image => &IMAGE,
        }
    }
}

pub struct FieldExtractor {
    fetcher: Arc<dyn Fetcher>,
    queries: QueryBuilder,
}

impl FieldExtractor {
    pub fn new(fetcher: Arc<dyn Fetcher>, queries: QueryBuilder) -> Self {
        Self { fetcher, queries }
    }

    /// Fetches one field for every item on the search page. Fetch failures
    /// are passed through untouched.
    pub async fn extract(
        &self,
        field: Field,
        keywords: &EncodedKeywords,
    ) -> Result<Vec<String>, FetchError> {
        let url = self.queries.url_for(field, keywords);
        let payload = self.fetcher.fetch(&url).await?;
        let values = project(field.spec(), payload);
        debug!("{} extractor got {} values", field, values.len());
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::normalizer::encode_keywords;
    use serde_json::{Value, json};

    struct CannedFetcher(Result<Value, &'static str>);

    #[async_trait::async_trait]
    impl Fetcher for CannedFetcher {
        async fn fetch(&self, _url: &str) -> Result<Value, FetchError> {
            self.0.clone().map_err(|e| FetchError::Network(e.into()))
        }
    }

    fn extractor(canned: Result<Value, &'static str>) -> FieldExtractor {
        FieldExtractor::new(
            Arc::new(CannedFetcher(canned)),
            QueryBuilder::from_config(&AppConfig::default()),
        )
    }

    #[tokio::test]
    async fn title_extractor_plucks_title_attribute() {
        let payload = json!({"a": [{"href": "/1", "title": "A"}, {"href": "/2", "title": "B"}]});
        let values = extractor(Ok(payload))
            .extract(Field::Title, &encode_keywords("mouse"))
            .await
            .unwrap();
        assert_eq!(values, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn single_match_object_becomes_one_element_list() {
        let payload = json!({"img": {"src": "https://img/only.jpg"}});
        let values = extractor(Ok(payload))
            .extract(Field::Image, &encode_keywords("mouse"))
            .await
            .unwrap();
        assert_eq!(values, vec!["https://img/only.jpg"]);
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let err = extractor(Err("dns failure"))
            .extract(Field::Price, &encode_keywords("mouse"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "network error: dns failure");
    }
}
