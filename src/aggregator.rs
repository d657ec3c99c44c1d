use crate::extractor::FieldExtractor;
use crate::extractor::query::QueryBuilder;
use crate::model::{AggregateError, Field, MergedRecord};
use crate::normalizer::{EncodedKeywords, encode_keywords};
use crate::scraper::Fetcher;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the title, price and image extractors concurrently and merges their
/// lists into records.
pub struct Aggregator {
    extractor: FieldExtractor,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn Fetcher>, queries: QueryBuilder) -> Self {
        Self {
            extractor: FieldExtractor::new(fetcher, queries),
        }
    }

    /// All three extractions must succeed. The first failure is returned as
    /// soon as it happens and the other in-flight requests are dropped.
    pub async fn aggregate(&self, keywords: &str) -> Result<Vec<MergedRecord>, AggregateError> {
        let encoded = encode_keywords(keywords);
        if encoded.is_empty() {
            return Err(AggregateError::EmptyQuery);
        }

        let (titles, prices, images) = futures::try_join!(
            self.extract(Field::Title, &encoded),
            self.extract(Field::Price, &encoded),
            self.extract(Field::Image, &encoded),
        )?;

        if titles.len() != prices.len() || prices.len() != images.len() {
            warn!(
                "⚠️ Field lists differ in length for '{}': titles={} prices={} images={}",
                encoded.as_str(),
                titles.len(),
                prices.len(),
                images.len()
            );
        }

        let records = zip_records(titles, prices, images);
        info!("Aggregated {} items for '{}'", records.len(), encoded.as_str());
        Ok(records)
    }

    async fn extract(
        &self,
        field: Field,
        keywords: &EncodedKeywords,
    ) -> Result<Vec<String>, AggregateError> {
        self.extractor
            .extract(field, keywords)
            .await
            .map_err(|source| {
                warn!("❌ {} extraction failed: {}", field, source);
                AggregateError::Field { field, source }
            })
    }
}

/// Positional zip; the result is as long as the shortest input.
pub fn zip_records(
    titles: Vec<String>,
    prices: Vec<String>,
    images: Vec<String>,
) -> Vec<MergedRecord> {
    titles
        .into_iter()
        .zip(prices)
        .zip(images)
        .map(|((title, price), img_url)| MergedRecord {
            title,
            price,
            img_url,
        })
        .collect()
}
