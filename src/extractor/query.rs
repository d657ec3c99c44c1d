use crate::config::AppConfig;
use crate::model::Field;
use crate::normalizer::EncodedKeywords;
use urlencoding::encode;

const TABLES_ENV: &str = "store://datatables.org/alltableswithkeys";

/// Builds extraction-service URLs of the form
/// `select <column> from html(<offset>,<limit>) where url='<search page>' and xpath='<xpath>'`.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    endpoint: String,
    search_url: String,
    offset: u32,
    limit: u32,
}

impl QueryBuilder {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            endpoint: config.extraction_endpoint.clone(),
            search_url: config.search_url.clone(),
            offset: config.result_offset,
            limit: config.result_limit,
        }
    }

    pub fn url_for(&self, field: Field, keywords: &EncodedKeywords) -> String {
        let spec = field.spec();
        let head = format!(
            "select {} from html({},{}) where url='{}",
            spec.column, self.offset, self.limit, self.search_url
        );
        let tail = format!("' and compat='html5' and xpath='{}'", spec.xpath);

        // The keywords are already encoded, so they go in between the encoded halves as-is.
        format!(
            "{}?q={}{}{}&format=json&env={}",
            self.endpoint,
            encode(&head),
            keywords.as_str(),
            encode(&tail),
            encode(TABLES_ENV)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::encode_keywords;

    fn decoded_statement(url: &str) -> String {
        let q = url
            .split_once("?q=")
            .and_then(|(_, rest)| rest.split_once("&format="))
            .map(|(q, _)| q)
            .unwrap();
        urlencoding::decode(q).unwrap().into_owned()
    }

    #[test]
    fn title_url_embeds_keywords_and_xpath() {
        let builder = QueryBuilder::from_config(&AppConfig::default());
        let url = builder.url_for(Field::Title, &encode_keywords("  wireless   mouse "));

        let prefix = "https://query.yahooapis.com/v1/public/yql?q=";
        assert!(url.starts_with(&format!("{prefix}select%20title%20from%20html%280%2C10%29")));
        assert!(url.contains("search-alias%253Daps%26field-keywords%3Dwireless%2Bmouse%27"));
        assert!(url.ends_with("&format=json&env=store%3A%2F%2Fdatatables.org%2Falltableswithkeys"));

        let statement = decoded_statement(&url);
        assert!(statement.contains("field-keywords=wireless+mouse' and compat='html5'"));
        assert!(statement.ends_with(&format!("xpath='{}'", Field::Title.spec().xpath)));
    }

    #[test]
    fn each_field_selects_its_own_column() {
        let builder = QueryBuilder::from_config(&AppConfig::default());
        let keywords = encode_keywords("desk lamp");

        let price = decoded_statement(&builder.url_for(Field::Price, &keywords));
        let image = decoded_statement(&builder.url_for(Field::Image, &keywords));
        assert!(price.starts_with("select content from"));
        assert!(image.starts_with("select src from"));
    }

    #[test]
    fn window_and_endpoint_come_from_config() {
        let config = AppConfig {
            extraction_endpoint: "http://127.0.0.1:9999/yql".into(),
            result_offset: 10,
            result_limit: 20,
            ..AppConfig::default()
        };
        let url = QueryBuilder::from_config(&config).url_for(Field::Image, &encode_keywords("mug"));

        assert!(url.starts_with("http://127.0.0.1:9999/yql?q="));
        assert!(decoded_statement(&url).contains("from html(10,20) where"));
    }
}
