// Core structs: MergedRecord, Field and the error types
use serde::Serialize;
use std::fmt;

/// One search hit, assembled from the same position of the three field lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedRecord {
    pub title: String,
    pub price: String,
    #[serde(rename = "imgURL")]
    pub img_url: String,
}

/// Body of a successful `/ajax` response.
#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    #[serde(rename = "amazonItems")]
    pub amazon_items: Vec<MergedRecord>,
}

/// The three attributes pulled from a search page, one remote query each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Price,
    Image,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Price => "price",
            Field::Image => "images",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("empty search query")]
    EmptyQuery,
    #[error("{field} extraction failed: {source}")]
    Field {
        field: Field,
        #[source]
        source: FetchError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid PORT value: {0}")]
    Port(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merged_record_serializes_img_url_key() {
        let record = MergedRecord {
            title: "Mouse".into(),
            price: "$9.99".into(),
            img_url: "https://img/1.jpg".into(),
        };
        let value = serde_json::to_value(AggregateResponse { amazon_items: vec![record] }).unwrap();
        assert_eq!(
            value,
            json!({"amazonItems": [
                {"title": "Mouse", "price": "$9.99", "imgURL": "https://img/1.jpg"}
            ]})
        );
    }

    #[test]
    fn aggregate_error_names_failing_field() {
        let err = AggregateError::Field {
            field: Field::Price,
            source: FetchError::Network("connection refused".into()),
        };
        assert_eq!(
            err.to_string(),
            "price extraction failed: network error: connection refused"
        );
    }

    #[test]
    fn malformed_display() {
        let err = FetchError::MalformedResponse("missing query.results".into());
        assert_eq!(err.to_string(), "malformed response: missing query.results");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
        assert_send_sync::<AggregateError>();
    }
}
