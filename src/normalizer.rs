// Keyword normalization: "  wireless   mouse " -> "wireless+mouse" -> "wireless%2Bmouse"

/// Search keywords after whitespace collapsing and percent-encoding,
/// ready to be spliced into an already-encoded query URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeywords(String);

impl EncodedKeywords {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Trims the input and joins its whitespace-separated words with `+`.
pub fn normalize_keywords(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("+")
}

pub fn encode_keywords(raw: &str) -> EncodedKeywords {
    EncodedKeywords(urlencoding::encode(&normalize_keywords(raw)).into_owned())
}
