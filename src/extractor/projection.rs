use crate::extractor::FieldSpec;
use serde_json::Value;

/// Turns a `query.results` payload into the ordered list of values for one field.
///
/// The service answers a single match with a bare object instead of a
/// one-element array; both shapes are accepted here. Nodes missing the
/// attribute yield an empty string so that positions stay aligned with the
/// other fields.
pub fn project(spec: &FieldSpec, payload: Value) -> Vec<String> {
    let nodes = match payload {
        Value::Object(mut map) => map.remove(spec.payload_key).unwrap_or(Value::Null),
        _ => Value::Null,
    };

    match nodes {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| node_text(item, spec.attribute))
            .collect(),
        single => vec![node_text(&single, spec.attribute)],
    }
}

fn node_text(node: &Value, attribute: &str) -> String {
    match node {
        Value::Object(map) => map.get(attribute).map(scalar_text).unwrap_or_default(),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
