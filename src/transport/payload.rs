use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a response body that must be a JSON object.
///
/// Field-level checks are left to the response models.
pub fn decode_object(json: &str) -> Result<Map<String, Value>, TransportError> {
    Ok(serde_json::from_str(json)?)
}
