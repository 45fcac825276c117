use super::TransportError;
use crate::domain::{CheckStatusResponse, DeliveryStatus};

pub fn decode_check_status_json_response(
    json: &str,
) -> Result<CheckStatusResponse, TransportError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Object(raw) = parsed else {
        return Err(TransportError::NotAnObject);
    };

    let status = raw
        .get("status")
        .and_then(serde_json::Value::as_str)
        .map(DeliveryStatus::parse)
        .unwrap_or_default();

    Ok(CheckStatusResponse { status, raw })
}
