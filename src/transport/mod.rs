//! Transport layer: wire-format details (form encoding and JSON decoding).

mod check_status;
mod send_sms;

pub use check_status::decode_check_status_json_response;
pub use send_sms::{decode_send_sms_json_response, encode_send_sms_form};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,
}
