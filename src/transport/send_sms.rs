use serde::Deserialize;

use super::TransportError;
use crate::domain::{MessageText, RawPhoneNumber, SendSms, SendSmsResponse, TextId, WebhookUrl};

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "textId")]
    text_id: Option<TextIdValue>,
    #[serde(default, rename = "quotaRemaining")]
    quota_remaining: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
// Textbelt has returned `textId` both as a JSON string and as a bare number.
enum TextIdValue {
    String(String),
    Number(serde_json::Number),
}

impl TextIdValue {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let mut params = vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.phone().raw().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
    ];
    if let Some(webhook_url) = request.webhook_url() {
        params.push((WebhookUrl::FIELD.to_owned(), webhook_url.as_str().to_owned()));
    }
    params
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;

    Ok(SendSmsResponse {
        success: parsed.success,
        text_id: parsed
            .text_id
            .map(TextIdValue::into_string)
            .and_then(|raw| TextId::new(raw).ok()),
        quota_remaining: parsed.quota_remaining,
        error: parsed.error,
    })
}
