use std::fmt;

use crate::domain::value::TextId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery status reported by the Textbelt status endpoint.
///
/// Values outside the documented vocabulary are preserved in the raw response
/// and mapped to [`DeliveryStatus::Unknown`] here.
pub enum DeliveryStatus {
    Delivered,
    Failed,
    Pending,
    #[default]
    Unknown,
}

impl DeliveryStatus {
    /// Map a raw `status` string from the provider to a known variant.
    pub fn parse(value: &str) -> Self {
        match value {
            "delivered" | "DELIVERED" => Self::Delivered,
            "failed" | "FAILED" => Self::Failed,
            "pending" | "sent" | "SENT" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    /// Canonical lowercase representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Failed => "failed",
            Self::Pending => "pending",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Decoded body of a successful send call.
///
/// The client returns this only when `success` is true; a falsy `success` is
/// classified as an API error before the response reaches the caller.
pub struct SendSmsResponse {
    pub success: bool,
    pub text_id: Option<TextId>,
    pub quota_remaining: Option<u64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Decoded body of a status poll.
///
/// `raw` preserves the full JSON object exactly as the provider returned it.
pub struct CheckStatusResponse {
    pub status: DeliveryStatus,
    pub raw: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_status_parses_known_values() {
        assert_eq!(DeliveryStatus::parse("delivered"), DeliveryStatus::Delivered);
        assert_eq!(DeliveryStatus::parse("DELIVERED"), DeliveryStatus::Delivered);
        assert_eq!(DeliveryStatus::parse("failed"), DeliveryStatus::Failed);
        assert_eq!(DeliveryStatus::parse("pending"), DeliveryStatus::Pending);
        assert_eq!(DeliveryStatus::parse("sent"), DeliveryStatus::Pending);
        assert_eq!(DeliveryStatus::parse("unknown"), DeliveryStatus::Unknown);
        assert_eq!(DeliveryStatus::parse("whatever"), DeliveryStatus::Unknown);
    }

    #[test]
    fn delivery_status_displays_lowercase() {
        assert_eq!(DeliveryStatus::Delivered.to_string(), "delivered");
        assert_eq!(DeliveryStatus::default().to_string(), "unknown");
    }
}
