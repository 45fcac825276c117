use crate::domain::value::{MessageText, RawPhoneNumber, TextId, WebhookUrl};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A request to send one SMS message through Textbelt.
///
/// Recipient and message non-emptiness are enforced by the domain constructors,
/// so a `SendSms` value is always sendable.
pub struct SendSms {
    phone: RawPhoneNumber,
    message: MessageText,
    webhook_url: Option<WebhookUrl>,
}

impl SendSms {
    /// Create a send request without a reply webhook.
    pub fn new(phone: RawPhoneNumber, message: MessageText) -> Self {
        Self {
            phone,
            message,
            webhook_url: None,
        }
    }

    /// Attach a reply webhook URL; Textbelt will POST inbound replies to it.
    pub fn with_webhook_url(mut self, webhook_url: WebhookUrl) -> Self {
        self.webhook_url = Some(webhook_url);
        self
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn webhook_url(&self) -> Option<&WebhookUrl> {
        self.webhook_url.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A request to poll delivery status for a previously sent message.
pub struct CheckStatus {
    text_id: TextId,
}

impl CheckStatus {
    /// Create a status query for one text id.
    pub fn new(text_id: TextId) -> Self {
        Self { text_id }
    }

    pub fn text_id(&self) -> &TextId {
        &self.text_id
    }
}
